use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Clients"</p>
                    <h2 class="section-title">"Don't take our word for it"</h2>
                </div>
                <div class="testimonials-grid">
                    <TestimonialCard
                        quote="They rebuilt our brand and our site in six weeks. Sign-ups doubled the month after launch."
                        author="Maya Okafor"
                        role="CEO, Ledgerly"
                    />
                    <TestimonialCard
                        quote="The only agency that asked about our page weight before asking about our mood board."
                        author="Jonas Brandt"
                        role="CTO, Atlas Outdoor"
                    />
                    <TestimonialCard
                        quote="Sharp, fast, and honest about trade-offs. We keep coming back."
                        author="Lena Ruiz"
                        role="Head of Marketing, Helio Energy"
                    />
                </div>
                <div class="testimonials-stats">
                    <div class="stat-item">
                        <span class="stat-number">"120+"</span>
                        <span class="stat-label">"Projects shipped"</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">"98%"</span>
                        <span class="stat-label">"Client retention"</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">"4.9"</span>
                        <span class="stat-label">"Average rating"</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">"12"</span>
                        <span class="stat-label">"Design awards"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(quote: &'static str, author: &'static str, role: &'static str) -> impl IntoView {
    view! {
        <figure class="testimonial-card">
            <blockquote class="testimonial-quote">{quote}</blockquote>
            <figcaption class="testimonial-author">
                <strong>{author}</strong>
                <span>{role}</span>
            </figcaption>
        </figure>
    }
}
