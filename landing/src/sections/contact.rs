use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Contact"</p>
                    <h2 class="section-title">"Let's build something sharp"</h2>
                    <p class="section-description">
                        "Tell us about your project and we will get back within one business day."
                    </p>
                </div>
                <div class="contact-grid">
                    <a href="mailto:hello@pixify.studio" class="feature-card contact-card">
                        <h3>"Email"</h3>
                        <p>"hello@pixify.studio"</p>
                    </a>
                    <a href="https://cal.com/pixify" target="_blank" class="feature-card contact-card">
                        <h3>"Book a call"</h3>
                        <p>"30 minutes, no slides"</p>
                    </a>
                </div>
            </div>
        </section>
    }
}
