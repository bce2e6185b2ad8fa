use leptos::prelude::*;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Services"</p>
                    <h2 class="section-title">"Everything your brand needs to ship"</h2>
                    <p class="section-description">
                        "From the first sketch to the production deploy, one team owns the whole journey."
                    </p>
                </div>
                <div class="services-grid">
                    <ServiceCard
                        icon="◆"
                        title="Brand Identity"
                        description="Logos, type systems and guidelines that hold up from favicon to billboard."
                    />
                    <ServiceCard
                        icon="▲"
                        title="Web Design"
                        description="Responsive marketing sites designed around conversion, not decoration."
                    />
                    <ServiceCard
                        icon="●"
                        title="Product UI"
                        description="Design systems and app interfaces your engineers will actually enjoy building."
                    />
                    <ServiceCard
                        icon="■"
                        title="Development"
                        description="Fast, accessible front ends with a Lighthouse score we are happy to show you."
                    />
                    <ServiceCard
                        icon="✦"
                        title="Motion"
                        description="Micro-interactions and launch videos that make the product feel alive."
                    />
                    <ServiceCard
                        icon="✚"
                        title="Growth Audits"
                        description="Analytics reviews and A/B roadmaps that turn traffic into pipeline."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="service-card">
            <div class="service-icon">{icon}</div>
            <h3 class="service-title">{title}</h3>
            <p class="service-description">{description}</p>
        </article>
    }
}
