use leptos::prelude::*;

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Pricing"</p>
                    <h2 class="section-title">"Clear scopes, fixed prices"</h2>
                </div>
                <div class="pricing-grid">
                    <PricingCard
                        name="Launch"
                        price="€4,900"
                        info="Landing page + brand starter kit"
                        features=&["One-page site", "Logo & palette", "Two revision rounds"]
                    />
                    <PricingCard
                        name="Scale"
                        price="€12,000"
                        info="Full identity and marketing site"
                        features=&["Up to 8 pages", "Design system", "CMS integration", "Launch support"]
                    />
                    <PricingCard
                        name="Product"
                        price="€24,000"
                        info="Product UI and front-end build"
                        features=&["App design", "Component library", "WASM front end", "Performance budget"]
                    />
                </div>
                <div class="custom-plan-card">
                    <div class="custom-icon">"✦"</div>
                    <div class="custom-body">
                        <h3>"Need something custom?"</h3>
                        <p>"Retainers, audits and embedded designers, shaped around your roadmap."</p>
                        <ul class="custom-features">
                            <li class="feature-item">"Dedicated team"</li>
                            <li class="feature-item">"Weekly demos"</li>
                            <li class="feature-item">"Shared Slack channel"</li>
                            <li class="feature-item">"Cancel anytime"</li>
                        </ul>
                        <a href="#contact" class="btn btn-secondary">"Talk to us"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    info: &'static str,
    features: &'static [&'static str],
) -> impl IntoView {
    view! {
        <article class="pricing-card">
            <h3 class="pricing-name">{name}</h3>
            <div class="pricing-info">
                <span class="pricing-price">{price}</span>
                <p class="pricing-summary">{info}</p>
            </div>
            <ul class="pricing-features">
                {features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            <a href="#contact" class="btn btn-primary">"Get started"</a>
        </article>
    }
}
