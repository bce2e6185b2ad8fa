use leptos::prelude::*;

const CATEGORIES: &[(&str, &[&str])] = &[
    ("Design", &["Figma", "Framer", "After Effects"]),
    ("Frontend", &["Rust + WASM", "Leptos", "TypeScript"]),
    ("Backend", &["Axum", "PostgreSQL", "Redis"]),
    ("Ops", &["Cloudflare", "GitHub Actions", "Plausible"]),
];

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id="tech" class="tech">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Stack"</p>
                    <h2 class="section-title">"Tools we trust in production"</h2>
                </div>
                <div class="tech-grid">
                    {CATEGORIES
                        .iter()
                        .map(|(name, tools)| view! {
                            <div class="tech-category">
                                <h3 class="tech-title">{*name}</h3>
                                <ul class="tech-list">
                                    {tools.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
