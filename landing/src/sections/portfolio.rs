use leptos::prelude::*;

struct Project {
    title: &'static str,
    category: &'static str,
    image: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Northwind Coffee",
        category: "Brand Identity",
        image: "assets/work/northwind.svg",
    },
    Project {
        title: "Ledgerly",
        category: "Product UI",
        image: "assets/work/ledgerly.svg",
    },
    Project {
        title: "Atlas Outdoor",
        category: "E-commerce",
        image: "assets/work/atlas.svg",
    },
    Project {
        title: "Helio Energy",
        category: "Web Design",
        image: "assets/work/helio.svg",
    },
];

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Selected work"</p>
                    <h2 class="section-title">"Pixels we are proud of"</h2>
                </div>
                <div class="portfolio-grid">
                    {PROJECTS
                        .iter()
                        .map(|p| view! {
                            <article class="portfolio-card">
                                <img src=p.image alt=p.title loading="lazy" />
                                <div class="portfolio-overlay">
                                    <span class="portfolio-category">{p.category}</span>
                                    <h3 class="portfolio-title">{p.title}</h3>
                                </div>
                            </article>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
