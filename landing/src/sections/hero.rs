use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-content">
                    <p class="hero-badge">"Design & engineering studio"</p>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">"Transforming brands,"</span>
                        <br />
                        "one pixel at a time."
                    </h1>
                    <p class="hero-description">
                        "Identity systems, product design and fast websites for teams that care about the details. "
                        "Precision, performance and a little bit of magic."
                    </p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary">"Start a project"</a>
                        <a href="#portfolio" class="btn btn-secondary">"See our work →"</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <img src="assets/hero-collage.svg" alt="Selected Pixify projects" loading="lazy" />
                </div>
            </div>
        </section>
    }
}
