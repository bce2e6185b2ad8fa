use leptos::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#portfolio", "Work"),
    ("#tech", "Stack"),
    ("#testimonials", "Clients"),
    ("#pricing", "Pricing"),
    ("#contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    // Marker classes and hamburger bars are driven by page-motion, not by signals
    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    <span class="logo-mark">"P"</span>
                    <span class="logo-text">"Pixify"</span>
                </a>
                <ul class="nav-menu">
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <li class="nav-item">
                                <a href=*href class="nav-link">{*label}</a>
                            </li>
                        })
                        .collect_view()}
                </ul>
                <button class="nav-toggle" aria-label="Toggle navigation">
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
