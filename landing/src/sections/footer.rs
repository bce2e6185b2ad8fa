use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="logo-mark">"P"</span>
                    <span class="footer-title">"Pixify"</span>
                </div>
                <div class="footer-links">
                    <a href="#services" class="footer-link">"Services"</a>
                    <a href="#portfolio" class="footer-link">"Work"</a>
                    <a href="#pricing" class="footer-link">"Pricing"</a>
                    <a href="https://dribbble.com/pixify" target="_blank" class="footer-link">"Dribbble"</a>
                </div>
                <p class="footer-copyright">"© 2025 Pixify Studio"</p>
            </div>
        </footer>
    }
}
