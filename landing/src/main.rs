// Pixify landing page - Leptos 0.8 CSR

mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <PageMotion />
        <Nav />
        <main>
            <Hero />
            <Services />
            <Portfolio />
            <TechStack />
            <Testimonials />
            <Pricing />
            <Contact />
        </main>
        <Footer />
    }
}
