// Landing page sections

mod contact;
mod footer;
mod hero;
mod motion;
mod nav;
mod portfolio;
mod pricing;
mod services;
mod tech;
mod testimonials;

pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use motion::PageMotion;
pub use nav::Nav;
pub use portfolio::Portfolio;
pub use pricing::Pricing;
pub use services::Services;
pub use tech::TechStack;
pub use testimonials::Testimonials;
