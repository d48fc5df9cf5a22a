//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! App / LandingDocument
//! └── ErrorBoundary (label = "page")
//!     └── Page
//!         ├── Navbar
//!         ├── main
//!         │   ├── Hero
//!         │   ├── SocialProof
//!         │   ├── Features
//!         │   ├── HowItWorks ── TutorialCard
//!         │   ├── Pricing ── PlanGrid
//!         │   ├── Testimonials
//!         │   └── FinalCta
//!         └── Footer ── SocialButton
//! ```

mod button;
mod features;
mod final_cta;
mod footer;
mod hero;
mod how_it_works;
pub mod icons;
mod navbar;
mod page;
mod pricing;
mod social_button;
mod social_proof;
mod testimonials;
mod tutorial_card;

pub use button::{Button, ButtonVariant};
pub use features::Features;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use icons::Icon;
pub use navbar::Navbar;
pub use page::{App, LandingDocument, Page, render_landing};
pub use pricing::{PlanGrid, Pricing};
pub use social_button::SocialButton;
pub use social_proof::SocialProof;
pub use testimonials::Testimonials;
pub use tutorial_card::TutorialCard;
