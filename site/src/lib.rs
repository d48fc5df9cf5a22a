//! # callwell-site
//!
//! Leptos components for the Callwell landing page: the marketing sections,
//! the Monthly/Annual pricing toggle and a latching error boundary.
//!
//! The same components serve two builds:
//!
//! - **CSR** (`csr` feature): the `landing` binary mounts [`App`] into
//!   `<body>`; the pricing toggle and mobile menu become interactive.
//! - **Static prerender**: [`render_page`] renders the whole document to an
//!   HTML string with Leptos' `RenderHtml`.
//!
//! ## Quick Start
//!
//! ```rust
//! use site::{render_page, SiteConfig};
//!
//! let config = SiteConfig::load().expect("embedded config");
//! let html = render_page(&config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content descriptors
//! - [`content`] - the literal tables plus invariant checks
//! - [`pricing`] - billing period and derived prices
//! - [`boundary`] - Healthy/Failed error boundary
//! - [`components`] - Leptos UI components
//! - [`config`] - embedded `site.toml`
//! - [`styles`] - CSS constants

pub mod boundary;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pricing;
pub mod styles;
pub mod types;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use boundary::{Boundary, BoundaryState, ErrorBoundary};
pub use components::{App, LandingDocument, Page};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use pricing::BillingPeriod;

/// Render the complete landing page as an HTML document.
///
/// Content and configuration failures render the error fallback instead of
/// the page, exactly as in the browser.
pub fn render_page(config: &SiteConfig) -> String {
    let doc = view! { <LandingDocument config=config.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_full_document() {
        let html = render_page(&SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Callwell | "));
        assert!(html.contains(".logo-track"));
        assert!(!html.contains("Something went wrong"));
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = render_page(&SiteConfig::default());

        let order = [
            r#"class="nav""#,
            r#"class="hero""#,
            r#"class="social-proof""#,
            r#"id="features""#,
            r#"id="how-it-works""#,
            r#"id="pricing""#,
            r#"id="testimonials""#,
            r#"class="final-cta""#,
            r#"class="footer""#,
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn prerender_starts_monthly() {
        let html = render_page(&SiteConfig::default());
        assert!(html.contains("$49"));
        assert!(html.contains("$149"));
        assert!(!html.contains(r#"class="plan-billed""#));
        assert!(!html.contains("yearly"));
    }

    #[test]
    fn config_routes_reach_the_page() {
        let mut config = SiteConfig::default();
        config.routes.signup = "/join".into();
        config.brand.name = "Ringo".into();

        let html = render_page(&config);
        assert!(html.contains(r#"href="/join""#));
        assert!(html.contains(r#"href="/join?plan=starter""#));
        assert!(html.contains("© 2025 Ringo."));
    }

    #[test]
    fn landing_renders_from_embedded_config() {
        let html = components::render_landing()
            .expect("shipped page renders")
            .to_html();
        assert!(html.contains(r#"id="pricing""#));
    }
}
