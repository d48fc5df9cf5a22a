//! Page assembly and the top-level entry components.

use leptos::prelude::*;

use super::{
    Features, FinalCta, Footer, Hero, HowItWorks, Navbar, Pricing, SocialProof, Testimonials,
};
use crate::boundary::ErrorBoundary;
use crate::config::SiteConfig;
use crate::content;
use crate::error::{Result, SiteError};
use crate::styles::SITE_CSS;

/// All sections in their fixed order.
#[component]
pub fn Page(config: SiteConfig) -> impl IntoView {
    let signup = config.routes.signup.clone();
    let mailto = config.mailto();

    view! {
        <Navbar brand=config.brand.clone() routes=config.routes.clone() />
        <main>
            <Hero tagline=config.brand.tagline.clone() signup=signup.clone() />
            <SocialProof />
            <Features />
            <HowItWorks />
            <Pricing signup=signup.clone() />
            <Testimonials />
            <FinalCta signup=signup mailto=mailto />
        </main>
        <Footer config=config />
    }
}

/// Load configuration, check the content tables and build the page.
///
/// Any error here ends up in the page-level [`ErrorBoundary`] fallback.
pub fn render_landing() -> Result<AnyView> {
    let config = SiteConfig::load()?;
    assemble(config)
}

fn assemble(config: SiteConfig) -> Result<AnyView> {
    content::validate()?;
    check_config(&config)?;
    Ok(view! { <Page config=config /> }.into_any())
}

/// Config values the sections cannot render without.
fn check_config(config: &SiteConfig) -> Result<()> {
    if config.brand.name.trim().is_empty() {
        return Err(SiteError::render("Navbar", "brand name is empty"));
    }
    if config.routes.signup.trim().is_empty() {
        return Err(SiteError::render("Pricing", "signup route is empty"));
    }
    Ok(())
}

/// Client-side root, mounted into `<body>` by the landing binary.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>{SITE_CSS}</style>
        <ErrorBoundary label="page" render=render_landing />
    }
}

/// Complete HTML document for static prerendering.
#[component]
pub fn LandingDocument(config: SiteConfig) -> impl IntoView {
    let title = format!("{} | {}", config.brand.name, config.brand.tagline);
    let description = config.brand.tagline.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <ErrorBoundary label="page" render=move || assemble(config.clone()) />
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn default_config_assembles() {
        assert!(assemble(SiteConfig::default()).is_ok());
    }

    #[test]
    fn empty_brand_name_is_a_render_error() {
        let mut config = SiteConfig::default();
        config.brand.name = "  ".into();

        let err = check_config(&config).unwrap_err();
        assert!(matches!(err, SiteError::Render { component: "Navbar", .. }));
    }

    #[test]
    fn empty_signup_route_shows_fallback() {
        let mut config = SiteConfig::default();
        config.routes.signup = String::new();

        let html = view! { <LandingDocument config=config /> }.to_html();
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("Pricing failed to render: signup route is empty"));
        assert!(!html.contains(r#"id="pricing""#));
    }
}
