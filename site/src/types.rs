//! Content descriptors for the landing page sections.
//!
//! Every descriptor is `Copy` and built from `&'static str` so the literal
//! tables in [`crate::content`] can be plain `const` arrays.

/// A feature card in the Features section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// SVG path data for the card icon
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// CSS gradient class applied to the icon badge
    pub gradient: &'static str,
}

/// A numbered step in the How It Works section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A pricing plan. Prices are whole dollars per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub monthly_price: u32,
    /// Per-month price when billed annually
    pub annual_price: u32,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
    pub gradient: &'static str,
}

/// Single footer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

/// Partner logo shown in the social proof strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

/// A video walkthrough linked from How It Works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tutorial {
    pub title: &'static str,
    pub description: &'static str,
    /// Display duration, e.g. `"4:12"`
    pub duration: &'static str,
    /// Thumbnail image; `None` renders the play-icon placeholder
    pub thumbnail: Option<&'static str>,
    pub href: &'static str,
}

/// In-page navigation anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Social networks with a footer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    X,
    LinkedIn,
    GitHub,
    YouTube,
}

impl SocialNetwork {
    /// Human-readable name, also used as the button's accessible label.
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::YouTube => "YouTube",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: &'static str,
}
