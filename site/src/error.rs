//! Error type shared by every fallible render path.

use thiserror::Error;

/// Failures that can surface while assembling the page.
///
/// All of them end up in an [`crate::boundary::ErrorBoundary`] fallback.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The embedded `site.toml` could not be parsed.
    #[error("invalid site configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A literal content table broke one of its invariants.
    #[error("invalid {section} content: {reason}")]
    Content {
        section: &'static str,
        reason: String,
    },

    /// A component refused to render.
    #[error("{component} failed to render: {reason}")]
    Render {
        component: &'static str,
        reason: String,
    },
}

impl SiteError {
    pub fn content(section: &'static str, reason: impl Into<String>) -> Self {
        Self::Content {
            section,
            reason: reason.into(),
        }
    }

    pub fn render(component: &'static str, reason: impl Into<String>) -> Self {
        Self::Render {
            component,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_error_names_section() {
        let err = SiteError::content("pricing", "no plans");
        assert_eq!(err.to_string(), "invalid pricing content: no plans");
    }

    #[test]
    fn render_error_names_component() {
        let err = SiteError::render("Hero", "missing screenshot");
        assert_eq!(err.to_string(), "Hero failed to render: missing screenshot");
    }
}
