//! Site configuration.
//!
//! The shipped `site.toml` is embedded at compile time; there is no runtime
//! file lookup in the browser.

use serde::Deserialize;

use crate::error::Result;

/// Raw contents of the shipped `site.toml`.
pub const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub routes: RoutesConfig,
    pub contact: ContactConfig,
    /// Year printed in the footer copyright line
    pub copyright_year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
    /// Path of the logo image, resolved by the static host
    pub logo: String,
}

/// Route targets owned by the external router (login/signup app).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutesConfig {
    pub login: String,
    pub signup: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            routes: RoutesConfig::default(),
            contact: ContactConfig::default(),
            copyright_year: 2025,
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Callwell".into(),
            tagline: "The AI receptionist that never misses a call.".into(),
            logo: "/assets/callwell-logo.svg".into(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: "/login".into(),
            signup: "/signup".into(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@callwell.ai".into(),
            phone: "+1 (415) 555-0134".into(),
        }
    }
}

impl SiteConfig {
    /// Parse the embedded `site.toml`.
    pub fn load() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Missing keys fall back to defaults; unknown or mis-scoped keys are
    /// rejected.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(brand = %config.brand.name, "site configuration loaded");
        Ok(config)
    }

    /// `mailto:` link for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = SiteConfig::load().expect("embedded config parses");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[routes]
signup = "/start"
"#,
        )
        .expect("partial config parses");

        assert_eq!(config.routes.signup, "/start");
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.brand.name, "Callwell");
    }

    #[test]
    fn malformed_config_is_a_config_error() {
        let err = SiteConfig::from_toml_str("[brand\nname = ").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().starts_with("invalid site configuration"));
    }

    #[test]
    fn embedded_copyright_year_is_read_from_the_file() {
        let edited = EMBEDDED_CONFIG.replace("copyright_year = 2025", "copyright_year = 2031");
        assert_ne!(edited, EMBEDDED_CONFIG);

        let config = SiteConfig::from_toml_str(&edited).expect("edited config parses");
        assert_eq!(config.copyright_year, 2031);
    }

    #[test]
    fn key_under_the_wrong_table_is_rejected() {
        let err = SiteConfig::from_toml_str(
            r#"
[contact]
email = "hi@example.com"
copyright_year = 2031
"#,
        )
        .unwrap_err();

        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().contains("copyright_year"));
    }

    #[test]
    fn mailto_uses_contact_email() {
        let config = SiteConfig::default();
        assert_eq!(config.mailto(), "mailto:hello@callwell.ai");
    }
}
