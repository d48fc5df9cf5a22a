use leptos::prelude::*;

use super::icons::{ICON_GITHUB_LOGO, ICON_LINKEDIN_LOGO, ICON_X_LOGO, ICON_YOUTUBE_LOGO, Icon};
use crate::types::{SocialLink, SocialNetwork};

fn icon_for(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::X => ICON_X_LOGO,
        SocialNetwork::LinkedIn => ICON_LINKEDIN_LOGO,
        SocialNetwork::GitHub => ICON_GITHUB_LOGO,
        SocialNetwork::YouTube => ICON_YOUTUBE_LOGO,
    }
}

/// Round icon button linking to a social profile.
#[component]
pub fn SocialButton(link: SocialLink) -> impl IntoView {
    let label = link.network.label();
    view! {
        <a
            href=link.href
            class="social-button"
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            title=label
        >
            <Icon path=icon_for(link.network) size="18" />
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn labels_the_network() {
        let link = SocialLink {
            network: SocialNetwork::LinkedIn,
            href: "https://linkedin.com/company/callwell",
        };
        let html = view! { <SocialButton link=link /> }.to_html();
        assert!(html.contains(r#"aria-label="LinkedIn""#));
        assert!(html.contains("https://linkedin.com/company/callwell"));
        assert!(html.contains(ICON_LINKEDIN_LOGO));
    }
}
