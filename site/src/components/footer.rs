use leptos::prelude::*;

use super::social_button::SocialButton;
use crate::config::SiteConfig;
use crate::content::{FOOTER_GROUPS, SOCIAL_LINKS};

#[component]
pub fn Footer(config: SiteConfig) -> impl IntoView {
    let copyright = format!(
        "© {} {}. All rights reserved.",
        config.copyright_year, config.brand.name
    );
    let mailto = config.mailto();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img class="footer-logo" src=config.brand.logo alt="" />
                    <span class="footer-title">{config.brand.name}</span>
                    <p class="footer-tagline">{config.brand.tagline}</p>
                    <a class="footer-contact" href=mailto>{config.contact.email}</a>
                    <span class="footer-contact">{config.contact.phone}</span>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| view! { <SocialButton link=*link /> })
                            .collect_view()}
                    </div>
                </div>
                {FOOTER_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="footer-group">
                                <h4 class="footer-group-title">{group.title}</h4>
                                <ul class="footer-links">
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <li>
                                                    <a class="footer-link" href=link.href>{link.label}</a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="footer-copyright">{copyright}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        view! { <Footer config=SiteConfig::default() /> }.to_html()
    }

    #[test]
    fn renders_three_categories_of_five_links() {
        let html = render();
        assert_eq!(html.matches(r#"class="footer-group""#).count(), 3);
        assert_eq!(html.matches(r#"class="footer-link""#).count(), 15);

        let product = html.find(">Product<").expect("Product heading");
        let company = html.find(">Company<").expect("Company heading");
        let legal = html.find(">Legal<").expect("Legal heading");
        assert!(product < company && company < legal);
    }

    #[test]
    fn renders_social_buttons_and_copyright() {
        let html = render();
        assert_eq!(
            html.matches(r#"class="social-button""#).count(),
            SOCIAL_LINKS.len()
        );
        assert!(html.contains("© 2025 Callwell. All rights reserved."));
        assert!(html.contains(r#"href="mailto:hello@callwell.ai""#));
    }
}
