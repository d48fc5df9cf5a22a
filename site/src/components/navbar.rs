use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::icons::{ICON_CLOSE, ICON_LIST, Icon};
use crate::config::{BrandConfig, RoutesConfig};
use crate::content::NAV_LINKS;

/// Top navigation bar: in-page anchors plus login / signup routes.
///
/// The only state is the mobile menu toggle, which closes again when any
/// anchor is followed.
#[component]
pub fn Navbar(brand: BrandConfig, routes: RoutesConfig) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class="nav">
            <div class="nav-inner container">
                <a href="/" class="nav-brand">
                    <img class="nav-logo" src=brand.logo alt="" />
                    <span class="nav-title">{brand.name}</span>
                </a>

                <button
                    class="nav-menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon path=ICON_CLOSE size="24" /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_LIST size="24" /> }.into_any()
                        }
                    }}
                </button>

                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="nav-link" on:click=close_menu>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=routes.login class="nav-link nav-login">"Log in"</a>
                    <Button href=routes.signup variant=ButtonVariant::Primary>
                        "Get started"
                    </Button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn links_sections_and_routes() {
        let html = view! {
            <Navbar brand=BrandConfig::default() routes=RoutesConfig::default() />
        }
        .to_html();

        for anchor in ["#features", "#how-it-works", "#pricing", "#testimonials"] {
            assert!(html.contains(&format!(r#"href="{anchor}""#)), "missing {anchor}");
        }
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/signup""#));
        assert!(html.contains("Callwell"));
    }

    #[test]
    fn menu_starts_closed() {
        let html = view! {
            <Navbar brand=BrandConfig::default() routes=RoutesConfig::default() />
        }
        .to_html();

        assert!(html.contains(r#"class="nav-links""#));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn routes_follow_config() {
        let routes = RoutesConfig {
            login: "/app/login".into(),
            signup: "/app/join".into(),
        };
        let html = view! { <Navbar brand=BrandConfig::default() routes=routes /> }.to_html();
        assert!(html.contains(r#"href="/app/login""#));
        assert!(html.contains(r#"href="/app/join""#));
    }
}
