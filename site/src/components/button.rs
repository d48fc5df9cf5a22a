//! Link-styled call-to-action button.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Ghost => "btn-ghost",
        }
    }
}

/// Anchor rendered as a button. Navigation is left to the browser.
#[component]
pub fn Button(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    /// Larger padding for hero / CTA placements
    #[prop(optional)]
    large: bool,
    children: Children,
) -> impl IntoView {
    let class = if large {
        format!("btn {} btn-lg", variant.class())
    } else {
        format!("btn {}", variant.class())
    };

    view! {
        <a href=href class=class>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn defaults_to_primary() {
        let html = view! { <Button href="/signup">"Start"</Button> }.to_html();
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(html.contains(r#"href="/signup""#));
        assert!(html.contains("Start"));
    }

    #[test]
    fn large_ghost_variant() {
        let html = view! {
            <Button href="#pricing" variant=ButtonVariant::Ghost large=true>"Plans"</Button>
        }
        .to_html();
        assert!(html.contains(r#"class="btn btn-ghost btn-lg""#));
    }
}
