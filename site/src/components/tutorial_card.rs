use leptos::prelude::*;

use super::icons::{ICON_PLAY, Icon};
use crate::types::Tutorial;

/// Video tutorial teaser.
///
/// Shows the thumbnail when one is supplied, otherwise a play-icon
/// placeholder. Never both.
#[component]
pub fn TutorialCard(tutorial: Tutorial) -> impl IntoView {
    let media = match tutorial.thumbnail {
        Some(src) => view! {
            <img class="tutorial-thumbnail" src=src alt=tutorial.title loading="lazy" />
        }
        .into_any(),
        None => view! {
            <div class="tutorial-placeholder">
                <Icon path=ICON_PLAY size="32" />
            </div>
        }
        .into_any(),
    };

    view! {
        <a class="tutorial-card" href=tutorial.href target="_blank" rel="noopener noreferrer">
            <div class="tutorial-media">
                {media}
                <span class="tutorial-duration">{tutorial.duration}</span>
            </div>
            <div class="tutorial-body">
                <h4 class="tutorial-title">{tutorial.title}</h4>
                <p class="tutorial-description">{tutorial.description}</p>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn tutorial(thumbnail: Option<&'static str>) -> Tutorial {
        Tutorial {
            title: "Forwarding your number",
            description: "Carrier-specific steps.",
            duration: "3:05",
            thumbnail,
            href: "https://youtube.com/@callwell",
        }
    }

    #[test]
    fn renders_supplied_thumbnail() {
        let html = view! { <TutorialCard tutorial=tutorial(Some("/assets/t/forward.jpg")) /> }
            .to_html();
        assert!(html.contains(r#"src="/assets/t/forward.jpg""#));
        assert!(!html.contains("tutorial-placeholder"));
    }

    #[test]
    fn renders_placeholder_without_thumbnail() {
        let html = view! { <TutorialCard tutorial=tutorial(None) /> }.to_html();
        assert!(html.contains("tutorial-placeholder"));
        assert!(html.contains(ICON_PLAY));
        assert!(!html.contains("<img"));
    }
}
