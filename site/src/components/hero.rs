use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::icons::{ICON_ARROW_RIGHT, Icon};
use crate::content::HERO_SCREENSHOT;

#[component]
pub fn Hero(#[prop(into)] tagline: String, #[prop(into)] signup: String) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Now answering calls in 30+ languages"
                    </div>
                    <h1 class="hero-title">
                        <span class="gradient-text">"Never miss"</span>
                        " another call."
                    </h1>
                    <p class="hero-description">{tagline}</p>
                    <p class="hero-description">
                        "Callwell picks up, books the appointment and sends you the summary. "
                        "Set up in an afternoon, live the same day."
                    </p>
                    <div class="hero-actions">
                        <Button href=signup large=true>
                            "Start free trial"
                            <Icon path=ICON_ARROW_RIGHT size="18" />
                        </Button>
                        <Button href="#how-it-works" variant=ButtonVariant::Secondary large=true>
                            "See how it works"
                        </Button>
                    </div>
                </div>
                <div class="hero-visual">
                    <img class="hero-screenshot" src=HERO_SCREENSHOT.src alt=HERO_SCREENSHOT.alt />
                </div>
            </div>
        </section>
    }
}
