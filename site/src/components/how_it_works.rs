use leptos::prelude::*;

use super::icons::Icon;
use super::tutorial_card::TutorialCard;
use crate::content::{STEPS, TUTORIALS};
use crate::types::Step;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"How it works"</p>
                    <h2 class="section-title">"Live in three steps"</h2>
                </div>
                <ol class="steps">
                    {STEPS.iter().map(|step| view! { <StepCard step=*step /> }).collect_view()}
                </ol>
                <div class="tutorials">
                    <h3 class="tutorials-title">"Watch the walkthroughs"</h3>
                    <div class="tutorials-grid">
                        {TUTORIALS
                            .iter()
                            .map(|tutorial| view! { <TutorialCard tutorial=*tutorial /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepCard(step: Step) -> impl IntoView {
    view! {
        <li class="step-card">
            <span class="step-number">{step.number}</span>
            <div class="step-icon">
                <Icon path=step.icon size="28" />
            </div>
            <h3 class="step-title">{step.title}</h3>
            <p class="step-description">{step.description}</p>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_steps_in_order() {
        let html = view! { <HowItWorks /> }.to_html();
        assert!(html.contains(r#"id="how-it-works""#));

        let positions: Vec<usize> = STEPS
            .iter()
            .map(|step| html.find(step.title).expect("step rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn renders_tutorial_cards() {
        let html = view! { <HowItWorks /> }.to_html();
        assert_eq!(html.matches(r#"class="tutorial-card""#).count(), TUTORIALS.len());
    }
}
