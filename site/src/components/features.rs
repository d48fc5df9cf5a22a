use leptos::prelude::*;

use super::icons::Icon;
use crate::content::FEATURES;
use crate::types::Feature;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Features"</p>
                    <h2 class="section-title">"A receptionist that works every shift"</h2>
                    <p class="section-description">
                        "Callwell handles the phone so your team can handle the customer in front of them."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class=format!("feature-icon {}", feature.gradient)>
                <Icon path=feature.icon size="28" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_every_feature_with_gradient() {
        let html = view! { <Features /> }.to_html();
        assert!(html.contains(r#"id="features""#));
        assert_eq!(html.matches(r#"class="feature-card""#).count(), FEATURES.len());
        for feature in FEATURES {
            assert!(html.contains(feature.title));
            assert!(html.contains(&format!("feature-icon {}", feature.gradient)));
        }
    }
}
