use leptos::prelude::*;

use super::button::{Button, ButtonVariant};

#[component]
pub fn FinalCta(#[prop(into)] signup: String, #[prop(into)] mailto: String) -> impl IntoView {
    view! {
        <section class="final-cta">
            <div class="container final-cta-inner">
                <h2 class="final-cta-title">"Ready to answer every call?"</h2>
                <p class="final-cta-description">
                    "Start your 14-day free trial. No credit card, no contract."
                </p>
                <div class="final-cta-actions">
                    <Button href=signup large=true>"Start free trial"</Button>
                    <Button href=mailto variant=ButtonVariant::Ghost large=true>"Talk to sales"</Button>
                </div>
            </div>
        </section>
    }
}
