//! Pricing section with the Monthly / Annual billing toggle.

use leptos::prelude::*;

use super::button::{Button, ButtonVariant};
use super::icons::{ICON_CHECK, Icon};
use crate::content::PLANS;
use crate::pricing::{BillingPeriod, best_annual_savings, format_dollars};
use crate::types::Plan;

/// Pricing section. Owns the billing period signal; resets to monthly on mount.
#[component]
pub fn Pricing(#[prop(into)] signup: String) -> impl IntoView {
    let (period, set_period) = signal(BillingPeriod::default());
    let savings = best_annual_savings(&PLANS);

    let label_class = move |target: BillingPeriod| {
        move || {
            if period.get() == target {
                "billing-label active"
            } else {
                "billing-label"
            }
        }
    };

    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Pricing"</p>
                    <h2 class="section-title">"Simple plans, no per-minute surprises"</h2>
                </div>

                <div class="billing-toggle" role="group" aria-label="Billing period">
                    <span class=label_class(BillingPeriod::Monthly)>
                        {BillingPeriod::Monthly.label()}
                    </span>
                    <button
                        class=move || {
                            if period.get().is_annual() { "toggle-switch on" } else { "toggle-switch" }
                        }
                        aria-pressed=move || period.get().is_annual().to_string()
                        aria-label="Toggle annual billing"
                        on:click=move |_| set_period.update(|p| *p = p.toggle())
                    >
                        <span class="toggle-knob"></span>
                    </button>
                    <span class=label_class(BillingPeriod::Annual)>
                        {BillingPeriod::Annual.label()}
                    </span>
                    <span class="savings-badge">{format!("Save {savings}%")}</span>
                </div>

                {move || {
                    view! { <PlanGrid period=period.get() signup=signup.clone() /> }
                }}
            </div>
        </section>
    }
}

/// Both plan cards for a fixed billing period.
#[component]
pub fn PlanGrid(period: BillingPeriod, #[prop(into)] signup: String) -> impl IntoView {
    view! {
        <div class="plans-grid">
            {PLANS
                .iter()
                .map(|plan| view! { <PlanCard plan=*plan period=period signup=signup.clone() /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn PlanCard(plan: Plan, period: BillingPeriod, signup: String) -> impl IntoView {
    let quote = plan.quote(period);
    let card_class = if plan.popular {
        format!("plan-card popular {}", plan.gradient)
    } else {
        format!("plan-card {}", plan.gradient)
    };
    let variant = if plan.popular {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };
    let cta_href = format!("{}?plan={}", signup, plan.name.to_lowercase());

    view! {
        <article class=card_class>
            {plan.popular.then(|| view! { <div class="plan-badge">"Most Popular"</div> })}
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="plan-amount">{format_dollars(quote.per_month)}</span>
                <span class="plan-period">"/mo"</span>
            </div>
            {quote.yearly_total.map(|total| {
                view! {
                    <p class="plan-billed">{format!("Billed {} yearly", format_dollars(total))}</p>
                }
            })}
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="plan-feature">
                                <Icon path=ICON_CHECK size="16" class="plan-check" />
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Button href=cta_href variant=variant>
                {plan.cta}
            </Button>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn annual_shows_annual_price_and_yearly_total() {
        let html = view! { <PlanGrid period=BillingPeriod::Annual signup="/signup" /> }.to_html();

        for plan in PLANS {
            let per_month = format_dollars(plan.annual_price);
            let yearly = format!("Billed {} yearly", format_dollars(plan.annual_price * 12));
            assert!(html.contains(&per_month), "missing {per_month}");
            assert!(html.contains(&yearly), "missing {yearly}");
        }
        assert!(html.contains("Billed $468 yearly"));
        assert!(html.contains("Billed $1,428 yearly"));
        assert!(!html.contains("$49<"));
    }

    #[test]
    fn monthly_shows_monthly_price_without_yearly_line() {
        let html = view! { <PlanGrid period=BillingPeriod::Monthly signup="/signup" /> }.to_html();

        for plan in PLANS {
            assert!(html.contains(&format_dollars(plan.monthly_price)));
        }
        assert!(!html.contains("plan-billed"));
        assert!(!html.contains("yearly"));
    }

    #[test]
    fn popular_plan_gets_badge() {
        let html = view! { <PlanGrid period=BillingPeriod::Monthly signup="/signup" /> }.to_html();
        let popular = PLANS.iter().filter(|p| p.popular).count();
        assert_eq!(html.matches("Most Popular").count(), popular);
        assert!(html.contains(r#"href="/signup?plan=professional""#));
    }

    #[test]
    fn section_mounts_in_monthly_mode() {
        let html = view! { <Pricing signup="/signup" /> }.to_html();
        assert!(html.contains(r#"id="pricing""#));
        assert!(html.contains(r#"aria-pressed="false""#));
        assert!(html.contains("Save 20%"));
        assert!(!html.contains("plan-billed"));
    }
}
