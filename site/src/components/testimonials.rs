use leptos::prelude::*;

use super::icons::{ICON_QUOTES, Icon};
use crate::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Testimonials"</p>
                    <h2 class="section-title">"Front desks that stopped missing calls"</h2>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="testimonial-card">
                                    <Icon path=ICON_QUOTES size="28" class="testimonial-mark" />
                                    <blockquote class="testimonial-quote">{t.quote}</blockquote>
                                    <figcaption class="testimonial-author">
                                        <strong>{t.author}</strong>
                                        <span>{format!("{}, {}", t.role, t.company)}</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
