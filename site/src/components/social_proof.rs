use leptos::prelude::*;

use crate::content::{LOGOS, looped};

/// Partner logo marquee.
///
/// The base list is rendered three times back to back; the CSS animation
/// scrolls one third of the track so the loop has no visible seam.
#[component]
pub fn SocialProof() -> impl IntoView {
    view! {
        <section class="social-proof" aria-label="Trusted by">
            <p class="social-proof-title">"Trusted by 2,000+ front desks"</p>
            <div class="logo-marquee">
                <div class="logo-track">
                    {looped(&LOGOS)
                        .into_iter()
                        .map(|logo| view! { <img class="logo-item" src=logo.src alt=logo.alt /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
