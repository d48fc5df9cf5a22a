//! Terminal error boundary.
//!
//! Unlike Leptos' built-in `ErrorBoundary`, this one latches: once a render
//! fails the wrapped content is never rendered again until the page is
//! reloaded (a fresh mount creates a fresh, healthy boundary).

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::components::icons::{ICON_WARNING_CIRCLE, Icon};
use crate::error::{Result, SiteError};

/// Boundary state. `Failed` is terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Failed {
        /// Display text of the captured error
        message: String,
    },
}

/// Healthy/Failed latch around a fallible render.
#[derive(Debug)]
pub struct Boundary {
    label: &'static str,
    state: BoundaryState,
}

impl Boundary {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            state: BoundaryState::Healthy,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, BoundaryState::Failed { .. })
    }

    /// Captured error text, if the boundary has failed.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            BoundaryState::Healthy => None,
            BoundaryState::Failed { message } => Some(message),
        }
    }

    /// Run `render` while healthy.
    ///
    /// Returns `None` when the boundary is (or just became) failed; `render`
    /// is not called at all once failed.
    pub fn attempt<T>(&mut self, render: impl FnOnce() -> Result<T>) -> Option<T> {
        if self.is_failed() {
            return None;
        }
        match render() {
            Ok(value) => Some(value),
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    fn fail(&mut self, err: &SiteError) {
        report_failure(self.label, err);
        self.state = BoundaryState::Failed {
            message: err.to_string(),
        };
    }
}

/// Log a caught render failure to the diagnostic channels.
fn report_failure(label: &str, err: &SiteError) {
    tracing::error!(boundary = label, error = %err, "render failure caught by boundary");

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;
        web_sys::console::error_2(
            &JsValue::from_str(&format!("[callwell][{label}] render failure:")),
            &JsValue::from_str(&err.to_string()),
        );
    }
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().reload() {
        tracing::warn!(?err, "page reload failed");
    }
}

/// Wrap a fallible render; show [`FallbackView`] once it fails.
///
/// ```rust,ignore
/// view! {
///     <ErrorBoundary label="page" render=move || Ok(view! { <Page /> }.into_any()) />
/// }
/// ```
#[component]
pub fn ErrorBoundary<F>(
    /// Context attached to logged failures
    #[prop(default = "page")]
    label: &'static str,
    /// Renders the guarded content
    render: F,
) -> impl IntoView
where
    F: Fn() -> Result<AnyView> + Send + Sync + 'static,
{
    let boundary = Arc::new(Mutex::new(Boundary::new(label)));

    move || {
        let mut latch = boundary.lock().unwrap_or_else(PoisonError::into_inner);
        match latch.attempt(&render) {
            Some(content) => content,
            None => {
                let message = latch.message().unwrap_or_default().to_string();
                view! { <FallbackView message=message /> }.into_any()
            }
        }
    }
}

/// Generic "Something went wrong" screen with a reload action.
#[component]
pub fn FallbackView(message: String) -> impl IntoView {
    view! {
        <div class="error-fallback" role="alert">
            <div class="error-fallback-card">
                <Icon path=ICON_WARNING_CIRCLE size="40" class="error-fallback-icon" />
                <h1 class="error-fallback-title">"Something went wrong"</h1>
                <p class="error-fallback-message">{message}</p>
                <button class="btn btn-primary" on:click=move |_| reload_page()>
                    "Reload page"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use std::cell::Cell;

    #[test]
    fn starts_healthy() {
        let boundary = Boundary::new("test");
        assert_eq!(boundary.state(), &BoundaryState::Healthy);
        assert_eq!(boundary.message(), None);
        assert_eq!(boundary.label(), "test");
    }

    #[test]
    fn healthy_render_passes_value_through() {
        let mut boundary = Boundary::new("test");
        assert_eq!(boundary.attempt(|| Ok(7)), Some(7));
        assert!(!boundary.is_failed());
    }

    #[test]
    fn failure_latches_with_message() {
        let mut boundary = Boundary::new("test");
        let out: Option<()> = boundary.attempt(|| Err(SiteError::render("Hero", "boom")));
        assert_eq!(out, None);
        assert_eq!(
            boundary.state(),
            &BoundaryState::Failed {
                message: "Hero failed to render: boom".into()
            }
        );
    }

    #[test]
    fn failed_boundary_never_renders_again() {
        let mut boundary = Boundary::new("test");
        let calls = Cell::new(0);
        let render = || {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                Err(SiteError::render("Pricing", "bad plan"))
            } else {
                Ok("children")
            }
        };

        assert_eq!(boundary.attempt(render), None);
        assert_eq!(boundary.attempt(render), None);
        assert_eq!(boundary.attempt(render), None);
        assert_eq!(calls.get(), 1);
        assert_eq!(boundary.message(), Some("Pricing failed to render: bad plan"));
    }

    fn healthy_child() -> Result<AnyView> {
        Ok(view! { <p class="child">"Hello caller"</p> }.into_any())
    }

    fn broken_child() -> Result<AnyView> {
        Err(SiteError::content("pricing", "no plans"))
    }

    #[test]
    fn renders_children_when_healthy() {
        let html = view! { <ErrorBoundary label="test" render=healthy_child /> }.to_html();

        assert!(html.contains("Hello caller"));
        assert!(!html.contains("Something went wrong"));
    }

    #[test]
    fn renders_fallback_with_error_text() {
        let html = view! { <ErrorBoundary label="test" render=broken_child /> }.to_html();

        assert!(html.contains("Something went wrong"));
        assert!(html.contains("invalid pricing content: no plans"));
        assert!(html.contains("Reload page"));
    }
}
