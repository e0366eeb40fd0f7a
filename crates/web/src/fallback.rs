//! Placeholder rendered while an identity has no generated view.

use leptos::*;

use crate::bus::{UiBus, UiEvent};

/// Static informational view. Its one action publishes `OpenSettings` on
/// the UI bus; it owns no state and talks to nothing else.
#[component]
pub fn FallbackView() -> impl IntoView {
    let bus = use_context::<UiBus>();

    let open_settings = move |_| {
        if let Some(bus) = &bus {
            bus.publish(UiEvent::OpenSettings);
        }
    };

    view! {
        <div class="fallback">
            <h2>"Welcome!"</h2>
            <p>
                "Your personalized view is not available yet. "
                "Generate one to see it here."
            </p>
            <button class="fallback-action" on:click=open_settings>
                "Generate a view"
            </button>
        </div>
    }
}
