//! Loading spinner shown during the post-login transition.

use leptos::prelude::*;

/// Indeterminate spinner. Visibility is driven by the caller.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__circle"></div>
        </div>
    }
}
