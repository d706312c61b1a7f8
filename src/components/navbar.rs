//! Top navigation bar shared by all pages.

use leptos::prelude::*;

/// Site-wide navigation bar with the wordmark and a profile link.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Arbor"</a>
            <span class="navbar__spacer"></span>
            <a class="navbar__link" href="/profile">"Profile"</a>
        </nav>
    }
}
