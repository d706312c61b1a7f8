//! Page footer shared by all pages.

use leptos::prelude::*;

/// Site-wide footer.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__copy">"© Arbor"</span>
            <a class="footer__link" href="/profile/signup">"Sign up"</a>
        </footer>
    }
}
