//! Signup page — account creation, reached from the login page's link.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

/// Account-creation page.
#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <Navbar/>
            <main class="signup-page__card">
                <h1 class="signup-page__title">"Sign Up"</h1>
                <p class="signup-page__blurb">"Create an account to get started with Arbor."</p>
                <a class="signup-page__login" href="/profile/login">
                    "Already have an account? Log in."
                </a>
            </main>
            <Footer/>
        </div>
    }
}
