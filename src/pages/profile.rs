//! Profile page — the authenticated landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;

/// Authenticated landing page. Resolves the session on mount and bounces
/// to the login page once the check settles without a signed-in user.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Resolve the session once on mount.
    Effect::new(move || {
        if !auth.get_untracked().loading {
            return;
        }
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| a.resolve(user));
        });
    });

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/profile/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="profile-page">
            <Navbar/>
            <main class="profile-page__content">
                {move || {
                    let state = auth.get();
                    if state.loading {
                        view! { <p class="profile-page__pending">"Loading..."</p> }.into_any()
                    } else {
                        state
                            .user
                            .map(|user| {
                                view! {
                                    <h1 class="profile-page__welcome">
                                        {format!("Welcome back, {}", user.name)}
                                    </h1>
                                    <p class="profile-page__email">{user.email}</p>
                                }
                            })
                            .into_any()
                    }
                }}
            </main>
            <Footer/>
        </div>
    }
}
