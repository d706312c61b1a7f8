//! Login page: email/password form over the hosted auth backend.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::spinner::Spinner;
#[cfg(feature = "hydrate")]
use crate::net::auth::{ApiAuthGateway, CredentialVerifier, ProfileDirectory};
use crate::state::login::LoginForm;

/// Login page — collects email/password, verifies them against the auth
/// backend, and redirects to the profile page on success.
///
/// Required-field errors render inline under their field; a recognized
/// verification failure renders one shared message under the submit button.
/// A spinner is shown while the post-success redirect is pending. The
/// submit button stays enabled while a verification call is in flight;
/// each attempt handles its own outcome, so the latest one wins.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Per-field pre-submit gate: an empty field shows its own inline
        // message and the verification call is not made.
        let Some(ready) = form.try_update(LoginForm::validate) else {
            return;
        };
        if !ready {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(run_submit(ApiAuthGateway, form, move |path: &str| {
                navigate(path, leptos_router::NavigateOptions::default());
            }));
        }
    };

    view! {
        <div class="login-page">
            <Navbar/>
            <main class="login-page__card">
                <h1 class="login-page__title">"Log In"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-form__input"
                        type="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                    {move || {
                        form.get()
                            .email_error
                            .map(|msg| view! { <p class="login-form__field-error">{msg}</p> })
                    }}

                    <label class="login-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-form__input"
                        type="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| {
                            form.update(|f| f.password = event_target_value(&ev));
                        }
                    />
                    {move || {
                        form.get()
                            .password_error
                            .map(|msg| view! { <p class="login-form__field-error">{msg}</p> })
                    }}

                    <button class="btn btn--primary login-form__submit" type="submit">
                        "Submit"
                    </button>
                    <p class="login-form__error">{move || form.get().error}</p>
                </form>
                <a class="login-page__signup" href="/profile/signup">
                    "Don't have an account? Click here to sign up!"
                </a>
                <Show when=move || form.get().is_redirecting()>
                    <Spinner/>
                </Show>
            </main>
            <Footer/>
        </div>
    }
}

/// Drive one submit attempt: verify the credentials, then branch.
///
/// Success detaches a fire-and-forget profile lookup whose only observable
/// effect is a log line, then executes the redirect plan returned by
/// `begin_redirect` — sleep the planned delay, then navigate. Failure is
/// recorded on the form; unclassified kinds are logged and never shown.
#[cfg(feature = "hydrate")]
async fn run_submit<G>(gateway: G, form: RwSignal<LoginForm>, navigate: impl Fn(&str) + 'static)
where
    G: CredentialVerifier + ProfileDirectory + 'static,
{
    let snapshot = form.get_untracked();

    match gateway.verify(&snapshot.email, &snapshot.password).await {
        Ok(()) => {
            let email = snapshot.email;
            leptos::task::spawn_local(async move {
                match gateway.lookup(&email).await {
                    Some(profile) => {
                        leptos::logging::log!("user logged in: {}", profile.display_name);
                    }
                    None => leptos::logging::warn!("profile lookup failed for {email}"),
                }
            });

            let Some(redirect) = form.try_update(LoginForm::begin_redirect) else {
                return;
            };
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                redirect.delay_ms,
            )))
            .await;
            navigate(redirect.path);
        }
        Err(err) => {
            if err.user_message().is_none() {
                leptos::logging::warn!("login failed: {err}");
            }
            form.update(|f| f.record_failure(&err));
        }
    }
}
