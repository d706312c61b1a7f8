#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::VerifyError;

/// How long the success spinner is shown before leaving the login page.
pub const REDIRECT_DELAY_MS: u32 = 1000;

/// Route of the authenticated landing page.
pub const PROFILE_PATH: &str = "/profile";

/// Inline message for an empty email field.
pub const EMAIL_REQUIRED: &str = "Email is required";

/// Inline message for an empty password field.
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Whether a login attempt is in its post-success transition period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Redirecting,
}

/// State for the login form: field values, per-field required errors, the
/// shared error slot under the submit button, and the submission phase.
///
/// All transitions are plain methods so the workflow can be exercised
/// without a browser. The page component owns an `RwSignal<LoginForm>` and
/// applies these from its event handlers.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub email_error: Option<&'static str>,
    pub password_error: Option<&'static str>,
    pub error: String,
    pub submission: SubmissionState,
}

/// A navigation scheduled to run after a fixed delay.
///
/// Returned by [`LoginForm::begin_redirect`] so the delay is visible data
/// the driver executes, not a hidden sleep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledRedirect {
    pub path: &'static str,
    pub delay_ms: u32,
}

impl LoginForm {
    /// Check the required-field constraints, one per field.
    ///
    /// Each empty field gets its own inline message; a failure on one field
    /// does not suppress checking the other. Returns `true` when both fields
    /// are present and the verification call may proceed.
    pub fn validate(&mut self) -> bool {
        self.email_error = self.email.is_empty().then_some(EMAIL_REQUIRED);
        self.password_error = self.password.is_empty().then_some(PASSWORD_REQUIRED);
        self.email_error.is_none() && self.password_error.is_none()
    }

    /// Record a successful verification: clear the error slot, enter the
    /// redirect phase, and return the navigation to schedule.
    pub fn begin_redirect(&mut self) -> ScheduledRedirect {
        self.error.clear();
        self.submission = SubmissionState::Redirecting;
        ScheduledRedirect {
            path: PROFILE_PATH,
            delay_ms: REDIRECT_DELAY_MS,
        }
    }

    /// Record a failed verification.
    ///
    /// Recognized kinds replace whatever message is displayed (last error
    /// wins, no accumulation). Unclassified kinds leave the slot untouched;
    /// the caller logs them and the user sees nothing. The submission phase
    /// stays `Idle`.
    pub fn record_failure(&mut self, err: &VerifyError) {
        if let Some(message) = err.user_message() {
            self.error = message.to_owned();
        }
    }

    /// Whether the post-success spinner should be shown.
    pub fn is_redirecting(&self) -> bool {
        self.submission == SubmissionState::Redirecting
    }
}
