use super::utils::{sign_up_request, ProfileDetails};
use crate::api::{AuthBackend, AuthError, SignUpRequest, SignupIntent};
use crate::state::use_app;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct CompletionViewModel {
    pub error: RwSignal<Option<String>>,
    pub submit_action: Action<ProfileDetails, Result<bool, AuthError>>,
}

impl CompletionViewModel {
    pub fn submit(&self, details: Result<ProfileDetails, String>) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match details {
            Ok(details) => {
                self.error.set(None);
                self.submit_action.dispatch(details);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

/// Sends the sign-up and reports the outcome.
///
/// An auto-confirmed sign-up emits `SIGNED_IN` before returning, which unmounts
/// the completion screen while this is still running. `on_complete` must be
/// owned above that screen.
async fn finish_sign_up(
    backend: Rc<dyn AuthBackend>,
    request: SignUpRequest,
    error: RwSignal<Option<String>>,
    on_complete: Callback<()>,
) -> Result<bool, AuthError> {
    // `true` when the account is signed in right away, `false` while email
    // confirmation is pending.
    let result = backend.sign_up(request).await.map(|session| session.is_some());
    match &result {
        Ok(signed_in) => {
            log::info!("profile completed (signed in: {})", signed_in);
            on_complete.call(());
        }
        Err(err) => {
            log::warn!("sign-up failed: {}", err);
            error.try_set(Some(err.to_string()));
        }
    }
    result
}

/// Finalizes account creation for `intent` and reports back through `on_complete`.
pub fn use_completion_view_model(
    intent: SignupIntent,
    on_complete: Callback<()>,
) -> CompletionViewModel {
    let backend = use_app().backend;
    let error = create_rw_signal(None::<String>);

    let submit_action = create_action(move |details: &ProfileDetails| {
        finish_sign_up(
            backend.clone(),
            sign_up_request(&intent, details),
            error,
            on_complete,
        )
    });

    CompletionViewModel {
        error,
        submit_action,
    }
}
