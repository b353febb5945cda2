use super::utils;
use crate::api::{AuthError, Session};
use crate::state::use_app;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<(String, String), Result<Session, AuthError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email, &password) {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch((email, password));
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let backend = use_app().backend;
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);

    let login_action = create_action(move |(email, password): &(String, String)| {
        let backend = backend.clone();
        let email = email.clone();
        let password = password.clone();
        async move { backend.sign_in_with_password(&email, &password).await }
    });

    // The session gate closes the modal once the sign-in notification lands.
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.password.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
