use leptos::*;

/// Open/closed flags for the landing page modals.
#[derive(Debug, Clone, Copy)]
pub struct ModalState {
    pub signup: RwSignal<bool>,
    pub login: RwSignal<bool>,
    pub privacy_terms: RwSignal<bool>,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            signup: create_rw_signal(false),
            login: create_rw_signal(false),
            privacy_terms: create_rw_signal(false),
        }
    }

    pub fn open_signup(&self) {
        self.login.set(false);
        self.signup.set(true);
    }

    pub fn open_login(&self) {
        self.signup.set(false);
        self.login.set(true);
    }

    pub fn switch_to_login(&self) {
        self.open_login();
    }

    pub fn switch_to_signup(&self) {
        self.open_signup();
    }

    /// Privacy/terms stacks above whichever auth modal is open.
    pub fn open_privacy_terms(&self) {
        self.privacy_terms.set(true);
    }

    pub fn close_privacy_terms(&self) {
        self.privacy_terms.set(false);
    }

    pub fn close_auth(&self) {
        self.signup.set(false);
        self.login.set(false);
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}
