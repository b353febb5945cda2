use crate::api::{SignupError, SignupForm, SignupIntent, UserType};
use crate::state::modals::ModalState;
use leptos::*;

/// Top-level page. The intent travels with `CompleteProfile`, so clearing it
/// and returning home is a single write.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Page {
    #[default]
    Home,
    CompleteProfile(SignupIntent),
}

/// What the root actually renders.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    Home,
    JobSeekerCompletion(SignupIntent),
    CompanyCompletion(SignupIntent),
}

pub fn resolve_screen(loading: bool, page: &Page) -> Screen {
    if loading {
        return Screen::Loading;
    }
    match page {
        Page::Home => Screen::Home,
        Page::CompleteProfile(intent) => match intent.user_type {
            UserType::JobSeeker => Screen::JobSeekerCompletion(intent.clone()),
            UserType::Company => Screen::CompanyCompletion(intent.clone()),
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Navigation {
    page: RwSignal<Page>,
    modals: ModalState,
}

impl Navigation {
    pub fn new(modals: ModalState) -> Self {
        Self {
            page: create_rw_signal(Page::Home),
            modals,
        }
    }

    pub fn page(&self) -> ReadSignal<Page> {
        self.page.read_only()
    }

    /// `Home -> CompleteProfile`.
    pub fn continue_signup(&self, intent: SignupIntent) {
        log::info!("continuing sign-up as {}", intent.user_type);
        self.page.set(Page::CompleteProfile(intent));
        self.modals.close_auth();
    }

    /// Validates raw modal input; invalid input leaves navigation on `Home`.
    pub fn capture_signup(&self, form: SignupForm) -> Result<(), SignupError> {
        let intent = SignupIntent::try_from(form).map_err(|err| {
            log::warn!("sign-up rejected: {}", err);
            err
        })?;
        self.continue_signup(intent);
        Ok(())
    }

    /// `CompleteProfile -> Home`.
    pub fn complete_profile(&self) {
        self.page.set(Page::Home);
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::intent;
    use crate::test_support::ssr::with_runtime;

    fn form(user_type: &str) -> SignupForm {
        SignupForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "secret1".into(),
            user_type: user_type.into(),
        }
    }

    #[test]
    fn continue_signup_stores_intent_and_closes_modals() {
        with_runtime(|| {
            let modals = ModalState::new();
            let nav = Navigation::new(modals);
            modals.open_signup();

            nav.continue_signup(intent(UserType::JobSeeker));

            assert_eq!(
                nav.page().get(),
                Page::CompleteProfile(intent(UserType::JobSeeker))
            );
            assert!(!modals.signup.get());
            assert!(matches!(
                resolve_screen(false, &nav.page().get()),
                Screen::JobSeekerCompletion(_)
            ));
        });
    }

    #[test]
    fn capture_routes_company_and_employer_tags() {
        with_runtime(|| {
            let nav = Navigation::new(ModalState::new());
            nav.capture_signup(form("company")).unwrap();
            assert!(matches!(
                resolve_screen(false, &nav.page().get()),
                Screen::CompanyCompletion(_)
            ));
            nav.complete_profile();
            nav.capture_signup(form("employer")).unwrap();
            assert!(matches!(
                resolve_screen(false, &nav.page().get()),
                Screen::CompanyCompletion(_)
            ));
        });
    }

    #[test]
    fn unknown_role_stays_home() {
        with_runtime(|| {
            let modals = ModalState::new();
            let nav = Navigation::new(modals);
            modals.open_signup();

            let result = nav.capture_signup(form("astronaut"));

            assert_eq!(result, Err(SignupError::UnknownRole("astronaut".into())));
            assert_eq!(nav.page().get(), Page::Home);
            assert!(modals.signup.get());
        });
    }

    #[test]
    fn invalid_form_keeps_signup_modal_open() {
        with_runtime(|| {
            let modals = ModalState::new();
            let nav = Navigation::new(modals);
            modals.open_signup();

            let mut bad_email = form("job_seeker");
            bad_email.email = "jane.example.com".into();

            assert_eq!(nav.capture_signup(bad_email), Err(SignupError::InvalidEmail));
            assert_eq!(nav.page().get(), Page::Home);
            assert!(modals.signup.get());
        });
    }

    #[test]
    fn completing_either_profile_returns_home() {
        with_runtime(|| {
            let nav = Navigation::new(ModalState::new());
            for user_type in [UserType::JobSeeker, UserType::Company] {
                nav.continue_signup(intent(user_type));
                nav.complete_profile();
                assert_eq!(nav.page().get(), Page::Home);
            }
        });
    }
}
