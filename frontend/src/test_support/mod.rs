#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod clock;

#[cfg(test)]
pub mod helpers {
    use crate::api::{
        AuthBackend, AuthError, AuthEvent, AuthListener, AuthListeners, Session, SessionUser,
        SignUpRequest, SignupIntent, Subscription, UserType,
    };
    use crate::state::{provide_app_context, AppContext};
    use crate::test_support::clock::ManualScheduler;
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub fn session_for(name: &str) -> Session {
        Session {
            access_token: format!("access-{}", name),
            refresh_token: format!("refresh-{}", name),
            expires_in: Some(3600),
            expires_at: None,
            user: SessionUser {
                id: format!("u-{}", name),
                email: Some(format!("{}@example.com", name)),
                user_metadata: json!({ "name": name }),
            },
        }
    }

    pub fn intent(user_type: UserType) -> SignupIntent {
        SignupIntent {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "secret1".into(),
            user_type,
        }
    }

    /// In-memory auth backend with scripted responses.
    #[derive(Default)]
    pub struct FakeAuthBackend {
        pub listeners: AuthListeners,
        pub session_result: RefCell<Option<Result<Option<Session>, AuthError>>>,
        pub sign_up_result: RefCell<Option<Result<Option<Session>, AuthError>>>,
        pub sign_up_requests: RefCell<Vec<SignUpRequest>>,
        pub sign_out_calls: RefCell<usize>,
    }

    impl FakeAuthBackend {
        pub fn signed_out() -> Rc<Self> {
            let fake = Self::default();
            *fake.session_result.borrow_mut() = Some(Ok(None));
            Rc::new(fake)
        }

        pub fn emit(&self, event: AuthEvent, session: Option<Session>) {
            self.listeners.notify(event, session);
        }
    }

    #[async_trait(?Send)]
    impl AuthBackend for FakeAuthBackend {
        async fn get_session(&self) -> Result<Option<Session>, AuthError> {
            self.session_result.borrow().clone().unwrap_or(Ok(None))
        }

        fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
            self.listeners.subscribe(listener)
        }

        async fn sign_in_with_password(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<Session, AuthError> {
            let session = session_for(email.split('@').next().unwrap_or(email));
            self.emit(AuthEvent::SignedIn, Some(session.clone()));
            Ok(session)
        }

        async fn sign_up(&self, request: SignUpRequest) -> Result<Option<Session>, AuthError> {
            self.sign_up_requests.borrow_mut().push(request);
            let result = self.sign_up_result.borrow().clone().unwrap_or(Ok(None));
            if let Ok(Some(session)) = &result {
                self.emit(AuthEvent::SignedIn, Some(session.clone()));
            }
            result
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            *self.sign_out_calls.borrow_mut() += 1;
            self.emit(AuthEvent::SignedOut, None);
            Ok(())
        }
    }

    /// Provides an app context wired to fakes. Call inside a reactive runtime.
    pub fn provide_fake_app() -> (AppContext, Rc<FakeAuthBackend>, ManualScheduler) {
        let backend = FakeAuthBackend::signed_out();
        let scheduler = ManualScheduler::new();
        let ctx = provide_app_context(backend.clone(), Rc::new(scheduler.clone()));
        (ctx, backend, scheduler)
    }
}
