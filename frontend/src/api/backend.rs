use super::listeners::{AuthListener, Subscription};
use super::types::{AuthError, Session, SignUpRequest};
use async_trait::async_trait;

/// Capability interface over the identity provider.
///
/// The UI only ever talks to this trait so tests can swap in a fake.
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    /// Registers `listener` for every auth-state change until the returned
    /// subscription is dropped.
    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError>;

    /// Returns the new session, or `None` when the account still needs email confirmation.
    async fn sign_up(&self, request: SignUpRequest) -> Result<Option<Session>, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
