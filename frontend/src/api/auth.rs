use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use super::{
    backend::AuthBackend,
    client::SupabaseAuthClient,
    listeners::{AuthListener, Subscription},
    types::{AuthError, AuthEvent, PasswordCredentials, Session, SignUpRequest, SignUpResponse},
};

impl SupabaseAuthClient {
    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let request = self
            .http_client()
            .post(self.endpoint("token"))
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }));
        self.request_session(request).await
    }
}

#[async_trait(?Send)]
impl AuthBackend for SupabaseAuthClient {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(session) = self.current_session() else {
            return Ok(None);
        };
        if !session.is_expired(Utc::now()) {
            return Ok(Some(session));
        }
        match self.refresh_session(&session.refresh_token).await {
            Ok(fresh) => {
                self.store_session(Some(fresh.clone()));
                self.listeners
                    .notify(AuthEvent::TokenRefreshed, Some(fresh.clone()));
                Ok(Some(fresh))
            }
            Err(err) => {
                log::warn!("session refresh failed, signing out locally: {}", err);
                self.store_session(None);
                Ok(None)
            }
        }
    }

    fn on_auth_state_change(&self, listener: AuthListener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let request = self
            .http_client()
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .json(&PasswordCredentials {
                email: email.trim().to_string(),
                password: password.to_string(),
            });
        let session = self.request_session(request).await?;
        self.store_session(Some(session.clone()));
        log::info!("signed in as {}", session.user.id);
        self.listeners
            .notify(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<Option<Session>, AuthError> {
        let builder = self.http_client().post(self.endpoint("signup")).json(&request);
        match self.send_json::<SignUpResponse>(builder).await? {
            SignUpResponse::Session(session) => {
                let session = session.with_expiry_from(Utc::now());
                self.store_session(Some(session.clone()));
                log::info!("account created for {}", session.user.id);
                self.listeners
                    .notify(AuthEvent::SignedIn, Some(session.clone()));
                Ok(Some(session))
            }
            SignUpResponse::User(user) => {
                log::info!("account {} awaiting email confirmation", user.id);
                Ok(None)
            }
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let result = match self.current_session() {
            Some(session) => {
                let request = self
                    .http_client()
                    .post(self.endpoint("logout"))
                    .bearer_auth(&session.access_token);
                self.send_empty(request).await
            }
            None => Ok(()),
        };
        self.store_session(None);
        self.listeners.notify(AuthEvent::SignedOut, None);
        result
    }
}
