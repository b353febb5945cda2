use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::cell::RefCell;

use super::listeners::AuthListeners;
use super::types::{AuthError, ErrorBody, Session};
use crate::config::AuthConfig;

#[cfg(target_arch = "wasm32")]
const SESSION_STORAGE_KEY: &str = "talentbook.auth.session";

/// Client for a Supabase (GoTrue) compatible auth REST service.
pub struct SupabaseAuthClient {
    client: Client,
    config: AuthConfig,
    session: RefCell<Option<Session>>,
    pub(crate) listeners: AuthListeners,
}

impl SupabaseAuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self::with_session(config, load_persisted_session())
    }

    pub fn with_session(config: AuthConfig, session: Option<Session>) -> Self {
        Self {
            client: Client::new(),
            config,
            session: RefCell::new(session),
            listeners: AuthListeners::default(),
        }
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        self.config.auth_endpoint(path)
    }

    pub(crate) fn store_session(&self, session: Option<Session>) {
        persist_session(session.as_ref());
        *self.session.borrow_mut() = session;
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AuthError> {
        let response = request
            .header("apikey", &self.config.anon_key)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        log::warn!("auth request failed ({}): {}", status.as_u16(), message);
        Err(AuthError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, AuthError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))
    }

    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> Result<(), AuthError> {
        self.send(request).await.map(|_| ())
    }

    pub(crate) async fn request_session(&self, request: RequestBuilder) -> Result<Session, AuthError> {
        let session: Session = self.send_json(request).await?;
        Ok(session.with_expiry_from(Utc::now()))
    }
}

#[cfg(target_arch = "wasm32")]
fn load_persisted_session() -> Option<Session> {
    use crate::utils::storage;

    let raw = storage::read_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("discarding unreadable stored session: {}", err);
            let _ = storage::remove_item(SESSION_STORAGE_KEY);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_persisted_session() -> Option<Session> {
    None
}

#[cfg(target_arch = "wasm32")]
fn persist_session(session: Option<&Session>) {
    use crate::utils::storage;

    let result = match session {
        Some(session) => serde_json::to_string(session)
            .map_err(|e| e.to_string())
            .and_then(|raw| storage::write_item(SESSION_STORAGE_KEY, &raw)),
        None => storage::remove_item(SESSION_STORAGE_KEY),
    };
    if let Err(err) = result {
        log::warn!("{}", AuthError::Storage(err));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_session(_session: Option<&Session>) {}
