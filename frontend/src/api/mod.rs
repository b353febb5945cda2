mod auth;
pub mod backend;
pub mod client;
pub mod listeners;
pub mod types;

pub use backend::AuthBackend;
pub use client::SupabaseAuthClient;
pub use listeners::{AuthListener, AuthListeners, Subscription};
pub use types::*;
