use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Minimum time the loading screen stays up after activation.
pub const MIN_DISPLAY_MS: u64 = 2500;
/// Delay between an auth-state change and committing the new session.
pub const AUTH_CHANGE_DELAY_MS: u32 = 2500;
/// Initial session checks that take longer than this fall back to signed-out.
pub const SESSION_TIMEOUT_MS: u32 = 10_000;

pub const TYPE_INTERVAL_MS: u32 = 100;
pub const DELETE_INTERVAL_MS: u32 = 50;
pub const FULL_PHRASE_PAUSE_MS: u32 = 2000;
pub const CURSOR_BLINK_MS: u32 = 500;

pub const DEFAULT_SUPABASE_URL: &str = "http://localhost:54321";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
}

impl RuntimeConfig {
    /// Fills unset fields from `other`.
    pub fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            supabase_url: self.supabase_url.or(other.supabase_url),
            supabase_anon_key: self.supabase_anon_key.or(other.supabase_anon_key),
        }
    }

    pub fn resolve(self) -> AuthConfig {
        let url = self
            .supabase_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| {
                log::warn!("SUPABASE_URL not configured, using {}", DEFAULT_SUPABASE_URL);
                DEFAULT_SUPABASE_URL.to_string()
            });
        let anon_key = self.supabase_anon_key.unwrap_or_else(|| {
            log::warn!("SUPABASE_ANON_KEY not configured");
            String::new()
        });
        AuthConfig { url, anon_key }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub url: String,
    pub anon_key: String,
}

impl AuthConfig {
    pub fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}

static AUTH_CONFIG: OnceLock<AuthConfig> = OnceLock::new();

fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn get_from_env_js() -> Option<RuntimeConfig> {
    // Optional global object: window.__TALENTBOOK_ENV = { SUPABASE_URL: "...", SUPABASE_ANON_KEY: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__TALENTBOOK_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    Some(RuntimeConfig {
        supabase_url: read_string(&obj, &["SUPABASE_URL", "supabase_url"]),
        supabase_anon_key: read_string(&obj, &["SUPABASE_ANON_KEY", "supabase_anon_key"]),
    })
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_auth_config() -> AuthConfig {
    if let Some(cached) = AUTH_CONFIG.get() {
        return cached.clone();
    }
    let from_env = get_from_env_js().unwrap_or_default();
    let merged = if from_env.supabase_url.is_some() && from_env.supabase_anon_key.is_some() {
        from_env
    } else {
        from_env.or(fetch_runtime_config().await.unwrap_or_default())
    };
    let resolved = merged.resolve();
    AUTH_CONFIG.get_or_init(|| resolved).clone()
}
