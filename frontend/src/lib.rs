use leptos::*;
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;

mod api;
mod app;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use api::{AuthBackend, SupabaseAuthClient};
use app::App;
use utils::scheduler::{BrowserScheduler, Scheduler};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }
    log::info!("Starting TalentBook frontend");

    // window.__TALENTBOOK_ENV wins over ./config.json; both fall back to defaults.
    spawn_local(async move {
        let auth_config = config::await_auth_config().await;
        log::debug!("auth endpoint: {}", auth_config.auth_endpoint(""));
        let backend: Rc<dyn AuthBackend> = Rc::new(SupabaseAuthClient::new(auth_config));
        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler);
        mount_to_body(move || view! { <App backend=backend scheduler=scheduler/> });
    });
}
