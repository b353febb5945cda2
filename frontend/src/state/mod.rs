pub mod auth;
pub mod modals;
pub mod navigation;
pub mod typewriter;

use crate::api::AuthBackend;
use crate::utils::scheduler::Scheduler;
use leptos::*;
use std::rc::Rc;

use auth::SessionGate;
use modals::ModalState;
use navigation::Navigation;

/// Everything the landing app shares through context.
#[derive(Clone)]
pub struct AppContext {
    pub gate: SessionGate,
    pub navigation: Navigation,
    pub modals: ModalState,
    pub backend: Rc<dyn AuthBackend>,
    pub scheduler: Rc<dyn Scheduler>,
}

pub fn provide_app_context(
    backend: Rc<dyn AuthBackend>,
    scheduler: Rc<dyn Scheduler>,
) -> AppContext {
    let modals = ModalState::new();
    let ctx = AppContext {
        gate: SessionGate::new(backend.clone(), scheduler.clone(), modals),
        navigation: Navigation::new(modals),
        modals,
        backend,
        scheduler,
    };
    provide_context(ctx.clone());
    ctx
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
