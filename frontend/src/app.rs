use crate::{
    api::AuthBackend,
    components::layout::LoadingScreen,
    pages::{CompanyProfileCompletion, HomePage, JobSeekerProfileCompletion},
    state::{
        auth::SessionGate,
        navigation::{resolve_screen, Screen},
        provide_app_context, use_app,
    },
    utils::scheduler::Scheduler,
};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use std::rc::Rc;

#[component]
pub fn App(backend: Rc<dyn AuthBackend>, scheduler: Rc<dyn Scheduler>) -> impl IntoView {
    provide_meta_context();
    let ctx = provide_app_context(backend, scheduler);
    mount_session_gate(ctx.gate);

    view! {
        <Title text="TalentBook"/>
        <Root/>
    }
}

/// Starts the gate for the lifetime of the current reactive owner.
fn mount_session_gate(gate: SessionGate) {
    gate.activate();
    let check = gate.clone();
    spawn_local(async move { check.check_session().await });
    on_cleanup(move || gate.deactivate());
}

#[component]
fn Root() -> impl IntoView {
    let app = use_app();
    let navigation = app.navigation;
    let auth = app.gate.state();
    let page = navigation.page();

    let screen = create_memo(move |_| {
        let loading = auth.with(|state| state.loading);
        page.with(|page| resolve_screen(loading, page))
    });
    let on_complete = Callback::new(move |_| navigation.complete_profile());

    move || match screen.get() {
        Screen::Loading => view! { <LoadingScreen/> }.into_view(),
        Screen::Home => view! { <HomePage/> }.into_view(),
        Screen::JobSeekerCompletion(intent) => {
            view! { <JobSeekerProfileCompletion intent=intent on_complete=on_complete/> }
                .into_view()
        }
        Screen::CompanyCompletion(intent) => {
            view! { <CompanyProfileCompletion intent=intent on_complete=on_complete/> }.into_view()
        }
    }
}
