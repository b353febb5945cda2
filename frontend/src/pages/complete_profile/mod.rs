use crate::components::error::InlineErrorMessage;
use leptos::*;

pub mod company;
pub mod job_seeker;
pub mod utils;
pub mod view_model;

pub use company::CompanyProfileCompletion;
pub use job_seeker::JobSeekerProfileCompletion;

pub(crate) const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/10 border border-white/20 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-red-600";

#[component]
pub(crate) fn CompletionLayout(
    title: &'static str,
    subtitle: String,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-neutral-950 flex items-center justify-center px-4 py-12">
            <div class="w-full max-w-2xl rounded-2xl bg-neutral-900 border border-white/10 p-8 shadow-2xl">
                <h1 class="text-3xl font-bold text-white">{title}</h1>
                <p class="text-gray-300 mt-2 mb-6">{subtitle}</p>
                <div class="mb-4">
                    <InlineErrorMessage error=error />
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub(crate) fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm text-gray-300 mb-2">{label}</label>
            <input
                id=id
                type="text"
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
