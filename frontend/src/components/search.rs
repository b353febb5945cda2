use crate::state::{
    typewriter::{Typewriter, TypewriterDriver, SEARCH_PHRASES},
    use_app,
};
use leptos::*;

/// Hero search box with the rotating typewriter placeholder.
#[component]
pub fn TypewriterSearch() -> impl IntoView {
    let scheduler = use_app().scheduler;
    let driver = TypewriterDriver::start(Typewriter::new(SEARCH_PHRASES), scheduler);
    let placeholder = driver.placeholder();
    on_cleanup(move || driver.stop());

    view! {
        <div class="max-w-2xl mx-auto mb-12">
            <div class="relative">
                <input
                    type="text"
                    class="w-full h-14 pl-12 pr-4 bg-white rounded-xl text-gray-900 placeholder-gray-500 border-0 focus:outline-none focus:ring-2 focus:ring-red-600 text-lg"
                    placeholder=move || placeholder.get()
                />
            </div>
        </div>
    }
}
