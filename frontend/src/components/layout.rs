use crate::state::use_app;
use leptos::*;

const LOGO_SRC: &str = "/talent_book_logo_draft_3.png";

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();
    let auth = app.gate.state();
    let modals = app.modals;
    let gate = app.gate.clone();
    let sign_out_action = create_action(move |_: &()| {
        let gate = gate.clone();
        async move { gate.sign_out().await }
    });
    let sign_out_pending = sign_out_action.pending();
    let is_authenticated = create_memo(move |_| auth.with(|state| state.is_authenticated));

    view! {
        <header class="relative z-10">
            <nav class="flex items-center justify-between px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex items-center">
                    <a href="#" class="focus:outline-none">
                        <img src=LOGO_SRC alt="TalentBook Logo" class="h-12 w-auto object-contain hover:opacity-80 transition-opacity duration-200"/>
                    </a>
                </div>
                <div class="hidden md:flex items-center space-x-8">
                    <NavLinks/>
                </div>
                <div class="flex items-center space-x-4">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || {
                            view! {
                                <button
                                    type="button"
                                    class="text-gray-300 hover:text-white transition-colors duration-200 font-medium"
                                    on:click=move |_| modals.open_login()
                                >
                                    "Log In"
                                </button>
                                <button
                                    type="button"
                                    class="bg-[#FFC107] hover:bg-[#FFB300] text-black px-6 py-2.5 rounded-lg font-medium transition-all duration-200"
                                    on:click=move |_| modals.open_signup()
                                >
                                    "Sign Up For Free"
                                </button>
                            }
                        }
                    >
                        <button
                            type="button"
                            class="bg-gradient-to-r from-red-600 to-red-700 hover:from-red-700 hover:to-red-800 text-white px-4 py-2 rounded-lg font-medium disabled:opacity-50"
                            disabled=move || sign_out_pending.get()
                            on:click=move |_| {
                                if !sign_out_pending.get_untracked() {
                                    sign_out_action.dispatch(());
                                }
                            }
                        >
                            "Sign Out"
                        </button>
                    </Show>
                </div>
            </nav>
            <div class="md:hidden px-4 sm:px-6 pb-4">
                <div class="flex items-center justify-center space-x-6 text-sm">
                    <NavLinks/>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLinks() -> impl IntoView {
    view! {
        <a href="#about" class="text-gray-300 hover:text-white transition-colors duration-200 font-medium">"About us"</a>
        <a href="#pricing" class="text-gray-300 hover:text-white transition-colors duration-200 font-medium">"Pricing"</a>
        <a href="#contact" class="text-gray-300 hover:text-white transition-colors duration-200 font-medium">"Contact us"</a>
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-neutral-900 via-neutral-800 to-neutral-900 flex items-center justify-center" aria-busy="true">
            <div class="text-center">
                <div class="mb-8">
                    <img src=LOGO_SRC alt="TalentBook Logo" class="h-16 w-auto mx-auto object-contain"/>
                </div>
                <div class="flex items-center justify-center space-x-3 mb-4">
                    <div class="animate-spin rounded-full h-6 w-6 border-b-2 border-[#FFC107]"></div>
                    <span class="text-white text-lg font-medium">"Loading TalentBook..."</span>
                </div>
                <div class="w-64 h-1 bg-white/20 rounded-full overflow-hidden mx-auto">
                    <div class="h-full bg-gradient-to-r from-red-600 to-[#FFC107] rounded-full animate-pulse"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let modals = use_app().modals;
    view! {
        <footer class="border-t border-white/10 py-8 px-4 text-center text-sm text-gray-400">
            <span>"© TalentBook. "</span>
            <a
                href="#"
                class="text-[#FFC107] hover:underline"
                on:click=move |ev| {
                    ev.prevent_default();
                    modals.open_privacy_terms();
                }
            >
                "Privacy Policy & Terms of Use"
            </a>
        </footer>
    }
}
