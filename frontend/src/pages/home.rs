use crate::{
    components::{
        error::ErrorBanner,
        layout::{Footer, Header},
        search::TypewriterSearch,
    },
    pages::{login::LoginModal, privacy_terms::PrivacyTermsModal, signup::SignupModal},
    state::use_app,
};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();
    let modals = app.modals;
    let navigation = app.navigation;
    let auth = app.gate.state();
    let gate = app.gate.clone();

    let auth_error = Signal::derive(move || auth.with(|state| state.error.clone()));
    let greeting = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| format!("Welcome back, {}", user.display_name()))
        })
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-neutral-900 via-neutral-800 to-neutral-900">
            <ErrorBanner error=auth_error on_dismiss=Callback::new(move |_| gate.dismiss_error())/>
            <Header/>
            <main class="px-4 sm:px-6 lg:px-8 pt-16 pb-24 text-center">
                <p class="text-[#FFC107] font-medium mb-4 min-h-[1.5rem]">{greeting}</p>
                <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold text-white mb-6">
                    "Where talent meets opportunity"
                </h1>
                <p class="max-w-2xl mx-auto text-lg text-gray-300 mb-10">
                    "TalentBook matches job seekers with the companies looking for them."
                </p>
                <TypewriterSearch/>
                <section id="about" class="max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-6 text-left">
                    <div class="rounded-2xl bg-white/5 border border-white/10 p-6">
                        <h2 class="text-xl font-semibold text-white mb-2">"For job seekers"</h2>
                        <p class="text-gray-300">"Build one profile and get matched with roles that fit your skills."</p>
                    </div>
                    <div class="rounded-2xl bg-white/5 border border-white/10 p-6">
                        <h2 class="text-xl font-semibold text-white mb-2">"For companies"</h2>
                        <p class="text-gray-300">"Describe who you need and meet candidates ready to start."</p>
                    </div>
                </section>
                <section id="pricing" class="max-w-5xl mx-auto mt-16 rounded-2xl bg-white/5 border border-white/10 p-6">
                    <h2 class="text-2xl font-semibold text-white mb-2">"Pricing"</h2>
                    <p class="text-gray-300">"Creating a profile is free. Companies pay only when they hire."</p>
                </section>
                <section id="contact" class="max-w-5xl mx-auto mt-6 rounded-2xl bg-white/5 border border-white/10 p-6">
                    <h2 class="text-2xl font-semibold text-white mb-2">"Contact us"</h2>
                    <p class="text-gray-300">
                        "Questions? Write to "
                        <a href="mailto:hello@talentbook.app" class="text-[#FFC107] hover:underline">"hello@talentbook.app"</a>
                    </p>
                </section>
            </main>
            <Footer/>

            <SignupModal
                is_open=modals.signup
                on_close=Callback::new(move |_| modals.close_auth())
                on_switch_to_login=Callback::new(move |_| modals.switch_to_login())
                on_open_privacy_terms=Callback::new(move |_| modals.open_privacy_terms())
                on_submit=Callback::new(move |form| navigation.capture_signup(form))
            />
            <LoginModal
                is_open=modals.login
                on_close=Callback::new(move |_| modals.close_auth())
                on_switch_to_signup=Callback::new(move |_| modals.switch_to_signup())
            />
            <PrivacyTermsModal
                is_open=modals.privacy_terms
                on_close=Callback::new(move |_| modals.close_privacy_terms())
            />
        </div>
    }
}
