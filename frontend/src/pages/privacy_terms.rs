use crate::components::modal::Modal;
use leptos::*;

const SECTIONS: [(&str, &str); 4] = [
    (
        "Information we collect",
        "Your name, email address and the profile details you provide when creating an account.",
    ),
    (
        "How we use it",
        "To match job seekers with companies and to operate your account. We do not sell personal data.",
    ),
    (
        "Your account",
        "You are responsible for keeping your credentials safe and for the accuracy of your profile.",
    ),
    (
        "Contact",
        "Questions about these terms can be sent through the contact section of this site.",
    ),
];

#[component]
pub fn PrivacyTermsModal(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal is_open=is_open title="Privacy Policy and Terms of Use" on_close=on_close stacked=true>
            <div class="space-y-4 max-h-[60vh] overflow-y-auto pr-2">
                {SECTIONS
                    .iter()
                    .map(|(heading, body)| {
                        view! {
                            <section>
                                <h4 class="text-white font-semibold mb-1">{*heading}</h4>
                                <p class="text-sm text-gray-300">{*body}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                type="button"
                class="mt-6 w-full bg-white/10 hover:bg-white/20 text-white px-6 py-3 rounded-lg font-medium"
                on:click=move |_| on_close.call(())
            >
                "Close"
            </button>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn privacy_terms_lists_sections() {
        let html = render_to_string(|| {
            view! { <PrivacyTermsModal is_open=Signal::derive(|| true) on_close=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Information we collect"));
        assert!(html.contains("z-[60]"));
    }
}
