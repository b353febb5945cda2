use crate::{
    api::{SignupError, SignupForm, UserType},
    components::{error::InlineErrorMessage, modal::Modal},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/10 border border-white/20 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-red-600";

#[component]
fn RoleOption(
    role: UserType,
    selected: RwSignal<UserType>,
    label: &'static str,
    description: &'static str,
) -> impl IntoView {
    let active = move || selected.get() == role;
    view! {
        <button
            type="button"
            aria-pressed=move || active().to_string()
            class=move || {
                if active() {
                    "w-full text-left p-4 rounded-xl border transition-all duration-200 border-[#FFC107] bg-white/10"
                } else {
                    "w-full text-left p-4 rounded-xl border transition-all duration-200 border-white/15 hover:border-white/30 hover:bg-white/5"
                }
            }
            on:click=move |_| selected.set(role)
        >
            <div class="text-white font-semibold">{label}</div>
            <div class="text-sm text-gray-300 mt-1">{description}</div>
        </button>
    }
}

/// Collects the raw sign-up form. `on_submit` validates it; nothing is sent to
/// the auth service until the completion screen is done.
#[component]
pub fn SignupModal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    on_switch_to_login: Callback<()>,
    on_open_privacy_terms: Callback<()>,
    on_submit: Callback<SignupForm, Result<(), SignupError>>,
) -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let user_type = create_rw_signal(UserType::JobSeeker);
    let error = create_rw_signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            user_type: user_type.get_untracked().to_string(),
        };
        match on_submit.call(form) {
            Ok(()) => {
                error.set(None);
                password.set(String::new());
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <Modal is_open=is_open title="Create your account" on_close=on_close>
            <form class="space-y-5" on:submit=handle_submit>
                <div>
                    <label class="block text-sm text-gray-300 mb-2">"I am looking to:"</label>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                        <RoleOption
                            role=UserType::JobSeeker
                            selected=user_type
                            label="Find a job"
                            description="Create a profile and match with roles"
                        />
                        <RoleOption
                            role=UserType::Company
                            selected=user_type
                            label="Hire talent"
                            description="Create a company profile and post jobs"
                        />
                    </div>
                </div>
                <div>
                    <label for="signup-name" class="block text-sm text-gray-300 mb-2">"Full name"</label>
                    <input
                        id="signup-name"
                        class=INPUT_CLASS
                        placeholder="Jane Doe"
                        autocomplete="name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="signup-email" class="block text-sm text-gray-300 mb-2">"Email"</label>
                    <input
                        id="signup-email"
                        type="email"
                        class=INPUT_CLASS
                        placeholder="jane@example.com"
                        autocomplete="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="signup-password" class="block text-sm text-gray-300 mb-2">"Password"</label>
                    <input
                        id="signup-password"
                        type="password"
                        class=INPUT_CLASS
                        placeholder="••••••••"
                        autocomplete="new-password"
                        required
                        minlength="6"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>

                <InlineErrorMessage error=error />

                <p class="text-xs text-gray-400">
                    "By creating an account, you agree to our "
                    <button
                        type="button"
                        class="text-[#FFC107] underline underline-offset-2"
                        on:click=move |_| on_open_privacy_terms.call(())
                    >
                        "Privacy Policy and Terms of Use"
                    </button>
                    "."
                </p>

                <div class="space-y-3">
                    <button
                        type="submit"
                        class="w-full bg-[#FFC107] hover:bg-[#FFB300] text-black px-6 py-3 rounded-lg font-semibold"
                    >
                        "Create account"
                    </button>
                    <button
                        type="button"
                        class="w-full bg-white/10 hover:bg-white/20 text-white px-6 py-3 rounded-lg font-medium"
                        on:click=move |_| on_switch_to_login.call(())
                    >
                        "I already have an account"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
