use crate::components::{error::InlineErrorMessage, modal::Modal};
use leptos::{ev::SubmitEvent, *};

pub mod utils;
pub mod view_model;

use view_model::use_login_view_model;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/10 border border-white/20 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-red-600";

#[component]
pub fn LoginModal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    on_switch_to_signup: Callback<()>,
) -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let form = vm.form;

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Modal is_open=is_open title="Welcome back" on_close=on_close>
            <form class="space-y-5" on:submit=handle_submit>
                <div>
                    <label for="login-email" class="block text-sm text-gray-300 mb-2">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        class=INPUT_CLASS
                        placeholder="jane@example.com"
                        autocomplete="email"
                        required
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="login-password" class="block text-sm text-gray-300 mb-2">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        class=INPUT_CLASS
                        placeholder="••••••••"
                        autocomplete="current-password"
                        required
                        prop:value=move || form.password.get()
                        on:input=move |ev| form.password.set(event_target_value(&ev))
                    />
                </div>

                <InlineErrorMessage error=vm.error />

                <div class="space-y-3">
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full bg-[#FFC107] hover:bg-[#FFB300] text-black px-6 py-3 rounded-lg font-semibold disabled:opacity-50"
                    >
                        {move || if pending.get() { "Logging in..." } else { "Log In" }}
                    </button>
                    <button
                        type="button"
                        class="w-full bg-white/10 hover:bg-white/20 text-white px-6 py-3 rounded-lg font-medium"
                        on:click=move |_| on_switch_to_signup.call(())
                    >
                        "Create a new account"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
