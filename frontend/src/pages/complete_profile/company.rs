use super::{
    utils::{company_details, COMPANY_SIZES},
    view_model::use_completion_view_model,
    CompletionLayout, TextField, INPUT_CLASS,
};
use crate::api::SignupIntent;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn CompanyProfileCompletion(intent: SignupIntent, on_complete: Callback<()>) -> impl IntoView {
    let subtitle = format!("Welcome, {}! Set up your company to start hiring.", intent.name);
    let vm = use_completion_view_model(intent, on_complete);
    let pending = vm.submit_action.pending();

    let company_name = create_rw_signal(String::new());
    let industry = create_rw_signal(String::new());
    let company_size = create_rw_signal(String::new());
    let website = create_rw_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let details = company_details(
            &company_name.get_untracked(),
            &industry.get_untracked(),
            &company_size.get_untracked(),
            &website.get_untracked(),
        )
        .map_err(|err| err.to_string());
        vm.submit(details);
    };

    view! {
        <CompletionLayout title="Complete your company profile" subtitle=subtitle error=vm.error>
            <form class="space-y-5" on:submit=handle_submit>
                <TextField id="company-name" label="Company name" placeholder="Acme Inc." value=company_name />
                <TextField id="company-industry" label="Industry" placeholder="Software" value=industry />
                <div>
                    <label for="company-size" class="block text-sm text-gray-300 mb-2">"Company size"</label>
                    <select
                        id="company-size"
                        class=INPUT_CLASS
                        prop:value=move || company_size.get()
                        on:change=move |ev| company_size.set(event_target_value(&ev))
                    >
                        <option value="">"Select size"</option>
                        {COMPANY_SIZES
                            .iter()
                            .map(|size| view! { <option value=*size>{format!("{} employees", size)}</option> })
                            .collect_view()}
                    </select>
                </div>
                <TextField id="company-website" label="Website (optional)" placeholder="https://acme.com" value=website />
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full bg-[#FFC107] hover:bg-[#FFB300] text-black px-6 py-3 rounded-lg font-semibold disabled:opacity-50"
                >
                    {move || if pending.get() { "Creating account..." } else { "Finish" }}
                </button>
            </form>
        </CompletionLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::UserType;
    use crate::test_support::helpers::{intent, provide_fake_app};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_company_sizes() {
        let html = render_to_string(|| {
            provide_fake_app();
            view! {
                <CompanyProfileCompletion
                    intent=intent(UserType::Company)
                    on_complete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Complete your company profile"));
        assert!(html.contains("201-1000 employees"));
        assert!(html.contains("company-website"));
    }
}
