use super::{
    utils::job_seeker_details,
    view_model::use_completion_view_model,
    CompletionLayout, TextField,
};
use crate::api::SignupIntent;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn JobSeekerProfileCompletion(intent: SignupIntent, on_complete: Callback<()>) -> impl IntoView {
    let subtitle = format!(
        "Welcome, {}! Tell employers a bit about yourself.",
        intent.name
    );
    let vm = use_completion_view_model(intent, on_complete);
    let pending = vm.submit_action.pending();

    let headline = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let skills = create_rw_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let details = job_seeker_details(
            &headline.get_untracked(),
            &location.get_untracked(),
            &skills.get_untracked(),
        )
        .map_err(|err| err.to_string());
        vm.submit(details);
    };

    view! {
        <CompletionLayout title="Complete your job seeker profile" subtitle=subtitle error=vm.error>
            <form class="space-y-5" on:submit=handle_submit>
                <TextField id="profile-headline" label="Headline" placeholder="Backend developer" value=headline />
                <TextField id="profile-location" label="Location" placeholder="City, Country" value=location />
                <TextField id="profile-skills" label="Skills (comma separated)" placeholder="Rust, SQL, Kubernetes" value=skills />
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
