use crate::api::AuthError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-red-600/15 border border-red-600/40 text-red-200 px-4 py-3 rounded-lg text-sm" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Dismissible banner for auth failures that would otherwise go unnoticed.
#[component]
pub fn ErrorBanner(
    #[prop(into)] error: Signal<Option<AuthError>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="fixed top-4 inset-x-4 z-[70] mx-auto max-w-xl flex items-start justify-between gap-3 rounded-lg border border-red-600/40 bg-neutral-900/95 px-4 py-3 text-sm text-red-200 shadow-lg" role="alert">
                <span>{move || error.get().map(|e| e.to_string()).unwrap_or_default()}</span>
                <button
                    type="button"
                    aria-label="Dismiss"
                    class="text-red-200/80 hover:text-white"
                    on:click=move |_| on_dismiss.call(())
                >
                    {"✕"}
                </button>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some("Please enter your full name".to_string()));
            view! { <InlineErrorMessage error=error /> }
        });
        assert!(html.contains("Please enter your full name"));
    }

    #[test]
    fn banner_renders_auth_error_text() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some(AuthError::Timeout));
            view! { <ErrorBanner error=error on_dismiss=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Timed out while checking your session"));
        assert!(html.contains("Dismiss"));
    }

    #[test]
    fn banner_hidden_without_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal(None::<AuthError>);
            view! { <ErrorBanner error=error on_dismiss=Callback::new(|_| {}) /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
