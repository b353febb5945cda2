use leptos::ev::KeyboardEvent;
use leptos::*;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    /// Raises the modal above other open modals.
    #[prop(optional)]
    stacked: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let layer_class = if stacked {
        "fixed inset-0 z-[60] flex items-center justify-center p-4"
    } else {
        "fixed inset-0 z-50 flex items-center justify-center p-4"
    };
    let title_text = Signal::derive(move || title.get());

    view! {
        <Show when=move || is_open.get()>
            <div class=layer_class>
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/60"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-10 w-full max-w-lg rounded-2xl bg-neutral-900 border border-white/10 p-6 shadow-2xl"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-xl font-semibold text-white">{move || title_text.get()}</h3>
                        <button
                            type="button"
                            aria-label="Close"
                            class="p-2 rounded-lg hover:bg-white/10 text-white/80"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
