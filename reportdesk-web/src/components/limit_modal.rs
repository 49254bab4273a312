//! Limit-exceeded upsell modal

use leptos::ev;
use leptos::prelude::*;
use reportdesk_core::AppConfig;
use reportdesk_core::usage::{UpsellReason, Usage};

use crate::hooks::use_escape_key;

/// Overlay shown when a run is blocked by the plan.
///
/// Closes on the close button, on Escape, or on a click that both starts and
/// ends on the overlay itself (text selection dragged out of the dialog does
/// not count).
#[component]
pub fn LimitModal(
    #[prop(into)] reason: Signal<Option<UpsellReason>>,
    #[prop(into)] usage: Signal<Usage>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let upgrade_url = use_context::<AppConfig>().unwrap_or_default().upgrade_url;
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |event: &ev::MouseEvent| -> bool {
        match (event.target(), event.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        }
    };

    let close_if_open = move || {
        if reason.with_untracked(Option::is_some) {
            on_close.run(());
        }
    };

    use_escape_key(Callback::new(move |()| close_if_open()));

    view! {
        <Show when=move || reason.with(Option::is_some)>
            <div
                class="limit-overlay fixed inset-0 z-50 flex items-center justify-center bg-slate-900/50"
                on:mousedown=move |event| overlay_mouse_down.set(is_direct_overlay_event(&event))
                on:click=move |event| {
                    let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&event);
                    overlay_mouse_down.set(false);
                    if should_close {
                        close_if_open();
                    }
                }
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    class="w-full max-w-md rounded-xl bg-white p-6 shadow-xl"
                >
                    <div class="flex items-start justify-between">
                        <h2 class="text-lg font-semibold text-slate-900">
                            {move || reason.get().map(UpsellReason::headline).unwrap_or_default()}
                        </h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-slate-400 hover:text-slate-600"
                            on:click=move |_| close_if_open()
                        >
                            "\u{2715}"
                        </button>
                    </div>
                    <p class="mt-3 text-sm text-slate-600">
                        "Upgrade to Pro for unlimited runs and access to every report in the catalog."
                    </p>
                    <p class="mt-2 text-xs text-slate-500">{move || usage.get().summary()}</p>
                    <div class="mt-6 flex justify-end gap-3">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm text-slate-600 hover:bg-slate-100"
                            on:click=move |_| close_if_open()
                        >
                            "Maybe later"
                        </button>
                        <a
                            href=upgrade_url.clone()
                            class="rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700"
                        >
                            "Upgrade"
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}
