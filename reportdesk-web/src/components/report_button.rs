//! Report action item: primary button plus the secondary dropdown.

use leptos::html;
use leptos::prelude::*;
use reportdesk_core::menu::{MenuEntry, MenuEvent, MenuState, ReportIntent};
use reportdesk_core::report::{ReportItem, ReportTier};

use crate::hooks::use_click_outside;

/// One report in the catalog.
///
/// The primary button always runs `on_execute`. Standard items also get a
/// trigger opening "More Information" / "Send a Suggestion" / "Mark as
/// Favorite"; pro items render neither trigger nor menu and register no
/// outside-click listener.
#[component]
pub fn ReportButton(
    item: ReportItem,
    #[prop(into)] on_execute: Callback<ReportItem>,
    #[prop(into)] on_info: Callback<ReportItem>,
    #[prop(into)] on_feedback: Callback<ReportItem>,
) -> impl IntoView {
    let tier = item.tier();
    let label = item.label.clone();
    let report_id = item.id.clone();
    let item = StoredValue::new(item);
    let menu = RwSignal::new(MenuState::Closed);
    let root = NodeRef::<html::Div>::new();

    let dispatch = move |event: MenuEvent| {
        let current = menu.get_untracked();
        let next = current.on(event, tier).commit(|intent| {
            let item = item.get_value();
            match intent {
                ReportIntent::Execute => on_execute.run(item),
                ReportIntent::Info => on_info.run(item),
                ReportIntent::Feedback => on_feedback.run(item),
            }
        });
        if next != current {
            menu.set(next);
        }
    };

    if tier.has_menu() {
        use_click_outside(root, Callback::new(move |()| dispatch(MenuEvent::OutsideClick)));
    }

    view! {
        <div
            node_ref=root
            class=move || format!("report-item flex items-stretch {}", menu.get().layer_class())
            data-report-id=report_id
        >
            <button
                type="button"
                class=move || {
                    let rounding = if tier.has_menu() { "rounded-l-md" } else { "rounded-md" };
                    format!("{} flex-1 px-4 py-2 text-left text-sm font-medium {}", tier.button_class(), rounding)
                }
                data-role="primary"
                on:click=move |_| dispatch(MenuEvent::Primary)
            >
                {label}
                {(tier == ReportTier::Pro).then(|| view! {
                    <span class="ml-2 rounded bg-white/20 px-1.5 py-0.5 text-xs uppercase tracking-wide">"Pro"</span>
                })}
            </button>

            {tier.has_menu().then(|| view! {
                <button
                    type="button"
                    class="report-trigger rounded-r-md border border-l-0 border-slate-200 bg-white px-2 text-slate-500 hover:bg-slate-50"
                    aria-haspopup="menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    data-role="trigger"
                    on:click=move |_| dispatch(MenuEvent::Trigger)
                >
                    "\u{22EF}"
                </button>
                <Show when=move || menu.get().is_open()>
                    <ReportMenu on_select=Callback::new(move |entry| dispatch(MenuEvent::Select(entry))) />
                </Show>
            })}
        </div>
    }
}

/// The dropdown list itself. Disabled entries stay visible but inert.
#[component]
fn ReportMenu(on_select: Callback<MenuEntry>) -> impl IntoView {
    view! {
        <ul
            role="menu"
            class="report-menu absolute right-0 top-full mt-1 w-56 rounded-md border border-slate-200 bg-white py-1 shadow-lg"
        >
            {MenuEntry::ALL
                .into_iter()
                .map(|entry| {
                    let enabled = entry.is_enabled();
                    let class = if enabled {
                        "w-full px-4 py-2 text-left text-sm text-slate-700 hover:bg-slate-100"
                    } else {
                        "w-full px-4 py-2 text-left text-sm text-slate-400 cursor-not-allowed"
                    };
                    view! {
                        <li>
                            <button
                                type="button"
                                role="menuitem"
                                class=class
                                disabled=!enabled
                                aria-disabled=(!enabled).to_string()
                                data-entry=entry_key(entry)
                                on:click=move |_| on_select.run(entry)
                            >
                                {entry.label()}
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn entry_key(entry: MenuEntry) -> &'static str {
    match entry {
        MenuEntry::MoreInformation => "info",
        MenuEntry::SendSuggestion => "feedback",
        MenuEntry::MarkAsFavorite => "favorite",
    }
}
