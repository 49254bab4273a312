use chrono::NaiveDate;
use leptos::prelude::*;
use reportdesk_core::date_range::{DateRange, Preset};

/// Preset buttons plus two native date inputs.
///
/// `on_change` only ever sees valid ranges; invalid input shows an inline
/// error and keeps the last good range.
#[component]
pub fn DateRangePicker(
    today: NaiveDate,
    initial: DateRange,
    #[prop(into)] on_change: Callback<DateRange>,
) -> impl IntoView {
    let (start0, end0) = initial.to_input_values();
    let start = RwSignal::new(start0);
    let end = RwSignal::new(end0);
    let current = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);

    let apply = move || match DateRange::parse(&start.get_untracked(), &end.get_untracked()) {
        Ok(range) => {
            error.set(None);
            if range != current.get_untracked() {
                current.set(range);
                on_change.run(range);
            }
        }
        Err(e) => error.set(Some(e.to_string())),
    };

    let pick = move |preset: Preset| {
        let (s, e) = preset.range(today).to_input_values();
        start.set(s);
        end.set(e);
        apply();
    };

    view! {
        <div class="date-range-picker flex flex-wrap items-end gap-3">
            <div class="flex gap-1">
                {Preset::ALL
                    .into_iter()
                    .map(|preset| {
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    let active = current.get().matching_preset(today) == Some(preset);
                                    if active {
                                        "rounded-md bg-indigo-600 px-3 py-1.5 text-xs font-medium text-white"
                                    } else {
                                        "rounded-md bg-slate-100 px-3 py-1.5 text-xs text-slate-700 hover:bg-slate-200"
                                    }
                                }
                                on:click=move |_| pick(preset)
                            >
                                {preset.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <label class="text-xs text-slate-500">
                "From"
                <input
                    type="date"
                    class="ml-2 rounded-md border border-slate-300 px-2 py-1 text-sm"
                    prop:value=move || start.get()
                    on:change=move |ev| {
                        start.set(event_target_value(&ev));
                        apply();
                    }
                />
            </label>
            <label class="text-xs text-slate-500">
                "To"
                <input
                    type="date"
                    class="ml-2 rounded-md border border-slate-300 px-2 py-1 text-sm"
                    prop:value=move || end.get()
                    on:change=move |ev| {
                        end.set(event_target_value(&ev));
                        apply();
                    }
                />
            </label>
            <span class="text-sm text-slate-700">
                {move || {
                    let range = current.get();
                    let days = range.days();
                    format!("{} ({days} {})", range.label(), if days == 1 { "day" } else { "days" })
                }}
            </span>
            <Show when=move || error.with(Option::is_some)>
                <p class="w-full text-xs text-red-600" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
