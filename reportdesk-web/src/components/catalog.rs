//! Report catalog: the list of report buttons and the panels they open.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reportdesk_core::AppConfig;
use reportdesk_core::date_range::DateRange;
use reportdesk_core::feedback::SuggestionForm;
use reportdesk_core::report::ReportItem;
use reportdesk_core::usage::{RunDecision, UpsellReason, Usage};
use tracing::{info, warn};

use super::{LimitModal, ReportButton};
use crate::api::ApiClient;

/// Grid of reports for the selected range.
#[component]
pub fn ReportCatalog(
    items: Vec<ReportItem>,
    #[prop(into)] range: Signal<DateRange>,
    usage: RwSignal<Usage>,
    /// Session token sent with suggestions
    #[prop(into)]
    token: Signal<Option<String>>,
) -> impl IntoView {
    let upsell = RwSignal::new(None::<UpsellReason>);
    let info_for = RwSignal::new(None::<ReportItem>);
    let feedback_for = RwSignal::new(None::<ReportItem>);
    let last_run = RwSignal::new(None::<String>);

    let on_execute = Callback::new(move |item: ReportItem| {
        match usage.get_untracked().check(&item) {
            RunDecision::Run => {
                usage.update(Usage::record_run);
                let range = range.get_untracked();
                info!(
                    report = %item.id,
                    from = %range.start(),
                    to = %range.end(),
                    days = range.days(),
                    "running report"
                );
                last_run.set(Some(format!("Running \"{}\" for {}", item.label, range.label())));
            }
            RunDecision::Upsell(reason) => {
                info!(report = %item.id, ?reason, "run blocked by plan");
                upsell.set(Some(reason));
            }
        }
    });
    let on_info = Callback::new(move |item: ReportItem| {
        feedback_for.set(None);
        info_for.set(Some(item));
    });
    let on_feedback = Callback::new(move |item: ReportItem| {
        info_for.set(None);
        feedback_for.set(Some(item));
    });

    view! {
        <section class="report-catalog mt-6">
            <div class="mb-3 flex items-center justify-between">
                <h2 class="text-sm font-semibold uppercase tracking-wide text-slate-500">"Reports"</h2>
                <span class="text-xs text-slate-500">
                    {move || usage.get().summary()}
                    {move || usage.get().remaining().map(|left| format!(" \u{b7} {left} left"))}
                </span>
            </div>
            <div class="grid gap-3 sm:grid-cols-2">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <ReportButton
                                item=item
                                on_execute=on_execute
                                on_info=on_info
                                on_feedback=on_feedback
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || last_run.with(Option::is_some)>
                <p class="mt-4 rounded-md bg-emerald-50 px-3 py-2 text-sm text-emerald-700" role="status">
                    {move || last_run.get().unwrap_or_default()}
                </p>
            </Show>

            {move || info_for.get().map(|item| view! { <InfoPanel item=item on_close=move |_: ()| info_for.set(None) /> })}
            {move || feedback_for.get().map(|item| view! { <FeedbackPanel item=item token=token on_close=move |_: ()| feedback_for.set(None) /> })}

            <LimitModal reason=upsell usage=usage on_close=move |_: ()| upsell.set(None) />
        </section>
    }
}

#[component]
fn InfoPanel(item: ReportItem, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let details = item
        .metadata
        .iter()
        .map(|(key, value)| {
            let value = value
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| value.to_string());
            view! {
                <div class="flex gap-2">
                    <dt class="font-medium text-slate-500">{key.clone()}</dt>
                    <dd class="text-slate-700">{value}</dd>
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class="info-panel mt-4 rounded-md border border-slate-200 bg-white p-4 text-sm">
            <div class="mb-2 flex items-center justify-between">
                <h3 class="font-semibold text-slate-900">{item.label.clone()}</h3>
                <button type="button" class="text-slate-400 hover:text-slate-600" on:click=move |_| on_close.run(())>
                    "\u{2715}"
                </button>
            </div>
            <dl class="space-y-1">
                <div class="flex gap-2">
                    <dt class="font-medium text-slate-500">"tier"</dt>
                    <dd class="text-slate-700">{if item.is_pro { "pro" } else { "standard" }}</dd>
                </div>
                {details}
            </dl>
        </aside>
    }
}

#[component]
fn FeedbackPanel(
    item: ReportItem,
    token: Signal<Option<String>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let text = RwSignal::new(String::new());
    let sent = RwSignal::new(false);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let report_id = item.id.clone();

    let send = move |_: ev::MouseEvent| {
        if pending.get_untracked() {
            return;
        }
        let form = SuggestionForm {
            report_id: report_id.clone(),
            text: text.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        pending.set(true);
        let client = ApiClient::new(config.clone());
        let token = token.get_untracked();
        spawn_local(async move {
            let result = client.send_suggestion(&request, token.as_deref()).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    info!(report = %request.report_id, chars = request.message.chars().count(), "suggestion sent");
                    sent.set(true);
                }
                Err(e) => {
                    warn!(report = %request.report_id, "suggestion failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <aside class="feedback-panel mt-4 rounded-md border border-slate-200 bg-white p-4 text-sm">
            <div class="mb-2 flex items-center justify-between">
                <h3 class="font-semibold text-slate-900">{format!("Suggest an improvement to \"{}\"", item.label)}</h3>
                <button type="button" class="text-slate-400 hover:text-slate-600" on:click=move |_| on_close.run(())>
                    "\u{2715}"
                </button>
            </div>
            <Show
                when=move || !sent.get()
                fallback=|| view! { <p class="text-emerald-700">"Thanks, your suggestion was sent."</p> }
            >
                <textarea
                    class="h-24 w-full rounded-md border border-slate-300 p-2"
                    placeholder="What would make this report more useful?"
                    bind:value=text
                ></textarea>
                <Show when=move || error.with(Option::is_some)>
                    <p class="mt-1 text-xs text-red-600" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    type="button"
                    class="mt-2 rounded-md bg-indigo-600 px-3 py-1.5 text-white hover:bg-indigo-700 disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=send.clone()
                >
                    {move || if pending.get() { "Sending..." } else { "Send" }}
                </button>
            </Show>
        </aside>
    }
}
