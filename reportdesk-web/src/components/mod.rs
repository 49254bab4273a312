//! Leptos UI components.
//!
//! # Component Hierarchy
//!
//! ```text
//! App
//! ├── LoginPanel / RegisterPanel     (signed out)
//! ├── Onboarding                     (first sign-up)
//! └── Dashboard                      (signed in)
//!     ├── DateRangePicker
//!     └── ReportCatalog
//!         ├── ReportButton (per report)
//!         ├── InfoPanel / FeedbackPanel
//!         └── LimitModal
//! ```

mod auth;
mod catalog;
mod date_range_picker;
mod limit_modal;
mod onboarding;
mod report_button;

pub use auth::{LoginPanel, RegisterPanel};
pub use catalog::ReportCatalog;
pub use date_range_picker::DateRangePicker;
pub use limit_modal::LimitModal;
pub use onboarding::Onboarding;
pub use report_button::ReportButton;

use leptos::prelude::*;
use reportdesk_core::AppConfig;
use reportdesk_core::auth::Session;
use reportdesk_core::date_range::{DateRange, Preset};
use reportdesk_core::report::ReportItem;
use reportdesk_core::usage::Usage;
use tracing::info;

/// Top-level screens. Not URL routes; the app is a single page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Login,
    Register,
    Onboarding,
    Dashboard,
}

/// Root component. Provides `AppConfig` as context.
#[component]
pub fn App(config: AppConfig, catalog: Vec<ReportItem>) -> impl IntoView {
    let free_runs = config.free_runs;
    provide_context(config);
    let catalog = StoredValue::new(catalog);

    let screen = RwSignal::new(Screen::Login);
    let session = RwSignal::new(None::<Session>);
    let usage = RwSignal::new(Usage::with_limit(free_runs));

    let signed_in = move |next: Screen| {
        Callback::new(move |new_session: Session| {
            session.set(Some(new_session));
            screen.set(next);
        })
    };

    let sign_out = move |_: ()| {
        info!("signed out");
        session.set(None);
        screen.set(Screen::Login);
    };

    view! {
        <div class="min-h-screen bg-slate-50 text-slate-900">
            {move || match screen.get() {
                Screen::Login => view! {
                    <LoginPanel
                        on_session=signed_in(Screen::Dashboard)
                        on_switch=move |_: ()| screen.set(Screen::Register)
                    />
                }
                .into_any(),
                Screen::Register => view! {
                    <RegisterPanel
                        on_session=signed_in(Screen::Onboarding)
                        on_switch=move |_: ()| screen.set(Screen::Login)
                    />
                }
                .into_any(),
                Screen::Onboarding => view! {
                    <Onboarding on_finish=move |_: ()| screen.set(Screen::Dashboard) />
                }
                .into_any(),
                Screen::Dashboard => view! {
                    <Dashboard catalog=catalog.get_value() session=session usage=usage on_sign_out=sign_out />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn Dashboard(
    catalog: Vec<ReportItem>,
    session: RwSignal<Option<Session>>,
    usage: RwSignal<Usage>,
    #[prop(into)] on_sign_out: Callback<()>,
) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let initial = Preset::Last7Days.range(today);
    let range = RwSignal::new(initial);
    let token = Signal::derive(move || session.with(|s| s.as_ref().map(|s| s.token.clone())));

    let greeting = move || {
        session.with(|s| match s {
            Some(s) => format!("Hi, {}", s.display_name()),
            None => "Hi".to_owned(),
        })
    };

    view! {
        <header class="border-b border-slate-200 bg-white">
            <div class="mx-auto flex max-w-5xl items-center justify-between px-6 py-4">
                <span class="font-semibold">"Reportdesk"</span>
                <div class="flex items-center gap-4 text-sm">
                    <span class="text-slate-600">{greeting}</span>
                    <button type="button" class="text-slate-500 hover:text-slate-800" on:click=move |_| on_sign_out.run(())>
                        "Sign out"
                    </button>
                </div>
            </div>
        </header>
        <main class="mx-auto max-w-5xl px-6 py-8">
            <DateRangePicker today=today initial=initial on_change=move |r: DateRange| range.set(r) />
            <ReportCatalog items=catalog range=range usage=usage token=token />
        </main>
    }
}
