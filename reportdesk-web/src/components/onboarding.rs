use leptos::prelude::*;
use reportdesk_core::onboarding::OnboardingStep;
use tracing::debug;

/// First-run wizard shown after sign-up.
#[component]
pub fn Onboarding(#[prop(into)] on_finish: Callback<()>) -> impl IntoView {
    let step = RwSignal::new(OnboardingStep::default());

    let advance = move |_| {
        if step.get_untracked().is_last() {
            on_finish.run(());
        } else {
            step.update(|s| *s = s.next());
            debug!(step = ?step.get_untracked(), "onboarding advanced");
        }
    };

    view! {
        <section class="onboarding mx-auto mt-16 w-full max-w-lg rounded-xl border border-slate-200 bg-white p-8 shadow-sm">
            <div class="mb-2 flex justify-between text-xs text-slate-500">
                <span>{move || {
                    let (current, total) = step.get().progress();
                    format!("Step {current} of {total}")
                }}</span>
                <Show when=move || !step.get().is_last()>
                    <button
                        type="button"
                        class="text-slate-500 hover:text-slate-700"
                        on:click=move |_| step.set(OnboardingStep::Done)
                    >
                        "Skip"
                    </button>
                </Show>
            </div>
            <div class="mb-6 h-1.5 w-full rounded bg-slate-100">
                <div
                    class="h-1.5 rounded bg-indigo-600 transition-all"
                    style=move || format!("width: {}%", step.get().percent())
                ></div>
            </div>

            <h2 class="mb-2 text-lg font-semibold text-slate-900">{move || step.get().title()}</h2>
            <p class="mb-8 text-sm text-slate-600">{move || step.get().body()}</p>

            <div class="flex justify-between">
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm text-slate-600 hover:bg-slate-100 disabled:opacity-40"
                    disabled=move || step.get().is_first()
                    on:click=move |_| step.update(|s| *s = s.back())
                >
                    "Back"
                </button>
                <button
                    type="button"
                    class="rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700"
                    on:click=advance
                >
                    {move || if step.get().is_last() { "Go to dashboard" } else { "Next" }}
                </button>
            </div>
        </section>
    }
}
