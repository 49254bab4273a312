//! Login and registration forms

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reportdesk_core::AppConfig;
use reportdesk_core::auth::{LoginForm, MIN_PASSWORD_LEN, RegisterForm, Session};
use tracing::{info, warn};

use crate::api::ApiClient;

/// Email + password sign-in.
#[component]
pub fn LoginPanel(
    #[prop(into)] on_session: Callback<Session>,
    #[prop(into)] on_switch: Callback<()>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
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
        spawn_local(async move {
            let result = client.login(&request).await;
            pending.set(false);
            match result {
                Ok(session) => {
                    info!(user = %session.user.email, "signed in");
                    on_session.run(session);
                }
                Err(e) => {
                    warn!("sign-in failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <AuthCard title="Sign in to Reportdesk">
            <form class="space-y-4" on:submit=submit novalidate=true>
                <Field label="Email">
                    <input type="email" name="email" autocomplete="email" class=INPUT_CLASS bind:value=email />
                </Field>
                <Field label="Password">
                    <input
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        class=INPUT_CLASS
                        bind:value=password
                    />
                </Field>
                <ErrorLine error=error />
                <SubmitButton pending=pending idle="Sign in" busy="Signing in..." />
            </form>
            <p class="mt-4 text-center text-sm text-slate-500">
                "No account yet? "
                <button type="button" class="text-indigo-600 hover:underline" on:click=move |_| on_switch.run(())>
                    "Create one"
                </button>
            </p>
        </AuthCard>
    }
}

/// New account registration.
#[component]
pub fn RegisterPanel(
    #[prop(into)] on_session: Callback<Session>,
    #[prop(into)] on_switch: Callback<()>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let accept_terms = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            accept_terms: accept_terms.get_untracked(),
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
        spawn_local(async move {
            let result = client.register(&request).await;
            pending.set(false);
            match result {
                Ok(session) => {
                    info!(user = %session.user.email, "account created");
                    on_session.run(session);
                }
                Err(e) => {
                    warn!("registration failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <AuthCard title="Create your account">
            <form class="space-y-4" on:submit=submit novalidate=true>
                <Field label="Name">
                    <input type="text" name="name" autocomplete="name" class=INPUT_CLASS bind:value=name />
                </Field>
                <Field label="Email">
                    <input type="email" name="email" autocomplete="email" class=INPUT_CLASS bind:value=email />
                </Field>
                <Field label="Password">
                    <input
                        type="password"
                        name="password"
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        placeholder=format!("At least {MIN_PASSWORD_LEN} characters")
                        bind:value=password
                    />
                </Field>
                <Field label="Confirm password">
                    <input
                        type="password"
                        name="confirm_password"
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        bind:value=confirm
                    />
                </Field>
                <label class="flex items-center gap-2 text-sm text-slate-600">
                    <input type="checkbox" name="accept_terms" bind:checked=accept_terms />
                    "I accept the terms of service"
                </label>
                <ErrorLine error=error />
                <SubmitButton pending=pending idle="Create account" busy="Creating account..." />
            </form>
            <p class="mt-4 text-center text-sm text-slate-500">
                "Already registered? "
                <button type="button" class="text-indigo-600 hover:underline" on:click=move |_| on_switch.run(())>
                    "Sign in"
                </button>
            </p>
        </AuthCard>
    }
}

const INPUT_CLASS: &str =
    "mt-1 block w-full rounded-md border border-slate-300 px-3 py-2 text-sm focus:border-indigo-500 focus:outline-none";

#[component]
fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="mx-auto mt-16 w-full max-w-sm rounded-xl border border-slate-200 bg-white p-8 shadow-sm">
            <h1 class="mb-6 text-xl font-semibold text-slate-900">{title}</h1>
            {children()}
        </div>
    }
}

#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-slate-700">
            {label}
            {children()}
        </label>
    }
}

#[component]
fn ErrorLine(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="text-sm text-red-600" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

#[component]
fn SubmitButton(pending: RwSignal<bool>, idle: &'static str, busy: &'static str) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700 disabled:opacity-60"
            disabled=move || pending.get()
        >
            {move || if pending.get() { busy } else { idle }}
        </button>
    }
}
