//! Login page and the form template it wraps.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::login::{self, LoginField, LoginFormState, LoginSubmitter};
use crate::util::task::spawn_flow;

/// Route wrapper: wires the app's submitter and register navigation into
/// [`LoginTemplate`].
#[component]
pub fn LoginPage() -> impl IntoView {
    let submitter = expect_context::<Arc<dyn LoginSubmitter>>();
    let navigate = use_navigate();
    let on_register = Callback::new(move |()| navigate("/register", NavigateOptions::default()));

    view! { <LoginTemplate submitter=submitter on_register=on_register /> }
}

/// Email + password form with validation and submit feedback.
///
/// `loading` lets the caller disable the form on top of its own in-flight
/// submission. Without `on_register`, the register button does a full-page
/// load of `/register`.
#[component]
pub fn LoginTemplate(
    submitter: Arc<dyn LoginSubmitter>,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    #[prop(optional)] on_register: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());
    let busy = move || form_busy(loading.get(), form.with(|f| f.submitting));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitter = submitter.clone();
        spawn_flow(async move {
            if login::submit_login(&form, submitter.as_ref()).await {
                leptos::logging::log!("login succeeded");
            }
        });
    };

    let on_register_click = move |_| match on_register {
        Some(callback) => callback.run(()),
        None => {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/register");
                }
            }
        }
    };

    let email_error = move || form.with(|f| f.errors.email.clone());
    let password_error = move || form.with(|f| f.errors.password.clone());

    view! {
        <div class="login-container">
            <form class="login-form" on:submit=on_submit novalidate=true>
                <div class="login-header">
                    <h1 class="login-title">"Iniciar Sesión"</h1>
                    <p class="login-subtitle">"Ingresa tus credenciales para acceder a tu cuenta"</p>
                </div>

                <Show when=move || form.with(|f| f.success_message.is_some())>
                    <div class="login-success">
                        {move || form.with(|f| f.success_message.clone().unwrap_or_default())}
                    </div>
                </Show>

                <div class="login-group">
                    <label for="email" class="login-label">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="login-input"
                        class:login-input--error=move || email_error().is_some()
                        placeholder="tu@email.com"
                        autocomplete="email"
                        disabled=busy
                        prop:value=move || form.with(|f| f.data.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_field(LoginField::Email, value));
                        }
                    />
                    <Show when=move || email_error().is_some()>
                        <div class="login-error">{move || email_error().unwrap_or_default()}</div>
                    </Show>
                </div>

                <div class="login-group">
                    <label for="password" class="login-label">
                        "Contraseña"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="login-input"
                        class:login-input--error=move || password_error().is_some()
                        placeholder="••••••••"
                        autocomplete="current-password"
                        disabled=busy
                        prop:value=move || form.with(|f| f.data.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_field(LoginField::Password, value));
                        }
                    />
                    <Show when=move || password_error().is_some()>
                        <div class="login-error">{move || password_error().unwrap_or_default()}</div>
                    </Show>
                </div>

                <button type="submit" class="login-submit" disabled=busy>
                    {move || submit_label(busy())}
                </button>

                <div class="login-footer">
                    <a href="#" class="login-link">
                        "¿Olvidaste tu contraseña?"
                    </a>
                    <div>
                        <span class="login-footer__prompt">"¿No tienes una cuenta? "</span>
                        <button type="button" class="login-register" disabled=busy on:click=on_register_click>
                            "Regístrate aquí"
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}

fn form_busy(loading: bool, submitting: bool) -> bool {
    loading || submitting
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Iniciando sesión..." } else { "Iniciar Sesión" }
}
