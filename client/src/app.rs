//! Root application component, SSR shell, and service composition.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the single place where configuration becomes concrete services:
//! it picks the login transport, builds the shared `Session`, and provides
//! the `LoginSubmitter` and `StudentsApi` that pages pull from context. In
//! HTTP login mode it also checks once that the auth backend is reachable.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ClientConfig, LoginMode};
use crate::net::api::{HttpStudentsApi, StudentsApi};
use crate::net::auth::{HttpLogin, LoginService, LoginTransport, SimulatedLogin};
use crate::pages::{login::LoginPage, students::StudentsPage};
use crate::state::login::LoginSubmitter;
use crate::state::session::Session;
use crate::util::task::spawn_flow;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Login transport for the configured mode.
pub fn login_transport(config: &ClientConfig) -> Arc<dyn LoginTransport> {
    match config.login_mode {
        LoginMode::Simulated => Arc::new(SimulatedLogin::default()),
        LoginMode::Http => Arc::new(HttpLogin::new(config.auth_base_url.clone())),
    }
}

/// Reachability of the auth backend. Simulated mode has none to check.
pub async fn check_auth_backend(config: &ClientConfig) -> Option<bool> {
    match config.login_mode {
        LoginMode::Simulated => None,
        LoginMode::Http => Some(HttpLogin::new(config.auth_base_url.clone()).probe().await),
    }
}

/// Root application component.
///
/// Provides the session and service contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid build configuration, using defaults: {e}");
        ClientConfig::default()
    });
    let session = Session::for_platform();

    let check_config = config.clone();
    spawn_flow(async move {
        check_auth_backend(&check_config).await;
    });

    let submitter: Arc<dyn LoginSubmitter> = Arc::new(LoginService::new(login_transport(&config), session.clone()));
    let students: Arc<dyn StudentsApi> = Arc::new(HttpStudentsApi::new(config.api_base_url.clone(), session.clone()));

    provide_context(config);
    provide_context(session);
    provide_context(submitter);
    provide_context(students);

    view! {
        <Title text="Campus"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("students")) view=StudentsPage/>
            </Routes>
        </Router>
    }
}
