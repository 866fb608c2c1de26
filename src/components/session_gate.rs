//! Session gate and failure-policy plumbing shared by every protected page.
//!
//! The gate reads the session cookie on activation: absent means navigate to
//! `/login` and render nothing, present means render the page. Failed gated
//! calls all funnel through [`report_failure`], which applies the uniform
//! policy from [`crate::net::api::failure_action`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiError, FailureAction, failure_action};
use crate::util::session;

/// Renders its children only while a session cookie is present; otherwise
/// navigates to `/login` and renders nothing.
///
/// The server never sees the cookie, so SSR output for gated pages is empty
/// and the client decides after hydration.
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let authed = RwSignal::new(session::token().is_some());

    Effect::new(move || {
        let present = session::token().is_some();
        authed.set(present);
        if !present {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || authed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Send already-authenticated visitors from the login/signup forms to the
/// dashboard. Call from the component body.
pub fn redirect_when_authenticated() {
    let navigate = use_navigate();
    Effect::new(move || {
        if session::token().is_some() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });
}

/// Apply the uniform failure policy to one failed gated call: drop the
/// session and return to login when the server rejected it, otherwise log
/// and leave the view empty.
pub fn report_failure(context: &str, error: &ApiError, navigate: &impl Fn(&str, NavigateOptions)) {
    match failure_action(error) {
        FailureAction::Reauthenticate => {
            session::clear_token();
            navigate("/login", NavigateOptions::default());
        }
        FailureAction::GiveUp => leptos::logging::error!("{context}: {error}"),
    }
}

/// Watch a gated fetch and apply [`report_failure`] when it fails.
pub fn watch_gated<T: Clone + 'static>(
    context: &'static str,
    resource: LocalResource<Result<T, ApiError>>,
) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(Err(error)) = resource.get() {
            report_failure(context, &error, &navigate);
        }
    });
}
