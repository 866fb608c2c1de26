//! Logout route: clears the session and bounces to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::session;

/// Renders nothing; its only job is the side effect.
#[component]
pub fn LogoutPage() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        session::clear_token();
        navigate("/login", NavigateOptions::default());
    });
}
