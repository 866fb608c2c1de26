//! Public landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Welcome screen with a single entry point into the app.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="home-page">
            <h1>"Welcome to Taskboard"</h1>
            <p>"Organize your team's work in one place."</p>
            <button
                class="btn btn--primary"
                on:click=move |_| navigate("/login", NavigateOptions::default())
            >
                "Get Started"
            </button>
        </div>
    }
}
