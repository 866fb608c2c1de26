//! Dashboard showing the authenticated user's own record.

use leptos::prelude::*;

use crate::components::session_gate::{SessionGate, watch_gated};
use crate::net::api;

/// Dashboard page, gated on the session cookie.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <SessionGate>
            <UserInfoPanel/>
        </SessionGate>
    }
}

#[component]
fn UserInfoPanel() -> impl IntoView {
    let user = LocalResource::new(|| api::fetch_user_info());
    watch_gated("user info fetch", user);

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <div class="dashboard-page__user">
                <h2>"User Info"</h2>
                <Suspense fallback=move || view! { <p class="placeholder">"Loading..."</p> }>
                    {move || {
                        user.get()
                            .map(|result| match result {
                                Ok(info) => {
                                    view! {
                                        <pre>
                                            {serde_json::to_string_pretty(&info)
                                                .unwrap_or_default()}
                                        </pre>
                                    }
                                        .into_any()
                                }
                                // Failures already went through the policy.
                                Err(_) => ().into_any(),
                            })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
