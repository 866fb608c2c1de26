//! Team info screen. Read-only: the roster renders but nothing saves.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::session_gate::{SessionGate, watch_gated};
use crate::net::api;

/// Team info page, gated on the session cookie.
#[component]
pub fn TeamEditPage() -> impl IntoView {
    view! {
        <SessionGate>
            <TeamInfoPanel/>
        </SessionGate>
    }
}

#[component]
fn TeamInfoPanel() -> impl IntoView {
    let params = use_params_map();
    let team_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    let team = LocalResource::new(move || {
        let id = team_id.get();
        async move { api::fetch_team(&id).await }
    });
    watch_gated("team info fetch", team);

    view! {
        <div class="form-page">
            <Show
                when=move || team.get().is_some()
                fallback=|| view! { <p class="placeholder">"Loading..."</p> }
            >
                {move || {
                    team.get()
                        .map(|result| match result {
                            Ok(info) => {
                                view! {
                                    <div class="card">
                                        <h1>"Edit Team"</h1>
                                        <p>"Name: " {info.name.clone()}</p>
                                        <p>"Admin: " {info.admin_id.clone()}</p>
                                        <h2>"Members"</h2>
                                        <ul class="member-list">
                                            {info
                                                .members
                                                .iter()
                                                .map(|member| {
                                                    view! {
                                                        <li>
                                                            {member.username.clone()} " ("
                                                            {member.user_id.clone()} ")"
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! { <p class="placeholder">"Team not found"</p> }.into_any()
                            }
                        })
                }}
            </Show>
        </div>
    }
}
