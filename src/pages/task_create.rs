//! Full task creation form with an assignment picker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::member_picker::MemberPicker;
use crate::components::session_gate::{SessionGate, report_failure, watch_gated};
use crate::components::status_select::StatusSelect;
use crate::net::api;
use crate::state::task_form::TaskDraft;
use crate::util::notify;

/// Task creation page, gated on the session cookie.
#[component]
pub fn TaskCreatePage() -> impl IntoView {
    view! {
        <SessionGate>
            <CreateTaskForm/>
        </SessionGate>
    }
}

#[component]
fn CreateTaskForm() -> impl IntoView {
    let draft = RwSignal::new(TaskDraft::default());

    // The picker needs the full user listing; it races nothing else here.
    let users = LocalResource::new(|| api::fetch_users());
    watch_gated("user list fetch", users);
    let user_list = Signal::derive(move || {
        users.get().and_then(Result::ok).unwrap_or_default()
    });

    let navigate = use_navigate();
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = draft.get_untracked().to_request();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_task(&request).await {
                Ok(()) => {
                    notify::alert("Task created successfully!");
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(error) => report_failure("task create", &error, &navigate),
            }
        });
    };

    view! {
        <div class="form-page">
            <div class="card">
                <h1>"Create Task"</h1>
                <form on:submit=submit>
                    <label class="field">
                        "Title"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || draft.get().title
                            on:input=move |ev| {
                                draft.update(|d| d.title = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="field">
                        "Description"
                        <textarea
                            class="field__input"
                            prop:value=move || draft.get().description
                            on:input=move |ev| {
                                draft.update(|d| d.description = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    <label class="field">
                        "Due Date"
                        <input
                            class="field__input"
                            type="date"
                            prop:value=move || draft.get().due_date
                            on:input=move |ev| {
                                draft.update(|d| d.due_date = event_target_value(&ev));
                            }
                        />
                    </label>
                    <div class="field">
                        "Assigned Members"
                        <div class="member-picker-row">
                            <MemberPicker
                                users=user_list
                                assigned=Signal::derive(move || draft.get().assigned)
                                placeholder="Select a user"
                                on_pick=Callback::new(move |user| {
                                    draft.update(|d| d.add_member(&user));
                                })
                            />
                            <button
                                class="btn btn--danger"
                                type="button"
                                on:click=move |_| draft.update(TaskDraft::clear_members)
                            >
                                "Clear"
                            </button>
                        </div>
                        <div class="member-chips">
                            {move || {
                                draft
                                    .get()
                                    .assigned
                                    .into_iter()
                                    .map(|member| {
                                        let user_id = member.user_id.clone();
                                        view! {
                                            <span class="member-chip">
                                                {member.username.clone()}
                                                <button
                                                    class="member-chip__remove"
                                                    type="button"
                                                    on:click=move |_| {
                                                        draft.update(|d| d.remove_member(&user_id));
                                                    }
                                                >
                                                    "x"
                                                </button>
                                            </span>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </div>
                    <label class="field">
                        "Team ID"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || draft.get().team_id
                            on:input=move |ev| {
                                draft.update(|d| d.team_id = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="field">
                        "Status"
                        <StatusSelect
                            value=Signal::derive(move || draft.get().status)
                            on_change=Callback::new(move |status| {
                                draft.update(|d| d.status = status);
                            })
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Save"
                    </button>
                </form>
            </div>
        </div>
    }
}
