//! Task edit screen: fetch, mutate in memory, save explicitly.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::member_picker::MemberPicker;
use crate::components::session_gate::{SessionGate, report_failure, watch_gated};
use crate::components::status_select::StatusSelect;
use crate::net::api;
use crate::net::types::Task;
use crate::state::task_form::{assign_member, unassign_member};
use crate::util::notify;

/// Task edit page, gated on the session cookie.
#[component]
pub fn TaskEditPage() -> impl IntoView {
    view! {
        <SessionGate>
            <EditTaskForm/>
        </SessionGate>
    }
}

#[component]
fn EditTaskForm() -> impl IntoView {
    let params = use_params_map();
    let task_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    // The task and the user listing load as independent requests; neither
    // waits for the other and each fills its own slice of view state.
    let fetched = LocalResource::new(move || {
        let id = task_id.get();
        async move { api::fetch_task(&id).await }
    });
    watch_gated("task fetch", fetched);

    let users = LocalResource::new(|| api::fetch_users());
    watch_gated("user list fetch", users);
    let user_list = Signal::derive(move || {
        users.get().and_then(Result::ok).unwrap_or_default()
    });

    // Working copy. Edits stay here until the save button sends one full
    // update to the backend.
    let task = RwSignal::new(None::<Task>);
    Effect::new(move || {
        if let Some(Ok(loaded)) = fetched.get() {
            if task.with_untracked(Option::is_none) {
                task.set(Some(loaded));
            }
        }
    });

    let loading = move || fetched.get().is_none();

    let navigate = use_navigate();
    // Copyable so the nested Show children can share it.
    let submit = Callback::new(move |()| {
        let Some(edited) = task.get_untracked() else {
            return;
        };
        let id = task_id.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::update_task(&id, &edited).await {
                Ok(()) => {
                    notify::alert("Task updated successfully!");
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(error) => report_failure("task update", &error, &navigate),
            }
        });
    });

    view! {
        <div class="form-page">
            <Show
                when=move || !loading()
                fallback=|| view! { <p class="placeholder">"Loading..."</p> }
            >
                <Show
                    when=move || task.get().is_some()
                    fallback=|| view! { <p class="placeholder">"Task not found"</p> }
                >
                    <div class="card">
                        <h1>"Edit Task"</h1>
                        <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }>
                            <label class="field">
                                "Title"
                                <input
                                    class="field__input"
                                    type="text"
                                    prop:value=move || {
                                        task.get().map(|t| t.title).unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        task.update(|t| {
                                            if let Some(t) = t {
                                                t.title = event_target_value(&ev);
                                            }
                                        });
                                    }
                                />
                            </label>
                            <label class="field">
                                "Description"
                                <textarea
                                    class="field__input"
                                    prop:value=move || {
                                        task.get().map(|t| t.description).unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        task.update(|t| {
                                            if let Some(t) = t {
                                                t.description = event_target_value(&ev);
                                            }
                                        });
                                    }
                                ></textarea>
                            </label>
                            <label class="field">
                                "Due Date"
                                <input
                                    class="field__input"
                                    type="date"
                                    prop:value=move || {
                                        task.get().map(|t| t.due_date).unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        task.update(|t| {
                                            if let Some(t) = t {
                                                t.due_date = event_target_value(&ev);
                                            }
                                        });
                                    }
                                />
                            </label>
                            <label class="field">
                                "Status"
                                <StatusSelect
                                    value=Signal::derive(move || {
                                        task.get().map(|t| t.status).unwrap_or_default()
                                    })
                                    on_change=Callback::new(move |status| {
                                        task.update(|t| {
                                            if let Some(t) = t {
                                                t.status = status;
                                            }
                                        });
                                    })
                                />
                            </label>
                            <div class="field">
                                "Assigned Members"
                                <ul class="member-list">
                                    {move || {
                                        task.get()
                                            .map(|t| t.assigned_to)
                                            .unwrap_or_default()
                                            .into_iter()
                                            .map(|member| {
                                                let user_id = member.user_id.clone();
                                                view! {
                                                    <li class="member-list__row">
                                                        <span>{member.username.clone()}</span>
                                                        <button
                                                            class="btn btn--danger"
                                                            type="button"
                                                            on:click=move |_| {
                                                                task.update(|t| {
                                                                    if let Some(t) = t {
                                                                        unassign_member(t, &user_id);
                                                                    }
                                                                });
                                                            }
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </ul>
                                <MemberPicker
                                    users=user_list
                                    assigned=Signal::derive(move || {
                                        task.get().map(|t| t.assigned_to).unwrap_or_default()
                                    })
                                    placeholder="Add member"
                                    on_pick=Callback::new(move |user| {
                                        task.update(|t| {
                                            if let Some(t) = t {
                                                assign_member(t, &user);
                                            }
                                        });
                                    })
                                />
                            </div>
                            <button class="btn btn--primary" type="submit">
                                "Save"
                            </button>
                        </form>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
