//! Quick task entry form.
//!
//! Saving logs the draft and resets the form; this screen never calls the
//! backend. That is long-standing observed behavior, kept as-is.

use leptos::prelude::*;

use crate::components::session_gate::SessionGate;
use crate::components::status_select::StatusSelect;
use crate::state::task_form::QuickTaskDraft;

/// Quick task form, gated on the session cookie.
#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <SessionGate>
            <QuickTaskForm/>
        </SessionGate>
    }
}

#[component]
fn QuickTaskForm() -> impl IntoView {
    let draft = RwSignal::new(QuickTaskDraft::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("task draft: {:?}", draft.get_untracked());
        draft.update(QuickTaskDraft::reset);
    };

    view! {
        <div class="form-page">
            <div class="card">
                <h1>"Tasks"</h1>
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
                    <label class="field">
                        "Assigned User ID"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || draft.get().assigned_to_user_id
                            on:input=move |ev| {
                                draft.update(|d| d.assigned_to_user_id = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="field">
                        "Project ID"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || draft.get().project_id
                            on:input=move |ev| {
                                draft.update(|d| d.project_id = event_target_value(&ev));
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
