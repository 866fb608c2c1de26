//! Project form.
//!
//! Saving only resets the fields; no project endpoint is wired up. That is
//! long-standing observed behavior, kept as-is.

use leptos::prelude::*;

use crate::components::session_gate::SessionGate;
use crate::state::project_form::ProjectDraft;

/// Project form page, gated on the session cookie.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <SessionGate>
            <ProjectForm/>
        </SessionGate>
    }
}

#[component]
fn ProjectForm() -> impl IntoView {
    let draft = RwSignal::new(ProjectDraft::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        draft.update(ProjectDraft::reset);
    };

    view! {
        <div class="form-page">
            <div class="card">
                <h1>"Projects"</h1>
                <form on:submit=submit>
                    <label class="field">
                        "Name"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || draft.get().name
                            on:input=move |ev| {
                                draft.update(|d| d.name = event_target_value(&ev));
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
                        "Start Date"
                        <input
                            class="field__input"
                            type="date"
                            prop:value=move || draft.get().start_date
                            on:input=move |ev| {
                                draft.update(|d| d.start_date = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="field">
                        "End Date"
                        <input
                            class="field__input"
                            type="date"
                            prop:value=move || draft.get().end_date
                            on:input=move |ev| {
                                draft.update(|d| d.end_date = event_target_value(&ev));
                            }
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
