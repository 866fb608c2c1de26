//! Create-team form with dynamic member rows.
//!
//! Saving logs the draft; no team creation endpoint is wired up. That is
//! long-standing observed behavior, kept as-is.

use leptos::prelude::*;

use crate::components::session_gate::SessionGate;
use crate::state::team_form::TeamDraft;

/// Create-team page, gated on the session cookie.
#[component]
pub fn TeamCreatePage() -> impl IntoView {
    view! {
        <SessionGate>
            <CreateTeamForm/>
        </SessionGate>
    }
}

#[component]
fn CreateTeamForm() -> impl IntoView {
    let draft = RwSignal::new(TeamDraft::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("team draft: {:?}", draft.get_untracked());
    };

    view! {
        <div class="form-page">
            <div class="card">
                <h1>"Create Team"</h1>
                <form on:submit=submit>
                    <label class="field">
                        "Team Name"
                        <input
                            class="field__input"
                            type="text"
                            required
                            prop:value=move || draft.get().name
                            on:input=move |ev| {
                                draft.update(|d| d.name = event_target_value(&ev));
                            }
                        />
                    </label>
                    {move || {
                        draft
                            .get()
                            .members
                            .iter()
                            .enumerate()
                            .map(|(index, row)| {
                                view! {
                                    <div class="field">
                                        {format!("Member {}", index + 1)}
                                        <div class="member-row">
                                            <input
                                                class="field__input"
                                                type="text"
                                                placeholder="Member Id"
                                                required
                                                prop:value=row.id.clone()
                                                on:input=move |ev| {
                                                    draft.update(|d| {
                                                        d.set_member_id(index, &event_target_value(&ev));
                                                    });
                                                }
                                            />
                                            <input
                                                class="field__input"
                                                type="text"
                                                placeholder="Member Name"
                                                required
                                                prop:value=row.name.clone()
                                                on:input=move |ev| {
                                                    draft.update(|d| {
                                                        d.set_member_name(index, &event_target_value(&ev));
                                                    });
                                                }
                                            />
                                            // The first row always stays.
                                            <Show when=move || (index > 0) fallback=|| ()>
                                                <button
                                                    class="btn btn--danger"
                                                    type="button"
                                                    on:click=move |_| {
                                                        draft.update(|d| d.remove_row(index));
                                                    }
                                                >
                                                    "Remove"
                                                </button>
                                            </Show>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button
                        class="btn"
                        type="button"
                        on:click=move |_| draft.update(TeamDraft::add_row)
                    >
                        "Add Member"
                    </button>
                    <button class="btn btn--primary" type="submit">
                        "Create Team"
                    </button>
                </form>
            </div>
        </div>
    }
}
