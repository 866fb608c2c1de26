//! Dropdown offering the users who can still be assigned.

use leptos::prelude::*;

use crate::net::types::{MemberRef, User};
use crate::state::task_form::available_users;

/// Assignment picker. Lists only users not already assigned; picking one
/// fires `on_pick` and snaps back to the placeholder row.
#[component]
pub fn MemberPicker(
    #[prop(into)] users: Signal<Vec<User>>,
    #[prop(into)] assigned: Signal<Vec<MemberRef>>,
    placeholder: &'static str,
    on_pick: Callback<User>,
) -> impl IntoView {
    view! {
        <select
            class="field__input"
            // Tracking the assignment list resets the control after a pick.
            prop:value=move || {
                assigned.track();
                String::new()
            }
            on:change=move |ev| {
                let id = event_target_value(&ev);
                if id.is_empty() {
                    return;
                }
                if let Some(user) = users.get().into_iter().find(|u| u.id == id) {
                    on_pick.run(user);
                }
            }
        >
            <option value="">{placeholder}</option>
            {move || {
                let users = users.get();
                let assigned = assigned.get();
                available_users(&users, &assigned)
                    .into_iter()
                    .map(|user| {
                        view! { <option value=user.id.clone()>{user.username.clone()}</option> }
                    })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}
