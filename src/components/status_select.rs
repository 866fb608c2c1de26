//! Status dropdown shared by the task forms.

use leptos::prelude::*;

use crate::net::types::TaskStatus;

/// Select over the fixed status set. Transitions are unconstrained; any
/// status can follow any other.
#[component]
pub fn StatusSelect(
    #[prop(into)] value: Signal<TaskStatus>,
    on_change: Callback<TaskStatus>,
) -> impl IntoView {
    view! {
        <select
            class="field__input"
            prop:value=move || value.get().label().to_owned()
            on:change=move |ev| {
                if let Some(status) = TaskStatus::from_label(&event_target_value(&ev)) {
                    on_change.run(status);
                }
            }
        >
            {TaskStatus::ALL
                .into_iter()
                .map(|status| {
                    view! { <option value=status.label()>{status.label()}</option> }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
