//! Teams landing page. Currently a placeholder card behind the gate.

use leptos::prelude::*;

use crate::components::session_gate::SessionGate;

#[component]
pub fn TeamsPage() -> impl IntoView {
    view! {
        <SessionGate>
            <div class="form-page">
                <div class="card">
                    <h1>"Teams"</h1>
                </div>
            </div>
        </SessionGate>
    }
}
