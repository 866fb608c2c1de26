//! Inline error banner for the login and signup forms.

use leptos::prelude::*;

/// Shows the message in an alert box when it is non-empty.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty() fallback=|| ()>
            <div class="form-error" role="alert">
                {move || message.get()}
            </div>
        </Show>
    }
}
