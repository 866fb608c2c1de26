//! Account registration form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::session_gate::redirect_when_authenticated;
use crate::net::api;
use crate::net::types::RegisterRequest;

/// Signup page. Successful registration lands on the login form; the new
/// account still has to authenticate.
#[component]
pub fn SignupPage() -> impl IntoView {
    redirect_when_authenticated();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(String::new());

    let navigate = use_navigate();
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(error) => {
                    leptos::logging::error!("signup failed: {error}");
                    error_message.set("Something went wrong during signup. Try again.".to_owned());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="card">
                <h1>"Sign Up"</h1>
                <p class="card__hint">"Enter your details below to create your account"</p>
                <ErrorBanner message=error_message/>
                <form on:submit=submit>
                    <label class="field">
                        "Email"
                        <input
                            class="field__input"
                            type="email"
                            placeholder="m@example.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Username"
                        <input
                            class="field__input"
                            type="text"
                            placeholder="example.example"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "Password"
                        <input
                            class="field__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Sign Up"
                    </button>
                </form>
                <p class="card__footer">
                    "Already have an account? " <a href="/login">"Log In"</a>
                </p>
            </div>
        </div>
    }
}
