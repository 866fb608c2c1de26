//! Login form exchanging credentials for a session cookie.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::session_gate::redirect_when_authenticated;
use crate::net::api;
use crate::net::types::Credentials;
use crate::util::session;

/// Login page. A visitor with a live session is sent straight to the
/// dashboard; any failed attempt shows one generic message.
#[component]
pub fn LoginPage() -> impl IntoView {
    redirect_when_authenticated();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(String::new());

    let navigate = use_navigate();
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials::from_form(
            &email.get_untracked(),
            &username.get_untracked(),
            &password.get_untracked(),
        );
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&credentials).await {
                Ok(token) => {
                    session::set_token(&token);
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(error) => {
                    leptos::logging::error!("login failed: {error}");
                    error_message.set("Wrong credentials, try again.".to_owned());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="card">
                <h1>"Login"</h1>
                <p class="card__hint">
                    "Enter your email or username below to login to your account"
                </p>
                <ErrorBanner message=error_message/>
                <form on:submit=submit>
                    <label class="field">
                        "Email"
                        <input
                            class="field__input"
                            type="email"
                            placeholder="m@example.com"
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
                        "Login"
                    </button>
                </form>
                <p class="card__footer">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
