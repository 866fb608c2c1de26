//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, logout::LogoutPage,
    projects::ProjectsPage, signup::SignupPage, task_create::TaskCreatePage,
    task_edit::TaskEditPage, tasks::TasksPage, team_create::TeamCreatePage,
    team_edit::TeamEditPage, teams::TeamsPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every route except `/`, `/login`, and `/signup` is wrapped in a
/// [`SessionGate`](crate::components::session_gate::SessionGate) by its page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/taskboard.css"/>
        <Title text="Taskboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=StaticSegment("tasks") view=TasksPage/>
                <Route path=(StaticSegment("tasks"), StaticSegment("create")) view=TaskCreatePage/>
                <Route
                    path=(StaticSegment("tasks"), StaticSegment("edit"), ParamSegment("id"))
                    view=TaskEditPage
                />
                <Route path=StaticSegment("teams") view=TeamsPage/>
                <Route path=(StaticSegment("teams"), StaticSegment("create")) view=TeamCreatePage/>
                <Route
                    path=(StaticSegment("teams"), StaticSegment("edit"), ParamSegment("id"))
                    view=TeamEditPage
                />
            </Routes>
        </Router>
    }
}
