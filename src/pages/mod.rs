//! Route components, one module per screen.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod logout;
pub mod projects;
pub mod signup;
pub mod task_create;
pub mod task_edit;
pub mod tasks;
pub mod team_create;
pub mod team_edit;
pub mod teams;
