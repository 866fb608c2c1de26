//! Draft state for the project form.

#[cfg(test)]
#[path = "project_form_test.rs"]
mod project_form_test;

/// Draft for the project form. Its save action only resets the fields; no
/// project endpoint is wired up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub team_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectDraft {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
