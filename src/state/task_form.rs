//! Draft state for the task screens.

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

use crate::net::types::{CreateTaskRequest, MemberRef, Task, TaskStatus, User};

/// Draft for the task creation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub team_id: String,
    pub status: TaskStatus,
    pub assigned: Vec<MemberRef>,
}

impl TaskDraft {
    /// Assign a user. The model permits duplicates; the picker avoids them
    /// by only offering users who are not already assigned.
    pub fn add_member(&mut self, user: &User) {
        self.assigned.push(MemberRef::of(user));
    }

    /// Drop every assignment of the given user.
    pub fn remove_member(&mut self, user_id: &str) {
        self.assigned.retain(|member| member.user_id != user_id);
    }

    pub fn clear_members(&mut self) {
        self.assigned.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The creation payload for the backend.
    pub fn to_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            assigned_to: self.assigned.clone(),
            team_id: self.team_id.clone(),
            status: self.status,
        }
    }
}

/// Users not yet assigned, for the picker dropdown.
pub fn available_users<'a>(users: &'a [User], assigned: &[MemberRef]) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| !assigned.iter().any(|member| member.user_id == user.id))
        .collect()
}

/// Assign a user on the edit screen's in-memory task copy.
pub fn assign_member(task: &mut Task, user: &User) {
    task.assigned_to.push(MemberRef::of(user));
}

/// Drop an assignment on the edit screen's in-memory task copy.
pub fn unassign_member(task: &mut Task, user_id: &str) {
    task.assigned_to.retain(|member| member.user_id != user_id);
}

/// Draft for the quick task form. Saving only logs and resets it; the
/// backend is never called from that screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuickTaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub assigned_to_user_id: String,
    pub project_id: String,
    pub status: TaskStatus,
}

impl QuickTaskDraft {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
