use super::*;

fn user(id: &str, name: &str) -> User {
    User {
        id: id.into(),
        username: name.into(),
        email: String::new(),
    }
}

// =============================================================
// TaskDraft assignment list
// =============================================================

#[test]
fn draft_defaults_to_not_started_and_empty() {
    let draft = TaskDraft::default();
    assert_eq!(draft.status, TaskStatus::NotStarted);
    assert!(draft.assigned.is_empty());
}

#[test]
fn add_member_records_id_and_username() {
    let mut draft = TaskDraft::default();
    draft.add_member(&user("u1", "ana"));
    assert_eq!(draft.assigned.len(), 1);
    assert_eq!(draft.assigned[0].user_id, "u1");
    assert_eq!(draft.assigned[0].username, "ana");
}

#[test]
fn add_member_permits_duplicates() {
    // The model leaves the list unconstrained; only the picker filters.
    let mut draft = TaskDraft::default();
    let ana = user("u1", "ana");
    draft.add_member(&ana);
    draft.add_member(&ana);
    assert_eq!(draft.assigned.len(), 2);
}

#[test]
fn remove_member_drops_every_occurrence() {
    let mut draft = TaskDraft::default();
    let ana = user("u1", "ana");
    draft.add_member(&ana);
    draft.add_member(&user("u2", "rui"));
    draft.add_member(&ana);

    draft.remove_member("u1");
    assert_eq!(draft.assigned.len(), 1);
    assert_eq!(draft.assigned[0].user_id, "u2");
}

#[test]
fn clear_members_empties_the_list() {
    let mut draft = TaskDraft::default();
    draft.add_member(&user("u1", "ana"));
    draft.clear_members();
    assert!(draft.assigned.is_empty());
}

#[test]
fn reset_returns_to_defaults() {
    let mut draft = TaskDraft {
        title: "t".into(),
        status: TaskStatus::Completed,
        ..TaskDraft::default()
    };
    draft.add_member(&user("u1", "ana"));

    draft.reset();
    assert_eq!(draft, TaskDraft::default());
}

#[test]
fn to_request_carries_every_field() {
    let mut draft = TaskDraft {
        title: "Ship report".into(),
        description: "Numbers".into(),
        due_date: "2024-07-01".into(),
        team_id: "t1".into(),
        status: TaskStatus::InProgress,
        assigned: vec![],
    };
    draft.add_member(&user("u1", "ana"));

    let request = draft.to_request();
    assert_eq!(request.title, "Ship report");
    assert_eq!(request.due_date, "2024-07-01");
    assert_eq!(request.team_id, "t1");
    assert_eq!(request.status, TaskStatus::InProgress);
    assert_eq!(request.assigned_to.len(), 1);
}

// =============================================================
// Picker filtering
// =============================================================

#[test]
fn available_users_excludes_assigned() {
    let users = vec![user("u1", "ana"), user("u2", "rui"), user("u3", "eva")];
    let assigned = vec![MemberRef {
        user_id: "u2".into(),
        username: "rui".into(),
    }];

    let available = available_users(&users, &assigned);
    let ids: Vec<&str> = available.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, ["u1", "u3"]);
}

#[test]
fn available_users_with_nothing_assigned_is_everyone() {
    let users = vec![user("u1", "ana")];
    assert_eq!(available_users(&users, &[]).len(), 1);
}

// =============================================================
// Edit-screen assignment helpers
// =============================================================

fn task() -> Task {
    Task {
        id: "task1".into(),
        title: "t".into(),
        description: String::new(),
        due_date: String::new(),
        status: TaskStatus::NotStarted,
        assigned_to: vec![MemberRef {
            user_id: "u1".into(),
            username: "ana".into(),
        }],
        team_id: String::new(),
    }
}

#[test]
fn assign_member_appends_without_deduplicating() {
    let mut task = task();
    assign_member(&mut task, &user("u1", "ana"));
    assert_eq!(task.assigned_to.len(), 2);
}

#[test]
fn unassign_member_filters_by_user_id() {
    let mut task = task();
    assign_member(&mut task, &user("u2", "rui"));
    unassign_member(&mut task, "u1");
    assert_eq!(task.assigned_to.len(), 1);
    assert_eq!(task.assigned_to[0].user_id, "u2");
}

// =============================================================
// QuickTaskDraft
// =============================================================

#[test]
fn quick_draft_reset_clears_all_fields() {
    let mut draft = QuickTaskDraft {
        title: "t".into(),
        description: "d".into(),
        due_date: "2024-07-01".into(),
        assigned_to_user_id: "u1".into(),
        project_id: "p1".into(),
        status: TaskStatus::Completed,
    };
    draft.reset();
    assert_eq!(draft, QuickTaskDraft::default());
}
