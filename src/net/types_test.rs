use super::*;

// =============================================================
// TaskStatus labels
// =============================================================

#[test]
fn status_labels_round_trip() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::from_label(status.label()), Some(status));
    }
}

#[test]
fn status_unknown_label_is_none() {
    assert_eq!(TaskStatus::from_label("Done"), None);
    assert_eq!(TaskStatus::from_label(""), None);
}

#[test]
fn status_serializes_as_its_label() {
    let json = serde_json::to_value(TaskStatus::InProgress).unwrap();
    assert_eq!(json, serde_json::json!("In Progress"));
}

// =============================================================
// Deserialization of backend payloads
// =============================================================

#[test]
fn user_listing_ignores_backend_only_fields() {
    let body = serde_json::json!({
        "users": [
            {
                "_id": "665f1a",
                "email": "ana@example.com",
                "username": "ana.lima",
                "password": "$2b$10$hash",
                "isAdmin": false,
                "__v": 0
            },
            { "_id": "665f1b", "username": "rui.costa" }
        ]
    });

    let parsed: UsersResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.users.len(), 2);
    assert_eq!(parsed.users[0].id, "665f1a");
    assert_eq!(parsed.users[0].email, "ana@example.com");
    // Email missing from the listing falls back to empty.
    assert_eq!(parsed.users[1].email, "");
}

#[test]
fn task_envelope_parses_full_backend_shape() {
    let body = serde_json::json!({
        "task": {
            "_id": "6660aa",
            "title": "Ship report",
            "description": "Quarterly numbers",
            "dueDate": "2024-07-01",
            "status": "In Progress",
            "assignedTo": [
                { "userId": "665f1a", "username": "ana.lima", "_id": "999" }
            ],
            "teamId": "664t01",
            "__v": 3
        }
    });

    let parsed: TaskResponse = serde_json::from_value(body).unwrap();
    let task = parsed.task;
    assert_eq!(task.id, "6660aa");
    assert_eq!(task.due_date, "2024-07-01");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.assigned_to.len(), 1);
    assert_eq!(task.assigned_to[0].user_id, "665f1a");
    assert_eq!(task.team_id, "664t01");
}

#[test]
fn task_without_status_or_assignments_defaults() {
    let body = serde_json::json!({
        "_id": "1", "title": "t", "description": "", "dueDate": ""
    });
    let task: Task = serde_json::from_value(body).unwrap();
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert!(task.assigned_to.is_empty());
    assert_eq!(task.team_id, "");
}

#[test]
fn team_info_envelope_parses() {
    let body = serde_json::json!({
        "teamInfo": {
            "_id": "664t01",
            "name": "Platform",
            "adminId": "665f1a",
            "members": [
                { "userId": "665f1b", "username": "rui.costa", "_id": "888" }
            ],
            "projects": [],
            "tasks": []
        }
    });

    let parsed: TeamInfoResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.team_info.name, "Platform");
    assert_eq!(parsed.team_info.admin_id, "665f1a");
    assert_eq!(parsed.team_info.members[0].username, "rui.costa");
}

#[test]
fn auth_response_reads_access_token() {
    let parsed: AuthResponse =
        serde_json::from_value(serde_json::json!({ "accessToken": "tok123" })).unwrap();
    assert_eq!(parsed.access_token, "tok123");
}

// =============================================================
// Serialization of request payloads
// =============================================================

#[test]
fn credentials_omit_empty_identifiers() {
    let creds = Credentials::from_form("", "ana.lima", "secret");
    let json = serde_json::to_value(&creds).unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("email"));
    assert_eq!(object["username"], "ana.lima");
    assert_eq!(object["password"], "secret");
}

#[test]
fn credentials_keep_both_identifiers_when_present() {
    let creds = Credentials::from_form("a@b.c", "ana", "pw");
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json["email"], "a@b.c");
    assert_eq!(json["username"], "ana");
}

#[test]
fn create_task_request_uses_camel_case_keys() {
    let request = CreateTaskRequest {
        title: "t".into(),
        description: "d".into(),
        due_date: "2024-07-01".into(),
        assigned_to: vec![MemberRef {
            user_id: "665f1a".into(),
            username: "ana.lima".into(),
        }],
        team_id: "664t01".into(),
        status: TaskStatus::NotStarted,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["dueDate"], "2024-07-01");
    assert_eq!(json["teamId"], "664t01");
    assert_eq!(json["status"], "Not Started");
    assert_eq!(json["assignedTo"][0]["userId"], "665f1a");
}

#[test]
fn task_update_payload_round_trips_backend_shape() {
    // The edit screen PUTs the fetched entity back with local changes, so a
    // parse → serialize cycle has to preserve the backend's key names.
    let task = Task {
        id: "6660aa".into(),
        title: "Ship report".into(),
        description: String::new(),
        due_date: "2024-07-02".into(),
        status: TaskStatus::Completed,
        assigned_to: vec![],
        team_id: "664t01".into(),
    };

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["_id"], "6660aa");
    assert_eq!(json["dueDate"], "2024-07-02");
    assert_eq!(json["status"], "Completed");

    let back: Task = serde_json::from_value(json).unwrap();
    assert_eq!(back, task);
}

#[test]
fn member_ref_of_copies_id_and_username() {
    let user = User {
        id: "665f1a".into(),
        username: "ana.lima".into(),
        email: "ana@example.com".into(),
    };
    let member = MemberRef::of(&user);
    assert_eq!(member.user_id, "665f1a");
    assert_eq!(member.username, "ana.lima");
}
