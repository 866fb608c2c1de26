use super::*;

#[test]
fn draft_defaults_are_empty() {
    let draft = ProjectDraft::default();
    assert!(draft.name.is_empty());
    assert!(draft.start_date.is_empty());
    assert!(draft.end_date.is_empty());
}

#[test]
fn reset_clears_all_fields() {
    let mut draft = ProjectDraft {
        name: "Rollout".into(),
        description: "Q3".into(),
        team_id: "t1".into(),
        start_date: "2024-07-01".into(),
        end_date: "2024-09-30".into(),
    };
    draft.reset();
    assert_eq!(draft, ProjectDraft::default());
}
