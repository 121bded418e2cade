use missionctl::data::{
    AgentStatus, DataError, DataSource, DocKind, MockDataSource, Priority, TaskPatch, TaskStatus,
};

#[tokio::test]
async fn test_fixtures_load_with_expected_counts() {
    let source = MockDataSource::from_fixtures().unwrap();
    assert_eq!(source.fetch_tasks().await.unwrap().len(), 8);
    assert_eq!(source.fetch_agents().await.unwrap().len(), 10);
    assert_eq!(source.fetch_activity().await.unwrap().len(), 12);
    assert_eq!(source.fetch_documents().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_fetches_return_snapshots() {
    let source = MockDataSource::from_fixtures().unwrap();
    let mut tasks = source.fetch_tasks().await.unwrap();
    tasks.clear();
    // Mutating the returned vector never touches the store
    assert_eq!(source.fetch_tasks().await.unwrap().len(), 8);
}

#[tokio::test]
async fn test_update_task_patches_the_store() {
    let source = MockDataSource::from_fixtures().unwrap();
    let first = source.fetch_tasks().await.unwrap().remove(0);
    assert_eq!(first.status, TaskStatus::Inbox);

    let updated = source
        .update_task(&first.id, TaskPatch::status(TaskStatus::Done))
        .await
        .unwrap();
    assert_eq!(updated.status, TaskStatus::Done);
    // Untouched fields survive the patch
    assert_eq!(updated.title, first.title);

    // A later reload observes the change
    let reloaded = source.fetch_tasks().await.unwrap();
    let task = reloaded.iter().find(|t| t.id == first.id).unwrap();
    assert_eq!(task.status, TaskStatus::Done);
}

#[tokio::test]
async fn test_update_unknown_task_is_not_found() {
    let source = MockDataSource::from_fixtures().unwrap();
    let result = source.update_task("no-such-id", TaskPatch::default()).await;
    assert!(matches!(result, Err(DataError::NotFound(_))));
}

#[tokio::test]
async fn test_activity_timestamps_are_in_the_past() {
    let source = MockDataSource::from_fixtures().unwrap();
    let now = missionctl::utils::datetime::now_ms();
    for entry in source.fetch_activity().await.unwrap() {
        assert!(entry.timestamp <= now, "activity {} is in the future", entry.id);
    }
}

#[tokio::test]
async fn test_fixture_enums_are_all_known() {
    let source = MockDataSource::from_fixtures().unwrap();
    for task in source.fetch_tasks().await.unwrap() {
        assert_ne!(task.status, TaskStatus::Unknown, "task {} has an unknown status", task.id);
        assert_ne!(task.priority, Priority::Unknown);
    }
    for agent in source.fetch_agents().await.unwrap() {
        assert_ne!(agent.status, AgentStatus::Unknown);
    }
    for doc in source.fetch_documents().await.unwrap() {
        assert_ne!(doc.kind, DocKind::Unknown);
    }
}

#[test]
fn test_unknown_enum_strings_survive_deserialization() {
    let task: missionctl::data::Task = serde_json::from_str(
        r#"{
            "id": "x",
            "title": "t",
            "description": "d",
            "status": "archived",
            "priority": "urgent",
            "createdAt": 0,
            "updatedAt": 0
        }"#,
    )
    .unwrap();
    assert_eq!(task.status, TaskStatus::Unknown);
    assert_eq!(task.priority, Priority::Unknown);
}

#[test]
fn test_patch_applies_only_present_fields() {
    let mut task = missionctl::data::Task {
        id: "1".to_string(),
        title: "before".to_string(),
        description: "desc".to_string(),
        status: TaskStatus::Inbox,
        priority: Priority::Low,
        assigned_to: None,
        created_at: 1,
        updated_at: 2,
    };

    TaskPatch::status(TaskStatus::Review).apply_to(&mut task);
    assert_eq!(task.status, TaskStatus::Review);
    assert_eq!(task.title, "before");
    assert_eq!(task.assigned_to, None);

    let patch = TaskPatch {
        title: Some("after".to_string()),
        assigned_to: Some("Agent Wanda".to_string()),
        ..TaskPatch::default()
    };
    patch.apply_to(&mut task);
    assert_eq!(task.title, "after");
    assert_eq!(task.assigned_to.as_deref(), Some("Agent Wanda"));
    assert_eq!(task.status, TaskStatus::Review);
}
