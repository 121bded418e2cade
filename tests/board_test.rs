use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use missionctl::data::{Priority, Task, TaskStatus, BOARD_STATUSES};
use missionctl::icons::IconService;
use missionctl::theme::Theme;
use missionctl::ui::components::task_board::{partition, TaskBoard};
use missionctl::ui::core::actions::Action;
use missionctl::ui::core::Component;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {}", id),
        description: "A task".to_string(),
        status,
        priority: Priority::Medium,
        assigned_to: None,
        created_at: 0,
        updated_at: 0,
    }
}

fn board_with(tasks: Vec<Task>) -> TaskBoard {
    let mut board = TaskBoard::new(Theme::Dark, IconService::default());
    board.set_result(Ok(tasks));
    board
}

#[test]
fn test_partition_spec_scenario_counts() {
    let tasks = vec![
        task("1", TaskStatus::Inbox),
        task("2", TaskStatus::Inbox),
        task("3", TaskStatus::Done),
        task("4", TaskStatus::Blocked),
        task("5", TaskStatus::Review),
        task("6", TaskStatus::InProgress),
    ];
    let columns = partition(&tasks);
    let counts: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    // inbox, assigned, in_progress, review, done, blocked
    assert_eq!(counts, vec![2, 0, 1, 1, 1, 1]);
}

#[test]
fn test_every_task_lands_in_exactly_one_column() {
    let tasks = vec![
        task("1", TaskStatus::Inbox),
        task("2", TaskStatus::Assigned),
        task("3", TaskStatus::InProgress),
        task("4", TaskStatus::Review),
        task("5", TaskStatus::Done),
        task("6", TaskStatus::Blocked),
    ];
    let columns = partition(&tasks);
    for t in &tasks {
        let appearances = columns.iter().flatten().filter(|c| c.id == t.id).count();
        assert_eq!(appearances, 1, "task {} appears {} times", t.id, appearances);
    }
}

#[test]
fn test_unknown_status_lands_in_no_column() {
    let tasks = vec![task("1", TaskStatus::Inbox), task("2", TaskStatus::Unknown)];
    let columns = partition(&tasks);
    let total: usize = columns.iter().map(|c| c.len()).sum();
    assert_eq!(total, 1);
    assert!(columns.iter().flatten().all(|t| t.id != "2"));
}

#[test]
fn test_partition_preserves_relative_order_within_a_column() {
    let tasks = vec![
        task("a", TaskStatus::Inbox),
        task("b", TaskStatus::Done),
        task("c", TaskStatus::Inbox),
        task("d", TaskStatus::Inbox),
    ];
    let columns = partition(&tasks);
    let inbox_ids: Vec<&str> = columns[0].iter().map(|t| t.id.as_str()).collect();
    assert_eq!(inbox_ids, vec!["a", "c", "d"]);
}

#[test]
fn test_columns_follow_board_status_order() {
    for (i, status) in BOARD_STATUSES.iter().enumerate() {
        let tasks = vec![task("only", *status)];
        let columns = partition(&tasks);
        assert_eq!(columns[i].len(), 1);
    }
}

#[test]
fn test_apply_status_patches_in_place() {
    let mut board = board_with(vec![task("1", TaskStatus::Inbox), task("2", TaskStatus::Review)]);
    board.apply_status("2", TaskStatus::Done);
    let patched = board.task_by_id("2").unwrap();
    assert_eq!(patched.status, TaskStatus::Done);
    // The other task is untouched
    assert_eq!(board.task_by_id("1").unwrap().status, TaskStatus::Inbox);
}

#[test]
fn test_apply_status_on_unknown_id_changes_nothing() {
    let mut board = board_with(vec![task("1", TaskStatus::Inbox)]);
    board.apply_status("nope", TaskStatus::Done);
    assert_eq!(board.task_by_id("1").unwrap().status, TaskStatus::Inbox);
}

#[test]
fn test_selection_moves_between_columns_and_rows() {
    let mut board = board_with(vec![
        task("1", TaskStatus::Inbox),
        task("2", TaskStatus::Inbox),
        task("3", TaskStatus::Assigned),
    ]);
    assert_eq!(board.selected_task_id().as_deref(), Some("1"));

    board.handle_key_events(key(KeyCode::Down));
    assert_eq!(board.selected_task_id().as_deref(), Some("2"));

    board.handle_key_events(key(KeyCode::Right));
    // Row is clamped to the new column's length
    assert_eq!(board.selected_task_id().as_deref(), Some("3"));

    board.handle_key_events(key(KeyCode::Left));
    board.handle_key_events(key(KeyCode::Up));
    assert_eq!(board.selected_task_id().as_deref(), Some("1"));
}

#[test]
fn test_selection_clamps_at_board_edges() {
    let mut board = board_with(vec![task("1", TaskStatus::Inbox)]);
    board.handle_key_events(key(KeyCode::Left));
    assert_eq!(board.selected_column, 0);
    for _ in 0..10 {
        board.handle_key_events(key(KeyCode::Right));
    }
    assert_eq!(board.selected_column, BOARD_STATUSES.len() - 1);
}

#[test]
fn test_enter_opens_detail_for_selected_card() {
    let mut board = board_with(vec![task("42", TaskStatus::Inbox)]);
    let action = board.handle_key_events(key(KeyCode::Enter));
    match action {
        Action::OpenTaskDetail(id) => assert_eq!(id, "42"),
        other => panic!("expected OpenTaskDetail, got {:?}", other),
    }
}

#[test]
fn test_enter_on_empty_column_is_a_noop() {
    let mut board = board_with(vec![task("1", TaskStatus::Done)]);
    // Selection starts on the empty inbox column
    let action = board.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::None));
}

#[test]
fn test_retry_key_requests_reload() {
    let mut board = board_with(vec![]);
    let action = board.handle_key_events(key(KeyCode::Char('r')));
    assert!(matches!(
        action,
        Action::ReloadPanel(missionctl::ui::core::actions::PanelKind::Tasks)
    ));
}
