// Task Tests - Testing task records as exchanged with the backend

use crate::tasks::{DisplayFilter, Task, TaskUpdate, TasksResponse};
use crate::Error;
use chrono::{DateTime, Utc};

#[test]
fn test_task_deserializes_backend_record() {
    let json = r#"{
        "id": "t-1",
        "title": "Write report",
        "detail": "Q1 numbers",
        "done": false,
        "limit": "2024-03-05T09:07:00Z"
    }"#;

    let task: Task = serde_json::from_str(json).expect("Failed to deserialize");
    assert_eq!(task.id, "t-1");
    assert_eq!(task.title, "Write report");
    assert_eq!(task.detail, "Q1 numbers");
    assert!(!task.done);
    assert_eq!(
        task.deadline().unwrap(),
        "2024-03-05T09:07:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[test]
fn test_task_missing_detail_defaults_to_empty() {
    let json = r#"{"id": "t-2", "title": "x", "done": true, "limit": "2024-01-01T00:00:00Z"}"#;

    let task: Task = serde_json::from_str(json).expect("Failed to deserialize");
    assert_eq!(task.detail, "");
}

#[test]
fn test_task_unparsable_limit_surfaces_on_use() {
    let task = Task::new("t-3", "x", "", false, "Invalid Date");

    assert!(matches!(task.deadline(), Err(Error::InvalidTimestamp(_))));
}

#[test]
fn test_tasks_response_null_is_empty() {
    let response: TasksResponse = serde_json::from_str(r#"{"tasks": null}"#).unwrap();
    assert!(response.tasks.is_empty());

    let response: TasksResponse = serde_json::from_str("{}").unwrap();
    assert!(response.tasks.is_empty());
}

#[test]
fn test_tasks_response_keeps_order() {
    let json = r#"{"tasks": [
        {"id": "b", "title": "second", "detail": "", "done": false, "limit": "2024-01-02T00:00:00Z"},
        {"id": "a", "title": "first", "detail": "", "done": true, "limit": "2024-01-01T00:00:00Z"}
    ]}"#;

    let response: TasksResponse = serde_json::from_str(json).unwrap();
    let ids: Vec<&str> = response.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn test_task_update_wire_fields() {
    let update = TaskUpdate {
        title: "Write report".to_string(),
        detail: "".to_string(),
        done: true,
        limit: "2024-03-05T09:07:00Z".parse().unwrap(),
    };

    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["title"], "Write report");
    assert_eq!(json["done"], true);

    let limit = json["limit"].as_str().expect("limit should be a string");
    assert_eq!(
        limit.parse::<DateTime<Utc>>().unwrap(),
        update.limit
    );
}

#[test]
fn test_task_apply_update() {
    let mut task = Task::new("t-1", "old", "old detail", false, "2024-01-01T00:00:00Z");
    let update = TaskUpdate {
        title: "new".to_string(),
        detail: "new detail".to_string(),
        done: true,
        limit: "2024-02-01T12:30:00Z".parse().unwrap(),
    };

    task.apply(&update);
    assert_eq!(task.title, "new");
    assert_eq!(task.detail, "new detail");
    assert!(task.done);
    assert_eq!(task.limit, "2024-02-01T12:30:00.000Z");
    assert_eq!(task.deadline().unwrap(), update.limit);
}

#[test]
fn test_display_filter() {
    let open = Task::new("1", "open", "", false, "2024-01-01T00:00:00Z");
    let done = Task::new("2", "done", "", true, "2024-01-01T00:00:00Z");

    assert_eq!(DisplayFilter::default(), DisplayFilter::Todo);
    assert!(DisplayFilter::Todo.matches(&open));
    assert!(!DisplayFilter::Todo.matches(&done));
    assert!(DisplayFilter::Done.matches(&done));
    assert!(!DisplayFilter::Done.matches(&open));
}

#[test]
fn test_display_filter_from_str() {
    assert_eq!("todo".parse::<DisplayFilter>().unwrap(), DisplayFilter::Todo);
    assert_eq!("done".parse::<DisplayFilter>().unwrap(), DisplayFilter::Done);
    assert!(matches!(
        "all".parse::<DisplayFilter>(),
        Err(Error::InvalidInput(_))
    ));
}
