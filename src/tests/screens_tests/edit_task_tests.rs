// Edit Task Screen Tests - Testing form pre-fill, preview, save and delete

use super::{jst, seeded_repo, utc};
use crate::locale::Locale;
use crate::screens::EditTaskScreen;
use crate::tasks::TaskRepository;
use crate::Error;
use chrono::Utc;

#[test]
fn test_open_prefills_form_in_viewer_zone() {
    let repo = seeded_repo();
    let screen = EditTaskScreen::open(&repo, "l1", "t1", &jst(), Locale::Japanese);

    assert_eq!(screen.title, "Report");
    assert_eq!(screen.detail, "Q1");
    assert!(!screen.is_done);
    assert_eq!(screen.limit_input, "2024-01-03T11:05");
    assert!(screen.error_message.is_none());
}

#[test]
fn test_open_with_unreadable_limit_leaves_input_empty() {
    let repo = seeded_repo();
    let screen = EditTaskScreen::open(&repo, "l1", "t3", &Utc, Locale::Japanese);

    assert_eq!(screen.title, "Broken");
    assert_eq!(screen.limit_input, "");
    assert!(screen.error_message.is_none());
}

#[test]
fn test_open_missing_task_sets_error_message() {
    let repo = seeded_repo();
    let screen = EditTaskScreen::open(&repo, "l1", "nope", &Utc, Locale::Japanese);

    assert_eq!(screen.title, "");
    let message = screen.error_message.as_deref().expect("error should be shown");
    assert!(message.starts_with("タスク情報の取得に失敗しました。"));
}

#[test]
fn test_remaining_time_preview() {
    let repo = seeded_repo();
    let screen = EditTaskScreen::open(&repo, "l1", "t1", &jst(), Locale::Japanese);

    let now = utc("2024-01-01T00:00:00Z");
    assert_eq!(screen.remaining_time(&now, &jst()).unwrap(), "2日2時間5分");

    let later = utc("2024-01-04T00:00:00Z");
    assert_eq!(screen.remaining_time(&later, &jst()).unwrap(), "期限切れ");
}

#[test]
fn test_remaining_time_follows_edited_input() {
    let mut screen = EditTaskScreen::new("l1", "t1", Locale::English);
    screen.set_limit_input("2024-06-01T20:00");

    // 20:00 JST is 11:00 UTC
    let now = utc("2024-06-01T10:00:00Z");
    assert_eq!(
        screen.remaining_time(&now, &jst()).unwrap(),
        "0 days 1 hours 0 minutes"
    );
}

#[test]
fn test_remaining_time_with_empty_input() {
    let screen = EditTaskScreen::new("l1", "t1", Locale::Japanese);
    let now = utc("2024-01-01T00:00:00Z");

    assert!(matches!(
        screen.remaining_time(&now, &Utc),
        Err(Error::InvalidTimestamp(_))
    ));
    assert_eq!(screen.remaining_time_text(&now, &Utc), "日時不明");
}

#[test]
fn test_set_status() {
    let mut screen = EditTaskScreen::new("l1", "t1", Locale::Japanese);

    screen.set_status("done").unwrap();
    assert!(screen.is_done);
    screen.set_status("todo").unwrap();
    assert!(!screen.is_done);

    assert!(matches!(screen.set_status("maybe"), Err(Error::InvalidInput(_))));
    assert!(!screen.is_done);
}

#[test]
fn test_build_update_open_task_uses_input() {
    let mut screen = EditTaskScreen::new("l1", "t1", Locale::Japanese);
    screen.set_title("Report");
    screen.set_detail("final");
    screen.set_limit_input("2024-01-05T09:00");

    let update = screen
        .build_update(&utc("2024-01-01T00:00:00Z"), &jst())
        .expect("Failed to build update");

    assert_eq!(update.title, "Report");
    assert_eq!(update.detail, "final");
    assert!(!update.done);
    assert_eq!(update.limit, utc("2024-01-05T00:00:00Z"));
}

#[test]
fn test_build_update_done_overwrites_limit_with_now() {
    let mut screen = EditTaskScreen::new("l1", "t1", Locale::Japanese);
    screen.set_limit_input("2024-01-05T09:00");
    screen.set_status("done").unwrap();

    let now = utc("2024-01-02T03:04:05Z");
    let update = screen.build_update(&now, &jst()).unwrap();

    assert!(update.done);
    assert_eq!(update.limit, now);
}

#[test]
fn test_build_update_done_ignores_broken_input() {
    let mut screen = EditTaskScreen::new("l1", "t1", Locale::Japanese);
    screen.set_limit_input("garbage");
    screen.set_status("done").unwrap();

    assert!(screen.build_update(&utc("2024-01-02T00:00:00Z"), &Utc).is_ok());
}

#[test]
fn test_submit_completes_task() {
    let repo = seeded_repo();
    let mut screen = EditTaskScreen::open(&repo, "l1", "t1", &jst(), Locale::Japanese);
    screen.set_status("done").unwrap();

    let now = utc("2024-01-02T03:04:00Z");
    screen.submit(&repo, &now, &jst()).expect("Failed to submit");

    let task = repo.task("l1", "t1").unwrap();
    assert!(task.done);
    assert_eq!(task.deadline().unwrap(), now);
    assert!(screen.error_message.is_none());
}

#[test]
fn test_submit_moves_deadline() {
    let repo = seeded_repo();
    let mut screen = EditTaskScreen::open(&repo, "l1", "t1", &jst(), Locale::Japanese);
    screen.set_limit_input("2024-01-10T18:00");

    screen
        .submit(&repo, &utc("2024-01-01T00:00:00Z"), &jst())
        .expect("Failed to submit");

    let task = repo.task("l1", "t1").unwrap();
    assert!(!task.done);
    assert_eq!(task.deadline().unwrap(), utc("2024-01-10T09:00:00Z"));
}

#[test]
fn test_submit_with_invalid_input_keeps_form_open() {
    let repo = seeded_repo();
    let mut screen = EditTaskScreen::open(&repo, "l1", "t1", &Utc, Locale::Japanese);
    screen.set_limit_input("");

    let result = screen.submit(&repo, &utc("2024-01-01T00:00:00Z"), &Utc);

    assert!(matches!(result, Err(Error::InvalidTimestamp(_))));
    let message = screen.error_message.as_deref().expect("error should be shown");
    assert!(message.starts_with("更新に失敗しました。"));
    // Backend untouched
    assert_eq!(repo.task("l1", "t1").unwrap().limit, "2024-01-03T02:05:00Z");
}

#[test]
fn test_submit_unauthorized() {
    let repo = seeded_repo();
    let mut screen = EditTaskScreen::open(&repo, "l1", "t1", &Utc, Locale::English);
    repo.set_client_token("").unwrap();

    let result = screen.submit(&repo, &utc("2024-01-01T00:00:00Z"), &Utc);

    assert!(matches!(result, Err(Error::Unauthorized)));
    assert_eq!(
        screen.error_message.as_deref(),
        Some("Failed to update. Unauthorized: missing bearer token")
    );
}

#[test]
fn test_delete_task() {
    let repo = seeded_repo();
    let mut screen = EditTaskScreen::open(&repo, "l1", "t2", &Utc, Locale::Japanese);

    screen.delete(&repo).expect("Failed to delete");

    assert!(matches!(repo.task("l1", "t2"), Err(Error::NotFound(_))));
    assert!(screen.error_message.is_none());
}

#[test]
fn test_delete_twice_reports_failure() {
    let repo = seeded_repo();
    let mut screen = EditTaskScreen::open(&repo, "l1", "t2", &Utc, Locale::Japanese);

    screen.delete(&repo).unwrap();
    assert!(screen.delete(&repo).is_err());

    let message = screen.error_message.as_deref().expect("error should be shown");
    assert!(message.starts_with("削除に失敗しました。"));
}
