//! User-visible strings
//!
//! Japanese is the default, matching the labels the client has always shown.

use crate::deadline::Remaining;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operations whose failure is reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fetching the task lists
    FetchLists,
    /// Fetching the tasks of a list
    FetchTasks,
    /// Fetching a single task for editing
    FetchTask,
    /// Saving an edited task
    UpdateTask,
    /// Deleting a task
    DeleteTask,
}

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// 日本語
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    /// English
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Sentinel shown instead of a duration once a deadline has passed
    pub fn expired(&self) -> &'static str {
        match self {
            Self::Japanese => "期限切れ",
            Self::English => "expired",
        }
    }

    /// Render a remaining duration, always with all three units
    pub fn remaining(&self, remaining: &Remaining) -> String {
        match self {
            Self::Japanese => format!(
                "{}日{}時間{}分",
                remaining.days, remaining.hours, remaining.minutes
            ),
            Self::English => format!(
                "{} days {} hours {} minutes",
                remaining.days, remaining.hours, remaining.minutes
            ),
        }
    }

    /// Completion status label
    pub fn status(&self, done: bool) -> &'static str {
        match (self, done) {
            (Self::Japanese, true) => "完了",
            (Self::Japanese, false) => "未完了",
            (Self::English, true) => "done",
            (Self::English, false) => "todo",
        }
    }

    /// Label preceding the deadline of an open task
    pub fn deadline_label(&self) -> &'static str {
        match self {
            Self::Japanese => "期限：",
            Self::English => "Deadline: ",
        }
    }

    /// Label preceding the completion time of a finished task
    pub fn completed_at_label(&self) -> &'static str {
        match self {
            Self::Japanese => "完了日時：",
            Self::English => "Completed: ",
        }
    }

    /// Label preceding the remaining time
    pub fn remaining_label(&self) -> &'static str {
        match self {
            Self::Japanese => "残り時間：",
            Self::English => "Remaining: ",
        }
    }

    /// Shown in place of a timestamp that could not be parsed
    pub fn invalid_timestamp(&self) -> &'static str {
        match self {
            Self::Japanese => "日時不明",
            Self::English => "unknown",
        }
    }

    /// Error message for a failed operation
    pub fn failure(&self, action: Action, err: &dyn fmt::Display) -> String {
        let prefix = match (self, action) {
            (Self::Japanese, Action::FetchLists) => "リストの取得に失敗しました。",
            (Self::Japanese, Action::FetchTasks) => "タスクの取得に失敗しました。",
            (Self::Japanese, Action::FetchTask) => "タスク情報の取得に失敗しました。",
            (Self::Japanese, Action::UpdateTask) => "更新に失敗しました。",
            (Self::Japanese, Action::DeleteTask) => "削除に失敗しました。",
            (Self::English, Action::FetchLists) => "Failed to fetch lists. ",
            (Self::English, Action::FetchTasks) => "Failed to fetch tasks. ",
            (Self::English, Action::FetchTask) => "Failed to fetch task. ",
            (Self::English, Action::UpdateTask) => "Failed to update. ",
            (Self::English, Action::DeleteTask) => "Failed to delete. ",
        };

        format!("{}{}", prefix, err)
    }
}

impl FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" | "japanese" => Ok(Self::Japanese),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::English),
            other => Err(crate::Error::Settings(format!("Unsupported locale: {}", other))),
        }
    }
}
