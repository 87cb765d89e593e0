//! Task records as exchanged with the backend

use crate::deadline::parse_instant;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A task list, as returned by `GET /lists`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// List ID
    pub id: String,
    /// List title
    pub title: String,
}

/// A task, as returned by the task endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task ID
    pub id: String,
    /// Task title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub detail: String,
    /// Whether the task is finished
    pub done: bool,
    /// ISO-8601 deadline; holds the completion time once `done` is set
    pub limit: String,
}

impl Task {
    /// Create a new task
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
        done: bool,
        limit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            detail: detail.into(),
            done,
            limit: limit.into(),
        }
    }

    /// Parse `limit` into an instant
    ///
    /// # Errors
    /// Returns [`Error::InvalidTimestamp`] if the backend sent an unparsable value.
    pub fn deadline(&self) -> Result<DateTime<Utc>> {
        parse_instant(&self.limit)
    }

    /// Apply an update the way the backend stores it
    pub fn apply(&mut self, update: &TaskUpdate) {
        self.title = update.title.clone();
        self.detail = update.detail.clone();
        self.done = update.done;
        self.limit = update.limit_string();
    }
}

/// Body of `GET /lists/{listId}/tasks`
///
/// Decoded by the REST adapter behind [`crate::tasks::TaskRepository::tasks`];
/// the in-memory repository hands back `Vec<Task>` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksResponse {
    /// Tasks of the list; a `null` from the backend reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<Task>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Task>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Task>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `PUT /lists/{listId}/tasks/{taskId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// New title
    pub title: String,
    /// New description
    pub detail: String,
    /// New completion flag
    pub done: bool,
    /// New deadline, or the completion instant when `done` is set
    pub limit: DateTime<Utc>,
}

impl TaskUpdate {
    /// `limit` in the RFC 3339 form the backend echoes back
    pub fn limit_string(&self) -> String {
        self.limit.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

/// Which tasks the task list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFilter {
    /// Unfinished tasks, with deadline and remaining time
    #[default]
    Todo,
    /// Finished tasks, with completion time
    Done,
}

impl DisplayFilter {
    /// Whether a task belongs in this view
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Todo => !task.done,
            Self::Done => task.done,
        }
    }
}

impl FromStr for DisplayFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "todo" => Ok(Self::Todo),
            "done" => Ok(Self::Done),
            other => Err(Error::InvalidInput(format!("Unknown display filter: {}", other))),
        }
    }
}
