//! Task edit screen state

use crate::deadline::{format_date_time_in, format_remaining, parse_in, DateTimeStyle};
use crate::locale::{Action, Locale};
use crate::tasks::{TaskRepository, TaskUpdate};
use crate::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};

/// Edit Task screen state
#[derive(Debug)]
pub struct EditTaskScreen {
    /// List the task belongs to
    pub list_id: String,
    /// Task being edited
    pub task_id: String,
    /// Title input
    pub title: String,
    /// Detail input
    pub detail: String,
    /// Status radio (true = done)
    pub is_done: bool,
    /// Datetime input value, `YYYY-MM-DDTHH:mm` in the viewer's zone
    pub limit_input: String,
    /// Last failure, shown above the form
    pub error_message: Option<String>,
    /// Language for labels and messages
    pub locale: Locale,
}

impl EditTaskScreen {
    /// Create an empty form for a task
    pub fn new(list_id: &str, task_id: &str, locale: Locale) -> Self {
        Self {
            list_id: list_id.to_string(),
            task_id: task_id.to_string(),
            title: String::new(),
            detail: String::new(),
            is_done: false,
            limit_input: String::new(),
            error_message: None,
            locale,
        }
    }

    /// Create the form and fill it from the repository
    pub fn open<Tz: TimeZone>(
        repo: &dyn TaskRepository,
        list_id: &str,
        task_id: &str,
        tz: &Tz,
        locale: Locale,
    ) -> Self {
        let mut screen = Self::new(list_id, task_id, locale);
        screen.load(repo, tz);
        screen
    }

    /// Fetch the task and pre-fill every field
    ///
    /// On failure the fields are left untouched and the error message is set.
    pub fn load<Tz: TimeZone>(&mut self, repo: &dyn TaskRepository, tz: &Tz) {
        let task = match repo.task(&self.list_id, &self.task_id) {
            Ok(task) => task,
            Err(e) => {
                tracing::warn!("Failed to fetch task {}: {}", self.task_id, e);
                self.error_message = Some(self.locale.failure(Action::FetchTask, &e));
                return;
            }
        };

        self.title = task.title.clone();
        self.detail = task.detail.clone();
        self.is_done = task.done;
        self.limit_input = match task.deadline() {
            Ok(instant) => format_date_time_in(&instant, tz, DateTimeStyle::Input),
            Err(e) => {
                // An empty input lets the user pick a fresh deadline
                tracing::warn!("Task {} has an unreadable limit: {}", task.id, e);
                String::new()
            }
        };
    }

    /// Set the title input
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the detail input
    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = detail.into();
    }

    /// Set the datetime input
    pub fn set_limit_input(&mut self, limit: impl Into<String>) {
        self.limit_input = limit.into();
    }

    /// Set the status from a radio value (`"done"` or `"todo"`)
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] for any other value.
    pub fn set_status(&mut self, value: &str) -> Result<()> {
        self.is_done = match value {
            "done" => true,
            "todo" => false,
            other => return Err(Error::InvalidInput(format!("Unknown status: {}", other))),
        };
        Ok(())
    }

    /// Deadline currently entered in the form
    ///
    /// # Errors
    /// Returns [`Error::InvalidTimestamp`] when the input is empty or malformed.
    pub fn entered_deadline<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Utc>> {
        parse_in(&self.limit_input, tz)
    }

    /// Remaining time until the entered deadline
    ///
    /// # Errors
    /// Returns [`Error::InvalidTimestamp`] when the input is empty or malformed.
    pub fn remaining_time<Tz: TimeZone>(&self, now: &DateTime<Utc>, tz: &Tz) -> Result<String> {
        let deadline = self.entered_deadline(tz)?;
        Ok(format_remaining(&deadline, now, self.locale))
    }

    /// Remaining time, or the locale's fallback when the input is unusable
    pub fn remaining_time_text<Tz: TimeZone>(&self, now: &DateTime<Utc>, tz: &Tz) -> String {
        self.remaining_time(now, tz)
            .unwrap_or_else(|_| self.locale.invalid_timestamp().to_string())
    }

    /// Build the update body
    ///
    /// Marking the task done records `now` as its `limit`, replacing the deadline.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTimestamp`] for an open task whose input is unusable.
    pub fn build_update<Tz: TimeZone>(&self, now: &DateTime<Utc>, tz: &Tz) -> Result<TaskUpdate> {
        let limit = if self.is_done {
            *now
        } else {
            self.entered_deadline(tz)?
        };

        Ok(TaskUpdate {
            title: self.title.clone(),
            detail: self.detail.clone(),
            done: self.is_done,
            limit,
        })
    }

    /// Save the form
    ///
    /// On success the caller returns to the task list. On failure the error
    /// message is set and the error is returned so the form stays open.
    pub fn submit<Tz: TimeZone>(
        &mut self,
        repo: &dyn TaskRepository,
        now: &DateTime<Utc>,
        tz: &Tz,
    ) -> Result<()> {
        let result = self
            .build_update(now, tz)
            .and_then(|update| repo.update_task(&self.list_id, &self.task_id, &update));

        match result {
            Ok(()) => {
                tracing::info!("Saved task {}", self.task_id);
                self.error_message = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to update task {}: {}", self.task_id, e);
                self.error_message = Some(self.locale.failure(Action::UpdateTask, &e));
                Err(e)
            }
        }
    }

    /// Delete the task
    ///
    /// Same contract as [`EditTaskScreen::submit`].
    pub fn delete(&mut self, repo: &dyn TaskRepository) -> Result<()> {
        match repo.delete_task(&self.list_id, &self.task_id) {
            Ok(()) => {
                tracing::info!("Deleted task {}", self.task_id);
                self.error_message = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to delete task {}: {}", self.task_id, e);
                self.error_message = Some(self.locale.failure(Action::DeleteTask, &e));
                Err(e)
            }
        }
    }
}
