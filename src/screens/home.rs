//! Task list screen state

use crate::deadline::{format_date_time_in, format_remaining, DateTimeStyle};
use crate::locale::{Action, Locale};
use crate::tasks::{DisplayFilter, Task, TaskList, TaskRepository};
use chrono::{DateTime, TimeZone, Utc};

/// One rendered entry of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Task ID
    pub task_id: String,
    /// Route of the edit screen for this task
    pub edit_path: String,
    /// Task title
    pub title: String,
    /// Completion status label
    pub status: String,
    /// Label for `timestamp` (deadline or completion time)
    pub timestamp_label: String,
    /// `limit` rendered in the viewer's zone
    pub timestamp: String,
    /// Remaining time; only present for open tasks
    pub remaining: Option<String>,
}

/// Home screen state
#[derive(Debug, Default)]
pub struct HomeScreen {
    /// Available lists, in backend order
    pub lists: Vec<TaskList>,
    /// Currently selected list
    pub selected_list_id: Option<String>,
    /// Tasks of the selected list
    pub tasks: Vec<Task>,
    /// Which tasks are shown
    pub filter: DisplayFilter,
    /// Last failure, shown above the lists
    pub error_message: Option<String>,
    /// Language for labels and messages
    pub locale: Locale,
}

impl HomeScreen {
    /// Create new home screen
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Fetch the lists and the tasks of the first one
    pub fn load(&mut self, repo: &dyn TaskRepository) {
        match repo.lists() {
            Ok(lists) => {
                tracing::debug!("Loaded {} lists", lists.len());
                self.lists = lists;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch lists: {}", e);
                self.error_message = Some(self.locale.failure(Action::FetchLists, &e));
                return;
            }
        }

        if let Some(first) = self.lists.first().map(|list| list.id.clone()) {
            self.select_list(repo, &first);
        }
    }

    /// Select a list and fetch its tasks
    pub fn select_list(&mut self, repo: &dyn TaskRepository, list_id: &str) {
        self.selected_list_id = Some(list_id.to_string());

        match repo.tasks(list_id) {
            Ok(tasks) => {
                tracing::debug!("Loaded {} tasks for list {}", tasks.len(), list_id);
                self.tasks = tasks;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch tasks for list {}: {}", list_id, e);
                self.error_message = Some(self.locale.failure(Action::FetchTasks, &e));
            }
        }
    }

    /// Change which tasks are shown
    pub fn set_filter(&mut self, filter: DisplayFilter) {
        self.filter = filter;
    }

    /// Whether a list is the selected one
    pub fn is_selected(&self, list_id: &str) -> bool {
        self.selected_list_id.as_deref() == Some(list_id)
    }

    /// Selected list, if it is still among the loaded lists
    pub fn selected_list(&self) -> Option<&TaskList> {
        let id = self.selected_list_id.as_deref()?;
        self.lists.iter().find(|list| list.id == id)
    }

    /// Render the visible tasks for one wall-clock sample
    ///
    /// Empty while no list is selected.
    pub fn rows<Tz: TimeZone>(&self, now: &DateTime<Utc>, tz: &Tz) -> Vec<TaskRow> {
        let Some(list_id) = self.selected_list_id.as_deref() else {
            return Vec::new();
        };

        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .map(|task| self.row(list_id, task, now, tz))
            .collect()
    }

    fn row<Tz: TimeZone>(&self, list_id: &str, task: &Task, now: &DateTime<Utc>, tz: &Tz) -> TaskRow {
        let deadline = task.deadline();
        if let Err(e) = &deadline {
            tracing::warn!("Task {} has an unreadable limit: {}", task.id, e);
        }

        let timestamp = match &deadline {
            Ok(instant) => format_date_time_in(instant, tz, DateTimeStyle::Display),
            Err(_) => self.locale.invalid_timestamp().to_string(),
        };

        // Finished tasks keep their completion time in `limit`
        let (timestamp_label, remaining) = if task.done {
            (self.locale.completed_at_label(), None)
        } else {
            let remaining = match &deadline {
                Ok(instant) => format_remaining(instant, now, self.locale),
                Err(_) => self.locale.invalid_timestamp().to_string(),
            };
            (self.locale.deadline_label(), Some(remaining))
        };

        TaskRow {
            task_id: task.id.clone(),
            edit_path: format!("/lists/{}/tasks/{}", list_id, task.id),
            title: task.title.clone(),
            status: self.locale.status(task.done).to_string(),
            timestamp_label: timestamp_label.to_string(),
            timestamp,
            remaining,
        }
    }
}
