//! Task repository seam and the REST routes behind it
//!
//! The screens only talk to a [`TaskRepository`]. An implementation backed by
//! the REST API issues the requests described by [`Endpoint`], each carrying
//! the header produced by [`bearer_header`].

use crate::tasks::task::{Task, TaskList, TaskUpdate};
use crate::{Error, Result};
use std::fmt;

/// HTTP method of a task endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read
    Get,
    /// Replace
    Put,
    /// Remove
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A REST route of the task backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /lists`
    Lists,
    /// `GET /lists/{listId}/tasks`
    Tasks {
        /// List ID
        list_id: String,
    },
    /// `GET /lists/{listId}/tasks/{taskId}`
    Task {
        /// List ID
        list_id: String,
        /// Task ID
        task_id: String,
    },
    /// `PUT /lists/{listId}/tasks/{taskId}`
    UpdateTask {
        /// List ID
        list_id: String,
        /// Task ID
        task_id: String,
    },
    /// `DELETE /lists/{listId}/tasks/{taskId}`
    DeleteTask {
        /// List ID
        list_id: String,
        /// Task ID
        task_id: String,
    },
}

impl Endpoint {
    /// HTTP method for this route
    pub fn method(&self) -> Method {
        match self {
            Self::Lists | Self::Tasks { .. } | Self::Task { .. } => Method::Get,
            Self::UpdateTask { .. } => Method::Put,
            Self::DeleteTask { .. } => Method::Delete,
        }
    }

    /// Path relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Self::Lists => "/lists".to_string(),
            Self::Tasks { list_id } => format!("/lists/{}/tasks", list_id),
            Self::Task { list_id, task_id }
            | Self::UpdateTask { list_id, task_id }
            | Self::DeleteTask { list_id, task_id } => {
                format!("/lists/{}/tasks/{}", list_id, task_id)
            }
        }
    }

    /// Absolute URL under `base_url` (a trailing slash on the base is ignored)
    ///
    /// For REST adapters of [`TaskRepository`]; `base_url` is normally
    /// [`crate::settings::Settings::api_url`].
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// Build the authorization header sent with every task request
///
/// # Errors
/// Returns [`Error::Unauthorized`] when the token is empty.
pub fn bearer_header(token: &str) -> Result<(&'static str, String)> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::Unauthorized);
    }

    Ok(("authorization", format!("Bearer {}", token)))
}

/// Access to lists and tasks
///
/// Implementations map each method onto one [`Endpoint`].
pub trait TaskRepository: Send + Sync {
    /// `GET /lists`
    fn lists(&self) -> Result<Vec<TaskList>>;

    /// `GET /lists/{listId}/tasks`
    fn tasks(&self, list_id: &str) -> Result<Vec<Task>>;

    /// `GET /lists/{listId}/tasks/{taskId}`
    fn task(&self, list_id: &str, task_id: &str) -> Result<Task>;

    /// `PUT /lists/{listId}/tasks/{taskId}`
    fn update_task(&self, list_id: &str, task_id: &str, update: &TaskUpdate) -> Result<()>;

    /// `DELETE /lists/{listId}/tasks/{taskId}`
    fn delete_task(&self, list_id: &str, task_id: &str) -> Result<()>;
}
