//! In-process task repository
//!
//! Behaves like the REST backend: requests carry a bearer token that must
//! match the one the store was created with, unknown ids are `NotFound`,
//! and list order and task order are insertion order.

use crate::tasks::repository::{bearer_header, Endpoint, TaskRepository};
use crate::tasks::task::{Task, TaskList, TaskUpdate};
use crate::{Error, Result};
use std::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    lists: Vec<(TaskList, Vec<Task>)>,
}

impl Store {
    fn list(&self, list_id: &str) -> Result<&Vec<Task>> {
        self.lists
            .iter()
            .find(|(list, _)| list.id == list_id)
            .map(|(_, tasks)| tasks)
            .ok_or_else(|| Error::NotFound(format!("list {}", list_id)))
    }

    fn list_mut(&mut self, list_id: &str) -> Result<&mut Vec<Task>> {
        self.lists
            .iter_mut()
            .find(|(list, _)| list.id == list_id)
            .map(|(_, tasks)| tasks)
            .ok_or_else(|| Error::NotFound(format!("list {}", list_id)))
    }
}

/// Task repository held in memory
#[derive(Debug)]
pub struct MemoryTaskRepository {
    /// Authorization header value the store accepts
    accepted: String,
    /// Token presented by the client on each request
    client_token: RwLock<String>,
    store: RwLock<Store>,
}

impl MemoryTaskRepository {
    /// Create an empty repository that accepts `token`
    pub fn new(token: &str) -> Self {
        Self {
            accepted: format!("Bearer {}", token.trim()),
            client_token: RwLock::new(token.to_string()),
            store: RwLock::new(Store::default()),
        }
    }

    /// Replace the token presented on subsequent requests
    pub fn set_client_token(&self, token: &str) -> Result<()> {
        let mut client_token = self
            .client_token
            .write()
            .map_err(|e| Error::Repository(format!("Lock poisoned: {}", e)))?;
        *client_token = token.to_string();
        Ok(())
    }

    /// Add a list (replacing the title if the ID already exists)
    pub fn insert_list(&self, list: TaskList) -> Result<()> {
        let mut store = self.write()?;
        match store.lists.iter_mut().find(|(existing, _)| existing.id == list.id) {
            Some((existing, _)) => *existing = list,
            None => store.lists.push((list, Vec::new())),
        }
        Ok(())
    }

    /// Add a task to a list (replacing any task with the same ID)
    pub fn insert_task(&self, list_id: &str, task: Task) -> Result<()> {
        let mut store = self.write()?;
        let tasks = store.list_mut(list_id)?;
        match tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => tasks.push(task),
        }
        Ok(())
    }

    fn authorize(&self, endpoint: &Endpoint) -> Result<()> {
        let client_token = self
            .client_token
            .read()
            .map_err(|e| Error::Repository(format!("Lock poisoned: {}", e)))?;
        let (_, value) = bearer_header(&client_token)?;

        if value != self.accepted {
            tracing::warn!("Rejected {} with mismatched bearer token", endpoint);
            return Err(Error::Unauthorized);
        }

        tracing::debug!("{}", endpoint);
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|e| Error::Repository(format!("Lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|e| Error::Repository(format!("Lock poisoned: {}", e)))
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn lists(&self) -> Result<Vec<TaskList>> {
        self.authorize(&Endpoint::Lists)?;
        let store = self.read()?;
        Ok(store.lists.iter().map(|(list, _)| list.clone()).collect())
    }

    fn tasks(&self, list_id: &str) -> Result<Vec<Task>> {
        self.authorize(&Endpoint::Tasks {
            list_id: list_id.to_string(),
        })?;
        let store = self.read()?;
        Ok(store.list(list_id)?.clone())
    }

    fn task(&self, list_id: &str, task_id: &str) -> Result<Task> {
        self.authorize(&Endpoint::Task {
            list_id: list_id.to_string(),
            task_id: task_id.to_string(),
        })?;
        let store = self.read()?;
        store
            .list(list_id)?
            .iter()
            .find(|task| task.id == task_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("task {}", task_id)))
    }

    fn update_task(&self, list_id: &str, task_id: &str, update: &TaskUpdate) -> Result<()> {
        self.authorize(&Endpoint::UpdateTask {
            list_id: list_id.to_string(),
            task_id: task_id.to_string(),
        })?;
        let mut store = self.write()?;
        let task = store
            .list_mut(list_id)?
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| Error::NotFound(format!("task {}", task_id)))?;
        task.apply(update);

        tracing::info!("Updated task {} in list {}", task_id, list_id);
        Ok(())
    }

    fn delete_task(&self, list_id: &str, task_id: &str) -> Result<()> {
        self.authorize(&Endpoint::DeleteTask {
            list_id: list_id.to_string(),
            task_id: task_id.to_string(),
        })?;
        let mut store = self.write()?;
        let tasks = store.list_mut(list_id)?;
        let before = tasks.len();
        tasks.retain(|task| task.id != task_id);
        if tasks.len() == before {
            return Err(Error::NotFound(format!("task {}", task_id)));
        }

        tracing::info!("Deleted task {} from list {}", task_id, list_id);
        Ok(())
    }
}
