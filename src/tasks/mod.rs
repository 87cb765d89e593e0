//! Tasks and the REST boundary
//!
//! This module holds everything that crosses the wire to the task backend:
//! - `task` - Task, list and update records as the backend sends and accepts them
//! - `repository` - The `TaskRepository` seam, REST endpoints and bearer authorization
//! - `memory` - In-process repository used offline and in tests

pub mod memory;
pub mod repository;
pub mod task;

// Re-export commonly used types
pub use memory::MemoryTaskRepository;
pub use repository::{bearer_header, Endpoint, Method, TaskRepository};
pub use task::{DisplayFilter, Task, TaskList, TaskUpdate, TasksResponse};
