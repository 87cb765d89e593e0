//! Screen state
//!
//! Both screens are plain owned state driven by the caller:
//! - `home` - List tabs, done/todo filter and the rendered task rows
//! - `edit_task` - The edit form, its remaining-time preview and save/delete
//!
//! Rendering takes `now` and the viewer's time zone as arguments; the caller
//! samples its [`crate::clock::Clock`] once per frame.

pub mod edit_task;
pub mod home;

pub use edit_task::EditTaskScreen;
pub use home::{HomeScreen, TaskRow};
