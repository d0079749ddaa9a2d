//! To-do list domain model
//!
//! This module contains the core data structures and their implementations.
//! It is split into submodules for better organization:
//! - `task`: Individual task records and their stable identifiers
//! - `task_list`: The ordered task collection with all list operations

mod task;
mod task_list;

// Re-export all public types
pub use task::{Task, TaskFilter, TaskId, local_date_today};
pub use task_list::TaskList;
