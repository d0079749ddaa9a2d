//! Session To-Do MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a minimal
//! to-do list held in memory for the lifetime of one server session. The
//! connected MCP client acts as the user interface host: it translates user
//! gestures into tool calls, and every tool response carries a complete
//! redraw of the view.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `model` module - Task records and list operations
//! - **View Layer**: `render` module - Plain-text rendering of the surface
//!
//! There is no persistence layer: state lives and dies with the session.
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::TodoServerHandler;
//!
//! let handler = TodoServerHandler::new();
//! // Use handler with an MCP server...
//! ```

mod model;
mod render;

use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::{Result as McpResult, bail};
use std::sync::Mutex;

// Re-export commonly used types
pub use model::{Task, TaskFilter, TaskId, TaskList, local_date_today};
pub use render::{apply_task_filter, render_view};

/// MCP server handler for the session to-do list
///
/// Owns the one task list and staged input behind a mutex; every tool call
/// runs to completion under the lock, so operations never interleave.
pub struct TodoServerHandler {
    pub(crate) state: Mutex<TaskList>,
}

impl TodoServerHandler {
    /// Create a handler with an empty task list
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TaskList::new()),
        }
    }
}

impl Default for TodoServerHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Session-scoped to-do list: stage text, add it as a task, toggle tasks
/// between active and completed, and delete them.
///
/// The list lives in memory for the lifetime of this server session; nothing
/// is persisted. Tasks keep their insertion order and are addressed by the
/// stable IDs shown in the rendered view (#1, #2, ...). Every response ends
/// with a full redraw of the current view, so the client can always display
/// the latest state without a separate query.
///
/// Typical flow: set_staged_input("Buy milk") → add_task() →
/// toggle_task("#1") when done → delete_task("#1") or clear_completed().
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Stage**: Replace the staged input (the entry field) with new text.
    /// **Workflow**: Stage text first, then add_task() to commit it. Any string is accepted, including blank ones.
    #[tool]
    pub async fn set_staged_input(
        &self,
        /// New staged text, stored as-is with no validation
        value: String,
    ) -> McpResult<String> {
        let mut state = self.state.lock().unwrap();
        state.set_staged_input(value);

        Ok(render::render_view(state.staged_input(), state.tasks()))
    }

    /// **Add**: Commit the staged input as a new task at the end of the list.
    /// **Note**: If the staged input is blank after trimming, nothing happens - no task, no error, staged input kept.
    #[tool]
    pub async fn add_task(&self) -> McpResult<String> {
        let mut state = self.state.lock().unwrap();

        match state.add() {
            Some(id) => {
                let view = render::render_view(state.staged_input(), state.tasks());
                Ok(format!("Task created with ID: {}\n\n{}", id, view))
            }
            None => {
                let view = render::render_view(state.staged_input(), state.tasks());
                Ok(format!("Nothing to add: staged input is blank\n\n{}", view))
            }
        }
    }

    /// **Toggle**: Flip a task between active and completed. Completed rows render struck through with an Undo affordance.
    /// **Tip**: Toggling twice restores the original state.
    #[tool]
    pub async fn toggle_task(
        &self,
        /// Task ID as shown in the view (e.g. "#1"; the leading # is optional)
        id: String,
    ) -> McpResult<String> {
        let task_id: TaskId = match id.parse() {
            Ok(i) => i,
            Err(e) => bail!("{}", e),
        };

        let mut state = self.state.lock().unwrap();

        match state.toggle(task_id) {
            Some(task) => {
                let view = render::render_view(state.staged_input(), state.tasks());
                Ok(format!(
                    "Task {} is now {}\n\n{}",
                    task.id,
                    if task.completed { "completed" } else { "active" },
                    view
                ))
            }
            None => {
                drop(state);
                bail!("Task '{}' not found", task_id);
            }
        }
    }

    /// **Delete**: Remove a task from the list. Later tasks close the gap; their IDs do not change.
    #[tool]
    pub async fn delete_task(
        &self,
        /// Task ID as shown in the view (e.g. "#1"; the leading # is optional)
        id: String,
    ) -> McpResult<String> {
        let task_id: TaskId = match id.parse() {
            Ok(i) => i,
            Err(e) => bail!("{}", e),
        };

        let mut state = self.state.lock().unwrap();

        match state.delete(task_id) {
            Some(task) => {
                let view = render::render_view(state.staged_input(), state.tasks());
                Ok(format!(
                    "Deleted task {} ({})\n\n{}",
                    task.id, task.text, view
                ))
            }
            None => {
                drop(state);
                bail!("Task '{}' not found", task_id);
            }
        }
    }

    /// **Review**: Render the current view, optionally filtered by completion state.
    /// **Use**: No filter=all rows; "active"=not yet completed; "completed"=done rows only.
    #[tool]
    pub async fn list(
        &self,
        /// Filter: active/completed. Empty=all.
        filter: Option<String>,
    ) -> McpResult<String> {
        // Parse filter if provided
        let filter = match filter.as_deref() {
            None | Some("") => None,
            Some(s) => match s.parse::<TaskFilter>() {
                Ok(f) => Some(f),
                Err(_) => {
                    bail!("Invalid filter '{}'. Valid filters: active, completed", s);
                }
            },
        };

        let state = self.state.lock().unwrap();

        let mut tasks: Vec<Task> = state.tasks().to_vec();
        if let Some(f) = filter {
            render::apply_task_filter(&mut tasks, f);
        }

        Ok(render::render_view(state.staged_input(), &tasks))
    }

    /// **Purge**: Delete every completed task in one step.
    /// **Workflow**: Toggle tasks to completed first, then clear_completed to remove them all.
    #[tool]
    pub async fn clear_completed(&self) -> McpResult<String> {
        let mut state = self.state.lock().unwrap();

        let count = state.clear_completed();
        let view = render::render_view(state.staged_input(), state.tasks());

        Ok(format!("Removed {} completed task(s)\n\n{}", count, view))
    }
}
