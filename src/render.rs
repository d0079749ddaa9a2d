//! Rendering helpers for the to-do list view
//!
//! This module turns the current state into the plain-text view returned by
//! every tool. Rendering is always total: the whole view is rebuilt from
//! state, never patched incrementally.

use crate::model::{Task, TaskFilter};

/// Apply a view filter to tasks
///
/// # Arguments
/// * `tasks` - Mutable vector of tasks to filter
/// * `filter` - Which completion state to keep
///
/// # Description
/// Retains only the rows matching the filter. This operates on a rendering
/// copy; the underlying collection is never filtered.
pub fn apply_task_filter(tasks: &mut Vec<Task>, filter: TaskFilter) {
    tasks.retain(|task| match filter {
        TaskFilter::Active => !task.completed,
        TaskFilter::Completed => task.completed,
    });
}

/// Render the full view: staged input, add affordance, and one row per task
///
/// # Arguments
/// * `staged_input` - Current staged input, echoed back as the entry field
/// * `tasks` - Tasks to render, in order
///
/// # Returns
/// Plain-text representation of the whole surface
pub fn render_view(staged_input: &str, tasks: &[Task]) -> String {
    let mut result = format!("Staged input: {:?}\n[Add Task]\n\n", staged_input);

    if tasks.is_empty() {
        result.push_str("No tasks\n");
        return result;
    }

    result.push_str(&format!("{} task(s):\n\n", tasks.len()));
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} [{}] [Delete]\n",
            task.id,
            task.display_text(),
            task.toggle_label()
        ));
        result.push_str(&format!("  Added: {}\n", task.created_at));
    }

    result
}
