use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stable opaque identifier for a task
///
/// IDs are assigned from a per-session counter when a task is created and
/// never change afterwards, so identifying a task by ID stays valid across
/// later inserts and deletes. Displayed as `#1`, `#2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both "#3" and "3", with surrounding whitespace
        let digits = s.trim().trim_start_matches('#');
        digits.parse::<u64>().map(TaskId).map_err(|_| {
            format!(
                "Invalid task ID '{}'. Task IDs look like: #1, #2, #3",
                s.trim()
            )
        })
    }
}

/// A single to-do entry
///
/// A task is Active until toggled, Completed until toggled back; toggling is
/// bidirectional with no terminal state. The record itself is destroyed only
/// by deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier assigned at creation
    pub id: TaskId,
    /// Task text, stored exactly as typed (including surrounding whitespace)
    pub text: String,
    /// Completion flag, false at creation
    pub completed: bool,
    /// Date when the task was added
    pub created_at: NaiveDate,
}

impl Task {
    /// Return a copy of this task with the completed flag inverted
    pub fn toggled(&self) -> Task {
        Task {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Label for the toggle affordance shown next to this task
    pub fn toggle_label(&self) -> &'static str {
        if self.completed { "Undo" } else { "Complete" }
    }

    /// Task text as displayed, struck through when completed
    pub fn display_text(&self) -> String {
        if self.completed {
            format!("~~{}~~", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// View filter for listing tasks
///
/// Filters only what is rendered; the underlying collection is never
/// filtered by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    /// Only tasks not yet completed
    Active,
    /// Only completed tasks
    Completed,
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: active, completed",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(1).to_string(), "#1");
        assert_eq!(TaskId(42).to_string(), "#42");
    }

    #[test]
    fn test_task_id_parse_with_hash() {
        let id: TaskId = "#7".parse().unwrap();
        assert_eq!(id, TaskId(7));
    }

    #[test]
    fn test_task_id_parse_without_hash() {
        let id: TaskId = "7".parse().unwrap();
        assert_eq!(id, TaskId(7));
    }

    #[test]
    fn test_task_id_parse_trims_whitespace() {
        let id: TaskId = "  #3  ".parse().unwrap();
        assert_eq!(id, TaskId(3));
    }

    #[test]
    fn test_task_id_parse_invalid() {
        assert!("abc".parse::<TaskId>().is_err());
        assert!("#".parse::<TaskId>().is_err());
        assert!("".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_toggled_inverts_flag_only() {
        let task = Task {
            id: TaskId(1),
            text: "Buy milk".to_string(),
            completed: false,
            created_at: local_date_today(),
        };

        let toggled = task.toggled();
        assert!(toggled.completed);
        assert_eq!(toggled.id, task.id);
        assert_eq!(toggled.text, task.text);
        assert_eq!(toggled.created_at, task.created_at);

        let back = toggled.toggled();
        assert_eq!(back, task);
    }

    #[test]
    fn test_toggle_label() {
        let task = Task {
            id: TaskId(1),
            text: "Buy milk".to_string(),
            completed: false,
            created_at: local_date_today(),
        };
        assert_eq!(task.toggle_label(), "Complete");
        assert_eq!(task.toggled().toggle_label(), "Undo");
    }

    #[test]
    fn test_display_text_strikethrough() {
        let task = Task {
            id: TaskId(1),
            text: "Buy milk".to_string(),
            completed: true,
            created_at: local_date_today(),
        };
        assert_eq!(task.display_text(), "~~Buy milk~~");
        assert_eq!(task.toggled().display_text(), "Buy milk");
    }

    #[test]
    fn test_task_filter_parse() {
        assert_eq!("active".parse::<TaskFilter>().unwrap(), TaskFilter::Active);
        assert_eq!(
            "completed".parse::<TaskFilter>().unwrap(),
            TaskFilter::Completed
        );
        assert!("done".parse::<TaskFilter>().is_err());
    }
}
