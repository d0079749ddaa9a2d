use crate::model::task::{Task, TaskId, local_date_today};

/// The task collection together with the staged input
///
/// This is the single stateful component of the system. It owns the ordered
/// task list and the one string of not-yet-committed text, and exposes the
/// operations that move between states.
pub struct TaskList {
    /// All tasks in insertion order
    ///
    /// Vec is the primary storage:
    /// 1. Insertion order is the only ordering and must be preserved
    /// 2. Enables predictable iteration order for rendering
    /// 3. Simple ownership model - the Vec owns all data directly
    ///
    /// Mutations replace the whole Vec (append, mapped toggle, filtered
    /// removal) rather than editing elements in place, so each state is an
    /// independent snapshot of the previous one.
    tasks: Vec<Task>,

    /// Text typed into the entry field but not yet committed
    ///
    /// Cleared only by a successful add; a blank add leaves it untouched.
    staged_input: String,

    /// Counter for generating unique task IDs
    task_counter: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            staged_input: String::new(),
            task_counter: 0,
        }
    }
}

impl TaskList {
    /// Create a new empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    fn generate_task_id(&mut self) -> TaskId {
        self.task_counter += 1;
        TaskId(self.task_counter)
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the list
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Current staged input
    pub fn staged_input(&self) -> &str {
        &self.staged_input
    }

    /// Find a task by its ID
    ///
    /// # Arguments
    /// * `id` - The task ID to search for
    ///
    /// # Returns
    /// An optional reference to the task if found
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the staged input unconditionally
    ///
    /// No validation is applied; any string, including blank ones, is
    /// accepted as the new staged value.
    pub fn set_staged_input(&mut self, value: impl Into<String>) {
        self.staged_input = value.into();
    }

    /// Commit the staged input as a new task
    ///
    /// If the staged input trims to empty this is a no-op: nothing is
    /// appended and the staged input keeps its current value. Otherwise the
    /// text is stored exactly as typed, the task is appended at the end with
    /// a fresh ID, and the staged input is cleared.
    ///
    /// # Returns
    /// The ID of the new task, or None when the staged input was blank
    pub fn add(&mut self) -> Option<TaskId> {
        if self.staged_input.trim().is_empty() {
            return None;
        }

        let id = self.generate_task_id();
        let task = Task {
            id,
            text: std::mem::take(&mut self.staged_input),
            completed: false,
            created_at: local_date_today(),
        };

        // Append: new collection = old collection + task
        let mut next = std::mem::take(&mut self.tasks);
        next.push(task);
        self.tasks = next;

        Some(id)
    }

    /// Flip the completed flag of the identified task
    ///
    /// Rebuilds the collection with the identified task replaced by a
    /// toggled copy; every other task is carried over unchanged and order is
    /// preserved.
    ///
    /// # Arguments
    /// * `id` - The task ID to toggle
    ///
    /// # Returns
    /// The task after the toggle, or None when no task has that ID
    pub fn toggle(&mut self, id: TaskId) -> Option<Task> {
        self.find(id)?;

        self.tasks = self
            .tasks
            .iter()
            .map(|t| if t.id == id { t.toggled() } else { t.clone() })
            .collect();

        self.find(id).cloned()
    }

    /// Remove the identified task from the list
    ///
    /// Rebuilds the collection without the identified task; later tasks
    /// close the gap and keep their relative order.
    ///
    /// # Arguments
    /// * `id` - The task ID to remove
    ///
    /// # Returns
    /// The removed task, or None when no task has that ID
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.find(id).cloned()?;

        self.tasks = self
            .tasks
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();

        Some(removed)
    }

    /// Remove every completed task from the list
    ///
    /// # Returns
    /// How many tasks were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();

        self.tasks = self
            .tasks
            .iter()
            .filter(|t| !t.completed)
            .cloned()
            .collect();

        before - self.tasks.len()
    }
}
