/// A single to-do entry.
///
/// The label is fixed at creation; completion is the only mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub label: String,
    pub complete: bool,
}

impl Task {
    /// Create a new, not yet completed task.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            complete: false,
        }
    }

    /// Returns true if this task is marked complete
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
