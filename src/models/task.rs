use serde::{Deserialize, Serialize};

/// A single to-do entry. Position in its list is its only identity; there
/// are no stable task IDs, so an index shown to the user is valid only
/// against the display it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// Checkbox mark for list rendering.
    pub fn status_mark(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            " "
        }
    }
}
