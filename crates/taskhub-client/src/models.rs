//! Task Model
//!
//! Data structure matching the backend's task serializer.

use serde::{Deserialize, Serialize};

/// Priority given to tasks created without an explicit one
pub const DEFAULT_PRIORITY: i32 = 50;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the backend; `None` until the task has been created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub title: String,
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default)]
    pub confidential: bool,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl Task {
    /// Create a task that has not been sent to the backend yet
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            priority: DEFAULT_PRIORITY,
            confidential: false,
        }
    }

    /// True once the backend has assigned an id
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
