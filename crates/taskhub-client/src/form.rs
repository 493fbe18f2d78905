//! Task Form Model
//!
//! Editable record behind the "new task" form and the inline row editor.
//! Only `title` and `description` are validated; everything else is left
//! to the backend.

use std::fmt;

use crate::models::{Task, DEFAULT_PRIORITY};

/// Form fields that carry validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Required fields that were left empty
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Required field(s) missing: {}", join_fields(.missing))]
pub struct FormErrors {
    pub missing: Vec<FormField>,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(FormField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl FormErrors {
    pub fn has(&self, field: FormField) -> bool {
        self.missing.contains(&field)
    }
}

/// Editable task record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub confidential: bool,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            confidential: false,
        }
    }
}

impl TaskForm {
    /// Prefill from an existing task (row editor)
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            confidential: task.confidential,
        }
    }

    /// Check required fields. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(FormField::Title);
        }
        if self.description.trim().is_empty() {
            missing.push(FormField::Description);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormErrors { missing })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Payload for a create request (no id)
    pub fn to_new_task(&self) -> Result<Task, FormErrors> {
        self.validate()?;
        Ok(Task {
            id: None,
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            confidential: self.confidential,
        })
    }

    /// Full replacement record for `task`, keeping its id
    pub fn apply_to(&self, task: &Task) -> Result<Task, FormErrors> {
        let mut updated = self.to_new_task()?;
        updated.id = task.id;
        Ok(updated)
    }

    /// Back to the pristine defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
