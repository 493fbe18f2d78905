//! Task List Controller
//!
//! Orchestrates the list view's calls into the access layer: every
//! successful mutation is followed by exactly one full list refresh; a
//! failed mutation triggers none. A refresh that fails after an accepted
//! write is reported inside `Written`, apart from the write itself. The
//! view owns the list and replaces it wholesale with each `Refresh::Fresh`.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{info, warn};

use crate::api::TaskApi;
use crate::error::ApiError;
use crate::form::{FormErrors, TaskForm};
use crate::models::Task;

/// Outcome of a list refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// The most recent list; replace the displayed one with it
    Fresh(Vec<Task>),
    /// A newer refresh was issued while this one was in flight
    Superseded,
}

impl Refresh {
    pub fn into_fresh(self) -> Option<Vec<Task>> {
        match self {
            Refresh::Fresh(tasks) => Some(tasks),
            Refresh::Superseded => None,
        }
    }
}

/// A write the backend accepted, plus the outcome of the follow-up refresh
#[derive(Debug)]
pub struct Written {
    pub refresh: Result<Refresh, ApiError>,
}

/// Why a submission did not go through
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Blocked by form validation; no request was sent
    #[error(transparent)]
    Invalid(#[from] FormErrors),

    /// The backend rejected the write or could not be reached
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Hands out refresh tickets; only the latest one is current.
///
/// Single-threaded by construction: clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct RefreshGate {
    latest: Rc<Cell<u64>>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh, superseding every earlier ticket
    pub fn issue(&self) -> u64 {
        let ticket = self.latest.get().wrapping_add(1);
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

/// Mutation + refresh orchestration for one list view
#[derive(Debug, Clone)]
pub struct TaskListController<A> {
    api: A,
    gate: RefreshGate,
}

impl<A: TaskApi> TaskListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            gate: RefreshGate::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the full list (initial load and after every write)
    pub async fn refresh(&self) -> Result<Refresh, ApiError> {
        let ticket = self.gate.issue();
        let result = self.api.list_tasks().await;

        // Outcome of an older refresh is irrelevant, success or not.
        if !self.gate.is_current(ticket) {
            info!(ticket, failed = result.is_err(), "dropping superseded task list");
            return Ok(Refresh::Superseded);
        }

        let tasks = result?;
        info!(count = tasks.len(), "task list refreshed");
        Ok(Refresh::Fresh(tasks))
    }

    /// Validate the form, create the task, then refresh.
    ///
    /// An invalid form returns `SubmitError::Invalid` without touching the backend.
    pub async fn create(&self, form: &TaskForm) -> Result<Written, SubmitError> {
        let task = form.to_new_task()?;
        let created = self.api.create_task(&task).await.map_err(|e| {
            warn!(error = %e, "create task failed");
            e
        })?;
        info!(id = ?created.id, "task created");
        Ok(self.written().await)
    }

    /// Replace `task` on the backend with this full record, then refresh
    pub async fn update(&self, task: &Task) -> Result<Written, ApiError> {
        self.api.update_task(task).await.map_err(|e| {
            warn!(id = ?task.id, error = %e, "update task failed");
            e
        })?;
        info!(id = ?task.id, "task updated");
        Ok(self.written().await)
    }

    /// Delete by id, then refresh
    pub async fn delete(&self, id: u32) -> Result<Written, ApiError> {
        self.api.delete_task(id).await.map_err(|e| {
            warn!(id, error = %e, "delete task failed");
            e
        })?;
        info!(id, "task deleted");
        Ok(self.written().await)
    }

    async fn written(&self) -> Written {
        let refresh = self.refresh().await;
        if let Err(e) = &refresh {
            warn!(error = %e, "refresh after write failed");
        }
        Written { refresh }
    }
}
