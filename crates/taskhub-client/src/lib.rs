//! TaskHub Client
//!
//! Everything the task list view needs that is not a view:
//! - models: the `Task` record exchanged with the backend
//! - config: where the backend lives
//! - api: REST access layer (`TaskApi` + reqwest-backed `TaskClient`)
//! - form: the create/edit form model and its validation
//! - controller: mutation + refresh orchestration for the list view

mod config;
mod error;
mod models;

pub mod api;
pub mod controller;
pub mod form;

pub use api::{TaskApi, TaskClient};
pub use config::ClientConfig;
pub use controller::{Refresh, RefreshGate, SubmitError, TaskListController, Written};
pub use error::{ApiError, ApiResult};
pub use form::{FormErrors, FormField, TaskForm};
pub use models::{Task, DEFAULT_PRIORITY};
