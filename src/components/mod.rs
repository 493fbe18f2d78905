//! UI Components
//!
//! Leptos components for the task list view.

mod delete_confirm_button;
mod error_banner;
mod new_task_form;
mod task_list;
mod task_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
