//! Application Context
//!
//! Shared state provided via Leptos Context API: the displayed task list,
//! the last backend error and the controller that talks to the backend.

use std::fmt::Display;

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskhub_client::{Refresh, Task, TaskClient, TaskListController, Written};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mutation + refresh orchestration (holds `!Send` state, so local storage)
    controller: StoredValue<TaskListController<TaskClient>, LocalStorage>,
    /// Tasks currently displayed - read
    pub tasks: ReadSignal<Vec<Task>>,
    /// Tasks currently displayed - write (whole-list replacement only)
    set_tasks: WriteSignal<Vec<Task>>,
    /// Last failed backend call, shown in the error banner - read
    pub last_error: ReadSignal<Option<String>>,
    /// Last failed backend call - write
    set_last_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        controller: TaskListController<TaskClient>,
        tasks: (ReadSignal<Vec<Task>>, WriteSignal<Vec<Task>>),
        last_error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            tasks: tasks.0,
            set_tasks: tasks.1,
            last_error: last_error.0,
            set_last_error: last_error.1,
        }
    }

    pub fn controller(&self) -> TaskListController<TaskClient> {
        self.controller.get_value()
    }

    /// Swap in a refreshed list; superseded refreshes are ignored
    pub fn apply(&self, refresh: Refresh) {
        if let Some(tasks) = refresh.into_fresh() {
            self.set_tasks.set(tasks);
            self.set_last_error.set(None);
        }
    }

    /// Show the refresh that followed an accepted write.
    /// A failed reload says so; the write itself went through.
    pub fn apply_written(&self, written: Written) {
        match written.refresh {
            Ok(refresh) => self.apply(refresh),
            Err(e) => self.report("reload tasks", e),
        }
    }

    /// Log a failed call and surface it; the displayed list stays as it was
    pub fn report(&self, action: &str, err: impl Display) {
        tracing::warn!(action, error = %err, "backend call failed");
        self.set_last_error.set(Some(format!("Could not {}: {}", action, err)));
    }

    pub fn dismiss_error(&self) {
        self.set_last_error.set(None);
    }

    /// Re-fetch the full list
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.controller().refresh().await {
                Ok(refresh) => ctx.apply(refresh),
                Err(e) => ctx.report("load tasks", e),
            }
        });
    }

    /// Replace a task with `task` (full record), then refresh
    pub fn update(&self, task: Task) {
        let ctx = *self;
        spawn_local(async move {
            ctx.run_update(&task).await;
        });
    }

    /// Like `update`, awaited; returns whether the backend accepted the write
    pub async fn run_update(&self, task: &Task) -> bool {
        match self.controller().update(task).await {
            Ok(written) => {
                self.apply_written(written);
                true
            }
            Err(e) => {
                self.report("update task", e);
                false
            }
        }
    }

    /// Delete by id, then refresh
    pub fn delete(&self, id: u32) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.controller().delete(id).await {
                Ok(written) => ctx.apply_written(written),
                Err(e) => ctx.report("delete task", e),
            }
        });
    }
}
