//! TaskHub Frontend App
//!
//! Single list view: error banner, new-task form, task list.

use leptos::prelude::*;
use taskhub_client::{ClientConfig, Task, TaskClient, TaskListController};

use crate::components::{ErrorBanner, NewTaskForm, TaskList};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();

    match TaskClient::new(config) {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "task backend configured");
            view! { <TaskListPage client=client /> }.into_any()
        }
        Err(e) => {
            tracing::error!(error = %e, "cannot start without a valid backend URL");
            view! { <p class="config-error">{e.to_string()}</p> }.into_any()
        }
    }
}

#[component]
fn TaskListPage(client: TaskClient) -> impl IntoView {
    // State
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (last_error, set_last_error) = signal::<Option<String>>(None);

    let ctx = AppContext::new(
        TaskListController::new(client),
        (tasks, set_tasks),
        (last_error, set_last_error),
    );

    // Provide context to all children
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| {
        ctx.reload();
    });

    view! {
        <main class="task-list-page">
            <h1>"Tasks"</h1>

            <ErrorBanner />

            <NewTaskForm />

            <TaskList />

            <footer class="task-list-footer">
                <span class="task-count">{move || format!("{} tasks", tasks.get().len())}</span>
                <button class="refresh-btn" on:click=move |_| ctx.reload()>"Refresh"</button>
            </footer>
        </main>
    }
}
