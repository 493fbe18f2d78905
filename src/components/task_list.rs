//! Task List Component

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::AppContext;

/// All tasks, in backend order
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <Show
            when=move || !ctx.tasks.get().is_empty()
            fallback=|| view! { <p class="task-list-empty">"No tasks yet."</p> }
        >
            <ul class="task-list">
                <For
                    each=move || ctx.tasks.get()
                    key=|task| {
                        // Every field, so an edited task re-renders its row
                        (
                            task.id,
                            task.title.clone(),
                            task.description.clone(),
                            task.priority,
                            task.confidential,
                        )
                    }
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </ul>
        </Show>
    }
}
