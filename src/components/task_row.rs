//! Task Row Component
//!
//! One task in the list: inline confidential toggle, inline editor and
//! delete. Every change is sent as a full-record update.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskhub_client::{FormErrors, FormField, Task, TaskForm};

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(TaskForm::from_task(&task));
    let (errors, set_errors) = signal::<Option<FormErrors>>(None);
    let (checked, set_checked) = signal(task.confidential);
    let task = StoredValue::new(task);

    let toggle_confidential = move |ev: web_sys::Event| {
        let requested = event_target_checked(&ev);
        set_checked.set(requested);
        let mut updated = task.get_value();
        updated.confidential = requested;
        spawn_local(async move {
            let accepted = ctx.run_update(&updated).await;
            let record = task.with_value(|t| t.confidential);
            set_checked.set(checkbox_state(record, requested, accepted));
        });
    };

    let start_edit = move |_: web_sys::MouseEvent| {
        set_draft.set(TaskForm::from_task(&task.get_value()));
        set_errors.set(None);
        set_editing.set(true);
    };

    let save_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.get().apply_to(&task.get_value()) {
            Ok(updated) => {
                set_errors.set(None);
                set_editing.set(false);
                ctx.update(updated);
            }
            Err(errs) => set_errors.set(Some(errs)),
        }
    };

    let invalid = move |field: FormField| errors.get().is_some_and(|errs| errs.has(field));

    view! {
        <li class=move || if task.with_value(|t| t.confidential) { "task-row confidential" } else { "task-row" }>
            {move || if editing.get() {
                view! {
                    <form class="task-edit-form" on:submit=save_edit>
                        <input
                            type="text"
                            class=move || if invalid(FormField::Title) { "invalid" } else { "" }
                            prop:value=move || draft.get().title
                            on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
                        />
                        <textarea
                            class=move || if invalid(FormField::Description) { "invalid" } else { "" }
                            prop:value=move || draft.get().description
                            on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                        <input
                            type="number"
                            prop:value=move || draft.get().priority.to_string()
                            on:input=move |ev| {
                                if let Ok(priority) = event_target_value(&ev).parse::<i32>() {
                                    set_draft.update(|d| d.priority = priority);
                                }
                            }
                        />
                        <button type="submit">"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <div class="task-summary">
                        <span class="task-priority">{task.with_value(|t| t.priority)}</span>
                        <span class="task-title">{task.with_value(|t| t.title.clone())}</span>
                        <span class="task-description">{task.with_value(|t| t.description.clone())}</span>
                        <label class="task-confidential">
                            <input
                                type="checkbox"
                                prop:checked=move || checked.get()
                                on:change=toggle_confidential
                            />
                            "Confidential"
                        </label>
                        <button class="edit-btn" on:click=start_edit>"Edit"</button>
                        {id.map(|id| view! {
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                prompt="Delete this task?"
                                on_confirm=Callback::new(move |_: ()| ctx.delete(id))
                            />
                        })}
                    </div>
                }.into_any()
            }}
        </li>
    }
}

/// What the confidential checkbox shows once the update settles:
/// the requested state if the backend took it, the stored record otherwise.
fn checkbox_state(record: bool, requested: bool, accepted: bool) -> bool {
    if accepted {
        requested
    } else {
        record
    }
}
