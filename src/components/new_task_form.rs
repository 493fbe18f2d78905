//! New Task Form Component
//!
//! Form for creating tasks. Title and description are required; the
//! request is only sent once both are filled in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskhub_client::{FormErrors, FormField, SubmitError, TaskForm};

use crate::context::AppContext;

fn field_class(errors: Option<FormErrors>, field: FormField) -> &'static str {
    match errors {
        Some(errs) if errs.has(field) => "form-field invalid",
        _ => "form-field",
    }
}

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (form, set_form) = signal(TaskForm::default());
    let (errors, set_errors) = signal::<Option<FormErrors>>(None);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.get();

        spawn_local(async move {
            match ctx.controller().create(&submitted).await {
                Ok(written) => {
                    // The task exists now; clear the form even if the reload failed.
                    set_errors.set(None);
                    set_form.update(TaskForm::reset);
                    ctx.apply_written(written);
                }
                Err(SubmitError::Invalid(errs)) => {
                    tracing::debug!(%errs, "new task blocked by validation");
                    set_errors.set(Some(errs));
                }
                Err(SubmitError::Api(e)) => ctx.report("create task", e),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <label class=move || field_class(errors.get(), FormField::Title)>
                "Title"
                <input
                    type="text"
                    required
                    placeholder="What needs doing?"
                    prop:value=move || form.get().title
                    on:input=move |ev| set_form.update(|f| f.title = event_target_value(&ev))
                />
            </label>

            <label class=move || field_class(errors.get(), FormField::Description)>
                "Description"
                <textarea
                    required
                    prop:value=move || form.get().description
                    on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </label>

            <label class="form-field">
                "Priority"
                <input
                    type="number"
                    prop:value=move || form.get().priority.to_string()
                    on:input=move |ev| {
                        if let Ok(priority) = event_target_value(&ev).parse::<i32>() {
                            set_form.update(|f| f.priority = priority);
                        }
                    }
                />
            </label>

            <label class="form-field checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || form.get().confidential
                    on:change=move |ev| set_form.update(|f| f.confidential = event_target_checked(&ev))
                />
                "Confidential"
            </label>

            {move || errors.get().map(|errs| view! {
                <p class="form-errors">{errs.to_string()}</p>
            })}

            <button type="submit">"Add task"</button>
        </form>
    }
}
