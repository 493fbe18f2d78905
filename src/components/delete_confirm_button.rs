//! Delete Confirm Button Component
//!
//! Two-step delete: the first click arms the row, the second one deletes.

use leptos::prelude::*;

fn prompt_text(prompt: Option<String>) -> String {
    prompt
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "Delete?".to_string())
}

/// Delete button that asks before calling `on_confirm`
///
/// `prompt` replaces the default "Delete?" question.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] prompt: Option<String>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let prompt = prompt_text(prompt);

    let arm_button = move || {
        view! {
            <button
                class=button_class.clone()
                title="Delete task"
                on:click=move |_| set_armed.set(true)
            >
                "×"
            </button>
        }
    };

    view! {
        <Show when=move || armed.get() fallback=arm_button>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" on:click=move |_| set_armed.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
