//! Error Banner Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Last failed backend call, dismissable. The list below keeps its last good state.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.last_error.get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{message}</span>
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>"×"</button>
                </div>
            }
        })
    }
}
