//! Toast tray rendering the shared notice queue.

use leptos::prelude::*;

use crate::state::notice::use_notifier;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notifier = use_notifier();
    let state = notifier.state();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            {move || {
                state
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=format!("notice {}", notice.kind.css_modifier())>
                                <span class="notice__message">{notice.message}</span>
                                <button
                                    class="notice__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
