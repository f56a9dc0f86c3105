//! Modal for actions whose forms are not built yet.

use leptos::prelude::*;

/// Overlay with a title, one line of text, and a Close button.
///
/// Clicking the backdrop closes it too; clicks inside the panel do not.
#[component]
pub fn PlaceholderModal(title: &'static str, body: &'static str, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                <h3 class="modal__title">{title}</h3>
                <p class="modal__body">{body}</p>
                <div class="modal__actions">
                    <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
