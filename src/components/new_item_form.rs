//! New Item Form Component
//!
//! Name input with inline validation errors. The submit button is disabled
//! while a create request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::PageController;
use crate::controller::finish_submit;
use crate::store::{use_page_store, PageStateStoreFields};

/// Form for creating a new item
#[component]
pub fn NewItemForm(controller: StoredValue<PageController, LocalStorage>) -> impl IntoView {
    let store = use_page_store();
    let max_len = controller.with_value(|c| c.rules().max_len);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        let Some(name) = controller.begin_submit(&mut store.write()) else {
            return;
        };

        spawn_local(async move {
            let outcome = controller.create(&name).await;
            finish_submit(&mut store.write(), outcome);
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="New item name"
                    maxlength=max_len.to_string()
                    prop:value=move || store.draft().get()
                    on:input=move |ev| {
                        store.write().set_draft(event_target_value(&ev));
                    }
                />
                <button type="submit" disabled=move || store.loading().get()>
                    {move || if store.loading().get() { "Adding..." } else { "Add" }}
                </button>
            </div>

            {move || store.error().get().map(|err| view! {
                <div class="form-error">{err.to_string()}</div>
            })}
        </form>
    }
}
