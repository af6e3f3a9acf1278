//! Item List Component

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

/// Items in display order
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_page_store();

    view! {
        <ul class="item-list">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| view! { <li>{item.name}</li> }
            />
        </ul>
    }
}
