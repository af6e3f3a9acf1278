//! Items Page App
//!
//! Page component: loads the list on mount and lays out the form and list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use reactive_stores::Store;

use crate::api::HttpItemsApi;
use crate::components::{ItemList, NewItemForm};
use crate::config::PageConfig;
use crate::controller::ListController;
use crate::store::{PageState, PageStateStoreFields};

/// Controller wired to the real endpoints
pub type PageController = ListController<HttpItemsApi>;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    info!("[APP] Items endpoint: {}", config.items_url());

    let store = Store::new(PageState::new());
    provide_context(store);

    let controller = StoredValue::new_local(PageController::new(
        HttpItemsApi::new(&config),
        config.rules.clone(),
    ));

    // Load items on mount
    Effect::new(move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            let loaded = controller.load_initial().await;
            *store.items().write() = loaded;
        });
    });

    view! {
        <main class="items-page">
            <h1>"Items from DB"</h1>
            <NewItemForm controller=controller />
            <ItemList />
        </main>
    }
}
