//! List Controller
//!
//! Loads the item list and runs submissions against an `ItemsApi`.
//!
//! A submission is split in two halves, `begin_submit` and `finish_submit`,
//! so the view can apply each to the store atomically around the awaited
//! request. `submit` runs both for callers that own the state outright.

use log::{debug, error, warn};

use crate::api::{ApiError, ItemsApi};
use crate::models::Item;
use crate::store::{FormError, PageState};
use crate::validation::{clean_and_validate, NameRules};

#[derive(Clone)]
pub struct ListController<A> {
    api: A,
    rules: NameRules,
}

impl<A: ItemsApi> ListController<A> {
    pub fn new(api: A, rules: NameRules) -> Self {
        Self { api, rules }
    }

    pub fn rules(&self) -> &NameRules {
        &self.rules
    }

    /// Fetch the initial list. Failures are logged and yield an empty list;
    /// nothing is shown to the user.
    pub async fn load_initial(&self) -> Vec<Item> {
        match self.api.list_items().await {
            Ok(items) => {
                debug!("[LIST] Fetched {} items", items.len());
                items
            }
            Err(e) => {
                error!("[LIST] Initial load failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Validate the draft and mark the state busy.
    ///
    /// Returns the cleaned name to send, or `None` if nothing should be sent:
    /// either a request is already in flight or the name was rejected (the
    /// reason is left in `state.error`).
    pub fn begin_submit(&self, state: &mut PageState) -> Option<String> {
        if state.loading {
            warn!("[FORM] Submit ignored, a request is already in flight");
            return None;
        }
        state.error = None;

        match clean_and_validate(&state.draft, &state.items, &self.rules) {
            Ok(name) => {
                state.loading = true;
                Some(name)
            }
            Err(reason) => {
                debug!("[FORM] Rejected {:?}: {}", state.draft, reason);
                state.error = Some(FormError::Invalid(reason));
                None
            }
        }
    }

    /// Send a cleaned name
    pub async fn create(&self, name: &str) -> Result<Item, ApiError> {
        self.api.create_item(name).await
    }

    /// Submit the current draft and apply the result
    pub async fn submit(&self, state: &mut PageState) {
        let Some(name) = self.begin_submit(state) else {
            return;
        };
        let outcome = self.create(&name).await;
        finish_submit(state, outcome);
    }
}

/// Apply the outcome of a create request. Always clears `loading`.
pub fn finish_submit(state: &mut PageState, outcome: Result<Item, ApiError>) {
    match outcome {
        Ok(item) => {
            debug!("[FORM] Created item #{} {:?}", item.id, item.name);
            state.items.push(item);
            state.draft.clear();
        }
        Err(e) => {
            error!("[FORM] Create item failed: {}", e);
            state.error = Some(FormError::NetworkFailure);
        }
    }
    state.loading = false;
}
