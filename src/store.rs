//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use thiserror::Error;

use crate::models::Item;
use crate::validation::ValidationError;

/// Error shown under the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Details are logged, never shown
    #[error("Failed to create item")]
    NetworkFailure,
}

/// State of one page instance
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PageState {
    /// Items in server order, plus any appended since load
    pub items: Vec<Item>,
    /// Text currently in the name input
    pub draft: String,
    /// A create request is in flight
    pub loading: bool,
    pub error: Option<FormError>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke in the name input: store the text and clear any shown error
    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
        self.error = None;
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
