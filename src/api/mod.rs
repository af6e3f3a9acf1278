//! Items API
//!
//! Frontend bindings to the two items endpoints.

mod error;
mod item;

use async_trait::async_trait;

use crate::models::Item;

pub use error::ApiError;
pub use item::HttpItemsApi;

/// Remote source of items.
///
/// Futures are not `Send`: on wasm32 they wrap browser fetch promises.
#[async_trait(?Send)]
pub trait ItemsApi {
    /// `GET /items`
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;

    /// `POST /items` with `{name}`; returns the created item
    async fn create_item(&self, name: &str) -> Result<Item, ApiError>;
}
