//! Item Endpoints
//!
//! `reqwest` client for `{API_BASE}/items`. On wasm32 requests go through
//! the browser's fetch.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ApiError, ItemsApi};
use crate::config::PageConfig;
use crate::models::{Item, NewItem};

#[derive(Clone)]
pub struct HttpItemsApi {
    client: reqwest::Client,
    items_url: String,
}

impl HttpItemsApi {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            items_url: config.items_url(),
        }
    }

    pub fn items_url(&self) -> &str {
        &self.items_url
    }
}

#[async_trait(?Send)]
impl ItemsApi for HttpItemsApi {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let response = self.client.get(&self.items_url).send().await?;
        read_json(response).await
    }

    async fn create_item(&self, name: &str) -> Result<Item, ApiError> {
        let response = self
            .client
            .post(&self.items_url)
            .json(&NewItem { name })
            .send()
            .await?;
        read_json(response).await
    }
}

/// Decode a 2xx body as JSON; anything else becomes `ApiError::Status` with the body text
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), body });
    }
    Ok(serde_json::from_str(&body)?)
}
