//! Frontend Models
//!
//! Data structures matching the items API.

use serde::{Deserialize, Serialize};

/// Item as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewItem<'a> {
    pub name: &'a str,
}
