//! UI Components
//!
//! Leptos components for the items page.

mod item_list;
mod new_item_form;

pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
