//! UI Components
//!
//! Leptos components for the menu page.

mod item_dialog;
mod menu_card;
mod menu_list;

pub use item_dialog::ItemDialog;
pub use menu_list::MenuList;
