//! Global Menu State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{find_item, ItemId, MenuItem};

/// Progress of the startup fetch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Page-wide menu state
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Items in source order; replaced wholesale on load
    pub items: Vec<MenuItem>,
    pub load: LoadState,
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the item list and mark loading finished
pub fn store_set_items(store: &MenuStore, items: Vec<MenuItem>) {
    *store.items().write() = items;
    store.load().set(LoadState::Ready);
}

/// Mark the load as failed; the item list stays empty
pub fn store_set_failed(store: &MenuStore) {
    store.load().set(LoadState::Failed);
}

/// Clone the item with `id` out of the store, if present
pub fn store_find_item(store: &MenuStore, id: &ItemId) -> Option<MenuItem> {
    store.items().with_untracked(|items| find_item(items, id).cloned())
}
