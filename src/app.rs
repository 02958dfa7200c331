//! Café Menu App
//!
//! Page layout, context setup and the startup menu fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ItemDialog, MenuList};
use crate::config::MenuConfig;
use crate::data;
use crate::dialog::DialogController;
use crate::store::{store_set_failed, store_set_items, MenuState};

#[component]
pub fn App() -> impl IntoView {
    let config = MenuConfig::default();
    let store = Store::new(MenuState::default());
    let dialog = DialogController::new(store, config.currency);

    // Provide context to all children
    provide_context(config);
    provide_context(store);
    provide_context(dialog);

    // Load menu once on mount; a failure is terminal
    Effect::new(move |_| {
        spawn_local(async move {
            match data::load_menu(config.data_url).await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[MENU] Loaded {} items", items.len()).into());
                    store_set_items(&store, items);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[MENU] Failed to load {}: {}", config.data_url, err).into(),
                    );
                    store_set_failed(&store);
                }
            }
        });
    });

    view! {
        <header class="site-header">
            <h1>"Café Menu"</h1>
            <p class="tagline">"Select an item to see ingredients and nutrition facts."</p>
        </header>
        <main class="main-content">
            <MenuList />
        </main>
        <ItemDialog />
    }
}
