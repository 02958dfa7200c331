//! Menu List Component
//!
//! Renders the whole item list, or a single alert when loading failed.

use leptos::prelude::*;

use super::menu_card::{menu_entries, MenuCard};
use crate::config::MenuConfig;
use crate::store::{use_menu_store, LoadState, MenuStateStoreFields};

#[component]
pub fn MenuList() -> impl IntoView {
    let store = use_menu_store();
    let config = expect_context::<MenuConfig>();

    // Not keyed: every change re-renders the full list
    let content = move || match store.load().get() {
        LoadState::Loading => view! {
            <p class="menu-status" aria-live="polite">"Loading menu…"</p>
        }
        .into_any(),
        LoadState::Failed => view! {
            <p class="menu-error" role="alert">{config.load_failed_message}</p>
        }
        .into_any(),
        LoadState::Ready => store
            .items()
            .with(|items| menu_entries(items, &config))
            .into_iter()
            .map(|entry| view! { <MenuCard entry=entry /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <section id="menu" class="menu-grid" role="list" aria-label="Menu">
            {content}
        </section>
    }
}
