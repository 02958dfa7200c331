//! Item Dialog Component
//!
//! Modal with the selected item's price, category, ingredients and
//! nutrition facts.

use leptos::prelude::*;
use leptos_focus_trap::make_on_tab_keydown;
use wasm_bindgen::JsCast;

use crate::dialog::{is_close_target, use_dialog};

#[component]
pub fn ItemDialog() -> impl IntoView {
    let dialog = use_dialog();
    let is_open = dialog.is_open();
    let detail = dialog.detail;
    let content_ref = dialog.content_ref;
    let on_tab = make_on_tab_keydown(is_open, move || {
        content_ref.get_untracked().map(web_sys::Element::from)
    });

    // Close button and backdrop carry data-close; content clicks do not
    let on_click = move |ev: web_sys::MouseEvent| {
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        if target.as_ref().is_some_and(is_close_target) {
            dialog.close();
        }
    };

    let title = move || detail.with(|d| d.as_ref().map(|d| d.title.clone()).unwrap_or_default());
    let price = move || detail.with(|d| d.as_ref().map(|d| d.price.clone()).unwrap_or_default());
    let category = move || detail.with(|d| d.as_ref().map(|d| d.category.clone()).unwrap_or_default());

    let ingredients = move || {
        detail
            .with(|d| d.as_ref().map(|d| d.ingredients.clone()).unwrap_or_default())
            .into_iter()
            .map(|ingredient| view! { <li>{ingredient}</li> })
            .collect_view()
    };

    let nutrition = move || {
        detail
            .with(|d| d.as_ref().map(|d| d.nutrition.clone()).unwrap_or_default())
            .into_iter()
            .map(|fact| view! { <dt>{fact.label}</dt><dd>{fact.value}</dd> })
            .collect_view()
    };

    view! {
        <div
            id="item-modal"
            class="modal"
            aria-hidden=move || if is_open.get() { "false" } else { "true" }
            on:click=on_click
        >
            <div class="modal-backdrop" data-close=""></div>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                tabindex="-1"
                node_ref=dialog.content_ref
                on:keydown=on_tab
            >
                <button type="button" class="modal-close" data-close="" aria-label="Close">
                    "×"
                </button>
                <h2 id="modal-title">{title}</h2>
                <p class="modal-meta">
                    <span id="modal-price">{price}</span>
                    " · "
                    <span id="modal-category">{category}</span>
                </p>
                <h3>"Ingredients"</h3>
                <ul id="modal-ingredients">{ingredients}</ul>
                <h3>"Nutrition"</h3>
                <dl id="modal-nutrition">{nutrition}</dl>
            </div>
        </div>
    }
}
