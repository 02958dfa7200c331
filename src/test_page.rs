//! Browser Test Page
//!
//! Mounts the menu list and item dialog into a scratch container for
//! `wasm_bindgen_test` tests.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

use crate::components::{ItemDialog, MenuList};
use crate::config::MenuConfig;
use crate::dialog::DialogController;
use crate::models::{latte, ItemId, MenuItem};
use crate::store::{store_set_failed, store_set_items, MenuState};

pub struct TestPage {
    pub root: HtmlElement,
    pub dialog: DialogController,
    _mounted: Box<dyn Any>,
}

/// Latte and Mocha
pub fn sample_items() -> Vec<MenuItem> {
    let mut mocha = latte();
    mocha.id = ItemId::from("mocha");
    mocha.name = "Mocha".to_string();
    vec![latte(), mocha]
}

impl TestPage {
    /// Mount with `items` loaded, or with a failed load when `None`
    pub fn mount(items: Option<Vec<MenuItem>>) -> Self {
        let root: HtmlElement = document().create_element("div").unwrap().unchecked_into();
        document().body().unwrap().append_child(&root).unwrap();

        let slot = Rc::new(Cell::new(None));
        let mounted = {
            let slot = Rc::clone(&slot);
            mount_to(root.clone(), move || {
                let config = MenuConfig::default();
                let store = Store::new(MenuState::default());
                let dialog = DialogController::new(store, config.currency);
                provide_context(config);
                provide_context(store);
                provide_context(dialog);

                match items {
                    Some(items) => store_set_items(&store, items),
                    None => store_set_failed(&store),
                }
                slot.set(Some(dialog));

                view! {
                    <button id="outside" type="button">"Outside"</button>
                    <MenuList />
                    <ItemDialog />
                }
            })
        };

        Self {
            root,
            dialog: slot.get().unwrap(),
            _mounted: Box::new(mounted),
        }
    }

    pub fn query(&self, selector: &str) -> HtmlElement {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element for {}", selector))
            .unchecked_into()
    }

    pub fn count(&self, selector: &str) -> u32 {
        self.root.query_selector_all(selector).unwrap().length()
    }

    pub fn modal_aria_hidden(&self) -> Option<String> {
        self.query("#item-modal").get_attribute("aria-hidden")
    }
}

impl Drop for TestPage {
    fn drop(&mut self) {
        self.root.remove();
    }
}

pub fn keydown(key: &str, shift: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

pub fn press_on_document(key: &str) {
    document().dispatch_event(&keydown(key, false)).unwrap();
}

pub fn is_focused(el: &Element) -> bool {
    match document().active_element() {
        Some(active) => {
            let active: JsValue = active.into();
            let el: &JsValue = el.as_ref();
            &active == el
        }
        None => false,
    }
}

/// Let pending effects and animation frames run
pub async fn settle() {
    TimeoutFuture::new(50).await;
}
