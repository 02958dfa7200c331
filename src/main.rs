#![allow(warnings)]
//! Café Menu Frontend Entry Point

mod app;
mod components;
mod config;
mod data;
mod dialog;
mod error;
mod format;
mod models;
mod store;

#[cfg(all(test, target_arch = "wasm32"))]
mod test_page;

use app::App;
use leptos::prelude::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
