//! Text Formatting
//!
//! HTML escaping for markup built from menu data, and currency formatting
//! through `Intl.NumberFormat` with a fixed fallback.

/// Escape text for insertion into HTML markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a price in the browser locale, falling back to `$0.00` style
pub fn format_price(value: f64, currency: &str) -> String {
    locale_price(value, currency).unwrap_or_else(|| fallback_price(value))
}

/// Fixed two-decimal dollar format
pub fn fallback_price(value: f64) -> String {
    format!("${:.2}", value)
}

// js_sys::Intl::NumberFormat does not catch constructor or format exceptions;
// these bindings do, so a throwing Intl falls through to `fallback_price`.
#[cfg(target_arch = "wasm32")]
mod intl {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = Intl)]
        pub type NumberFormat;

        #[wasm_bindgen(constructor, catch, js_namespace = Intl)]
        pub fn new(locales: &JsValue, options: &JsValue) -> Result<NumberFormat, JsValue>;

        #[wasm_bindgen(method, catch, js_class = "Intl.NumberFormat")]
        pub fn format(this: &NumberFormat, value: f64) -> Result<String, JsValue>;
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_price(value: f64, currency: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"style".into(), &"currency".into()).ok()?;
    js_sys::Reflect::set(&options, &"currency".into(), &currency.into()).ok()?;

    let formatter = intl::NumberFormat::new(&JsValue::UNDEFINED, &options).ok()?;
    formatter.format(value).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_price(_value: f64, _currency: &str) -> Option<String> {
    None
}
