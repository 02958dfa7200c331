//! Leptos Focus Trap Utilities
//!
//! Keyboard focus containment for modal content.
//! Focusable descendants are queried on every Tab press, never cached,
//! so the trap follows content that changes while the modal is open.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent};

/// Selectors for elements that can take keyboard focus
pub const FOCUSABLE_SELECTORS: &[&str] = &[
    "a[href]",
    "button:not([disabled])",
    "textarea:not([disabled])",
    "input[type=\"text\"]:not([disabled])",
    "input[type=\"search\"]:not([disabled])",
    "input[type=\"radio\"]:not([disabled])",
    "input[type=\"checkbox\"]:not([disabled])",
    "select:not([disabled])",
    "[tabindex]:not([tabindex=\"-1\"])",
];

/// Comma-joined selector list for `querySelectorAll`
pub fn focusable_selector() -> String {
    FOCUSABLE_SELECTORS.join(",")
}

/// Filter applied after the selector match.
/// Rejects anything still carrying `disabled` or hidden from assistive technology.
pub fn is_eligible(has_disabled: bool, aria_hidden: Option<&str>) -> bool {
    !has_disabled && aria_hidden != Some("true")
}

/// Where focus sits relative to the trapping container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusAt {
    /// On the container itself (e.g. after a click on plain content)
    Container,
    /// On the focusable descendant at this index
    Element(usize),
    /// Anywhere else
    Elsewhere,
}

/// Index to move focus to when Tab is pressed, or `None` for default tabbing.
///
/// Forward from the last element wraps to the first, backward from the first
/// wraps to the last. Backward from the container itself also goes to the
/// last element, since the container precedes its descendants in tab order.
/// An empty list never wraps.
pub fn wrap_target(count: usize, focus: FocusAt, backward: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (focus, backward) {
        (FocusAt::Element(0), true) | (FocusAt::Container, true) => Some(last),
        (FocusAt::Element(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// Focusable descendants of `container`, in document order
pub fn focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(&focusable_selector()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter(|el| {
            let aria_hidden = el.get_attribute("aria-hidden");
            is_eligible(el.has_attribute("disabled"), aria_hidden.as_deref())
        })
        .collect()
}

fn active_element() -> Option<Element> {
    web_sys::window()?.document()?.active_element()
}

/// Apply the wrap rule for a Tab keydown inside `container`.
/// Returns true when focus was moved and the default action prevented.
pub fn trap_tab(container: &Element, ev: &KeyboardEvent) -> bool {
    let elements = focusable_elements(container);
    let focus = match active_element() {
        Some(active) => {
            let active: &JsValue = active.as_ref();
            let container: &JsValue = container.as_ref();
            let index = elements.iter().position(|el| {
                let el: &JsValue = el.as_ref();
                el == active
            });
            match index {
                Some(i) => FocusAt::Element(i),
                None if active == container => FocusAt::Container,
                None => FocusAt::Elsewhere,
            }
        }
        None => FocusAt::Elsewhere,
    };

    match wrap_target(elements.len(), focus, ev.shift_key()) {
        Some(index) => {
            ev.prevent_default();
            let _ = elements[index].focus();
            true
        }
        None => false,
    }
}

/// Create keydown handler for the trapping container.
/// `container` resolves the trapping element at event time; the handler
/// does nothing while `active` is false or the container is not mounted.
pub fn make_on_tab_keydown<C>(active: Signal<bool>, container: C) -> impl Fn(KeyboardEvent) + Copy + 'static
where
    C: Fn() -> Option<Element> + Copy + 'static,
{
    move |ev: KeyboardEvent| {
        if ev.key() != "Tab" || !active.get_untracked() {
            return;
        }
        if let Some(container) = container() {
            trap_tab(&container, &ev);
        }
    }
}

/// Focus the first focusable descendant, or the container itself
pub fn focus_initial(container: &Element) {
    let target = focusable_elements(container)
        .into_iter()
        .next()
        .or_else(|| container.dyn_ref::<HtmlElement>().cloned());
    if let Some(target) = target {
        let _ = target.focus();
    }
}

/// Return focus to a previously recorded element.
/// Skipped when the element left the document or can no longer take focus.
pub fn restore_focus(target: &Element) -> bool {
    if !target.is_connected() || target.has_attribute("disabled") {
        return false;
    }
    match target.dyn_ref::<HtmlElement>() {
        Some(el) => el.focus().is_ok(),
        None => false,
    }
}

/// Document-level keydown listener, removed when dropped
pub struct KeyListener {
    target: EventTarget,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    /// Bind `handler` to keydown on the document
    pub fn on_document<F>(handler: F) -> Option<Self>
    where
        F: FnMut(KeyboardEvent) + 'static,
    {
        let document = web_sys::window()?.document()?;
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(handler);
        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: document.into(),
            callback,
        })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}
