//! Item Dialog Controller
//!
//! Open/close lifecycle of the item detail modal: content population,
//! Escape-to-close, focus placement and focus restoration.
//! Tab containment comes from `leptos_focus_trap`.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_focus_trap::{focus_initial, restore_focus, KeyListener};
use web_sys::Element;

use crate::format::format_price;
use crate::models::{find_item, ItemId, MenuItem};
use crate::store::{MenuStateStoreFields, MenuStore};

/// Nutrition labels in display order
pub const NUTRITION_LABELS: [&str; 5] = [
    "Calories",
    "Caffeine (mg)",
    "Sugar (g)",
    "Fat (g)",
    "Protein (g)",
];

/// One label/value row of the nutrition list
#[derive(Clone, Debug, PartialEq)]
pub struct NutritionFact {
    pub label: &'static str,
    pub value: String,
}

/// Text content shown in the dialog for one item
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDetail {
    pub title: String,
    pub price: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub nutrition: Vec<NutritionFact>,
}

impl ItemDetail {
    pub fn new(item: &MenuItem, currency: &str) -> Self {
        let n = &item.nutrition;
        let values = [n.calories, n.caffeine_mg, n.sugar_g, n.fat_g, n.protein_g];

        Self {
            title: item.name.clone(),
            price: format_price(item.price, currency),
            category: item.category.clone(),
            ingredients: item.ingredients.clone(),
            nutrition: NUTRITION_LABELS
                .into_iter()
                .zip(values)
                .map(|(label, value)| NutritionFact {
                    label,
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

/// Dialog lifecycle state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(ItemId),
}

/// Resolved open request
#[derive(Debug)]
pub struct OpenTransition<'a> {
    pub item: &'a MenuItem,
    /// Record the focused element for restoration (only when coming from Closed)
    pub record_focus: bool,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open(_))
    }

    /// Resolve `id` for an open request. `None` leaves the dialog untouched.
    pub fn begin_open<'a>(&self, items: &'a [MenuItem], id: &ItemId) -> Option<OpenTransition<'a>> {
        let item = find_item(items, id)?;
        Some(OpenTransition {
            item,
            record_focus: !self.is_open(),
        })
    }

    /// Whether a document keydown with `key` dismisses the dialog
    pub fn dismisses_on(&self, key: &str) -> bool {
        self.is_open() && key == "Escape"
    }
}

/// Whether a click target carries the close flag
pub fn is_close_target(target: &Element) -> bool {
    matches!(target.closest("[data-close]"), Ok(Some(_)))
}

/// Dialog controller provided via context
#[derive(Clone, Copy)]
pub struct DialogController {
    store: MenuStore,
    currency: &'static str,
    /// Current lifecycle state - read/write
    pub state: RwSignal<DialogState>,
    /// Last populated content; kept after close
    pub detail: RwSignal<Option<ItemDetail>>,
    /// Dialog content container
    pub content_ref: NodeRef<leptos::html::Div>,
    restore_target: StoredValue<Option<Element>, LocalStorage>,
    escape_listener: StoredValue<Option<KeyListener>, LocalStorage>,
}

impl DialogController {
    pub fn new(store: MenuStore, currency: &'static str) -> Self {
        Self {
            store,
            currency,
            state: RwSignal::new(DialogState::Closed),
            detail: RwSignal::new(None),
            content_ref: NodeRef::new(),
            restore_target: StoredValue::new_local(None),
            escape_listener: StoredValue::new_local(None),
        }
    }

    pub fn is_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(DialogState::is_open))
    }

    /// Open the dialog for `id`; unknown identifiers are ignored
    pub fn open(&self, id: &ItemId) {
        let (detail, record_focus) = {
            let state = self.state.get_untracked();
            let items = self.store.items();
            let items = items.read_untracked();
            let Some(transition) = state.begin_open(&items, id) else {
                return;
            };
            (
                ItemDetail::new(transition.item, self.currency),
                transition.record_focus,
            )
        };

        if record_focus {
            let focused = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.active_element());
            self.restore_target.set_value(focused);
        }

        web_sys::console::log_1(&format!("[DIALOG] Opening item {}", id).into());
        self.detail.set(Some(detail));
        self.state.set(DialogState::Open(id.clone()));
        self.listen_for_escape();

        // Focus once the dialog is rendered visible
        let content_ref = self.content_ref;
        request_animation_frame(move || {
            if let Some(content) = content_ref.get_untracked() {
                focus_initial(&content);
            }
        });
    }

    /// Close the dialog and return focus to where it was before opening
    pub fn close(&self) {
        if !self.state.with_untracked(DialogState::is_open) {
            return;
        }

        self.state.set(DialogState::Closed);
        // Dropping the listener unbinds it
        self.escape_listener.set_value(None);

        if let Some(target) = self.restore_target.try_update_value(Option::take).flatten() {
            restore_focus(&target);
        }
    }

    #[cfg(test)]
    pub(crate) fn escape_bound(&self) -> bool {
        self.escape_listener.with_value(Option::is_some)
    }

    /// Bind exactly one document-level Escape listener
    fn listen_for_escape(&self) {
        self.escape_listener.set_value(None);

        let dialog = *self;
        let listener = KeyListener::on_document(move |ev: web_sys::KeyboardEvent| {
            if dialog.state.with_untracked(|s| s.dismisses_on(&ev.key())) {
                dialog.close();
            }
        });
        if listener.is_none() {
            web_sys::console::warn_1(&"[DIALOG] Could not bind Escape listener".into());
        }
        self.escape_listener.set_value(listener);
    }
}

/// Get the dialog controller from context
pub fn use_dialog() -> DialogController {
    expect_context::<DialogController>()
}
