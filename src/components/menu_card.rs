//! Menu Card Component
//!
//! One keyboard-activatable entry per menu item.

use leptos::prelude::*;

use crate::config::MenuConfig;
use crate::dialog::use_dialog;
use crate::format::{escape_html, format_price};
use crate::models::{ItemId, MenuItem};

/// Rendered entry for one item
#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub id: ItemId,
    /// Inner markup of the card, with all item text escaped
    pub markup: String,
}

/// Build entries for `items`, one per item in source order
pub fn menu_entries(items: &[MenuItem], config: &MenuConfig) -> Vec<MenuEntry> {
    items
        .iter()
        .map(|item| MenuEntry {
            id: item.id.clone(),
            markup: card_markup(item, config),
        })
        .collect()
}

fn card_markup(item: &MenuItem, config: &MenuConfig) -> String {
    let emoji = item
        .emoji
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(config.default_emoji);
    format!(
        concat!(
            r#"<div class="title-row">"#,
            r#"<span class="menu-emoji">{}</span>"#,
            r#"<span class="menu-name">{}</span>"#,
            r#"</div>"#,
            r#"<div class="menu-category">{}</div>"#,
            r#"<div class="menu-price">{}</div>"#,
        ),
        escape_html(emoji),
        escape_html(&item.name),
        escape_html(&item.category),
        escape_html(&format_price(item.price, config.currency)),
    )
}

/// Keys that activate a card from the keyboard
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Menu card button; opens the item dialog on click, Enter or Space
#[component]
pub fn MenuCard(entry: MenuEntry) -> impl IntoView {
    let dialog = use_dialog();
    let MenuEntry { id, markup } = entry;
    let data_id = id.to_string();

    let click_id = id.clone();
    let on_click = move |_| dialog.open(&click_id);

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            dialog.open(&id);
        }
    };

    view! {
        <button
            type="button"
            class="menu-card"
            role="listitem"
            aria-haspopup="dialog"
            data-id=data_id
            on:click=on_click
            on:keydown=on_keydown
            inner_html=markup
        ></button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::latte;

    #[test]
    fn test_one_entry_per_item_in_order() {
        let mut mocha = latte();
        mocha.id = ItemId::from("mocha");
        mocha.name = "Mocha".to_string();
        let mut tea = latte();
        tea.id = ItemId::from(3.0);
        tea.name = "Tea".to_string();

        let entries = menu_entries(&[latte(), mocha, tea], &MenuConfig::default());

        let ids: Vec<String> = entries.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["latte", "mocha", "3"]);
        assert!(entries[1].markup.contains(r#"<span class="menu-name">Mocha</span>"#));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(menu_entries(&[], &MenuConfig::default()).is_empty());
    }

    #[test]
    fn test_card_shows_price_and_default_emoji() {
        let markup = card_markup(&latte(), &MenuConfig::default());
        assert!(markup.contains(r#"<span class="menu-emoji">☕</span>"#));
        assert!(markup.contains(r#"<div class="menu-category">Coffee</div>"#));
        assert!(markup.contains(r#"<div class="menu-price">$4.50</div>"#));
    }

    #[test]
    fn test_card_uses_item_emoji() {
        let mut item = latte();
        item.emoji = Some("🥛".to_string());
        let markup = card_markup(&item, &MenuConfig::default());
        assert!(markup.contains(r#"<span class="menu-emoji">🥛</span>"#));
    }

    #[test]
    fn test_card_empty_emoji_uses_default() {
        let mut item = latte();
        item.emoji = Some(String::new());
        let markup = card_markup(&item, &MenuConfig::default());
        assert!(markup.contains(r#"<span class="menu-emoji">☕</span>"#));
    }

    #[test]
    fn test_card_escapes_untrusted_text() {
        let mut item = latte();
        item.name = r#"<img src=x onerror="alert('x')">"#.to_string();
        item.category = "Tea & <Infusions>".to_string();
        item.emoji = Some("<b>".to_string());

        let markup = card_markup(&item, &MenuConfig::default());

        assert!(!markup.contains("<img"));
        assert!(!markup.contains("<b>"));
        assert!(markup.contains("&lt;img src=x onerror=&quot;alert(&#039;x&#039;)&quot;&gt;"));
        assert!(markup.contains("Tea &amp; &lt;Infusions&gt;"));
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }
}
