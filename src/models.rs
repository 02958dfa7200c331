//! Frontend Models
//!
//! Data structures matching `data/menu.json`.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Menu item identifier, either a JSON number or a string.
/// `1` and `"1"` are different identifiers; `1` and `1.0` are the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(f64),
    Text(String),
}

impl ItemId {
    // -0.0 and 0.0 compare equal, so they must hash alike
    fn number_bits(n: f64) -> u64 {
        if n == 0.0 { 0.0f64.to_bits() } else { n.to_bits() }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ItemId::Number(a), ItemId::Number(b)) => a == b,
            (ItemId::Text(a), ItemId::Text(b)) => a == b,
            _ => false,
        }
    }
}

// JSON numbers are never NaN
impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ItemId::Number(n) => {
                0u8.hash(state);
                Self::number_bits(*n).hash(state);
            }
            ItemId::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<f64> for ItemId {
    fn from(n: f64) -> Self {
        ItemId::Number(n)
    }
}

/// Nutrition facts for one serving
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub caffeine_mg: f64,
    pub sugar_g: f64,
    pub fat_g: f64,
    pub protein_g: f64,
}

/// Menu item data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub nutrition: Nutrition,
}

/// Find an item by identifier
pub fn find_item<'a>(items: &'a [MenuItem], id: &ItemId) -> Option<&'a MenuItem> {
    items.iter().find(|item| &item.id == id)
}

#[cfg(test)]
pub(crate) fn latte() -> MenuItem {
    MenuItem {
        id: ItemId::from("latte"),
        name: "Latte".to_string(),
        category: "Coffee".to_string(),
        price: 4.5,
        emoji: None,
        ingredients: vec!["Espresso".to_string(), "Milk".to_string()],
        nutrition: Nutrition {
            calories: 190.0,
            caffeine_mg: 150.0,
            sugar_g: 14.0,
            fat_g: 7.0,
            protein_g: 9.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_string_and_number() {
        let ids: Vec<ItemId> = serde_json::from_str(r#"["latte", 7]"#).unwrap();
        assert_eq!(ids, vec![ItemId::from("latte"), ItemId::from(7.0)]);
        assert_ne!(ItemId::from("7"), ItemId::from(7.0));
        assert_eq!(ids[1].to_string(), "7");
    }

    #[test]
    fn test_id_accepts_fractional_number() {
        let ids: Vec<ItemId> = serde_json::from_str("[1.5, 2.0, 2]").unwrap();
        assert_eq!(ids[0], ItemId::from(1.5));
        assert_eq!(ids[0].to_string(), "1.5");
        assert_eq!(ids[1], ids[2]);
        assert_eq!(ids[1].to_string(), "2");
    }

    #[test]
    fn test_equal_numbers_hash_alike() {
        use std::collections::HashSet;

        let set: HashSet<ItemId> = [ItemId::from(0.0), ItemId::from(-0.0), ItemId::from("0")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_find_item() {
        let mut mocha = latte();
        mocha.id = ItemId::from("mocha");
        let items = vec![latte(), mocha];

        assert_eq!(find_item(&items, &ItemId::from("mocha")).map(|i| &i.id), Some(&ItemId::from("mocha")));
        assert!(find_item(&items, &ItemId::from("chai")).is_none());
    }
}
