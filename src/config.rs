//! Menu Configuration
//!
//! Static settings provided via Leptos context.

/// Page-wide settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuConfig {
    /// Location of the menu data file, relative to the page
    pub data_url: &'static str,
    /// ISO currency code for price formatting
    pub currency: &'static str,
    /// Icon used when an item has no emoji
    pub default_emoji: &'static str,
    /// Alert shown in place of the menu when loading fails
    pub load_failed_message: &'static str,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            data_url: "data/menu.json",
            currency: "USD",
            default_emoji: "☕",
            load_failed_message: "Unable to load the menu. Please refresh.",
        }
    }
}
