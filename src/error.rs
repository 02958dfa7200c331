//! Load Errors

use thiserror::Error;

use crate::models::ItemId;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("browser window is not available")]
    Unavailable,

    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected response status {0}")]
    Status(u16),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("invalid menu data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate menu item id {0}")]
    DuplicateId(ItemId),
}
