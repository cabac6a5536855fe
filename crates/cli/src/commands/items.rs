//! Wardrobe dashboard commands.

use wardly_app::{Wardly, WardlyConfig};

use super::{CommandError, open_store};

/// Show the number of stored items.
pub fn count(config: &WardlyConfig) -> Result<(), CommandError> {
    let store = open_store(config);
    let app = Wardly::open(&store, &config.keys)?;
    tracing::info!("Items in wardrobe: {}", app.item_count()?);
    Ok(())
}

/// Remove all stored items.
pub fn clear(config: &WardlyConfig) -> Result<(), CommandError> {
    let store = open_store(config);
    let app = Wardly::open(&store, &config.keys)?;
    app.clear_items()?;
    tracing::info!("Items cleared");
    Ok(())
}
