//! Read-only item snapshots for listings.

use serde::{Deserialize, Serialize};

use bookstore_core::{Entity, ItemId, Price};

use crate::item::Item;

/// Display-oriented copy of an item's state at listing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub price: Price,
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().clone(),
            title: item.title().to_string(),
            author: item.author().to_string(),
            year: item.year(),
            price: item.price(),
            item_type: item.type_name().to_string(),
            stock: item.stock(),
            format: item.format().map(str::to_string),
        }
    }
}

impl core::fmt::Display for ItemView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Author: {}, Year: {}, Price: {}, Type: {}",
            self.id, self.title, self.author, self.year, self.price, self.item_type
        )?;
        if let Some(stock) = self.stock {
            write!(f, ", Stock: {stock}")?;
        }
        if let Some(format) = &self.format {
            write!(f, ", File Type: {format}")?;
        }
        Ok(())
    }
}
