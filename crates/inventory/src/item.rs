use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, Entity, ItemId, Price};
use bookstore_notifications::Fulfillment;

/// Fields shared by every item variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub id: ItemId,
    pub title: String,
    pub year: i32,
    pub price: Price,
    pub author: String,
}

/// Variant-specific state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    /// Printed copies on a shelf; purchases are shipped.
    Physical { stock: u32 },
    /// Downloadable file; purchases are emailed.
    Digital { format: String },
    /// Showcase copy, never sold.
    Display,
}

/// A catalog entry held by the inventory.
///
/// The identifier, title, year, price and author are fixed at construction.
/// Only a physical item's stock changes, and only through a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    year: i32,
    price: Price,
    author: String,
    kind: ItemKind,
}

impl Item {
    pub fn physical(details: ItemDetails, stock: u32) -> Self {
        Self::with_kind(details, ItemKind::Physical { stock })
    }

    pub fn digital(details: ItemDetails, format: impl Into<String>) -> Self {
        Self::with_kind(
            details,
            ItemKind::Digital {
                format: format.into(),
            },
        )
    }

    pub fn display(details: ItemDetails) -> Self {
        Self::with_kind(details, ItemKind::Display)
    }

    fn with_kind(details: ItemDetails, kind: ItemKind) -> Self {
        let ItemDetails {
            id,
            title,
            year,
            price,
            author,
        } = details;
        Self {
            id,
            title,
            year,
            price,
            author,
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Copies on hand; `None` for variants that don't track stock.
    pub fn stock(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Physical { stock } => Some(stock),
            ItemKind::Digital { .. } | ItemKind::Display => None,
        }
    }

    /// File format of a digital item.
    pub fn format(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Digital { format } => Some(format),
            ItemKind::Physical { .. } | ItemKind::Display => None,
        }
    }

    /// True when `quantity` copies can be taken. Untracked variants never run out.
    pub fn has_enough_stock(&self, quantity: u32) -> bool {
        self.stock().is_none_or(|stock| stock >= quantity)
    }

    pub fn can_be_sold(&self) -> bool {
        !matches!(self.kind, ItemKind::Display)
    }

    /// Human-readable variant name, for display only.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ItemKind::Physical { .. } => "Paper Book",
            ItemKind::Digital { .. } => "EBook",
            ItemKind::Display => "Showcase/Demo Book",
        }
    }

    /// `current_year - year > years_threshold`.
    pub fn is_outdated(&self, current_year: i32, years_threshold: i32) -> bool {
        i64::from(current_year) - i64::from(self.year) > i64::from(years_threshold)
    }

    /// Run the variant's delivery side effect.
    ///
    /// Physical items are shipped to `shipping_address`, digital items are
    /// mailed to `customer_contact`. Display items refuse with `NotForSale`
    /// even when called directly.
    pub fn process_purchase(
        &self,
        fulfillment: &Fulfillment,
        customer_contact: &str,
        shipping_address: &str,
    ) -> DomainResult<()> {
        match self.kind {
            ItemKind::Physical { .. } => fulfillment.ship_order(shipping_address)?,
            ItemKind::Digital { .. } => fulfillment.send_digital_delivery(customer_contact)?,
            ItemKind::Display => return Err(DomainError::not_for_sale(&self.id)),
        }
        Ok(())
    }

    /// Remove `quantity` copies from a physical item's stock.
    ///
    /// Fails with `InsufficientStock` without touching the count; a no-op for
    /// variants that don't track stock.
    pub(crate) fn take_stock(&mut self, quantity: u32) -> DomainResult<()> {
        if let ItemKind::Physical { stock } = &mut self.kind {
            let available = *stock;
            *stock = available
                .checked_sub(quantity)
                .ok_or_else(|| DomainError::insufficient_stock(&self.id, available, quantity))?;
        }
        Ok(())
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
