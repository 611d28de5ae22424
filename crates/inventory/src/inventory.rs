use std::collections::BTreeMap;

use bookstore_core::{DomainError, DomainResult, Entity, ItemId, Price};
use bookstore_notifications::Fulfillment;

use crate::item::Item;
use crate::view::ItemView;

/// The bookstore: exclusive owner of every stored item, keyed by identifier.
///
/// Items are kept in identifier order, so listings and eviction results are
/// deterministic for a given collection. Removal hands ownership back to the
/// caller; nothing stays shared.
///
/// Single-writer by construction (`&mut self`). A multi-caller wrapper must
/// hold one lock across the whole of `buy`.
#[derive(Debug)]
pub struct Inventory {
    items: BTreeMap<ItemId, Item>,
    fulfillment: Fulfillment,
}

impl Inventory {
    pub fn new(fulfillment: Fulfillment) -> Self {
        Self {
            items: BTreeMap::new(),
            fulfillment,
        }
    }

    /// Take ownership of `item`.
    ///
    /// Fails with `InvalidInput` for a blank identifier and `DuplicateKey` if
    /// the identifier is already stored; the collection is unchanged on error.
    pub fn add_item(&mut self, item: Item) -> DomainResult<()> {
        if item.id().is_blank() {
            return Err(DomainError::invalid_input("cannot add an item with an empty identifier"));
        }
        if self.items.contains_key(item.id()) {
            return Err(DomainError::duplicate_key(item.id()));
        }

        tracing::info!(item_id = %item.id(), item_type = item.type_name(), "item added");
        self.items.insert(item.id().clone(), item);
        Ok(())
    }

    /// Remove one item and return it to the caller.
    pub fn remove_item(&mut self, id: &str) -> Option<Item> {
        let removed = self.items.remove(id);
        if let Some(item) = &removed {
            tracing::info!(item_id = %item.id(), "item removed");
        }
        removed
    }

    /// Evict every item older than `years_threshold` relative to `current_year`.
    ///
    /// Returned items are in identifier order. A second call with the same
    /// arguments returns nothing.
    pub fn remove_outdated(&mut self, current_year: i32, years_threshold: i32) -> Vec<Item> {
        let (outdated, kept): (BTreeMap<_, _>, BTreeMap<_, _>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|(_, item)| item.is_outdated(current_year, years_threshold));
        self.items = kept;

        for item in outdated.values() {
            tracing::info!(
                item_id = %item.id(),
                title = item.title(),
                year = item.year(),
                "removing outdated item"
            );
        }
        outdated.into_values().collect()
    }

    /// Sell `quantity` units of item `id` and return the amount charged.
    ///
    /// Checks run in order, and the first failure wins:
    /// 1. `quantity` must be positive (`InvalidInput`)
    /// 2. the item must exist (`NotFound`)
    /// 3. it must be sellable (`NotForSale`)
    /// 4. a physical item must hold `quantity` copies (`InsufficientStock`)
    ///
    /// None of these touch state. Once they pass, stock is reduced and then
    /// the item's delivery runs. A delivery failure is returned as
    /// `Fulfillment` with the stock already reduced; the sale decision stands.
    pub fn buy(
        &mut self,
        id: &str,
        quantity: i32,
        customer_contact: &str,
        shipping_address: &str,
    ) -> DomainResult<Price> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| DomainError::invalid_input("quantity must be positive"))?;

        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(&ItemId::new(id)))?;

        if !item.can_be_sold() {
            tracing::warn!(item_id = %item.id(), "purchase refused: item not for sale");
            return Err(DomainError::not_for_sale(item.id()));
        }

        if !item.has_enough_stock(quantity) {
            let available = item.stock().unwrap_or_default();
            tracing::warn!(item_id = %item.id(), available, requested = quantity, "purchase refused: insufficient stock");
            return Err(DomainError::insufficient_stock(item.id(), available, quantity));
        }

        let total = item
            .price()
            .checked_mul(quantity)
            .ok_or_else(|| DomainError::invalid_input("purchase total overflows"))?;

        item.take_stock(quantity)?;
        item.process_purchase(&self.fulfillment, customer_contact, shipping_address)
            .inspect_err(|e| {
                tracing::error!(item_id = %item.id(), error = %e, "fulfillment failed after stock was reduced");
            })?;

        tracing::info!(
            item_id = %item.id(),
            title = item.title(),
            quantity,
            total = %total,
            "purchase completed"
        );
        Ok(total)
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stored items in identifier order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Snapshot of every item, for display.
    pub fn list_all(&self) -> Vec<ItemView> {
        self.items.values().map(ItemView::from).collect()
    }
}
