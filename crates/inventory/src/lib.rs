//! Inventory domain module.
//!
//! This crate contains the business rules for a bookstore inventory: item
//! variants, stock bookkeeping, purchase dispatch and eviction of outdated
//! items. Delivery side effects go through the injected collaborators in
//! `bookstore-notifications`.

pub mod inventory;
pub mod item;
pub mod view;

pub use inventory::Inventory;
pub use item::{Item, ItemDetails, ItemKind};
pub use view::ItemView;
