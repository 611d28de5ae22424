//! Bookstore walkthrough: seed, list, buy, evict, list.

mod config;

use anyhow::{Context, Result};

use bookstore_core::{ItemId, Price};
use bookstore_inventory::{Inventory, Item, ItemDetails};
use bookstore_notifications::{Fulfillment, TracingNotifier};

use crate::config::DemoConfig;

fn main() -> Result<()> {
    let config = DemoConfig::from_env()?;
    bookstore_observability::tracing::init(config.log_format);
    tracing::info!(?config, "starting bookstore demo");

    let mut store = Inventory::new(Fulfillment::shared(std::sync::Arc::new(TracingNotifier)));
    for item in seed_items() {
        store.add_item(item)?;
    }
    print_inventory("Current Inventory", &store)?;

    let amount = store
        .buy("978-0134685991", 2, "test@test.com", "Cairo, Egypt")
        .context("buying Effective Modern C++")?;
    println!("Amount paid: {amount}");

    let amount = store
        .buy("978-1035024957", 1, "test2@test.com", "New Cairo, Egypt")
        .context("buying Think Faster, Talk Smarter")?;
    println!("Amount paid: {amount}");

    if let Err(err) = store.buy("978-9999999999", 1, "test@test.com", "Cairo, Egypt") {
        println!("Showcase purchase refused: {err}");
    }

    print_inventory("After Purchases", &store)?;

    let removed = store.remove_outdated(config.current_year, config.outdated_years);
    println!(
        "Removed {} item(s) older than {} years (reference year {})",
        removed.len(),
        config.outdated_years,
        config.current_year
    );
    for item in &removed {
        println!("  removed: {} ({})", item.title(), item.year());
    }

    print_inventory("Final Inventory", &store)?;
    Ok(())
}

fn seed_items() -> Vec<Item> {
    let details = |id: &str, title: &str, year, cents, author: &str| ItemDetails {
        id: ItemId::new(id),
        title: title.to_string(),
        year,
        price: Price::from_cents(cents),
        author: author.to_string(),
    };

    vec![
        Item::physical(
            details("978-0134685991", "Effective Modern C++", 2014, 4599, "Scott Meyers"),
            10,
        ),
        Item::physical(
            details("978-0321714114", "C++ Primer", 2012, 5999, "Stanley Lippman"),
            5,
        ),
        Item::digital(
            details("978-1035024957", "Think Faster, Talk Smarter", 2023, 1499, "Matt Abrahams"),
            "PDF",
        ),
        Item::display(details("978-9999999999", "Demo Book", 2023, 0, "Demo Author")),
    ]
}

fn print_inventory(heading: &str, store: &Inventory) -> Result<()> {
    println!("\n--- {heading} ({} item(s)) ---", store.size());
    for view in store.list_all() {
        println!("  {view}");
    }
    tracing::debug!(items = %serde_json::to_string(&store.list_all())?, "inventory snapshot");
    Ok(())
}
