//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `camplist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use camplist_core::Catalog;

fn main() {
    println!("camplist_core ping={}", camplist_core::ping());
    println!("camplist_core version={}", camplist_core::core_version());

    let catalog = Catalog::campsite();
    for zone in catalog.zones() {
        println!(
            "zone id={} name={} items={}",
            zone.id,
            zone.name,
            zone.items.len()
        );
    }
    println!("total items={}", catalog.item_count());
}
