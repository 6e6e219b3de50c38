use camplist_core::db::open_db_in_memory;
use camplist_core::{Catalog, Item, Progress, SqliteStateRepository, StateStore, Zone};
use std::cell::Cell;
use std::rc::Rc;

fn fogon_catalog() -> Catalog {
    Catalog::new(vec![
        Zone {
            id: "fogon".into(),
            name: "Fogón".into(),
            emoji: "🔥".into(),
            color: "#e07b39".into(),
            glow_color: "#ff4500".into(),
            items: vec![Item::new("wood", "Leña"), Item::new("matches", "Fósforos")],
        },
        Zone {
            id: "carpa".into(),
            name: "Carpa".into(),
            emoji: "⛺".into(),
            color: "#6b7c45".into(),
            glow_color: "#9aac55".into(),
            items: vec![Item::new("lona", "Lona")],
        },
    ])
    .unwrap()
}

fn fresh_store() -> StateStore {
    let repo = SqliteStateRepository::new(open_db_in_memory().unwrap());
    StateStore::new(fogon_catalog(), Box::new(repo))
}

#[test]
fn fresh_store_reports_zero_progress() {
    let store = fresh_store();
    assert_eq!(
        store.zone_progress("fogon"),
        Progress {
            checked: 0,
            total: 2
        }
    );
}

#[test]
fn toggle_checks_then_unchecks() {
    let store = fresh_store();

    store.toggle_item("fogon", "wood");
    assert!(store.is_checked("fogon", "wood"));
    assert_eq!(
        store.zone_progress("fogon"),
        Progress {
            checked: 1,
            total: 2
        }
    );

    store.toggle_item("fogon", "wood");
    assert!(!store.is_checked("fogon", "wood"));
    assert_eq!(
        store.zone_progress("fogon"),
        Progress {
            checked: 0,
            total: 2
        }
    );
}

#[test]
fn toggle_unknown_item_counts_under_tolerant_semantics() {
    let store = fresh_store();
    store.toggle_item("fogon", "unknown-item");
    assert_eq!(
        store.zone_progress("fogon"),
        Progress {
            checked: 1,
            total: 2
        }
    );
}

#[test]
fn toggle_unknown_zone_is_silent_noop() {
    let store = Rc::new(fresh_store());
    let notified = Rc::new(Cell::new(0u32));
    {
        let notified = Rc::clone(&notified);
        store.subscribe(Box::new(move |_| notified.set(notified.get() + 1)));
    }

    store.toggle_item("laguna", "bote");

    assert_eq!(notified.get(), 0);
    assert_eq!(store.total_progress().checked, 0);
    let snapshot = store.snapshot();
    assert!(!snapshot.zones.contains_key("laguna"));
}

#[test]
fn night_mode_flips_and_flips_back() {
    let store = fresh_store();
    assert!(!store.night_mode());
    store.toggle_night_mode();
    assert!(store.night_mode());
    store.toggle_night_mode();
    assert!(!store.night_mode());
}

#[test]
fn reset_clears_items_and_active_zone_but_keeps_night_mode() {
    let store = fresh_store();
    store.toggle_item("fogon", "wood");
    store.toggle_item("fogon", "matches");
    store.toggle_item("carpa", "lona");
    store.toggle_night_mode();
    store.set_active_zone(Some("carpa"));

    store.reset();

    assert_eq!(store.total_progress().checked, 0);
    assert_eq!(store.active_zone(), None);
    assert!(store.night_mode());
    // The zone key set survives the reset intact.
    assert_eq!(store.snapshot().zones.len(), 2);
}

#[test]
fn set_active_zone_sets_and_clears() {
    let store = fresh_store();
    store.set_active_zone(Some("fogon"));
    assert_eq!(store.active_zone().as_deref(), Some("fogon"));
    store.set_active_zone(None);
    assert_eq!(store.active_zone(), None);
}

#[test]
fn snapshot_is_detached_from_store() {
    let store = fresh_store();
    let mut snapshot = store.snapshot();
    snapshot
        .zones
        .get_mut("fogon")
        .unwrap()
        .checked
        .insert("wood".into());

    assert!(!store.is_checked("fogon", "wood"));
    assert_eq!(store.total_progress().checked, 0);
}
