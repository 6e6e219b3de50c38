//! Observable checklist state store.
//!
//! # Responsibility
//! - Own the single mutable `AppState` and mediate every mutation.
//! - Persist a snapshot after each state-mutating operation and notify
//!   subscribed listeners synchronously, in registration order.
//!
//! # Invariants
//! - Mutations fully update in-memory state, then persist, then notify,
//!   before returning to the caller.
//! - Persistence failures never surface: a missing, corrupt, or unwritable
//!   blob degrades to in-memory-only operation.
//! - The listener list is snapshotted before each notification pass, so
//!   subscribing or unsubscribing from inside a listener never invalidates
//!   the pass. A listener added during a pass does not fire in that pass.
//! - Re-entrant mutations from inside a listener are allowed; the listener
//!   currently running is skipped in the nested pass.

use crate::model::catalog::Catalog;
use crate::model::state::{AppState, PersistedState};
use crate::progress::{self, Progress};
use crate::repo::state_repo::StateRepository;
use log::{debug, info, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked with a state snapshot after every change.
pub type StateListener = Box<dyn FnMut(&AppState)>;

/// Handle returned by `subscribe`, accepted by `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct ListenerSlot {
    id: ListenerId,
    // Rc so a notification pass can hold the slot while the registry is
    // mutated underneath it; RefCell so nested passes can detect and skip
    // a listener that is already running.
    callback: Rc<RefCell<StateListener>>,
}

/// Single source of truth for checklist state.
///
/// Explicitly constructed and passed by reference; there is no process
/// global. All methods take `&self`, so consumers can share the store via
/// `Rc` and mutate it from inside their own listeners.
pub struct StateStore {
    catalog: Catalog,
    repo: Box<dyn StateRepository>,
    state: RefCell<AppState>,
    listeners: RefCell<Vec<ListenerSlot>>,
    next_listener: Cell<u64>,
}

impl StateStore {
    /// Builds the default state for `catalog`, then silently merges any
    /// previously persisted snapshot from `repo`.
    ///
    /// Load failures (no blob, unreadable storage, malformed JSON) are
    /// logged and ignored; initialization never fails.
    pub fn new(catalog: Catalog, repo: Box<dyn StateRepository>) -> Self {
        let mut state = AppState::initial(&catalog);
        match repo.load_blob() {
            Ok(Some(blob)) => match serde_json::from_str::<PersistedState>(&blob) {
                Ok(persisted) => {
                    persisted.merge_into(&mut state);
                    info!("event=state_load module=store status=ok source=persisted");
                }
                Err(err) => {
                    warn!("event=state_load module=store status=fallback reason=malformed_blob error={err}");
                }
            },
            Ok(None) => {
                info!("event=state_load module=store status=ok source=default");
            }
            Err(err) => {
                warn!("event=state_load module=store status=fallback reason=storage_error error={err}");
            }
        }

        Self {
            catalog,
            repo,
            state: RefCell::new(state),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    /// The catalog this store was constructed with.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Cloned snapshot of the current state. Mutating the returned value
    /// has no effect on the store.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Whether night mode is currently active.
    pub fn night_mode(&self) -> bool {
        self.state.borrow().night_mode
    }

    /// The zone whose detail panel is open, if any.
    pub fn active_zone(&self) -> Option<String> {
        self.state.borrow().active_zone.clone()
    }

    /// Whether `item_id` is checked in `zone_id`. Unknown zones read as
    /// unchecked.
    pub fn is_checked(&self, zone_id: &str, item_id: &str) -> bool {
        self.state
            .borrow()
            .zones
            .get(zone_id)
            .is_some_and(|zone| zone.checked.contains(item_id))
    }

    /// Registers `listener` for every subsequent state change.
    ///
    /// Listeners fire in registration order. The returned id stays valid
    /// until passed to `unsubscribe`.
    pub fn subscribe(&self, listener: StateListener) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push(ListenerSlot {
            id,
            callback: Rc::new(RefCell::new(listener)),
        });
        id
    }

    /// Removes a listener. Unknown or already-removed ids are a no-op, so
    /// calling this from inside a notification pass is always safe.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|slot| slot.id != id);
    }

    /// Sets or clears the active zone. Transient UI state: notifies but
    /// never persists.
    pub fn set_active_zone(&self, zone_id: Option<&str>) {
        self.state.borrow_mut().active_zone = zone_id.map(str::to_owned);
        self.notify();
    }

    /// Flips `item_id` membership in the zone's checked set.
    ///
    /// Unknown zones are a silent no-op without notification. Item ids are
    /// not validated against the catalog (tolerant write); progress queries
    /// count whatever is in the set.
    pub fn toggle_item(&self, zone_id: &str, item_id: &str) {
        {
            let mut state = self.state.borrow_mut();
            let Some(zone) = state.zones.get_mut(zone_id) else {
                debug!("event=toggle_item module=store status=skip reason=unknown_zone zone_id={zone_id}");
                return;
            };
            if !zone.checked.remove(item_id) {
                zone.checked.insert(item_id.to_owned());
            }
        }
        self.persist();
        self.notify();
    }

    /// Flips the global night-mode flag.
    pub fn toggle_night_mode(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.night_mode = !state.night_mode;
        }
        self.persist();
        self.notify();
    }

    /// Clears every zone's checked set and the active zone. Night mode is
    /// left untouched.
    pub fn reset(&self) {
        {
            let mut state = self.state.borrow_mut();
            for zone in state.zones.values_mut() {
                zone.checked.clear();
            }
            state.active_zone = None;
        }
        self.persist();
        self.notify();
    }

    /// Progress for one zone. Unknown zones yield `0/0`.
    pub fn zone_progress(&self, zone_id: &str) -> Progress {
        progress::zone_progress(&self.catalog, &self.state.borrow(), zone_id)
    }

    /// Progress summed across the whole catalog.
    pub fn total_progress(&self) -> Progress {
        progress::total_progress(&self.catalog, &self.state.borrow())
    }

    fn persist(&self) {
        let snapshot = PersistedState::capture(&self.state.borrow());
        match serde_json::to_string(&snapshot) {
            Ok(blob) => {
                if let Err(err) = self.repo.save_blob(&blob) {
                    warn!("event=state_save module=store status=error error={err}");
                }
            }
            Err(err) => {
                warn!("event=state_save module=store status=error reason=serialize error={err}");
            }
        }
    }

    fn notify(&self) {
        // Clone the state out of the RefCell before calling anyone, so a
        // listener can re-enter the store without hitting an open borrow.
        let snapshot = self.state.borrow().clone();
        let pass: Vec<Rc<RefCell<StateListener>>> = self
            .listeners
            .borrow()
            .iter()
            .map(|slot| Rc::clone(&slot.callback))
            .collect();
        for callback in pass {
            // A listener that is mid-call (re-entrant notification) is
            // skipped in the nested pass.
            if let Ok(mut listener) = callback.try_borrow_mut() {
                (*listener)(&snapshot);
            }
        }
    }
}
