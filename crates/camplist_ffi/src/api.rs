//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level checklist functions to the UI host.
//! - Keep error semantics simple for UI integration: envelope structs,
//!   never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each call opens the configured store, performs one operation, and
//!   returns; no store state is cached between calls. Persistence makes the
//!   next call observe this call's mutations.

use camplist_core::db::open_db;
use camplist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Catalog, SqliteStateRepository, StateStore,
};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const STATE_DB_FILE_NAME: &str = "camplist_state.sqlite3";
static STATE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FFI smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Configures the directory where the checklist state database lives.
///
/// Input semantics:
/// - `dir`: directory path; the database file name is appended internally.
///
/// # FFI contract
/// - Sync call, non-blocking; resolves the path once per process.
/// - Safe to call repeatedly with the same `dir` (idempotent).
/// - Reconfiguration attempts with a different directory return an error.
/// - Calls after the path was already resolved from `CAMPLIST_DB_PATH` or
///   the temp-dir default are rejected the same way.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_state_dir(dir: String) -> String {
    match set_state_dir(dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

fn set_state_dir(dir: &str) -> Result<(), String> {
    let trimmed = dir.trim();
    if trimmed.is_empty() {
        return Err("state dir cannot be empty".to_string());
    }

    let requested = Path::new(trimmed).join(STATE_DB_FILE_NAME);
    let active = STATE_DB_PATH.get_or_init(|| requested.clone());
    if *active != requested {
        return Err(format!(
            "state database already configured at `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        ));
    }

    Ok(())
}

/// Per-zone slice of a checklist snapshot, including the display metadata
/// the map and sidebar renderers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneOverview {
    pub zone_id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
    pub glow_color: String,
    /// Item ids currently checked in this zone, sorted.
    pub checked_items: Vec<String>,
    pub checked: u32,
    pub total: u32,
}

/// Full checklist snapshot envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistSnapshotResponse {
    pub ok: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
    pub night_mode: bool,
    pub zones: Vec<ZoneOverview>,
    pub checked_total: u32,
    pub item_total: u32,
}

impl ChecklistSnapshotResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            night_mode: false,
            zones: Vec::new(),
            checked_total: 0,
            item_total: 0,
        }
    }
}

/// Generic action response envelope for checklist mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistActionResponse {
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ChecklistActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Returns the current checklist snapshot with per-zone progress.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; storage failures degrade to default (empty) state per
///   core policy, DB-open failures return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn checklist_snapshot() -> ChecklistSnapshotResponse {
    let store = match open_store() {
        Ok(store) => store,
        Err(err) => return ChecklistSnapshotResponse::failure(err),
    };

    let state = store.snapshot();
    let zones = store
        .catalog()
        .zones()
        .iter()
        .map(|zone| {
            let progress = store.zone_progress(&zone.id);
            let checked_items = state
                .zones
                .get(&zone.id)
                .map(|zs| zs.checked.iter().cloned().collect())
                .unwrap_or_default();
            ZoneOverview {
                zone_id: zone.id.clone(),
                name: zone.name.clone(),
                emoji: zone.emoji.clone(),
                color: zone.color.clone(),
                glow_color: zone.glow_color.clone(),
                checked_items,
                checked: progress.checked as u32,
                total: progress.total as u32,
            }
        })
        .collect();
    let totals = store.total_progress();

    ChecklistSnapshotResponse {
        ok: true,
        message: String::new(),
        night_mode: state.night_mode,
        zones,
        checked_total: totals.checked as u32,
        item_total: totals.total as u32,
    }
}

/// Flips one item's checked state and persists the result.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown zone ids succeed as a no-op, matching core semantics.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_item(zone_id: String, item_id: String) -> ChecklistActionResponse {
    match open_store() {
        Ok(store) => {
            store.toggle_item(&zone_id, &item_id);
            let progress = store.zone_progress(&zone_id);
            ChecklistActionResponse::success(format!(
                "Zone {zone_id}: {}/{} packed.",
                progress.checked, progress.total
            ))
        }
        Err(err) => ChecklistActionResponse::failure(format!("toggle_item failed: {err}")),
    }
}

/// Flips the persisted night-mode flag.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_night_mode() -> ChecklistActionResponse {
    match open_store() {
        Ok(store) => {
            store.toggle_night_mode();
            let mode = if store.night_mode() { "night" } else { "day" };
            ChecklistActionResponse::success(format!("Display mode is now {mode}."))
        }
        Err(err) => ChecklistActionResponse::failure(format!("toggle_night_mode failed: {err}")),
    }
}

/// Clears every checked item. Night mode is preserved.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_checklist() -> ChecklistActionResponse {
    match open_store() {
        Ok(store) => {
            store.reset();
            ChecklistActionResponse::success("Checklist reset.")
        }
        Err(err) => ChecklistActionResponse::failure(format!("reset_checklist failed: {err}")),
    }
}

fn resolve_state_db_path() -> PathBuf {
    STATE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("CAMPLIST_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STATE_DB_FILE_NAME)
        })
        .clone()
}

fn open_store() -> Result<StateStore, String> {
    let db_path = resolve_state_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("state DB open failed: {err}"))?;
    let repo = SqliteStateRepository::new(conn);
    Ok(StateStore::new(Catalog::campsite(), Box::new(repo)))
}
