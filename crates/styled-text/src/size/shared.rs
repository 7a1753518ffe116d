//! The process-wide resolver.
//!
//! Styles built without an explicit resolver use [`shared`]. The instance
//! lives on the UI thread that first asks for it.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use super::resolver::ScaleResolver;
use super::source::SystemSizeCategorySource;
use super::store::{JsonFileStore, KeyValueStore};

/// Environment variable naming a JSON file that backs the default shared
/// resolver's override.
pub const DEFAULTS_PATH_ENV: &str = "STYLED_TEXT_DEFAULTS_PATH";

struct SharedState {
    resolver: Rc<ScaleResolver>,
    // Only the default instance has one; installed resolvers bring their own source.
    system: Option<Rc<SystemSizeCategorySource>>,
}

thread_local! {
    static SHARED: RefCell<Option<SharedState>> = const { RefCell::new(None) };
}

/// Returns the shared resolver, creating it on first use.
///
/// The default instance reads the system detector; call [`refresh_shared`]
/// when the platform reports a new preference so its observers hear about
/// it. The override is persisted to the JSON file named by
/// [`DEFAULTS_PATH_ENV`] when that variable is set, and kept in memory
/// (lost at exit) otherwise. Use [`install_shared`] to supply a configured
/// resolver instead.
pub fn shared() -> Rc<ScaleResolver> {
    SHARED.with(|slot| {
        let mut slot = slot.borrow_mut();
        let state = slot.get_or_insert_with(build_default);
        Rc::clone(&state.resolver)
    })
}

fn build_default() -> SharedState {
    debug!("creating shared scale resolver");
    let system = Rc::new(SystemSizeCategorySource::new());
    let mut builder = ScaleResolver::builder().source(system.clone());
    if let Some(store) = default_store() {
        builder = builder.store(store);
    }
    SharedState {
        resolver: builder.build(),
        system: Some(system),
    }
}

fn default_store() -> Option<Rc<dyn KeyValueStore>> {
    let path = std::env::var_os(DEFAULTS_PATH_ENV)?;
    match JsonFileStore::open(&path) {
        Ok(store) => Some(Rc::new(store)),
        Err(err) => {
            warn!("keeping size category override in memory: {err}");
            None
        }
    }
}

/// Re-reads the system detector for the default shared resolver.
///
/// Observers of [`shared`] are notified if the category changed. Does
/// nothing before the shared resolver exists or after [`install_shared`]
/// replaced it.
pub fn refresh_shared() {
    let system = SHARED.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|state| state.system.clone())
    });
    // Observers may call back into `shared`, so the slot is released first.
    if let Some(system) = system {
        system.refresh();
    }
}

/// Replaces the shared resolver, returning the previous one.
///
/// Styles already bound to the previous resolver keep using it.
pub fn install_shared(resolver: Rc<ScaleResolver>) -> Option<Rc<ScaleResolver>> {
    let state = SharedState {
        resolver,
        system: None,
    };
    SHARED
        .with(|slot| slot.borrow_mut().replace(state))
        .map(|previous| previous.resolver)
}

/// Drops the shared resolver so the next [`shared`] call builds a new one.
pub fn reset_shared() {
    let previous = SHARED.with(|slot| slot.borrow_mut().take());
    drop(previous);
}
