//! Non-owning observer lists.
//!
//! [`ObserverRegistry`] holds weak references so that registering an
//! observer never keeps it alive. Entries whose observer has been dropped
//! are not tracked; they are purged lazily at the start of the next
//! [`broadcast`](ObserverRegistry::broadcast).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

/// A list of weakly-held observers.
///
/// `T` is usually a trait object such as `dyn SizeCategoryObserver`.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use std::cell::Cell;
/// use styled_text::ObserverRegistry;
///
/// let registry: ObserverRegistry<Cell<u32>> = ObserverRegistry::new();
/// let counter = Rc::new(Cell::new(0));
/// registry.add(&counter);
///
/// registry.broadcast(|c| c.set(c.get() + 1));
/// assert_eq!(counter.get(), 1);
///
/// drop(counter);
/// registry.broadcast(|c| c.set(c.get() + 1));
/// assert!(registry.is_empty());
/// ```
pub struct ObserverRegistry<T: ?Sized> {
    entries: RefCell<Vec<Weak<T>>>,
}

impl<T: ?Sized> ObserverRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Registers `observer` without taking ownership of it.
    pub fn add(&self, observer: &Rc<T>) {
        self.entries.borrow_mut().push(Rc::downgrade(observer));
    }

    /// Calls `f` for every live observer, in registration order.
    ///
    /// The set of observers visited is fixed when the broadcast starts.
    /// Observers added from inside `f` are kept but not visited; observers
    /// dropped from inside `f` are skipped.
    pub fn broadcast(&self, mut f: impl FnMut(&T)) {
        let snapshot: Vec<Weak<T>> = {
            let mut entries = self.entries.borrow_mut();
            let before = entries.len();
            entries.retain(|entry| entry.strong_count() > 0);
            let purged = before - entries.len();
            if purged > 0 {
                debug!("purged {purged} dropped observer(s)");
            }
            entries.clone()
        };

        for entry in snapshot {
            if let Some(observer) = entry.upgrade() {
                f(&observer);
            }
        }
    }

    /// Number of registered entries, including any not yet purged.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T: ?Sized> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for ObserverRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("entries", &self.len())
            .finish()
    }
}
