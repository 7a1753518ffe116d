//! Sources of the live preferred size category.
//!
//! A [`SizeCategorySource`] reports the category the host environment
//! currently prefers and notifies subscribers when it changes. Two sources
//! ship with the crate:
//!
//! - [`ManualSizeCategorySource`]: the host pushes categories explicitly.
//! - [`SystemSizeCategorySource`]: reads the process-wide detector installed
//!   with [`set_size_category_detector`].
//!
//! Notifications are delivered synchronously on the calling thread. Hosts
//! whose platform reports changes elsewhere must redispatch onto the UI
//! thread before calling [`ManualSizeCategorySource::set`] or
//! [`SystemSizeCategorySource::refresh`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::{Mutex, PoisonError};

use log::debug;
use once_cell::sync::Lazy;

use super::category::SizeCategory;

/// Environment variable read by the built-in detector.
pub const SIZE_CATEGORY_ENV: &str = "STYLED_TEXT_SIZE_CATEGORY";

/// Provides the preferred size category and change notifications.
pub trait SizeCategorySource {
    /// The category preferred right now.
    fn current(&self) -> SizeCategory;

    /// Registers `callback` to run whenever the category changes.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped or cancelled.
    fn on_change(&self, callback: Box<dyn Fn(SizeCategory)>) -> Subscription;
}

/// Handle to a registered change callback.
///
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription that runs `cancel` when released.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Unsubscribes now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type ChangeCallback = Rc<dyn Fn(SizeCategory)>;

#[derive(Default)]
struct ListenerSlots {
    next_id: u64,
    entries: Vec<(u64, ChangeCallback)>,
}

/// Callback list shared by the built-in sources.
#[derive(Default)]
struct ChangeListeners {
    slots: Rc<RefCell<ListenerSlots>>,
}

impl ChangeListeners {
    fn subscribe(&self, callback: Box<dyn Fn(SizeCategory)>) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, Rc::from(callback)));
            id
        };
        let slots: Weak<RefCell<ListenerSlots>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    fn notify(&self, category: SizeCategory) {
        // Callbacks may subscribe or unsubscribe while running.
        let snapshot: Vec<ChangeCallback> = self
            .slots
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            callback(category);
        }
    }

    fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }
}

/// A source driven explicitly by the host.
///
/// # Example
///
/// ```rust
/// use styled_text::{ManualSizeCategorySource, SizeCategory, SizeCategorySource};
///
/// let source = ManualSizeCategorySource::new(SizeCategory::Large);
/// source.set(SizeCategory::ExtraLarge);
/// assert_eq!(source.current(), SizeCategory::ExtraLarge);
/// ```
#[derive(Default)]
pub struct ManualSizeCategorySource {
    current: Cell<SizeCategory>,
    listeners: ChangeListeners,
}

impl ManualSizeCategorySource {
    /// Creates a source reporting `initial`.
    pub fn new(initial: SizeCategory) -> Self {
        Self {
            current: Cell::new(initial),
            listeners: ChangeListeners::default(),
        }
    }

    /// Updates the category and notifies subscribers if it changed.
    pub fn set(&self, category: SizeCategory) {
        if self.current.replace(category) != category {
            debug!("size category source changed to {category}");
            self.listeners.notify(category);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl SizeCategorySource for ManualSizeCategorySource {
    fn current(&self) -> SizeCategory {
        self.current.get()
    }

    fn on_change(&self, callback: Box<dyn Fn(SizeCategory)>) -> Subscription {
        self.listeners.subscribe(callback)
    }
}

type SizeCategoryDetector = fn() -> SizeCategory;

static SIZE_CATEGORY_DETECTOR: Lazy<Mutex<SizeCategoryDetector>> =
    Lazy::new(|| Mutex::new(env_size_category_detector));

/// Overrides the detector used to determine the system's preferred size category.
///
/// This is useful for testing or when the host reads the preference from
/// its own platform API.
pub fn set_size_category_detector(detector: SizeCategoryDetector) {
    let mut guard = SIZE_CATEGORY_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the built-in detector.
pub fn reset_size_category_detector() {
    set_size_category_detector(env_size_category_detector);
}

pub(crate) fn detect_size_category() -> SizeCategory {
    let detector = SIZE_CATEGORY_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn env_size_category_detector() -> SizeCategory {
    std::env::var(SIZE_CATEGORY_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// A source backed by the process-wide detector.
///
/// The detector is polled on [`current`](SizeCategorySource::current).
/// Call [`refresh`](Self::refresh) when the host learns the preference may
/// have changed; subscribers are notified only on an actual change.
/// The default shared resolver's source is refreshed with
/// [`refresh_shared`](crate::size::refresh_shared).
pub struct SystemSizeCategorySource {
    last_seen: Cell<SizeCategory>,
    listeners: ChangeListeners,
}

impl SystemSizeCategorySource {
    pub fn new() -> Self {
        Self {
            last_seen: Cell::new(detect_size_category()),
            listeners: ChangeListeners::default(),
        }
    }

    /// Re-reads the detector and notifies subscribers if the category changed.
    pub fn refresh(&self) {
        let category = detect_size_category();
        if self.last_seen.replace(category) != category {
            debug!("system size category changed to {category}");
            self.listeners.notify(category);
        }
    }
}

impl Default for SystemSizeCategorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeCategorySource for SystemSizeCategorySource {
    fn current(&self) -> SizeCategory {
        detect_size_category()
    }

    fn on_change(&self, callback: Box<dyn Fn(SizeCategory)>) -> Subscription {
        self.listeners.subscribe(callback)
    }
}
