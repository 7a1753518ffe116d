//! Dynamic type resolution.
//!
//! [`ScaleResolver`] decides which [`SizeCategory`] is in effect, turns it
//! into a font size, and tells registered observers when it changes.
//!
//! # Effective category
//!
//! 1. The override, if one is set (see [`ScaleResolver::set_override`]).
//! 2. Otherwise the live value of the [`SizeCategorySource`].
//! 3. Otherwise [`SizeCategory::Large`].
//!
//! The override is persisted in a [`KeyValueStore`] under
//! [`ResolverConfig::defaults_key`] and read back when the resolver is built.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::category::SizeCategory;
use super::scale::ScalingMode;
use super::source::{SizeCategorySource, Subscription};
use super::store::{KeyValueStore, MemoryStore};
use crate::observer::ObserverRegistry;
use crate::style::Font;

/// Key under which the override is persisted unless configured otherwise.
pub const DEFAULT_OVERRIDE_KEY: &str = "StyledTextOverrideContentSize";

/// Receives size category changes from a [`ScaleResolver`].
pub trait SizeCategoryObserver {
    fn category_did_change(&self, resolver: &ScaleResolver, category: SizeCategory);
}

/// Settings for a [`ScaleResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Store key holding the persisted override.
    pub defaults_key: String,
    /// Read the persisted override when the resolver is built.
    pub load_saved_override: bool,
    /// Skip source notifications that do not change the effective category.
    pub suppress_duplicate_broadcasts: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            defaults_key: DEFAULT_OVERRIDE_KEY.to_string(),
            load_saved_override: true,
            suppress_duplicate_broadcasts: true,
        }
    }
}

/// Builder for [`ScaleResolver`].
#[derive(Default)]
pub struct ScaleResolverBuilder {
    config: ResolverConfig,
    store: Option<Rc<dyn KeyValueStore>>,
    source: Option<Rc<dyn SizeCategorySource>>,
}

impl ScaleResolverBuilder {
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Store for the override. Defaults to a fresh [`MemoryStore`].
    pub fn store(mut self, store: Rc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Live category source. Without one the resolver reports
    /// [`SizeCategory::Large`] unless overridden.
    pub fn source(mut self, source: Rc<dyn SizeCategorySource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> Rc<ScaleResolver> {
        let ScaleResolverBuilder {
            config,
            store,
            source,
        } = self;
        let store = store.unwrap_or_else(|| Rc::new(MemoryStore::new()));

        let override_category = if config.load_saved_override {
            load_override(store.as_ref(), &config.defaults_key)
        } else {
            None
        };

        Rc::new_cyclic(|weak: &Weak<ScaleResolver>| {
            let subscription = source.as_ref().map(|source| {
                let weak = weak.clone();
                source.on_change(Box::new(move |category| {
                    if let Some(resolver) = weak.upgrade() {
                        resolver.source_did_change(category);
                    }
                }))
            });
            let initial = override_category
                .or_else(|| source.as_ref().map(|s| s.current()))
                .unwrap_or_default();

            ScaleResolver {
                config,
                store,
                source,
                override_category: Cell::new(override_category),
                last_broadcast: Cell::new(initial),
                observers: ObserverRegistry::new(),
                _subscription: subscription,
            }
        })
    }
}

fn load_override(store: &dyn KeyValueStore, key: &str) -> Option<SizeCategory> {
    let saved = store.get(key)?;
    match saved.parse() {
        Ok(category) => {
            debug!("loaded size category override {category}");
            Some(category)
        }
        Err(err) => {
            warn!("ignoring persisted override: {err}");
            None
        }
    }
}

/// Resolves font sizes for the preferred size category.
///
/// Resolvers are shared by reference: many styles may point at one
/// resolver. Build one with [`ScaleResolver::builder`] or use the
/// process-wide [`shared`](crate::size::shared) instance.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use styled_text::{Font, ManualSizeCategorySource, ScaleResolver, ScalingMode, SizeCategory};
///
/// let source = Rc::new(ManualSizeCategorySource::new(SizeCategory::ExtraLarge2));
/// let resolver = ScaleResolver::builder().source(source).build();
///
/// let font = resolver.scaled_font(&Font::system(12.0), ScalingMode::ScaleIncludingAccessibility);
/// assert_eq!(font.point_size(), 15.0);
/// ```
pub struct ScaleResolver {
    config: ResolverConfig,
    store: Rc<dyn KeyValueStore>,
    source: Option<Rc<dyn SizeCategorySource>>,
    override_category: Cell<Option<SizeCategory>>,
    last_broadcast: Cell<SizeCategory>,
    observers: ObserverRegistry<dyn SizeCategoryObserver>,
    // Released with the resolver, which unsubscribes from the source.
    _subscription: Option<Subscription>,
}

impl ScaleResolver {
    pub fn builder() -> ScaleResolverBuilder {
        ScaleResolverBuilder::default()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The category currently in effect.
    pub fn effective_category(&self) -> SizeCategory {
        self.override_category
            .get()
            .or_else(|| self.source.as_ref().map(|source| source.current()))
            .unwrap_or_default()
    }

    pub fn override_category(&self) -> Option<SizeCategory> {
        self.override_category.get()
    }

    /// Sets or clears the override, persists it, and notifies observers.
    ///
    /// Observers are notified even if the effective category is unchanged.
    pub fn set_override(&self, category: Option<SizeCategory>) {
        self.override_category.set(category);
        self.store.set(
            &self.config.defaults_key,
            category.map(SizeCategory::as_str),
        );
        match category {
            Some(category) => debug!("size category override set to {category}"),
            None => debug!("size category override cleared"),
        }
        self.broadcast(self.effective_category());
    }

    /// The factor `mode` applies for the effective category.
    pub fn scale_factor(&self, mode: ScalingMode) -> f64 {
        mode.factor_for(self.effective_category())
    }

    /// Resizes `font` for the effective category under `mode`.
    ///
    /// The result is rounded to a whole point size so repeated resolutions
    /// are stable.
    pub fn scaled_font(&self, font: &Font, mode: ScalingMode) -> Font {
        if mode == ScalingMode::NoScaling {
            return font.clone();
        }
        let factor = self.scale_factor(mode);
        let size = (font.point_size() * factor).round();
        trace!(
            "scaled {} {}pt by {factor} to {size}pt",
            font.family(),
            font.point_size()
        );
        font.with_size(size)
    }

    /// Registers `observer` without keeping it alive.
    pub fn add_observer<O: SizeCategoryObserver + 'static>(&self, observer: &Rc<O>) {
        let observer: Rc<dyn SizeCategoryObserver> = observer.clone();
        self.observers.add(&observer);
    }

    /// Number of registered observers, including dropped ones not yet purged.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn source_did_change(&self, category: SizeCategory) {
        if let Some(overridden) = self.override_category.get() {
            trace!("ignoring source change to {category}; override {overridden} in effect");
            return;
        }
        let effective = self.effective_category();
        if self.config.suppress_duplicate_broadcasts && effective == self.last_broadcast.get() {
            trace!("size category still {effective}; not broadcasting");
            return;
        }
        self.broadcast(effective);
    }

    fn broadcast(&self, category: SizeCategory) {
        self.last_broadcast.set(category);
        debug!(
            "broadcasting size category {category} to {} observer(s)",
            self.observers.len()
        );
        self.observers
            .broadcast(|observer| observer.category_did_change(self, category));
    }
}

impl std::fmt::Debug for ScaleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaleResolver")
            .field("config", &self.config)
            .field("override_category", &self.override_category.get())
            .field("has_source", &self.source.is_some())
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::ManualSizeCategorySource;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<SizeCategory>>,
    }

    impl SizeCategoryObserver for Recorder {
        fn category_did_change(&self, resolver: &ScaleResolver, category: SizeCategory) {
            assert_eq!(resolver.effective_category(), category);
            self.seen.borrow_mut().push(category);
        }
    }

    fn fixture(
        initial: SizeCategory,
    ) -> (
        Rc<ManualSizeCategorySource>,
        Rc<MemoryStore>,
        Rc<ScaleResolver>,
    ) {
        let source = Rc::new(ManualSizeCategorySource::new(initial));
        let store = Rc::new(MemoryStore::new());
        let resolver = ScaleResolver::builder()
            .source(source.clone())
            .store(store.clone())
            .build();
        (source, store, resolver)
    }

    #[test]
    fn test_without_source_falls_back_to_large() {
        let resolver = ScaleResolver::builder().build();
        assert_eq!(resolver.effective_category(), SizeCategory::Large);
        assert_eq!(
            resolver.scale_factor(ScalingMode::ScaleIncludingAccessibility),
            1.0
        );
    }

    #[test]
    fn test_effective_category_follows_source() {
        let (source, _, resolver) = fixture(SizeCategory::Small);
        assert_eq!(resolver.effective_category(), SizeCategory::Small);
        source.set(SizeCategory::Medium);
        assert_eq!(resolver.effective_category(), SizeCategory::Medium);
    }

    #[test]
    fn test_override_wins_and_is_persisted() {
        let (_, store, resolver) = fixture(SizeCategory::Small);
        resolver.set_override(Some(SizeCategory::AccessibilityLarge));

        assert_eq!(
            resolver.effective_category(),
            SizeCategory::AccessibilityLarge
        );
        assert_eq!(
            store.get(DEFAULT_OVERRIDE_KEY).as_deref(),
            Some("accessibility-large")
        );

        resolver.set_override(None);
        assert_eq!(resolver.effective_category(), SizeCategory::Small);
        assert_eq!(store.get(DEFAULT_OVERRIDE_KEY), None);
    }

    #[test]
    fn test_override_loaded_at_build() {
        let store = Rc::new(MemoryStore::new());
        store.set(DEFAULT_OVERRIDE_KEY, Some("extra-small"));
        let resolver = ScaleResolver::builder().store(store).build();
        assert_eq!(resolver.override_category(), Some(SizeCategory::ExtraSmall));
    }

    #[test]
    fn test_invalid_persisted_override_is_ignored() {
        let store = Rc::new(MemoryStore::new());
        store.set(DEFAULT_OVERRIDE_KEY, Some("UICTContentSizeCategoryXXL"));
        let source = Rc::new(ManualSizeCategorySource::new(SizeCategory::Medium));
        let resolver = ScaleResolver::builder().store(store).source(source).build();
        assert_eq!(resolver.override_category(), None);
        assert_eq!(resolver.effective_category(), SizeCategory::Medium);
    }

    #[test]
    fn test_load_saved_override_disabled() {
        let store = Rc::new(MemoryStore::new());
        store.set("custom", Some("small"));
        let resolver = ScaleResolver::builder()
            .store(store.clone())
            .config(ResolverConfig {
                defaults_key: "custom".into(),
                load_saved_override: false,
                ..ResolverConfig::default()
            })
            .build();
        assert_eq!(resolver.override_category(), None);

        resolver.set_override(Some(SizeCategory::Medium));
        assert_eq!(store.get("custom").as_deref(), Some("medium"));
    }

    #[test]
    fn test_set_override_broadcasts() {
        let (_, _, resolver) = fixture(SizeCategory::Large);
        let recorder = Rc::new(Recorder::default());
        resolver.add_observer(&recorder);

        resolver.set_override(Some(SizeCategory::ExtraLarge));
        resolver.set_override(Some(SizeCategory::ExtraLarge));
        assert_eq!(
            *recorder.seen.borrow(),
            vec![SizeCategory::ExtraLarge, SizeCategory::ExtraLarge]
        );
    }

    #[test]
    fn test_source_change_broadcasts_without_override() {
        let (source, _, resolver) = fixture(SizeCategory::Large);
        let recorder = Rc::new(Recorder::default());
        resolver.add_observer(&recorder);

        source.set(SizeCategory::ExtraLarge3);
        assert_eq!(*recorder.seen.borrow(), vec![SizeCategory::ExtraLarge3]);
    }

    #[test]
    fn test_source_change_ignored_while_overridden() {
        let (source, _, resolver) = fixture(SizeCategory::Large);
        resolver.set_override(Some(SizeCategory::Small));
        let recorder = Rc::new(Recorder::default());
        resolver.add_observer(&recorder);

        source.set(SizeCategory::ExtraLarge);
        assert!(recorder.seen.borrow().is_empty());
        assert_eq!(resolver.effective_category(), SizeCategory::Small);
    }

    /// Notifies on every push, even when the value is unchanged.
    #[derive(Default)]
    struct NoisySource {
        current: Cell<SizeCategory>,
        callbacks: RefCell<Vec<Box<dyn Fn(SizeCategory)>>>,
    }

    impl NoisySource {
        fn push(&self, category: SizeCategory) {
            self.current.set(category);
            for callback in self.callbacks.borrow().iter() {
                callback(category);
            }
        }
    }

    impl SizeCategorySource for NoisySource {
        fn current(&self) -> SizeCategory {
            self.current.get()
        }

        fn on_change(&self, callback: Box<dyn Fn(SizeCategory)>) -> Subscription {
            self.callbacks.borrow_mut().push(callback);
            Subscription::detached()
        }
    }

    #[test]
    fn test_duplicate_source_broadcast_suppressed() {
        let source = Rc::new(NoisySource::default());
        let resolver = ScaleResolver::builder().source(source.clone()).build();
        let recorder = Rc::new(Recorder::default());
        resolver.add_observer(&recorder);

        source.push(SizeCategory::Large);
        source.push(SizeCategory::Small);
        source.push(SizeCategory::Small);
        source.push(SizeCategory::Large);

        assert_eq!(
            *recorder.seen.borrow(),
            vec![SizeCategory::Small, SizeCategory::Large]
        );
    }

    #[test]
    fn test_duplicate_source_broadcast_allowed_when_configured() {
        let source = Rc::new(NoisySource::default());
        let resolver = ScaleResolver::builder()
            .source(source.clone())
            .config(ResolverConfig {
                suppress_duplicate_broadcasts: false,
                ..ResolverConfig::default()
            })
            .build();
        let recorder = Rc::new(Recorder::default());
        resolver.add_observer(&recorder);

        source.push(SizeCategory::Large);
        source.push(SizeCategory::Large);

        assert_eq!(
            *recorder.seen.borrow(),
            vec![SizeCategory::Large, SizeCategory::Large]
        );
    }

    #[test]
    fn test_scaled_font_end_to_end() {
        let (_, _, resolver) = fixture(SizeCategory::ExtraLarge2);
        let font = resolver.scaled_font(
            &Font::system(12.0),
            ScalingMode::ScaleIncludingAccessibility,
        );
        assert_eq!(font.point_size(), 15.0);
    }

    #[test]
    fn test_scaled_font_clamps_accessibility() {
        let (_, _, resolver) = fixture(SizeCategory::AccessibilityLarge);
        assert_eq!(resolver.scale_factor(ScalingMode::ScaleStandardOnly), 1.353);
        let font = resolver.scaled_font(&Font::system(20.0), ScalingMode::ScaleStandardOnly);
        assert_eq!(font.point_size(), 27.0);
        let font = resolver.scaled_font(
            &Font::system(20.0),
            ScalingMode::ScaleIncludingAccessibility,
        );
        assert_eq!(font.point_size(), 39.0);
    }

    #[test]
    fn test_no_scaling_is_idempotent() {
        let (_, _, resolver) = fixture(SizeCategory::AccessibilityExtraLarge3);
        let font = Font::system(13.0);
        let once = resolver.scaled_font(&font, ScalingMode::NoScaling);
        let twice = resolver.scaled_font(&once, ScalingMode::NoScaling);
        assert_eq!(once, font);
        assert_eq!(twice.point_size(), once.point_size());
    }

    #[test]
    fn test_dropping_resolver_unsubscribes() {
        let (source, _, resolver) = fixture(SizeCategory::Large);
        assert_eq!(source.subscriber_count(), 1);
        drop(resolver);
        assert_eq!(source.subscriber_count(), 0);
        source.set(SizeCategory::Small);
    }

    #[test]
    fn test_dropped_observer_not_notified() {
        let (source, _, resolver) = fixture(SizeCategory::Large);
        let recorder = Rc::new(Recorder::default());
        resolver.add_observer(&recorder);
        drop(recorder);

        source.set(SizeCategory::Small);
        assert_eq!(resolver.observer_count(), 0);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{ "suppress_duplicate_broadcasts": false }"#).unwrap();
        assert_eq!(config.defaults_key, DEFAULT_OVERRIDE_KEY);
        assert!(config.load_saved_override);
        assert!(!config.suppress_duplicate_broadcasts);
    }
}
