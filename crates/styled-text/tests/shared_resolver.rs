//! Tests for the shared resolver and override persistence.

use std::cell::RefCell;
use std::rc::Rc;

use serial_test::serial;
use styled_text::{
    install_shared, refresh_shared, reset_shared, reset_size_category_detector,
    set_size_category_detector, shared, Color, Font, JsonFileStore, KeyValueStore,
    ManualSizeCategorySource, ResolverConfig, ScaleResolver, ScalingMode, SizeCategory,
    SizeCategoryObserver, StyleDescriptor, StyledLabel,
};

#[derive(Default)]
struct Recorder {
    seen: RefCell<Vec<SizeCategory>>,
}

impl SizeCategoryObserver for Recorder {
    fn category_did_change(&self, _resolver: &ScaleResolver, category: SizeCategory) {
        self.seen.borrow_mut().push(category);
    }
}

#[test]
#[serial]
fn test_system_change_reaches_shared_observers() {
    reset_shared();
    set_size_category_detector(|| SizeCategory::Large);

    let style = StyleDescriptor::builder(Font::system(12.0), Color::BLACK)
        .scaling_mode(ScalingMode::ScaleIncludingAccessibility)
        .build();
    let label = Rc::new(StyledLabel::new(style));
    label.set_text(Some("Body"));
    let recorder = Rc::new(Recorder::default());
    shared().add_observer(&recorder);
    shared().add_observer(&label);

    set_size_category_detector(|| SizeCategory::AccessibilityLarge);
    refresh_shared();

    assert_eq!(*recorder.seen.borrow(), vec![SizeCategory::AccessibilityLarge]);
    let font = label.attributed_text().unwrap().runs()[0]
        .attributes()
        .font()
        .cloned()
        .unwrap();
    // 12 * 1.941 = 23.292
    assert_eq!(font.point_size(), 23.0);

    reset_size_category_detector();
    reset_shared();
}

#[test]
#[serial]
fn test_styles_bind_installed_shared_resolver() {
    let source = Rc::new(ManualSizeCategorySource::new(SizeCategory::ExtraLarge3));
    let resolver = ScaleResolver::builder().source(source).build();
    install_shared(resolver.clone());

    let style = StyleDescriptor::builder(Font::system(10.0), Color::BLACK)
        .scaling_mode(ScalingMode::ScaleStandardOnly)
        .build();
    assert!(Rc::ptr_eq(style.resolver(), &resolver));
    assert!(Rc::ptr_eq(&shared(), &resolver));
    // 10 * 1.353 = 13.53
    assert_eq!(style.scaled_font().point_size(), 14.0);

    reset_shared();
    assert!(!Rc::ptr_eq(&shared(), &resolver));
    reset_shared();
}

#[test]
fn test_override_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defaults.json");

    {
        let store = Rc::new(JsonFileStore::open(&path).unwrap());
        let resolver = ScaleResolver::builder().store(store).build();
        resolver.set_override(Some(SizeCategory::AccessibilityMedium));
    }

    let store = Rc::new(JsonFileStore::open(&path).unwrap());
    assert_eq!(
        store.get("StyledTextOverrideContentSize").as_deref(),
        Some("accessibility-medium")
    );
    let resolver = ScaleResolver::builder().store(store.clone()).build();
    assert_eq!(
        resolver.override_category(),
        Some(SizeCategory::AccessibilityMedium)
    );
    assert_eq!(
        resolver.effective_category(),
        SizeCategory::AccessibilityMedium
    );

    resolver.set_override(None);
    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("StyledTextOverrideContentSize"), None);
}

#[test]
fn test_custom_key_and_disabled_loading() {
    let dir = tempfile::tempdir().unwrap();
    let store = Rc::new(JsonFileStore::open(dir.path().join("prefs.json")).unwrap());
    store.set("app.text-size", Some("extra-small"));

    let config = ResolverConfig {
        defaults_key: "app.text-size".to_string(),
        ..ResolverConfig::default()
    };
    let loaded = ScaleResolver::builder()
        .config(config.clone())
        .store(store.clone())
        .build();
    assert_eq!(loaded.effective_category(), SizeCategory::ExtraSmall);

    let ignored = ScaleResolver::builder()
        .config(ResolverConfig {
            load_saved_override: false,
            ..config
        })
        .store(store)
        .build();
    assert_eq!(ignored.override_category(), None);
    assert_eq!(ignored.effective_category(), SizeCategory::Large);
}

#[test]
fn test_invalid_persisted_value_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("defaults.json");
    std::fs::write(&path, r#"{"StyledTextOverrideContentSize": "enormous"}"#).unwrap();

    let store = Rc::new(JsonFileStore::open(&path).unwrap());
    let resolver = ScaleResolver::builder().store(store).build();
    assert_eq!(resolver.override_category(), None);
    assert_eq!(resolver.effective_category(), SizeCategory::Large);
}
