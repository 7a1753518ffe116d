//! Dynamic type: size categories and font scaling.
//!
//! This module provides:
//!
//! - [`SizeCategory`]: the user's preferred text size
//! - [`scale_factor`] and [`ScalingMode`]: how a category maps to a multiplier
//! - [`SizeCategorySource`]: where the live category comes from
//! - [`KeyValueStore`]: where the override is persisted
//! - [`ScaleResolver`]: combines the above and notifies observers
//! - [`shared`]: the process-wide resolver used by default, driven by
//!   [`refresh_shared`]

mod category;
mod resolver;
mod scale;
mod shared;
mod source;
mod store;

pub use category::{ParseSizeCategoryError, SizeCategory};
pub use resolver::{
    ResolverConfig, ScaleResolver, ScaleResolverBuilder, SizeCategoryObserver,
    DEFAULT_OVERRIDE_KEY,
};
pub use scale::{scale_factor, ScalingMode};
pub use shared::{install_shared, refresh_shared, reset_shared, shared, DEFAULTS_PATH_ENV};
pub use source::{
    reset_size_category_detector, set_size_category_detector, ManualSizeCategorySource,
    SizeCategorySource, Subscription, SystemSizeCategorySource, SIZE_CATEGORY_ENV,
};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
