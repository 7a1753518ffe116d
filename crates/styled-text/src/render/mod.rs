//! Rendering attributed text outside a GUI.
//!
//! Widgets that paint text natively consume [`AttributedText`] directly.
//! This module covers the terminal: [`to_ansi_string`] turns runs into
//! escape-coded output.
//!
//! [`AttributedText`]: crate::AttributedText

mod ansi;

pub use ansi::{to_ansi_string, AnsiOptions};
