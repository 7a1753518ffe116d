//! Text with per-run attributes.

use std::fmt;
use std::ops::Range;

use super::error::AttributedTextError;
use crate::style::{Attribute, AttributeKey, Attributes};

/// A maximal span of text sharing identical attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    range: Range<usize>,
    attributes: Attributes,
}

impl Run {
    /// Byte range of the run within the text.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// A string whose every byte carries a set of [`Attributes`].
///
/// Attributes are stored as runs that cover the text contiguously. Adjacent
/// runs always differ, so each [`Run`] is maximal. Ranges are byte offsets
/// and must fall on UTF-8 character boundaries.
///
/// # Example
///
/// ```rust
/// use styled_text::{Attribute, AttributedText, Color};
///
/// let mut text = AttributedText::new("Hello world");
/// text.add_attribute(6..11, Attribute::ForegroundColor(Color::RED)).unwrap();
///
/// let runs: Vec<_> = text.runs().iter().map(|r| r.range()).collect();
/// assert_eq!(runs, vec![0..6, 6..11]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedText {
    text: String,
    runs: Vec<Run>,
}

impl AttributedText {
    /// Creates text with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_attributes(text, Attributes::new())
    }

    /// Creates text carrying `attributes` across its whole length.
    pub fn with_attributes(text: impl Into<String>, attributes: Attributes) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run {
                range: 0..text.len(),
                attributes,
            }]
        };
        Self { text, runs }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Runs in text order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Attributes of the byte at `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        let i = self.runs.partition_point(|run| run.range.end <= index);
        self.runs
            .get(i)
            .filter(|run| run.range.contains(&index))
            .map(|run| &run.attributes)
    }

    /// Appends `text` carrying `attributes`.
    pub fn push_str(&mut self, text: &str, attributes: Attributes) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);
        self.runs.push(Run {
            range: start..self.text.len(),
            attributes,
        });
        self.coalesce();
    }

    /// Adds `attributes` over `range`, replacing values for keys already set.
    pub fn add_attributes(
        &mut self,
        range: Range<usize>,
        attributes: &Attributes,
    ) -> Result<(), AttributedTextError> {
        self.edit(range, |existing| existing.extend_replacing(attributes))
    }

    pub fn add_attribute(
        &mut self,
        range: Range<usize>,
        attribute: Attribute,
    ) -> Result<(), AttributedTextError> {
        self.add_attributes(range, &Attributes::new().with(attribute))
    }

    /// Replaces all attributes over `range`.
    pub fn set_attributes(
        &mut self,
        range: Range<usize>,
        attributes: Attributes,
    ) -> Result<(), AttributedTextError> {
        self.edit(range, |existing| *existing = attributes.clone())
    }

    pub fn remove_attribute(
        &mut self,
        range: Range<usize>,
        key: AttributeKey,
    ) -> Result<(), AttributedTextError> {
        self.edit(range, |existing| {
            existing.remove(key);
        })
    }

    /// Applies `f` to every run's attributes, then re-merges equal neighbours.
    pub(crate) fn update_runs(&mut self, mut f: impl FnMut(&mut Attributes)) {
        for run in &mut self.runs {
            f(&mut run.attributes);
        }
        self.coalesce();
    }

    fn validate(&self, range: &Range<usize>) -> Result<(), AttributedTextError> {
        let Range { start, end } = *range;
        let len = self.text.len();
        if start > end {
            return Err(AttributedTextError::InvalidRange { start, end });
        }
        if end > len {
            return Err(AttributedTextError::OutOfBounds { start, end, len });
        }
        for index in [start, end] {
            if !self.text.is_char_boundary(index) {
                return Err(AttributedTextError::NotOnCharBoundary { start, end, index });
            }
        }
        Ok(())
    }

    fn edit(
        &mut self,
        range: Range<usize>,
        mut f: impl FnMut(&mut Attributes),
    ) -> Result<(), AttributedTextError> {
        self.validate(&range)?;
        if range.is_empty() {
            return Ok(());
        }
        self.split_at(range.start);
        self.split_at(range.end);
        for run in self
            .runs
            .iter_mut()
            .filter(|run| run.range.start >= range.start && run.range.end <= range.end)
        {
            f(&mut run.attributes);
        }
        self.coalesce();
        Ok(())
    }

    /// Ensures a run boundary at `offset`.
    fn split_at(&mut self, offset: usize) {
        if offset == 0 || offset >= self.text.len() {
            return;
        }
        let i = self.runs.partition_point(|run| run.range.end <= offset);
        let Some(run) = self.runs.get_mut(i) else {
            return;
        };
        if run.range.start == offset {
            return;
        }
        let tail = Run {
            range: offset..run.range.end,
            attributes: run.attributes.clone(),
        };
        run.range.end = offset;
        self.runs.insert(i + 1, tail);
    }

    fn coalesce(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in std::mem::take(&mut self.runs) {
            match merged.last_mut() {
                Some(last) if last.attributes == run.attributes => last.range.end = run.range.end,
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

impl fmt::Display for AttributedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for AttributedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AttributedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
