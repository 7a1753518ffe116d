//! A button title with per-state styles.

use std::cell::RefCell;

use crate::size::{ScaleResolver, SizeCategory, SizeCategoryObserver};
use crate::style::StyleDescriptor;
use crate::text::{AttributedText, StyledText};

/// Interaction state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlState {
    Normal,
    Highlighted,
    Disabled,
    Selected,
}

impl ControlState {
    pub const ALL: [ControlState; 4] = [
        ControlState::Normal,
        ControlState::Highlighted,
        ControlState::Disabled,
        ControlState::Selected,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug)]
struct ButtonModel {
    normal_style: StyleDescriptor,
    // Index 0 (normal) is unused; the normal style lives in `normal_style`.
    styles: [Option<StyleDescriptor>; 4],
    titles: [Option<String>; 4],
    hide_title: bool,
}

/// Display model for a button's title.
///
/// Each [`ControlState`] may have its own title and style. A state without
/// its own falls back to the normal title and normal style. With
/// `hide_title` set, no state renders a title.
#[derive(Debug)]
pub struct StyledButton {
    model: RefCell<ButtonModel>,
    rendered: RefCell<[Option<AttributedText>; 4]>,
}

impl StyledButton {
    pub fn new(normal_style: StyleDescriptor) -> Self {
        let button = Self {
            model: RefCell::new(ButtonModel {
                normal_style,
                styles: Default::default(),
                titles: Default::default(),
                hide_title: false,
            }),
            rendered: RefCell::new(Default::default()),
        };
        button.refresh_style();
        button
    }

    /// The title set for exactly `state`, without fallback.
    pub fn title(&self, state: ControlState) -> Option<String> {
        self.model.borrow().titles[state.index()].clone()
    }

    pub fn set_title(&self, title: Option<&str>, state: ControlState) {
        self.model.borrow_mut().titles[state.index()] = title.map(str::to_string);
        self.refresh_style();
    }

    /// The style set for exactly `state`. The normal state always has one.
    pub fn text_style(&self, state: ControlState) -> Option<StyleDescriptor> {
        let model = self.model.borrow();
        match state {
            ControlState::Normal => Some(model.normal_style.clone()),
            state => model.styles[state.index()].clone(),
        }
    }

    /// Sets the style for `state`.
    ///
    /// Passing `None` for [`ControlState::Normal`] restores
    /// [`StyleDescriptor::unspecified`].
    pub fn set_text_style(&self, style: Option<StyleDescriptor>, state: ControlState) {
        {
            let mut model = self.model.borrow_mut();
            match state {
                ControlState::Normal => {
                    model.normal_style = style.unwrap_or_else(StyleDescriptor::unspecified);
                }
                state => model.styles[state.index()] = style,
            }
        }
        self.refresh_style();
    }

    pub fn hides_title(&self) -> bool {
        self.model.borrow().hide_title
    }

    pub fn set_hide_title(&self, hide: bool) {
        self.model.borrow_mut().hide_title = hide;
        self.refresh_style();
    }

    /// The rendered title for `state`, or `None` while titles are hidden.
    pub fn attributed_title(&self, state: ControlState) -> Option<AttributedText> {
        self.rendered.borrow()[state.index()].clone()
    }

    /// Re-resolves every state's style and re-renders its title.
    pub fn refresh_style(&self) {
        let rendered = {
            let model = self.model.borrow();
            let normal_title = model.titles[ControlState::Normal.index()]
                .clone()
                .unwrap_or_default();
            ControlState::ALL.map(|state| {
                if model.hide_title {
                    return None;
                }
                let title = model.titles[state.index()]
                    .clone()
                    .unwrap_or_else(|| normal_title.clone());
                let style = model.styles[state.index()]
                    .clone()
                    .unwrap_or_else(|| model.normal_style.clone());
                Some(StyledText::plain(title, style).to_attributed_text())
            })
        };
        *self.rendered.borrow_mut() = rendered;
    }
}

impl Default for StyledButton {
    fn default() -> Self {
        Self::new(StyleDescriptor::unspecified())
    }
}

impl SizeCategoryObserver for StyledButton {
    fn category_did_change(&self, _resolver: &ScaleResolver, _category: SizeCategory) {
        self.refresh_style();
    }
}
