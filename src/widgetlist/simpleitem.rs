//! A one-row text item.

use super::types::{ItemConstructor, ListItem};
use crate::context::Theme;
use crate::size::Size;
use crate::widget::{Activable, FocusFlags, Focusable, RenderState, Renderable};
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const FOCUSED_PREFIX: &str = "> ";
const BLURRED_PREFIX: &str = "  ";

/// Displays a string payload on a single row, truncated to the list width.
///
/// ```rust
/// use orvyn::context::Context;
/// use orvyn::widgetlist::{Model, SimpleItem};
///
/// let ctx = Context::new();
/// let mut list = Model::new(&ctx, SimpleItem::constructor());
/// list.set_items(vec!["one".to_string(), "two".to_string()]);
/// assert_eq!(list.selected_item().map(String::as_str), Some("one"));
/// ```
#[derive(Debug, Clone)]
pub struct SimpleItem {
    value: String,
    state: RenderState,
    flags: FocusFlags,
    focused_style: Style,
    blurred_style: Style,
}

impl SimpleItem {
    /// Creates an item styled by the focused and blurred styles of `theme`.
    pub fn new(value: impl Into<String>, theme: &Theme) -> Self {
        Self {
            value: value.into(),
            state: RenderState::new(),
            flags: FocusFlags::default(),
            focused_style: theme.focused.clone(),
            blurred_style: theme.blurred.clone(),
        }
    }

    /// The constructor to hand to [`Model::new`](super::Model::new) for a list
    /// of strings.
    pub fn constructor() -> ItemConstructor<String> {
        Box::new(|value, theme| Box::new(SimpleItem::new(value, theme)))
    }

    /// The displayed text, before truncation.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Cuts `s` so that it fits in `width` columns, ending with `…` when cut.
/// A width of zero means unconstrained.
fn truncate(s: &str, width: usize) -> String {
    if width == 0 || s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;

    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }

    out.push('…');
    out
}

impl Activable for SimpleItem {
    fn is_active(&self) -> bool {
        self.state.is_active()
    }

    fn set_active(&mut self, active: bool) {
        self.state.set_active(active);
    }
}

impl Renderable for SimpleItem {
    fn render_state(&self) -> &RenderState {
        &self.state
    }

    fn render_state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn render(&self) -> String {
        let (prefix, style) = if self.flags.focused() {
            (FOCUSED_PREFIX, &self.focused_style)
        } else {
            (BLURRED_PREFIX, &self.blurred_style)
        };

        let width = self.state.size().width.saturating_sub(prefix.width());
        let text = truncate(&self.value, width);

        style.render(&format!("{prefix}{text}"))
    }

    // Always one row high.
    fn resize(&mut self, size: Size) {
        self.state.resize(Size::new(size.width, 1));
    }
}

impl Focusable for SimpleItem {
    fn focus_flags(&self) -> &FocusFlags {
        &self.flags
    }

    fn focus_flags_mut(&mut self) -> &mut FocusFlags {
        &mut self.flags
    }
}

impl ListItem<String> for SimpleItem {
    fn filter_value(&self) -> String {
        self.value.clone()
    }

    fn data(&self) -> &String {
        &self.value
    }

    fn update_data(&mut self, data: String) {
        self.value = data;
    }
}
