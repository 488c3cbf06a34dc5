//! Item capability and list state types.

use crate::context::Theme;
use crate::widget::{Focusable, Renderable};
use std::fmt;

/// A widget wrapping one payload of a [`Model`](super::Model).
///
/// The list creates one item widget per payload through its
/// [`ItemConstructor`] and owns it until the payload is removed. Hiding an item
/// (because a filter rejected it) is done through
/// [`Activable::set_active`](crate::widget::Activable::set_active).
pub trait ListItem<T>: Focusable + Renderable {
    /// Text matched against the filter query.
    fn filter_value(&self) -> String;

    /// The wrapped payload.
    fn data(&self) -> &T;

    /// Replaces the payload, keeping the widget (and its focus state).
    fn update_data(&mut self, data: T);
}

/// Builds the widget for a payload.
pub type ItemConstructor<T> = Box<dyn Fn(T, &Theme) -> Box<dyn ListItem<T>>>;

/// Receives a global item index.
pub type CursorCallback = Box<dyn FnMut(usize)>;

/// Filtering state of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// Every item is visible.
    #[default]
    Unfiltered,
    /// The query is being edited. The items are not re-ordered until the
    /// query is applied.
    Filtering,
    /// Only the items that survived the applied query are visible.
    FilterApplied,
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterState::Unfiltered => "unfiltered",
            FilterState::Filtering => "filtering",
            FilterState::FilterApplied => "filter applied",
        };
        f.write_str(name)
    }
}
