//! The list model: state, construction, accessors and settings.

use super::input::FilterInput;
use super::keys::ListKeyMap;
use super::types::{CursorCallback, FilterState, ItemConstructor, ListItem};
use crate::config::{ConfigError, ListConfig};
use crate::context::{Context, Theme};
use crate::filter::FilterPolicy;
use crate::focus::FocusCoordinator;
use crate::key::Binding;
use crate::paginator;
use crate::widget::{FocusFlags, RenderState};
use log::debug;

/// A paginated, filterable list of item widgets.
///
/// Each payload `T` is wrapped in a widget built by the list's
/// [`ItemConstructor`]. The widgets live in a [`FocusCoordinator`], so the
/// focus registry and the item collection are one and the same.
///
/// The selection is tracked in three coordinate spaces: the global index of an
/// item in the unfiltered collection, its position in the filter result while
/// a filter is in effect, and the page and in-page cursor derived from that
/// position. Every navigation step and every structural mutation goes through
/// a single reconciliation routine that keeps the three in sync.
pub struct Model<T: 'static> {
    pub(super) items: FocusCoordinator<dyn ListItem<T>>,
    pub(super) constructor: ItemConstructor<T>,
    pub(super) theme: Theme,

    pub(super) filter_state: FilterState,
    pub(super) filter_policy: FilterPolicy,
    /// Surviving global indices, in display order, while a filter is in effect.
    pub(super) filtered: Option<Vec<usize>>,
    pub(super) filter_input: FilterInput,
    pub(super) filterable: bool,

    pub(super) paginator: paginator::Model,
    pub(super) cursor: usize,
    pub(super) global_index: Option<usize>,
    pub(super) max_item_height: usize,

    pub(super) keymap: ListKeyMap,
    pub(super) state: RenderState,
    pub(super) flags: FocusFlags,

    pub(super) on_cursor_moving: Option<CursorCallback>,
    pub(super) on_cursor_moved: Option<CursorCallback>,
    pub(super) suppress_moving: bool,
    pub(super) suppress_moved: bool,

    /// Wrap around at either end instead of stopping.
    pub infinite_scroll: bool,
    /// Select items as soon as they are appended or inserted.
    pub auto_focus_new_item: bool,
}

impl<T: 'static> Model<T> {
    /// Creates an empty list styled by the context's theme.
    ///
    /// The list starts filterable, with fuzzy filtering, no infinite scroll
    /// and no auto-focus of new items. Give it a size with
    /// [`set_size`](Model::set_size) before rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::context::Context;
    /// use orvyn::widgetlist::{FilterState, Model, SimpleItem};
    ///
    /// let list = Model::new(&Context::new(), SimpleItem::constructor());
    /// assert!(list.is_empty());
    /// assert_eq!(list.global_index(), None);
    /// assert_eq!(list.filter_state(), FilterState::Unfiltered);
    /// ```
    pub fn new(ctx: &Context, constructor: ItemConstructor<T>) -> Self {
        let theme = ctx.theme().clone();
        let keymap = ListKeyMap::default();

        let mut items: FocusCoordinator<dyn ListItem<T>> = FocusCoordinator::new();
        items.manage_next_previous = false;
        items.next_binding = keymap.cursor_down.clone();
        items.previous_binding = keymap.cursor_up.clone();

        let mut model = Self {
            items,
            constructor,
            theme,
            filter_state: FilterState::Unfiltered,
            filter_policy: FilterPolicy::default(),
            filtered: None,
            filter_input: FilterInput::default(),
            filterable: true,
            paginator: paginator::Model::new(),
            cursor: 0,
            global_index: None,
            max_item_height: 1,
            keymap,
            state: RenderState::new(),
            flags: FocusFlags::default(),
            on_cursor_moving: None,
            on_cursor_moved: None,
            suppress_moving: false,
            suppress_moved: false,
            infinite_scroll: false,
            auto_focus_new_item: false,
        };
        model.update_paginator_dots();
        model
    }

    /// Clears any filter and selects the first item.
    pub fn init(&mut self) {
        self.reset_filter();
        self.focus_first();
    }

    /// Number of items, visible or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items at all, visible or not.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Payloads in global order.
    pub fn items(&self) -> Vec<&T> {
        self.items.widgets().map(|w| w.data()).collect()
    }

    /// Payload at a global index, or `None` when out of range.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.widget(index).map(|w| w.data())
    }

    /// The widget wrapping the item at `index`.
    pub fn item_widget(&self, index: usize) -> Option<&dyn ListItem<T>> {
        self.items.widget(index)
    }

    /// Mutable access to the widget wrapping the item at `index`.
    ///
    /// Use [`set_item`](Model::set_item) to change a payload so an applied
    /// filter is re-run.
    pub fn item_widget_mut(&mut self, index: usize) -> Option<&mut (dyn ListItem<T> + 'static)> {
        self.items.widget_mut(index)
    }

    /// Payload of the selected item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::context::Context;
    /// use orvyn::size::Size;
    /// use orvyn::widgetlist::{Model, SimpleItem};
    ///
    /// let mut list = Model::new(&Context::new(), SimpleItem::constructor());
    /// list.set_size(Size::new(20, 5));
    /// assert_eq!(list.selected_item(), None);
    ///
    /// list.set_items(vec!["a".to_string(), "b".to_string()]);
    /// list.next_item();
    /// assert_eq!(list.selected_item().map(String::as_str), Some("b"));
    /// ```
    pub fn selected_item(&self) -> Option<&T> {
        self.global_index.and_then(|i| self.item(i))
    }

    /// Global index of the selection, `None` when nothing is selected.
    pub fn global_index(&self) -> Option<usize> {
        self.global_index
    }

    /// Position of the selection within the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zero-based page holding the selection.
    pub fn page(&self) -> usize {
        self.paginator.page
    }

    /// Items shown per page, derived from the height left after the filter
    /// and paginator lines and from the tallest item.
    pub fn per_page(&self) -> usize {
        self.paginator.per_page
    }

    /// Number of pages of visible items, at least 1.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Where the list is in the filter lifecycle.
    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    /// The query as typed so far, empty when no filter is in effect.
    pub fn filter_query(&self) -> &str {
        self.filter_input.value()
    }

    /// Whether the filter key is honoured.
    pub fn filterable(&self) -> bool {
        self.filterable
    }

    /// Enables or disables the filter key. Disabling clears any filter.
    pub fn set_filterable(&mut self, filterable: bool) {
        if !filterable && self.filter_state != FilterState::Unfiltered {
            self.reset_filter();
        }
        self.filterable = filterable;
        self.update_pagination();
        self.resync_selection();
    }

    /// Text shown in the filter line while no query is being edited.
    pub fn set_filter_placeholder(&mut self, placeholder: impl Into<String>) {
        self.filter_input.placeholder = placeholder.into();
    }

    /// Changes the filter policy. An applied filter is re-run with it.
    pub fn set_filter_policy(&mut self, policy: FilterPolicy) {
        self.filter_policy = policy;
        if self.filtered.is_some() {
            self.refilter();
        }
    }

    /// The list's key bindings.
    pub fn keymap(&self) -> &ListKeyMap {
        &self.keymap
    }

    /// Replaces every list binding.
    ///
    /// The cursor bindings double as the item coordinator's next/previous
    /// bindings, so they are copied there too.
    pub fn set_keymap(&mut self, keymap: ListKeyMap) {
        self.items.next_binding = keymap.cursor_down.clone();
        self.items.previous_binding = keymap.cursor_up.clone();
        self.keymap = keymap;
    }

    /// Replaces only the cursor up/down bindings.
    pub fn set_cursor_movement_keybinds(&mut self, up: Binding, down: Binding) {
        self.keymap.cursor_up = up.clone();
        self.keymap.cursor_down = down.clone();
        self.items.previous_binding = up;
        self.items.next_binding = down;
    }

    /// Called with the old global index before the selection changes.
    pub fn set_on_cursor_moving<F: FnMut(usize) + 'static>(&mut self, f: F) {
        self.on_cursor_moving = Some(Box::new(f));
    }

    /// Called with the new global index after the selection changed.
    pub fn set_on_cursor_moved<F: FnMut(usize) + 'static>(&mut self, f: F) {
        self.on_cursor_moved = Some(Box::new(f));
    }

    /// Applies the `[list]` section of a configuration.
    ///
    /// The list is left untouched if a key override is invalid.
    pub fn apply_config(&mut self, config: &ListConfig) -> Result<(), ConfigError> {
        let keymap = self.keymap.clone().with_overrides(&config.keys)?;

        self.set_keymap(keymap);
        self.infinite_scroll = config.infinite_scroll;
        self.auto_focus_new_item = config.auto_focus_new_item;
        self.set_filter_placeholder(config.placeholder.clone());
        self.set_filter_policy(config.filter.into());
        self.set_filterable(config.filterable);

        debug!(
            "widgetlist: applied config (filter: {:?}, filterable: {})",
            config.filter, config.filterable
        );
        Ok(())
    }

    pub(super) fn notify_moving(&mut self) {
        if self.suppress_moving {
            return;
        }
        if let (Some(index), Some(f)) = (self.global_index, self.on_cursor_moving.as_mut()) {
            f(index);
        }
    }

    pub(super) fn notify_moved(&mut self) {
        if self.suppress_moved {
            return;
        }
        if let (Some(index), Some(f)) = (self.global_index, self.on_cursor_moved.as_mut()) {
            f(index);
        }
    }
}
