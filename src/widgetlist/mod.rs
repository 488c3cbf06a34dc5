//! A paginated, filterable list of focusable item widgets.
//!
//! [`Model<T>`] owns a collection of payloads, each wrapped in a widget that
//! implements [`ListItem<T>`]. Only the items of the current page are drawn,
//! and exactly one visible item is selected (and focused) whenever the list
//! has any visible item.
//!
//! ### Keys
//! The list handles the cursor, page, jump and filter keys of its
//! [`ListKeyMap`] itself. Every other message is routed to the selected item
//! through the list's [`FocusCoordinator`](crate::focus::FocusCoordinator), so
//! an item can enter input mode and receive every key until it lets go.
//!
//! ### Filtering
//! - `Unfiltered`: every item is shown
//! - `Filtering`: the query is being typed into the input above the items
//! - `FilterApplied`: only the items that survived the query are shown, in
//!   the order produced by the [`FilterPolicy`](crate::filter::FilterPolicy)
//!
//! Appending, inserting and moving items clear the filter first.
//!
//! ```rust
//! use orvyn::prelude::*;
//! use orvyn::widgetlist::{FilterState, Model, SimpleItem};
//!
//! let ctx = Context::new();
//! let mut list = Model::new(&ctx, SimpleItem::constructor());
//! list.resize(Size::new(40, 10));
//! list.set_items(vec![
//!     "Cut down some wood".to_string(),
//!     "Fishing in the river".to_string(),
//! ]);
//!
//! list.set_filter_policy(FilterPolicy::Substring);
//! list.enter_filter();
//! list.set_filter_query("wood");
//! list.apply_filter();
//!
//! assert_eq!(list.filter_state(), FilterState::FilterApplied);
//! assert_eq!(list.visible_len(), 1);
//! assert_eq!(list.selected_item().map(String::as_str), Some("Cut down some wood"));
//! ```

mod filtering;
mod input;
pub mod keys;
mod model;
mod mutation;
mod navigation;
mod rendering;
pub mod simpleitem;
pub mod types;

#[cfg(test)]
mod tests;

pub use keys::ListKeyMap;
pub use model::Model;
pub use simpleitem::SimpleItem;
pub use types::{CursorCallback, FilterState, ItemConstructor, ListItem};

use crate::key::{self, Binding};
use crate::size::Size;
use crate::widget::{Activable, FocusFlags, Focusable, RenderState, Renderable};
use bubbletea_rs::{Cmd, KeyMsg, Msg, WindowSizeMsg};

impl<T: 'static> Model<T> {
    /// Handles a message.
    ///
    /// Resize messages re-derive the layout. While the query is being edited,
    /// keys go to the query input. Otherwise the list's own keys are handled
    /// unless the selected item is inputting, and everything else is routed
    /// to the selected item.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_size(Size::new(size.width as usize, size.height as usize));
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.filter_state == FilterState::Filtering {
                self.handle_filter_key(key);
                return None;
            }

            if !self.items.is_inputting() && self.handle_navigation_key(key) {
                return None;
            }
        }

        let cmd = self.items.dispatch(msg);

        // A direct focus binding may have moved focus to another item.
        if let Some(active) = self.items.active_index() {
            if Some(active) != self.global_index && self.position_of(active).is_some() {
                self.select(active);
            }
        }

        cmd
    }

    fn handle_filter_key(&mut self, key: &KeyMsg) {
        if self.keymap.apply_filter.matches(key) {
            self.apply_filter();
        } else if self.keymap.clear_filter.matches(key) {
            self.clear_filter();
        } else {
            self.filter_input.handle_key(key);
        }
    }

    fn handle_navigation_key(&mut self, key: &KeyMsg) -> bool {
        if self.keymap.cursor_up.matches(key) {
            self.previous_item();
        } else if self.keymap.cursor_down.matches(key) {
            self.next_item();
        } else if self.keymap.next_page.matches(key) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key) {
            self.prev_page();
        } else if self.keymap.go_to_start.matches(key) {
            self.go_to_start();
        } else if self.keymap.go_to_end.matches(key) {
            self.go_to_end();
        } else if self.filterable && self.keymap.enter_filter.matches(key) {
            self.enter_filter();
        } else if self.filter_state == FilterState::FilterApplied
            && self.keymap.clear_filter.matches(key)
        {
            self.clear_filter();
        } else {
            return false;
        }
        true
    }
}

impl<T: 'static> Activable for Model<T> {
    fn is_active(&self) -> bool {
        self.state.is_active()
    }

    fn set_active(&mut self, active: bool) {
        self.state.set_active(active);
    }
}

impl<T: 'static> Renderable for Model<T> {
    fn render_state(&self) -> &RenderState {
        &self.state
    }

    fn render_state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    fn render(&self) -> String {
        self.view()
    }

    fn resize(&mut self, size: Size) {
        self.set_size(size);
    }
}

impl<T: 'static> Focusable for Model<T> {
    fn focus_flags(&self) -> &FocusFlags {
        &self.flags
    }

    fn focus_flags_mut(&mut self) -> &mut FocusFlags {
        &mut self.flags
    }

    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn on_focus(&mut self) {
        self.update_paginator_dots();
    }

    fn on_blur(&mut self) {
        self.update_paginator_dots();
    }

    /// The list keeps the keyboard while an item or the query input has it.
    fn is_inputting(&self) -> bool {
        self.flags.inputting()
            || self.filter_state == FilterState::Filtering
            || self.items.is_inputting()
    }

    fn can_exit_inputting(&self) -> bool {
        self.filter_state != FilterState::Filtering && !self.items.is_inputting()
    }
}

impl<T: 'static> key::KeyMap for Model<T> {
    fn short_help(&self) -> Vec<&Binding> {
        match self.filter_state {
            FilterState::Filtering => {
                vec![&self.keymap.apply_filter, &self.keymap.clear_filter]
            }
            FilterState::FilterApplied => vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.clear_filter,
            ],
            FilterState::Unfiltered if self.filterable => vec![
                &self.keymap.cursor_up,
                &self.keymap.cursor_down,
                &self.keymap.enter_filter,
            ],
            FilterState::Unfiltered => vec![&self.keymap.cursor_up, &self.keymap.cursor_down],
        }
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        key::KeyMap::full_help(&self.keymap)
    }
}
