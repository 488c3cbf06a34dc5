//! Selection and index reconciliation.
//!
//! Navigation works on positions in the active index space: the filter result
//! while a filter is in effect, the global order otherwise.

use super::model::Model;
use super::types::FilterState;
use log::trace;

impl<T: 'static> Model<T> {
    /// Number of items in the active index space.
    pub fn visible_len(&self) -> usize {
        match &self.filtered {
            Some(filtered) => filtered.len(),
            None => self.items.len(),
        }
    }

    /// Global index of the entry at `position` in the active index space.
    pub(super) fn global_at(&self, position: usize) -> Option<usize> {
        match &self.filtered {
            Some(filtered) => filtered.get(position).copied(),
            None => (position < self.items.len()).then_some(position),
        }
    }

    /// Position of a global index in the active index space, if visible.
    pub(super) fn position_of(&self, global: usize) -> Option<usize> {
        match &self.filtered {
            Some(filtered) => filtered.iter().position(|&g| g == global),
            None => (global < self.items.len()).then_some(global),
        }
    }

    fn selected_position(&self) -> Option<usize> {
        self.global_index.and_then(|g| self.position_of(g))
    }

    /// Re-derives page, cursor and focus from a global index.
    ///
    /// Hidden or out-of-range indices leave the selection where it is.
    /// Returns whether the selection now names `global`.
    pub fn move_cursor(&mut self, global: usize) -> bool {
        let Some(position) = self.position_of(global) else {
            trace!("widgetlist: move_cursor({global}) ignored, item not visible");
            return false;
        };

        let (page, cursor) = self.paginator.locate(position);
        self.paginator.page = page;
        self.cursor = cursor;
        self.global_index = Some(global);

        // The query input owns the keyboard while it is being edited.
        if self.filter_state != FilterState::Filtering {
            self.items.focus(global);
        }

        true
    }

    /// Selects `global` with cursor notifications.
    pub fn select(&mut self, global: usize) {
        if self.position_of(global).is_none() {
            trace!("widgetlist: select({global}) ignored");
            return;
        }

        self.notify_moving();
        self.move_cursor(global);
        self.notify_moved();
    }

    /// Selects the first visible item, or nothing when there is none.
    ///
    /// Cursor callbacks fire only when this changes the selected item.
    pub fn focus_first(&mut self) {
        if self.global_at(0) == self.global_index {
            self.sync_to(None);
            return;
        }

        self.notify_moving();
        self.sync_to(None);
        self.notify_moved();
    }

    /// Selects the next visible item.
    pub fn next_item(&mut self) {
        let len = self.visible_len();
        let target = match self.selected_position() {
            _ if len == 0 => return,
            None => 0,
            Some(p) if p + 1 < len => p + 1,
            Some(_) if self.infinite_scroll => 0,
            Some(p) => p,
        };
        self.step_to(target, "next");
    }

    /// Selects the previous visible item.
    pub fn previous_item(&mut self) {
        let len = self.visible_len();
        let target = match self.selected_position() {
            _ if len == 0 => return,
            None => 0,
            Some(p) if p > 0 => p - 1,
            Some(_) if self.infinite_scroll => len - 1,
            Some(p) => p,
        };
        self.step_to(target, "previous");
    }

    /// Moves one page forward, keeping the in-page cursor where possible.
    pub fn next_page(&mut self) {
        let len = self.visible_len();
        let per_page = self.paginator.per_page;
        let target = match self.selected_position() {
            _ if len == 0 => return,
            None => 0,
            Some(p) if p + per_page < len => p + per_page,
            Some(p) if self.infinite_scroll && self.paginator.on_last_page() => p % per_page,
            Some(_) => len - 1,
        };
        self.step_to(target.min(len - 1), "next page");
    }

    /// Moves one page back, keeping the in-page cursor where possible.
    pub fn prev_page(&mut self) {
        let len = self.visible_len();
        let per_page = self.paginator.per_page;
        let target = match self.selected_position() {
            _ if len == 0 => return,
            None => 0,
            Some(p) if p >= per_page => p - per_page,
            Some(p) if self.infinite_scroll && self.paginator.on_first_page() => {
                let last_page = (self.paginator.total_pages - 1) * per_page;
                (last_page + p).min(len - 1)
            }
            Some(_) => 0,
        };
        self.step_to(target, "previous page");
    }

    /// Selects the first visible item.
    pub fn go_to_start(&mut self) {
        if self.visible_len() > 0 {
            self.step_to(0, "start");
        }
    }

    /// Selects the last visible item.
    pub fn go_to_end(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.step_to(len - 1, "end");
        }
    }

    fn step_to(&mut self, position: usize, what: &str) {
        let Some(global) = self.global_at(position) else {
            return;
        };

        trace!("widgetlist: {what} -> position {position}, item {global}");

        if Some(global) == self.global_index {
            // Still re-sync: a clamped step may follow a resize.
            self.move_cursor(global);
            return;
        }

        self.select(global);
    }

    /// Re-selects `preferred` if it is visible, else the first visible item,
    /// else nothing. No notifications are sent.
    pub(super) fn sync_to(&mut self, preferred: Option<usize>) {
        if let Some(global) = preferred.filter(|&g| self.position_of(g).is_some()) {
            self.move_cursor(global);
            return;
        }

        match self.global_at(0) {
            Some(first) => {
                self.move_cursor(first);
            }
            None => self.clear_selection(),
        }
    }

    /// Re-derives page and cursor for the current selection.
    pub(super) fn resync_selection(&mut self) {
        let selected = self.global_index;
        self.sync_to(selected);
    }

    fn clear_selection(&mut self) {
        self.global_index = None;
        self.cursor = 0;
        self.paginator.page = 0;
        // No active widget remains, so the coordinator goes idle.
        self.items.focus_first();
    }
}
