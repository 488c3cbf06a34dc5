//! Structural mutations of the item collection.

use super::model::Model;
use super::types::ListItem;
use log::{debug, trace};

impl<T: 'static> Model<T> {
    /// Replaces every item. An applied filter is re-run and the first
    /// survivor selected; otherwise the selection index is kept in range.
    pub fn set_items(&mut self, data: Vec<T>) {
        let previous = self.global_index;
        let widgets = data
            .into_iter()
            .map(|d| (self.constructor)(d, &self.theme))
            .collect();

        self.items.set_widgets(widgets);
        self.global_index = None;
        debug!("widgetlist: set {} items", self.items.len());

        if self.filtered.is_some() {
            self.refilter_items();
            self.update_pagination();
            self.sync_to(None);
            return;
        }

        self.update_pagination();
        let clamped = previous.map(|g| g.min(self.items.len().saturating_sub(1)));
        self.sync_to(clamped);
    }

    /// Replaces the payload of one item, keeping its widget.
    pub fn set_item(&mut self, index: usize, data: T) {
        let Some(item) = self.items.widget_mut(index) else {
            trace!("widgetlist: set_item({index}) ignored");
            return;
        };
        item.update_data(data);

        if self.filtered.is_some() {
            self.refilter();
        }
    }

    /// Appends an item. Any filter is cleared first.
    pub fn append_item(&mut self, data: T) {
        self.reset_filter();

        let widget = (self.constructor)(data, &self.theme);
        let index = self.items.len();
        self.attach(index, widget, self.auto_focus_new_item);
        debug!("widgetlist: appended item {index}");
    }

    /// Inserts an item before `index`, appending when `index` is past the end.
    /// Any filter is cleared first.
    ///
    /// Without auto-focus the selection keeps naming the same item.
    pub fn insert_item(&mut self, index: usize, data: T) {
        self.reset_filter();

        let index = index.min(self.items.len());
        let widget = (self.constructor)(data, &self.theme);
        self.attach(index, widget, self.auto_focus_new_item);
        debug!("widgetlist: inserted item {index}");
    }

    /// Removes an item and drops its widget.
    ///
    /// Removing the selected item selects the previous visible one, wrapping
    /// to the last with infinite scroll. An applied filter is re-run.
    pub fn remove_item(&mut self, index: usize) {
        if self.detach(index).is_some() {
            debug!("widgetlist: removed item {index}");
        }
    }

    /// Moves an item to `to`, counted after its removal.
    ///
    /// The same widget is reused and ends up selected. Any filter is cleared
    /// first.
    ///
    /// The intermediate remove and insert are silent. Observers get exactly
    /// one `on_cursor_moving` with the selection before the move and one
    /// `on_cursor_moved` with the moved item's new index, so a move reads as
    /// a single selection change.
    pub fn move_item(&mut self, from: usize, to: usize) {
        let len = self.items.len();
        if from >= len || to > len {
            trace!("widgetlist: move_item({from}, {to}) ignored");
            return;
        }

        self.reset_filter();
        self.notify_moving();

        let (moving, moved) = (self.suppress_moving, self.suppress_moved);
        self.suppress_moving = true;
        self.suppress_moved = true;

        if let Some(widget) = self.detach(from) {
            let to = to.min(self.items.len());
            self.attach(to, widget, true);
        }

        self.suppress_moving = moving;
        self.suppress_moved = moved;
        self.notify_moved();
        debug!("widgetlist: moved item {from} to {to}");
    }

    fn attach(&mut self, index: usize, widget: Box<dyn ListItem<T>>, select: bool) {
        let selected = self.global_index;

        self.items.insert(index, widget);
        self.update_pagination();

        if select {
            self.global_index = selected.map(|g| if index <= g { g + 1 } else { g });
            self.select(index);
            return;
        }

        match selected {
            Some(g) if index <= g => {
                self.move_cursor(g + 1);
            }
            Some(g) => {
                self.move_cursor(g);
            }
            None => self.sync_to(None),
        }
    }

    fn detach(&mut self, index: usize) -> Option<Box<dyn ListItem<T>>> {
        if index >= self.items.len() {
            trace!("widgetlist: remove_item({index}) ignored");
            return None;
        }

        let selected = self.global_index;
        let removed_position = self.position_of(index);

        let widget = self.items.remove(index)?;

        if self.filtered.is_some() {
            self.refilter_items();
        }
        self.update_pagination();

        match selected {
            Some(g) if g != index => {
                let g = if index < g { g - 1 } else { g };
                self.global_index = Some(g);
                self.sync_to(Some(g));
            }
            Some(_) => {
                self.global_index = None;
                self.select_after_removal(removed_position.unwrap_or(0));
            }
            None => self.sync_to(None),
        }

        Some(widget)
    }

    /// Selects the entry before `position` in the active index space.
    fn select_after_removal(&mut self, position: usize) {
        let len = self.visible_len();
        if len == 0 {
            self.sync_to(None);
            return;
        }

        let target = match position {
            0 if self.infinite_scroll => len - 1,
            0 => 0,
            p => (p - 1).min(len - 1),
        };

        if let Some(global) = self.global_at(target) {
            self.move_cursor(global);
            self.notify_moved();
        }
    }
}
