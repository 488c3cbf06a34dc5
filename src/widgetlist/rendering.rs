//! Layout and rendering.

use super::model::Model;
use crate::size::Size;
use log::trace;

impl<T: 'static> Model<T> {
    /// Resizes the item widgets and re-derives the page size and page count.
    ///
    /// The filter line is taken off the height first. The paginator line is
    /// then reserved only when the visible items do not all fit in what is
    /// left, so a page never draws past the list's height.
    pub(super) fn update_pagination(&mut self) {
        let size = self.state.size();

        let mut max_height = 1;
        for item in self.items.widgets_mut() {
            item.resize(Size::new(size.width, size.height));
            max_height = max_height.max(item.size().height.max(1));
        }
        self.max_item_height = max_height;

        let mut available = size.height;
        if self.filterable {
            available = available.saturating_sub(self.filter_input.height());
        }
        if self.visible_len() * self.max_item_height > available {
            available = available.saturating_sub(1);
        }

        self.paginator.set_per_page(available / self.max_item_height);
        self.paginator.set_total_items(self.visible_len());

        trace!(
            "widgetlist: {} per page, {} pages",
            self.paginator.per_page,
            self.paginator.total_pages
        );
    }

    /// Gives the list a new area and re-derives pagination.
    pub fn set_size(&mut self, size: Size) {
        self.state.resize(size);
        self.update_pagination();
        self.resync_selection();
    }

    /// Draws the filter line, the current page and the page indicator.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();

        if self.filterable {
            sections.push(self.filter_input.view(&self.theme));
        }

        let (start, end) = self.paginator.get_slice_bounds(self.visible_len());
        let rows: Vec<String> = (start..end)
            .filter_map(|position| self.global_at(position))
            .filter_map(|global| self.items.widget(global))
            .map(|item| item.render())
            .collect();

        if rows.is_empty() {
            sections.push(self.theme.placeholder.render("No items."));
        } else {
            sections.push(rows.join("\n"));
        }

        if self.paginator.total_pages > 1 {
            sections.push(self.paginator.view());
        }

        sections.join("\n")
    }

    /// Restyles the page indicator for the list's focus state.
    pub(super) fn update_paginator_dots(&mut self) {
        let (active, inactive) = if self.flags.focused() {
            (self.theme.active_dot(), self.theme.inactive_dot())
        } else {
            (
                self.theme.blurred.render(&self.theme.dot),
                self.theme.inactive_dot(),
            )
        };
        self.paginator.set_dots(active, inactive);
    }
}
