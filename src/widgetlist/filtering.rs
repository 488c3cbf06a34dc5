//! Filter state transitions.
//!
//! ```text
//! Unfiltered ──enter──▶ Filtering ──apply──▶ FilterApplied
//!      ▲                    │                     │
//!      └─────── clear ──────┴──────── clear ──────┘
//! ```
//!
//! While the query is edited the previous result (if any) stays in effect.
//! Applying an empty query is the same as clearing.

use super::model::Model;
use super::types::FilterState;
use log::debug;

impl<T: 'static> Model<T> {
    /// Starts editing the query. Ignored when the list is not filterable.
    pub fn enter_filter(&mut self) {
        if !self.filterable {
            return;
        }

        self.items.blur_current();
        self.filter_input.focus();
        self.filter_state = FilterState::Filtering;
        debug!("widgetlist: editing filter query");
    }

    /// Replaces the query text without applying it.
    pub fn set_filter_query(&mut self, query: &str) {
        self.filter_input.set_value(query);
    }

    /// Runs the filter with the current query and selects the first survivor.
    pub fn apply_filter(&mut self) {
        self.filter_input.blur();

        if self.filter_input.value().is_empty() {
            self.clear_filter();
            return;
        }

        self.filter_state = FilterState::FilterApplied;
        self.refilter_items();
        self.update_pagination();
        self.focus_first();
    }

    /// Shows every item again and selects the first one.
    pub fn clear_filter(&mut self) {
        self.reset_filter();
        self.focus_first();
    }

    /// Shows every item again, keeping the selection.
    pub(super) fn reset_filter(&mut self) {
        if self.filter_state == FilterState::Unfiltered && self.filtered.is_none() {
            return;
        }

        self.filter_input.reset();
        self.filtered = None;
        self.filter_state = FilterState::Unfiltered;
        for item in self.items.widgets_mut() {
            item.set_active(true);
        }

        self.update_pagination();
        self.resync_selection();
        debug!("widgetlist: filter cleared");
    }

    /// Re-runs an applied filter after the items changed, keeping the
    /// selection when it survives.
    pub(super) fn refilter(&mut self) {
        let selected = self.global_index;
        self.refilter_items();
        self.update_pagination();
        self.sync_to(selected);
        if self.global_index != selected {
            self.notify_moved();
        }
    }

    /// Recomputes the filter result and hides the items that did not survive.
    pub(super) fn refilter_items(&mut self) {
        let keys: Vec<String> = self.items.widgets().map(|w| w.filter_value()).collect();
        let query = self.filter_input.value();

        let mut result = self.filter_policy.apply(&keys, query);
        result.retain(|&g| g < keys.len());

        let mut visible = vec![false; keys.len()];
        for &g in &result {
            visible[g] = true;
        }
        for (item, visible) in self.items.widgets_mut().zip(visible) {
            item.set_active(visible);
        }

        debug!(
            "widgetlist: filter {query:?} kept {} of {} items",
            result.len(),
            keys.len()
        );
        self.filtered = Some(result);
    }
}
