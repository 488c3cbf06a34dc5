//! Focus traversal and input mode.
//!
//! A [`FocusCoordinator`] owns an ordered registry of focusable widgets and
//! tracks a single active entry. It has three observable states:
//!
//! - [`FocusState::Idle`]: nothing is focused
//! - [`FocusState::Focused`]: the active widget is focused
//! - [`FocusState::Inputting`]: the active widget owns every message until it
//!   releases input through its exit binding
//!
//! Traversal skips inactive widgets and wraps around both ends. Every
//! index-taking operation ignores indices that are out of range.
//!
//! ```rust
//! use orvyn::focus::{FocusCoordinator, FocusState};
//! # use orvyn::widget::{Activable, FocusFlags, Focusable};
//! # #[derive(Default)]
//! # struct Button { flags: FocusFlags }
//! # impl Activable for Button {
//! #     fn is_active(&self) -> bool { true }
//! #     fn set_active(&mut self, _active: bool) {}
//! # }
//! # impl Focusable for Button {
//! #     fn focus_flags(&self) -> &FocusFlags { &self.flags }
//! #     fn focus_flags_mut(&mut self) -> &mut FocusFlags { &mut self.flags }
//! # }
//!
//! let mut focus: FocusCoordinator = FocusCoordinator::new();
//! focus.add(Box::new(Button::default()));
//! focus.add(Box::new(Button::default()));
//!
//! focus.focus_first();
//! assert_eq!(focus.active_index(), Some(0));
//! focus.next();
//! assert_eq!(focus.active_index(), Some(1));
//! focus.next();
//! assert_eq!(focus.active_index(), Some(0));
//! assert_eq!(focus.state(), FocusState::Focused);
//! ```

use crate::key::Binding;
use crate::widget::Focusable;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use log::trace;

/// Observable state of a [`FocusCoordinator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    Idle,
    Focused,
    Inputting,
}

/// Ordered registry of focusable widgets with one active entry.
pub struct FocusCoordinator<W: ?Sized + Focusable = dyn Focusable> {
    widgets: Vec<Box<W>>,
    active: Option<usize>,

    /// Moves focus forward. Tab by default.
    pub next_binding: Binding,
    /// Moves focus backward. Shift+Tab by default.
    pub previous_binding: Binding,
    /// When false, `dispatch` leaves the next/previous bindings to the caller.
    pub manage_next_previous: bool,
}

impl<W: ?Sized + Focusable> Default for FocusCoordinator<W> {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
            active: None,
            next_binding: Binding::new(vec![KeyCode::Tab]).with_help("tab", "next focus"),
            previous_binding: Binding::new(vec![KeyCode::BackTab])
                .with_help("shift+tab", "previous focus"),
            manage_next_previous: true,
        }
    }
}

impl<W: ?Sized + Focusable> FocusCoordinator<W> {
    /// Creates an empty, idle coordinator with Tab and Shift+Tab as the
    /// next/previous bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered widgets, active or not.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether no widget is registered.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The widget at `index`, or `None` when out of range.
    pub fn widget(&self, index: usize) -> Option<&W> {
        self.widgets.get(index).map(|w| w.as_ref())
    }

    /// Mutable access to the widget at `index`.
    ///
    /// Changing a widget's focus flags or active flag directly bypasses the
    /// coordinator; prefer [`focus`](Self::focus) and friends.
    pub fn widget_mut(&mut self, index: usize) -> Option<&mut W> {
        self.widgets.get_mut(index).map(|w| w.as_mut())
    }

    /// Widgets in registry order.
    pub fn widgets(&self) -> impl Iterator<Item = &W> + '_ {
        self.widgets.iter().map(|w| w.as_ref())
    }

    /// Widgets in registry order, mutably.
    pub fn widgets_mut(&mut self) -> impl Iterator<Item = &mut W> + '_ {
        self.widgets.iter_mut().map(|w| w.as_mut())
    }

    /// Index of the active entry, whether or not it is currently focused.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Current state, read from the active widget's focus flags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::focus::{FocusCoordinator, FocusState};
    ///
    /// let focus: FocusCoordinator = FocusCoordinator::new();
    /// assert_eq!(focus.state(), FocusState::Idle);
    /// ```
    pub fn state(&self) -> FocusState {
        match self.active.and_then(|i| self.widgets.get(i)) {
            Some(w) if w.is_inputting() => FocusState::Inputting,
            Some(w) if w.is_focused() => FocusState::Focused,
            _ => FocusState::Idle,
        }
    }

    /// Whether the active widget owns every message.
    pub fn is_inputting(&self) -> bool {
        self.state() == FocusState::Inputting
    }

    /// Appends a widget; registry order is focus order.
    pub fn add(&mut self, widget: Box<W>) {
        self.widgets.push(widget);
    }

    /// Replaces the whole registry. Nothing is focused afterwards.
    pub fn set_widgets(&mut self, widgets: Vec<Box<W>>) {
        self.widgets = widgets;
        self.active = None;
    }

    /// Inserts a widget before `index`, or appends it when `index` is past the end.
    ///
    /// The active index keeps naming the same widget.
    pub fn insert(&mut self, index: usize, widget: Box<W>) {
        if index >= self.widgets.len() {
            self.add(widget);
            return;
        }

        self.widgets.insert(index, widget);

        if let Some(active) = self.active {
            if index <= active {
                self.active = Some(active + 1);
            }
        }
    }

    /// Removes and returns the widget at `index`.
    ///
    /// Removing the active widget hands focus to the previous active widget,
    /// wrapping to the end. Removing any other widget keeps the active index
    /// on the same widget.
    pub fn remove(&mut self, index: usize) -> Option<Box<W>> {
        if index >= self.widgets.len() {
            trace!("focus: remove({index}) out of range");
            return None;
        }

        let mut removed = self.widgets.remove(index);

        match self.active {
            Some(active) if active == index => {
                let was_focused = removed.is_focused();
                release(&mut *removed);

                self.active = self.step(Some(index), false);
                if was_focused {
                    if let Some(previous) = self.active {
                        self.focus_at(previous);
                    }
                }
            }
            Some(active) if index < active => self.active = Some(active - 1),
            _ => {}
        }

        Some(removed)
    }

    /// Focuses the widget at `index`. Inactive widgets cannot be focused.
    pub fn focus(&mut self, index: usize) {
        match self.widgets.get(index) {
            Some(w) if w.is_active() => {}
            _ => {
                trace!("focus: focus({index}) ignored");
                return;
            }
        }

        if self.active != Some(index) {
            self.blur_current();
            self.active = Some(index);
        }

        if !self.widgets[index].is_focused() {
            self.focus_at(index);
        }
    }

    /// Focuses the first active widget, or becomes idle if there is none.
    pub fn focus_first(&mut self) {
        self.blur_current();

        self.active = self.widgets.iter().position(|w| w.is_active());

        if let Some(index) = self.active {
            self.focus_at(index);
        }
    }

    /// Blurs the active widget, leaving input mode first if needed.
    pub fn blur_current(&mut self) {
        if let Some(w) = self.active.and_then(|i| self.widgets.get_mut(i)) {
            release(&mut **w);
        }
    }

    /// Moves focus to the next active widget, wrapping past the end.
    pub fn next(&mut self) {
        self.traverse(true);
    }

    /// Moves focus to the previous active widget, wrapping past the start.
    pub fn previous(&mut self) {
        self.traverse(false);
    }

    /// Puts the focused widget into input mode.
    pub fn force_input(&mut self) {
        if self.state() == FocusState::Focused {
            if let Some(index) = self.active {
                self.enter_input_at(index);
            }
        }
    }

    /// Leaves input mode if the inputting widget allows it.
    ///
    /// Returns whether input mode was left.
    pub fn exit_input(&mut self) -> bool {
        match self.active {
            Some(index) if self.is_inputting() && self.widgets[index].can_exit_inputting() => {
                self.exit_input_at(index);
                true
            }
            _ => false,
        }
    }

    /// Routes a message according to the current state.
    ///
    /// While inputting, everything goes to the active widget except a match of
    /// its exit binding, which leaves input mode when the widget allows it.
    /// Otherwise the next/previous bindings, the focused widget's enter-input
    /// binding and every widget's direct focus binding are checked in that
    /// order before the message is forwarded to the focused widget.
    pub fn dispatch(&mut self, msg: &Msg) -> Option<Cmd> {
        if self.widgets.is_empty() {
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>();

        if self.is_inputting() {
            let index = self.active?;

            if let Some(key) = key {
                if self.widgets[index].exit_input_binding().matches(key) && self.exit_input() {
                    return None;
                }
            }

            return self.widgets[index].update(msg);
        }

        if let Some(key) = key {
            if self.manage_next_previous {
                if self.next_binding.matches(key) {
                    self.next();
                    return None;
                }

                if self.previous_binding.matches(key) {
                    self.previous();
                    return None;
                }
            }

            if self.state() == FocusState::Focused {
                if let Some(index) = self.active {
                    let enter = self.widgets[index]
                        .enter_input_binding()
                        .is_some_and(|b| b.matches(key));

                    if enter {
                        self.enter_input_at(index);
                        return None;
                    }
                }
            }

            let direct = self.widgets.iter().position(|w| {
                w.is_active() && w.focus_binding().is_some_and(|b| b.matches(key))
            });

            if let Some(index) = direct {
                self.focus(index);
                return None;
            }
        }

        match self.active {
            Some(index) if self.widgets[index].is_focused() => self.widgets[index].update(msg),
            _ => None,
        }
    }

    fn traverse(&mut self, forward: bool) {
        if self.widgets.is_empty() {
            return;
        }

        self.blur_current();

        self.active = self.step(self.active, forward);

        if let Some(index) = self.active {
            self.focus_at(index);
        }
    }

    /// Next active index after `from` in the given direction, wrapping, and
    /// possibly `from` itself when it is the only active widget.
    fn step(&self, from: Option<usize>, forward: bool) -> Option<usize> {
        let len = self.widgets.len();
        if len == 0 {
            return None;
        }

        let from = from.map(|i| i.min(len));

        (1..=len)
            .map(|offset| match (from, forward) {
                (Some(i), true) => (i + offset) % len,
                (Some(i), false) => (i + len * 2 - offset) % len,
                (None, true) => offset - 1,
                (None, false) => len - offset,
            })
            .find(|&i| self.widgets[i].is_active())
    }

    fn focus_at(&mut self, index: usize) {
        let w = &mut self.widgets[index];
        w.focus_flags_mut().set_focused(true);
        w.on_focus();
    }

    fn enter_input_at(&mut self, index: usize) {
        let w = &mut self.widgets[index];
        w.focus_flags_mut().set_inputting(true);
        w.on_enter_input();
    }

    fn exit_input_at(&mut self, index: usize) {
        let w = &mut self.widgets[index];
        w.focus_flags_mut().set_inputting(false);
        w.on_exit_input();
    }
}

/// Takes a widget out of input mode and blurs it.
fn release<W: ?Sized + Focusable>(w: &mut W) {
    if w.is_inputting() {
        w.focus_flags_mut().set_inputting(false);
        w.on_exit_input();
    }

    if w.is_focused() {
        w.focus_flags_mut().set_focused(false);
        w.on_blur();
    }
}
