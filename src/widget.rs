//! Widget capabilities.
//!
//! Widgets are composed from small capability traits rather than a class
//! hierarchy:
//!
//! - [`Activable`]: the widget can be switched on and off (inactive widgets are
//!   skipped by focus traversal and hidden by filters)
//! - [`Renderable`]: the widget draws itself into a string and accepts a size
//! - [`Focusable`]: the widget takes part in focus traversal and input mode
//!
//! The shared default behaviour lives in two plain value types, [`RenderState`]
//! and [`FocusFlags`]. A widget embeds them as fields and hands them out through
//! the accessor methods of the traits; every other trait method has a default
//! built on those accessors, so a leaf widget only overrides what it needs.
//!
//! ```rust
//! use orvyn::widget::{Activable, FocusFlags, Focusable, RenderState, Renderable};
//!
//! struct Label {
//!     text: String,
//!     state: RenderState,
//!     flags: FocusFlags,
//! }
//!
//! impl Activable for Label {
//!     fn is_active(&self) -> bool {
//!         self.state.is_active()
//!     }
//!
//!     fn set_active(&mut self, active: bool) {
//!         self.state.set_active(active);
//!     }
//! }
//!
//! impl Renderable for Label {
//!     fn render_state(&self) -> &RenderState {
//!         &self.state
//!     }
//!
//!     fn render_state_mut(&mut self) -> &mut RenderState {
//!         &mut self.state
//!     }
//!
//!     fn render(&self) -> String {
//!         self.text.clone()
//!     }
//! }
//!
//! impl Focusable for Label {
//!     fn focus_flags(&self) -> &FocusFlags {
//!         &self.flags
//!     }
//!
//!     fn focus_flags_mut(&mut self) -> &mut FocusFlags {
//!         &mut self.flags
//!     }
//! }
//!
//! let label = Label { text: "hi".into(), state: RenderState::new(), flags: FocusFlags::default() };
//! assert!(label.is_active());
//! assert!(!label.is_focused());
//! ```

use crate::key::Binding;
use crate::size::Size;
use bubbletea_rs::{Cmd, Msg};
use crossterm::event::KeyCode;

/// Something that can be switched active or inactive.
pub trait Activable {
    /// Inactive widgets are skipped by focus traversal and hidden by lists.
    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);
}

/// Default size bookkeeping for a [`Renderable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    active: bool,
    size: Size,
    min_size: Size,
    preferred_size: Size,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            active: true,
            size: Size::default(),
            min_size: Size::new(1, 1),
            preferred_size: Size::new(1, 1),
        }
    }
}

impl RenderState {
    /// An active state with a zero size and 1x1 minimum and preferred sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum size (builder pattern).
    pub fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = size;
        self
    }

    /// Sets the preferred size (builder pattern).
    pub fn with_preferred_size(mut self, size: Size) -> Self {
        self.preferred_size = size;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Area last given by the container.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Records a new area.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn set_min_size(&mut self, size: Size) {
        self.min_size = size;
    }

    pub fn preferred_size(&self) -> Size {
        self.preferred_size
    }

    pub fn set_preferred_size(&mut self, size: Size) {
        self.preferred_size = size;
    }
}

/// A widget that can be drawn and resized by its container.
pub trait Renderable: Activable {
    /// The embedded size bookkeeping.
    fn render_state(&self) -> &RenderState;

    fn render_state_mut(&mut self) -> &mut RenderState;

    /// Draws the widget for its current size.
    fn render(&self) -> String;

    /// Called by the container whenever the available area changes.
    fn resize(&mut self, size: Size) {
        self.render_state_mut().resize(size);
    }

    fn size(&self) -> Size {
        self.render_state().size()
    }

    fn min_size(&self) -> Size {
        self.render_state().min_size()
    }

    fn preferred_size(&self) -> Size {
        self.render_state().preferred_size()
    }
}

/// Focus and input-mode flags of a [`Focusable`].
///
/// The flags are driven by whoever coordinates focus (see
/// [`FocusCoordinator`](crate::focus::FocusCoordinator)); widgets read them and
/// react in the `on_*` hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusFlags {
    focused: bool,
    inputting: bool,
}

impl FocusFlags {
    /// Whether the widget has focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the widget owns every message.
    pub fn inputting(&self) -> bool {
        self.inputting
    }

    pub fn set_inputting(&mut self, inputting: bool) {
        self.inputting = inputting;
    }
}

/// The binding that leaves input mode unless a widget overrides it.
pub fn default_exit_input_binding() -> Binding {
    Binding::new(vec![KeyCode::Esc]).with_help("esc", "exit input")
}

/// A widget that can receive focus and enter input mode.
///
/// In input mode every message is delegated to the widget until it releases
/// input through its exit binding.
pub trait Focusable: Activable {
    fn focus_flags(&self) -> &FocusFlags;

    fn focus_flags_mut(&mut self) -> &mut FocusFlags;

    /// Handles a message routed to the widget.
    fn update(&mut self, _msg: &Msg) -> Option<Cmd> {
        None
    }

    fn on_focus(&mut self) {}

    fn on_blur(&mut self) {}

    fn on_enter_input(&mut self) {}

    fn on_exit_input(&mut self) {}

    fn is_focused(&self) -> bool {
        self.focus_flags().focused()
    }

    fn is_inputting(&self) -> bool {
        self.focus_flags().inputting()
    }

    /// A binding that focuses this widget directly from anywhere.
    fn focus_binding(&self) -> Option<&Binding> {
        None
    }

    /// A binding that puts the focused widget into input mode.
    fn enter_input_binding(&self) -> Option<&Binding> {
        None
    }

    fn exit_input_binding(&self) -> Binding {
        default_exit_input_binding()
    }

    /// Widgets may refuse to leave input mode, e.g. while their value is invalid.
    fn can_exit_inputting(&self) -> bool {
        true
    }
}
