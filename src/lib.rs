//! # orvyn
//!
//! Keyboard-driven widgets for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a focus coordinator with input mode, and a paginated,
//! filterable list whose items are themselves focusable widgets.
//!
//! ## Overview
//!
//! Widgets are built from small capability traits ([`widget::Activable`],
//! [`widget::Renderable`], [`widget::Focusable`]) whose shared behaviour lives
//! in embeddable value types. A [`focus::FocusCoordinator`] routes messages to
//! the focused widget and moves focus between widgets. The
//! [`widgetlist::Model`] combines a coordinator with a filter and a paginator.
//!
//! Styling comes from an explicit [`context::Context`] created once by the
//! application and passed to constructors; there is no global theme.
//!
//! ## Components
//!
//! - **Focus**: [`focus::FocusCoordinator`]
//! - **Lists**: [`widgetlist::Model`], [`widgetlist::SimpleItem`], [`filter`]
//! - **Utilities**: [`key`], [`paginator`], [`progress::Tracker`], [`config`]
//!
//! ## Usage with bubbletea-rs
//!
//! ```rust
//! use orvyn::prelude::*;
//! use orvyn::widgetlist::{Model as List, SimpleItem};
//! use bubbletea_rs::{Cmd, KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! struct App {
//!     focus: FocusCoordinator,
//! }
//!
//! impl App {
//!     fn new(ctx: &Context) -> Self {
//!         let mut todo = List::new(ctx, SimpleItem::constructor());
//!         todo.set_items(vec!["Cut down some wood".to_string()]);
//!         let mut done = List::new(ctx, SimpleItem::constructor());
//!         done.set_items(vec!["Fishing in the river".to_string()]);
//!
//!         let mut focus: FocusCoordinator = FocusCoordinator::new();
//!         focus.add(Box::new(todo));
//!         focus.add(Box::new(done));
//!         focus.focus_first();
//!
//!         Self { focus }
//!     }
//!
//!     // Called from the bubbletea-rs `Model::update` of the application.
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.focus.dispatch(&msg)
//!     }
//! }
//!
//! let mut app = App::new(&Context::new());
//! let tab = KeyMsg { key: KeyCode::Tab, modifiers: KeyModifiers::NONE };
//! app.update(Box::new(tab));
//! assert_eq!(app.focus.active_index(), Some(1));
//! ```
//!
//! ## Configuration
//!
//! Theme colours, list behaviour and list key bindings can be loaded from TOML
//! with [`config::Config`]; see that module for the format.

pub mod config;
pub mod context;
pub mod filter;
pub mod focus;
pub mod key;
pub mod paginator;
pub mod progress;
pub mod size;
pub mod widget;
pub mod widgetlist;

/// Commonly used types and traits.
///
/// ```rust
/// use orvyn::prelude::*;
///
/// let ctx = Context::new();
/// let mut list = WidgetList::new(&ctx, SimpleItem::constructor());
/// list.resize(Size::new(20, 5));
/// assert!(list.is_empty());
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::context::{Context, Theme};
    pub use crate::filter::FilterPolicy;
    pub use crate::focus::{FocusCoordinator, FocusState};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::progress::Tracker;
    pub use crate::size::Size;
    pub use crate::widget::{Activable, FocusFlags, Focusable, RenderState, Renderable};
    pub use crate::widgetlist::{FilterState, ListItem, Model as WidgetList, SimpleItem};
}
