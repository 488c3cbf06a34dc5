//! Application context.
//!
//! A [`Context`] is created once at startup and passed by reference to widget
//! constructors. It replaces process-wide registries: nothing in this crate
//! reads ambient global state, and the context lives exactly as long as the
//! value the host keeps around.

use crate::config::Config;
use lipgloss_extras::prelude::*;

/// Styles shared by the widgets of an application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The focused widget, and the filter prompt while typing.
    pub focused: Style,
    /// Widgets without focus.
    pub blurred: Style,
    /// Placeholder and empty-state text.
    pub placeholder: Style,
    /// Dot of the current page.
    pub paginator_active: Style,
    /// Dots of the other pages.
    pub paginator_inactive: Style,
    /// Glyph used for every paginator dot.
    pub dot: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors("#EE6FF8", "#DDDDDD", "#626262", "•")
    }
}

impl Theme {
    /// Builds a theme from the three foreground colours and a paginator glyph.
    pub fn from_colors(focused: &str, blurred: &str, dim: &str, dot: &str) -> Self {
        let focused = Style::new().bold(true).foreground(Color::from(focused));
        let blurred = Style::new().foreground(Color::from(blurred));
        let placeholder = Style::new().foreground(Color::from(dim));

        Self {
            paginator_active: focused.clone(),
            paginator_inactive: placeholder.clone(),
            focused,
            blurred,
            placeholder,
            dot: dot.to_string(),
        }
    }

    /// Style for a widget in the given focus state.
    pub fn widget_style(&self, focused: bool) -> &Style {
        if focused {
            &self.focused
        } else {
            &self.blurred
        }
    }

    /// The current-page dot, styled.
    pub fn active_dot(&self) -> String {
        self.paginator_active.render(&self.dot)
    }

    /// An other-page dot, styled.
    pub fn inactive_dot(&self) -> String {
        self.paginator_inactive.render(&self.dot)
    }
}

/// Explicit state shared across an application's widgets.
#[derive(Debug, Clone, Default)]
pub struct Context {
    theme: Theme,
}

impl Context {
    /// Creates a context with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context around a prepared theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Creates a context from the `[theme]` section of a configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::config::Config;
    /// use orvyn::context::Context;
    ///
    /// let config = Config::from_toml_str("[theme]\ndot = \"*\"").unwrap();
    /// let ctx = Context::from_config(&config);
    /// assert_eq!(ctx.theme().dot, "*");
    /// ```
    pub fn from_config(config: &Config) -> Self {
        Self::with_theme(config.theme.to_theme())
    }

    /// The theme widgets copy their styles from at construction.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme. Widgets already built keep the styles they copied.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
