//! TOML configuration.
//!
//! Every field is optional; missing fields take the built-in defaults.
//!
//! ```toml
//! [theme]
//! focused = "#EE6FF8"
//! blurred = "#DDDDDD"
//! placeholder = "#626262"
//! dot = "•"
//!
//! [list]
//! infinite_scroll = true
//! auto_focus_new_item = false
//! filterable = true
//! filter = "substring"   # or "fuzzy"
//! placeholder = "Type / to search"
//!
//! [list.keys]
//! cursor_up = ["up", "ctrl+p"]
//! cursor_down = ["down", "ctrl+n"]
//! ```

use crate::context::Theme;
use crate::filter::FilterPolicy;
use crate::key::ParseKeyError;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid key for `{action}`: {source}")]
    InvalidKey {
        action: &'static str,
        #[source]
        source: ParseKeyError,
    },
}

/// Top-level configuration.
///
/// # Examples
///
/// ```rust
/// use orvyn::config::{Config, FilterKind};
///
/// let config = Config::from_toml_str("[list]\nfilter = \"substring\"").unwrap();
/// assert_eq!(config.list.filter, FilterKind::Substring);
/// assert!(config.list.filterable);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The `[theme]` section.
    pub theme: ThemeConfig,
    /// The `[list]` section.
    pub list: ListConfig,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&text)?;
        debug!("config: loaded {}", path.display());
        Ok(config)
    }
}

/// Colours and glyphs of the [`Theme`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Foreground of focused widgets, as a hex colour.
    pub focused: String,
    /// Foreground of blurred widgets.
    pub blurred: String,
    /// Foreground of placeholder text and inactive paginator dots.
    pub placeholder: String,
    /// Paginator dot glyph.
    pub dot: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            focused: "#EE6FF8".to_string(),
            blurred: "#DDDDDD".to_string(),
            placeholder: "#626262".to_string(),
            dot: "•".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Builds the theme these settings describe.
    pub fn to_theme(&self) -> Theme {
        Theme::from_colors(&self.focused, &self.blurred, &self.placeholder, &self.dot)
    }
}

/// Which built-in filter a list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    Fuzzy,
    Substring,
}

impl From<FilterKind> for FilterPolicy {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Fuzzy => FilterPolicy::Fuzzy,
            FilterKind::Substring => FilterPolicy::Substring,
        }
    }
}

/// Behaviour of a [`widgetlist::Model`](crate::widgetlist::Model).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Wrap around at either end.
    pub infinite_scroll: bool,
    /// Select items as they are appended or inserted.
    pub auto_focus_new_item: bool,
    /// Honour the filter key.
    pub filterable: bool,
    /// Which filter runs on apply.
    pub filter: FilterKind,
    /// Text of the filter line while no query is edited.
    pub placeholder: String,
    /// The `[list.keys]` section.
    pub keys: KeysConfig,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            infinite_scroll: false,
            auto_focus_new_item: false,
            filterable: true,
            filter: FilterKind::default(),
            placeholder: "Press '/' to filter".to_string(),
            keys: KeysConfig::default(),
        }
    }
}

/// Key strings replacing the default keys of list bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    pub cursor_up: Option<Vec<String>>,
    pub cursor_down: Option<Vec<String>>,
    pub next_page: Option<Vec<String>>,
    pub prev_page: Option<Vec<String>>,
    pub go_to_start: Option<Vec<String>>,
    pub go_to_end: Option<Vec<String>>,
    pub enter_filter: Option<Vec<String>>,
    pub apply_filter: Option<Vec<String>>,
    pub clear_filter: Option<Vec<String>>,
}
