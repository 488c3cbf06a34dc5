//! Key bindings and key matching.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the short help text shown to users. Bindings are matched against
//! the `KeyMsg` values delivered by the bubbletea-rs runtime.
//!
//! ```rust
//! use orvyn::key::{self, Binding};
//! use crossterm::event::KeyCode;
//!
//! let down = Binding::new(vec![KeyCode::Down, KeyCode::Char('j')]).with_help("↓/j", "down");
//! let quit = key::new_binding(vec![
//!     key::with_keys_str(&["ctrl+c", "q"]),
//!     key::with_help("q", "quit"),
//! ]);
//! assert_eq!(down.keys().len(), 2);
//! assert_eq!(quit.help().desc, "quit");
//! ```

use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use thiserror::Error;

/// A single key combination: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held, `NONE` for a bare key.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and its modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Reports whether this key press is the one described by `msg`.
    ///
    /// Shift is ignored for character keys bound without modifiers, since
    /// terminals report `G` as `Char('G')` together with `SHIFT`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }

        if self.modifiers == msg.modifiers {
            return true;
        }

        matches!(self.code, KeyCode::Char(_))
            && self.modifiers.is_empty()
            && msg.modifiers.difference(KeyModifiers::SHIFT).is_empty()
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Keys as shown to the user, for example `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding without help text.
    ///
    /// Accepts anything convertible into a [`KeyPress`]: bare `KeyCode`s or
    /// `(KeyCode, KeyModifiers)` pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::key::Binding;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
    /// let msg = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::CONTROL };
    /// assert!(save.matches(&msg));
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Builds a binding from key strings such as `"up"`, `"k"` or `"ctrl+c"`.
    pub fn from_strs<S: AsRef<str>>(keys: &[S]) -> Result<Self, ParseKeyError> {
        let keys = keys
            .iter()
            .map(|k| parse_key(k.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(keys))
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Replaces the bound key presses. The help text is left as is.
    pub fn set_keys(&mut self, keys: Vec<KeyPress>) {
        self.keys = keys;
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Replaces the help text.
    pub fn set_help(&mut self, key: impl Into<String>, desc: impl Into<String>) {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding. A disabled binding never matches.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and one of its keys is `msg`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
pub enum BindingOpt {
    /// Replaces the keys.
    Keys(Vec<KeyPress>),
    /// Sets the help text.
    Help(Help),
    /// Starts the binding disabled.
    Disabled,
}

/// Builds a binding from options, applied in order.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();

    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }

    binding
}

/// Keys option from key codes or key presses.
pub fn with_keys<K: Into<KeyPress>>(keys: Vec<K>) -> BindingOpt {
    BindingOpt::Keys(keys.into_iter().map(Into::into).collect())
}

/// Key strings that fail to parse are skipped; use [`Binding::from_strs`]
/// when user input must be validated.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|k| parse_key(k).ok()).collect())
}

/// Help text option.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.into(),
        desc: desc.into(),
    })
}

/// Option that starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Reports whether `msg` is a key message matching any of `bindings`.
pub fn matches(msg: &Msg, bindings: &[&Binding]) -> bool {
    msg.downcast_ref::<KeyMsg>()
        .is_some_and(|key| bindings.iter().any(|b| b.matches(key)))
}

/// Like [`matches`] for a key message that has already been unwrapped.
pub fn matches_binding(key: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(key)
}

/// Why a key string such as `"ctrl+x"` could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("empty key string")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// Parses a key description such as `"enter"`, `"shift+tab"` or `"alt+x"`.
pub fn parse_key(s: &str) -> Result<KeyPress, ParseKeyError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseKeyError::Empty);
    }

    // "+" on its own, or as the final key in "ctrl++", names the plus key.
    let (prefix, name) = match s.strip_suffix("++") {
        Some(prefix) => (Some(prefix), "+"),
        None if s == "+" => (None, "+"),
        None => match s.rsplit_once('+') {
            Some((prefix, name)) => (Some(prefix), name),
            None => (None, s),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    if let Some(prefix) = prefix {
        for part in prefix.split('+') {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                "super" => KeyModifiers::SUPER,
                _ => return Err(ParseKeyError::UnknownModifier(part.to_string())),
            };
        }
    }

    let code = match name.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => {
            modifiers.remove(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pgdn" | "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        lower => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    Some(n) if (1..=24).contains(&n) => KeyCode::F(n),
                    _ => return Err(ParseKeyError::UnknownKey(name.to_string())),
                },
            }
        }
    };

    Ok(KeyPress::new(code, modifiers))
}

/// Implemented by key maps that can describe themselves for a help view.
pub trait KeyMap {
    fn short_help(&self) -> Vec<&Binding>;

    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
