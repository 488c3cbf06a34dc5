//! Key bindings for list navigation and filtering.
//!
//! - **Cursor**: `↑/k`, `↓/j`
//! - **Pages**: `→/l/pgdn`, `←/h/pgup`
//! - **Jumps**: `g/home`, `G/end`
//! - **Filter**: `/` edits the query, `enter` applies it, `esc` clears it

use crate::config::{ConfigError, KeysConfig};
use crate::key::{self, Binding};
use crossterm::event::KeyCode;

/// Key bindings of a [`Model`](super::Model).
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Selects the previous visible item.
    pub cursor_up: Binding,
    /// Selects the next visible item.
    pub cursor_down: Binding,
    /// Moves the selection one page forward.
    pub next_page: Binding,
    /// Moves the selection one page back.
    pub prev_page: Binding,
    /// Selects the first visible item.
    pub go_to_start: Binding,
    /// Selects the last visible item.
    pub go_to_end: Binding,
    /// Starts editing the filter query.
    pub enter_filter: Binding,
    /// Commits the query being edited.
    pub apply_filter: Binding,
    /// Leaves filtering, both while editing and once applied.
    pub clear_filter: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            next_page: Binding::new(vec![KeyCode::Right, KeyCode::Char('l'), KeyCode::PageDown])
                .with_help("→/l/pgdn", "next page"),
            prev_page: Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h/pgup", "prev page"),
            go_to_start: Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            enter_filter: Binding::new(vec![KeyCode::Char('/')]).with_help("/", "filter"),
            apply_filter: Binding::new(vec![KeyCode::Enter]).with_help("enter", "apply filter"),
            clear_filter: Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear filter"),
        }
    }
}

impl ListKeyMap {
    /// Replaces the keys of every binding named in `keys`.
    ///
    /// Nothing is changed if any key string fails to parse. The help text
    /// keeps its description and shows the new keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::config::KeysConfig;
    /// use orvyn::widgetlist::ListKeyMap;
    ///
    /// let keys = KeysConfig {
    ///     cursor_down: Some(vec!["ctrl+n".to_string()]),
    ///     ..KeysConfig::default()
    /// };
    /// let keymap = ListKeyMap::default().with_overrides(&keys).unwrap();
    /// assert_eq!(keymap.cursor_down.help().key, "ctrl+n");
    /// assert_eq!(keymap.cursor_down.help().desc, "down");
    /// ```
    pub fn with_overrides(mut self, keys: &KeysConfig) -> Result<Self, ConfigError> {
        let overrides = [
            ("cursor_up", &mut self.cursor_up, &keys.cursor_up),
            ("cursor_down", &mut self.cursor_down, &keys.cursor_down),
            ("next_page", &mut self.next_page, &keys.next_page),
            ("prev_page", &mut self.prev_page, &keys.prev_page),
            ("go_to_start", &mut self.go_to_start, &keys.go_to_start),
            ("go_to_end", &mut self.go_to_end, &keys.go_to_end),
            ("enter_filter", &mut self.enter_filter, &keys.enter_filter),
            ("apply_filter", &mut self.apply_filter, &keys.apply_filter),
            ("clear_filter", &mut self.clear_filter, &keys.clear_filter),
        ];

        for (action, binding, custom) in overrides {
            let Some(custom) = custom else {
                continue;
            };

            let parsed = Binding::from_strs(custom)
                .map_err(|source| ConfigError::InvalidKey { action, source })?;
            let desc = binding.help().desc.clone();

            binding.set_keys(parsed.keys().to_vec());
            binding.set_help(custom.join("/"), desc);
        }

        Ok(self)
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.enter_filter]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.next_page,
                &self.prev_page,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.enter_filter, &self.apply_filter, &self.clear_filter],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::KeyModifiers;

    fn key_msg(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_defaults() {
        let keys = ListKeyMap::default();
        assert!(keys.cursor_down.matches(&key_msg(KeyCode::Char('j'))));
        assert!(keys.next_page.matches(&key_msg(KeyCode::PageDown)));
        assert!(keys.clear_filter.matches(&key_msg(KeyCode::Esc)));
        assert!(!keys.apply_filter.matches(&key_msg(KeyCode::Tab)));
    }

    #[test]
    fn test_overrides_replace_keys_and_help() {
        let overrides = KeysConfig {
            cursor_down: Some(vec!["n".to_string(), "ctrl+n".to_string()]),
            ..KeysConfig::default()
        };

        let keys = ListKeyMap::default().with_overrides(&overrides).unwrap();
        assert!(keys.cursor_down.matches(&key_msg(KeyCode::Char('n'))));
        assert!(!keys.cursor_down.matches(&key_msg(KeyCode::Down)));
        assert_eq!(keys.cursor_down.help().key, "n/ctrl+n");
        assert_eq!(keys.cursor_down.help().desc, "down");
        assert!(keys.cursor_up.matches(&key_msg(KeyCode::Up)));
    }

    #[test]
    fn test_invalid_override_is_reported() {
        let overrides = KeysConfig {
            go_to_end: Some(vec!["hyper+x".to_string()]),
            ..KeysConfig::default()
        };

        let err = ListKeyMap::default().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey { action: "go_to_end", .. }));
    }
}
