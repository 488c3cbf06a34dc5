//! Single-line query input shown above a filterable list.

use crate::context::Theme;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub(super) struct FilterInput {
    value: String,
    /// Cursor position in graphemes.
    position: usize,
    focused: bool,
    /// Shown before the query while it is edited.
    pub prompt: String,
    /// Shown instead of the prompt while nothing is edited.
    pub placeholder: String,
}

impl Default for FilterInput {
    fn default() -> Self {
        Self {
            value: String::new(),
            position: 0,
            focused: false,
            prompt: "Filter: ".to_string(),
            placeholder: "Press '/' to filter".to_string(),
        }
    }
}

impl FilterInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.position = self.grapheme_count();
    }

    /// Empties the query and blurs the input.
    pub fn reset(&mut self) {
        self.value.clear();
        self.position = 0;
        self.focused = false;
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.position = self.grapheme_count();
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Rows taken by the input.
    pub fn height(&self) -> usize {
        1
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Applies an editing key. Returns whether the value changed.
    pub fn handle_key(&mut self, key: &KeyMsg) -> bool {
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let position = self.position.min(graphemes.len());

        match key.key {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut head = graphemes[..position].concat();
                head.push(c);
                let tail = graphemes[position..].concat();

                self.position = head.graphemes(true).count();
                self.value = head + &tail;
                true
            }
            KeyCode::Backspace if position > 0 => {
                self.value = [&graphemes[..position - 1], &graphemes[position..]]
                    .concat()
                    .concat();
                self.position = position - 1;
                true
            }
            KeyCode::Delete if position < graphemes.len() => {
                self.value = [&graphemes[..position], &graphemes[position + 1..]]
                    .concat()
                    .concat();
                true
            }
            KeyCode::Left => {
                self.position = position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.position = (position + 1).min(graphemes.len());
                false
            }
            KeyCode::Home => {
                self.position = 0;
                false
            }
            KeyCode::End => {
                self.position = graphemes.len();
                false
            }
            _ => false,
        }
    }

    pub fn view(&self, theme: &Theme) -> String {
        if !self.focused {
            if self.value.is_empty() {
                return theme.placeholder.render(&self.placeholder);
            }
            return format!("{}{}", self.prompt, self.value);
        }

        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let position = self.position.min(graphemes.len());
        let under = graphemes.get(position).copied().unwrap_or(" ");
        let after = if position < graphemes.len() {
            graphemes[position + 1..].concat()
        } else {
            String::new()
        };

        format!(
            "{}{}{}{}",
            theme.focused.render(&self.prompt),
            graphemes[..position].concat(),
            Style::new().underline(true).render(under),
            after
        )
    }
}
