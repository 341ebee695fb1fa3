//! Text input widget
//!
//! Single-line field with a cursor. The cursor counts characters, not bytes,
//! so amounts typed with a `₹` prefix edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::theme::Palette;

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    pub focused: bool,
    pub placeholder: String,
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Replace the content and put the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    /// Themed widget for drawing this input
    pub fn widget<'a>(&'a self, palette: &'a Palette) -> TextInputWidget<'a> {
        TextInputWidget {
            input: self,
            palette,
        }
    }
}

/// Renders a [`TextInput`] with the active palette
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    palette: &'a Palette,
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input = self.input;
        let palette = self.palette;

        let label_width = if input.label.is_empty() {
            0
        } else {
            input.label.chars().count() as u16 + 2
        };
        let input_start = area.x + label_width;

        if !input.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(input.label.as_str(), Style::default().fg(palette.accent)),
                Span::styled(": ", Style::default().fg(palette.dim)),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let (text, style) = if input.content.is_empty() && !input.focused {
            (input.placeholder.as_str(), Style::default().fg(palette.dim))
        } else {
            (input.content.as_str(), Style::default().fg(palette.text))
        };
        let width = area.width.saturating_sub(label_width) as usize;
        buf.set_stringn(input_start, area.y, text, width, style);

        if input.focused {
            let cursor_x = input_start + input.cursor as u16;
            if cursor_x < area.x + area.width {
                let under = input.content.chars().nth(input.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    under.to_string(),
                    Style::default()
                        .fg(palette.background)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "12.5".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.5");

        input.backspace();
        assert_eq!(input.value(), "12.");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("₹50");
        assert_eq!(input.cursor, 3);

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "50");

        input.insert('$');
        assert_eq!(input.value(), "$50");
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "$5");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);

        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);

        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }
}
