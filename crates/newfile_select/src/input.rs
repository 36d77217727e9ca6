use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use newfile_domain::PickerEvent;

/// Single-line text buffer behind the picker input.
///
/// Translates terminal events into [`PickerEvent`]s. `ValueChanged` is only
/// emitted when the text actually changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    chars: Vec<char>,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// Text before the cursor, used to place the terminal cursor.
    pub fn before_cursor(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }

    pub fn apply(&mut self, event: &Event) -> Option<PickerEvent> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.apply_key(key),
            Event::Paste(text) => {
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                self.edit(|line| {
                    for c in text.chars() {
                        line.insert(c);
                    }
                })
            }
            _ => None,
        }
    }

    fn apply_key(&mut self, key: &KeyEvent) -> Option<PickerEvent> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => Some(PickerEvent::Accepted),
            KeyCode::Esc => Some(PickerEvent::Dismissed),
            KeyCode::Char('c') if ctrl => Some(PickerEvent::Dismissed),
            KeyCode::Char('d') if ctrl && self.chars.is_empty() => Some(PickerEvent::Dismissed),
            KeyCode::Char('u') if ctrl => self.edit(|line| {
                line.chars.drain(..line.cursor);
                line.cursor = 0;
            }),
            KeyCode::Char('w') if ctrl => self.edit(InputLine::delete_word),
            KeyCode::Char('a') if ctrl => self.move_to(0),
            KeyCode::Char('e') if ctrl => self.move_to(self.chars.len()),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => self.edit(|line| line.insert(c)),
            KeyCode::Backspace => self.edit(|line| {
                if line.cursor > 0 {
                    line.cursor -= 1;
                    line.chars.remove(line.cursor);
                }
            }),
            KeyCode::Delete => self.edit(|line| {
                if line.cursor < line.chars.len() {
                    line.chars.remove(line.cursor);
                }
            }),
            KeyCode::Left => self.move_to(self.cursor.saturating_sub(1)),
            KeyCode::Right => self.move_to((self.cursor + 1).min(self.chars.len())),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.chars.len()),
            _ => None,
        }
    }

    fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Deletes back to the previous path separator or whitespace.
    fn delete_word(&mut self) {
        let is_boundary = |c: &char| std::path::is_separator(*c) || c.is_whitespace();
        let mut start = self.cursor;
        while start > 0 && is_boundary(&self.chars[start - 1]) {
            start -= 1;
        }
        while start > 0 && !is_boundary(&self.chars[start - 1]) {
            start -= 1;
        }
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    fn move_to(&mut self, cursor: usize) -> Option<PickerEvent> {
        self.cursor = cursor;
        None
    }

    fn edit(&mut self, f: impl FnOnce(&mut Self)) -> Option<PickerEvent> {
        let before = self.chars.clone();
        f(self);
        (self.chars != before).then(|| PickerEvent::ValueChanged(self.value()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn typed(text: &str) -> (InputLine, Vec<Option<PickerEvent>>) {
        let mut line = InputLine::new();
        let events = text.chars().map(|c| line.apply(&key(KeyCode::Char(c)))).collect();
        (line, events)
    }

    #[test]
    fn test_typing_emits_full_value() {
        let (fixture, actual) = typed("ab/");
        let expected = vec![
            Some(PickerEvent::ValueChanged("a".to_string())),
            Some(PickerEvent::ValueChanged("ab".to_string())),
            Some(PickerEvent::ValueChanged("ab/".to_string())),
        ];
        assert_eq!(actual, expected);
        assert_eq!(fixture.value(), "ab/");
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut fixture = InputLine::new();
        assert_eq!(fixture.apply(&key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_editing_in_the_middle() {
        let (mut fixture, _) = typed("ac");
        fixture.apply(&key(KeyCode::Left));
        let actual = fixture.apply(&key(KeyCode::Char('b')));

        assert_eq!(actual, Some(PickerEvent::ValueChanged("abc".to_string())));
        assert_eq!(fixture.before_cursor(), "ab");

        let actual = fixture.apply(&key(KeyCode::Delete));
        assert_eq!(actual, Some(PickerEvent::ValueChanged("ab".to_string())));
    }

    #[test]
    fn test_accept_and_dismiss_keys() {
        let (mut fixture, _) = typed("a");
        assert_eq!(fixture.apply(&key(KeyCode::Enter)), Some(PickerEvent::Accepted));
        assert_eq!(fixture.apply(&key(KeyCode::Esc)), Some(PickerEvent::Dismissed));
        assert_eq!(fixture.apply(&ctrl('c')), Some(PickerEvent::Dismissed));
        // Ctrl-D only dismisses an empty line.
        assert_eq!(fixture.apply(&ctrl('d')), None);
    }

    #[test]
    fn test_ctrl_w_deletes_path_segment() {
        let (mut fixture, _) = typed("src/components/");
        let actual = fixture.apply(&ctrl('w'));
        assert_eq!(actual, Some(PickerEvent::ValueChanged("src/".to_string())));
    }

    #[test]
    fn test_ctrl_u_clears_before_cursor() {
        let (mut fixture, _) = typed("abc");
        let actual = fixture.apply(&ctrl('u'));
        assert_eq!(actual, Some(PickerEvent::ValueChanged(String::new())));
    }

    #[test]
    fn test_paste_inserts_without_newlines() {
        let mut fixture = InputLine::new();
        let actual = fixture.apply(&Event::Paste("src/a.ts\n".to_string()));
        assert_eq!(actual, Some(PickerEvent::ValueChanged("src/a.ts".to_string())));
    }
}
