//! Text editing on a single control value.
//!
//! Edits never mutate the stored form record. They take the current value
//! and cursor and return the new pair, which the handler feeds back through
//! the change handler.

/// One editing keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    DeleteBack,
    DeleteForward,
    DeleteWordBack,
    Left,
    Right,
    Home,
    End,
}

impl Edit {
    /// Whether the edit can change the value (as opposed to only moving).
    pub fn modifies(self) -> bool {
        matches!(
            self,
            Edit::Insert(_) | Edit::DeleteBack | Edit::DeleteForward | Edit::DeleteWordBack
        )
    }
}

/// Apply `edit` at byte position `cursor`, returning the new value and cursor.
pub fn apply(value: &str, cursor: usize, edit: Edit) -> (String, usize) {
    let mut text = value.to_string();
    let mut cursor = cursor.min(text.len());

    match edit {
        Edit::Insert(c) => {
            text.insert(cursor, c);
            cursor += c.len_utf8();
        }
        Edit::DeleteBack => {
            if cursor > 0 {
                let prev = prev_boundary(&text, cursor);
                text.drain(prev..cursor);
                cursor = prev;
            }
        }
        Edit::DeleteForward => {
            if cursor < text.len() {
                let next = next_boundary(&text, cursor);
                text.drain(cursor..next);
            }
        }
        Edit::DeleteWordBack => {
            let mut pos = cursor;
            // Skip trailing whitespace
            while pos > 0 && text[..pos].ends_with(char::is_whitespace) {
                pos = prev_boundary(&text, pos);
            }
            // Skip word characters
            while pos > 0 && !text[..pos].ends_with(char::is_whitespace) {
                pos = prev_boundary(&text, pos);
            }
            text.drain(pos..cursor);
            cursor = pos;
        }
        Edit::Left => {
            if cursor > 0 {
                cursor = prev_boundary(&text, cursor);
            }
        }
        Edit::Right => {
            if cursor < text.len() {
                cursor = next_boundary(&text, cursor);
            }
        }
        Edit::Home => cursor = line_start(&text, cursor),
        Edit::End => cursor = line_end(&text, cursor),
    }

    (text, cursor)
}

/// Insert `text` at byte position `cursor` in a single copy.
pub fn insert_str(value: &str, cursor: usize, text: &str) -> (String, usize) {
    let mut cursor = cursor.min(value.len());
    while !value.is_char_boundary(cursor) {
        cursor -= 1;
    }
    let mut out = String::with_capacity(value.len() + text.len());
    out.push_str(&value[..cursor]);
    out.push_str(text);
    out.push_str(&value[cursor..]);
    (out, cursor + text.len())
}

fn prev_boundary(text: &str, cursor: usize) -> usize {
    text[..cursor]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| cursor + i)
        .unwrap_or(text.len())
}

// Home/End stay on the cursor's line in the multi-line message.
fn line_start(text: &str, cursor: usize) -> usize {
    text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

fn line_end(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .find('\n')
        .map(|i| cursor + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let (text, cur) = apply("", 0, Edit::Insert('A'));
        assert_eq!((text.as_str(), cur), ("A", 1));
        let (text, cur) = apply(&text, cur, Edit::Insert('é'));
        assert_eq!((text.as_str(), cur), ("Aé", 3));
        let (text, cur) = apply(&text, cur, Edit::DeleteBack);
        assert_eq!((text.as_str(), cur), ("A", 1));
        let (text, cur) = apply(&text, 0, Edit::DeleteForward);
        assert_eq!((text.as_str(), cur), ("", 0));
    }

    #[test]
    fn test_delete_back_at_start_is_noop() {
        assert_eq!(apply("abc", 0, Edit::DeleteBack), ("abc".to_string(), 0));
    }

    #[test]
    fn test_cursor_movement_respects_chars() {
        let text = "añb";
        let (_, cur) = apply(text, 1, Edit::Right);
        assert_eq!(cur, 3);
        let (_, cur) = apply(text, cur, Edit::Left);
        assert_eq!(cur, 1);
        let (_, cur) = apply(text, 1, Edit::End);
        assert_eq!(cur, text.len());
        let (_, cur) = apply(text, 3, Edit::Home);
        assert_eq!(cur, 0);
    }

    #[test]
    fn test_home_end_stay_on_line() {
        let text = "first\nsecond";
        assert_eq!(apply(text, 8, Edit::Home).1, 6);
        assert_eq!(apply(text, 2, Edit::End).1, 5);
    }

    #[test]
    fn test_delete_word_back() {
        let (text, cur) = apply("hello big world  ", 17, Edit::DeleteWordBack);
        assert_eq!((text.as_str(), cur), ("hello big ", 10));
        let (text, cur) = apply("one", 3, Edit::DeleteWordBack);
        assert_eq!((text.as_str(), cur), ("", 0));
    }

    #[test]
    fn test_stale_cursor_is_clamped() {
        let (text, cur) = apply("ab", 10, Edit::Insert('c'));
        assert_eq!((text.as_str(), cur), ("abc", 3));
    }

    #[test]
    fn test_insert_str() {
        assert_eq!(insert_str("ad", 1, "bc"), ("abcd".to_string(), 3));
        assert_eq!(insert_str("ab", 10, "é"), ("abé".to_string(), 4));
        // inside a multi-byte char snaps back to its start
        assert_eq!(insert_str("é", 1, "x"), ("xé".to_string(), 1));
    }

    #[test]
    fn test_modifies() {
        assert!(Edit::Insert('x').modifies());
        assert!(Edit::DeleteWordBack.modifies());
        assert!(!Edit::Left.modifies());
        assert!(!Edit::End.modifies());
    }
}
