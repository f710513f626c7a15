use textbox_text::graphemes::{
    ceil_to_grapheme_boundary, clamp_to_grapheme_boundary, next_grapheme_boundary,
    prev_grapheme_boundary,
};

/// Single-line text plus a caret.
///
/// The caret is a byte offset into `text` and always sits on a grapheme
/// boundary in `0..=text.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    caret: usize,
}

impl EditBuffer {
    /// Caret starts at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.len();
        Self { text, caret }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn before_caret(&self) -> &str {
        &self.text[..self.caret]
    }

    /// Replaces the whole text and moves the caret to its end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.text.len();
    }

    pub fn set_caret(&mut self, byte: usize) {
        self.caret = clamp_to_grapheme_boundary(&self.text, byte);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    pub fn insert(&mut self, s: &str) -> bool {
        if s.is_empty() {
            return false;
        }
        self.text.insert_str(self.caret, s);
        // inserted text can merge with the cluster after it (combining marks);
        // the caret then lands after the merged cluster
        self.caret = ceil_to_grapheme_boundary(&self.text, self.caret + s.len());
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let prev = prev_grapheme_boundary(&self.text, self.caret);
        self.text.replace_range(prev..self.caret, "");
        self.caret = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.text.len() {
            return false;
        }
        let next = next_grapheme_boundary(&self.text, self.caret);
        self.text.replace_range(self.caret..next, "");
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret = prev_grapheme_boundary(&self.text, self.caret);
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.caret >= self.text.len() {
            return false;
        }
        self.caret = next_grapheme_boundary(&self.text, self.caret);
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.caret != 0;
        self.caret = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let moved = self.caret != self.text.len();
        self.caret = self.text.len();
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_caret() {
        let mut b = EditBuffer::new("Hllo");
        b.set_caret(1);
        assert!(b.insert("e"));
        assert_eq!(b.text(), "Hello");
        assert_eq!(b.caret(), 2);
        assert!(!b.insert(""));
        assert_eq!(b.caret(), 2);
    }

    #[test]
    fn test_delete_backward() {
        let mut b = EditBuffer::new("Hello");
        assert!(b.delete_backward());
        assert_eq!(b.text(), "Hell");
        assert_eq!(b.caret(), 4);

        b.move_home();
        assert!(!b.delete_backward());
        assert_eq!(b.text(), "Hell");
        assert_eq!(b.caret(), 0);
    }

    #[test]
    fn test_delete_forward() {
        let mut b = EditBuffer::new("abc");
        b.set_caret(1);
        assert!(b.delete_forward());
        assert_eq!(b.text(), "ac");
        assert_eq!(b.caret(), 1);
        b.move_end();
        assert!(!b.delete_forward());
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut b = EditBuffer::new("ab");
        assert!(!b.move_right());
        assert!(b.move_left());
        assert!(b.move_left());
        assert!(!b.move_left());
        assert_eq!(b.caret(), 0);
        assert!(b.move_right());
        assert_eq!(b.caret(), 1);
    }

    #[test]
    fn test_grapheme_delete_and_move() {
        let mut b = EditBuffer::new("A\u{1F44D}\u{1F3FD}B");
        b.move_left();
        assert_eq!(b.caret(), "A\u{1F44D}\u{1F3FD}".len());
        b.delete_backward();
        assert_eq!(b.text(), "AB");
        assert_eq!(b.caret(), 1);
    }

    #[test]
    fn test_set_caret_snaps_inside_cluster() {
        let mut b = EditBuffer::new("\u{00E9}x");
        b.set_caret(1);
        assert_eq!(b.caret(), 0);
        b.set_caret(100);
        assert_eq!(b.caret(), b.text().len());
    }

    #[test]
    fn test_insert_before_combining_mark_advances_caret() {
        let mut b = EditBuffer::new("\u{301}");
        b.move_home();
        assert!(b.insert("e"));
        assert_eq!(b.text(), "e\u{301}");
        assert_eq!(b.caret(), b.text().len());
        b.insert("x");
        assert_eq!(b.text(), "e\u{301}x");
        assert_eq!(b.caret(), b.text().len());
    }

    #[test]
    fn test_clear() {
        let mut b = EditBuffer::new("abc");
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.caret(), 0);
    }
}
