use unicode_segmentation::UnicodeSegmentation;

/// Start of the grapheme cluster ending at or before `byte`; 0 at the start.
pub fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            break;
        }
        last = i;
    }
    last
}

/// First grapheme boundary strictly after `byte`; `text.len()` at the end.
pub fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            return i;
        }
    }
    text.len()
}

/// Snaps `byte` back onto the nearest grapheme boundary at or before it.
pub fn clamp_to_grapheme_boundary(text: &str, byte: usize) -> usize {
    if byte >= text.len() {
        return text.len();
    }
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            break;
        }
        last = i;
    }
    last
}

/// Snaps `byte` forward onto the nearest grapheme boundary at or after it.
pub fn ceil_to_grapheme_boundary(text: &str, byte: usize) -> usize {
    if byte == 0 {
        return 0;
    }
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            return i;
        }
    }
    text.len()
}

pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_ascii() {
        let t = "abc";
        assert_eq!(prev_grapheme_boundary(t, 0), 0);
        assert_eq!(prev_grapheme_boundary(t, 2), 1);
        assert_eq!(next_grapheme_boundary(t, 2), 3);
        assert_eq!(next_grapheme_boundary(t, 3), 3);
    }

    #[test]
    fn test_boundaries_cluster() {
        // thumbs up + skin tone modifier is a single cluster
        let t = "A\u{1F44D}\u{1F3FD}B";
        let after_emoji = "A\u{1F44D}\u{1F3FD}".len();
        assert_eq!(next_grapheme_boundary(t, 1), after_emoji);
        assert_eq!(prev_grapheme_boundary(t, after_emoji), 1);
        assert_eq!(clamp_to_grapheme_boundary(t, 3), 1);
        assert_eq!(clamp_to_grapheme_boundary(t, 99), t.len());
        assert_eq!(ceil_to_grapheme_boundary(t, 3), after_emoji);
        assert_eq!(ceil_to_grapheme_boundary(t, 1), 1);
        assert_eq!(ceil_to_grapheme_boundary(t, 0), 0);
        assert_eq!(ceil_to_grapheme_boundary(t, 99), t.len());
        assert_eq!(grapheme_count(t), 3);
    }
}
