/// Horizontal scroll state of a single-line field, all in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretLayout {
    /// Advance of the text before the caret.
    pub caret_x: f32,
    pub caret_w: f32,
    /// Advance of the whole text.
    pub text_w: f32,
    /// Visible width inside the padding.
    pub inner_w: f32,
}

/// Returns the scroll offset that keeps the caret inside `0..inner_w`.
///
/// Moves as little as possible from `offset`, then pulls back so no blank
/// space is scrolled in past the end of the text.
pub fn scroll_to_caret(offset: f32, l: CaretLayout) -> f32 {
    let mut offset = offset.max(0.0);
    if l.caret_x + l.caret_w - offset > l.inner_w {
        offset = l.caret_x + l.caret_w - l.inner_w;
    } else if l.caret_x < offset {
        offset = l.caret_x;
    }
    let max_offset = (l.text_w + l.caret_w - l.inner_w).max(0.0);
    offset.clamp(0.0, max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(caret_x: f32, text_w: f32) -> CaretLayout {
        CaretLayout {
            caret_x,
            caret_w: 2.0,
            text_w,
            inner_w: 100.0,
        }
    }

    fn assert_visible(offset: f32, l: CaretLayout) {
        assert!(offset >= 0.0);
        assert!(offset <= l.caret_x, "caret left of view: {offset} > {}", l.caret_x);
        assert!(l.caret_x + l.caret_w - offset <= l.inner_w + 1e-3);
    }

    #[test]
    fn test_short_text_never_scrolls() {
        let l = layout(40.0, 60.0);
        assert_eq!(scroll_to_caret(0.0, l), 0.0);
        // stale offset from a longer text snaps back
        assert_eq!(scroll_to_caret(30.0, l), 0.0);
    }

    #[test]
    fn test_caret_past_right_edge() {
        let l = layout(150.0, 150.0);
        let off = scroll_to_caret(0.0, l);
        assert_eq!(off, 52.0);
        assert_visible(off, l);
    }

    #[test]
    fn test_caret_past_left_edge() {
        // long text, caret moved back to the start of the visible window
        let l = layout(20.0, 300.0);
        let off = scroll_to_caret(80.0, l);
        assert_eq!(off, 20.0);
        assert_visible(off, l);
    }

    #[test]
    fn test_caret_inside_keeps_offset() {
        let l = layout(120.0, 300.0);
        assert_eq!(scroll_to_caret(50.0, l), 50.0);
    }

    #[test]
    fn test_deleting_tail_pulls_view_back() {
        // text shrank to 130px with caret at its end; old offset was 150
        let l = layout(130.0, 130.0);
        let off = scroll_to_caret(150.0, l);
        assert_eq!(off, 32.0);
        assert_visible(off, l);
    }

    #[test]
    fn test_visibility_holds_across_positions() {
        let text_w = 500.0;
        let mut off = 0.0;
        for step in 0..=50 {
            let l = layout(step as f32 * 10.0, text_w);
            off = scroll_to_caret(off, l);
            assert_visible(off, l);
        }
        for step in (0..=50).rev() {
            let l = layout(step as f32 * 10.0, text_w);
            off = scroll_to_caret(off, l);
            assert_visible(off, l);
        }
    }
}
