//! Frame-delta driven timers: held-key repeat and caret blink.
//!
//! Both advance only through `tick(dt)`, so the host's frame clock is the single
//! source of time and tests can step them deterministically.

use textbox_core::input::{Key, KeyEvent};

/// Seconds a key must be held before it starts repeating.
pub const KEY_REPEAT_DELAY: f32 = 0.5;
/// Seconds between repeats once repeating.
pub const KEY_REPEAT_INTERVAL: f32 = 0.05;
/// Seconds per caret blink phase.
pub const CARET_BLINK_PERIOD: f32 = 0.5;

#[derive(Clone, Debug, Default)]
pub struct KeyRepeat {
    held: Option<KeyEvent>,
    held_for: f32,
}

impl KeyRepeat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, ev: KeyEvent) {
        self.held = Some(ev);
        self.held_for = 0.0;
    }

    /// Only a release of the held key stops the repeat.
    pub fn release(&mut self, key: &Key) {
        if self.held.as_ref().is_some_and(|h| &h.key == key) {
            self.cancel();
        }
    }

    pub fn cancel(&mut self) {
        self.held = None;
        self.held_for = 0.0;
    }

    pub fn held(&self) -> Option<&KeyEvent> {
        self.held.as_ref()
    }

    /// Returns the held key when a repeat is due this frame (at most one per
    /// call), then accumulates `dt`.
    pub fn tick(&mut self, dt: f32) -> Option<KeyEvent> {
        let held = self.held.as_ref()?;
        let fired = if self.held_for > KEY_REPEAT_DELAY {
            self.held_for -= KEY_REPEAT_INTERVAL;
            Some(held.clone())
        } else {
            None
        };
        self.held_for += dt.max(0.0);
        fired
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CaretBlink {
    clock: f32,
    visible: bool,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self {
            clock: 0.0,
            visible: true,
        }
    }
}

impl CaretBlink {
    pub fn reset(&mut self) {
        self.clock = 0.0;
        self.visible = true;
    }

    pub fn tick(&mut self, dt: f32) {
        self.clock += dt.max(0.0);
        if self.clock >= CARET_BLINK_PERIOD {
            self.clock -= CARET_BLINK_PERIOD;
            self.visible = !self.visible;
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_waits_for_delay() {
        let mut r = KeyRepeat::new();
        r.press(KeyEvent::pressed(Key::Backspace));
        // 0.0 -> 0.25 -> 0.5: still not strictly past the delay
        assert!(r.tick(0.25).is_none());
        assert!(r.tick(0.25).is_none());
        assert!(r.tick(0.1).is_none());
        // held_for is now 0.6
        let fired = r.tick(0.0).map(|e| e.key);
        assert_eq!(fired, Some(Key::Backspace));
    }

    #[test]
    fn test_repeat_fires_once_per_frame() {
        let mut r = KeyRepeat::new();
        r.press(KeyEvent::pressed(Key::ArrowLeft));
        assert!(r.tick(2.0).is_none());
        // far past the delay, but one repeat per call
        assert!(r.tick(0.0).is_some());
        assert!(r.tick(0.0).is_some());
    }

    #[test]
    fn test_release_only_matching_key() {
        let mut r = KeyRepeat::new();
        r.press(KeyEvent::pressed(Key::Character('a')));
        r.release(&Key::Character('b'));
        assert!(r.held().is_some());
        r.release(&Key::Character('a'));
        assert!(r.held().is_none());
        assert!(r.tick(1.0).is_none());
    }

    #[test]
    fn test_press_restarts_delay() {
        let mut r = KeyRepeat::new();
        r.press(KeyEvent::pressed(Key::Character('a')));
        r.tick(0.6);
        r.press(KeyEvent::pressed(Key::Character('b')));
        assert!(r.tick(0.0).is_none());
    }

    #[test]
    fn test_blink_toggles_every_period() {
        let mut b = CaretBlink::default();
        assert!(b.visible());
        b.tick(0.3);
        assert!(b.visible());
        b.tick(0.3);
        assert!(!b.visible());
        b.tick(0.5);
        assert!(b.visible());
        b.tick(0.5);
        b.reset();
        assert!(b.visible());
    }
}
