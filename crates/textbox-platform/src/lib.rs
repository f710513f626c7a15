//! Host-loop helpers.
//!
//! A widget only needs two things from the host each frame: the input events
//! that arrived since the last frame and the elapsed time. [`EventQueue`] and
//! [`FrameClock`] provide those; with the `desktop` feature, [`WinitInput`]
//! turns winit window events into [`InputEvent`]s.

use textbox_core::input::InputEvent;
use web_time::Instant;

#[cfg(feature = "desktop")]
mod desktop;
#[cfg(feature = "desktop")]
pub use desktop::{WinitInput, map_key, map_mouse_button};

/// Longest frame delta handed to widgets, in seconds. A stalled frame (window
/// drag, breakpoint) would otherwise fire a burst of key repeats.
pub const MAX_FRAME_DT: f32 = 0.25;

#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous tick; 0 on the first.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        if dt > MAX_FRAME_DT {
            log::debug!("frame took {dt:.3}s; clamping to {MAX_FRAME_DT}s");
            MAX_FRAME_DT
        } else {
            dt
        }
    }
}

/// Events collected between two frames.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: Vec<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ev: InputEvent) {
        self.pending.push(ev);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Hands out this frame's events and starts collecting the next frame's.
    pub fn take_frame(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl Extend<InputEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        self.pending.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use textbox_core::input::Key;

    #[test]
    fn test_clock_first_tick_is_zero() {
        let mut c = FrameClock::new();
        let t0 = Instant::now();
        assert_eq!(c.tick_at(t0), 0.0);
        let dt = c.tick_at(t0 + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
    }

    #[test]
    fn test_clock_clamps_stalls_and_backwards_time() {
        let mut c = FrameClock::new();
        let t0 = Instant::now() + Duration::from_secs(10);
        c.tick_at(t0);
        assert_eq!(c.tick_at(t0 + Duration::from_secs(3)), MAX_FRAME_DT);
        assert_eq!(c.tick_at(t0), 0.0);
    }

    #[test]
    fn test_queue_take_frame() {
        let mut q = EventQueue::new();
        q.push(InputEvent::key_down(Key::Enter));
        q.extend(InputEvent::typed("ab"));
        let frame = q.take_frame();
        assert_eq!(frame.len(), 3);
        assert!(q.is_empty());
    }
}
