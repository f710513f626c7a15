use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub event: PointerEventKind,
    pub position: Vec2,
    pub modifiers: Modifiers,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Space,
    Shift,
    Control,
    Alt,
    Meta,
    F(u8), // F1-F12
    /// Anything the host could not map; carries its raw code.
    Unidentified(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    /// Text this key produces, if any (already shift/layout resolved).
    pub text: Option<String>,
    pub modifiers: Modifiers,
    /// Set for OS-generated auto-repeat presses.
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        let text = match &key {
            Key::Character(c) => Some(c.to_string()),
            Key::Space => Some(" ".to_string()),
            _ => None,
        };
        Self {
            key,
            state: KeyState::Pressed,
            text,
            modifiers: Modifiers::default(),
            is_repeat: false,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
            text: None,
            modifiers: Modifiers::default(),
            is_repeat: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

impl InputEvent {
    pub fn pointer_move(x: f32, y: f32) -> Self {
        InputEvent::Pointer(PointerEvent {
            event: PointerEventKind::Move,
            position: Vec2::new(x, y),
            modifiers: Modifiers::default(),
        })
    }

    pub fn pointer_down(button: PointerButton, x: f32, y: f32) -> Self {
        InputEvent::Pointer(PointerEvent {
            event: PointerEventKind::Down(button),
            position: Vec2::new(x, y),
            modifiers: Modifiers::default(),
        })
    }

    pub fn pointer_up(button: PointerButton, x: f32, y: f32) -> Self {
        InputEvent::Pointer(PointerEvent {
            event: PointerEventKind::Up(button),
            position: Vec2::new(x, y),
            modifiers: Modifiers::default(),
        })
    }

    pub fn key_down(key: Key) -> Self {
        InputEvent::Key(KeyEvent::pressed(key))
    }

    pub fn key_up(key: Key) -> Self {
        InputEvent::Key(KeyEvent::released(key))
    }

    /// One key-down per char, the way a host delivers typed text.
    pub fn typed(text: &str) -> Vec<InputEvent> {
        text.chars()
            .map(|c| {
                let key = if c == ' ' { Key::Space } else { Key::Character(c) };
                InputEvent::Key(KeyEvent::pressed(key).with_text(c.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_carries_text_for_printable_keys() {
        assert_eq!(KeyEvent::pressed(Key::Character('a')).text.as_deref(), Some("a"));
        assert_eq!(KeyEvent::pressed(Key::Space).text.as_deref(), Some(" "));
        assert_eq!(KeyEvent::pressed(Key::Shift).text, None);
        assert!(!KeyEvent::released(Key::Enter).is_pressed());
    }

    #[test]
    fn test_typed_builds_one_event_per_char() {
        let evs = InputEvent::typed("a b");
        assert_eq!(evs.len(), 3);
        match &evs[1] {
            InputEvent::Key(k) => {
                assert_eq!(k.key, Key::Space);
                assert_eq!(k.text.as_deref(), Some(" "));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
