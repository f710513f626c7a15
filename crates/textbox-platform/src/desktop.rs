use textbox_core::Vec2;
use textbox_core::input::{
    InputEvent, Key, KeyEvent, KeyState, Modifiers, PointerButton, PointerEvent,
    PointerEventKind,
};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

pub fn map_mouse_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Tertiary),
        _ => None,
    }
}

pub fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Character(s) => match s.chars().next() {
            Some(' ') => Key::Space,
            Some(c) => Key::Character(c),
            None => Key::Unidentified(0),
        },
        WinitKey::Named(named) => map_named(*named),
        _ => Key::Unidentified(0),
    }
}

fn map_named(named: NamedKey) -> Key {
    match named {
        NamedKey::Enter => Key::Enter,
        NamedKey::Tab => Key::Tab,
        NamedKey::Space => Key::Space,
        NamedKey::Backspace => Key::Backspace,
        NamedKey::Delete => Key::Delete,
        NamedKey::Escape => Key::Escape,
        NamedKey::ArrowLeft => Key::ArrowLeft,
        NamedKey::ArrowRight => Key::ArrowRight,
        NamedKey::ArrowUp => Key::ArrowUp,
        NamedKey::ArrowDown => Key::ArrowDown,
        NamedKey::Home => Key::Home,
        NamedKey::End => Key::End,
        NamedKey::Shift => Key::Shift,
        NamedKey::Control => Key::Control,
        NamedKey::Alt => Key::Alt,
        NamedKey::Super | NamedKey::Meta => Key::Meta,
        NamedKey::F1 => Key::F(1),
        NamedKey::F2 => Key::F(2),
        NamedKey::F3 => Key::F(3),
        NamedKey::F4 => Key::F(4),
        NamedKey::F5 => Key::F(5),
        NamedKey::F6 => Key::F(6),
        NamedKey::F7 => Key::F(7),
        NamedKey::F8 => Key::F(8),
        NamedKey::F9 => Key::F(9),
        NamedKey::F10 => Key::F(10),
        NamedKey::F11 => Key::F(11),
        NamedKey::F12 => Key::F(12),
        other => {
            log::trace!("unmapped named key {other:?}");
            Key::Unidentified(0)
        }
    }
}

/// Stateful winit → [`InputEvent`] translator.
///
/// winit reports the cursor and modifier state in separate events; this keeps
/// the latest of both so pointer and key events carry them.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinitInput {
    cursor: Vec2,
    modifiers: Modifiers,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(self.pointer(PointerEventKind::Move))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let b = map_mouse_button(*button)?;
                let kind = match state {
                    ElementState::Pressed => PointerEventKind::Down(b),
                    ElementState::Released => PointerEventKind::Up(b),
                };
                Some(self.pointer(kind))
            }
            WindowEvent::ModifiersChanged(m) => {
                let s = m.state();
                self.modifiers = Modifiers {
                    shift: s.shift_key(),
                    ctrl: s.control_key(),
                    alt: s.alt_key(),
                    meta: s.super_key(),
                };
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let state = match event.state {
                    ElementState::Pressed => KeyState::Pressed,
                    ElementState::Released => KeyState::Released,
                };
                // shortcuts must not type their letter
                let text = if self.modifiers.ctrl || self.modifiers.meta {
                    None
                } else {
                    event.text.as_ref().map(|t| t.to_string())
                };
                Some(InputEvent::Key(KeyEvent {
                    key: map_key(&event.logical_key),
                    state,
                    text,
                    modifiers: self.modifiers,
                    is_repeat: event.repeat,
                }))
            }
            _ => None,
        }
    }

    fn pointer(&self, event: PointerEventKind) -> InputEvent {
        InputEvent::Pointer(PointerEvent {
            event,
            position: self.cursor,
            modifiers: self.modifiers,
        })
    }
}
