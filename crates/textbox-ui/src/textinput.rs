use std::fmt;
use std::rc::Rc;

use textbox_core::input::{InputEvent, Key, KeyEvent, PointerButton, PointerEventKind};
use textbox_core::{Color, CornerRadii, DrawTarget, Rect, SceneNode, Vec2};
use textbox_text::FontMetrics;

use crate::buffer::EditBuffer;
use crate::config::TextInputConfig;
use crate::error::TextInputError;
use crate::scroll::{CaretLayout, scroll_to_caret};
use crate::timers::{CaretBlink, KeyRepeat};

pub type InputCallback = Rc<dyn Fn(&mut TextInput)>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub active_background: Color,
    pub inactive_background: Color,
    pub hover_background: Color,
    pub outline: Color,
    pub text: Color,
    pub placeholder: Color,
}

#[derive(Clone, Default)]
struct Callbacks {
    on_submit: Option<InputCallback>,
    on_change: Option<InputCallback>,
    on_active: Option<InputCallback>,
    on_inactive: Option<InputCallback>,
    on_hover: Option<InputCallback>,
    on_not_hover: Option<InputCallback>,
}

/// Single-line text box driven by a per-frame host loop.
///
/// Call [`handle_events`](Self::handle_events) once per frame with that
/// frame's events and delta time, then [`draw`](Self::draw).
///
/// ```rust
/// use std::rc::Rc;
/// use textbox_core::{Scene, input::{InputEvent, PointerButton}};
/// use textbox_text::MonoMetrics;
/// use textbox_ui::{TextInput, TextInputConfig};
///
/// let mut input = TextInput::new(
///     TextInputConfig::new(0.0, 0.0, 200.0, 30.0),
///     Rc::new(MonoMetrics::new(8.0, 16.0)),
/// )
/// .unwrap();
///
/// let mut events = vec![InputEvent::pointer_down(PointerButton::Primary, 10.0, 10.0)];
/// events.extend(InputEvent::typed("hi"));
/// input.handle_events(&events, 1.0 / 60.0);
/// assert_eq!(input.text(), "hi");
///
/// let mut scene = Scene::default();
/// input.draw(&mut scene);
/// ```
pub struct TextInput {
    rect: Rect,
    radii: CornerRadii,
    buffer: EditBuffer,
    placeholder: String,
    font: Rc<dyn FontMetrics>,
    palette: Palette,
    outline_width: f32,
    padding: f32,

    active: bool,
    hovering: bool,
    activate_button: Option<PointerButton>,
    activate_key: Option<Key>,

    callbacks: Callbacks,
    submit_do_default: bool,

    repeat: KeyRepeat,
    blink: CaretBlink,
    scroll_x: f32,
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("rect", &self.rect)
            .field("text", &self.buffer.text())
            .field("caret", &self.buffer.caret())
            .field("active", &self.active)
            .field("hovering", &self.hovering)
            .field("scroll_x", &self.scroll_x)
            .finish_non_exhaustive()
    }
}

impl TextInput {
    pub fn new(config: TextInputConfig, font: Rc<dyn FontMetrics>) -> Result<Self, TextInputError> {
        config.validate()?;
        Ok(Self {
            rect: config.rect(),
            radii: CornerRadii::uniform(config.border_radius),
            buffer: EditBuffer::new(config.text),
            placeholder: config.placeholder,
            font,
            palette: Palette {
                active_background: config.background_color,
                inactive_background: config.background_color,
                hover_background: config.background_color,
                outline: config.outline_color,
                text: config.text_color,
                placeholder: config.placeholder_color,
            },
            outline_width: config.outline_width,
            padding: config.padding,
            active: false,
            hovering: false,
            activate_button: None,
            activate_key: None,
            callbacks: Callbacks::default(),
            submit_do_default: true,
            repeat: KeyRepeat::new(),
            blink: CaretBlink::default(),
            scroll_x: 0.0,
        })
    }

    // ---- accessors ----

    pub fn text(&self) -> &str {
        self.buffer.text()
    }
    /// Caret as a byte offset into [`text`](Self::text).
    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
    pub fn rect(&self) -> Rect {
        self.rect
    }
    pub fn inner_rect(&self) -> Rect {
        self.rect.inset(self.padding)
    }
    pub fn corner_radii(&self) -> CornerRadii {
        self.radii
    }
    pub fn palette(&self) -> Palette {
        self.palette
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_x
    }
    pub fn caret_visible(&self) -> bool {
        self.blink.visible()
    }

    /// Hover wins over focus.
    pub fn background_color(&self) -> Color {
        if self.hovering {
            self.palette.hover_background
        } else if self.active {
            self.palette.active_background
        } else {
            self.palette.inactive_background
        }
    }

    pub fn caret_width(&self) -> f32 {
        (self.font.line_height() / 10.0).floor().max(1.0)
    }

    // ---- setters ----

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
        self.update_scroll();
        self.fire(|c| c.on_change.clone());
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn set_advanced_border_radius(
        &mut self,
        top_left: f32,
        top_right: f32,
        bottom_left: f32,
        bottom_right: f32,
    ) {
        self.radii = CornerRadii {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        };
    }

    pub fn set_active_background_color(&mut self, color: Color) {
        self.palette.active_background = color;
    }
    pub fn set_inactive_background_color(&mut self, color: Color) {
        self.palette.inactive_background = color;
    }
    pub fn set_hover_background_color(&mut self, color: Color) {
        self.palette.hover_background = color;
    }
    pub fn set_placeholder_color(&mut self, color: Color) {
        self.palette.placeholder = color;
    }

    /// Restricts click activation to one button; `None` accepts any button.
    pub fn set_mouse_button(&mut self, button: Option<PointerButton>) {
        self.activate_button = button;
    }

    /// A key that activates the box while it is inactive.
    pub fn set_activate_key(&mut self, key: Option<Key>) {
        self.activate_key = key;
    }

    pub fn set_on_hover(&mut self, f: impl Fn(&mut TextInput) + 'static) {
        self.callbacks.on_hover = Some(Rc::new(f));
    }
    pub fn set_on_not_hover(&mut self, f: impl Fn(&mut TextInput) + 'static) {
        self.callbacks.on_not_hover = Some(Rc::new(f));
    }
    pub fn set_on_active(&mut self, f: impl Fn(&mut TextInput) + 'static) {
        self.callbacks.on_active = Some(Rc::new(f));
    }
    pub fn set_on_inactive(&mut self, f: impl Fn(&mut TextInput) + 'static) {
        self.callbacks.on_inactive = Some(Rc::new(f));
    }
    pub fn set_on_change(&mut self, f: impl Fn(&mut TextInput) + 'static) {
        self.callbacks.on_change = Some(Rc::new(f));
    }

    /// Action for Enter. With `do_default` the box is also cleared and
    /// deactivated after `f` runs; without it, call [`clear_text`](Self::clear_text)
    /// yourself if needed.
    pub fn set_on_submit(&mut self, f: impl Fn(&mut TextInput) + 'static, do_default: bool) {
        self.callbacks.on_submit = Some(Rc::new(f));
        self.submit_do_default = do_default;
    }

    // ---- focus & submit ----

    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.blink.reset();
        log::debug!("text input at ({}, {}) activated", self.rect.x, self.rect.y);
        self.fire(|c| c.on_active.clone());
    }

    pub fn deactivate(&mut self) {
        self.repeat.cancel();
        if !self.active {
            return;
        }
        self.active = false;
        log::debug!("text input at ({}, {}) deactivated", self.rect.x, self.rect.y);
        self.fire(|c| c.on_inactive.clone());
    }

    pub fn clear_text(&mut self) {
        let had_text = !self.buffer.is_empty();
        self.buffer.clear();
        self.scroll_x = 0.0;
        if had_text {
            self.fire(|c| c.on_change.clone());
        }
    }

    pub fn submit(&mut self) {
        log::debug!("submit: {} bytes", self.buffer.text().len());
        self.fire(|c| c.on_submit.clone());
        if !self.submit_do_default {
            return;
        }
        self.clear_text();
        self.deactivate();
    }

    // ---- per-frame ----

    /// Applies this frame's events, runs key repeat, rescrolls and advances
    /// the caret blink. Returns `true` if the text changed or was submitted.
    pub fn handle_events(&mut self, events: &[InputEvent], dt: f32) -> bool {
        let mut changed = false;

        for ev in events {
            match ev {
                InputEvent::Pointer(p) => match p.event {
                    PointerEventKind::Move => self.update_hover(p.position),
                    PointerEventKind::Down(button) => {
                        if self.activate_button.is_some_and(|b| b != button) {
                            continue;
                        }
                        if self.rect.contains(p.position) {
                            self.activate();
                        } else {
                            self.deactivate();
                        }
                    }
                    PointerEventKind::Up(_) => {}
                },
                InputEvent::Key(k) => {
                    if k.is_pressed()
                        && !self.active
                        && self.activate_key.as_ref().is_some_and(|a| *a == k.key)
                    {
                        self.activate();
                        continue;
                    }
                    if !self.active {
                        continue;
                    }
                    if k.is_pressed() {
                        changed |= self.key_down(k);
                    } else {
                        self.repeat.release(&k.key);
                    }
                }
            }
        }

        if self.active {
            if let Some(held) = self.repeat.tick(dt) {
                log::trace!("repeat {:?}", held.key);
                if self.apply_key(&held) {
                    changed = true;
                    self.fire(|c| c.on_change.clone());
                }
            }
            self.update_scroll();
        }

        self.blink.tick(dt);
        changed
    }

    fn update_hover(&mut self, pos: Vec2) {
        let inside = self.rect.contains(pos);
        if inside == self.hovering {
            return;
        }
        self.hovering = inside;
        if inside {
            self.fire(|c| c.on_hover.clone());
        } else {
            self.fire(|c| c.on_not_hover.clone());
        }
    }

    fn key_down(&mut self, k: &KeyEvent) -> bool {
        // the widget repeats held keys itself
        if k.is_repeat {
            return false;
        }
        self.blink.reset();
        if k.key == Key::Enter {
            self.repeat.cancel();
            self.submit();
            return true;
        }
        let edited = self.apply_key(k);
        if edited {
            self.fire(|c| c.on_change.clone());
        }
        // submit/deactivate from a callback drops focus
        if self.active {
            self.repeat.press(k.clone());
        }
        edited
    }

    /// Edits the buffer for one press of `k`. Returns `true` if the text changed.
    fn apply_key(&mut self, k: &KeyEvent) -> bool {
        let b = &mut self.buffer;
        match k.key {
            Key::Backspace => b.delete_backward(),
            Key::Delete => b.delete_forward(),
            Key::ArrowLeft => {
                b.move_left();
                false
            }
            Key::ArrowRight => {
                b.move_right();
                false
            }
            Key::Home => {
                b.move_home();
                false
            }
            Key::End => {
                b.move_end();
                false
            }
            _ => match k.text.as_deref() {
                Some(t) if !t.chars().any(char::is_control) => {
                    log::trace!("insert {t:?} at {}", b.caret());
                    b.insert(t)
                }
                _ => false,
            },
        }
    }

    fn caret_layout(&self) -> CaretLayout {
        CaretLayout {
            caret_x: self.font.text_width(self.buffer.before_caret()),
            caret_w: self.caret_width(),
            text_w: self.font.text_width(self.buffer.text()),
            inner_w: self.inner_rect().w,
        }
    }

    fn update_scroll(&mut self) {
        self.scroll_x = scroll_to_caret(self.scroll_x, self.caret_layout());
    }

    fn fire(&mut self, pick: impl FnOnce(&Callbacks) -> Option<InputCallback>) {
        if let Some(cb) = pick(&self.callbacks) {
            cb(self);
        }
    }

    // ---- drawing ----

    pub fn draw(&self, target: &mut impl DrawTarget) {
        target.push_node(SceneNode::Rect {
            rect: self.rect,
            color: self.background_color(),
            radii: self.radii,
        });
        if self.outline_width > 0.0 {
            target.push_node(SceneNode::Border {
                rect: self.rect.outset(self.outline_width),
                color: self.palette.outline,
                width: self.outline_width,
                radii: self.radii,
            });
        }

        let inner = self.inner_rect();
        let line_h = self.font.line_height();
        target.push_node(SceneNode::PushClip { rect: inner });

        if self.active || !self.buffer.is_empty() {
            target.push_node(SceneNode::Text {
                rect: Rect {
                    x: inner.x - self.scroll_x,
                    y: inner.y,
                    w: self.font.text_width(self.buffer.text()),
                    h: line_h,
                },
                text: self.buffer.text().to_string(),
                color: self.palette.text,
                size: self.font.font_size(),
            });
        } else {
            target.push_node(SceneNode::Text {
                rect: Rect {
                    x: inner.x,
                    y: inner.y,
                    w: self.font.text_width(&self.placeholder),
                    h: line_h,
                },
                text: self.placeholder.clone(),
                color: self.palette.placeholder,
                size: self.font.font_size(),
            });
        }

        if self.active && self.blink.visible() {
            let l = self.caret_layout();
            target.push_node(SceneNode::Rect {
                rect: Rect {
                    x: inner.x + l.caret_x - self.scroll_x - l.caret_w * 0.5,
                    y: inner.y,
                    w: l.caret_w,
                    h: line_h,
                },
                color: self.palette.text,
                radii: CornerRadii::default(),
            });
        }

        target.push_node(SceneNode::PopClip);
    }
}
