use serde::{Deserialize, Serialize};
use textbox_core::{Color, Rect};

use crate::error::TextInputError;

/// Construction parameters for a [`TextInput`](crate::TextInput).
///
/// Every field has a default, so a JSON config only needs the keys it changes:
///
/// ```rust
/// use textbox_ui::TextInputConfig;
///
/// let cfg = TextInputConfig::from_json(r#"{ "x": 20, "y": 40, "placeholder": "Name" }"#).unwrap();
/// assert_eq!(cfg.padding, 5.0);
/// assert_eq!(cfg.placeholder, "Name");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextInputConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub border_radius: f32,
    pub text: String,
    pub placeholder: String,
    /// Pixel size for font backends built from this config.
    pub font_size: f32,
    pub background_color: Color,
    pub outline_color: Color,
    pub outline_width: f32,
    pub padding: f32,
    pub text_color: Color,
    pub placeholder_color: Color,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 32.0,
            border_radius: 0.0,
            text: String::new(),
            placeholder: String::new(),
            font_size: 10.0,
            background_color: Color::WHITE,
            outline_color: Color::BLACK,
            outline_width: 0.0,
            padding: 5.0,
            text_color: Color::BLACK,
            placeholder_color: Color::PLACEHOLDER,
        }
    }
}

impl TextInputConfig {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(s: &str) -> Result<Self, TextInputError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Checks the one real precondition: padding must leave a positive
    /// interior on both axes.
    pub fn validate(&self) -> Result<(), TextInputError> {
        let numbers = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("border_radius", self.border_radius),
            ("outline_width", self.outline_width),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TextInputError::InvalidGeometry(format!("{name} is not finite")));
        }
        if let Some((name, v)) = numbers[2..].iter().find(|(_, v)| *v < 0.0) {
            return Err(TextInputError::InvalidGeometry(format!(
                "{name} must not be negative, got {v}"
            )));
        }
        if self.height <= self.padding * 2.0 || self.width <= self.padding * 2.0 {
            return Err(TextInputError::PaddingTooLarge {
                width: self.width,
                height: self.height,
                padding: self.padding,
            });
        }
        Ok(())
    }
}
