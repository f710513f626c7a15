//! The Textbox text input widget.
//!
//! [`TextInput`] owns its text, caret, focus/hover state and timers. A host
//! loop feeds it input each frame and asks it to draw into a
//! [`DrawTarget`](textbox_core::DrawTarget):
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use textbox_core::Scene;
//! use textbox_text::CosmicMetrics;
//! use textbox_ui::{TextInput, TextInputConfig};
//!
//! let cfg = TextInputConfig::new(20.0, 20.0, 240.0, 32.0);
//! let font = Rc::new(CosmicMetrics::new(cfg.font_size));
//! let mut input = TextInput::new(cfg, font).unwrap();
//! input.set_on_submit(|ti| println!("submitted {:?}", ti.text()), true);
//!
//! let mut scene = Scene::default();
//! loop {
//!     let events: Vec<textbox_core::input::InputEvent> = Vec::new(); // from the platform
//!     input.handle_events(&events, 1.0 / 60.0);
//!     scene.clear();
//!     input.draw(&mut scene);
//! }
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod scroll;
pub mod textinput;
pub mod timers;

pub use buffer::EditBuffer;
pub use config::TextInputConfig;
pub use error::TextInputError;
pub use textinput::{InputCallback, Palette, TextInput};
