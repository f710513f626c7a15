//! # Textbox core
//!
//! Plain data shared between a widget and the host loop that drives it:
//!
//! - [`Color`] and the geometry types ([`Vec2`], [`Rect`], [`CornerRadii`]).
//! - [`input`]: the per-frame events a host hands to widgets.
//! - [`Scene`] / [`SceneNode`]: what a widget draws, and the [`DrawTarget`]
//!   trait a host surface implements to receive it.
//!
//! ```rust
//! use textbox_core::*;
//!
//! let mut scene = Scene::default();
//! scene.push_node(SceneNode::Rect {
//!     rect: Rect { x: 0.0, y: 0.0, w: 10.0, h: 10.0 },
//!     color: Color::WHITE,
//!     radii: CornerRadii::uniform(2.0),
//! });
//! assert_eq!(scene.nodes.len(), 1);
//! ```

pub mod color;
pub mod geometry;
pub mod input;
pub mod scene;

pub use color::*;
pub use geometry::*;
pub use scene::*;
