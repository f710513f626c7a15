use crate::{Color, CornerRadii, Rect};

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radii: CornerRadii,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radii: CornerRadii,
    },
    /// Single line of text; `rect.x`/`rect.y` is the top-left of the line box.
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

/// A host-provided drawing surface.
///
/// Widgets describe themselves as a stream of [`SceneNode`]s; a backend either
/// records them (see [`Scene`]) or rasterises them immediately.
pub trait DrawTarget {
    fn push_node(&mut self, node: SceneNode);
}

impl DrawTarget for Scene {
    fn push_node(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }
}

impl DrawTarget for Vec<SceneNode> {
    fn push_node(&mut self, node: SceneNode) {
        self.push(node);
    }
}

impl Scene {
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            nodes: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Clip pushes and pops must pair up for a backend to replay the scene.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for n in &self.nodes {
            match n {
                SceneNode::PushClip { .. } => depth += 1,
                SceneNode::PopClip => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }
}
