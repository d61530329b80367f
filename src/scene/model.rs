use kurbo::Affine;

use crate::foundation::core::{Canvas, FrameIndex, Point};
use crate::scene::color::Color;

/// One fully evaluated output frame: a canvas plus a scene tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFrame {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Root node of the scene tree.
    pub root: SceneNode,
}

/// A positioned, styled visual element.
///
/// The node-local origin is the element's center; `transform` places it in
/// parent space (canvas space at the root). Group transforms compose onto
/// their children, opacity multiplies down the tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneNode {
    /// Node identifier (stable within a template).
    pub id: String,
    /// Placement in parent space.
    pub transform: Affine,
    /// Opacity in `[0, 1]`, clamped at construction.
    pub opacity: f64,
    /// Element payload.
    pub kind: NodeKind,
}

/// Element payload variants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Pure container; children render in order (painter's order).
    Group {
        /// Child nodes, back to front.
        children: Vec<SceneNode>,
    },
    /// Filled geometric shape.
    Shape {
        /// Shape geometry, centered on the node origin.
        shape: Shape,
        /// Fill paint.
        fill: Fill,
    },
    /// Text run.
    Text {
        /// UTF-8 content.
        content: String,
        /// Font size in pixels.
        size_px: f64,
        /// Font weight.
        weight: FontWeight,
        /// Text color (straight alpha).
        color: Color,
        /// Horizontal alignment about the node origin.
        align: TextAlign,
        /// Strike through the run (discount price displays).
        strikethrough: bool,
    },
}

/// Shape geometry, centered on the node-local origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rect {
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
    },
    /// Rectangle with rounded corners.
    RoundedRect {
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
        /// Corner radius in pixels.
        radius: f64,
    },
    /// Axis-aligned ellipse.
    Ellipse {
        /// Horizontal radius in pixels.
        rx: f64,
        /// Vertical radius in pixels.
        ry: f64,
    },
}

/// Fill paint variants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// Solid color fill.
    Solid(Color),
    /// Two-stop linear gradient.
    LinearGradient {
        /// Start color.
        start: Color,
        /// End color.
        end: Color,
        /// Gradient direction in degrees (CSS convention).
        angle_deg: f64,
    },
    /// Two-stop radial gradient from the shape center outward.
    RadialGradient {
        /// Center color.
        start: Color,
        /// Edge color.
        end: Color,
    },
}

/// Font weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Light (300).
    Light,
    /// Regular (400).
    #[default]
    Regular,
    /// Medium (500).
    Medium,
    /// Bold (700).
    Bold,
}

/// Horizontal text alignment about the node origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Anchor the run's start at the origin.
    Start,
    /// Center the run on the origin.
    #[default]
    Center,
    /// Anchor the run's end at the origin.
    End,
}

impl SceneNode {
    /// Container node with identity placement.
    pub fn group(id: impl Into<String>, children: Vec<SceneNode>) -> Self {
        Self {
            id: id.into(),
            transform: Affine::IDENTITY,
            opacity: 1.0,
            kind: NodeKind::Group { children },
        }
    }

    /// Shape node with identity placement.
    pub fn shape(id: impl Into<String>, shape: Shape, fill: Fill) -> Self {
        Self {
            id: id.into(),
            transform: Affine::IDENTITY,
            opacity: 1.0,
            kind: NodeKind::Shape { shape, fill },
        }
    }

    /// Text node with identity placement and default weight/alignment.
    pub fn text(id: impl Into<String>, content: impl Into<String>, size_px: f64, color: Color) -> Self {
        Self {
            id: id.into(),
            transform: Affine::IDENTITY,
            opacity: 1.0,
            kind: NodeKind::Text {
                content: content.into(),
                size_px,
                weight: FontWeight::default(),
                color,
                align: TextAlign::default(),
                strikethrough: false,
            },
        }
    }

    /// Place the node center at `(x, y)` in parent space.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.transform = Affine::translate((x, y)) * self.transform;
        self
    }

    /// Place the node center at `p` in parent space.
    pub fn at_point(self, p: Point) -> Self {
        self.at(p.x, p.y)
    }

    /// Compose a uniform scale about the node origin.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.transform = self.transform * Affine::scale(factor);
        self
    }

    /// Compose an extra translation in node-local space (slide offsets).
    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.transform = self.transform * Affine::translate((dx, dy));
        self
    }

    /// Set opacity, clamped to `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set font weight (text nodes; no-op otherwise).
    pub fn weight(mut self, weight: FontWeight) -> Self {
        if let NodeKind::Text { weight: w, .. } = &mut self.kind {
            *w = weight;
        }
        self
    }

    /// Set text alignment (text nodes; no-op otherwise).
    pub fn align(mut self, align: TextAlign) -> Self {
        if let NodeKind::Text { align: a, .. } = &mut self.kind {
            *a = align;
        }
        self
    }

    /// Enable strikethrough (text nodes; no-op otherwise).
    pub fn strikethrough(mut self) -> Self {
        if let NodeKind::Text { strikethrough, .. } = &mut self.kind {
            *strikethrough = true;
        }
        self
    }

    /// Number of direct children (0 for leaves).
    pub fn child_count(&self) -> usize {
        match &self.kind {
            NodeKind::Group { children } => children.len(),
            _ => 0,
        }
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, id: &str) -> Option<&SceneNode> {
        if self.id == id {
            return Some(self);
        }
        if let NodeKind::Group { children } = &self.kind {
            for child in children {
                if let Some(found) = child.find(id) {
                    return Some(found);
                }
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
