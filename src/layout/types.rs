use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas space. `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when the interiors overlap. Rectangles sharing only an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Geometry of a gene label as seen by the visibility resolver.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelBox {
    pub bounds: Rect,
}

impl LabelBox {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }
}

/// Geometry of the arrow glyph that draws a gene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphBox {
    pub bounds: Rect,
}

impl GlyphBox {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }
}

/// Arrow glyph style used to draw genes. The numeric codes match the
/// genome-view settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowStyle {
    #[default]
    Default,
    Narrow,
    Pentagon,
    Rectangle,
}

impl ArrowStyle {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Default),
            2 => Some(Self::Narrow),
            3 => Some(Self::Pentagon),
            4 => Some(Self::Rectangle),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Default => 1,
            Self::Narrow => 2,
            Self::Pentagon => 3,
            Self::Rectangle => 4,
        }
    }

    /// Pentagon arrows draw the label inside the glyph, so labels that do
    /// not fit are clipped.
    pub fn constrains_labels(self) -> bool {
        self == Self::Pentagon
    }
}

/// Why a label ended up in its final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelDecision {
    Shown,
    /// Too wide for its pentagon glyph.
    Glyph,
    /// Overlaps the current anchor label.
    Overlap,
}

impl LabelDecision {
    pub fn is_visible(self) -> bool {
        self == Self::Shown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VisibilitySummary {
    pub visible: usize,
    pub hidden_by_glyph: usize,
    pub hidden_by_overlap: usize,
}

impl VisibilitySummary {
    pub fn from_decisions(decisions: &[LabelDecision]) -> Self {
        let mut summary = Self::default();
        for decision in decisions {
            match decision {
                LabelDecision::Shown => summary.visible += 1,
                LabelDecision::Glyph => summary.hidden_by_glyph += 1,
                LabelDecision::Overlap => summary.hidden_by_overlap += 1,
            }
        }
        summary
    }

    pub fn hidden(&self) -> usize {
        self.hidden_by_glyph + self.hidden_by_overlap
    }
}

/// A live label object owned by the rendering layer.
pub trait CanvasLabel {
    fn bounds(&self) -> Rect;
    fn set_visible(&mut self, visible: bool);
}

/// A live arrow glyph owned by the rendering layer.
pub trait CanvasGlyph {
    fn bounds(&self) -> Rect;
}

impl CanvasGlyph for GlyphBox {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl CanvasGlyph for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}
