use crate::rendering::primitives::{Point, Shape};
use serde::{Deserialize, Serialize};

/// Chart metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub entity_count: usize,
    pub mesh_line_count: usize,
    pub selected: Option<usize>,
    /// Hint text shown under the wheel.
    pub hint: String,
}

/// Chart specification - declarative description of the wheel to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            shapes: Vec::new(),
            metadata: ChartMetadata::default(),
        }
    }

    /// Shapes that can be clicked, in drawing order.
    pub fn entity_glyphs(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::EntityGlyph { .. }))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
