//! Tiling pattern resources (PatternType 1).
//!
//! A tiling pattern paints a cell that is replicated at fixed intervals
//! to fill the area to be painted.
//!
//! # Example
//!
//! ```
//! use pdf_markup::geometry::Rect;
//! use pdf_markup::writer::pattern::TilingPatternBuilder;
//!
//! let pattern = TilingPatternBuilder::new()
//!     .bbox(Rect::new(0.0, 0.0, 10.0, 12.0))
//!     .step(10.0, 13.0)
//!     .uncolored()
//!     .content_bytes(b"0 1 m 5 11 l 10 1 l S".to_vec())
//!     .build();
//!
//! assert!(pattern.as_stream_data().is_some());
//! ```

use crate::geometry::{Matrix, Rect};
use crate::object::Object;
use std::collections::HashMap;

/// Helper to create a string key for dictionary
fn key(s: &str) -> String {
    s.to_string()
}

/// Pattern paint type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternPaintType {
    /// Colored pattern - colors specified in pattern content
    #[default]
    Colored = 1,
    /// Uncolored pattern - color specified when pattern is used
    Uncolored = 2,
}

/// Pattern tiling type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternTilingType {
    /// Constant spacing - pattern cell spacing is constant
    #[default]
    ConstantSpacing = 1,
    /// No distortion - cell is adjusted to device pixels without distortion
    NoDistortion = 2,
    /// Constant spacing and faster tiling
    ConstantSpacingFaster = 3,
}

/// Builder for tiling patterns (Type 1).
#[derive(Debug, Clone)]
pub struct TilingPatternBuilder {
    /// Bounding box of the pattern cell
    bbox: Rect,
    /// Horizontal spacing between pattern cells
    x_step: f32,
    /// Vertical spacing between pattern cells
    y_step: f32,
    /// Paint type
    paint_type: PatternPaintType,
    /// Tiling type
    tiling_type: PatternTilingType,
    /// Pattern content stream
    content: Vec<u8>,
    /// Pattern matrix (optional transformation)
    matrix: Option<Matrix>,
}

impl Default for TilingPatternBuilder {
    fn default() -> Self {
        Self {
            bbox: Rect::new(0.0, 0.0, 10.0, 10.0),
            x_step: 10.0,
            y_step: 10.0,
            paint_type: PatternPaintType::Colored,
            tiling_type: PatternTilingType::ConstantSpacing,
            content: Vec::new(),
            matrix: None,
        }
    }
}

impl TilingPatternBuilder {
    /// Create a new tiling pattern builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounding box of the pattern cell.
    pub fn bbox(mut self, bbox: Rect) -> Self {
        self.bbox = bbox;
        self
    }

    /// Set the horizontal step (spacing).
    pub fn x_step(mut self, step: f32) -> Self {
        self.x_step = step;
        self
    }

    /// Set the vertical step (spacing).
    pub fn y_step(mut self, step: f32) -> Self {
        self.y_step = step;
        self
    }

    /// Set both steps at once.
    pub fn step(self, x: f32, y: f32) -> Self {
        self.x_step(x).y_step(y)
    }

    /// Set as colored pattern (colors in pattern content).
    pub fn colored(mut self) -> Self {
        self.paint_type = PatternPaintType::Colored;
        self
    }

    /// Set as uncolored pattern (color specified at use time).
    pub fn uncolored(mut self) -> Self {
        self.paint_type = PatternPaintType::Uncolored;
        self
    }

    /// Set the tiling type.
    pub fn tiling_type(mut self, tiling: PatternTilingType) -> Self {
        self.tiling_type = tiling;
        self
    }

    /// Set the pattern transformation matrix.
    pub fn matrix(mut self, matrix: Matrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Set the raw content stream.
    pub fn content_bytes(mut self, content: Vec<u8>) -> Self {
        self.content = content;
        self
    }

    /// Build the pattern as a stream object.
    ///
    /// The cell content never references named resources, so /Resources is
    /// an empty dictionary.
    pub fn build(self) -> Object {
        let mut dict: HashMap<String, Object> = HashMap::new();

        dict.insert(key("Type"), Object::Name("Pattern".to_string()));
        dict.insert(key("PatternType"), Object::Integer(1));
        dict.insert(key("PaintType"), Object::Integer(self.paint_type as i64));
        dict.insert(key("TilingType"), Object::Integer(self.tiling_type as i64));
        dict.insert(key("BBox"), self.bbox.to_object());
        dict.insert(key("XStep"), Object::Real(self.x_step as f64));
        dict.insert(key("YStep"), Object::Real(self.y_step as f64));

        if let Some(m) = &self.matrix {
            dict.insert(key("Matrix"), m.to_object());
        }

        dict.insert(key("Resources"), Object::Dictionary(HashMap::new()));

        Object::Stream {
            dict,
            data: bytes::Bytes::from(self.content),
        }
    }
}
