//! PDF content stream builder.
//!
//! Builds PDF content streams containing graphics operators
//! according to PDF specification ISO 32000-1:2008 Section 8.

use crate::annotation_types::AnnotationColor;
use crate::error::Result;
use crate::geometry::Matrix;
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Set transformation matrix (cm)
    Transform(f32, f32, f32, f32, f32, f32),
    /// Set graphics state from ExtGState dictionary (gs)
    SetExtGState(String),

    // === Color Operations ===
    /// Set stroke color gray (G)
    SetStrokeColorGray(f32),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f32, f32, f32),
    /// Set stroke color CMYK (K)
    SetStrokeColorCMYK(f32, f32, f32, f32),
    /// Set fill color space (cs)
    SetFillColorSpace(String),
    /// Set fill color with pattern (scn with pattern name)
    SetFillPattern(String, Vec<f32>),

    // === Line Style Operations ===
    /// Set line width (w)
    SetLineWidth(f32),
    /// Set line cap style (J)
    SetLineCap(LineCap),
    /// Set line join style (j)
    SetLineJoin(LineJoin),
    /// Set miter limit (M)
    SetMiterLimit(f32),

    // === Path Operations ===
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Rectangle (re)
    Rectangle(f32, f32, f32, f32),
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,

    /// Paint XObject (Do)
    PaintXObject(String),
}

/// Line cap styles for path stroking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Square butt cap (default)
    #[default]
    Butt = 0,
    /// Round cap
    Round = 1,
    /// Projecting square cap
    Square = 2,
}

/// Line join styles for path stroking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Miter join (default)
    #[default]
    Miter = 0,
    /// Round join
    Round = 1,
    /// Bevel join
    Bevel = 2,
}

/// Builder for PDF content streams.
///
/// Collects operations and encodes them to the content stream byte syntax.
#[derive(Debug, Default, Clone)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    // === Graphics State Methods ===

    /// Save the current graphics state.
    pub fn save_state(&mut self) -> &mut Self {
        self.op(ContentStreamOp::SaveState)
    }

    /// Restore the previous graphics state.
    pub fn restore_state(&mut self) -> &mut Self {
        self.op(ContentStreamOp::RestoreState)
    }

    /// Concatenate a matrix onto the current transformation matrix.
    pub fn transform(&mut self, m: &Matrix) -> &mut Self {
        self.op(ContentStreamOp::Transform(m.a, m.b, m.c, m.d, m.e, m.f))
    }

    /// Set extended graphics state (for transparency).
    ///
    /// The `gs_name` should reference an ExtGState resource of the stream.
    pub fn set_ext_gstate(&mut self, gs_name: &str) -> &mut Self {
        self.op(ContentStreamOp::SetExtGState(gs_name.to_string()))
    }

    // === Color Methods ===

    /// Set the stroking color in the device space implied by the color.
    ///
    /// [`AnnotationColor::None`] emits nothing.
    pub fn stroke_color(&mut self, color: &AnnotationColor) -> &mut Self {
        match *color {
            AnnotationColor::None => self,
            AnnotationColor::Gray(g) => self.op(ContentStreamOp::SetStrokeColorGray(g)),
            AnnotationColor::Rgb(r, g, b) => self.op(ContentStreamOp::SetStrokeColorRGB(r, g, b)),
            AnnotationColor::Cmyk(c, m, y, k) => {
                self.op(ContentStreamOp::SetStrokeColorCMYK(c, m, y, k))
            },
        }
    }

    /// Set fill color space.
    pub fn set_fill_color_space(&mut self, name: &str) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorSpace(name.to_string()))
    }

    /// Set fill pattern.
    ///
    /// # Arguments
    /// * `pattern_name` - Name of the pattern resource
    /// * `components` - Color components for uncolored patterns (empty for colored ones)
    pub fn set_fill_pattern(&mut self, pattern_name: &str, components: Vec<f32>) -> &mut Self {
        self.op(ContentStreamOp::SetFillPattern(pattern_name.to_string(), components))
    }

    // === Line Style Methods ===

    /// Set line width.
    pub fn set_line_width(&mut self, width: f32) -> &mut Self {
        self.op(ContentStreamOp::SetLineWidth(width))
    }

    /// Set line cap style.
    pub fn set_line_cap(&mut self, cap: LineCap) -> &mut Self {
        self.op(ContentStreamOp::SetLineCap(cap))
    }

    /// Set line join style.
    pub fn set_line_join(&mut self, join: LineJoin) -> &mut Self {
        self.op(ContentStreamOp::SetLineJoin(join))
    }

    /// Set miter limit.
    pub fn set_miter_limit(&mut self, limit: f32) -> &mut Self {
        self.op(ContentStreamOp::SetMiterLimit(limit))
    }

    // === Path Methods ===

    /// Move to a point (start a new subpath).
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x, y))
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::LineTo(x, y))
    }

    /// Draw a rectangle.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Stroke)
    }

    /// Fill the current path.
    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    /// Paint a form or image XObject by resource name.
    pub fn paint_xobject(&mut self, name: &str) -> &mut Self {
        self.op(ContentStreamOp::PaintXObject(name.to_string()))
    }

    /// Encode all operations, one per line, into `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        for op in &self.operations {
            self.write_op(w, op)?;
            writeln!(w)?;
        }
        Ok(())
    }

    /// Write a single operation to the buffer.
    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
        match op {
            ContentStreamOp::SaveState => write!(w, "q"),
            ContentStreamOp::RestoreState => write!(w, "Q"),
            ContentStreamOp::Transform(a, b, c, d, e, f) => {
                write!(w, "{} {} {} {} {} {} cm", a, b, c, d, e, f)
            },
            ContentStreamOp::SetExtGState(name) => write!(w, "/{} gs", name),

            ContentStreamOp::SetStrokeColorGray(g) => write!(w, "{} G", g),
            ContentStreamOp::SetStrokeColorRGB(r, g, b) => write!(w, "{} {} {} RG", r, g, b),
            ContentStreamOp::SetStrokeColorCMYK(c, m, y, k) => {
                write!(w, "{} {} {} {} K", c, m, y, k)
            },
            ContentStreamOp::SetFillColorSpace(name) => write!(w, "/{} cs", name),
            ContentStreamOp::SetFillPattern(name, components) => {
                for c in components {
                    write!(w, "{} ", c)?;
                }
                write!(w, "/{} scn", name)
            },

            ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", width),
            ContentStreamOp::SetLineCap(cap) => write!(w, "{} J", *cap as u8),
            ContentStreamOp::SetLineJoin(join) => write!(w, "{} j", *join as u8),
            ContentStreamOp::SetMiterLimit(limit) => write!(w, "{} M", limit),

            ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", x, y),
            ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", x, y),
            ContentStreamOp::Rectangle(x, y, w_val, h) => {
                write!(w, "{} {} {} {} re", x, y, w_val, h)
            },
            ContentStreamOp::Stroke => write!(w, "S"),
            ContentStreamOp::Fill => write!(w, "f"),

            ContentStreamOp::PaintXObject(name) => write!(w, "/{} Do", name),
        }
    }
}
