//! Text markup annotations.
//!
//! A [`MarkupAnnotation`] carries the entries an appearance handler reads
//! and writes: /Rect, /QuadPoints, /BS, /Border, /C, /CA and /AP, per
//! PDF spec ISO 32000-1:2008, Sections 12.5.2 and 12.5.6.10.
//!
//! # Example
//!
//! ```
//! use pdf_markup::annotation_types::AnnotationColor;
//! use pdf_markup::annotations::MarkupAnnotation;
//! use pdf_markup::geometry::Rect;
//!
//! let annot = MarkupAnnotation::squiggly()
//!     .with_rect(Rect::new(72.0, 720.0, 172.0, 732.0))
//!     .with_quad_for_rect(Rect::new(72.0, 720.0, 172.0, 732.0))
//!     .with_color(AnnotationColor::red());
//! assert_eq!(annot.quads().count(), 1);
//! ```

use crate::annotation_types::{
    AnnotationBorderArray, AnnotationBorderStyle, AnnotationColor, AnnotationSubtype,
};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::object::Object;
use crate::writer::AppearanceDictionary;
use std::collections::HashMap;

/// Number of coordinates describing one quadrilateral.
pub const QUAD_LEN: usize = 8;

/// A text markup annotation (Highlight, Underline, StrikeOut, Squiggly).
///
/// QuadPoints are stored flat. Each quad is 8 numbers `x1 y1 x2 y2 x3 y3 x4 y4`;
/// producers conventionally write them top-left, top-right, bottom-left,
/// bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupAnnotation {
    /// Annotation subtype
    pub subtype: AnnotationSubtype,
    /// Bounding rectangle (/Rect)
    pub rect: Option<Rect>,
    /// Flat quad point coordinates (/QuadPoints)
    pub quad_points: Option<Vec<f32>>,
    /// Border style dictionary (/BS)
    pub border_style: Option<AnnotationBorderStyle>,
    /// Legacy border array (/Border)
    pub border: Option<AnnotationBorderArray>,
    /// Annotation color (/C)
    pub color: AnnotationColor,
    /// Constant opacity (/CA), 1.0 when absent
    pub opacity: f32,
    /// Appearance dictionary (/AP)
    pub appearance: Option<AppearanceDictionary>,
}

impl MarkupAnnotation {
    /// Create an annotation with no geometry, color or appearance.
    pub fn new(subtype: AnnotationSubtype) -> Self {
        Self {
            subtype,
            rect: None,
            quad_points: None,
            border_style: None,
            border: None,
            color: AnnotationColor::None,
            opacity: 1.0,
            appearance: None,
        }
    }

    /// Create a squiggly underline annotation.
    pub fn squiggly() -> Self {
        Self::new(AnnotationSubtype::Squiggly)
    }

    /// Set the bounding rectangle.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    /// Set the flat quad point sequence.
    pub fn with_quad_points(mut self, quad_points: Vec<f32>) -> Self {
        self.quad_points = Some(quad_points);
        self
    }

    /// Append the quad covering `rect`, in producer order
    /// (top-left, top-right, bottom-left, bottom-right).
    pub fn with_quad_for_rect(mut self, rect: Rect) -> Self {
        self.quad_points.get_or_insert_with(Vec::new).extend_from_slice(&[
            rect.llx, rect.ury, rect.urx, rect.ury, rect.llx, rect.lly, rect.urx, rect.lly,
        ]);
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: AnnotationColor) -> Self {
        self.color = color;
        self
    }

    /// Set the opacity (0.0 = transparent, 1.0 = opaque).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the border style dictionary.
    pub fn with_border_style(mut self, style: AnnotationBorderStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Set the legacy border array.
    pub fn with_border(mut self, border: AnnotationBorderArray) -> Self {
        self.border = Some(border);
        self
    }

    /// Complete quads of the /QuadPoints sequence.
    ///
    /// A trailing partial group is not a quad and is skipped.
    pub fn quads(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.quad_points
            .as_deref()
            .unwrap_or_default()
            .chunks_exact(QUAD_LEN)
    }

    /// The normal appearance, if one is attached.
    pub fn normal_appearance(&self) -> Option<&crate::writer::FormXObject> {
        self.appearance.as_ref().and_then(|ap| ap.normal.as_ref())
    }

    /// Parse a text markup annotation dictionary.
    ///
    /// Fails if /Subtype is missing or names a non text markup annotation.
    /// Malformed optional entries are dropped with a warning. An existing
    /// /AP is not read back; appearances are regenerated.
    pub fn from_dict(dict: &HashMap<String, Object>) -> Result<Self> {
        let subtype_name = dict
            .get("Subtype")
            .and_then(Object::as_name)
            .ok_or_else(|| Error::InvalidAnnotation("missing /Subtype".to_string()))?;
        let subtype = AnnotationSubtype::from_pdf_name(subtype_name).ok_or_else(|| {
            Error::InvalidAnnotation(format!("/{} is not a text markup annotation", subtype_name))
        })?;

        let mut annot = Self::new(subtype);

        if let Some(obj) = dict.get("Rect") {
            annot.rect = Rect::from_object(obj);
            if annot.rect.is_none() {
                log::warn!("ignoring malformed /Rect on {} annotation", subtype_name);
            }
        }

        if let Some(obj) = dict.get("QuadPoints") {
            match obj.to_number_array() {
                Ok(values) => annot.quad_points = Some(values),
                Err(e) => log::warn!("ignoring malformed /QuadPoints: {}", e),
            }
        }

        annot.border_style = dict.get("BS").and_then(AnnotationBorderStyle::from_object);
        annot.border = dict.get("Border").and_then(AnnotationBorderArray::from_object);

        if let Some(obj) = dict.get("C") {
            match obj.to_number_array() {
                Ok(values) => annot.color = AnnotationColor::from_array(&values),
                Err(e) => log::warn!("ignoring malformed /C: {}", e),
            }
        }

        if let Some(ca) = dict.get("CA").and_then(Object::as_number) {
            annot.opacity = (ca as f32).clamp(0.0, 1.0);
        }

        Ok(annot)
    }

    /// Build the annotation dictionary.
    pub fn to_dict(&self) -> HashMap<String, Object> {
        let mut dict = HashMap::new();

        dict.insert("Type".to_string(), Object::Name("Annot".to_string()));
        dict.insert("Subtype".to_string(), Object::Name(self.subtype.pdf_name().to_string()));

        if let Some(rect) = &self.rect {
            dict.insert("Rect".to_string(), rect.to_object());
        }
        if let Some(quads) = &self.quad_points {
            dict.insert("QuadPoints".to_string(), Object::real_array(quads));
        }
        if let Some(bs) = &self.border_style {
            dict.insert("BS".to_string(), bs.to_object());
        }
        if let Some(border) = &self.border {
            dict.insert("Border".to_string(), border.to_object());
        }
        if !self.color.is_empty() {
            dict.insert("C".to_string(), Object::real_array(&self.color.components()));
        }
        if self.opacity < 1.0 {
            dict.insert("CA".to_string(), Object::Real(self.opacity as f64));
        }
        if let Some(ap) = &self.appearance {
            dict.insert("AP".to_string(), ap.to_object());
        }

        dict
    }
}
