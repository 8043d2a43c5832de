//! Appearance stream generation for text markup annotations.
//!
//! Each markup subtype draws its appearance with its own geometry rules
//! behind the common [`AppearanceHandler`] interface. Use
//! [`appearance_handler`] to pick the implementation for an annotation.
//!
//! # Example
//!
//! ```
//! use pdf_markup::annotation_types::AnnotationColor;
//! use pdf_markup::annotations::MarkupAnnotation;
//! use pdf_markup::appearance::appearance_handler;
//! use pdf_markup::config::AppearanceConfig;
//! use pdf_markup::geometry::Rect;
//! use pdf_markup::writer::MemorySink;
//!
//! let line = Rect::new(72.0, 700.0, 272.0, 712.0);
//! let mut annot = MarkupAnnotation::squiggly()
//!     .with_rect(line)
//!     .with_quad_for_rect(line)
//!     .with_color(AnnotationColor::red());
//!
//! let sink = MemorySink;
//! if let Some(mut handler) = appearance_handler(&mut annot, &sink, AppearanceConfig::default()) {
//!     handler.generate_appearance_streams();
//! }
//! assert!(annot.normal_appearance().is_some());
//! ```

pub mod squiggly;

pub use squiggly::SquigglyAppearanceHandler;

use crate::annotation_types::{AnnotationSubtype, BorderStyleType};
use crate::annotations::MarkupAnnotation;
use crate::config::AppearanceConfig;
use crate::writer::StreamSink;

/// Generates the appearance streams of one annotation.
///
/// Generation never fails from the caller's point of view: missing data
/// produces no appearance, and stream faults are logged.
pub trait AppearanceHandler {
    /// Generate the normal, rollover and down appearances in that order.
    fn generate_appearance_streams(&mut self) {
        self.generate_normal_appearance();
        self.generate_rollover_appearance();
        self.generate_down_appearance();
    }

    /// Generate the normal (/N) appearance.
    fn generate_normal_appearance(&mut self);

    /// Generate the rollover (/R) appearance.
    fn generate_rollover_appearance(&mut self);

    /// Generate the down (/D) appearance.
    fn generate_down_appearance(&mut self);
}

/// Pick the appearance handler for an annotation's subtype.
///
/// Returns `None` for subtypes without a handler in this crate.
pub fn appearance_handler<'a, S: StreamSink + 'a>(
    annotation: &'a mut MarkupAnnotation,
    sink: &'a S,
    config: AppearanceConfig,
) -> Option<Box<dyn AppearanceHandler + 'a>> {
    let subtype = annotation.subtype;
    match subtype {
        AnnotationSubtype::Squiggly => {
            Some(Box::new(SquigglyAppearanceHandler::new(annotation, sink, config)))
        },
        AnnotationSubtype::Highlight
        | AnnotationSubtype::Underline
        | AnnotationSubtype::StrikeOut => {
            log::debug!("no appearance handler for /{}", subtype.pdf_name());
            None
        },
    }
}

/// Effective border of an annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationBorder {
    /// Border width
    pub width: f32,
    /// Dash array, `None` for solid borders
    pub dash_array: Option<Vec<f32>>,
}

impl AnnotationBorder {
    /// Resolve the border from /BS, falling back to /Border.
    ///
    /// /BS wins when present and only contributes a dash array for the
    /// dashed style. Without either entry the width is 1. A dash array
    /// made only of zeros is dropped.
    pub fn resolve(annotation: &MarkupAnnotation) -> Self {
        let (width, dash_array) = match (&annotation.border_style, &annotation.border) {
            (Some(bs), _) => {
                let dash = if bs.style == BorderStyleType::Dashed {
                    bs.dash_pattern.clone()
                } else {
                    None
                };
                (bs.width, dash)
            },
            (None, Some(border)) => (border.width, border.dash.clone()),
            (None, None) => (1.0, None),
        };

        let dash_array = dash_array.filter(|d| d.iter().any(|&v| v != 0.0));
        Self { width, dash_array }
    }
}
