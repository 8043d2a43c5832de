// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Markup
//!
//! Appearance stream generation for PDF text markup annotations.
//!
//! ## Features
//!
//! - **Squiggly underline**: Adobe Reader compatible wavy underline built from
//!   a tiling pattern, one transformed form per text run
//! - **Annotation model**: /Rect, /QuadPoints, /BS, /Border, /C, /CA and /AP,
//!   read from and written to PDF dictionaries
//! - **Scoped output**: content streams are opened on a pluggable
//!   [`writer::StreamSink`] and always closed or released
//! - **PDF syntax**: [`writer::ObjectSerializer`] for the generated objects
//!
//! ## Quick Start
//!
//! ```
//! use pdf_markup::annotation_types::AnnotationColor;
//! use pdf_markup::annotations::MarkupAnnotation;
//! use pdf_markup::appearance::appearance_handler;
//! use pdf_markup::config::AppearanceConfig;
//! use pdf_markup::geometry::Rect;
//! use pdf_markup::writer::{MemorySink, ObjectSerializer};
//! use pdf_markup::object::Object;
//!
//! # fn main() -> pdf_markup::Result<()> {
//! let line = Rect::new(72.0, 700.0, 272.0, 712.0);
//! let mut annot = MarkupAnnotation::squiggly()
//!     .with_rect(line)
//!     .with_quad_for_rect(line)
//!     .with_color(AnnotationColor::Rgb(0.0, 0.5, 0.0));
//!
//! let config = AppearanceConfig::default();
//! if let Some(mut handler) = appearance_handler(&mut annot, &MemorySink, config) {
//!     handler.generate_appearance_streams();
//! }
//!
//! let pdf = ObjectSerializer::new().serialize_to_string(&Object::Dictionary(annot.to_dict()))?;
//! assert!(pdf.contains("/AP"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Core PDF data model
pub mod object;

// Geometry
pub mod geometry;

// Configuration
pub mod config;

// Annotations
pub mod annotation_types;
pub mod annotations;

// Appearance generation
pub mod appearance;

// Content streams and PDF objects
pub mod writer;

pub use annotation_types::{
    AnnotationBorderArray, AnnotationBorderStyle, AnnotationColor, AnnotationSubtype,
    BorderStyleType,
};
pub use annotations::MarkupAnnotation;
pub use appearance::{appearance_handler, AnnotationBorder, AppearanceHandler};
pub use config::{AppearanceConfig, DegenerateRunPolicy};
pub use error::{Error, Result};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
