//! Markup Appearance Generator
//!
//! Reads a text markup annotation described in JSON, generates its
//! appearance streams and prints the annotation dictionary in PDF syntax.
//!
//! Usage:
//!   cargo run --bin markup_appearance -- annotation.json
//!   cargo run --bin markup_appearance -- - --compact < annotation.json
//!   cargo run --bin markup_appearance -- annotation.json --no-pattern-color
//!   cargo run --bin markup_appearance -- annotation.json --keep-degenerate
//!
//! Input:
//!   {"subtype": "Squiggly", "rect": [72, 700, 272, 712],
//!    "quad_points": [72, 712, 272, 712, 72, 700, 272, 700],
//!    "color": [1, 0, 0], "opacity": 0.8, "border_width": 1}

use pdf_markup::annotation_types::{AnnotationBorderStyle, AnnotationColor, AnnotationSubtype};
use pdf_markup::annotations::MarkupAnnotation;
use pdf_markup::appearance::appearance_handler;
use pdf_markup::config::{AppearanceConfig, DegenerateRunPolicy};
use pdf_markup::geometry::Rect;
use pdf_markup::object::Object;
use pdf_markup::writer::{MemorySink, ObjectSerializer};
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct AnnotationInput {
    #[serde(default = "default_subtype")]
    subtype: String,
    rect: Option<[f32; 4]>,
    quad_points: Option<Vec<f32>>,
    #[serde(default)]
    color: Vec<f32>,
    opacity: Option<f32>,
    border_width: Option<f32>,
}

fn default_subtype() -> String {
    "Squiggly".to_string()
}

impl AnnotationInput {
    fn into_annotation(self) -> Result<MarkupAnnotation, String> {
        let subtype = AnnotationSubtype::from_pdf_name(&self.subtype)
            .ok_or_else(|| format!("unsupported subtype: {}", self.subtype))?;

        let mut annot = MarkupAnnotation::new(subtype)
            .with_color(AnnotationColor::from_array(&self.color));
        annot.rect = self
            .rect
            .map(|[x0, y0, x1, y1]| Rect::from_corners(x0, y0, x1, y1));
        annot.quad_points = self.quad_points;
        if let Some(opacity) = self.opacity {
            annot = annot.with_opacity(opacity);
        }
        if let Some(width) = self.border_width {
            annot = annot.with_border_style(AnnotationBorderStyle::solid(width));
        }
        Ok(annot)
    }
}

struct ToolConfig {
    input: Option<PathBuf>,
    compact: bool,
    appearance: AppearanceConfig,
}

impl ToolConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut compact = false;
        let mut appearance = AppearanceConfig::default();

        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--compact" => {
                    compact = true;
                },
                "--no-pattern-color" => {
                    appearance = appearance.with_pattern_color(false);
                },
                "--keep-degenerate" => {
                    appearance = appearance.with_degenerate_runs(DegenerateRunPolicy::PassThrough);
                },
                "-" => {
                    input = None;
                },
                path => {
                    input = Some(PathBuf::from(path));
                },
            }
        }

        Self {
            input,
            compact,
            appearance,
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        },
    }
}

fn main() {
    env_logger::init();

    let config = ToolConfig::from_args();

    let json = match read_input(config.input.as_ref()) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            std::process::exit(1);
        },
    };

    let input: AnnotationInput = match serde_json::from_str(&json) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Invalid annotation JSON: {}", e);
            std::process::exit(1);
        },
    };

    let mut annot = match input.into_annotation() {
        Ok(annot) => annot,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        },
    };

    let subtype = annot.subtype;
    let sink = MemorySink;
    match appearance_handler(&mut annot, &sink, config.appearance) {
        Some(mut handler) => handler.generate_appearance_streams(),
        None => log::warn!("no appearance handler for /{}", subtype.pdf_name()),
    }

    if annot.normal_appearance().is_none() {
        log::warn!("no normal appearance was generated");
    }

    let serializer = if config.compact {
        ObjectSerializer::compact()
    } else {
        ObjectSerializer::new()
    };
    match serializer.serialize_to_string(&Object::Dictionary(annot.to_dict())) {
        Ok(pdf) => println!("{}", pdf),
        Err(e) => {
            eprintln!("Failed to serialize annotation: {}", e);
            std::process::exit(1);
        },
    }
}
