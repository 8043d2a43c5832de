//! Squiggly (wavy) underline appearance.
//!
//! The wave is a tiling pattern holding one zig-zag stroke. Every text run
//! gets its own form whose rectangle is filled with that pattern, drawn
//! through a transform that maps a 40 unit tall tile space onto the run.
//! The wave shape and its proportions reproduce what Adobe Reader draws;
//! they are fixed constants, not derived from any document data.

use super::{AnnotationBorder, AppearanceHandler};
use crate::annotation_types::AnnotationColor;
use crate::annotations::MarkupAnnotation;
use crate::config::{AppearanceConfig, DegenerateRunPolicy};
use crate::error::Result;
use crate::geometry::{Matrix, Rect};
use crate::object::Object;
use crate::writer::{
    ExtGStateBuilder, FormXObject, LineCap, LineJoin, PatternTilingType, Resources, ScopedStream,
    StreamSink, TilingPatternBuilder,
};

/// Run height the wave tile is drawn for.
pub const WAVE_HEIGHT: f32 = 40.0;
/// Vertical scale divisor applied on top of the horizontal scale.
pub const VERTICAL_SQUASH: f32 = 1.8;
/// Width used for rectangle expansion when the border width is zero.
pub const DEFAULT_BORDER_WIDTH: f32 = 1.5;

/// Pattern cell width.
pub const TILE_WIDTH: f32 = 10.0;
/// Pattern cell height.
pub const TILE_HEIGHT: f32 = 12.0;
/// Horizontal pattern step.
pub const TILE_X_STEP: f32 = 10.0;
/// Vertical pattern step.
pub const TILE_Y_STEP: f32 = 13.0;
/// The zig-zag stroked in each pattern cell.
pub const WAVE_PATH: [(f32, f32); 3] = [(0.0, 1.0), (5.0, 11.0), (10.0, 1.0)];
/// Stroke width of the zig-zag.
pub const WAVE_LINE_WIDTH: f32 = 1.0;
/// Miter limit of the zig-zag.
pub const WAVE_MITER_LIMIT: f32 = 10.0;

/// Half-unit inset of each run form.
pub const FORM_INSET: f32 = 0.5;
/// Top edge of each run form's bounding box.
pub const FORM_TOP: f32 = 13.0;

/// Border width used for geometry: zero means [`DEFAULT_BORDER_WIDTH`].
pub fn effective_border_width(width: f32) -> f32 {
    if width == 0.0 {
        DEFAULT_BORDER_WIDTH
    } else {
        width
    }
}

/// Grow `rect` so it covers every coordinate pair in `quad_points` with
/// `width / 2` to spare.
///
/// All pairs are scanned, not just the corners a run uses. The result is
/// never smaller than `rect`.
pub fn expand_rect(rect: &Rect, quad_points: &[f32], width: f32) -> Rect {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for pair in quad_points.chunks_exact(2) {
        min_x = min_x.min(pair[0]);
        min_y = min_y.min(pair[1]);
        max_x = max_x.max(pair[0]);
        max_y = max_y.max(pair[1]);
    }

    let half = width / 2.0;
    Rect::new(
        rect.llx.min(min_x - half),
        rect.lly.min(min_y - half),
        rect.urx.max(max_x + half),
        rect.ury.max(max_y + half),
    )
}

/// Placement of the wave for one text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunGeometry {
    /// Top-left y minus bottom-left y
    pub height: f32,
    /// Run width in tile space
    pub tile_width: f32,
    /// Tile space to appearance space
    pub transform: Matrix,
}

impl RunGeometry {
    /// Derive the run placement from one quad.
    ///
    /// Only the first three points are read, in producer order: top-left,
    /// top-right, bottom-left. Returns `None` for fewer than six numbers.
    pub fn from_quad(quad: &[f32]) -> Option<Self> {
        let [x0, y0, x1, _, x2, y2, ..] = *quad else {
            return None;
        };

        let height = y0 - y2;
        let scale_x = height / WAVE_HEIGHT;
        let scale_y = scale_x / VERTICAL_SQUASH;

        Some(Self {
            height,
            tile_width: (x1 - x0) / height * WAVE_HEIGHT,
            transform: Matrix::scale_translate(scale_x, scale_y, x2, y2),
        })
    }

    /// Horizontal scale of the run transform.
    pub fn scale_x(&self) -> f32 {
        self.transform.a
    }

    /// Vertical scale of the run transform.
    pub fn scale_y(&self) -> f32 {
        self.transform.d
    }

    /// True if every derived number can be written to a content stream.
    pub fn is_finite(&self) -> bool {
        self.tile_width.is_finite() && self.transform.to_array().iter().all(|v| v.is_finite())
    }

    /// Bounding box of the run form.
    pub fn form_bbox(&self) -> Rect {
        Rect::new(-FORM_INSET, -FORM_INSET, self.fill_width(), FORM_TOP)
    }

    /// Width of the pattern filled rectangle.
    pub fn fill_width(&self) -> f32 {
        self.tile_width + FORM_INSET
    }

    fn accepted_by(&self, policy: DegenerateRunPolicy) -> bool {
        match policy {
            DegenerateRunPolicy::Skip => self.height > 0.0 && self.is_finite(),
            DegenerateRunPolicy::PassThrough => self.is_finite(),
        }
    }
}

/// Build the wave tiling pattern.
fn wave_pattern<S: StreamSink>(sink: &S) -> Result<Object> {
    let mut cs = ScopedStream::open(sink)?;
    cs.set_line_cap(LineCap::Round)
        .set_line_join(LineJoin::Round)
        .set_line_width(WAVE_LINE_WIDTH)
        .set_miter_limit(WAVE_MITER_LIMIT);

    let [(x0, y0), rest @ ..] = WAVE_PATH;
    cs.move_to(x0, y0);
    for (x, y) in rest {
        cs.line_to(x, y);
    }
    cs.stroke();
    let content = cs.close()?;

    Ok(TilingPatternBuilder::new()
        .bbox(Rect::new(0.0, 0.0, TILE_WIDTH, TILE_HEIGHT))
        .step(TILE_X_STEP, TILE_Y_STEP)
        .uncolored()
        .tiling_type(PatternTilingType::ConstantSpacingFaster)
        .content_bytes(content.to_vec())
        .build())
}

/// Build the form drawn for one run.
fn run_form<S: StreamSink>(
    sink: &S,
    run: &RunGeometry,
    color: &AnnotationColor,
    config: &AppearanceConfig,
) -> Result<FormXObject> {
    let mut cs = ScopedStream::open(sink)?;
    let mut resources = Resources::new();

    let pattern = resources.add_pattern(wave_pattern(sink)?);

    if config.bind_pattern_color {
        if let Some(base) = color.device_color_space() {
            let space = resources.add_color_space(Object::Array(vec![
                Object::Name("Pattern".to_string()),
                Object::Name(base.to_string()),
            ]));
            cs.set_fill_color_space(&space)
                .set_fill_pattern(&pattern, color.components());
        }
    }

    cs.rect(0.0, 0.0, run.fill_width(), TILE_HEIGHT).fill();

    Ok(FormXObject::new(run.form_bbox(), cs.close()?)
        .with_matrix(Matrix::translate(FORM_INSET, FORM_INSET))
        .with_resources(resources))
}

/// Build the normal appearance of a squiggly annotation.
///
/// Returns `Ok(None)` without touching the annotation when it has no
/// rectangle, no quad points or no color. Otherwise the rectangle is
/// expanded first, then the appearance is built.
pub fn build_normal_appearance<S: StreamSink>(
    annotation: &mut MarkupAnnotation,
    sink: &S,
    config: &AppearanceConfig,
) -> Result<Option<FormXObject>> {
    let Some(rect) = annotation.rect else {
        return Ok(None);
    };
    let quad_points = match annotation.quad_points.as_deref() {
        Some(points) if !points.is_empty() => points,
        _ => return Ok(None),
    };
    if annotation.color.is_empty() {
        return Ok(None);
    }

    let border = AnnotationBorder::resolve(annotation);
    let width = effective_border_width(border.width);
    let bbox = expand_rect(&rect, quad_points, width);
    annotation.rect = Some(bbox);

    let mut cs = ScopedStream::open(sink)?;
    let mut resources = Resources::new();

    if annotation.opacity < 1.0 {
        let alpha = ExtGStateBuilder::new().alpha(annotation.opacity).build();
        let gs = resources.add_ext_gstate(alpha);
        cs.set_ext_gstate(&gs);
    }
    cs.stroke_color(&annotation.color);

    for (i, quad) in annotation.quads().enumerate() {
        let Some(run) = RunGeometry::from_quad(quad) else {
            continue;
        };
        if !run.accepted_by(config.degenerate_runs) {
            log::debug!("skipping squiggly run {} with height {}", i, run.height);
            continue;
        }

        let form = run_form(sink, &run, &annotation.color, config)?;
        let name = resources.add_form(form);
        cs.save_state()
            .transform(&run.transform)
            .paint_xobject(&name)
            .restore_state();
    }

    let content = cs.close()?;
    Ok(Some(
        FormXObject::new(bbox, content)
            .with_matrix(Matrix::translate(-bbox.llx, -bbox.lly))
            .with_resources(resources),
    ))
}

/// Appearance handler for squiggly annotations.
pub struct SquigglyAppearanceHandler<'a, S: StreamSink> {
    annotation: &'a mut MarkupAnnotation,
    sink: &'a S,
    config: AppearanceConfig,
}

impl<'a, S: StreamSink> SquigglyAppearanceHandler<'a, S> {
    /// Create a handler writing into `annotation`.
    pub fn new(
        annotation: &'a mut MarkupAnnotation,
        sink: &'a S,
        config: AppearanceConfig,
    ) -> Self {
        Self {
            annotation,
            sink,
            config,
        }
    }
}

impl<S: StreamSink> AppearanceHandler for SquigglyAppearanceHandler<'_, S> {
    fn generate_normal_appearance(&mut self) {
        match build_normal_appearance(self.annotation, self.sink, &self.config) {
            Ok(Some(form)) => {
                self.annotation
                    .appearance
                    .get_or_insert_with(Default::default)
                    .normal = Some(form);
            },
            Ok(None) => {},
            Err(e) => {
                log::error!(target: "squiggly", "failed to generate normal appearance: {}", e)
            },
        }
    }

    fn generate_rollover_appearance(&mut self) {}

    fn generate_down_appearance(&mut self) {}
}
