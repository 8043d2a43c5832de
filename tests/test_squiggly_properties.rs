//! Property tests for squiggly run geometry and rectangle expansion.

use pdf_markup::annotation_types::{AnnotationBorderStyle, AnnotationColor};
use pdf_markup::annotations::MarkupAnnotation;
use pdf_markup::appearance::squiggly::{
    build_normal_appearance, effective_border_width, expand_rect, RunGeometry, TILE_HEIGHT,
    TILE_WIDTH, VERTICAL_SQUASH, WAVE_HEIGHT,
};
use pdf_markup::config::AppearanceConfig;
use pdf_markup::geometry::Rect;
use pdf_markup::object::Object;
use pdf_markup::writer::MemorySink;
use proptest::prelude::*;

fn quad(x: f32, y: f32, w: f32, h: f32) -> Vec<f32> {
    vec![x, y + h, x + w, y + h, x, y, x + w, y]
}

proptest! {
    #[test]
    fn expanded_rect_contains_rect_and_points(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        w in 1.0f32..400.0,
        h in 1.0f32..100.0,
        border in 0.0f32..10.0,
    ) {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let points = quad(x, y, w, h);
        let expanded = expand_rect(&rect, &points, effective_border_width(border));

        prop_assert!(expanded.contains_rect(&rect));
        for pair in points.chunks_exact(2) {
            prop_assert!(expanded.llx <= pair[0] && pair[0] <= expanded.urx);
            prop_assert!(expanded.lly <= pair[1] && pair[1] <= expanded.ury);
        }
    }

    #[test]
    fn expansion_margin_is_half_width(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        width in 0.1f32..20.0,
    ) {
        // A tiny rect inside the quad leaves the quad as the bounds.
        let points = quad(x, y, 100.0, 50.0);
        let rect = Rect::new(x + 1.0, y + 1.0, x + 2.0, y + 2.0);
        let expanded = expand_rect(&rect, &points, width);

        prop_assert!((expanded.llx - (x - width / 2.0)).abs() < 1e-3);
        prop_assert!((expanded.ury - (y + 50.0 + width / 2.0)).abs() < 1e-3);
    }

    #[test]
    fn run_scale_is_proportional_to_height(
        x in -300.0f32..300.0,
        y in -300.0f32..300.0,
        w in 1.0f32..500.0,
        h in 0.5f32..200.0,
    ) {
        let run = RunGeometry::from_quad(&quad(x, y, w, h)).unwrap();

        prop_assert!((run.scale_x() - h / WAVE_HEIGHT).abs() < 1e-4);
        prop_assert!((run.scale_y() * VERTICAL_SQUASH - run.scale_x()).abs() < 1e-4);
        prop_assert_eq!((run.transform.e, run.transform.f), (x, y));

        // The run spans the full quad width once scaled back.
        prop_assert!((run.tile_width * run.scale_x() - w).abs() < 1e-2 * w.max(1.0));
    }

    #[test]
    fn pattern_tile_is_fixed_for_any_run(
        w in 1.0f32..500.0,
        h in 0.5f32..200.0,
    ) {
        let mut annot = MarkupAnnotation::squiggly()
            .with_rect(Rect::new(0.0, 0.0, w, h))
            .with_quad_points(quad(0.0, 0.0, w, h))
            .with_color(AnnotationColor::black());
        let ap = build_normal_appearance(&mut annot, &MemorySink, &AppearanceConfig::default())
            .unwrap()
            .unwrap();

        let form = ap.resources.form("Fm1").unwrap();
        let pattern = form.resources.pattern("P1").unwrap().as_dict().unwrap();
        prop_assert_eq!(
            pattern.get("BBox").and_then(Rect::from_object),
            Some(Rect::new(0.0, 0.0, TILE_WIDTH, TILE_HEIGHT))
        );
        prop_assert_eq!(pattern.get("XStep"), Some(&Object::Real(10.0)));
        prop_assert_eq!(pattern.get("YStep"), Some(&Object::Real(13.0)));
    }

    #[test]
    fn zero_border_behaves_like_default_width(
        x in -100.0f32..100.0,
        y in -100.0f32..100.0,
    ) {
        let points = quad(x, y, 80.0, 20.0);
        let rect = Rect::new(x, y, x + 1.0, y + 1.0);

        let mut zero = MarkupAnnotation::squiggly()
            .with_rect(rect)
            .with_quad_points(points.clone())
            .with_color(AnnotationColor::red())
            .with_border_style(AnnotationBorderStyle::solid(0.0));
        let mut default = MarkupAnnotation::squiggly()
            .with_rect(rect)
            .with_quad_points(points)
            .with_color(AnnotationColor::red())
            .with_border_style(AnnotationBorderStyle::solid(1.5));

        let config = AppearanceConfig::default();
        build_normal_appearance(&mut zero, &MemorySink, &config).unwrap();
        build_normal_appearance(&mut default, &MemorySink, &config).unwrap();
        prop_assert_eq!(zero.rect, default.rect);
    }
}
