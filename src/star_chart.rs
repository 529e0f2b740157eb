//! # Star chart rendering
//!
//! [`StarChart`] owns the catalogs and draws a complete chart onto any
//! [`DrawSurface`]. Rendering is a fixed sequence of passes, each painting
//! over the previous one:
//!
//! 1. white background
//! 2. milky way layers, faint to dense
//! 3. coordinate grid
//! 4. grid labels
//! 5. constellation figures
//! 6. stars
//! 7. deep-sky object glyphs
//! 8. frame outline
//!
//! ## Determinism
//!
//! Rendering the same chart twice produces the identical operation stream.
//! Stars draw in catalog-number order and target objects in list order;
//! nothing depends on hash iteration or wall-clock state.
//!
//! ## Failure model
//!
//! A target designation missing from the object catalog is skipped with a
//! warning and reported in the returned [`RenderReport`]. A constellation
//! figure referencing an unknown star aborts the render with
//! [`SkyplotError::StarNotFound`].

use crate::catalogs::{ConstellationFigure, DsoCatalog, StarCatalog};
use crate::color::gradient;
use crate::constants::{
    BLACK, CONSTELLATION_COLOR, CONSTELLATION_LINE_WIDTH, DEC_GRID_STEP, DEC_LABEL_DROP,
    DEC_LABEL_GAP, DSO_GLYPH_SCALE, FRAME_LINE_WIDTH, GRID_COLOR, GRID_LINE_WIDTH,
    LABEL_FONT_SIZE, MILKY_WAY_DENSE, MILKY_WAY_FAINT, RA_LABEL_DROP, STAR_RADIUS_OFFSET,
    STAR_RADIUS_SLOPE, WHITE,
};
use crate::frame::ChartFrame;
use crate::glyphs::GlyphCatalog;
use crate::milky_way::MilkyWaySky;
use crate::polygon::break_into_simple;
use crate::skyplot_errors::SkyplotError;
use crate::surface::{DrawSurface, FillRule, TextAnchor};

/// What a render had to leave out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderReport {
    /// Target designations that were not in the object catalog, in request
    /// order.
    pub missing_objects: Vec<String>,
}

/// A star chart ready to render.
pub struct StarChart {
    width: u32,
    height: u32,
    frame: ChartFrame,
    stars: StarCatalog,
    figures: Vec<ConstellationFigure>,
    milky_way: MilkyWaySky,
    objects: DsoCatalog,
    targets: Vec<String>,
    glyphs: GlyphCatalog,
}

impl StarChart {
    /// Build a chart of the given pixel size around loaded catalogs.
    ///
    /// Arguments
    /// ---------
    /// * `width`, `height`: chart size in pixels
    /// * `stars`: the star catalog
    /// * `figures`: constellation figures to stroke
    /// * `milky_way`: the assembled milky way layers
    /// * `objects`: the deep-sky object catalog
    /// * `targets`: designations of the objects to mark, in plotting order
    pub fn new(
        width: u32,
        height: u32,
        stars: StarCatalog,
        figures: Vec<ConstellationFigure>,
        milky_way: MilkyWaySky,
        objects: DsoCatalog,
        targets: Vec<String>,
    ) -> Self {
        let frame = ChartFrame::with_margin(f64::from(width), f64::from(height));
        StarChart {
            width,
            height,
            frame,
            stars,
            figures,
            milky_way,
            objects,
            targets,
            glyphs: GlyphCatalog::standard(),
        }
    }

    /// The frame sky coordinates project into.
    pub fn frame(&self) -> ChartFrame {
        self.frame
    }

    /// Render the whole chart onto a surface.
    ///
    /// Return
    /// ------
    /// * `Result<RenderReport, SkyplotError>`: the skipped targets on
    ///   success, or the first fatal error
    pub fn render(&self, surface: &mut dyn DrawSurface) -> Result<RenderReport, SkyplotError> {
        self.draw_background(surface);
        self.draw_milky_way(surface);
        self.draw_grid(surface);
        self.draw_labels(surface);
        self.draw_constellations(surface)?;
        self.draw_stars(surface);
        let missing_objects = self.draw_objects(surface);
        self.draw_frame_outline(surface);
        Ok(RenderReport { missing_objects })
    }

    fn draw_background(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(WHITE);
        surface.rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        surface.fill();
    }

    /// Fill the milky way layers from the faintest shade up to the densest.
    /// Each layer's contours become subpaths of a single even-odd fill, so
    /// nested contours punch out the ring between them.
    fn draw_milky_way(&self, surface: &mut dyn DrawSurface) {
        let layer_count = self.milky_way.layers.len();
        if layer_count < 2 {
            log::debug!("milky way has {layer_count} layer(s), nothing to shade");
            return;
        }

        surface.save();
        surface.set_fill_rule(FillRule::EvenOdd);
        for (index, layer) in self.milky_way.layers.iter().enumerate() {
            let depth = index as f64 / (layer_count - 1) as f64;
            surface.set_color(gradient(MILKY_WAY_FAINT, MILKY_WAY_DENSE, depth));
            for poly in &layer.polys {
                for (vertex_index, vertex) in poly.vertices.iter().enumerate() {
                    let x = self.frame.ra_to_x(vertex.ra);
                    let y = self.frame.dec_to_y(vertex.dec);
                    if vertex_index == 0 {
                        surface.move_to(x, y);
                    } else {
                        surface.line_to(x, y);
                    }
                }
            }
            surface.fill();
        }
        surface.restore();
    }

    fn draw_grid(&self, surface: &mut dyn DrawSurface) {
        surface.set_line_width(GRID_LINE_WIDTH);
        surface.set_color(GRID_COLOR);
        for ra in 0..24 {
            let x = self.frame.ra_to_x(f64::from(ra));
            surface.move_to(x, self.frame.top);
            surface.line_to(x, self.frame.bottom());
            surface.stroke();
        }

        for dec in (-90..90).step_by(DEC_GRID_STEP) {
            let y = self.frame.dec_to_y(f64::from(dec));
            surface.move_to(self.frame.left, y);
            surface.line_to(self.frame.right(), y);
            surface.stroke();
        }
    }

    /// RA labels run under the bottom edge, centered on their grid line.
    /// Dec labels sit left of the frame, end-aligned so they never run into
    /// it. Both ends of each axis are labeled, so 0 and 24 appear together.
    fn draw_labels(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(BLACK);
        surface.set_font_size(LABEL_FONT_SIZE);

        for ra in 0..=24 {
            let x = self.frame.ra_to_x(f64::from(ra));
            let y = self.frame.bottom() + RA_LABEL_DROP;
            surface.show_text(x, y, TextAnchor::Middle, &ra.to_string());
        }

        for dec in (-90..=90).step_by(DEC_GRID_STEP) {
            let x = self.frame.left - DEC_LABEL_GAP;
            let y = self.frame.dec_to_y(f64::from(dec)) + DEC_LABEL_DROP;
            surface.show_text(x, y, TextAnchor::End, &dec.to_string());
        }
    }

    fn draw_constellations(&self, surface: &mut dyn DrawSurface) -> Result<(), SkyplotError> {
        surface.save();
        surface.set_color(CONSTELLATION_COLOR);
        surface.set_line_width(CONSTELLATION_LINE_WIDTH);
        for figure in &self.figures {
            let polygon = figure.to_polygon(&self.stars)?;
            let split = break_into_simple(&polygon);
            for fragment in split.iter() {
                for (vertex_index, vertex) in fragment.iter().enumerate() {
                    let x = self.frame.ra_to_x(vertex.ra);
                    let y = self.frame.dec_to_y(vertex.dec);
                    if vertex_index == 0 {
                        surface.move_to(x, y);
                    } else {
                        surface.line_to(x, y);
                    }
                }
                surface.stroke();
            }
        }
        surface.restore();
        Ok(())
    }

    /// Stars draw as filled black discs sized by magnitude. Stars whose
    /// magnitude puts their radius at or below zero are omitted.
    fn draw_stars(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(BLACK);
        for star in self.stars.values() {
            let radius = STAR_RADIUS_SLOPE * star.magnitude + STAR_RADIUS_OFFSET;
            if radius > 0.0 {
                let x = self.frame.ra_to_x(star.loc.ra);
                let y = self.frame.dec_to_y(star.loc.dec);
                surface.circle(x, y, radius);
                surface.fill();
            }
        }
    }

    fn draw_objects(&self, surface: &mut dyn DrawSurface) -> Vec<String> {
        let mut missing = Vec::new();
        for designation in &self.targets {
            let Some(object) = self.objects.get(designation) else {
                log::warn!("couldn't plot {designation}: not in the object catalog");
                missing.push(designation.clone());
                continue;
            };
            let x = self.frame.ra_to_x(object.loc.ra);
            let y = self.frame.dec_to_y(object.loc.dec);
            surface.save();
            surface.translate(x, y);
            surface.scale(DSO_GLYPH_SCALE, DSO_GLYPH_SCALE);
            self.glyphs.glyph(object.kind).draw(surface);
            surface.restore();
        }
        missing
    }

    fn draw_frame_outline(&self, surface: &mut dyn DrawSurface) {
        surface.rect(
            self.frame.left,
            self.frame.top,
            self.frame.width,
            self.frame.height,
        );
        surface.set_line_width(FRAME_LINE_WIDTH);
        surface.set_color(BLACK);
        surface.stroke();
    }
}

#[cfg(test)]
mod star_chart_test {
    use super::*;
    use crate::catalogs::{DeepSkyObject, DsoKind, Star};
    use crate::color::Color;
    use crate::coordinates::SkyPoint;
    use crate::milky_way::MilkyWayLayer;
    use crate::polygon::Polygon;
    use crate::surface::{DrawOp, RecordingSurface};

    fn star(ra: f64, dec: f64, magnitude: f64) -> Star {
        Star { loc: SkyPoint::new(ra, dec), magnitude }
    }

    fn empty_chart() -> StarChart {
        StarChart::new(
            400,
            300,
            StarCatalog::new(),
            Vec::new(),
            MilkyWaySky::default(),
            DsoCatalog::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_background_comes_first_and_frame_last() {
        let chart = empty_chart();
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface).unwrap();
        let ops = surface.ops();

        assert_eq!(ops[0], DrawOp::SetColor(WHITE));
        assert_eq!(
            ops[1],
            DrawOp::Rect { x: 0.0, y: 0.0, width: 400.0, height: 300.0 }
        );
        assert_eq!(ops[2], DrawOp::Fill);
        assert_eq!(ops.last(), Some(&DrawOp::Stroke));
    }

    #[test]
    fn test_grid_has_24_hour_lines_and_18_dec_lines() {
        let chart = empty_chart();
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface).unwrap();

        let grid_strokes = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::SetColor(c) if *c == GRID_COLOR))
            .count();
        // one color change before each block of grid lines
        assert_eq!(grid_strokes, 1);

        let strokes = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke))
            .count();
        // 24 hour lines, 18 dec lines and the frame outline
        assert_eq!(strokes, 24 + 18 + 1);
    }

    #[test]
    fn test_labels_cover_both_axis_ends() {
        let chart = empty_chart();
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface).unwrap();

        let labels: Vec<&str> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::ShowText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 25 + 19);
        assert!(labels.contains(&"0"));
        assert!(labels.contains(&"24"));
        assert!(labels.contains(&"-90"));
        assert!(labels.contains(&"90"));
    }

    #[test]
    fn test_faint_stars_are_omitted() {
        let mut stars = StarCatalog::new();
        stars.insert(1, star(2.0, 10.0, 1.0));
        stars.insert(2, star(3.0, 20.0, 7.0));

        let chart = StarChart::new(
            400,
            300,
            stars,
            Vec::new(),
            MilkyWaySky::default(),
            DsoCatalog::new(),
            Vec::new(),
        );
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface).unwrap();

        let discs = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count();
        // magnitude 7.0 maps to a negative radius
        assert_eq!(discs, 1);
    }

    #[test]
    fn test_stars_draw_in_catalog_number_order() {
        let mut stars = StarCatalog::new();
        stars.insert(9, star(9.0, 0.0, 1.0));
        stars.insert(1, star(1.0, 0.0, 1.0));
        stars.insert(5, star(5.0, 0.0, 1.0));

        let chart = StarChart::new(
            400,
            300,
            stars,
            Vec::new(),
            MilkyWaySky::default(),
            DsoCatalog::new(),
            Vec::new(),
        );
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface).unwrap();

        let frame = chart.frame();
        let xs: Vec<f64> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { cx, .. } => Some(*cx),
                _ => None,
            })
            .collect();
        assert_eq!(
            xs,
            vec![frame.ra_to_x(1.0), frame.ra_to_x(5.0), frame.ra_to_x(9.0)]
        );
    }

    #[test]
    fn test_missing_objects_are_reported_in_request_order() {
        let mut objects = DsoCatalog::new();
        objects.insert(
            "M31".to_string(),
            DeepSkyObject { kind: DsoKind::Galaxy, loc: SkyPoint::new(0.7, 41.3) },
        );

        let chart = StarChart::new(
            400,
            300,
            StarCatalog::new(),
            Vec::new(),
            MilkyWaySky::default(),
            objects,
            vec!["M99".to_string(), "M31".to_string(), "M98".to_string()],
        );
        let mut surface = RecordingSurface::new();
        let report = chart.render(&mut surface).unwrap();

        assert_eq!(report.missing_objects, vec!["M99", "M98"]);
        // the known object was still stamped
        assert!(surface
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::Scale { sx, sy } if *sx == DSO_GLYPH_SCALE && *sy == DSO_GLYPH_SCALE)));
    }

    #[test]
    fn test_unknown_constellation_star_aborts_the_render() {
        let chart = StarChart::new(
            400,
            300,
            StarCatalog::new(),
            vec![ConstellationFigure { star_ids: vec![77] }],
            MilkyWaySky::default(),
            DsoCatalog::new(),
            Vec::new(),
        );
        let mut surface = RecordingSurface::new();
        assert!(matches!(
            chart.render(&mut surface),
            Err(SkyplotError::StarNotFound(77))
        ));
    }

    #[test]
    fn test_single_milky_way_layer_is_not_shaded() {
        let layer = MilkyWayLayer {
            polys: vec![Polygon::new(vec![
                SkyPoint::new(1.0, 0.0),
                SkyPoint::new(1.5, 1.0),
                SkyPoint::new(1.0, 0.0),
            ])],
        };
        let chart = StarChart::new(
            400,
            300,
            StarCatalog::new(),
            Vec::new(),
            MilkyWaySky { layers: vec![layer] },
            DsoCatalog::new(),
            Vec::new(),
        );
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface).unwrap();

        assert!(!surface
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::SetFillRule(FillRule::EvenOdd))));
    }

    #[test]
    fn test_milky_way_layers_shade_from_faint_to_dense() {
        let band = |dec: f64| {
            MilkyWayLayer {
                polys: vec![Polygon::new(vec![
                    SkyPoint::new(1.0, dec),
                    SkyPoint::new(2.0, dec + 1.0),
                    SkyPoint::new(1.0, dec),
                ])],
            }
        };
        let chart = StarChart::new(
            400,
            300,
            StarCatalog::new(),
            Vec::new(),
            MilkyWaySky { layers: vec![band(0.0), band(10.0), band(20.0)] },
            DsoCatalog::new(),
            Vec::new(),
        );
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface).unwrap();

        let shades: Vec<Color> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::SetColor(color)
                    if *color != WHITE
                        && *color != GRID_COLOR
                        && *color != BLACK
                        && *color != CONSTELLATION_COLOR =>
                {
                    Some(*color)
                }
                _ => None,
            })
            .collect();
        assert_eq!(shades[0], MILKY_WAY_FAINT);
        assert_eq!(*shades.last().unwrap(), MILKY_WAY_DENSE);
    }

    #[test]
    fn test_rendering_twice_gives_identical_operations() {
        let mut stars = StarCatalog::new();
        stars.insert(1, star(23.5, 10.0, 1.0));
        stars.insert(2, star(0.5, 12.0, 2.0));
        let figures = vec![ConstellationFigure { star_ids: vec![1, 2] }];

        let chart = StarChart::new(
            640,
            480,
            stars,
            figures,
            MilkyWaySky::default(),
            DsoCatalog::new(),
            Vec::new(),
        );

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        chart.render(&mut first).unwrap();
        chart.render(&mut second).unwrap();
        assert_eq!(first.ops(), second.ops());
    }
}
