//! # Deep-sky object glyphs
//!
//! Each object class is stamped onto the chart with its own map symbol. A
//! glyph draws itself in a unit coordinate system centered on the object,
//! with a nominal radius of ten units; the renderer translates to the
//! object's chart position and scales the glyph down before stamping.
//!
//! Adding a symbol for a new object class means implementing [`Glyph`] and
//! registering it in [`GlyphCatalog::standard`].

use std::collections::HashMap;

use crate::catalogs::DsoKind;
use crate::color::Color;
use crate::constants::{BLACK, GLYPH_UNIT_RADIUS};
use crate::surface::{DrawSurface, LineCap};

/// A map symbol drawn around the origin of the current coordinate system.
pub trait Glyph {
    fn draw(&self, surface: &mut dyn DrawSurface);
}

/// Red ellipse, half as tall as it is wide.
pub struct GalaxyGlyph;

impl GalaxyGlyph {
    /// The ellipse outline is built under a squashed transform left behind
    /// before inking, so the pen is not squashed with it.
    fn ellipse_path(surface: &mut dyn DrawSurface) {
        surface.save();
        surface.scale(1.0, 0.5);
        surface.circle(0.0, 0.0, GLYPH_UNIT_RADIUS);
        surface.restore();
    }
}

impl Glyph for GalaxyGlyph {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        Self::ellipse_path(surface);
        surface.set_color(Color::new(1.0, 0.0, 0.0));
        surface.fill();
        Self::ellipse_path(surface);
        surface.set_color(BLACK);
        surface.stroke();
    }
}

/// Yellow disc ringed by a dotted outline.
pub struct OpenClusterGlyph;

impl Glyph for OpenClusterGlyph {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(Color::new(1.0, 1.0, 0.0));
        surface.circle(0.0, 0.0, GLYPH_UNIT_RADIUS);
        surface.fill();

        surface.set_color(BLACK);
        surface.set_dash(&[0.0, 7.0]);
        surface.set_line_cap(LineCap::Round);
        surface.set_line_width(3.0);
        surface.circle(0.0, 0.0, GLYPH_UNIT_RADIUS);
        surface.stroke();
    }
}

/// Yellow disc with a circled cross.
pub struct GlobularClusterGlyph;

impl Glyph for GlobularClusterGlyph {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(Color::new(1.0, 1.0, 0.0));
        surface.circle(0.0, 0.0, GLYPH_UNIT_RADIUS);
        surface.fill();

        surface.set_color(BLACK);
        surface.circle(0.0, 0.0, GLYPH_UNIT_RADIUS);
        surface.move_to(-GLYPH_UNIT_RADIUS, 0.0);
        surface.line_to(GLYPH_UNIT_RADIUS, 0.0);
        surface.move_to(0.0, -GLYPH_UNIT_RADIUS);
        surface.line_to(0.0, GLYPH_UNIT_RADIUS);
        surface.stroke();
    }
}

/// Green disc on a black cross.
pub struct PlanetaryNebulaGlyph;

impl Glyph for PlanetaryNebulaGlyph {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let cross_radius = 1.2 * GLYPH_UNIT_RADIUS;
        let disc_radius = 0.8 * GLYPH_UNIT_RADIUS;

        surface.set_color(BLACK);
        surface.move_to(-cross_radius, 0.0);
        surface.line_to(cross_radius, 0.0);
        surface.move_to(0.0, -cross_radius);
        surface.line_to(0.0, cross_radius);
        surface.stroke();

        surface.set_color(Color::new(0.0, 1.0, 0.0));
        surface.circle(0.0, 0.0, disc_radius);
        surface.fill();
        surface.set_color(BLACK);
        surface.circle(0.0, 0.0, disc_radius);
        surface.stroke();
    }
}

/// Green square with a black outline.
pub struct BrightNebulaGlyph;

impl Glyph for BrightNebulaGlyph {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let r = GLYPH_UNIT_RADIUS;
        surface.set_color(Color::new(0.0, 1.0, 0.0));
        surface.rect(-r, -r, 2.0 * r, 2.0 * r);
        surface.fill();
        surface.set_color(BLACK);
        surface.rect(-r, -r, 2.0 * r, 2.0 * r);
        surface.stroke();
    }
}

/// Plain black X.
pub struct AsterismGlyph;

impl Glyph for AsterismGlyph {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let r = GLYPH_UNIT_RADIUS;
        surface.set_color(BLACK);
        surface.move_to(-r, -r);
        surface.line_to(r, r);
        surface.move_to(r, -r);
        surface.line_to(-r, r);
        surface.stroke();
    }
}

/// Magenta dot on a horizontal bar.
pub struct DoubleStarGlyph;

impl Glyph for DoubleStarGlyph {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let bar_radius = 1.2 * GLYPH_UNIT_RADIUS;
        let dot_radius = 0.6 * GLYPH_UNIT_RADIUS;

        surface.save();
        surface.set_color(BLACK);
        surface.move_to(-bar_radius, 0.0);
        surface.line_to(bar_radius, 0.0);
        surface.stroke();

        surface.set_color(Color::new(1.0, 0.0, 1.0));
        surface.circle(0.0, 0.0, dot_radius);
        surface.fill();
        surface.set_color(BLACK);
        surface.circle(0.0, 0.0, dot_radius);
        surface.stroke();
        surface.restore();
    }
}

/// Orange diamond with a black outline.
pub struct CarbonStarGlyph;

impl CarbonStarGlyph {
    fn diamond_path(surface: &mut dyn DrawSurface) {
        let r = GLYPH_UNIT_RADIUS;
        surface.move_to(-r, 0.0);
        surface.line_to(0.0, -r);
        surface.line_to(r, 0.0);
        surface.line_to(0.0, r);
        surface.close_path();
    }
}

impl Glyph for CarbonStarGlyph {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_color(Color::new(1.0, 0.5, 0.0));
        Self::diamond_path(surface);
        surface.fill();
        surface.set_color(BLACK);
        Self::diamond_path(surface);
        surface.stroke();
    }
}

/// The glyphs for every object class, built once per chart.
pub struct GlyphCatalog {
    glyphs: HashMap<DsoKind, Box<dyn Glyph>>,
}

impl GlyphCatalog {
    /// The standard symbol set, covering every [`DsoKind`].
    pub fn standard() -> Self {
        let mut glyphs: HashMap<DsoKind, Box<dyn Glyph>> = HashMap::new();
        glyphs.insert(DsoKind::Galaxy, Box::new(GalaxyGlyph));
        glyphs.insert(DsoKind::OpenCluster, Box::new(OpenClusterGlyph));
        glyphs.insert(DsoKind::GlobularCluster, Box::new(GlobularClusterGlyph));
        glyphs.insert(DsoKind::PlanetaryNebula, Box::new(PlanetaryNebulaGlyph));
        glyphs.insert(DsoKind::BrightNebula, Box::new(BrightNebulaGlyph));
        glyphs.insert(DsoKind::Asterism, Box::new(AsterismGlyph));
        glyphs.insert(DsoKind::Double, Box::new(DoubleStarGlyph));
        glyphs.insert(DsoKind::Carbon, Box::new(CarbonStarGlyph));
        GlyphCatalog { glyphs }
    }

    /// The glyph for an object class. The catalog built by
    /// [`standard`](GlyphCatalog::standard) is total over kinds.
    pub fn glyph(&self, kind: DsoKind) -> &dyn Glyph {
        self.glyphs[&kind].as_ref()
    }
}

#[cfg(test)]
mod glyphs_test {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    const ALL_KINDS: [DsoKind; 8] = [
        DsoKind::Galaxy,
        DsoKind::OpenCluster,
        DsoKind::GlobularCluster,
        DsoKind::PlanetaryNebula,
        DsoKind::BrightNebula,
        DsoKind::Asterism,
        DsoKind::Double,
        DsoKind::Carbon,
    ];

    #[test]
    fn test_standard_catalog_covers_every_kind() {
        let catalog = GlyphCatalog::standard();
        for kind in ALL_KINDS {
            let mut surface = RecordingSurface::new();
            catalog.glyph(kind).draw(&mut surface);
            assert!(!surface.ops().is_empty(), "no operations for {kind:?}");
        }
    }

    #[test]
    fn test_carbon_star_operation_sequence() {
        let mut surface = RecordingSurface::new();
        CarbonStarGlyph.draw(&mut surface);
        assert_eq!(
            surface.ops(),
            &[
                DrawOp::SetColor(Color::new(1.0, 0.5, 0.0)),
                DrawOp::MoveTo { x: -10.0, y: 0.0 },
                DrawOp::LineTo { x: 0.0, y: -10.0 },
                DrawOp::LineTo { x: 10.0, y: 0.0 },
                DrawOp::LineTo { x: 0.0, y: 10.0 },
                DrawOp::ClosePath,
                DrawOp::Fill,
                DrawOp::SetColor(Color::new(0.0, 0.0, 0.0)),
                DrawOp::MoveTo { x: -10.0, y: 0.0 },
                DrawOp::LineTo { x: 0.0, y: -10.0 },
                DrawOp::LineTo { x: 10.0, y: 0.0 },
                DrawOp::LineTo { x: 0.0, y: 10.0 },
                DrawOp::ClosePath,
                DrawOp::Stroke,
            ]
        );
    }

    #[test]
    fn test_galaxy_ellipse_is_built_under_a_squashed_transform() {
        let mut surface = RecordingSurface::new();
        GalaxyGlyph.draw(&mut surface);
        let ops = surface.ops();

        // two ellipse passes, each saved and restored around the squash
        let saves = ops.iter().filter(|op| matches!(op, DrawOp::Save)).count();
        let restores = ops.iter().filter(|op| matches!(op, DrawOp::Restore)).count();
        assert_eq!(saves, 2);
        assert_eq!(restores, 2);
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, DrawOp::Scale { sx, sy } if *sx == 1.0 && *sy == 0.5))
                .count(),
            2
        );

        // the fill is red, the stroke black
        assert!(ops.contains(&DrawOp::SetColor(Color::new(1.0, 0.0, 0.0))));
        assert_eq!(ops.last(), Some(&DrawOp::Stroke));
    }

    #[test]
    fn test_open_cluster_outline_is_dotted() {
        let mut surface = RecordingSurface::new();
        OpenClusterGlyph.draw(&mut surface);
        let ops = surface.ops();

        assert!(ops.contains(&DrawOp::SetDash(vec![0.0, 7.0])));
        assert!(ops.contains(&DrawOp::SetLineCap(LineCap::Round)));
        assert!(ops.contains(&DrawOp::SetLineWidth(3.0)));
    }

    #[test]
    fn test_planetary_nebula_cross_reaches_past_the_disc() {
        let mut surface = RecordingSurface::new();
        PlanetaryNebulaGlyph.draw(&mut surface);
        let ops = surface.ops();

        assert!(ops.contains(&DrawOp::LineTo { x: 12.0, y: 0.0 }));
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, DrawOp::Circle { radius, .. } if *radius == 8.0))
                .count(),
            2
        );
    }

    #[test]
    fn test_double_star_restores_surface_state() {
        let mut surface = RecordingSurface::new();
        DoubleStarGlyph.draw(&mut surface);
        let ops = surface.ops();

        assert_eq!(ops.first(), Some(&DrawOp::Save));
        assert_eq!(ops.last(), Some(&DrawOp::Restore));
        assert!(ops.contains(&DrawOp::Circle { cx: 0.0, cy: 0.0, radius: 6.0 }));
    }
}
