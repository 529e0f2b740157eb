//! # Drawing surfaces
//!
//! The renderer emits drawing operations against the [`DrawSurface`] trait
//! and never touches an output format directly. Two backends are provided:
//!
//! - [`RecordingSurface`] keeps the raw operation log, which makes render
//!   output comparable in tests.
//! - [`SvgSurface`] flattens the operations into an SVG document.
//!
//! The trait follows a stencil-and-ink model. Path segments accumulate on
//! the surface until a [`fill`](DrawSurface::fill) or
//! [`stroke`](DrawSurface::stroke) consumes them. Transforms apply to path
//! segments at the moment they are added, so a path built under a transform
//! keeps its position after the transform is restored. [`save`]
//! (DrawSurface::save) snapshots the transform together with the style
//! settings and [`restore`](DrawSurface::restore) brings them back.
//!
//! A fresh surface starts with black ink, line width 2, butt caps, no dash
//! pattern, the winding fill rule and font size 10.

pub mod recording;
pub mod svg;

pub use recording::{DrawOp, RecordingSurface};
pub use svg::SvgSurface;

use crate::color::Color;

/// Shape of stroked line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

/// Rule deciding which regions of a self-overlapping path are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    Winding,
    EvenOdd,
}

/// Horizontal alignment of drawn text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Abstract drawing surface the chart renderer draws onto.
pub trait DrawSurface {
    fn set_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_dash(&mut self, dashes: &[f64]);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_fill_rule(&mut self, rule: FillRule);
    fn set_font_size(&mut self, size: f64);

    /// Start a new subpath at the given point.
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Close the current subpath back to its starting point.
    fn close_path(&mut self);
    /// Add a full circle as a new subpath.
    fn circle(&mut self, cx: f64, cy: f64, radius: f64);
    /// Add an axis-aligned rectangle as a new closed subpath.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fill the accumulated path with the current color and clear it. Open
    /// subpaths are treated as closed.
    fn fill(&mut self);
    /// Stroke the accumulated path with the current color and width and
    /// clear it.
    fn stroke(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    /// Draw a text run aligned to `(x, y)` according to `anchor`.
    fn show_text(&mut self, x: f64, y: f64, anchor: TextAnchor, text: &str);
}
