//! # Constants and type definitions for Skyplot
//!
//! This module centralizes the **celestial-sphere constants**, **chart layout
//! metrics**, and **common type definitions** used throughout the `skyplot`
//! library.
//!
//! ## Overview
//!
//! - Right ascension seam and wrap-around thresholds
//! - Chart geometry (margins, label placement, line widths)
//! - Star and deep-sky-object sizing rules
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the polygon
//! splitter, the milky way assembler, and the chart renderer.

use crate::color::Color;

// -------------------------------------------------------------------------------------------------
// Celestial sphere
// -------------------------------------------------------------------------------------------------

/// Hours of right ascension in one full turn of the celestial sphere
pub const HOURS_PER_TURN: f64 = 24.0;

/// Degrees of right ascension per hour
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Declination span of the celestial sphere, pole to pole, in degrees
pub const DEC_SPAN: f64 = 180.0;

/// Signed RA jump between consecutive vertices above which an edge is taken to
/// cross the 0h/24h seam rather than travel the long way around
pub const SEAM_JUMP_HOURS: f64 = 16.0;

/// Absolute RA jump between consecutive milky way contour vertices above which
/// the contour is considered interrupted by the seam
pub const LAYER_JUMP_HOURS: f64 = 1.0;

// -------------------------------------------------------------------------------------------------
// Chart layout
// -------------------------------------------------------------------------------------------------

/// Blank border around the plotting frame, in pixels
pub const CHART_MARGIN: Pixel = 15.0;

/// Line width of the outer frame rectangle
pub const FRAME_LINE_WIDTH: f64 = 2.0;

/// Line width of the coordinate grid
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// Line width of the constellation figures
pub const CONSTELLATION_LINE_WIDTH: f64 = 0.5;

/// Font size of the grid labels, in pixels
pub const LABEL_FONT_SIZE: f64 = 10.0;

/// Vertical drop of the RA labels below the frame, in pixels
pub const RA_LABEL_DROP: Pixel = 12.0;

/// Horizontal gap between the declination labels and the frame, in pixels
pub const DEC_LABEL_GAP: Pixel = 4.0;

/// Vertical drop applied to declination labels so they sit centered on their
/// grid line, in pixels
pub const DEC_LABEL_DROP: Pixel = 4.0;

/// Spacing of the declination grid lines and labels, in degrees
pub const DEC_GRID_STEP: usize = 10;

// -------------------------------------------------------------------------------------------------
// Symbol sizing
// -------------------------------------------------------------------------------------------------

/// Slope of the magnitude to star-disc-radius mapping
pub const STAR_RADIUS_SLOPE: f64 = -0.55;

/// Intercept of the magnitude to star-disc-radius mapping, in pixels
pub const STAR_RADIUS_OFFSET: f64 = 3.5;

/// Radius of a deep-sky glyph in its own unit coordinate system
pub const GLYPH_UNIT_RADIUS: f64 = 10.0;

/// Scale applied to a unit glyph when stamped onto the chart
pub const DSO_GLYPH_SCALE: f64 = 0.4;

// -------------------------------------------------------------------------------------------------
// Chart colors
// -------------------------------------------------------------------------------------------------

/// Ink for stars, labels and the frame
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// Chart background
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Coordinate grid lines
pub const GRID_COLOR: Color = Color::new(0.8, 0.8, 0.8);

/// Constellation figure strokes
pub const CONSTELLATION_COLOR: Color = Color::new(0.5, 0.0, 0.0);

/// Shade of the densest milky way layer
pub const MILKY_WAY_DENSE: Color = Color::new(0.73, 0.83, 1.0);

/// Shade of the faintest milky way layer
pub const MILKY_WAY_FAINT: Color = Color::new(0.875, 0.94, 1.0);

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Right ascension in hours, nominally within [0, 24)
pub type Hour = f64;

/// Declination in degrees, within [-90, 90]
pub type Degree = f64;

/// Distance on the rendered chart, in pixels
pub type Pixel = f64;

/// Catalog number of a star
pub type StarId = i64;
