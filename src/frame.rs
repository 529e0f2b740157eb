//! The plotting frame and the sky-to-pixel projection.
//!
//! The chart is a plate carree unrolling of the celestial sphere: right
//! ascension maps linearly onto x and declination linearly onto y. RA
//! increases to the LEFT, matching the view of the sky from the ground, so
//! 0h sits at the right edge of the frame and 24h at the left.

use crate::constants::{Degree, Hour, Pixel, CHART_MARGIN, DEC_SPAN, HOURS_PER_TURN};

/// The rectangle of the chart that sky coordinates project into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub left: Pixel,
    pub top: Pixel,
    pub width: Pixel,
    pub height: Pixel,
}

impl ChartFrame {
    pub const fn new(left: Pixel, top: Pixel, width: Pixel, height: Pixel) -> Self {
        ChartFrame { left, top, width, height }
    }

    /// Frame inset into a chart of the given size by the standard margin.
    ///
    /// The left margin is doubled to leave room for the declination labels.
    pub fn with_margin(chart_width: Pixel, chart_height: Pixel) -> Self {
        ChartFrame::new(
            2.0 * CHART_MARGIN,
            CHART_MARGIN,
            chart_width - 3.0 * CHART_MARGIN,
            chart_height - 3.0 * CHART_MARGIN,
        )
    }

    pub fn right(&self) -> Pixel {
        self.left + self.width
    }

    pub fn bottom(&self) -> Pixel {
        self.top + self.height
    }

    /// Horizontal pixel position of a right ascension. 0h projects onto the
    /// right edge of the frame, 24h onto the left edge.
    pub fn ra_to_x(&self, ra: Hour) -> Pixel {
        self.left + self.width * (HOURS_PER_TURN - ra) / HOURS_PER_TURN
    }

    /// Vertical pixel position of a declination. +90 projects onto the top
    /// edge of the frame, -90 onto the bottom edge.
    pub fn dec_to_y(&self, dec: Degree) -> Pixel {
        self.top + self.height * (90.0 - dec) / DEC_SPAN
    }
}
