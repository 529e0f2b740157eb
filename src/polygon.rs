//! # Polygon splitting at the right ascension seam
//!
//! A polygon drawn on the celestial sphere may wrap across the 0h/24h seam.
//! Rendered naively on an unrolled chart, such a polygon would smear a band
//! across the whole image. This module breaks a wrapping polygon into simple
//! fragments that each stay within the [0, 24] band.
//!
//! ## Overview
//!
//! Walking consecutive vertex pairs, an edge whose signed RA jump exceeds
//! the seam threshold is cut at the seam. The open fragment is closed with an
//! interpolated point on its side of the seam and a new fragment is opened
//! with the matching point on the opposite side. Fragments are stored in a
//! single shared vertex arena and addressed by index spans.

use std::ops::Range;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::constants::HOURS_PER_TURN;
use crate::coordinates::{crosses_seam_backward, crosses_seam_forward, dec_at_ra, SkyPoint};

/// A polygon on the celestial sphere, stored as an open vertex list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<SkyPoint>,
}

impl Polygon {
    pub fn new(vertices: Vec<SkyPoint>) -> Self {
        Polygon { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// The result of splitting one polygon at the seam.
///
/// All fragment vertices live in one shared arena. Each fragment is a
/// contiguous span of that arena, so iterating fragments hands out slices
/// without copying vertex data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimplePolygons {
    vertices: Vec<SkyPoint>,
    spans: SmallVec<[Range<usize>; 4]>,
}

impl SimplePolygons {
    /// Number of simple fragments.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Vertices of the `index`-th fragment, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&[SkyPoint]> {
        self.spans.get(index).map(|span| &self.vertices[span.clone()])
    }

    /// Iterate over the fragments as vertex slices, in splitting order.
    pub fn iter(&self) -> impl Iterator<Item = &[SkyPoint]> {
        self.spans.iter().map(|span| &self.vertices[span.clone()])
    }
}

/// Break a polygon into simple fragments that never wrap across the seam.
///
/// An edge crossing the seam is cut at the RA where it meets it, with the
/// declination interpolated linearly in the unrolled plane. The fragment
/// being built is closed with the cut point on its side of the seam, and the
/// next fragment opens with the matching cut point on the other side.
///
/// Arguments
/// ---------
/// * `polygon`: the vertex list to split, in drawing order
///
/// Return
/// ------
/// * `SimplePolygons`: the seam-free fragments, empty when `polygon` has
///   fewer than two vertices
pub fn break_into_simple(polygon: &Polygon) -> SimplePolygons {
    let mut split = SimplePolygons::default();
    if polygon.vertices.len() < 2 {
        return split;
    }

    let mut span_start = 0;
    split.vertices.push(polygon.vertices[0]);

    for (prev, curr) in polygon.vertices.iter().copied().tuple_windows() {
        if crosses_seam_forward(prev.ra, curr.ra) {
            // wraps past 24h: cut at the seam and restart from 0h
            let unwrapped = curr.shift_forward();
            let seam_dec = dec_at_ra(prev, unwrapped, HOURS_PER_TURN);
            split.vertices.push(SkyPoint::new(HOURS_PER_TURN, seam_dec));
            split.spans.push(span_start..split.vertices.len());
            span_start = split.vertices.len();
            split.vertices.push(SkyPoint::new(0.0, seam_dec));
            split.vertices.push(curr);
        } else if crosses_seam_backward(prev.ra, curr.ra) {
            // wraps below 0h: cut at the seam and restart from 24h
            let unwrapped = curr.shift_backward();
            let seam_dec = dec_at_ra(prev, unwrapped, 0.0);
            split.vertices.push(SkyPoint::new(0.0, seam_dec));
            split.spans.push(span_start..split.vertices.len());
            span_start = split.vertices.len();
            split.vertices.push(SkyPoint::new(HOURS_PER_TURN, seam_dec));
            split.vertices.push(curr);
        } else {
            split.vertices.push(curr);
        }
    }
    split.spans.push(span_start..split.vertices.len());
    split
}
