//! # Milky way contour assembly
//!
//! The milky way arrives as stacked density layers, each a list of closed
//! contour polygons. The source contours are cut wherever they meet the
//! 0h/24h seam, which leaves the band unusable for direct filling.
//!
//! ## Overview
//!
//! - Contours interrupted twice by the seam are dropped outright; filled with
//!   the even-odd rule they would punch holes across the whole chart.
//! - The outermost layer arrives as two half-contours. They are rotated so
//!   each starts just past the seam, then joined into a single band that is
//!   closed along both chart edges.
//! - The remaining layers stack on top of the repaired background, shaded
//!   from faint to dense by the renderer.

use itertools::Itertools;

use crate::constants::{HOURS_PER_TURN, LAYER_JUMP_HOURS};
use crate::coordinates::SkyPoint;
use crate::polygon::Polygon;

/// One density layer of the milky way, a list of contour polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MilkyWayLayer {
    pub polys: Vec<Polygon>,
}

/// All milky way layers, ordered from the faintest background to the densest
/// core.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MilkyWaySky {
    pub layers: Vec<MilkyWayLayer>,
}

impl MilkyWaySky {
    /// Assemble the drawable sky from raw contour layers.
    ///
    /// Each layer keeps only the contours not interrupted exactly twice by
    /// the seam, then the first layer has its two half-contours joined back
    /// into one closed band.
    ///
    /// Arguments
    /// ---------
    /// * `raw_layers`: contour polygons per layer, in file order
    ///
    /// Return
    /// ------
    /// * `MilkyWaySky`: the filtered and repaired layers, in the same order
    pub fn from_raw_layers(raw_layers: Vec<Vec<Polygon>>) -> MilkyWaySky {
        let mut layers = Vec::with_capacity(raw_layers.len());
        for (index, raw) in raw_layers.into_iter().enumerate() {
            let polys: Vec<Polygon> = raw
                .into_iter()
                .filter(|poly| {
                    let keep = seam_jump_count(poly) != 2;
                    if !keep {
                        log::debug!(
                            "dropping milky way contour with two seam interruptions ({} vertices)",
                            poly.len()
                        );
                    }
                    keep
                })
                .collect();
            let mut layer = MilkyWayLayer { polys };
            if index == 0 {
                layer = repair_background_layer(layer);
            }
            layers.push(layer);
        }
        MilkyWaySky { layers }
    }
}

/// Number of times a contour is interrupted by the seam, counted as vertex
/// pairs whose RA differs by more than one hour.
pub fn seam_jump_count(polygon: &Polygon) -> usize {
    polygon
        .vertices
        .iter()
        .tuple_windows()
        .filter(|(prev, curr)| (prev.ra - curr.ra).abs() > LAYER_JUMP_HOURS)
        .count()
}

/// Rotate a closed contour so it starts just past its first seam
/// interruption.
///
/// The contour is cut at the first vertex pair whose RA jumps by more than
/// one hour. The part after the cut comes first, with the ring-closing
/// duplicate of the start vertex dropped, followed by the part before the
/// cut. A contour with no interruption is returned unchanged.
pub fn rotate_to_seam(polygon: Polygon) -> Polygon {
    let verts = &polygon.vertices;
    let break_idx = verts
        .iter()
        .tuple_windows()
        .position(|(prev, curr)| (prev.ra - curr.ra).abs() > LAYER_JUMP_HOURS)
        .map(|found| found + 1);

    match break_idx {
        Some(idx) => {
            let mut rotated = Vec::with_capacity(verts.len() - 1);
            rotated.extend_from_slice(&verts[idx..verts.len() - 1]);
            rotated.extend_from_slice(&verts[..idx]);
            Polygon::new(rotated)
        }
        None => polygon,
    }
}

/// Join the two rotated halves of the background band into one closed
/// contour, bridging them along the 0h and 24h chart edges.
fn join_halves(first: &Polygon, second: &Polygon) -> Option<Polygon> {
    let first_head = first.vertices.first()?;
    let first_tail = first.vertices.last()?;
    let second_head = second.vertices.first()?;
    let second_tail = second.vertices.last()?;

    let mut joined = Vec::with_capacity(first.len() + second.len() + 4);
    joined.push(SkyPoint::new(0.0, first_head.dec));
    joined.extend_from_slice(&first.vertices);
    joined.push(SkyPoint::new(HOURS_PER_TURN, first_tail.dec));
    joined.push(SkyPoint::new(HOURS_PER_TURN, second_head.dec));
    joined.extend_from_slice(&second.vertices);
    joined.push(SkyPoint::new(0.0, second_tail.dec));
    Some(Polygon::new(joined))
}

/// Repair the outermost milky way layer.
///
/// The first two contours are taken to be the halves of the background band
/// left by the seam cut. They are rotated to the seam and joined into a
/// single closed contour. Of the remaining contours all but the final one
/// are kept behind the joined band; the final contour duplicates geometry
/// already covered by the join.
///
/// A layer with fewer than two contours is returned unchanged.
pub fn repair_background_layer(layer: MilkyWayLayer) -> MilkyWayLayer {
    if layer.polys.len() < 2 {
        log::debug!(
            "background layer has {} contour(s), leaving it as is",
            layer.polys.len()
        );
        return layer;
    }

    let first_half = rotate_to_seam(layer.polys[0].clone());
    let second_half = rotate_to_seam(layer.polys[1].clone());
    match join_halves(&first_half, &second_half) {
        Some(joined) => {
            let tail = layer.polys.get(2..layer.polys.len() - 1).unwrap_or(&[]);
            let mut polys = Vec::with_capacity(tail.len() + 1);
            polys.push(joined);
            polys.extend_from_slice(tail);
            MilkyWayLayer { polys }
        }
        None => layer,
    }
}

#[cfg(test)]
mod milky_way_test {
    use super::*;

    fn poly(points: &[(f64, f64)]) -> Polygon {
        Polygon::new(points.iter().map(|&(ra, dec)| SkyPoint::new(ra, dec)).collect())
    }

    fn ring_around_seam() -> Polygon {
        poly(&[(23.0, 0.0), (0.0, 0.0), (0.0, 5.0), (23.0, 5.0), (23.0, 0.0)])
    }

    #[test]
    fn test_seam_jump_count() {
        assert_eq!(seam_jump_count(&poly(&[(2.0, 0.0), (2.5, 1.0), (3.0, 0.0)])), 0);
        assert_eq!(seam_jump_count(&poly(&[(23.0, 0.0), (0.5, 0.0), (0.7, 1.0)])), 1);
        assert_eq!(seam_jump_count(&ring_around_seam()), 2);
        assert_eq!(seam_jump_count(&poly(&[])), 0);
    }

    #[test]
    fn test_exact_one_hour_step_is_not_a_jump() {
        assert_eq!(seam_jump_count(&poly(&[(3.0, 0.0), (4.0, 0.0), (5.0, 0.0)])), 0);
    }

    #[test]
    fn test_rotate_to_seam() {
        let rotated = rotate_to_seam(ring_around_seam());
        assert_eq!(
            rotated,
            poly(&[(0.0, 0.0), (0.0, 5.0), (23.0, 5.0), (23.0, 0.0)])
        );
    }

    #[test]
    fn test_rotate_without_interruption_is_identity() {
        let p = poly(&[(2.0, 0.0), (2.5, 1.0), (3.0, 0.0), (2.0, 0.0)]);
        assert_eq!(rotate_to_seam(p.clone()), p);
    }

    #[test]
    fn test_repair_joins_halves_and_trims_tail() {
        let first = poly(&[(0.2, 20.0), (0.8, 24.0)]);
        let second = poly(&[(23.0, -20.0), (23.8, -24.0)]);
        let keeper_a = poly(&[(5.0, 5.0), (5.5, 6.0)]);
        let keeper_b = poly(&[(6.0, 6.0), (6.5, 7.0)]);
        let dropped_tail = poly(&[(7.0, 7.0), (7.5, 8.0)]);

        let layer = MilkyWayLayer {
            polys: vec![first, second, keeper_a.clone(), keeper_b.clone(), dropped_tail],
        };
        let repaired = repair_background_layer(layer);

        let expected_band = poly(&[
            (0.0, 20.0),
            (0.2, 20.0),
            (0.8, 24.0),
            (24.0, 24.0),
            (24.0, -20.0),
            (23.0, -20.0),
            (23.8, -24.0),
            (0.0, -24.0),
        ]);
        assert_eq!(repaired.polys, vec![expected_band, keeper_a, keeper_b]);
    }

    #[test]
    fn test_repair_with_exactly_two_halves() {
        let first = poly(&[(0.2, 20.0), (0.8, 24.0)]);
        let second = poly(&[(23.0, -20.0), (23.8, -24.0)]);
        let layer = MilkyWayLayer { polys: vec![first, second] };
        let repaired = repair_background_layer(layer);
        assert_eq!(repaired.polys.len(), 1);
    }

    #[test]
    fn test_repair_leaves_thin_layer_unchanged() {
        let layer = MilkyWayLayer { polys: vec![poly(&[(5.0, 5.0), (5.5, 6.0)])] };
        assert_eq!(repair_background_layer(layer.clone()), layer);
    }

    #[test]
    fn test_assembly_filters_then_repairs() {
        let first = poly(&[(0.2, 20.0), (0.8, 24.0)]);
        let second = poly(&[(23.0, -20.0), (23.8, -24.0)]);
        let keeper = poly(&[(5.0, 5.0), (5.5, 6.0)]);
        let tail = poly(&[(7.0, 7.0), (7.5, 8.0)]);
        let inner = poly(&[(10.0, 2.0), (10.5, 3.0), (10.0, 2.0)]);

        let sky = MilkyWaySky::from_raw_layers(vec![
            vec![first, ring_around_seam(), second, keeper.clone(), tail],
            vec![inner.clone()],
        ]);

        assert_eq!(sky.layers.len(), 2);
        // the two-interruption ring is gone and the halves were joined
        assert_eq!(sky.layers[0].polys.len(), 2);
        assert_eq!(sky.layers[0].polys[1], keeper);
        assert_eq!(sky.layers[1].polys, vec![inner]);
    }
}
