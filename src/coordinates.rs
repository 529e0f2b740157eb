//! Positions on the celestial sphere and arithmetic around the 0h/24h seam.
//!
//! Right ascension is cyclic with a period of 24 hours. Charts unroll the
//! sphere into a flat band, so an edge recorded as going from 23h to 1h must
//! be treated as a short hop across the seam, not a 22 hour sweep back across
//! the whole chart. The helpers here detect such hops and interpolate the
//! declination at which an edge meets the seam.

use crate::constants::{Degree, Hour, HOURS_PER_TURN, SEAM_JUMP_HOURS};

/// A position on the celestial sphere, right ascension in hours and
/// declination in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPoint {
    pub ra: Hour,
    pub dec: Degree,
}

impl SkyPoint {
    pub const fn new(ra: Hour, dec: Degree) -> Self {
        SkyPoint { ra, dec }
    }

    /// The same point with its RA unwrapped one turn forward, past 24h.
    pub fn shift_forward(self) -> SkyPoint {
        SkyPoint::new(self.ra + HOURS_PER_TURN, self.dec)
    }

    /// The same point with its RA unwrapped one turn backward, below 0h.
    pub fn shift_backward(self) -> SkyPoint {
        SkyPoint::new(self.ra - HOURS_PER_TURN, self.dec)
    }
}

/// Shortest angular separation between two right ascensions, in hours.
///
/// Arguments
/// ---------
/// * `ra1`: first right ascension in hours
/// * `ra2`: second right ascension in hours
///
/// Return
/// ------
/// * The separation along the shorter way around the sphere, in [0, 12]
pub fn ra_distance(ra1: Hour, ra2: Hour) -> Hour {
    let direct = (ra1 - ra2).abs().rem_euclid(HOURS_PER_TURN);
    direct.min(HOURS_PER_TURN - direct)
}

/// True when an edge from `ra1` to `ra2` crosses the seam in the direction of
/// increasing RA, wrapping from just below 24h to just above 0h.
pub fn crosses_seam_forward(ra1: Hour, ra2: Hour) -> bool {
    ra1 - ra2 > SEAM_JUMP_HOURS
}

/// True when an edge from `ra1` to `ra2` crosses the seam in the direction of
/// decreasing RA, wrapping from just above 0h to just below 24h.
pub fn crosses_seam_backward(ra1: Hour, ra2: Hour) -> bool {
    ra1 - ra2 < -SEAM_JUMP_HOURS
}

/// Declination of the straight edge from `v1` to `v2` at right ascension `ra`.
///
/// The edge is treated as a line in the unrolled (RA, Dec) plane, so `v2`
/// must already be shifted onto the same turn as `v1`.
pub fn dec_at_ra(v1: SkyPoint, v2: SkyPoint, ra: Hour) -> Degree {
    v2.dec + (v2.dec - v1.dec) / (v2.ra - v1.ra) * (ra - v2.ra)
}
