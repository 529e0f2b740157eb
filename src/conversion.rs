//! Parsers for the angle formats found in the star and object catalogs.
//!
//! Stars carry packed fixed-width fields (`HHMMSS.S` and `±DDMMSS`), while
//! deep-sky objects carry unit-annotated fields (`02h 39m 24s` and
//! `53° 55' 00"`). All parsers return `None` on malformed input so readers
//! can skip bad rows instead of aborting the whole catalog.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{Degree, Hour};

/// Strips unit annotations from a right ascension field, keeping digits,
/// dots and spaces.
static RA_UNITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9. ]+").unwrap());

/// Strips unit annotations from a declination field, additionally keeping a
/// leading minus sign.
static DEC_UNITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\-0-9. ]+").unwrap());

/// Parse a packed right ascension field to hours.
///
/// Arguments
/// ---------
/// * `ra`: an 8 character string in the format `HHMMSS.S`, e.g. `"023924.0"`
///
/// Return
/// ------
/// * `Option<Hour>`: the right ascension in hours, or `None` if the field is
///   not 8 characters or any component fails to parse
pub(crate) fn parse_packed_ra(ra: &str) -> Option<Hour> {
    if ra.len() != 8 {
        return None;
    }
    let hour: f64 = ra.get(0..2)?.parse().ok()?;
    let minute: f64 = ra.get(2..4)?.parse().ok()?;
    let second: f64 = ra.get(4..8)?.trim().parse().ok()?;
    Some(hour + minute / 60.0 + second / 3600.0)
}

/// Parse a packed declination field to degrees.
///
/// Arguments
/// ---------
/// * `dec`: a 7 character string in the format `±DDMMSS`, e.g. `"+535500"`
///
/// Return
/// ------
/// * `Option<Degree>`: the declination in degrees with the sign applied to
///   the whole angle, or `None` if the field is malformed
pub(crate) fn parse_packed_dec(dec: &str) -> Option<Degree> {
    if dec.len() != 7 {
        return None;
    }
    let sign = match dec.get(0..1)? {
        "+" => 1.0,
        "-" => -1.0,
        _ => return None,
    };
    let degree: f64 = dec.get(1..3)?.parse().ok()?;
    let minute: f64 = dec.get(3..5)?.parse().ok()?;
    let second: f64 = dec.get(5..7)?.parse().ok()?;
    Some(sign * (degree + minute / 60.0 + second / 3600.0))
}

/// Parse a unit-annotated right ascension field to hours.
///
/// Arguments
/// ---------
/// * `ra`: a string in the format `02h 39m 24s`
///
/// Return
/// ------
/// * `Option<Hour>`: the right ascension in hours, or `None` if the field
///   does not reduce to three numeric components
pub(crate) fn parse_hms_ra(ra: &str) -> Option<Hour> {
    let stripped = RA_UNITS.replace_all(ra, "");
    let parts: Vec<&str> = stripped.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let h: f64 = parts[0].parse().ok()?;
    let m: f64 = parts[1].parse().ok()?;
    let s: f64 = parts[2].parse().ok()?;
    Some(h + m / 60.0 + s / 3600.0)
}

/// Parse a unit-annotated declination field to degrees.
///
/// Arguments
/// ---------
/// * `dec`: a string in the format `53° 55' 00"`, optionally prefixed with a
///   minus sign
///
/// Return
/// ------
/// * `Option<Degree>`: the declination in degrees with the sign applied to
///   the whole angle, or `None` if the field does not reduce to three
///   numeric components
pub(crate) fn parse_dms_dec(dec: &str) -> Option<Degree> {
    let stripped = DEC_UNITS.replace_all(dec, "");
    let parts: Vec<&str> = stripped.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let sign = if parts[0].starts_with('-') { -1.0 } else { 1.0 };
    let d: f64 = parts[0].trim_start_matches('-').parse().ok()?;
    let m: f64 = parts[1].parse().ok()?;
    let s: f64 = parts[2].parse().ok()?;
    Some(sign * (d + m / 60.0 + s / 3600.0))
}
