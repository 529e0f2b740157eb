//! Reader for the tab-separated star catalog.

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord};

use crate::catalogs::{Star, StarCatalog};
use crate::constants::StarId;
use crate::conversion::{parse_packed_dec, parse_packed_ra};
use crate::coordinates::SkyPoint;
use crate::skyplot_errors::SkyplotError;

/// Read the star catalog.
///
/// The table is tab separated with `#` comment lines. Four columns are
/// used: the catalog number (column 0), the packed RA and Dec (columns 4
/// and 5) and the visual magnitude (column 6). Rows with a missing or
/// unparseable field are skipped with a debug log.
///
/// Arguments
/// ---------
/// * `path`: the catalog file
///
/// Return
/// ------
/// * `Result<StarCatalog, SkyplotError>`: the stars keyed by catalog number
pub fn read_stars(path: &Utf8Path) -> Result<StarCatalog, SkyplotError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut stars = StarCatalog::new();
    for record in reader.records() {
        let record = record?;
        match parse_star_row(&record) {
            Some((star_id, star)) => {
                stars.insert(star_id, star);
            }
            None => log::debug!("skipping malformed star row: {:?}", record.get(0)),
        }
    }
    Ok(stars)
}

fn parse_star_row(record: &StringRecord) -> Option<(StarId, Star)> {
    let star_id: StarId = record.get(0)?.trim().parse().ok()?;
    let ra = parse_packed_ra(record.get(4)?.trim())?;
    let dec = parse_packed_dec(record.get(5)?.trim())?;
    let magnitude: f64 = record.get(6)?.trim().parse().ok()?;
    Some((
        star_id,
        Star {
            loc: SkyPoint::new(ra, dec),
            magnitude,
        },
    ))
}
