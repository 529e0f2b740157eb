//! Readers for the deep-sky object catalog and for target lists.

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord};

use crate::catalogs::{DeepSkyObject, DsoCatalog, DsoKind};
use crate::conversion::{parse_dms_dec, parse_hms_ra};
use crate::coordinates::SkyPoint;
use crate::skyplot_errors::SkyplotError;

/// Read the deep-sky object catalog.
///
/// The table is tab separated with `#` comment lines. Four columns are
/// used: the designation (column 0), the type tag (column 2) and the
/// unit-annotated RA and Dec (columns 4 and 5). Rows with an unknown type
/// tag or an unparseable field are skipped with a debug log.
///
/// Arguments
/// ---------
/// * `path`: the catalog file
///
/// Return
/// ------
/// * `Result<DsoCatalog, SkyplotError>`: the objects keyed by designation
pub fn read_dsos(path: &Utf8Path) -> Result<DsoCatalog, SkyplotError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut objects = DsoCatalog::new();
    for record in reader.records() {
        let record = record?;
        match parse_dso_row(&record) {
            Some((designation, object)) => {
                objects.insert(designation, object);
            }
            None => log::debug!("skipping malformed object row: {:?}", record.get(0)),
        }
    }
    Ok(objects)
}

fn parse_dso_row(record: &StringRecord) -> Option<(String, DeepSkyObject)> {
    let designation = record.get(0)?.trim();
    if designation.is_empty() {
        return None;
    }
    let kind = DsoKind::from_tag(record.get(2)?.trim())?;
    let ra = parse_hms_ra(record.get(4)?)?;
    let dec = parse_dms_dec(record.get(5)?)?;
    Some((
        designation.to_string(),
        DeepSkyObject {
            kind,
            loc: SkyPoint::new(ra, dec),
        },
    ))
}

/// Read a list of object designations, one per line.
///
/// Blank lines and lines starting with `#` are ignored. The order of the
/// list is preserved; it becomes the plotting order.
pub fn read_object_list(path: &Utf8Path) -> Result<Vec<String>, SkyplotError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod dso_reader_test {
    use super::*;

    #[test]
    fn test_parse_dso_row() {
        let record = StringRecord::from(vec![
            "M103",
            "",
            "OCl",
            "Cas",
            "01h 33m 23s",
            "60\u{b0} 39' 00\"",
        ]);
        let (designation, object) = parse_dso_row(&record).unwrap();
        assert_eq!(designation, "M103");
        assert_eq!(object.kind, DsoKind::OpenCluster);
        assert_eq!(
            object.loc,
            SkyPoint::new(
                1.0 + 33.0 / 60.0 + 23.0 / 3600.0,
                60.0 + 39.0 / 60.0
            )
        );
    }

    #[test]
    fn test_parse_dso_row_with_compound_tag() {
        let record = StringRecord::from(vec![
            "NGC1952",
            "",
            "SNR+Neb",
            "Tau",
            "05h 34m 31s",
            "22\u{b0} 01' 00\"",
        ]);
        let (_, object) = parse_dso_row(&record).unwrap();
        assert_eq!(object.kind, DsoKind::BrightNebula);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let record = StringRecord::from(vec![
            "X1",
            "",
            "Quasar",
            "Vir",
            "12h 29m 07s",
            "02\u{b0} 03' 09\"",
        ]);
        assert!(parse_dso_row(&record).is_none());
    }
}
