//! Reader for the constellation figure table.

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord};

use crate::catalogs::ConstellationFigure;
use crate::constants::StarId;
use crate::skyplot_errors::SkyplotError;

/// Read the constellation figures.
///
/// The table is tab separated with `#` comment lines. The first two
/// columns name the constellation and the figure; every following column is
/// a star catalog number, and the figure is the polyline through those
/// stars in order. Rows with a non-numeric star id are skipped with a
/// debug log.
///
/// Arguments
/// ---------
/// * `path`: the figure table
///
/// Return
/// ------
/// * `Result<Vec<ConstellationFigure>, SkyplotError>`: the figures in file
///   order
pub fn read_constellation_figures(
    path: &Utf8Path,
) -> Result<Vec<ConstellationFigure>, SkyplotError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut figures = Vec::new();
    for record in reader.records() {
        let record = record?;
        match parse_figure_row(&record) {
            Some(figure) => figures.push(figure),
            None => log::debug!("skipping malformed figure row: {:?}", record.get(0)),
        }
    }
    Ok(figures)
}

fn parse_figure_row(record: &StringRecord) -> Option<ConstellationFigure> {
    let mut star_ids = Vec::with_capacity(record.len().saturating_sub(2));
    for field in record.iter().skip(2) {
        let id: StarId = field.trim().parse().ok()?;
        star_ids.push(id);
    }
    Some(ConstellationFigure { star_ids })
}
