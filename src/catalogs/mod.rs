//! # Catalog data model and readers
//!
//! Everything the chart draws comes out of four flat files: the star
//! catalog, the deep-sky object catalog, the constellation figures and the
//! milky way contours. This module holds the record types and one reader
//! per file.
//!
//! ## Error policy
//!
//! Readers propagate I/O and table-level failures, but a malformed row is
//! skipped with a debug log rather than aborting the whole catalog. A
//! figure referencing a star the catalog does not contain is the one fatal
//! case, surfacing later when the figure is resolved against the catalog.

pub mod constellation_reader;
pub mod dso_reader;
pub mod milky_way_reader;
pub mod star_reader;

pub use constellation_reader::read_constellation_figures;
pub use dso_reader::{read_dsos, read_object_list};
pub use milky_way_reader::read_milky_way;
pub use star_reader::read_stars;

use std::collections::{BTreeMap, HashMap};

use crate::constants::StarId;
use crate::coordinates::SkyPoint;
use crate::polygon::Polygon;
use crate::skyplot_errors::SkyplotError;

/// A charted star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub loc: SkyPoint,
    pub magnitude: f64,
}

/// All stars keyed by catalog number.
///
/// The ordered map fixes the iteration order, so a chart draws its stars
/// the same way on every run.
pub type StarCatalog = BTreeMap<StarId, Star>;

/// Deep-sky objects keyed by designation, e.g. `M31`.
pub type DsoCatalog = HashMap<String, DeepSkyObject>;

/// Classes of deep-sky object the chart can mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DsoKind {
    Galaxy,
    OpenCluster,
    GlobularCluster,
    PlanetaryNebula,
    BrightNebula,
    Asterism,
    Double,
    Carbon,
}

impl DsoKind {
    /// Map a catalog type tag to an object class.
    ///
    /// Compound tags such as `Gal+EN` classify by their first component.
    /// Emission and reflection nebulae and supernova remnants all share the
    /// bright nebula symbol.
    pub fn from_tag(tag: &str) -> Option<DsoKind> {
        let head = tag.split_once('+').map_or(tag, |(first, _)| first);
        match head {
            "Gal" => Some(DsoKind::Galaxy),
            "OCl" => Some(DsoKind::OpenCluster),
            "GCl" => Some(DsoKind::GlobularCluster),
            "PN" => Some(DsoKind::PlanetaryNebula),
            "EN" | "RN" | "SNR" => Some(DsoKind::BrightNebula),
            "Ast" => Some(DsoKind::Asterism),
            "Double" => Some(DsoKind::Double),
            "Carbon" => Some(DsoKind::Carbon),
            _ => None,
        }
    }
}

/// A deep-sky object record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeepSkyObject {
    pub kind: DsoKind,
    pub loc: SkyPoint,
}

/// One constellation figure, a polyline through stars given by catalog
/// number.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationFigure {
    pub star_ids: Vec<StarId>,
}

impl ConstellationFigure {
    /// Resolve the figure into a sky polygon by looking each star up in the
    /// catalog.
    ///
    /// Arguments
    /// ---------
    /// * `stars`: the star catalog the figure was written against
    ///
    /// Return
    /// ------
    /// * `Result<Polygon, SkyplotError>`: the figure's vertices in order,
    ///   or [`SkyplotError::StarNotFound`] for the first id the catalog is
    ///   missing
    pub fn to_polygon(&self, stars: &StarCatalog) -> Result<Polygon, SkyplotError> {
        let mut vertices = Vec::with_capacity(self.star_ids.len());
        for id in &self.star_ids {
            let star = stars.get(id).ok_or(SkyplotError::StarNotFound(*id))?;
            vertices.push(star.loc);
        }
        Ok(Polygon::new(vertices))
    }
}

#[cfg(test)]
mod catalogs_test {
    use super::*;

    #[test]
    fn test_dso_kind_from_tag() {
        assert_eq!(DsoKind::from_tag("Gal"), Some(DsoKind::Galaxy));
        assert_eq!(DsoKind::from_tag("OCl"), Some(DsoKind::OpenCluster));
        assert_eq!(DsoKind::from_tag("GCl"), Some(DsoKind::GlobularCluster));
        assert_eq!(DsoKind::from_tag("PN"), Some(DsoKind::PlanetaryNebula));
        assert_eq!(DsoKind::from_tag("EN"), Some(DsoKind::BrightNebula));
        assert_eq!(DsoKind::from_tag("RN"), Some(DsoKind::BrightNebula));
        assert_eq!(DsoKind::from_tag("SNR"), Some(DsoKind::BrightNebula));
        assert_eq!(DsoKind::from_tag("Ast"), Some(DsoKind::Asterism));
        assert_eq!(DsoKind::from_tag("Double"), Some(DsoKind::Double));
        assert_eq!(DsoKind::from_tag("Carbon"), Some(DsoKind::Carbon));
        assert_eq!(DsoKind::from_tag("Quasar"), None);
    }

    #[test]
    fn test_compound_tag_uses_first_component() {
        assert_eq!(DsoKind::from_tag("Gal+EN"), Some(DsoKind::Galaxy));
        assert_eq!(DsoKind::from_tag("EN+OCl"), Some(DsoKind::BrightNebula));
    }

    #[test]
    fn test_figure_resolution() {
        let mut stars = StarCatalog::new();
        stars.insert(
            7,
            Star { loc: SkyPoint::new(2.0, 30.0), magnitude: 1.0 },
        );
        stars.insert(
            9,
            Star { loc: SkyPoint::new(3.0, 40.0), magnitude: 2.0 },
        );

        let figure = ConstellationFigure { star_ids: vec![7, 9, 7] };
        let polygon = figure.to_polygon(&stars).unwrap();
        assert_eq!(
            polygon.vertices,
            vec![
                SkyPoint::new(2.0, 30.0),
                SkyPoint::new(3.0, 40.0),
                SkyPoint::new(2.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_figure_with_unknown_star_is_fatal() {
        let stars = StarCatalog::new();
        let figure = ConstellationFigure { star_ids: vec![42] };
        assert!(matches!(
            figure.to_polygon(&stars),
            Err(SkyplotError::StarNotFound(42))
        ));
    }
}
