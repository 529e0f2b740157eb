//! Reader for the milky way contour file.
//!
//! The file is GeoJSON-shaped: a list of features, one per density layer,
//! each carrying a list of contour polygons in galactic-longitude degrees.
//! Longitudes are normalized into [0, 360) and converted to hours of right
//! ascension. The contours come back raw; filtering and the background
//! repair happen in [`MilkyWaySky::from_raw_layers`]
//! (crate::milky_way::MilkyWaySky::from_raw_layers).

use camino::Utf8Path;
use serde::Deserialize;

use crate::constants::DEGREES_PER_HOUR;
use crate::coordinates::SkyPoint;
use crate::polygon::Polygon;
use crate::skyplot_errors::SkyplotError;

#[derive(Debug, Deserialize)]
struct MilkyWayFile {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<Vec<Vec<f64>>>,
}

/// Read the milky way contours.
///
/// Arguments
/// ---------
/// * `path`: the contour file
///
/// Return
/// ------
/// * `Result<Vec<Vec<Polygon>>, SkyplotError>`: the contour polygons per
///   layer, in file order, with RA in hours
pub fn read_milky_way(path: &Utf8Path) -> Result<Vec<Vec<Polygon>>, SkyplotError> {
    let content = std::fs::read_to_string(path)?;
    let file: MilkyWayFile = serde_json::from_str(&content)?;

    let mut layers = Vec::with_capacity(file.features.len());
    for feature in file.features {
        let mut polys = Vec::with_capacity(feature.geometry.coordinates.len());
        for contour in feature.geometry.coordinates {
            polys.push(contour_to_polygon(&contour));
        }
        layers.push(polys);
    }
    Ok(layers)
}

fn contour_to_polygon(contour: &[Vec<f64>]) -> Polygon {
    let mut vertices = Vec::with_capacity(contour.len());
    for point in contour {
        let (Some(&lon), Some(&lat)) = (point.first(), point.get(1)) else {
            log::debug!("skipping milky way point with fewer than two coordinates");
            continue;
        };
        let mut alpha = lon;
        if alpha < 0.0 {
            alpha += 360.0;
        }
        vertices.push(SkyPoint::new(alpha / DEGREES_PER_HOUR, lat));
    }
    Polygon::new(vertices)
}
