use thiserror::Error;

use crate::constants::StarId;

#[derive(Error, Debug)]
pub enum SkyplotError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to parse catalog table: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to parse milky way contour file: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Constellation figure references unknown star: {0}")]
    StarNotFound(StarId),
}
