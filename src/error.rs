use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostError {
    // Input validation errors
    #[error("Invalid usage input: {message}")]
    InvalidUsage { message: String },

    #[error("Unknown vendor: {vendor}")]
    UnknownVendor { vendor: String },

    #[error("Unknown projection: {projection}")]
    UnknownProjection { projection: String },

    // Pricing catalog errors
    #[error("Failed to read pricing catalog: {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pricing catalog: {path}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Stdin boundary
    #[error("Failed to read from stdin")]
    StdinRead(#[from] std::io::Error),

    #[error("Failed to parse JSON from stdin")]
    StdinJsonParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CostError>;
