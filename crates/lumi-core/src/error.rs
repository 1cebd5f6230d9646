// File: crates/lumi-core/src/error.rs
// Summary: Error types for rendering and column extraction.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("failed to read logo image {path}")]
    LogoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logo image {path} could not be decoded")]
    LogoDecode { path: PathBuf },

    #[error("layout places a logo but no logo image was configured")]
    MissingLogo,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum ColumnError {
    #[error("no column named {0:?}")]
    Missing(String),

    #[error("column {name:?} is not {expected}")]
    WrongKind { name: String, expected: &'static str },

    #[error("column {0:?} already exists")]
    Duplicate(String),

    #[error("column {name:?} has {actual} rows, table has {expected}")]
    RowCount { name: String, expected: usize, actual: usize },

    #[error("row {row}: index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { row: usize, index: i64, len: usize },
}
