//! Error type shared by every stage of asset generation.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AtlasError>;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("cell ({col}, {row}) lies outside the {columns}x{rows} grid")]
    CellOutOfGrid { col: u32, row: u32, columns: u32, rows: u32 },

    #[error("cell ({col}, {row}) is assigned more than once")]
    DuplicateCell { col: u32, row: u32 },

    #[error("unknown sprite '{0}'")]
    UnknownSprite(String),

    /// A sprite drew outside its own cell. Always a defect in the sprite table.
    #[error("sprite '{sprite}' wrote {count} pixel(s) outside its {cell_size}px cell")]
    CellOverflow { sprite: String, count: usize, cell_size: u32 },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("layout parse error: {0}")]
    Layout(#[from] serde_yaml::Error),

    #[error("metadata serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("font error: {0}")]
    Font(String),

    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),
}

impl AtlasError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
