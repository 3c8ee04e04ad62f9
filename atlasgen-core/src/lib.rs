pub mod canvas;
pub mod compose;
pub mod error;
pub mod export;
pub mod font;
pub mod grid;
pub mod layout;
pub mod persist;
pub mod raster;
pub mod sfx;
pub mod sprites;

pub use canvas::{Canvas, Color};
pub use compose::{compose, compose_with, ComposedAtlas};
pub use error::{AtlasError, Result};
pub use grid::{CellCoord, CellGrid};
pub use layout::{AtlasLayout, Placement};
pub use sprites::{Shape, SpriteDef, SpriteLibrary};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
