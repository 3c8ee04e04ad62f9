pub mod schema;

use crate::error::{AtlasError, Result};
pub use schema::{AtlasLayout, Placement, DEFAULT_CELL_SIZE};

pub fn load_from_yaml_str(s: &str) -> Result<AtlasLayout> {
    let layout: AtlasLayout = serde_yaml::from_str(s)?;
    Ok(layout)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<AtlasLayout> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|e| AtlasError::io(path, e))?;
    load_from_yaml_str(&data)
}
