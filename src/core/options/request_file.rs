use crate::core::error::*;
use crate::core::transform::*;

use log::*;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::path::Path;

/// Reads an `InterpolationRequest` from a JSON file.
///
/// Matrices are given as `{"m": [16 numbers]}` in row-major order. `time`
/// and `flags` may be omitted.
pub fn load_request(path: &Path) -> Result<InterpolationRequest, TransformError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let req: InterpolationRequest = serde_json::from_reader(reader)?;
    info!("Loaded request from {}.", path.display());
    return Ok(req);
}

pub fn save_request(path: &Path, req: &InterpolationRequest) -> Result<(), TransformError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, req)?;
    return Ok(());
}

pub fn parse_request(s: &str) -> Result<InterpolationRequest, TransformError> {
    let req = serde_json::from_str(s)?;
    return Ok(req);
}
