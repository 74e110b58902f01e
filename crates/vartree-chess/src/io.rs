use std::{fs, path::Path as FilePath};

use vartree_core::StudySnapshot;

use crate::{error::ChessError, moves::ChessMove, study::Study};

/// Parse a study from JSON text.
pub fn from_json_str(json: &str) -> Result<Study, ChessError> {
    let snapshot: StudySnapshot<ChessMove> = serde_json::from_str(json)?;
    Study::from_snapshot(snapshot)
}

/// Serialize a study to pretty JSON text.
pub fn to_json_string(study: &Study) -> Result<String, ChessError> {
    Ok(serde_json::to_string_pretty(&study.snapshot())?)
}

/// Load a study from a JSON file on disk.
pub fn load_json(path: impl AsRef<FilePath>) -> Result<Study, ChessError> {
    let json = fs::read_to_string(path)?;
    from_json_str(&json)
}

/// Serialize and write a study to a JSON file.
pub fn save_json(path: impl AsRef<FilePath>, study: &Study) -> Result<(), ChessError> {
    fs::write(path, to_json_string(study)?)?;
    Ok(())
}
