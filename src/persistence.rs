// File: src/persistence.rs
use crate::core::types::{CharacterEntry, RadicalMetadata};
use crate::error::Result;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads the radical reference table from a JSON file mapping each radical
/// symbol to its metadata. Callers that want the fail-open behavior fall
/// back to an empty table on error (see `RadicalEngine::from_data_dir_or_empty`).
pub fn load_radical_table(path: &Path) -> Result<BTreeMap<String, RadicalMetadata>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Reads the character reference table from a JSON file mapping each
/// character to its radical assignments.
pub fn load_character_table(path: &Path) -> Result<HashMap<String, CharacterEntry>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
