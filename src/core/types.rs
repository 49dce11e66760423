// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One row of the radical reference table. The table is keyed by the radical
/// symbol itself, so the symbol does not repeat inside the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadicalMetadata {
    /// Phonetic reading, e.g. "mù" for 木.
    pub pinyin: String,
    /// English gloss, e.g. "wood".
    pub english: String,
    /// Alternate written form, e.g. "氵" for 水.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_count: Option<u32>,
}

/// One row of the character reference table, keyed by the character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterEntry {
    /// Key into the radical table for the most representative radical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_radical: Option<String>,
    /// Radical keys in curated order. Duplicates are allowed (林 lists 木
    /// twice).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    /// Human-readable description of how the character breaks down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decomposition: Option<String>,
}

/// Why a radical appears in an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadicalPosition {
    /// Curated primary radical of the character.
    Primary,
    /// Curated component, in table order.
    Component,
    /// Found by the glyph scan rather than curated data. Low confidence.
    Detected,
}

/// A radical table row joined with its symbol and the reason it was
/// included. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadicalInfo {
    pub radical: String,
    pub pinyin: String,
    pub english: String,
    pub variant: Option<String>,
    pub stroke_count: Option<u32>,
    pub position: RadicalPosition,
}

impl RadicalInfo {
    /// Joins a table row with its key under a position tag.
    pub fn joined(radical: &str, meta: &RadicalMetadata, position: RadicalPosition) -> Self {
        Self {
            radical: radical.to_string(),
            pinyin: meta.pinyin.clone(),
            english: meta.english.clone(),
            variant: meta.variant.clone(),
            stroke_count: meta.stroke_count,
            position,
        }
    }
}

/// Everything known about a single character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAnalysis {
    pub character: char,
    /// "U+XXXX", uppercase hex, padded to at least four digits.
    pub unicode_point: String,
    /// Primary radical first when curated data has one, then components in
    /// curated order. Detected radicals only when curated data resolved
    /// nothing.
    pub radicals: Vec<RadicalInfo>,
    pub primary_radical: Option<RadicalInfo>,
    pub decomposition: Option<String>,
}

/// Whole-request result: one analysis per Chinese character of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub input_text: String,
    pub characters: Vec<CharacterAnalysis>,
    pub total_characters: usize,
}
