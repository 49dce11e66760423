use crate::core::script::{format_code_point, is_chinese_character};
use crate::core::types::{
    CharacterAnalysis, CharacterEntry, RadicalInfo, RadicalMetadata, RadicalPosition, TextAnalysis,
};
use crate::error::{RadicalError, Result};
use crate::persistence::{load_character_table, load_radical_table};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Longest accepted input, in Unicode scalar values.
const MAX_TEXT_CHARS: usize = 100;

pub const RADICAL_TABLE_FILE: &str = "radicals.json";
pub const CHARACTER_TABLE_FILE: &str = "character_radicals.json";

/// The radical resolver. Owns the two reference tables, loaded once and
/// never mutated, so lookups need no synchronization from any number of
/// threads.
///
/// The radical table is ordered so that the glyph scan and the radical
/// listing iterate deterministically.
pub struct RadicalEngine {
    radicals: BTreeMap<String, RadicalMetadata>,
    characters: HashMap<String, CharacterEntry>,
}

impl RadicalEngine {
    /// An engine that knows nothing. Every analysis degrades to "no data".
    pub fn new() -> Self {
        Self {
            radicals: BTreeMap::new(),
            characters: HashMap::new(),
        }
    }

    pub fn with_tables(
        radicals: BTreeMap<String, RadicalMetadata>,
        characters: HashMap<String, CharacterEntry>,
    ) -> Self {
        Self {
            radicals,
            characters,
        }
    }

    /// Loads both tables from `dir`, falling back to an empty table for any
    /// file that is missing or unreadable. The service keeps answering
    /// ("nothing known") instead of refusing to start.
    pub fn from_data_dir_or_empty(dir: &Path) -> Self {
        let radicals = load_radical_table(&dir.join(RADICAL_TABLE_FILE)).unwrap_or_else(|e| {
            eprintln!("[radical_core] radical table unavailable ({}), serving empty", e);
            BTreeMap::new()
        });
        let characters =
            load_character_table(&dir.join(CHARACTER_TABLE_FILE)).unwrap_or_else(|e| {
                eprintln!(
                    "[radical_core] character table unavailable ({}), serving empty",
                    e
                );
                HashMap::new()
            });
        Self::with_tables(radicals, characters)
    }

    /// Read-only view of the radical table, for listings.
    pub fn radicals(&self) -> &BTreeMap<String, RadicalMetadata> {
        &self.radicals
    }

    /// Resolves one character to its radical set. Total: a character absent
    /// from both tables yields an analysis with an empty radical list, not
    /// an error.
    ///
    /// Curated data wins: when the character table resolves at least one
    /// radical, the glyph scan never runs. The scan is a best-effort
    /// degradation and can surface coincidental matches.
    pub fn analyze_character(&self, character: char) -> CharacterAnalysis {
        let key = character.to_string();

        let mut radicals: Vec<RadicalInfo> = Vec::new();
        let mut primary_radical = None;
        let mut decomposition = None;

        if let Some(entry) = self.characters.get(&key) {
            if let Some(primary_key) = &entry.primary_radical {
                if let Some(meta) = self.radicals.get(primary_key) {
                    let info = RadicalInfo::joined(primary_key, meta, RadicalPosition::Primary);
                    primary_radical = Some(info.clone());
                    radicals.push(info);
                }
            }
            for component in &entry.components {
                if let Some(meta) = self.radicals.get(component) {
                    radicals.push(RadicalInfo::joined(
                        component,
                        meta,
                        RadicalPosition::Component,
                    ));
                }
            }
            decomposition = entry.decomposition.clone();
        }

        // Glyph scan over the whole radical table, O(table size). A radical
        // matches when its symbol or variant occurs inside the one-character
        // string, which for single-scalar symbols degenerates to equality.
        // The first match becomes the primary; later matches are appended
        // without displacing it.
        if radicals.is_empty() {
            for (symbol, meta) in &self.radicals {
                let variant_hit = meta
                    .variant
                    .as_deref()
                    .is_some_and(|variant| key.contains(variant));
                if key.contains(symbol.as_str()) || variant_hit {
                    let info = RadicalInfo::joined(symbol, meta, RadicalPosition::Detected);
                    if primary_radical.is_none() {
                        primary_radical = Some(info.clone());
                    }
                    radicals.push(info);
                }
            }
        }

        CharacterAnalysis {
            character,
            unicode_point: format_code_point(character),
            radicals,
            primary_radical,
            decomposition,
        }
    }

    /// Analyzes a whole line of text: trims it, validates it, keeps only the
    /// Chinese characters, and resolves each one in order.
    pub fn analyze_text(&self, text: &str) -> Result<TextAnalysis> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RadicalError::EmptyText);
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(RadicalError::TextTooLong(MAX_TEXT_CHARS));
        }

        let characters: Vec<CharacterAnalysis> = text
            .chars()
            .filter(|c| is_chinese_character(*c))
            .map(|c| self.analyze_character(c))
            .collect();

        if characters.is_empty() {
            return Err(RadicalError::NoChineseCharacters);
        }

        Ok(TextAnalysis {
            input_text: text.to_string(),
            total_characters: characters.len(),
            characters,
        })
    }
}

impl Default for RadicalEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radical(
        pinyin: &str,
        english: &str,
        variant: Option<&str>,
        stroke_count: Option<u32>,
    ) -> RadicalMetadata {
        RadicalMetadata {
            pinyin: pinyin.to_string(),
            english: english.to_string(),
            variant: variant.map(String::from),
            stroke_count,
        }
    }

    fn entry(
        primary: Option<&str>,
        components: &[&str],
        decomposition: Option<&str>,
    ) -> CharacterEntry {
        CharacterEntry {
            primary_radical: primary.map(String::from),
            components: components.iter().map(|c| c.to_string()).collect(),
            decomposition: decomposition.map(String::from),
        }
    }

    fn sample_engine() -> RadicalEngine {
        let mut radicals = BTreeMap::new();
        radicals.insert("木".to_string(), radical("mù", "wood", None, Some(4)));
        radicals.insert("日".to_string(), radical("rì", "sun", None, Some(4)));
        radicals.insert("水".to_string(), radical("shuǐ", "water", Some("氵"), Some(4)));
        radicals.insert("人".to_string(), radical("rén", "person", Some("亻"), Some(2)));

        let mut characters = HashMap::new();
        characters.insert(
            "林".to_string(),
            entry(Some("木"), &["木", "木"], Some("two trees side by side")),
        );
        characters.insert(
            "明".to_string(),
            entry(Some("日"), &["日", "月"], Some("sun and moon together")),
        );
        RadicalEngine::with_tables(radicals, characters)
    }

    #[test]
    fn unknown_character_yields_empty_analysis() {
        let analysis = sample_engine().analyze_character('龘');
        assert_eq!(analysis.character, '龘');
        assert_eq!(analysis.unicode_point, "U+9F98");
        assert!(analysis.radicals.is_empty());
        assert!(analysis.primary_radical.is_none());
        assert!(analysis.decomposition.is_none());
    }

    #[test]
    fn curated_primary_is_first_and_mirrored() {
        let analysis = sample_engine().analyze_character('林');
        assert_eq!(analysis.radicals.len(), 3);
        assert_eq!(analysis.radicals[0].position, RadicalPosition::Primary);
        assert_eq!(
            analysis.primary_radical.as_ref(),
            Some(&analysis.radicals[0])
        );
        assert_eq!(analysis.decomposition.as_deref(), Some("two trees side by side"));
    }

    #[test]
    fn component_order_and_duplicates_preserved() {
        let analysis = sample_engine().analyze_character('林');
        let symbols: Vec<&str> = analysis.radicals.iter().map(|r| r.radical.as_str()).collect();
        assert_eq!(symbols, ["木", "木", "木"]);
        assert_eq!(analysis.radicals[1].position, RadicalPosition::Component);
        assert_eq!(analysis.radicals[2].position, RadicalPosition::Component);
    }

    #[test]
    fn unresolvable_component_keys_are_skipped() {
        // 月 is referenced by 明 but missing from the radical table.
        let analysis = sample_engine().analyze_character('明');
        let symbols: Vec<&str> = analysis.radicals.iter().map(|r| r.radical.as_str()).collect();
        assert_eq!(symbols, ["日", "日"]);
    }

    #[test]
    fn scan_never_runs_when_curated_data_resolves() {
        // 木 has no character entry in the sample, so give it one whose only
        // resolvable radical coincides with the scan's would-be match. The
        // result must carry the curated tag, not the detected one.
        let mut engine = sample_engine();
        engine
            .characters
            .insert("木".to_string(), entry(Some("木"), &[], None));
        let analysis = engine.analyze_character('木');
        assert_eq!(analysis.radicals.len(), 1);
        assert_eq!(analysis.radicals[0].position, RadicalPosition::Primary);
    }

    #[test]
    fn scan_runs_when_entry_resolves_nothing() {
        // An entry whose keys all dangle resolves zero radicals, which opens
        // the scan path. Its decomposition string still comes through.
        let mut engine = sample_engine();
        engine.characters.insert(
            "木".to_string(),
            entry(Some("missing"), &["also-missing"], Some("a tree")),
        );
        let analysis = engine.analyze_character('木');
        assert_eq!(analysis.radicals.len(), 1);
        assert_eq!(analysis.radicals[0].position, RadicalPosition::Detected);
        assert_eq!(analysis.radicals[0].radical, "木");
        assert_eq!(analysis.decomposition.as_deref(), Some("a tree"));
    }

    #[test]
    fn scan_matches_variant_glyphs() {
        let analysis = sample_engine().analyze_character('氵');
        assert_eq!(analysis.radicals.len(), 1);
        assert_eq!(analysis.radicals[0].radical, "水");
        assert_eq!(analysis.radicals[0].position, RadicalPosition::Detected);
        assert_eq!(
            analysis.primary_radical.as_ref(),
            Some(&analysis.radicals[0])
        );
    }

    #[test]
    fn first_scan_match_stays_primary() {
        // Two rows match the same character: 火 by symbol and 灬 by variant.
        // Iteration order puts 火 (U+706B) before 灬 (U+706C), so 火 must be
        // the primary and 灬 must still be appended.
        let mut radicals = BTreeMap::new();
        radicals.insert("火".to_string(), radical("huǒ", "fire", None, Some(4)));
        radicals.insert("灬".to_string(), radical("huǒ", "fire (bottom)", Some("火"), None));
        let engine = RadicalEngine::with_tables(radicals, HashMap::new());

        let analysis = engine.analyze_character('火');
        let symbols: Vec<&str> = analysis.radicals.iter().map(|r| r.radical.as_str()).collect();
        assert_eq!(symbols, ["火", "灬"]);
        assert_eq!(
            analysis.primary_radical.as_ref().map(|r| r.radical.as_str()),
            Some("火")
        );
    }

    #[test]
    fn tree_pictograph_end_to_end() {
        let mut radicals = BTreeMap::new();
        radicals.insert("木".to_string(), radical("mù", "wood", None, None));
        let mut characters = HashMap::new();
        characters.insert(
            "木".to_string(),
            entry(Some("木"), &[], Some("pictograph of a tree")),
        );
        let engine = RadicalEngine::with_tables(radicals, characters);

        let analysis = engine.analyze_character('木');
        let expected_info = RadicalInfo {
            radical: "木".to_string(),
            pinyin: "mù".to_string(),
            english: "wood".to_string(),
            variant: None,
            stroke_count: None,
            position: RadicalPosition::Primary,
        };
        assert_eq!(analysis.character, '木');
        assert_eq!(analysis.unicode_point, "U+6728");
        assert_eq!(analysis.radicals, vec![expected_info.clone()]);
        assert_eq!(analysis.primary_radical, Some(expected_info));
        assert_eq!(analysis.decomposition.as_deref(), Some("pictograph of a tree"));
    }

    #[test]
    fn text_analysis_keeps_only_chinese_characters() {
        let analysis = sample_engine().analyze_text("  Hello 林, 明!  ").unwrap();
        assert_eq!(analysis.input_text, "Hello 林, 明!");
        assert_eq!(analysis.total_characters, 2);
        let chars: Vec<char> = analysis.characters.iter().map(|c| c.character).collect();
        assert_eq!(chars, ['林', '明']);
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = sample_engine().analyze_text("   ").unwrap_err();
        assert!(matches!(err, RadicalError::EmptyText));
        assert_eq!(err.to_string(), "Text cannot be empty");
    }

    #[test]
    fn overlong_text_is_rejected() {
        let text = "林".repeat(MAX_TEXT_CHARS + 1);
        let err = sample_engine().analyze_text(&text).unwrap_err();
        assert!(matches!(err, RadicalError::TextTooLong(_)));
        assert_eq!(err.to_string(), "Text too long (max 100 characters)");

        // Exactly at the limit is fine.
        let text = "林".repeat(MAX_TEXT_CHARS);
        assert!(sample_engine().analyze_text(&text).is_ok());
    }

    #[test]
    fn text_without_chinese_is_rejected() {
        let err = sample_engine().analyze_text("hello world").unwrap_err();
        assert!(matches!(err, RadicalError::NoChineseCharacters));
        assert_eq!(err.to_string(), "No Chinese characters found in input");
    }
}
