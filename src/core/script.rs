// src/core/script.rs

/// Returns true when the character falls inside one of the recognized CJK
/// blocks: the Unified Ideographs, Extension A, or Extension B plus the
/// supplementary blocks immediately after it. Later extensions (C through I)
/// and the compatibility ideographs are not recognized.
pub fn is_chinese_character(c: char) -> bool {
    matches!(
        u32::from(c),
        0x4E00..=0x9FFF       // CJK Unified Ideographs
        | 0x3400..=0x4DBF     // CJK Extension A
        | 0x20000..=0x2A6DF   // CJK Extension B and beyond
    )
}

/// Renders a code point as "U+XXXX": uppercase hex, zero-padded to at least
/// four digits. Supplementary-plane characters print wider, unpadded.
pub fn format_code_point(c: char) -> String {
    format!("U+{:04X}", u32::from(c))
}
