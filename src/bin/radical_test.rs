// Minimal harness for the radical resolver
// Run with: cargo run --bin radical_test
use radical_core::RadicalEngine;
use std::path::Path;

fn main() {
    let engine = RadicalEngine::from_data_dir_or_empty(Path::new("data"));
    let test_cases = [
        '木', '林', '森', '好', '字', '明', '休', '湖', '猫', '山', '氵', '中', '龘',
    ];
    for &character in test_cases.iter() {
        let analysis = engine.analyze_character(character);
        let radicals: Vec<String> = analysis
            .radicals
            .iter()
            .map(|info| format!("{}:{:?}", info.radical, info.position))
            .collect();
        println!(
            "{} ({}) => {:?}",
            character, analysis.unicode_point, radicals
        );
    }
}
