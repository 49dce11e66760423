use crossterm::style::Stylize;
use radical_core::core::types::{CharacterAnalysis, RadicalPosition, TextAnalysis};
use radical_core::RadicalEngine;
use std::io::{stdin, stdout, Write};
use std::path::Path;

const DEFAULT_DATA_DIR: &str = "data";

fn main() {
    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let engine = RadicalEngine::from_data_dir_or_empty(Path::new(&data_dir));

    println!("Chinese Radical Analyzer. Type text and press [Enter]. 'exit' to quit.");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break; // EOF
        }

        match input.trim() {
            "exit" => break,
            "" => continue,
            text => match engine.analyze_text(text) {
                Ok(analysis) => print_analysis(&analysis),
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
    }
}

fn print_analysis(analysis: &TextAnalysis) {
    println!(
        "\n{} Chinese character(s) in \"{}\"",
        analysis.total_characters, analysis.input_text
    );
    for character in &analysis.characters {
        print_character(character);
    }
}

fn print_character(analysis: &CharacterAnalysis) {
    println!(
        "\n  {}  {}",
        analysis.character.bold(),
        analysis.unicode_point.as_str().dark_grey()
    );
    if let Some(decomposition) = &analysis.decomposition {
        println!("    {}", decomposition);
    }
    if analysis.radicals.is_empty() {
        println!("    {}", "no radical data".dark_grey());
        return;
    }
    for info in &analysis.radicals {
        let tag = match info.position {
            RadicalPosition::Primary => "primary".green(),
            RadicalPosition::Component => "component".cyan(),
            RadicalPosition::Detected => "detected".yellow(),
        };
        let strokes = info
            .stroke_count
            .map(|n| format!(", {} strokes", n))
            .unwrap_or_default();
        println!(
            "    {} {} ({}{}) [{}]",
            info.radical, info.english, info.pinyin, strokes, tag
        );
    }
}
