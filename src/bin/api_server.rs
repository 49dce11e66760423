// Line-protocol front end: one command per stdin line, one JSON response per
// stdout line. Commands: ANALYZE <text>, RADICALS, HEALTH, EXIT.
use radical_core::RadicalEngine;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DEFAULT_DATA_DIR: &str = "data";

fn get_log_path() -> PathBuf {
    let mut path = PathBuf::from("target");
    path.push("radical_api.log");
    path
}

fn log(message: &str) {
    if let Ok(mut file) = File::options().create(true).append(true).open(get_log_path()) {
        let _ = writeln!(file, "{}", message);
    }
}

fn error_json(detail: &str) -> String {
    serde_json::json!({ "detail": detail }).to_string()
}

fn main() -> io::Result<()> {
    // Clear old log file
    let _ = std::fs::remove_file(get_log_path());
    log("--- Radical Analysis API Starting ---");

    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    let engine = RadicalEngine::from_data_dir_or_empty(Path::new(&data_dir));
    log(&format!(
        "api: serving {} radicals from '{}'",
        engine.radicals().len(),
        data_dir
    ));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        log(&format!("api <- {:?}", input));
        let (command, payload) = match input.split_once(' ') {
            Some((command, payload)) => (command, payload.trim()),
            None => (input.trim(), ""),
        };

        let response = match command {
            "ANALYZE" => match engine.analyze_text(payload) {
                Ok(analysis) => serde_json::to_string(&analysis)
                    .unwrap_or_else(|_| error_json("Serialization failed")),
                Err(e) => error_json(&e.to_string()),
            },
            "RADICALS" => serde_json::to_string(engine.radicals())
                .unwrap_or_else(|_| "{}".to_string()),
            "HEALTH" => r#"{"status":"healthy"}"#.to_string(),
            "EXIT" => {
                log("api: Received EXIT, shutting down.");
                break;
            }
            _ => {
                log("api: Received unknown command.");
                error_json("Unknown command")
            }
        };

        log(&format!("api -> {:?}", response));
        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }

    log("api: Shutting down.");
    Ok(())
}
