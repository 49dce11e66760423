// JSON-over-FFI surface for host applications. Every entry point is wrapped
// in catch_unwind so a panic never crosses the C boundary.
use crate::RadicalEngine;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;

static mut RADICAL_ENGINE: *mut RadicalEngine = ptr::null_mut();

const DEFAULT_DATA_DIR: &str = "data";

fn error_json(detail: &str) -> String {
    serde_json::json!({ "detail": detail }).to_string()
}

#[no_mangle]
pub extern "C" fn radical_engine_init(data_dir: *const c_char) {
    let result = catch_unwind(|| {
        unsafe {
            if !RADICAL_ENGINE.is_null() {
                return;
            }
            let dir = if data_dir.is_null() {
                DEFAULT_DATA_DIR.to_string()
            } else {
                CStr::from_ptr(data_dir)
                    .to_str()
                    .unwrap_or(DEFAULT_DATA_DIR)
                    .to_string()
            };
            let engine = RadicalEngine::from_data_dir_or_empty(Path::new(&dir));
            RADICAL_ENGINE = Box::into_raw(Box::new(engine));
            eprintln!("[radical_core] Engine initialized from '{}'.", dir);
        }
    });
    if result.is_err() {
        eprintln!("[radical_core FATAL] A panic occurred during engine initialization.");
        unsafe {
            RADICAL_ENGINE = ptr::null_mut();
        }
    }
}

#[no_mangle]
pub extern "C" fn radical_engine_destroy() {
    unsafe {
        if RADICAL_ENGINE.is_null() {
            return;
        }
        drop(Box::from_raw(RADICAL_ENGINE));
        RADICAL_ENGINE = ptr::null_mut();
    }
}

unsafe fn get_engine<'a>() -> Option<&'a RadicalEngine> {
    RADICAL_ENGINE.as_ref()
}

/// Analyzes a UTF-8 text and returns the analysis as a JSON string, or a
/// `{"detail": ...}` object when validation fails. The caller owns the
/// returned string and must release it with `radical_engine_free_string`.
#[no_mangle]
pub extern "C" fn radical_engine_analyze_text(text: *const c_char) -> *mut c_char {
    let c_str = unsafe { CStr::from_ptr(text) };
    let input = c_str.to_str().unwrap_or("");
    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            if let Some(engine) = get_engine() {
                return match engine.analyze_text(input) {
                    Ok(analysis) => serde_json::to_string(&analysis)
                        .unwrap_or_else(|_| error_json("Serialization failed")),
                    Err(e) => error_json(&e.to_string()),
                };
            }
        }
        error_json("Engine is not initialized")
    }));
    let json_string = result.unwrap_or_else(|_| {
        eprintln!("[radical_core FATAL] Panic in analyze_text.");
        error_json("Internal error")
    });
    CString::new(json_string).unwrap().into_raw()
}

/// Returns the whole radical table as a JSON object keyed by radical symbol.
#[no_mangle]
pub extern "C" fn radical_engine_list_radicals() -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| {
        unsafe {
            if let Some(engine) = get_engine() {
                return serde_json::to_string(engine.radicals())
                    .unwrap_or_else(|_| "{}".to_string());
            }
        }
        "{}".to_string()
    }));
    let json_string = result.unwrap_or_else(|_| {
        eprintln!("[radical_core FATAL] Panic in list_radicals.");
        "{}".to_string()
    });
    CString::new(json_string).unwrap().into_raw()
}

#[no_mangle]
pub extern "C" fn radical_engine_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
