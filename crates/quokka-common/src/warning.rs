//! Toolkit warnings with colored terminal output.
//!
//! Provides deduplication so the same diagnostic prints once per process.
//! Used by the selector builder to flag permissive input that is accepted
//! but probably unintended (e.g. an unrecognized combinator symbol).

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

/// Warn about permissive or unsupported input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("selectors", "unrecognized combinator '>>', rendering verbatim");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let newly_recorded = WARNED
        .get_or_init(|| Mutex::new(HashSet::new()))
        .lock()
        .unwrap()
        .insert(key);

    if newly_recorded {
        eprintln!("{YELLOW}[Quokka {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when starting a fresh batch of work)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    if let Some(set) = WARNED.get() {
        set.lock().unwrap().clear();
    }
}
