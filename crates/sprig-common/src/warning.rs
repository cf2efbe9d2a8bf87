//! Parser warnings with colored terminal output.
//!
//! The parser never fails on malformed markup; instead it reports what it had
//! to tolerate here. Each distinct message is printed at most once per process
//! until [`clear_warnings`] is called.

use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Every `[component] message` key printed so far.
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about tolerated input (prints once per unique message).
///
/// Returns `true` if the message was printed, `false` if it was already
/// reported earlier.
///
/// # Example
/// ```
/// use sprig_common::warning::warn_once;
///
/// let first = warn_once("doctest", "unterminated comment");
/// let second = warn_once("doctest", "unterminated comment");
/// assert!(first);
/// assert!(!second);
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{YELLOW}[sprig {component}] ⚠ {message}{RESET}");
    }
    should_print
}

/// Whether `message` has already been reported for `component`.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(&warning_key(component, message))
}

/// Clear all recorded warnings (call before parsing an unrelated document).
pub fn clear_warnings() {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}
