//! Layout warnings routed through the `log` facade.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the style, tree and layout crates to report input they accept but
//! do not fully support.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported feature (emits once per unique message)
///
/// The warning is logged at `warn` level with the component as the target
/// prefix. Returns `true` when this call emitted the warning.
///
/// # Example
/// ```
/// use quokka_common::warning::warn_once;
///
/// warn_once("Style", "position: sticky is laid out as relative");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        log::warn!("[Quokka {component}] {message}");
    }
    should_emit
}

/// Clear all recorded warnings (call before laying out a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_deduplicates() {
        let message = "replaced box without width (dedup test)";
        let first = warn_once("Test", message);
        let second = warn_once("Test", message);
        assert!(first);
        assert!(!second);
    }

    #[test]
    fn test_distinct_components_are_separate_keys() {
        assert!(warn_once("A", "distinct component key"));
        assert!(warn_once("B", "distinct component key"));
    }
}
