//! `clear_warnings` mutates the process-wide registry, so it lives in its own
//! test binary.

use kata_common::warning::{clear_warnings, warn_once, was_warned};

#[test]
fn test_clear_warnings_forgets_everything() {
    warn_once("Clear", "to be cleared");
    assert!(was_warned("Clear", "to be cleared"));
    clear_warnings();
    assert!(!was_warned("Clear", "to be cleared"));
}
