//! Predictable-pattern detection

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Three-character ascending alphabetic or numeric runs
static SEQUENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)abc|bcd|cde|def|efg|fgh|ghi|hij|ijk|jkl|klm|lmn|mno|nop|opq|pqr|qrs|rst|stu|tuv|uvw|vwx|wxy|xyz|012|123|234|345|456|567|678|789",
    )
    .expect("invalid sequential pattern")
});

/// Keyboard-row substrings
static KEYBOARD_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)qwerty|asdfgh|zxcvbn|qwertz|azerty").expect("invalid keyboard pattern")
});

/// Minimum run of one repeated character that counts as a pattern
pub const REPEAT_RUN: usize = 3;

/// Kind of predictable pattern found in a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Ascending run such as `abc` or `123`
    Sequential,
    /// Same character three or more times in a row
    Repeated,
    /// Keyboard-row substring such as `qwerty`
    KeyboardRow,
}

/// Every kind of pattern present, in declaration order
pub fn detect_patterns(password: &str) -> Vec<PatternKind> {
    let mut found = Vec::new();
    if SEQUENTIAL.is_match(password) {
        found.push(PatternKind::Sequential);
    }
    if has_repeated_run(password, REPEAT_RUN) {
        found.push(PatternKind::Repeated);
    }
    if KEYBOARD_ROW.is_match(password) {
        found.push(PatternKind::KeyboardRow);
    }
    found
}

/// Whether any pattern is present
pub fn has_common_patterns(password: &str) -> bool {
    SEQUENTIAL.is_match(password)
        || has_repeated_run(password, REPEAT_RUN)
        || KEYBOARD_ROW.is_match(password)
}

// Backreferences are unsupported by `regex`, so runs are counted directly.
fn has_repeated_run(password: &str, min_run: usize) -> bool {
    let mut previous = None;
    let mut run = 0;
    for ch in password.chars() {
        if previous == Some(ch) {
            run += 1;
        } else {
            previous = Some(ch);
            run = 1;
        }
        if run >= min_run {
            return true;
        }
    }
    false
}
