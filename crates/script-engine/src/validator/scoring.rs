//! Security scoring for script text.

use lazy_static::lazy_static;
use regex::Regex;

/// Deduction per risky-pattern class found.
const CLASS_DEDUCTION: i32 = 20;

lazy_static! {
    /// Risky construct classes. A class deducts once no matter how many
    /// times it appears in the script.
    static ref RISKY_PATTERNS: Vec<Regex> = vec![
        // Recursive deletion rooted at /
        Regex::new(r"(?i)rm\s+-rf\s+/").unwrap(),
        // World-writable permissions
        Regex::new(r"(?i)chmod\s+777").unwrap(),
        // Privileged deletion
        Regex::new(r"(?i)sudo\s+rm").unwrap(),
        // Dynamic code execution
        Regex::new(r"(?i)exec\s*\(").unwrap(),
    ];
}

/// Score script text from 100 (no risky class present) down to 0.
pub fn security_score(script: &str) -> u8 {
    let mut score = 100_i32;
    for pattern in RISKY_PATTERNS.iter() {
        if pattern.is_match(script) {
            score -= CLASS_DEDUCTION;
        }
    }
    score.clamp(0, 100) as u8
}
