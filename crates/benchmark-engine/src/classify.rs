//! Severity classification and platform inference by keyword precedence.

use policy_types::{Platform, Severity};

/// Tier 1: credentials, cryptography, and privilege control.
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "password",
    "authentication",
    "encryption",
    "privilege",
    "administrator",
];

/// Tier 2: visibility and access control.
pub const HIGH_KEYWORDS: &[&str] = &["audit", "log", "access", "permission", "security"];

/// Tier 3: general configuration hygiene.
pub const MEDIUM_KEYWORDS: &[&str] = &["configuration", "setting", "policy", "control"];

/// Markers that identify a Windows benchmark.
pub const WINDOWS_MARKERS: &[&str] = &[
    "windows",
    "powershell",
    "registry",
    "hklm",
    "group policy",
    "active directory",
];

/// Markers that identify a non-Linux Unix benchmark.
pub const UNIX_MARKERS: &[&str] = &["aix", "solaris", "hp-ux", "freebsd", "macos"];

/// Assign a severity bucket to rule text.
///
/// Tiers are checked in fixed order and the first hit wins, so a text
/// containing both a critical and a medium keyword is critical. Matching
/// is case-insensitive substring containment ("privilege" also hits
/// inside "privileges"). Total: text matching no tier is `Low`.
pub fn classify_severity(text: &str) -> Severity {
    let lower = text.to_lowercase();
    if contains_any(&lower, CRITICAL_KEYWORDS) {
        Severity::Critical
    } else if contains_any(&lower, HIGH_KEYWORDS) {
        Severity::High
    } else if contains_any(&lower, MEDIUM_KEYWORDS) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Guess the platform a benchmark document targets when the caller did
/// not supply one. Windows markers take precedence over Unix markers;
/// everything else is treated as Linux.
pub fn infer_platform(text: &str) -> Platform {
    let lower = text.to_lowercase();
    if contains_any(&lower, WINDOWS_MARKERS) {
        Platform::Windows
    } else if contains_any(&lower, UNIX_MARKERS) {
        Platform::Unix
    } else {
        Platform::Linux
    }
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}
