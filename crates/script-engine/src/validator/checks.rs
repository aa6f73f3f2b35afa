//! Per-dialect advisory checks.
//!
//! Checks never fail a script; they append warnings (risky or surprising
//! constructs) and suggestions (hardening the script should adopt).

use lazy_static::lazy_static;
use policy_types::ValidationReport;
use regex::Regex;

lazy_static! {
    /// A comment line mentioning error handling, e.g.
    /// `# Error handling: steps run inside try/catch`.
    static ref ERROR_HANDLING_COMMENT: Regex = Regex::new(r"(?i)#.*error.*handling").unwrap();
}

/// PowerShell checks.
pub(super) fn check_powershell(script: &str, report: &mut ValidationReport) {
    if script.contains("Set-ExecutionPolicy") {
        report
            .warnings
            .push("Script modifies execution policy - ensure this is intended".to_string());
    }
    if !ERROR_HANDLING_COMMENT.is_match(script) {
        report
            .suggestions
            .push("Consider adding error handling with try-catch blocks".to_string());
    }
}

/// POSIX shell checks.
pub(super) fn check_shell(script: &str, report: &mut ValidationReport) {
    if !script.starts_with("#!/") {
        report.warnings.push("Script missing shebang line".to_string());
    }
    if !script.contains("set -e") {
        report
            .suggestions
            .push("Consider adding \"set -e\" for better error handling".to_string());
    }
}
