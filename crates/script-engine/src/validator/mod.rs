//! Static script validation.
//!
//! Heuristic checks over generated (or hand-written) script text: advisory
//! warnings and suggestions per dialect, plus a security score. Validation
//! is best-effort by contract; an internal panic is caught and downgraded
//! into an invalid report so the surrounding pipeline keeps running.

mod checks;
mod scoring;

pub use scoring::security_score;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use policy_types::{Platform, ScriptDialect, ValidationReport};
use tracing::{debug, warn};

/// Validate script text against the declared target platform.
pub fn validate_script(script: &str, platform: Platform) -> ValidationReport {
    match panic::catch_unwind(AssertUnwindSafe(|| run_checks(script, platform))) {
        Ok(report) => report,
        Err(cause) => {
            let message = format!("validation failed internally: {}", panic_message(&cause));
            warn!(platform = platform.name(), error = %message, "validation pass panicked");
            ValidationReport::degraded(message)
        }
    }
}

fn run_checks(script: &str, platform: Platform) -> ValidationReport {
    let mut report = ValidationReport::clean();
    match platform.dialect() {
        ScriptDialect::PowerShell => checks::check_powershell(script, &mut report),
        ScriptDialect::Shell => checks::check_shell(script, &mut report),
    }
    report.security_score = scoring::security_score(script);
    debug!(
        platform = platform.name(),
        score = report.security_score,
        warnings = report.warnings.len(),
        suggestions = report.suggestions.len(),
        "validated script"
    );
    report
}

fn panic_message(cause: &(dyn Any + Send)) -> &str {
    if let Some(message) = cause.downcast_ref::<&str>() {
        message
    } else if let Some(message) = cause.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
