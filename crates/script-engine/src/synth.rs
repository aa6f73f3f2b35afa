//! Deterministic step synthesis.
//!
//! Turns free-text remediation or audit instructions into script step
//! fragments, one fragment per non-blank line. Classification is a
//! case-insensitive substring test on the line; the first matching shape
//! wins and unmatched lines fall through to a logged generic step. The
//! instruction text itself is interpolated verbatim, original casing and
//! inner spacing included.

use policy_types::{PolicyRule, ScriptDialect};

/// PowerShell registry operation, wrapped in try/catch with logging.
const REGISTRY_STEP: &str = r#"try {
    Write-Log 'Checking registry value...'
    # {instruction}
    $result = Get-ItemProperty -Path HKLM:\... -ErrorAction Stop
    Write-Log 'Registry operation completed successfully'
} catch {
    Write-Log "Failed to modify registry: $_"
    throw
}"#;

/// PowerShell service operation, wrapped in try/catch with logging.
const SERVICE_STEP: &str = r#"try {
    Write-Log 'Managing service...'
    # {instruction}
    $service = Get-Service -Name ... -ErrorAction Stop
    Write-Log 'Service operation completed successfully'
} catch {
    Write-Log "Failed to manage service: $_"
    throw
}"#;

/// Shell command guard: run the line as a command, log and exit non-zero
/// on failure, log success otherwise.
const GUARDED_STEP: &str = r#"if ! { {instruction} }; then
    log "Failed to execute: {instruction}"
    exit 1
fi
log "Successfully executed: {instruction}""#;

/// Shell commands that get the guarded treatment.
const SHELL_COMMAND_MARKERS: [&str; 3] = ["chmod", "chown", "systemctl"];

/// Convert newline-delimited instructions into a script step block.
///
/// Blank lines are skipped; surviving lines become fragments in input
/// order, joined with newlines.
pub fn steps_from_instructions(instructions: &str, dialect: ScriptDialect) -> String {
    let steps: Vec<String> = instructions
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| step_for_line(line, dialect))
        .collect();
    steps.join("\n")
}

/// One generic step derived from the rule itself, for requests carrying
/// no instructions.
pub fn steps_from_rule(rule: &PolicyRule, dialect: ScriptDialect) -> String {
    let summary = format!(
        "Apply control for rule {}: {}",
        rule.display_id(),
        rule.display_title()
    );
    generic_step(&summary, dialect)
}

fn step_for_line(line: &str, dialect: ScriptDialect) -> String {
    let lowered = line.to_lowercase();
    match dialect {
        ScriptDialect::PowerShell => {
            if lowered.contains("registry") {
                REGISTRY_STEP.replace("{instruction}", line)
            } else if lowered.contains("service") {
                SERVICE_STEP.replace("{instruction}", line)
            } else {
                generic_step(line, dialect)
            }
        }
        ScriptDialect::Shell => {
            if SHELL_COMMAND_MARKERS
                .iter()
                .any(|marker| lowered.contains(marker))
            {
                GUARDED_STEP.replace("{instruction}", line)
            } else {
                generic_step(line, dialect)
            }
        }
    }
}

fn generic_step(line: &str, dialect: ScriptDialect) -> String {
    match dialect {
        ScriptDialect::PowerShell => format!("Write-Log 'Executing: {}'", line),
        ScriptDialect::Shell => format!("log 'Executing: {}'", line),
    }
}
