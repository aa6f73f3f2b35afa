//! Embedded script templates
//!
//! Loads the default platform templates from files at compile time,
//! embedding them in the binary.

use policy_types::{ScriptDialect, ScriptType};

/// Windows audit template - loaded from templates/windows_audit.ps1
const WINDOWS_AUDIT_TEMPLATE: &str = include_str!("../../templates/windows_audit.ps1");

/// Windows remediation template - loaded from templates/windows_remediation.ps1
const WINDOWS_REMEDIATION_TEMPLATE: &str = include_str!("../../templates/windows_remediation.ps1");

/// Linux audit template - loaded from templates/linux_audit.sh
const LINUX_AUDIT_TEMPLATE: &str = include_str!("../../templates/linux_audit.sh");

/// Linux remediation template - loaded from templates/linux_remediation.sh
const LINUX_REMEDIATION_TEMPLATE: &str = include_str!("../../templates/linux_remediation.sh");

/// Look up the compiled-in template for a dialect and script type.
pub fn embedded_template(dialect: ScriptDialect, script_type: ScriptType) -> &'static str {
    match (dialect, script_type) {
        (ScriptDialect::PowerShell, ScriptType::Audit) => WINDOWS_AUDIT_TEMPLATE,
        (ScriptDialect::PowerShell, ScriptType::Remediation) => WINDOWS_REMEDIATION_TEMPLATE,
        (ScriptDialect::Shell, ScriptType::Audit) => LINUX_AUDIT_TEMPLATE,
        (ScriptDialect::Shell, ScriptType::Remediation) => LINUX_REMEDIATION_TEMPLATE,
    }
}
