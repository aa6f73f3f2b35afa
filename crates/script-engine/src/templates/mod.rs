//! Script template store and placeholder substitution.
//!
//! A template is plain script text with four placeholder tokens:
//! `{rule_id}`, `{description}`, `{audit_steps}` and `{remediation_steps}`.
//! Substitution is literal token replacement, so script braces, `$` and
//! quoting never need escaping. The placeholder for the other script type
//! is filled with an empty string.

pub mod embedded;

use std::collections::HashMap;

use policy_types::{ScriptDialect, ScriptType};

pub use embedded::embedded_template;

/// Values substituted into a template.
#[derive(Debug, Clone)]
pub struct TemplateValues<'a> {
    pub rule_id: &'a str,
    pub description: &'a str,
    pub audit_steps: &'a str,
    pub remediation_steps: &'a str,
}

/// Replace the four placeholder tokens with the prepared values.
pub fn fill(template: &str, values: &TemplateValues<'_>) -> String {
    template
        .replace("{rule_id}", values.rule_id)
        .replace("{description}", values.description)
        .replace("{audit_steps}", values.audit_steps)
        .replace("{remediation_steps}", values.remediation_steps)
}

/// Script skeletons keyed by dialect and script type.
///
/// The set an engine is built with is the complete universe of scripts it
/// can produce; a request outside the set fails with a missing-template
/// error rather than falling back.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    entries: HashMap<(ScriptDialect, ScriptType), String>,
}

impl TemplateSet {
    /// Set holding the four compiled-in default templates.
    pub fn embedded() -> Self {
        let mut set = Self::empty();
        for dialect in [ScriptDialect::PowerShell, ScriptDialect::Shell] {
            for script_type in [ScriptType::Audit, ScriptType::Remediation] {
                set.insert(
                    dialect,
                    script_type,
                    embedded_template(dialect, script_type).to_string(),
                );
            }
        }
        set
    }

    /// Empty set; callers register their own templates.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a template, replacing any previous one for the same slot.
    pub fn insert(&mut self, dialect: ScriptDialect, script_type: ScriptType, template: String) {
        self.entries.insert((dialect, script_type), template);
    }

    pub fn get(&self, dialect: ScriptDialect, script_type: ScriptType) -> Option<&str> {
        self.entries
            .get(&(dialect, script_type))
            .map(|template| template.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
