//! Per-severity counts and the one-line document headline.

use policy_types::{AnalysisSummary, ComplianceDocument, Severity};

/// Count rules per severity bucket and produce the headline sentence.
pub fn summarize(document: &ComplianceDocument) -> AnalysisSummary {
    let mut critical = 0;
    let mut high = 0;
    let mut medium = 0;
    let mut low = 0;

    for rule in &document.rules {
        match rule.severity {
            Severity::Critical => critical += 1,
            Severity::High => high += 1,
            Severity::Medium => medium += 1,
            Severity::Low => low += 1,
        }
    }

    let headline = if document.rules.is_empty() {
        "No policies found in the document.".to_string()
    } else {
        format!(
            "Extracted {} compliance policies. Analysis includes categorization \
             by severity and automated script generation capabilities.",
            document.rules.len()
        )
    };

    AnalysisSummary {
        total_rules: document.rules.len(),
        critical,
        high,
        medium,
        low,
        headline,
    }
}
