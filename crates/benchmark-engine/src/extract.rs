//! Rule and remediation-block extraction from raw benchmark text.

use policy_types::{ComplianceDocument, Platform, PolicyRule};
use tracing::debug;

use crate::classify;
use crate::patterns;

/// Extract every rule heading and remediation block from one document.
///
/// The two scans are independent: a document may yield rules without
/// remediation blocks or the reverse, and the output sequences are not
/// index-aligned. A document with no matches produces an empty
/// [`ComplianceDocument`], never an error.
///
/// `platform` overrides inference from the document text.
pub fn extract_rules(text: &str, platform: Option<Platform>) -> ComplianceDocument {
    let platform = platform.unwrap_or_else(|| classify::infer_platform(text));

    let rules: Vec<PolicyRule> = patterns::RULE_HEADING
        .captures_iter(text)
        .map(|caps| {
            let heading = caps.get(0).map_or("", |m| m.as_str());
            PolicyRule {
                id: caps.get(1).map(|m| m.as_str().to_string()),
                level: caps.get(2).and_then(|m| m.as_str().parse().ok()),
                title: caps.get(3).map(|m| m.as_str().trim().to_string()),
                platform,
                severity: classify::classify_severity(heading),
            }
        })
        .collect();

    let remediation_blocks = extract_remediation_blocks(text);

    debug!(
        rules = rules.len(),
        blocks = remediation_blocks.len(),
        platform = platform.name(),
        "extracted benchmark document"
    );

    ComplianceDocument {
        rules,
        remediation_blocks,
    }
}

/// Collect remediation blocks: spans from each `Remediation:` marker up to
/// the next rule-numbered line or end of input.
///
/// The scan resumes at the end of each captured span, so a `Remediation:`
/// token inside an already-captured block does not start a second block.
/// Interior whitespace is collapsed to single spaces; an empty span is
/// kept as an empty string so callers' positional bookkeeping holds.
pub fn extract_remediation_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(label) = patterns::REMEDIATION_LABEL.find_at(text, pos) {
        let start = label.end();
        let end = patterns::RULE_NUMBER_LINE
            .find_at(text, start)
            .map(|m| m.start())
            .unwrap_or(text.len());
        blocks.push(collapse_whitespace(&text[start..end]));
        pos = end;
    }

    blocks
}

/// Parse a single rule from a short string such as
/// `1.2.3 (L1) Ensure 'Lockout threshold' is set to 5`.
///
/// The id, level, and title sub-patterns match independently; whichever
/// misses leaves its field `None` instead of failing the parse. The
/// level sub-pattern accepts any integer here, unlike the strict
/// full-document heading.
pub fn parse_rule(text: &str, platform: Option<Platform>) -> PolicyRule {
    let platform = platform.unwrap_or_else(|| classify::infer_platform(text));

    PolicyRule {
        id: patterns::RULE_ID
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
        level: patterns::RULE_LEVEL
            .captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok()),
        title: patterns::RULE_TITLE
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
        platform,
        severity: classify::classify_severity(text),
    }
}

/// Collapse every whitespace run (including newlines) to a single space
/// and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_types::Severity;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
1.1.1 (L1) Ensure 'Minimum password length' is set to 14 or more characters
Description: Longer passwords resist brute force.
Remediation:
Navigate to Account Policies and set
minimum length to 14.
1.1.2 (L1) Ensure 'Account lockout threshold' is set to 5 or fewer attempts
Remediation:
Set lockout threshold to 5.
";

    #[test]
    fn test_extracts_rules_and_blocks() {
        let doc = extract_rules(SAMPLE, Some(Platform::Windows));

        assert_eq!(doc.rules.len(), 2);
        assert_eq!(doc.rules[0].id.as_deref(), Some("1.1.1"));
        assert_eq!(doc.rules[0].level, Some(1));
        assert_eq!(
            doc.rules[0].title.as_deref(),
            Some("Minimum password length")
        );
        assert_eq!(doc.rules[0].severity, Severity::Critical);
        assert_eq!(doc.rules[1].id.as_deref(), Some("1.1.2"));
        // "Account lockout threshold" hits no tier keyword
        assert_eq!(doc.rules[1].severity, Severity::Low);

        assert_eq!(
            doc.remediation_blocks,
            vec![
                "Navigate to Account Policies and set minimum length to 14.".to_string(),
                "Set lockout threshold to 5.".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let doc = extract_rules("Unrelated prose without any headings.", None);
        assert!(doc.rules.is_empty());
        assert!(doc.remediation_blocks.is_empty());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_rules_and_blocks_are_not_aligned() {
        // One heading, two remediation sections (the second sits under a
        // numbered line that is not a valid heading): the scans run
        // independently and the caller gets both counts as-is.
        let text = "1.2.3 (L2) Ensure 'Logging' is on\n\
                    Remediation: enable the audit subsystem\n\
                    9.9.9 appendix row without a level marker\n\
                    Remediation: see vendor documentation";
        let doc = extract_rules(text, Some(Platform::Linux));
        assert_eq!(doc.rules.len(), 1);
        assert_eq!(doc.remediation_blocks.len(), 2);
        assert_eq!(
            doc.remediation_blocks[0],
            "enable the audit subsystem".to_string()
        );
    }

    #[test]
    fn test_empty_remediation_block_is_kept() {
        let text = "Remediation:\n1.2.3 (L1) Ensure 'x' is set";
        let blocks = extract_remediation_blocks(text);
        assert_eq!(blocks, vec![String::new()]);
    }

    #[test]
    fn test_block_runs_to_end_of_document() {
        let text = "Remediation: chmod 600 /etc/shadow\nthen verify ownership";
        let blocks = extract_remediation_blocks(text);
        assert_eq!(
            blocks,
            vec!["chmod 600 /etc/shadow then verify ownership".to_string()]
        );
    }

    #[test]
    fn test_block_whitespace_is_collapsed() {
        let text = "Remediation:   spread \t over\n\n   many    lines \n9.9.9 next";
        let blocks = extract_remediation_blocks(text);
        assert_eq!(blocks, vec!["spread over many lines".to_string()]);
    }

    #[test]
    fn test_marker_inside_captured_block_is_not_reopened() {
        let text = "Remediation: first step. Remediation: still the same block\n1.2.3 next";
        let blocks = extract_remediation_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("still the same block"));
    }

    #[test]
    fn test_parse_rule_full_heading() {
        let rule = parse_rule(
            "1.2.3 (L1) Ensure 'Audit policy' is configured",
            Some(Platform::Windows),
        );
        assert_eq!(rule.id.as_deref(), Some("1.2.3"));
        assert_eq!(rule.level, Some(1));
        assert_eq!(rule.title.as_deref(), Some("Audit policy"));
        assert_eq!(rule.platform, Platform::Windows);
        assert_eq!(rule.severity, Severity::High);
    }

    #[test]
    fn test_parse_rule_fields_are_independent() {
        let id_only = parse_rule("see section 2.3.4 for details", Some(Platform::Linux));
        assert_eq!(id_only.id.as_deref(), Some("2.3.4"));
        assert_eq!(id_only.level, None);
        assert_eq!(id_only.title, None);

        let title_only = parse_rule("Ensure 'Firewall' is enabled", Some(Platform::Linux));
        assert_eq!(title_only.id, None);
        assert_eq!(title_only.title.as_deref(), Some("Firewall"));

        let nothing = parse_rule("no structure here", Some(Platform::Linux));
        assert!(nothing.is_unidentified());
        assert_eq!(nothing.severity, Severity::Low);
    }

    #[test]
    fn test_parse_rule_accepts_any_level_integer() {
        let rule = parse_rule("9.9.9 (L7) Ensure 'x'", Some(Platform::Linux));
        assert_eq!(rule.level, Some(7));
    }

    #[test]
    fn test_parse_rule_infers_platform_when_unsupplied() {
        let rule = parse_rule("1.1.1 (L1) Ensure 'registry auditing' is on", None);
        assert_eq!(rule.platform, Platform::Windows);
    }
}
