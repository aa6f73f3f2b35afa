//! Regex patterns for benchmark text extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Full rule heading: dotted three-level id, `(L1)`/`(L2)` marker, the
    /// literal word "Ensure", then a quoted title.
    /// Example: `18.9.45.1 (L1) Ensure 'Minimum password length' is set`.
    pub static ref RULE_HEADING: Regex =
        Regex::new(r#"(\d+\.\d+\.\d+)\s+\(L([1-2])\)\s+Ensure\s['"](.*?)['"]"#).unwrap();

    /// Marker that opens a remediation block.
    pub static ref REMEDIATION_LABEL: Regex = Regex::new(r"Remediation:").unwrap();

    /// Start of the next rule's numbered line; terminates the current
    /// remediation block.
    pub static ref RULE_NUMBER_LINE: Regex = Regex::new(r"\n\s*\d+\.\d+\.\d+").unwrap();

    /// Independent sub-patterns for single-rule analysis. Each may miss
    /// on its own without failing the whole parse.
    pub static ref RULE_ID: Regex = Regex::new(r"(\d+\.\d+\.\d+)").unwrap();
    pub static ref RULE_LEVEL: Regex = Regex::new(r"\(L(\d+)\)").unwrap();
    pub static ref RULE_TITLE: Regex = Regex::new(r#"Ensure\s['"](.*?)['"]"#).unwrap();
}
