//! Shared data model for the benchmark-to-script pipeline.
//!
//! Every type here is a plain serde value. Requests and results are
//! constructed per invocation and never mutated afterwards, so values can
//! be shared freely across threads.

use serde::{Deserialize, Serialize};

/// Target operating system for a generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    Unix,
}

/// Script family a platform executes. Unix hosts run the same POSIX shell
/// scripts as Linux, so the two share templates and validation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptDialect {
    PowerShell,
    Shell,
}

impl Platform {
    /// Lowercase wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Unix => "unix",
        }
    }

    /// Case-insensitive parse of the wire name.
    pub fn parse(s: &str) -> Option<Platform> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Some(Platform::Windows),
            "linux" => Some(Platform::Linux),
            "unix" => Some(Platform::Unix),
            _ => None,
        }
    }

    pub fn dialect(&self) -> ScriptDialect {
        match self {
            Platform::Windows => ScriptDialect::PowerShell,
            Platform::Linux | Platform::Unix => ScriptDialect::Shell,
        }
    }
}

/// Whether a script inspects system state or changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    Audit,
    Remediation,
}

impl ScriptType {
    /// Lowercase wire name.
    pub fn name(&self) -> &'static str {
        match self {
            ScriptType::Audit => "audit",
            ScriptType::Remediation => "remediation",
        }
    }

    /// Case-insensitive parse of the wire name.
    pub fn parse(s: &str) -> Option<ScriptType> {
        match s.trim().to_lowercase().as_str() {
            "audit" => Some(ScriptType::Audit),
            "remediation" => Some(ScriptType::Remediation),
            _ => None,
        }
    }
}

/// Severity bucket assigned to a rule by keyword precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// A single benchmark recommendation.
///
/// `id`, `level`, and `title` are each independently optional: inline
/// analysis of a short rule string may only recover part of the heading,
/// and a partial parse is still useful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRule {
    /// Dotted numeric identifier, e.g. "18.9.45.1".
    pub id: Option<String>,
    /// Benchmark profile level from an `(L1)` / `(L2)` marker.
    pub level: Option<u8>,
    /// Recommendation title as quoted in the heading.
    pub title: Option<String>,
    pub platform: Platform,
    pub severity: Severity,
}

impl PolicyRule {
    /// Identifier for script headers; "unknown" when the heading carried
    /// none.
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }

    /// Title for script headers.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("unspecified")
    }

    /// True when neither an id nor a title was recovered, i.e. there is
    /// nothing to identify the rule by.
    pub fn is_unidentified(&self) -> bool {
        self.id.is_none() && self.title.is_none()
    }
}

/// Everything extracted from one benchmark document.
///
/// Rule headings and remediation blocks are collected by two independent
/// scans. The sequences share document order but are NOT guaranteed equal
/// length or index alignment; callers must not pair them positionally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDocument {
    pub rules: Vec<PolicyRule>,
    pub remediation_blocks: Vec<String>,
}

impl ComplianceDocument {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.remediation_blocks.is_empty()
    }
}

/// Rule identification supplied with a script request: either an
/// already-parsed rule or raw heading text to analyze on the fly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSource {
    Parsed(PolicyRule),
    Raw(String),
}

/// One script-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRequest {
    pub rule: RuleSource,
    pub script_type: ScriptType,
    pub platform: Platform,
    /// Ask the text-generation collaborator to write the step block
    /// instead of the deterministic synthesizer.
    #[serde(default)]
    pub use_ai: bool,
    /// Audit/remediation instructions from the benchmark, one step per
    /// line. Absent means derive a generic step from the rule itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// A finished script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScript {
    pub rule_id: String,
    pub platform: Platform,
    pub script_type: ScriptType,
    pub content: String,
    /// Unix timestamp (seconds) of generation.
    pub generated_at: u64,
}

impl GeneratedScript {
    pub fn new(
        rule_id: impl Into<String>,
        platform: Platform,
        script_type: ScriptType,
        content: String,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            platform,
            script_type,
            content,
            generated_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

/// Result of the static validation pass over script text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub syntax_errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    /// 0-100; each risky-pattern class found deducts 20.
    pub security_score: u8,
}

impl ValidationReport {
    /// Starting report before any check has run: valid, no findings,
    /// full score.
    pub fn clean() -> Self {
        Self {
            is_valid: true,
            syntax_errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
            security_score: 100,
        }
    }

    /// Report for a validation pass that failed internally: invalid,
    /// zero score, the failure message recorded as a syntax error.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            syntax_errors: vec![message.into()],
            warnings: Vec::new(),
            suggestions: Vec::new(),
            security_score: 0,
        }
    }
}

/// Per-severity rule counts plus a one-line description of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_rules: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub headline: String,
}

/// Structured extraction plus the optional model-written narrative.
///
/// The two are separate fields so callers can consume either without
/// parsing prose out of a combined string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    pub document: ComplianceDocument,
    pub summary: AnalysisSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}
