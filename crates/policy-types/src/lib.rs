pub mod types;

pub use types::{
    AnalysisSummary, ComplianceDocument, DocumentAnalysis, GeneratedScript, Platform, PolicyRule,
    RuleSource, ScriptDialect, ScriptRequest, ScriptType, Severity, ValidationReport,
};
