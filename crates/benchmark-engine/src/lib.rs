//! Benchmark text analysis: rule extraction, severity classification, and
//! document summaries.
//!
//! Everything here is synchronous and total. Malformed input degrades to
//! empty or default values instead of erroring, because benchmark
//! documents are inherently noisy; only the text-source seam returns
//! errors, and those distinguish "no text" from "could not read".

pub mod classify;
pub mod extract;
pub mod patterns;
pub mod source;
pub mod summary;

pub use classify::{classify_severity, infer_platform};
pub use extract::{extract_remediation_blocks, extract_rules, parse_rule};
pub use source::{read_document, PlainTextSource, SourceError, TextSource};
pub use summary::summarize;

use policy_types::{DocumentAnalysis, Platform};

/// Extract and summarize one benchmark document in a single call.
pub fn analyze(text: &str, platform: Option<Platform>) -> DocumentAnalysis {
    let document = extract::extract_rules(text, platform);
    let summary = summary::summarize(&document);
    DocumentAnalysis {
        document,
        summary,
        narrative: None,
    }
}
