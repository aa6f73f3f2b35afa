//! Script generation for compliance benchmarks.
//!
//! Takes the rules extracted by `benchmark-engine` and produces runnable
//! audit and remediation scripts: a deterministic path that synthesizes
//! steps from benchmark instructions and fills a platform template, an
//! AI-assisted path that delegates step writing to an external
//! text-generation collaborator, and a static validator that scores the
//! result.

pub mod errors;
pub mod generate;
pub mod model;
pub mod synth;
pub mod templates;
pub mod validator;

pub use errors::ScriptError;
pub use generate::{analyze_document, generate_with_model, DEFAULT_GENERATION_TIMEOUT_MS};
pub use model::{GenerationPrompt, ScriptPrompt, TextGenerator};
pub use templates::{TemplateSet, TemplateValues};
pub use validator::{security_score, validate_script};

/// Script generation engine: the template set plus the generation entry
/// points implemented in [`generate`].
///
/// Construction is explicit and the engine is immutable afterwards; there
/// is no process-wide instance. Clone it or share a reference to use the
/// same templates from several tasks.
#[derive(Debug, Clone)]
pub struct ScriptEngine {
    templates: TemplateSet,
}

impl ScriptEngine {
    /// Engine over the four compiled-in default templates.
    pub fn new() -> Self {
        Self {
            templates: TemplateSet::embedded(),
        }
    }

    /// Engine over a caller-supplied template set.
    pub fn with_templates(templates: TemplateSet) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}
