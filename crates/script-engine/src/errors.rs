//! Error types for script generation.

use policy_types::{Platform, ScriptType};
use thiserror::Error;

/// Errors surfaced by script generation.
///
/// Every failure carries the context needed to retry the request. A
/// failed generation never returns partial script text.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// No template is loaded for the requested platform and script type.
    #[error("no template loaded for {}/{}", platform.name(), script_type.name())]
    MissingTemplate {
        platform: Platform,
        script_type: ScriptType,
    },

    /// The request's rule carries too little identity to generate against.
    #[error("incomplete request: {0}")]
    IncompleteRequest(String),

    /// The text-generation collaborator did not answer within the budget.
    #[error("text generation timed out after {0}ms")]
    GenerationTimeout(u64),

    /// The text-generation collaborator answered with an error, or was
    /// required but not available.
    #[error("text generation failed: {0}")]
    GenerationFailure(String),
}
