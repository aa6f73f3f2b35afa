//! Script generation entry points.
//!
//! Deterministic generation is synchronous and needs nothing beyond the
//! engine's template set. AI-assisted generation and narrative document
//! analysis borrow a [`TextGenerator`] and run under a timeout budget;
//! a collaborator that overruns or errors fails the request rather than
//! silently falling back.

use std::time::Duration;

use policy_types::{DocumentAnalysis, GeneratedScript, Platform, PolicyRule, RuleSource, ScriptRequest, ScriptType};
use tracing::{info, warn};

use crate::errors::ScriptError;
use crate::model::{GenerationPrompt, ScriptPrompt, TextGenerator};
use crate::synth;
use crate::templates::{self, TemplateValues};
use crate::ScriptEngine;

/// Timeout applied when the caller has no budget of its own.
pub const DEFAULT_GENERATION_TIMEOUT_MS: u64 = 30_000;

impl ScriptEngine {
    /// Generate a script deterministically: synthesize a step block from
    /// the request's instructions (or from the rule itself) and fill the
    /// matching template.
    ///
    /// Requests flagged `use_ai` are refused here. Without a collaborator
    /// the request must fail loudly, not degrade into template output the
    /// caller did not ask for; see [`generate_with_model`].
    pub fn generate(&self, request: &ScriptRequest) -> Result<GeneratedScript, ScriptError> {
        if request.use_ai {
            return Err(ScriptError::GenerationFailure(
                "request asked for AI-assisted generation but no text generation backend is configured"
                    .to_string(),
            ));
        }

        let rule = resolve_rule(request)?;
        let dialect = request.platform.dialect();
        let steps = match request.instructions.as_deref() {
            Some(instructions) => synth::steps_from_instructions(instructions, dialect),
            None => synth::steps_from_rule(&rule, dialect),
        };
        self.compose(request, &rule, &steps)
    }

    /// Fill the template for the request's platform and script type with
    /// the rule header and a finished step block.
    fn compose(
        &self,
        request: &ScriptRequest,
        rule: &PolicyRule,
        steps: &str,
    ) -> Result<GeneratedScript, ScriptError> {
        let template = self
            .templates()
            .get(request.platform.dialect(), request.script_type)
            .ok_or(ScriptError::MissingTemplate {
                platform: request.platform,
                script_type: request.script_type,
            })?;

        let (audit_steps, remediation_steps) = match request.script_type {
            ScriptType::Audit => (steps, ""),
            ScriptType::Remediation => ("", steps),
        };
        let content = templates::fill(
            template,
            &TemplateValues {
                rule_id: rule.display_id(),
                description: rule.display_title(),
                audit_steps,
                remediation_steps,
            },
        );

        info!(
            rule_id = rule.display_id(),
            platform = request.platform.name(),
            script_type = request.script_type.name(),
            "generated script"
        );
        Ok(GeneratedScript::new(
            rule.display_id(),
            request.platform,
            request.script_type,
            content,
        ))
    }
}

/// Resolve the request's rule: a parsed rule passes through, raw heading
/// text is analyzed on the fly. A rule with neither an id nor a title is
/// not enough to generate against.
fn resolve_rule(request: &ScriptRequest) -> Result<PolicyRule, ScriptError> {
    let rule = match &request.rule {
        RuleSource::Parsed(rule) => rule.clone(),
        RuleSource::Raw(text) => benchmark_engine::parse_rule(text, Some(request.platform)),
    };
    if rule.is_unidentified() {
        return Err(ScriptError::IncompleteRequest(
            "rule carries neither an id nor a title".to_string(),
        ));
    }
    Ok(rule)
}

/// Generate a script with a text-generation collaborator available.
///
/// Deterministic requests go through [`ScriptEngine::generate`] untouched.
/// AI-assisted requests send the rule context to the model under
/// `timeout_ms` and insert the returned text into the template as the
/// step block, verbatim.
pub async fn generate_with_model(
    engine: &ScriptEngine,
    model: &dyn TextGenerator,
    request: &ScriptRequest,
    timeout_ms: u64,
) -> Result<GeneratedScript, ScriptError> {
    if !request.use_ai {
        return engine.generate(request);
    }

    let rule = resolve_rule(request)?;
    let prompt = GenerationPrompt::Script(ScriptPrompt::new(
        request.script_type,
        request.platform,
        &rule,
    ));

    let outcome = tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        model.generate(&prompt),
    )
    .await;

    let steps = match outcome {
        Ok(Ok(text)) => text,
        Ok(Err(err)) => {
            warn!(rule_id = rule.display_id(), error = %err, "text generation failed");
            return Err(ScriptError::GenerationFailure(err.to_string()));
        }
        Err(_) => {
            warn!(rule_id = rule.display_id(), timeout_ms, "text generation timed out");
            return Err(ScriptError::GenerationTimeout(timeout_ms));
        }
    };

    engine.compose(request, &rule, &steps)
}

/// Analyze benchmark text with a model-written narrative alongside the
/// structured extraction.
///
/// Extraction runs first and never depends on the collaborator; the
/// narrative is generated from the raw text under `timeout_ms` and kept
/// as a separate field, never merged into the structured data.
pub async fn analyze_document(
    model: &dyn TextGenerator,
    text: &str,
    platform: Option<Platform>,
    timeout_ms: u64,
) -> Result<DocumentAnalysis, ScriptError> {
    let mut analysis = benchmark_engine::analyze(text, platform);

    let prompt = GenerationPrompt::Analysis {
        text: text.to_string(),
    };
    let outcome = tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        model.generate(&prompt),
    )
    .await;

    match outcome {
        Ok(Ok(narrative)) => {
            analysis.narrative = Some(narrative);
            Ok(analysis)
        }
        Ok(Err(err)) => {
            warn!(error = %err, "document narrative generation failed");
            Err(ScriptError::GenerationFailure(err.to_string()))
        }
        Err(_) => {
            warn!(timeout_ms, "document narrative generation timed out");
            Err(ScriptError::GenerationTimeout(timeout_ms))
        }
    }
}
