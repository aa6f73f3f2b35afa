//! Text-generation collaborator seam.
//!
//! AI-assisted generation hands a structured prompt to an external model
//! and treats whatever text comes back as an opaque step block. The
//! pipeline owns the prompt wording and the timeout budget; model hosting,
//! authentication and transport live behind [`TextGenerator`].

use async_trait::async_trait;
use policy_types::{Platform, PolicyRule, ScriptType};
use serde::{Deserialize, Serialize};

/// Bounded rule context for AI-assisted script generation.
///
/// Only these fields ever reach the model; nothing else from the source
/// document is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptPrompt {
    pub script_type: ScriptType,
    pub platform: Platform,
    pub rule_id: Option<String>,
    pub title: Option<String>,
    pub level: Option<u8>,
}

impl ScriptPrompt {
    pub fn new(script_type: ScriptType, platform: Platform, rule: &PolicyRule) -> Self {
        Self {
            script_type,
            platform,
            rule_id: rule.id.clone(),
            title: rule.title.clone(),
            level: rule.level,
        }
    }

    /// Render the instruction text handed to the collaborator.
    pub fn render(&self) -> String {
        format!(
            "You are generating a {script_type} script for {platform}.\n\
             Follow these exact requirements:\n\
             \n\
             Rule Details:\n\
             - ID: {rule_id}\n\
             - Title: {title}\n\
             - Level: {level}\n\
             \n\
             Requirements:\n\
             1. Use native {platform} commands only\n\
             2. Include proper error handling for each step\n\
             3. Add detailed logging with timestamps\n\
             4. Implement input validation\n\
             5. Follow security best practices\n\
             6. Add comments explaining complex operations\n\
             7. Include backup/restore functionality\n\
             8. Add status checks after each critical operation\n\
             \n\
             Generate only the script content, no explanations.\n\
             Use {platform}-specific commands and best practices.",
            script_type = self.script_type.name(),
            platform = self.platform.name(),
            rule_id = self.rule_id.as_deref().unwrap_or("unknown"),
            title = self.title.as_deref().unwrap_or("unspecified"),
            level = self
                .level
                .map(|level| level.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        )
    }
}

/// What the collaborator is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GenerationPrompt {
    /// A complete step block for one rule's script.
    Script(ScriptPrompt),
    /// A narrative reading of raw benchmark text.
    Analysis { text: String },
}

impl GenerationPrompt {
    /// Render the full prompt text.
    pub fn render(&self) -> String {
        match self {
            GenerationPrompt::Script(prompt) => prompt.render(),
            GenerationPrompt::Analysis { text } => format!(
                "You are a compliance script generator analyzing security documentation.\n\
                 Analyze the following compliance document text and extract the exact \
                 information in this format:\n\
                 \n\
                 Rule_ID: (Extract the numerical ID)\n\
                 Rule_Level: (Extract L1 or L2)\n\
                 Rule_Title: (Extract the full title)\n\
                 Platform: (Specify Windows/Linux/Unix)\n\
                 Description: (Provide a clear, concise description)\n\
                 \n\
                 Audit_Steps:\n\
                 1. (List specific technical steps)\n\
                 2. (Include commands or registry keys)\n\
                 3. (Add validation checks)\n\
                 \n\
                 Remediation_Steps:\n\
                 1. (List specific technical steps)\n\
                 2. (Include exact commands)\n\
                 3. (Add verification steps)\n\
                 \n\
                 Text to analyze: {}",
                text
            ),
        }
    }
}

/// External text-generation collaborator.
///
/// Implementations return generated text or a transport-level error; the
/// caller applies the timeout budget and maps failures into script errors.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &GenerationPrompt) -> anyhow::Result<String>;
}
