//! End-to-end pipeline tests
//!
//! Drive the full document-to-script flow: extract rules from benchmark
//! text, generate audit and remediation scripts for them, and validate the
//! results. No external services are involved; the AI-assisted path runs
//! against in-process stub collaborators.
//!
//! Run with: cargo test -p script-engine --test pipeline

use async_trait::async_trait;
use benchmark_engine::analyze;
use policy_types::{Platform, RuleSource, ScriptRequest, ScriptType, Severity};
use script_engine::{
    generate_with_model, validate_script, GenerationPrompt, ScriptEngine, ScriptError,
    TextGenerator,
};

/// Excerpt in the shape of a CIS-style benchmark: two numbered rules, each
/// followed by its remediation section.
const BENCHMARK_EXCERPT: &str = "\
1.1.1 (L1) Ensure 'Minimum password length' is set to '14 or more characters'
Description: Longer passwords resist brute-force attacks.
Remediation:
Set the registry value MinimumPasswordLength to 14.
Restart the Netlogon service afterwards.
2.2.2 (L2) Ensure 'Audit Logon events' is set to 'Success and Failure'
Description: Logon auditing feeds the SIEM.
Remediation:
Run auditpol to enable logon auditing.
";

// ============================================================================
// Deterministic flow
// ============================================================================

#[test]
fn test_extracted_rules_generate_valid_windows_scripts() {
    let analysis = analyze(BENCHMARK_EXCERPT, Some(Platform::Windows));
    assert_eq!(analysis.summary.total_rules, 2);
    assert_eq!(analysis.document.rules.len(), 2);
    assert_eq!(analysis.document.remediation_blocks.len(), 2);

    // "password" outranks everything else in the first heading; the second
    // heading's "audit"/"logon" only reaches the high tier.
    assert_eq!(analysis.document.rules[0].severity, Severity::Critical);
    assert_eq!(analysis.document.rules[1].severity, Severity::High);

    // The excerpt is well-formed, so rules and remediation blocks line up
    // here. That pairing is a property of this input, not of extraction.
    let engine = ScriptEngine::new();
    for (rule, block) in analysis
        .document
        .rules
        .iter()
        .zip(&analysis.document.remediation_blocks)
    {
        let request = ScriptRequest {
            rule: RuleSource::Parsed(rule.clone()),
            script_type: ScriptType::Remediation,
            platform: Platform::Windows,
            use_ai: false,
            instructions: Some(block.clone()),
        };
        let script = engine.generate(&request).expect("deterministic generation");
        assert_eq!(script.rule_id, rule.display_id());
        assert!(script.content.contains(&format!("# Rule: {}", rule.display_id())));

        let report = validate_script(&script.content, Platform::Windows);
        assert!(report.is_valid);
        assert_eq!(report.security_score, 100);
    }
}

#[test]
fn test_registry_instruction_lands_as_try_catch_step() {
    let analysis = analyze(BENCHMARK_EXCERPT, Some(Platform::Windows));
    let engine = ScriptEngine::new();

    // Remediation blocks are whitespace-collapsed to a single line, so the
    // whole first block becomes one registry-classified step.
    let request = ScriptRequest {
        rule: RuleSource::Parsed(analysis.document.rules[0].clone()),
        script_type: ScriptType::Remediation,
        platform: Platform::Windows,
        use_ai: false,
        instructions: Some(analysis.document.remediation_blocks[0].clone()),
    };
    let script = engine.generate(&request).expect("generation");
    assert!(script.content.contains("Write-Log 'Checking registry value...'"));
    assert!(script
        .content
        .contains("# Set the registry value MinimumPasswordLength to 14. Restart the Netlogon service afterwards."));
}

#[test]
fn test_shell_remediation_guards_commands_end_to_end() {
    let engine = ScriptEngine::new();
    let request = ScriptRequest {
        rule: RuleSource::Raw("6.1.2 (L1) Ensure 'permissions on /etc/passwd' are configured".to_string()),
        script_type: ScriptType::Remediation,
        platform: Platform::Unix,
        use_ai: false,
        instructions: Some("chown root:root /etc/passwd\nchmod 644 /etc/passwd".to_string()),
    };
    let script = engine.generate(&request).expect("generation");
    assert_eq!(script.platform, Platform::Unix);
    assert!(script.content.starts_with("#!/bin/bash"));
    assert!(script.content.contains("if ! { chown root:root /etc/passwd }; then"));
    assert!(script.content.contains("if ! { chmod 644 /etc/passwd }; then"));

    let report = validate_script(&script.content, Platform::Unix);
    assert!(report.is_valid);
    assert!(report.warnings.is_empty());
    assert_eq!(report.security_score, 100);
}

#[test]
fn test_risky_remediation_is_scored_down_but_still_generated() {
    let engine = ScriptEngine::new();
    let request = ScriptRequest {
        rule: RuleSource::Raw("9.9.9 (L2) Ensure 'world-writable files' are removed".to_string()),
        script_type: ScriptType::Remediation,
        platform: Platform::Linux,
        use_ai: false,
        instructions: Some("chmod 777 /tmp/workdir\nsudo rm /tmp/workdir/stale.lock".to_string()),
    };
    let script = engine.generate(&request).expect("generation");
    let report = validate_script(&script.content, Platform::Linux);
    assert!(report.is_valid, "risky content is advisory, not fatal");
    assert_eq!(report.security_score, 60);
}

// ============================================================================
// AI-assisted flow
// ============================================================================

/// Stub collaborator that records nothing and echoes a canned step block.
struct CannedModel;

#[async_trait]
impl TextGenerator for CannedModel {
    async fn generate(&self, prompt: &GenerationPrompt) -> anyhow::Result<String> {
        // The prompt must carry the rule context downstream services need.
        let text = prompt.render();
        anyhow::ensure!(text.contains("Rule Details:"), "prompt missing rule context");
        Ok("log 'Executing: model-written hardening step'".to_string())
    }
}

#[tokio::test]
async fn test_ai_flow_places_model_steps_into_the_template() {
    let engine = ScriptEngine::new();
    let analysis = analyze(BENCHMARK_EXCERPT, Some(Platform::Linux));
    let request = ScriptRequest {
        rule: RuleSource::Parsed(analysis.document.rules[0].clone()),
        script_type: ScriptType::Audit,
        platform: Platform::Linux,
        use_ai: true,
        instructions: None,
    };

    let script = generate_with_model(&engine, &CannedModel, &request, 1_000)
        .await
        .expect("AI-assisted generation");
    assert!(script.content.contains("log 'Executing: model-written hardening step'"));
    assert!(script.content.contains("# Rule: 1.1.1"));

    let report = validate_script(&script.content, Platform::Linux);
    assert!(report.is_valid);
}

#[tokio::test]
async fn test_ai_flow_timeout_is_reported_with_the_budget() {
    struct StalledModel;

    #[async_trait]
    impl TextGenerator for StalledModel {
        async fn generate(&self, _prompt: &GenerationPrompt) -> anyhow::Result<String> {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            Ok(String::new())
        }
    }

    let engine = ScriptEngine::new();
    let request = ScriptRequest {
        rule: RuleSource::Raw("1.1.1 (L1) Ensure 'x' is set".to_string()),
        script_type: ScriptType::Audit,
        platform: Platform::Linux,
        use_ai: true,
        instructions: None,
    };

    match generate_with_model(&engine, &StalledModel, &request, 25).await {
        Err(ScriptError::GenerationTimeout(25)) => {}
        other => panic!(
            "expected GenerationTimeout(25), got {:?}",
            other.map(|script| script.rule_id)
        ),
    }
}
