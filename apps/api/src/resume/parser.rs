//! Resume parsing pipeline: prompt → completion → sanitize → normalize.

use tracing::{info, warn};

use crate::llm_client::{CompletionProfile, CompletionService, LlmError};
use crate::resume::models::ResumeRecord;
use crate::resume::normalizer::normalize_fields;
use crate::resume::prompts::build_resume_parse_prompt;
use crate::resume::sanitizer::sanitize_completion;

/// Parses extracted resume text into a normalized `ResumeRecord`.
///
/// Upstream completion failures are returned as errors. Malformed model
/// output is not an error: it degrades to the empty record.
pub async fn parse_resume_text(
    raw_text: &str,
    completion: &dyn CompletionService,
) -> Result<ResumeRecord, LlmError> {
    let prompt = build_resume_parse_prompt(raw_text);
    let output = completion
        .complete(&prompt, &CompletionProfile::EXTRACTION)
        .await?;

    let candidate = sanitize_completion(&output).unwrap_or_else(|e| {
        warn!("Falling back to empty resume record: {e}");
        e.into_fallback()
    });

    let record = normalize_fields(&candidate);
    info!(
        "Resume parsed: education={}, experience={}, internships={}, projects={}",
        record.education.len(),
        record.experience.len(),
        record.internships.len(),
        record.projects.len()
    );
    Ok(record)
}


#[cfg(test)]
mod tests {
    use super::test_support::StubCompletion;
    use super::*;
    use crate::resume::prompts::RESUME_TEXT_BEGIN;

    #[tokio::test]
    async fn test_end_to_end_partial_fields() {
        let input = "Jane Doe, Software Engineer. jane@x.com";
        let stub = StubCompletion::replying(
            r#"{"name":"Jane Doe","title":"Software Engineer","email":"jane@x.com"}"#,
        );

        let record = parse_resume_text(input, &stub).await.unwrap();

        let expected = ResumeRecord {
            name: "Jane Doe".to_string(),
            title: "Software Engineer".to_string(),
            email: "jane@x.com".to_string(),
            ..Default::default()
        };
        assert_eq!(record, expected);

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains(RESUME_TEXT_BEGIN));
        assert!(calls[0].0.contains(input));
        assert_eq!(calls[0].1, CompletionProfile::EXTRACTION);
    }

    #[tokio::test]
    async fn test_fenced_output_is_parsed() {
        let stub = StubCompletion::replying(
            "```json\n{\"name\": \"Jane Doe\", \"technicalSkills\": \"[\\\"Rust\\\"]\"}\n```",
        );
        let record = parse_resume_text("resume", &stub).await.unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.technical_skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_invalid_json_degrades_to_empty_record() {
        let stub = StubCompletion::replying("I'm sorry, I can't help with that.");
        let record = parse_resume_text("resume", &stub).await.unwrap();
        assert_eq!(record, ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let stub = StubCompletion::failing(503, "upstream unavailable");
        let err = parse_resume_text("resume", &stub).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }
}
