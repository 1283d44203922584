// Summary improvement ("AI improve"): rewrites a free-text resume summary.
// Uses the REWRITE completion profile; output is returned as plain text.

pub mod handlers;
pub mod prompts;

use tracing::debug;

use crate::llm_client::{CompletionProfile, CompletionService, LlmError};
use crate::summary::prompts::build_summary_improve_prompt;

/// Asks the completion service for an improved version of `text`.
pub async fn improve_summary(
    text: &str,
    summary_type: Option<&str>,
    completion: &dyn CompletionService,
) -> Result<String, LlmError> {
    let prompt = build_summary_improve_prompt(text, summary_type);
    let improved = completion
        .complete(&prompt, &CompletionProfile::REWRITE)
        .await?;

    let improved = improved.trim();
    if improved.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    debug!("Summary improved: {} -> {} chars", text.len(), improved.len());
    Ok(improved.to_string())
}
