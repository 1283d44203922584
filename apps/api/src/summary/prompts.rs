// Summary improvement prompt templates.

use crate::llm_client::prompts::PLAIN_TEXT_ONLY_INSTRUCTION;

/// Tone context used when the caller does not name one.
pub const DEFAULT_SUMMARY_TYPE: &str = "general professional";

const SUMMARY_IMPROVE_PROMPT: &str = r#"Analyze the following existing summary. Your task is to generate a new, enhanced, and perfect summary that is clearer, more comprehensive, and structurally superior.

Goal: Create a highly polished, professional, and detailed summary that retains all essential information while significantly improving clarity, flow, and impact.

Specific Requirements for the New Summary:
1. Clarity and Conciseness: Rephrase any ambiguous or convoluted sentences.
2. Completeness and Detail: Make points explicit and detailed.
3. Structure and Flow: Organize the summary logically.
4. Tone: Maintain a professional, authoritative, and objective tone.
5. Contextual Tone: Tailor the tone and emphasis for a {summary_type} context.
6. CRITICAL OUTPUT RULE: ONLY return the final, improved summary text. {plain_text_only} Start directly with the summary content.

Original Summary to Enhance:
---
{text}
---
"#;

/// Builds the rewrite prompt. A blank `summary_type` falls back to
/// `DEFAULT_SUMMARY_TYPE`.
pub fn build_summary_improve_prompt(text: &str, summary_type: Option<&str>) -> String {
    let summary_type = summary_type
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SUMMARY_TYPE);

    SUMMARY_IMPROVE_PROMPT
        .replace("{plain_text_only}", PLAIN_TEXT_ONLY_INSTRUCTION)
        .replace("{summary_type}", summary_type)
        .replace("{text}", text)
}
