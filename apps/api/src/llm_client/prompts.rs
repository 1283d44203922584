// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction that forbids any text around a JSON answer.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Return ONLY the JSON object. Do not include any text, explanations, \
or markdown before or after the JSON.";

/// Instruction that forbids markdown decoration in a plain-text answer.
pub const PLAIN_TEXT_ONLY_INSTRUCTION: &str = "\
Do not include any formatting symbols such as *, **, _, #, or markdown. \
Only plain text.";
