// Resume parsing core: turns extracted resume text into a normalized ResumeRecord.
// Pipeline: prompts (build) → llm_client (complete) → sanitizer → normalizer.
// Only parser.rs talks to the completion service.

pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod prompts;
pub mod sanitizer;

pub use models::ResumeRecord;
pub use parser::parse_resume_text;
