// All prompt constants for the Import module.
// Reuses the shared plain-text convention from llm_client::prompts.

use crate::llm_client::prompts::PLAIN_TEXT_CONVENTION;

/// Instruction sent alongside an uploaded document.
pub const FILE_TRANSCRIBE_INSTRUCTION: &str =
    "Transcribe the attached resume document into plain text, preserving its structure.";

/// URL import prompt template. Replace `{url}` before sending.
pub const URL_EXTRACT_PROMPT_TEMPLATE: &str = "Retrieve the resume or professional profile \
    published at the following URL and reproduce its text content.\n\nURL: {url}";

pub fn build_file_prompt() -> String {
    format!("{FILE_TRANSCRIBE_INSTRUCTION}\n\n{PLAIN_TEXT_CONVENTION}")
}

pub fn build_url_prompt(url: &str) -> String {
    format!(
        "{}\n\n{PLAIN_TEXT_CONVENTION}",
        URL_EXTRACT_PROMPT_TEMPLATE.replace("{url}", url)
    )
}
