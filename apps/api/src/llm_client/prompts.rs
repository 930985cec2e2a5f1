// Shared prompt fragments.
// Each feature that needs model calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Plain-text layout every transcription must follow. The line classifier
/// relies on it: ALL-CAPS lines render as headers, dash lines as bullets.
pub const PLAIN_TEXT_CONVENTION: &str = "\
    Format the output as plain text only, using these conventions: \
    - Write section headers (e.g. EXPERIENCE, EDUCATION, SKILLS) in ALL CAPS on their own line. \
    - Start every achievement or responsibility bullet with \"- \" on its own line. \
    - Preserve the original order and structure of the document. \
    - Do NOT use markdown syntax such as #, ** or tables. \
    - Do NOT add commentary before or after the transcription.";
