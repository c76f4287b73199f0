//! Prompt construction for covenant field extraction

use termsheet_domain::FieldSpec;

/// Builds the system/user prompt pair for one chunk.
pub struct PromptBuilder<'a> {
    chunk: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder for one chunk of document text.
    pub fn new(chunk: &'a str) -> Self {
        Self { chunk }
    }

    /// The system prompt: declares the JSON-only contract over the field
    /// list. Fields absent from the chunk must be omitted, never filled
    /// with placeholders.
    pub fn system(&self) -> String {
        format!(
            "You are a data extraction AI. You must return only valid JSON containing \
             any of the following fields if found: {}. If a field is not found, omit it. \
             Do not include any extra keys, text, or commentary. Output only valid JSON.",
            FieldSpec::prompt_list()
        )
    }

    /// The user prompt: the chunk text plus a restatement of the field list.
    pub fn user(&self) -> String {
        format!(
            "Text to parse:\n{}\n\nFields to extract: {}\n\n\
             Return only valid JSON with only the fields you find.",
            self.chunk,
            FieldSpec::prompt_list()
        )
    }
}
