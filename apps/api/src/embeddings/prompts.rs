// Prompt constants for the Embeddings module.

/// Asks the model for a numeric rendering of a text. Replace `{text}` before sending.
/// The response is untrusted: only number-like substrings are read from it.
pub const EMBEDDING_PROMPT_TEMPLATE: &str = r#"Convert this text into a numerical representation for similarity matching:
"{text}"

Return a JSON array of numbers representing the text embedding."#;

pub fn embedding_prompt(text: &str) -> String {
    EMBEDDING_PROMPT_TEMPLATE.replace("{text}", text)
}
