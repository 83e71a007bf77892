//! Prompt assembly for assistant requests

/// Build the single prompt string sent to the model: the section identifier,
/// the full reference text, and the question, verbatim and in that order.
/// Nothing is truncated, capped, or sanitized; an empty reference or an
/// empty question is passed through as-is.
pub fn build_prompt(section_id: &str, reference_text: &str, question: &str) -> String {
    format!(
        "You are helping complete the \"{section_id}\" section of a healthcare \
         app intake form.\n\nReference document:\n{reference_text}\n\nQuestion: {question}"
    )
}
