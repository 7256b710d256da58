/// Build the summary prompt sent to the model.
pub fn build_summary_prompt(text: &str) -> String {
    format!("Summarize this text in detail, preserving important information:\n\n{text}")
}
