/// True when the text is empty or only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
