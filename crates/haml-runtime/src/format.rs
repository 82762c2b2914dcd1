/// Returns the whitespace for the given indent level, two spaces per level.
pub fn indent_text(level: usize) -> String {
    "  ".repeat(level)
}

/// Generates an error message that includes the template source line where the
/// error happened, with a caret pointing at the offending character:
///
/// ```text
/// Error evaluating attribute hash - boom at line 3 and character 5:
/// %p{ foo }
/// ----^
/// ```
pub fn template_error(line: usize, character: usize, current_line: &str, message: &str) -> String {
    let caret_offset = character.saturating_sub(1);
    format!(
        "{} at line {} and character {}:\n{}\n{}^",
        message,
        line,
        character,
        current_line,
        "-".repeat(caret_offset)
    )
}

/// Drops the first `count` characters of `text`.
pub fn trim_chars(text: &str, count: usize) -> String {
    text.chars().skip(count).collect()
}
