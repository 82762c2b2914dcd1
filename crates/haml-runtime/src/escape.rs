//! HTML entity escaping for text written into template output.

/// Escape the five characters that are reserved in HTML.
///
/// `&` goes first so that the entities introduced by the later replacements
/// are not escaped a second time. The apostrophe uses the numeric `&#39;`
/// entity because `&apos;` is not understood by older browsers.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
