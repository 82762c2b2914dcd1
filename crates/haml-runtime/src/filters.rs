//! # Haml filter blocks
//!
//! A filter block is a `:name` line followed by an indented block of text.
//! The text of the block is not parsed as Haml, instead it is handed to the filter
//! which decides how it ends up in the output.
//!
//! ```text
//! %head
//!   :javascript
//!     alert('hi');
//! ```
//!
//! ## Supported filters
//!
//! - **`plain`**: Renders the lines as they are
//! - **`escaped`**: Renders the lines HTML-escaped
//! - **`preserve`**: Joins the lines with an encoded newline so the block is not re-indented
//! - **`cdata`**: Wraps the lines in a `<![CDATA[ ... ]]>` section
//! - **`css`**: Wraps the lines in a `<style>` tag
//! - **`javascript`**: Wraps the lines in a `<script>` tag
//!
//! The `indent` passed to a filter is the indent level of the block contents,
//! which is one level deeper than the `:name` line itself.

use crate::error::RuntimeError;
use crate::escape::escape_html;
use crate::format::{indent_text, trim_chars};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Filter {
    Plain,
    Escaped,
    Preserve,
    CData,
    Css,
    Javascript,
}

/// Look up a filter by the name used in the template, e.g. `javascript` for `:javascript`
pub fn filter(name: &str) -> Result<Filter, RuntimeError> {
    match name {
        "plain" => Ok(Filter::Plain),
        "escaped" => Ok(Filter::Escaped),
        "preserve" => Ok(Filter::Preserve),
        "cdata" => Ok(Filter::CData),
        "css" => Ok(Filter::Css),
        "javascript" => Ok(Filter::Javascript),
        _ => Err(RuntimeError::UnknownFilter(name.to_string())),
    }
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Plain => "plain",
            Filter::Escaped => "escaped",
            Filter::Preserve => "preserve",
            Filter::CData => "cdata",
            Filter::Css => "css",
            Filter::Javascript => "javascript",
        }
    }

    /// Render the contents of the filter block at the given indent level
    pub fn render(&self, lines: &[&str], indent: usize) -> String {
        match self {
            Filter::Plain => render_lines(lines, indent.saturating_sub(1), false),
            Filter::Escaped => render_lines(lines, indent.saturating_sub(1), true),
            Filter::Preserve => {
                // Block lines still carry the two spaces of the block indent
                let joined = lines
                    .iter()
                    .map(|line| trim_chars(line, 2))
                    .collect::<Vec<String>>()
                    .join("&#x000A; ");
                format!("{}{}\n", indent_text(indent), joined)
            }
            Filter::CData => {
                let mut out = format!("{}<![CDATA[\n", indent_text(indent));
                out.push_str(&render_lines(lines, indent, false));
                out.push_str(&format!("{}]]>\n", indent_text(indent)));
                out
            }
            Filter::Css => wrap_lines(
                lines,
                indent,
                ("<style type=\"text/css\">", "</style>"),
                ("/*<![CDATA[*/", "/*]]>*/"),
            ),
            Filter::Javascript => wrap_lines(
                lines,
                indent,
                ("<script type=\"text/javascript\">", "</script>"),
                ("//<![CDATA[", "//]]>"),
            ),
        }
    }
}

fn render_lines(lines: &[&str], indent: usize, escape: bool) -> String {
    let prefix = indent_text(indent);
    let mut out = String::new();
    for line in lines {
        let text = format!("{}{}\n", prefix, line);
        if escape {
            out.push_str(&escape_html(&text));
        } else {
            out.push_str(&text);
        }
    }
    out
}

fn wrap_lines(
    lines: &[&str],
    indent: usize,
    (open_tag, close_tag): (&str, &str),
    (open_cdata, close_cdata): (&str, &str),
) -> String {
    let outer = indent_text(indent);
    let inner = indent_text(indent + 1);
    let mut out = String::new();
    out.push_str(&format!("{}{}\n", outer, open_tag));
    out.push_str(&format!("{}{}\n", inner, open_cdata));
    out.push_str(&render_lines(lines, indent + 1, false));
    out.push_str(&format!("{}{}\n", inner, close_cdata));
    out.push_str(&format!("{}{}\n", outer, close_tag));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_filters() {
        for name in ["plain", "escaped", "preserve", "cdata", "css", "javascript"] {
            let result = filter(name).unwrap();
            assert_eq!(result.name(), name);
        }
    }

    #[test]
    fn test_lookup_unknown_filter() {
        let result = filter("markdown");
        assert_eq!(
            result,
            Err(RuntimeError::UnknownFilter("markdown".to_string()))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unknown filter: markdown"
        );
    }

    #[test]
    fn test_plain() {
        let result = Filter::Plain.render(&["line one", "line <two>"], 2);
        assert_eq!(result, "  line one\n  line <two>\n");
    }

    #[test]
    fn test_plain_top_level() {
        // Indent below one must not underflow
        let result = Filter::Plain.render(&["text"], 0);
        assert_eq!(result, "text\n");
    }

    #[test]
    fn test_escaped() {
        let result = Filter::Escaped.render(&["<b>bold</b> & 'quoted'"], 1);
        assert_eq!(result, "&lt;b&gt;bold&lt;/b&gt; &amp; &#39;quoted&#39;\n");
    }

    #[test]
    fn test_preserve() {
        let result = Filter::Preserve.render(&["  first", "  second", "    third"], 1);
        assert_eq!(result, "  first&#x000A; second&#x000A;   third\n");
    }

    #[test]
    fn test_cdata() {
        let result = Filter::CData.render(&["a < b"], 1);
        assert_eq!(result, "  <![CDATA[\n  a < b\n  ]]>\n");
    }

    #[test]
    fn test_css() {
        let result = Filter::Css.render(&["p { color: red; }"], 0);
        let expected = r#"<style type="text/css">
  /*<![CDATA[*/
  p { color: red; }
  /*]]>*/
</style>
"#;
        assert_eq!(result, expected);
    }

    #[test]
    fn test_javascript() {
        let result = Filter::Javascript.render(&["alert('hi');", "done();"], 1);
        let expected = r#"  <script type="text/javascript">
    //<![CDATA[
    alert('hi');
    done();
    //]]>
  </script>
"#;
        assert_eq!(result, expected);
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(Filter::Plain.render(&[], 1), "");
        assert_eq!(Filter::Preserve.render(&[], 1), "  \n");
    }
}
