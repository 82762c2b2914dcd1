//! Whitespace preservation inside inline tag pairs, e.g. `<pre>a\nb</pre>`.

/// Replace newlines inside `<tag>...</tag>` pairs with the `&#x000A;` entity,
/// so that the browser keeps them when the markup is re-indented.
///
/// A pair only matches when its content has no `<`, which means nested tags
/// are never matched as a whole. Text outside of the matched pairs is kept as is.
pub fn preserve_whitespace(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref INLINE_TAG: regex::Regex =
            regex::Regex::new(r"<[a-zA-Z]+>[^<]*</[a-zA-Z]+>").unwrap();
    }

    INLINE_TAG
        .replace_all(text, |caps: &regex::Captures| caps[0].replace('\n', "&#x000A;"))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserve_only_inside_tag_pair() {
        let result = preserve_whitespace("<p>a\nb</p>x\ny");
        assert_eq!(result, "<p>a&#x000A;b</p>x\ny");
    }

    #[test]
    fn test_preserve_no_match() {
        assert_eq!(preserve_whitespace("a\nb\nc"), "a\nb\nc");
        assert_eq!(preserve_whitespace(""), "");
    }

    #[test]
    fn test_preserve_multiple_pairs() {
        let input = "<pre>1\n2</pre>\n<textarea>3\n\n4</textarea>";
        let result = preserve_whitespace(input);
        assert_eq!(
            result,
            "<pre>1&#x000A;2</pre>\n<textarea>3&#x000A;&#x000A;4</textarea>"
        );
    }

    #[test]
    fn test_preserve_skips_nested_tags() {
        // The outer pair contains a `<`, so only the inner pair matches
        let input = "<div>\n<b>x\ny</b>\n</div>";
        let result = preserve_whitespace(input);
        assert_eq!(result, "<div>\n<b>x&#x000A;y</b>\n</div>");
    }

    #[test]
    fn test_preserve_tag_with_attributes_not_matched() {
        let input = "<p class=\"a\">x\ny</p>";
        assert_eq!(preserve_whitespace(input), input);
    }
}
