//! Comment removal for HTML and JavaScript sources.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("html comment pattern"));

/// Remove every `<!-- … -->` pair, non-greedily, across lines.
pub fn strip_html_comments(text: &str) -> Cow<'_, str> {
    HTML_COMMENT.replace_all(text, "")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsState {
    Code,
    SingleQuote,
    DoubleQuote,
    Template,
    LineComment,
    BlockComment,
}

/// Remove `//` line comments and `/* */` block comments from JavaScript.
///
/// Single-, double-, and backtick-quoted string literals are tracked with
/// backslash escapes, so comment-like sequences inside them survive. Regex
/// literals are not tracked; `//` inside one is treated as a comment start,
/// matching the tool this replaces. The newline ending a line comment is
/// kept; block comment delimiters and their content vanish entirely.
pub fn strip_js_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = JsState::Code;
    let mut escaped = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            JsState::LineComment => {
                if c == '\n' {
                    state = JsState::Code;
                    out.push(c);
                }
            }
            JsState::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = JsState::Code;
                }
            }
            JsState::SingleQuote | JsState::DoubleQuote | JsState::Template => {
                out.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else {
                    let closing = match state {
                        JsState::SingleQuote => '\'',
                        JsState::DoubleQuote => '"',
                        _ => '`',
                    };
                    if c == closing {
                        state = JsState::Code;
                    }
                }
            }
            JsState::Code => match c {
                '\'' => {
                    state = JsState::SingleQuote;
                    escaped = false;
                    out.push(c);
                }
                '"' => {
                    state = JsState::DoubleQuote;
                    escaped = false;
                    out.push(c);
                }
                '`' => {
                    state = JsState::Template;
                    escaped = false;
                    out.push(c);
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = JsState::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = JsState::BlockComment;
                }
                _ => out.push(c),
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn html_comments_vanish_across_lines() {
        let input = "<div>\n<!-- first\n   line -->\n<p>kept</p><!--second-->\n</div>";
        assert_eq!(strip_html_comments(input), "<div>\n\n<p>kept</p>\n</div>");
    }

    #[test]
    fn html_without_comments_is_borrowed_unchanged() {
        let input = "<p>nothing here</p>";
        assert!(matches!(strip_html_comments(input), Cow::Borrowed(_)));
    }

    #[test]
    fn line_comment_removed_but_url_in_string_kept() {
        let input = "const url = \"http://example.com\"; // real comment\n";
        assert_eq!(
            strip_js_comments(input),
            "const url = \"http://example.com\"; \n"
        );
    }

    #[test]
    fn block_comments_vanish_including_delimiters() {
        let input = "let a = 1; /* gone\n   entirely */ let b = 2;";
        assert_eq!(strip_js_comments(input), "let a = 1;  let b = 2;");
    }

    #[test]
    fn comment_markers_inside_strings_survive() {
        let input = "const s = '/* not a comment */';\nconst t = `// nope`;";
        assert_eq!(strip_js_comments(input), input);
    }

    #[test]
    fn escaped_quotes_do_not_end_strings() {
        let input = r#"const s = 'it\'s // still a string';"#;
        assert_eq!(strip_js_comments(input), input);
    }

    #[test]
    fn division_is_not_a_comment() {
        let input = "const half = total / 2 / factor;";
        assert_eq!(strip_js_comments(input), input);
    }

    #[test]
    fn trailing_slash_at_eof_is_kept() {
        assert_eq!(strip_js_comments("a /"), "a /");
    }

    #[test]
    fn line_comment_at_eof_without_newline() {
        assert_eq!(strip_js_comments("let x = 1; // tail"), "let x = 1; ");
    }

    #[test]
    fn stripping_is_idempotent() {
        let input = "const url = \"http://example.com\"; // comment\n/* block */ done();";
        let once = strip_js_comments(input);
        assert_eq!(strip_js_comments(&once), once);
    }

    #[test]
    fn multibyte_content_passes_through() {
        let input = "const name = '甘草'; // 註解\n";
        assert_eq!(strip_js_comments(input), "const name = '甘草'; \n");
    }
}
