//! Response Rendering
//!
//! Turns a canned response body into an HTML unordered list.

use regex::Regex;
use std::sync::LazyLock;

/// Reply sent when no topic matches
pub const FALLBACK_RESPONSE: &str =
    "I did not understand you. Can you please ask your question again?";

/// Markdown-style link: `[label](url)`
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

/// Render a response body as `<ul><li>..</li>..</ul>`.
///
/// Blank lines are dropped and every link on a line becomes an anchor tag.
pub fn render_html(response: &str) -> String {
    let mut html = String::from("<ul>");
    for line in response.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        html.push_str("<li>");
        html.push_str(&render_links(line));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// Replace every `[label](url)` in `line` with `<a href="url">label</a>`
pub fn render_links(line: &str) -> String {
    LINK_PATTERN
        .replace_all(line, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

/// Replace every link with its bare label
pub(crate) fn strip_link_targets(text: &str) -> String {
    LINK_PATTERN.replace_all(text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(render_html("Hello!"), "<ul><li>Hello!</li></ul>");
    }

    #[test]
    fn test_link_substitution() {
        let html = render_html("Go [Label](http://x) now");
        assert_eq!(html, r#"<ul><li>Go <a href="http://x">Label</a> now</li></ul>"#);
        assert!(!html.contains("]("));
        assert!(!html.contains('['));
    }

    #[test]
    fn test_all_links_on_line_replaced() {
        let line = render_links("[A](http://a) and [B](http://b)");
        assert_eq!(
            line,
            r#"<a href="http://a">A</a> and <a href="http://b">B</a>"#
        );
    }

    #[test]
    fn test_blank_lines_dropped() {
        let html = render_html("a\n\nb");
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_whitespace_only_lines_dropped() {
        let html = render_html("a\n   \n\t\nb\n");
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_line_content_not_trimmed() {
        assert_eq!(render_html("- item"), "<ul><li>- item</li></ul>");
    }

    #[test]
    fn test_url_with_query_string() {
        let html = render_links("[Chat](https://x.com/chat?type=student&id=A5)");
        assert_eq!(html, r#"<a href="https://x.com/chat?type=student&id=A5">Chat</a>"#);
    }

    #[test]
    fn test_unclosed_link_left_alone() {
        assert_eq!(render_links("see [this](oops"), "see [this](oops");
    }

    #[test]
    fn test_strip_link_targets() {
        assert_eq!(strip_link_targets("see [docs](http://d) here"), "see docs here");
    }
}
