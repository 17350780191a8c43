//! Post body rendering
//!
//! Article bodies arrive as server-rendered HTML. The terminal shows them as
//! plain text: block-level boundaries become line breaks, every tag is
//! stripped and entities are decoded.

use std::collections::HashSet;

/// Markers that end a line of visible text
const LINE_BREAKS: &[&str] = &[
    "<br>", "<br/>", "<br />", "<BR>", "</p>", "</P>", "</div>", "</li>", "</h1>", "</h2>",
    "</h3>", "</h4>", "</h5>", "</h6>", "</blockquote>", "</pre>", "</tr>",
];

/// Convert an HTML fragment to display text
///
/// # Examples
/// ```
/// use chump::logic::html::to_plain_text;
///
/// assert_eq!(to_plain_text("<p>hello <b>world</b></p>"), "hello world");
/// assert_eq!(to_plain_text("a<br>b"), "a\nb");
/// assert_eq!(to_plain_text("fish &amp; chips"), "fish & chips");
/// ```
pub fn to_plain_text(html: &str) -> String {
    let mut marked = html.to_string();
    for marker in LINE_BREAKS {
        marked = marked.replace(marker, "\n");
    }

    let dropped: HashSet<&str> = ["script", "style"].into_iter().collect();
    let stripped = ammonia::Builder::empty()
        .clean_content_tags(dropped)
        .clean(&marked)
        .to_string();
    let decoded = html_escape::decode_html_entities(&stripped);

    collapse_blank_lines(&decoded)
}

/// Trim every line and keep at most one empty line between paragraphs
fn collapse_blank_lines(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() && out.last().map_or(true, |prev| prev.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// First non-empty line of a body, for card summaries
pub fn summary_line(html: &str) -> String {
    to_plain_text(html)
        .lines()
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}
