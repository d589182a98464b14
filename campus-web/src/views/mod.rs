//! Server-side HTML views
//!
//! Every page is rendered into the shared layout in `layout.html`. Text that
//! came from the database or the request must pass through [`escape`].

pub mod calendar;
pub mod modules;
pub mod programmes;
pub mod students;

use axum::http::StatusCode;
use axum::response::Html;

const LAYOUT_HTML: &str = include_str!("layout.html");
const TITLE_MARKER: &str = "{{TITLE}}";
const BODY_MARKER: &str = "{{BODY}}";

/// Escape text for use in HTML content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap an already-rendered body fragment in the layout
///
/// `title` is escaped here; `body` is inserted verbatim.
pub fn page(title: &str, body: &str) -> Html<String> {
    // Split at the body marker so neither value is ever re-scanned for markers
    let (head, tail) = LAYOUT_HTML
        .split_once(BODY_MARKER)
        .unwrap_or((LAYOUT_HTML, ""));
    let head = head.replace(TITLE_MARKER, &escape(title));

    let mut html = String::with_capacity(head.len() + body.len() + tail.len());
    html.push_str(&head);
    html.push_str(body);
    html.push_str(tail);
    Html(html)
}

/// Error page shown for 4xx/5xx responses from HTML routes
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{} {}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to students</a></p>",
        status.as_u16(),
        escape(reason),
        escape(message)
    );
    page(reason, &body)
}

/// Render rows as a bordered table; each row is a list of pre-escaped cells
pub(crate) fn table<I>(rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = String::from("<table class=\"table\" border=\"1px\">\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&cell);
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>");
    out
}

/// Anchor with escaped href and text
pub(crate) fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape(href), escape(text))
}

/// Anchor to `{prefix}/{key}` with `key` percent-encoded as one path segment
///
/// Keys are TEXT columns and may contain `/`, `?`, `#` or `%`.
pub(crate) fn path_link(prefix: &str, key: &str, text: &str) -> String {
    link(&format!("{}/{}", prefix, urlencoding::encode(key)), text)
}
