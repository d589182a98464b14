//! Calendar page

use axum::response::Html;

use super::{escape, page};

/// Already-formatted dates plus the form that posts a new one
pub fn calendar(dates: &[String]) -> Html<String> {
    let list = if dates.is_empty() {
        "<p>No dates yet</p>".to_string()
    } else {
        let items: String = dates
            .iter()
            .map(|d| format!("<li>{}</li>\n", escape(d)))
            .collect();
        format!("<ul>\n{}</ul>", items)
    };

    let body = format!(
        r#"<h1>Calendar</h1>
{list}
<h2>Add a date</h2>
<form method="post" action="/set-date">
<input class="form-control mb-2" type="date" name="date" required>
<button class="btn btn-primary" type="submit">Add date</button>
</form>"#
    );

    page("Calendar", &body)
}
