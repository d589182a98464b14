//! Student pages

use axum::response::Html;
use campus_common::db::Student;

use super::{escape, page, path_link, table};
use crate::db::students::StudentRecord;

/// Landing page: pick a student from a drop-down
pub fn index(students: &[Student]) -> Html<String> {
    let options: String = students
        .iter()
        .map(|s| {
            format!(
                "<option value=\"{}\">{}</option>\n",
                s.id,
                escape(&s.name)
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Students</h1>
<form method="post" action="/student-select">
<select class="form-select mb-2" name="studentParam">
{options}</select>
<button class="btn btn-primary" type="submit">View student</button>
</form>"#
    );

    page("Students", &body)
}

/// Table of every student linked to their page
pub fn all_students(students: &[Student]) -> Html<String> {
    let rows = students.iter().map(|s| {
        vec![
            s.id.to_string(),
            path_link("/single-student", &s.id.to_string(), &s.name),
        ]
    });

    let body = format!("<h1>All students</h1>\n{}", table(rows));
    page("All students", &body)
}

pub fn student(record: &StudentRecord) -> Html<String> {
    let programme = match &record.programme {
        Some(p) => format!(
            "<p>Programme: {}</p>",
            path_link("/single-programme", &p.id, &p.name)
        ),
        None => "<p>Not enrolled on a programme</p>".to_string(),
    };

    let modules = if record.modules.is_empty() {
        "<p>No modules</p>".to_string()
    } else {
        let items: String = record
            .modules
            .iter()
            .map(|m| {
                format!(
                    "<li>{} {}</li>\n",
                    path_link("/single-module", &m.code, &m.code),
                    escape(&m.name)
                )
            })
            .collect();
        format!("<ul>\n{}</ul>", items)
    };

    let body = format!(
        "<h1>{}</h1>\n<p>Student ID: {}</p>\n{}\n<h2>Modules</h2>\n{}",
        escape(&record.name),
        record.id,
        programme,
        modules
    );

    page(&record.name, &body)
}
