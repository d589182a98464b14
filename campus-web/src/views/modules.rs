//! Module page

use axum::response::Html;
use campus_common::db::{Module, ModuleStudent, Programme};

use super::{escape, page, path_link, table};

/// Module title, the programmes that teach it, and students on those programmes
pub fn single_module(
    module: &Module,
    programmes: &[Programme],
    students: &[ModuleStudent],
) -> Html<String> {
    let programme_rows = programmes.iter().map(|p| {
        vec![
            path_link("/single-programme", &p.id, &p.name),
            escape(&p.id),
        ]
    });

    let student_rows = students.iter().map(|s| {
        vec![
            path_link("/single-student", &s.id.to_string(), &s.name),
            escape(&s.programme),
        ]
    });

    let body = format!(
        "<h1>Module</h1>\n<p class=\"lead\">{}</p>\n\
         <h2>Programmes with this module</h2>\n{}\n\
         <h2>Students on this module</h2>\n{}",
        escape(&module.name),
        table(programme_rows),
        table(student_rows)
    );

    page(&module.name, &body)
}
