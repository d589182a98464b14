//! Programme pages

use axum::response::Html;
use campus_common::db::{Module, Programme};

use super::{escape, page, path_link, table};

/// Programme list, each name linked relative to `/programmes`
pub fn programmes(programmes: &[Programme]) -> Html<String> {
    let rows = programmes.iter().map(|p| {
        vec![
            escape(&p.id),
            path_link("./single-programme", &p.id, &p.name),
        ]
    });

    let body = format!("<h1>Programmes</h1>\n{}", table(rows));
    page("Programmes", &body)
}

/// Programme title followed by its modules
pub fn single_programme(programme: &Programme, modules: &[Module]) -> Html<String> {
    let rows = modules.iter().map(|m| {
        vec![
            path_link("/single-module", &m.code, &m.code),
            escape(&m.name),
        ]
    });

    let body = format!(
        "<h1>Programme</h1>\n<p class=\"lead\">{}</p>\n<h2>Modules</h2>\n{}",
        escape(&programme.name),
        table(rows)
    );

    page(&programme.name, &body)
}
