//! Server-rendered views of the personal area

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;

use crate::error::AppResult;

/// Templates compiled into the binary, keyed by the name handlers render
const TEMPLATES: &[(&str, &str)] = &[
    ("subjects/list", include_str!("../templates/subjects/list.hbs")),
    ("subjects/view", include_str!("../templates/subjects/view.hbs")),
    ("subjects/form", include_str!("../templates/subjects/form.hbs")),
    ("subjects/delete", include_str!("../templates/subjects/delete.hbs")),
    ("topics/list", include_str!("../templates/topics/list.hbs")),
    ("topics/view", include_str!("../templates/topics/view.hbs")),
    ("topics/form", include_str!("../templates/topics/form.hbs")),
    ("topics/delete", include_str!("../templates/topics/delete.hbs")),
    ("questions/list", include_str!("../templates/questions/list.hbs")),
    ("questions/view", include_str!("../templates/questions/view.hbs")),
    ("questions/form", include_str!("../templates/questions/form.hbs")),
    ("questions/delete", include_str!("../templates/questions/delete.hbs")),
];

/// Template registry
#[derive(Clone)]
pub struct Views {
    handlebars: Handlebars<'static>,
}

impl Views {
    /// Compile every template, failing on the first syntax error
    pub fn new() -> AppResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_partial("layout", include_str!("../templates/layout.hbs"))?;

        for (name, source) in TEMPLATES {
            handlebars.register_template_string(name, source)?;
        }

        tracing::debug!(count = TEMPLATES.len(), "Templates registered");

        Ok(Self { handlebars })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<Html<String>> {
        Ok(Html(self.handlebars.render(name, data)?))
    }
}
