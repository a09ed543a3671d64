//! Tera page renderer. Templates are baked into the binary via `include_str!`.

use serde::Serialize;
use tera::{Context, Tera};

use crate::types::error::AppError;

const TPLS: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html.tera")),
    ("index.html", include_str!("../templates/index.html.tera")),
    ("courses.html", include_str!("../templates/courses.html.tera")),
    ("add.html", include_str!("../templates/add.html.tera")),
    ("edit.html", include_str!("../templates/edit.html.tera")),
    ("add_course.html", include_str!("../templates/add_course.html.tera")),
    ("add_teacher.html", include_str!("../templates/add_teacher.html.tera")),
];

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        // `.html` names keep Tera's autoescaping on.
        tera.add_raw_templates(TPLS.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, template: &str, page: &T) -> Result<String, AppError> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(template, &context)?)
    }
}
