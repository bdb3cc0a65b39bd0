//! Template engine.
//!
//! All page templates are embedded at compile time and loaded into one
//! minijinja environment at startup.

use std::sync::Arc;

use alcove_core::AppError;
use minijinja::{Environment, Value};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("templates/base.html")),
    ("login.html", include_str!("templates/login.html")),
    ("index.html", include_str!("templates/index.html")),
    ("profile.html", include_str!("templates/profile.html")),
    ("sites.html", include_str!("templates/sites.html")),
    ("tags.html", include_str!("templates/tags.html")),
    ("people.html", include_str!("templates/people.html")),
    ("groups.html", include_str!("templates/groups.html")),
    ("search.html", include_str!("templates/search.html")),
    ("viewer.html", include_str!("templates/viewer.html")),
    ("upload.html", include_str!("templates/upload.html")),
];

#[derive(Clone)]
pub struct TemplateEngine {
    env: Arc<Environment<'static>>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| AppError::Template(format!("Failed to load {}: {}", name, e)))?;
        }
        Ok(Self { env: Arc::new(env) })
    }

    pub fn render(&self, name: &str, context: Value) -> Result<String, AppError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| AppError::Template(format!("Unknown template {}: {}", name, e)))?;
        template
            .render(context)
            .map_err(|e| AppError::Template(format!("Failed to render {}: {}", name, e)))
    }
}
