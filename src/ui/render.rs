//! HTML rendering over templates compiled into the binary.

use rust_embed::Embed;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{AppError, AppResult};

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

pub const PRODUCTS_TEMPLATE: &str = "products.html";
pub const ADD_TEMPLATE: &str = "add.html";
pub const STATS_TEMPLATE: &str = "stats.html";

/// Tera instance loaded with every embedded template.
///
/// Template names end in `.html`, so autoescaping applies to all of them.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> AppResult<Self> {
        let mut sources = Vec::new();
        for file in EmbeddedTemplates::iter() {
            let filename = file.as_ref();
            let Some(content) = EmbeddedTemplates::get(filename) else {
                continue;
            };
            let source = std::str::from_utf8(&content.data)
                .map_err(|e| AppError::Render {
                    source: anyhow::anyhow!("template {} is not UTF-8: {}", filename, e),
                })?
                .to_string();
            sources.push((filename.to_string(), source));
        }

        // Added in one batch so `{% extends %}` resolves regardless of order.
        let mut tera = Tera::default();
        tera.add_raw_templates(sources)?;

        tracing::debug!(templates = tera.get_template_names().count(), "Templates loaded");
        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, template: &str, page: &T) -> AppResult<String> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(template, &context)?)
    }
}
