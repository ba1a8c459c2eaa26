use anyhow::{Context as _, Result};
use axum::response::Html;
use tera::{Context, Tera};

use super::app_error::AppResult;

pub(crate) fn build_templates(dir: &str) -> Result<Tera> {
    let glob = format!("{dir}/**/*.html");
    let templates = Tera::new(&glob).with_context(|| format!("failed to load templates from {glob}"))?;
    Ok(templates)
}

pub(crate) fn render(templates: &Tera, name: &str, context: &Context) -> AppResult<Html<String>> {
    let body = templates.render(name, context)?;
    Ok(Html(body))
}
