use axum::{extract::Path, response::Html};

use crate::content::{self, Project};
use crate::error::AppError;
use crate::template;

#[derive(askama::Template)]
#[template(path = "project.html")]
pub struct ProjectTemplate {
    pub project: &'static Project,
}

/// GET /projects/{id}
pub async fn detail(Path(id): Path<String>) -> Result<Html<String>, AppError> {
    let project = content::find_project(&id).ok_or(AppError::NotFound)?;

    template::render(ProjectTemplate { project })
}
