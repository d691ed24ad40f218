//! Axum route handlers for the Templates and Render APIs.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::TemplateCatalog;
use crate::content::ingest_content;
use crate::errors::AppError;
use crate::models::resume::RawResumeContent;
use crate::models::template::{ColorVariant, TemplateDescriptor};
use crate::render::layout::{resolve_layout, LayoutMode};
use crate::render::markup::to_html;
use crate::render::{render, Document, RenderError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub template_id: String,
    /// Palette entry to use. Absent or negative means the first one.
    #[serde(default)]
    pub variant_index: Option<i64>,
    pub content: RawResumeContent,
}

impl RenderRequest {
    fn variant(&self) -> usize {
        self.variant_index
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    pub layout: LayoutMode,
    pub palette: Vec<ColorVariant>,
}

impl From<&TemplateDescriptor> for TemplateSummary {
    fn from(template: &TemplateDescriptor) -> Self {
        TemplateSummary {
            id: template.id.clone(),
            name: template.display_name().to_string(),
            layout: resolve_layout(template),
            palette: template.palette().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: state.catalog.list().map(TemplateSummary::from).collect(),
    })
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateDescriptor>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))
}

/// POST /api/v1/render
///
/// Renders resume content with a catalog template and returns the block tree.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<Document>, AppError> {
    let document = render_blocking(state.catalog.clone(), request, |doc| doc).await?;
    Ok(Json(document))
}

/// POST /api/v1/render/preview
///
/// Same input as `/render`; returns a standalone HTML page.
pub async fn handle_render_preview(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let html = render_blocking(state.catalog.clone(), request, |doc| {
        to_html(&doc).into_string()
    })
    .await?;
    Ok(Html(html))
}

/// Validates the request, then runs ingestion, rendering and `finish` on the
/// blocking pool.
async fn render_blocking<T, F>(
    catalog: Arc<TemplateCatalog>,
    request: RenderRequest,
    finish: F,
) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(Document) -> T + Send + 'static,
{
    if request.template_id.trim().is_empty() {
        return Err(AppError::Validation("templateId cannot be empty".to_string()));
    }
    if request.content.name.trim().is_empty() {
        return Err(AppError::Validation("content.name cannot be empty".to_string()));
    }

    let template = catalog
        .get(&request.template_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Template '{}' not found", request.template_id)))?;
    let variant = request.variant();

    let output = tokio::task::spawn_blocking(move || {
        let content = ingest_content(&request.content);
        let document = render(&content, &template, variant)?;
        tracing::info!(
            template_id = %document.template_id,
            blocks = document.blocks().len(),
            "Rendered resume"
        );
        Ok::<_, RenderError>(finish(document))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Render task panicked: {e}")))??;

    Ok(output)
}
