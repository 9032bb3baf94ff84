//! Axum route handlers for the resume builder.

use axum::{extract::State, http::header, response::IntoResponse, Json};
use base64::Engine;
use serde::Deserialize;
use tracing::info;

use crate::builder::composer::compose;
use crate::errors::AppError;
use crate::models::resume::{CustomSection, ResumeRecord};
use crate::render::{render_pdf, StyleConfig};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BuildResumeRequest {
    #[serde(flatten)]
    pub record: ResumeRecord,
    #[serde(default)]
    pub custom_sections: Vec<CustomSection>,
    #[serde(default)]
    pub font: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub template: String,
    /// Optional profile photo, base64-encoded JPEG or PNG.
    #[serde(default)]
    pub profile_image_base64: Option<String>,
}

/// POST /api/v1/resumes
///
/// The only user-visible failure here is missing identity fields; everything
/// downstream degrades gracefully (off-list fonts fall back, empty sections
/// vanish). Responds with the PDF as a download.
pub async fn handle_build_resume(
    State(state): State<AppState>,
    Json(request): Json<BuildResumeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !request.record.missing_required().is_empty() {
        return Err(AppError::Validation(
            "Name, Email, and Phone are mandatory".to_string(),
        ));
    }
    if request.custom_sections.len() > state.config.max_custom_sections {
        return Err(AppError::Validation(format!(
            "At most {} custom sections are allowed",
            state.config.max_custom_sections
        )));
    }

    let profile_image = match &request.profile_image_base64 {
        Some(encoded) => Some(
            base64::engine::general_purpose::STANDARD
                .decode(encoded.trim())
                .map_err(|_| {
                    AppError::Validation("profile_image_base64 is not valid base64".to_string())
                })?,
        ),
        None => None,
    };

    let style = StyleConfig::resolve(&request.font, &request.theme, &request.template);
    let instructions = compose(&request.record, &request.custom_sections);

    let name = request.record.name.clone();
    let pdf_bytes = tokio::task::spawn_blocking(move || {
        render_pdf(&name, &instructions, &style, profile_image.as_deref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))??;

    info!(
        name = %request.record.name,
        bytes = pdf_bytes.len(),
        "resume rendered"
    );

    let filename = format!("{}_Resume.pdf", request.record.name.replace(' ', "_"));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf_bytes,
    ))
}
