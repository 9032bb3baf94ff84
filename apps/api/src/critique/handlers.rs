//! Axum route handlers for the critique API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::critique::feedback::render_feedback;
use crate::critique::scorer::{score_resume, ScoreReport};
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::grammar::grammar_line;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub purpose: String,
}

#[derive(Debug, Serialize)]
pub struct CritiqueResponse {
    pub report: ScoreReport,
    /// Rendered markdown feedback block for the display layer.
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_issues: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_note: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/critique/score
///
/// Scores raw resume text directly. Never rejects its input: empty text and
/// empty purpose both degrade per the scorer's contract.
pub async fn handle_score_text(
    State(state): State<AppState>,
    Json(request): Json<ScoreTextRequest>,
) -> Result<Json<CritiqueResponse>, AppError> {
    let report = score_resume(&request.text, &request.purpose, &state.rubric);
    let feedback = render_feedback(&report, &request.purpose);
    Ok(Json(CritiqueResponse {
        report,
        feedback,
        grammar_issues: None,
        grammar_note: None,
    }))
}

/// POST /api/v1/critique
///
/// Multipart form: `file` (the PDF) and `purpose`. Extracts the text, scores
/// it, and appends a grammar-issue count when the grammar service answers.
/// Grammar-service failure is non-fatal: the count is simply omitted.
pub async fn handle_critique(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CritiqueResponse>, AppError> {
    let mut file_bytes: Option<bytes::Bytes> = None;
    let mut purpose = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                file_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read uploaded file: {e}"))
                })?);
            }
            "purpose" => {
                purpose = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read purpose field: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let file_bytes = file_bytes.ok_or_else(|| {
        AppError::Validation("A PDF file is required in the 'file' field".to_string())
    })?;

    let text = tokio::task::spawn_blocking(move || extract_text(&file_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))??;

    let report = score_resume(&text, &purpose, &state.rubric);
    let feedback = render_feedback(&report, &purpose);

    let (grammar_issues, grammar_note) = if state.config.grammar_enabled {
        match state.grammar.issue_count(&text).await {
            Ok(count) => (Some(count), Some(grammar_line(count))),
            Err(e) => {
                warn!("grammar check unavailable, omitting issue count: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    info!(
        category = %report.category,
        score = report.score,
        "resume critiqued"
    );

    Ok(Json(CritiqueResponse {
        report,
        feedback,
        grammar_issues,
        grammar_note,
    }))
}
