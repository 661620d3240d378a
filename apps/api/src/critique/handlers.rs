//! Axum route handlers for the Critique API.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::critique::pipeline::{run_critique, CritiqueResult};
use crate::errors::AppError;
use crate::extract::{MediaKind, UploadedArtifact};
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";
/// Multipart text field carrying the target job role.
pub const JOB_ROLE_FIELD: &str = "job_role";

/// Parsed upload form.
#[derive(Debug, Default)]
struct CritiqueForm {
    resume: Option<UploadedArtifact>,
    job_role: Option<String>,
}

/// POST /api/v1/critique
///
/// Multipart form: `resume` (PDF or text file) and optional `job_role`.
/// Returns the model's critique, or a JSON error the page shows as-is.
pub async fn handle_critique(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CritiqueResult>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    let form = read_form(&mut multipart).await?;

    let artifact = form.resume.ok_or_else(|| {
        AppError::Validation(format!(
            "A resume file is required (multipart field '{RESUME_FIELD}')"
        ))
    })?;

    let request_id = Uuid::new_v4();
    info!(
        "[{request_id}] Critique requested: {:?} upload, {} bytes",
        artifact.kind,
        artifact.bytes.len()
    );

    // Failures are logged once, by AppError::into_response.
    let result =
        run_critique(&artifact, form.job_role.as_deref(), state.critic.as_ref()).await?;

    info!("[{request_id}] Critique completed");
    Ok(Json(result))
}

async fn read_form(multipart: &mut Multipart) -> Result<CritiqueForm, AppError> {
    let mut form = CritiqueForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let kind = MediaKind::from_content_type(field.content_type());
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(multipart_error)?;

                // Browsers send an empty, unnamed part when no file was picked.
                let nothing_picked =
                    bytes.is_empty() && file_name.as_deref().map_or(true, str::is_empty);
                if nothing_picked {
                    continue;
                }

                let artifact = UploadedArtifact::new(kind, bytes);
                form.resume = Some(match file_name {
                    Some(name) => artifact.with_file_name(name),
                    None => artifact,
                });
            }
            Some(JOB_ROLE_FIELD) => {
                form.job_role = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    Ok(form)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}
