//! Critique pipeline — extract → blank check → prompt → model.
//!
//! Each call is independent: nothing is cached or shared between
//! invocations, so a failed call leaves no state behind.

use serde::Serialize;
use tracing::{info, warn};

use crate::critique::prompts::{build_prompt, resolve_role};
use crate::errors::AppError;
use crate::extract::{extract_text, is_blank, UploadedArtifact};
use crate::llm_client::CritiqueService;

/// What the UI renders on success.
#[derive(Debug, Clone, Serialize)]
pub struct CritiqueResult {
    /// Model output, displayed verbatim.
    pub critique: String,
    pub target_role: String,
}

pub async fn run_critique(
    artifact: &UploadedArtifact,
    job_role: Option<&str>,
    critic: &dyn CritiqueService,
) -> Result<CritiqueResult, AppError> {
    // PDF parsing is CPU-bound; keep it off the async executor.
    let upload = artifact.clone();
    let resume_text = tokio::task::spawn_blocking(move || extract_text(&upload))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })??;

    if is_blank(&resume_text) {
        warn!("Extracted resume text is empty; skipping critique call");
        return Err(AppError::EmptyContent);
    }

    let target_role = resolve_role(job_role).to_string();
    let prompt = build_prompt(&resume_text, job_role);
    info!(
        "Requesting critique for role '{}' ({} prompt chars)",
        target_role,
        prompt.len()
    );

    let critique = critic.submit(&prompt).await?;
    info!("Critique received ({} chars)", critique.len());

    Ok(CritiqueResult {
        critique,
        target_role,
    })
}
