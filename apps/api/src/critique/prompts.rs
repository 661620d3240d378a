//! Prompt Builder for the critique model.
//!
//! The resume text is embedded verbatim with no truncation. Very long
//! resumes are bounded only by the model's context window; an oversized
//! prompt surfaces as a remote service error, not a silent cut.

/// Role used when the user leaves the job role blank.
pub const DEFAULT_TARGET_ROLE: &str = "General Application";

/// Returns the trimmed role, or `DEFAULT_TARGET_ROLE` when it is absent or blank.
pub fn resolve_role(role: Option<&str>) -> &str {
    match role.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => DEFAULT_TARGET_ROLE,
    }
}

/// Builds the single instruction string sent to the critique model.
pub fn build_prompt(resume_text: &str, role: Option<&str>) -> String {
    let target_role = resolve_role(role);

    format!(
        r#"You are an expert resume reviewer with years of experience in HR and recruitment.
Please critique the following resume and provide suggestions for improvement.

Target Job Role: {target_role}

Resume Content:
{resume_text}

Focus on:
1. Content clarity and impact (use of action verbs and metrics).
2. Skills presentation.
3. Experience descriptions.
4. Specific improvements for the {target_role} role.

Please provide your analysis in a clear, structured format with specific recommendations."#
    )
}
