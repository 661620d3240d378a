// Resume critique: prompt construction, the extract → prompt → model
// pipeline, and the HTTP handler that drives it.
// All model calls go through llm_client::CritiqueService.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
