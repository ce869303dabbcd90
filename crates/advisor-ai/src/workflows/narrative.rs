//! Seam for AI-assisted text generation.
//!
//! The hosted analysis endpoint is a black box: prompt in, narrative out,
//! may fail. Callers treat failures as a signal to fall back to a
//! deterministic template rather than surfacing an error.

/// Outbound hook for free-text analysis generation.
pub trait NarrativeGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative backend unavailable: {0}")]
    Unavailable(String),
}

/// Offline narrator used by the demo and as the default wiring; joins the
/// prompt's fact lines into a short paragraph.
#[derive(Debug, Clone, Default)]
pub struct TemplateNarrator;

impl NarrativeGenerator for TemplateNarrator {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        let sentences: Vec<&str> = prompt
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if sentences.is_empty() {
            return Ok("No assessment activity recorded yet.".to_string());
        }

        Ok(format!("{}.", sentences.join(". ").trim_end_matches('.')))
    }
}
