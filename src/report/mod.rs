pub mod json;
pub mod md;

use crate::error::PulseError;
use crate::types::result::ScoringResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &ScoringResult, format: OutputFormat) -> Result<String, PulseError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(PulseError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}
