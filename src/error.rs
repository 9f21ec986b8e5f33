//! Boundary error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by [`crate::planner::solve`].
///
/// Infeasibility and timeouts are not errors: they come back as plan
/// statuses in the result envelope, because the caller may want to relax
/// the inputs and retry. Errors here mean the request itself was broken
/// or an internal invariant failed.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The dataset failed input validation; no model was constructed.
    #[error("invalid input dataset: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The solver rejected the constructed model.
    #[error("solver rejected the model: {0}")]
    ModelInvalid(String),

    /// The solved model violated an invariant the extractor relies on.
    #[error("schedule extraction failed: {0}")]
    Extraction(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [single] => single.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}
