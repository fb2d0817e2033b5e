use thiserror::Error;
use vitalcheck_core::models::flow::Step;
use vitalcheck_scoring::error::ScoringError;
use vitalcheck_scoring::validation::FieldError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),

    #[error("vitals were routed to the advisory screen; risk factors and symptoms are unavailable")]
    AdvisoryRoute,

    #[error("this step is not open yet; complete \"{}\" first", .expected.title())]
    OutOfOrder { expected: Step },

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FieldError> for SessionError {
    fn from(e: FieldError) -> Self {
        SessionError::Validation(vec![e])
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
