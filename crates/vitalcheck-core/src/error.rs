use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown {field} value: '{value}'")]
    UnknownValue { field: &'static str, value: String },

    #[error("unknown symptom id: {0}")]
    UnknownSymptom(String),
}
