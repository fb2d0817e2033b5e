use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown symptom id: {0}")]
    UnknownSymptom(String),

    #[error("symptom '{symptom_id}' is not on the {checklist} checklist")]
    WrongChecklist {
        symptom_id: String,
        checklist: String,
    },
}
