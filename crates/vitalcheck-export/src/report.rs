use jiff::civil::Date;
use serde::Serialize;
use vitalcheck_core::models::input::AssessmentInput;
use vitalcheck_core::storage_keys;
use vitalcheck_scoring::summary::AssessmentSummary;
use vitalcheck_scoring::symptoms::reported_symptoms;

/// Everything an export needs: the answers, the derived values and the
/// date printed on the document.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub generated_on: Date,
    pub input: AssessmentInput,
    pub summary: AssessmentSummary,
}

impl HealthReport {
    pub fn new(input: AssessmentInput, generated_on: Date) -> Self {
        let summary = AssessmentSummary::compute(&input);
        Self {
            generated_on,
            input,
            summary,
        }
    }

    /// Long-form date, e.g. "19 October 2026".
    pub fn display_date(&self) -> String {
        format!(
            "{} {}",
            self.generated_on.day(),
            self.generated_on.strftime("%B %Y")
        )
    }

    /// Labels of the symptoms answered "yes".
    pub fn reported_symptom_labels(&self) -> Vec<String> {
        reported_symptoms(&self.input)
            .into_iter()
            .map(|symptom| symptom.label.to_string())
            .collect()
    }

    pub fn pdf_file_name(&self) -> String {
        storage_keys::assessment_pdf(self.generated_on)
    }

    pub fn text_file_name(&self) -> String {
        storage_keys::assessment_text(self.generated_on)
    }
}
