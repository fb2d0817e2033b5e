use vitalcheck_core::models::flow::{Step, VitalsRoute};
use vitalcheck_core::models::input::{AssessmentInput, Gender};
use vitalcheck_core::models::session::SessionRecord;
use vitalcheck_core::symptoms::Checklist;
use vitalcheck_scoring::cbac::{calculate_cbac, resolve_waist_reference, CbacScore};
use vitalcheck_scoring::routing::FlowGate;
use vitalcheck_scoring::summary::AssessmentSummary;
use vitalcheck_scoring::validation::{self, FieldError};

use crate::error::SessionError;
use crate::forms::{DemographicsForm, RiskFactors, RiskFactorsForm, SymptomsForm, VitalsForm};
use crate::persist;
use crate::store::SessionStore;

pub const UNDERAGE_NOTICE: &str =
    "This tool is designed for adults. You can continue, but results may be less relevant.";

/// The one in-progress assessment, owned by whoever drives the wizard.
///
/// Every successful submission is written to the store before returning.
/// A rejected submission leaves both the state and the store untouched.
pub struct AssessmentSession<S: SessionStore> {
    record: SessionRecord,
    store: S,
}

impl<S: SessionStore> AssessmentSession<S> {
    /// Restore the stored session, falling back to a fresh one.
    pub fn open(store: S) -> Result<Self, SessionError> {
        let record = persist::load_record(&store)?;
        tracing::info!(session_id = %record.id, step = ?record.current_step, "session opened");
        Ok(Self { record, store })
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn input(&self) -> &AssessmentInput {
        &self.record.data
    }

    pub fn current_step(&self) -> Step {
        self.record.current_step
    }

    pub fn vitals_route(&self) -> Option<VitalsRoute> {
        self.record.vitals_route
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary::compute(&self.record.data)
    }

    pub fn underage_notice(&self) -> Option<&'static str> {
        self.record
            .data
            .age
            .filter(|age| validation::is_underage(*age))
            .map(|_| UNDERAGE_NOTICE)
    }

    pub fn submit_demographics(&mut self, form: &DemographicsForm) -> Result<Step, SessionError> {
        let demographics = form.validate().map_err(SessionError::Validation)?;

        let mut record = self.record.clone();
        let data = &mut record.data;
        data.age = Some(demographics.age);
        data.gender = demographics.gender;
        data.activity_level = demographics.activity_level;

        self.commit(record, Step::Vitals)
    }

    /// Store vitals and decide, once, whether the advisory screen is shown.
    pub fn submit_vitals(&mut self, form: &VitalsForm) -> Result<VitalsRoute, SessionError> {
        self.ensure_reached(Step::Vitals)?;
        let vitals = form.validate().map_err(SessionError::Validation)?;

        let mut record = self.record.clone();
        let data = &mut record.data;
        data.height_cm = Some(vitals.height_cm);
        data.weight_kg = Some(vitals.weight_kg);
        data.systolic = vitals.blood_pressure.map(|(s, _)| s);
        data.diastolic = vitals.blood_pressure.map(|(_, d)| d);
        data.sugar_type = vitals.sugar.map(|(t, _)| t);
        data.sugar_value = vitals.sugar.map(|(_, v)| v);

        let gate = FlowGate::evaluate(data);
        let route = gate.route();
        record.vitals_route = Some(route);

        self.commit(record, route.step())?;
        tracing::info!(
            ?route,
            bp_elevated = gate.bp_elevated,
            sugar_elevated = gate.sugar_elevated,
            "vitals submitted"
        );
        Ok(route)
    }

    pub fn submit_risk_factors(&mut self, form: &RiskFactorsForm) -> Result<Step, SessionError> {
        self.ensure_not_advisory()?;
        self.ensure_reached(Step::RiskFactors)?;
        let factors = form.validate().map_err(SessionError::Validation)?;

        let mut record = self.record.clone();
        apply_risk_factors(&mut record.data, &factors);
        let cbac = calculate_cbac(&record.data);

        let next = self.commit(record, Step::Symptoms)?;
        tracing::info!(tier = ?cbac.tier, "risk factors submitted");
        Ok(next)
    }

    /// Live CBAC score for an unsubmitted risk-factor form. Does not mutate.
    pub fn preview_cbac(&self, form: &RiskFactorsForm) -> CbacScore {
        let mut preview = self.record.data.clone();
        apply_risk_factors(&mut preview, &form.lenient());
        let score = calculate_cbac(&preview);
        tracing::debug!(total = score.total, "cbac preview");
        score
    }

    pub fn submit_symptoms(&mut self, form: &SymptomsForm) -> Result<Step, SessionError> {
        self.ensure_not_advisory()?;
        self.ensure_reached(Step::Symptoms)?;

        for id in form.general.keys() {
            validation::validate_symptom(id, Checklist::General)?;
        }
        if !form.women.is_empty() && self.record.data.gender != Some(Gender::Female) {
            return Err(FieldError {
                field: "women_symptoms".to_string(),
                value: None,
                expected_range: None,
                message: "Women-specific symptoms apply only when gender is female".to_string(),
            }
            .into());
        }
        for id in form.women.keys() {
            validation::validate_symptom(id, Checklist::Women)?;
        }

        let mut record = self.record.clone();
        record.data.general_symptoms = form.general.clone();
        record.data.women_symptoms = form.women.clone();

        let next = self.commit(record, Step::Results)?;
        tracing::info!("symptoms submitted");
        Ok(next)
    }

    /// Clear all state unconditionally and remove the stored record.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.record = SessionRecord::new();
        tracing::info!(session_id = %self.record.id, "assessment reset");
        Ok(())
    }

    fn ensure_not_advisory(&self) -> Result<(), SessionError> {
        if self.record.vitals_route == Some(VitalsRoute::Advisory) {
            return Err(SessionError::AdvisoryRoute);
        }
        Ok(())
    }

    /// Refuse a step the wizard has not reached yet.
    fn ensure_reached(&self, step: Step) -> Result<(), SessionError> {
        let current = self.record.current_step;
        if current.position() < step.position() {
            return Err(SessionError::OutOfOrder { expected: current });
        }
        Ok(())
    }

    /// Save `record` at step `next`, then make it the live state.
    fn commit(&mut self, mut record: SessionRecord, next: Step) -> Result<Step, SessionError> {
        record.current_step = next;
        record.updated_at = jiff::Timestamp::now();
        persist::save_record(&mut self.store, &record)?;
        self.record = record;
        Ok(next)
    }
}

/// Merge risk factors into the input. Without an explicit waist chart the
/// one implied by the recorded gender is stored.
fn apply_risk_factors(data: &mut AssessmentInput, factors: &RiskFactors) {
    data.tobacco_use = factors.tobacco_use;
    data.alcohol_use = factors.alcohol_use;
    data.waist_cm = factors.waist_cm;
    data.waist_reference = resolve_waist_reference(factors.waist_reference, data.gender);
    data.family_history = factors.family_history;
}
