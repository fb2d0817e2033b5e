use std::collections::BTreeMap;

use vitalcheck_core::models::flow::{Step, VitalsRoute};
use vitalcheck_core::models::input::{
    ActivityLevel, AlcoholUse, Gender, SugarType, TobaccoUse, WaistReference,
};
use vitalcheck_scoring::cbac::RiskTier;
use vitalcheck_session::forms::{DemographicsForm, RiskFactorsForm, SymptomsForm, VitalsForm};
use vitalcheck_session::state::UNDERAGE_NOTICE;
use vitalcheck_session::{AssessmentSession, MemoryStore, SessionError, SessionStore};

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn demographics(age: &str, gender: Gender) -> DemographicsForm {
    DemographicsForm {
        age: text(age),
        gender: Some(gender),
        activity_level: Some(ActivityLevel::Sedentary),
    }
}

fn vitals(systolic: &str, diastolic: &str) -> VitalsForm {
    VitalsForm {
        height: text("170"),
        weight: text("72"),
        systolic: text(systolic),
        diastolic: text(diastolic),
        sugar_type: None,
        sugar_value: None,
    }
}

fn answers(pairs: &[(&str, bool)]) -> BTreeMap<String, bool> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// A store whose writes always fail.
struct ReadOnlyStore;

impl SessionStore for ReadOnlyStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(None)
    }

    fn save(&mut self, _contents: &str) -> Result<(), SessionError> {
        Err(std::io::Error::other("read-only file system").into())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        Ok(())
    }
}

fn session_at_risk_factors(gender: Gender) -> AssessmentSession<MemoryStore> {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();
    session.submit_demographics(&demographics("45", gender)).unwrap();
    session.submit_vitals(&vitals("118", "76")).unwrap();
    session
}

#[test]
fn fresh_session_starts_at_demographics() {
    let session = AssessmentSession::open(MemoryStore::new()).unwrap();
    assert_eq!(session.current_step(), Step::Demographics);
    assert_eq!(session.vitals_route(), None);
    assert_eq!(session.input().age, None);
}

#[test]
fn full_walk_through_reaches_results() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();

    assert_eq!(
        session.submit_demographics(&demographics("52", Gender::Female)).unwrap(),
        Step::Vitals
    );
    assert_eq!(
        session.submit_vitals(&vitals("118", "76")).unwrap(),
        VitalsRoute::RiskFactors
    );
    assert_eq!(session.current_step(), Step::RiskFactors);

    let risk = RiskFactorsForm {
        tobacco_use: Some(TobaccoUse::Past),
        alcohol_use: Some(AlcoholUse::No),
        waist: text("88"),
        waist_reference: None,
        family_history: Some(true),
    };
    assert_eq!(session.submit_risk_factors(&risk).unwrap(), Step::Symptoms);
    assert_eq!(session.input().waist_reference, Some(WaistReference::Female));

    let symptoms = SymptomsForm {
        general: answers(&[("lumps", false), ("voice_change", false)]),
        women: answers(&[("breast_lump", true)]),
    };
    assert_eq!(session.submit_symptoms(&symptoms).unwrap(), Step::Results);

    let summary = session.summary();
    // age 3 + tobacco 1 + waist 1 + activity 1 + family 2
    assert_eq!(summary.cbac.total, 8);
    assert_eq!(summary.cbac.tier, RiskTier::HigherRisk);
    assert!(summary.has_cancer_symptom);
    assert!(summary.needs_consultation);
}

#[test]
fn high_vitals_route_to_advisory_and_lock_later_steps() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();
    session.submit_demographics(&demographics("60", Gender::Male)).unwrap();

    let route = session.submit_vitals(&vitals("150", "85")).unwrap();
    assert_eq!(route, VitalsRoute::Advisory);
    assert_eq!(session.current_step(), Step::Advisory);

    let err = session
        .submit_risk_factors(&RiskFactorsForm::default())
        .unwrap_err();
    assert!(matches!(err, SessionError::AdvisoryRoute));

    let err = session.submit_symptoms(&SymptomsForm::default()).unwrap_err();
    assert!(matches!(err, SessionError::AdvisoryRoute));
    assert_eq!(session.current_step(), Step::Advisory);
}

#[test]
fn high_fasting_sugar_routes_to_advisory() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();
    session.submit_demographics(&demographics("40", Gender::Male)).unwrap();

    let form = VitalsForm {
        sugar_type: Some(SugarType::Fbs),
        sugar_value: text("130"),
        ..vitals("", "")
    };
    assert_eq!(session.submit_vitals(&form).unwrap(), VitalsRoute::Advisory);
    assert_eq!(session.input().systolic, None);
    assert_eq!(session.input().sugar_value, Some(130.0));
}

#[test]
fn resubmitting_vitals_reevaluates_the_gate() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();
    session.submit_demographics(&demographics("40", Gender::Male)).unwrap();
    session.submit_vitals(&vitals("160", "100")).unwrap();

    let route = session.submit_vitals(&vitals("", "")).unwrap();
    assert_eq!(route, VitalsRoute::RiskFactors);
    assert_eq!(session.input().systolic, None);
    assert_eq!(session.input().diastolic, None);
    assert!(session.submit_risk_factors(&RiskFactorsForm::default()).is_ok());
}

#[test]
fn invalid_vitals_leave_state_and_store_untouched() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();
    session.submit_demographics(&demographics("40", Gender::Male)).unwrap();
    let stored = session.store().contents().map(str::to_string);

    let form = VitalsForm {
        height: text("20"),
        weight: None,
        systolic: text("120"),
        diastolic: None,
        ..VitalsForm::default()
    };
    let err = session.submit_vitals(&form).unwrap_err();
    let SessionError::Validation(errors) = err else {
        panic!("expected validation errors");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["height", "weight", "diastolic"]);

    assert_eq!(session.current_step(), Step::Vitals);
    assert_eq!(session.input().height_cm, None);
    assert_eq!(session.store().contents().map(str::to_string), stored);
}

#[test]
fn missing_age_blocks_demographics() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();
    let form = DemographicsForm {
        age: text("  "),
        ..DemographicsForm::default()
    };
    let err = session.submit_demographics(&form).unwrap_err();
    assert!(err.to_string().contains("age: Please enter your age"));
    assert!(session.store().contents().is_none());
}

#[test]
fn minors_get_a_notice_but_may_continue() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();
    assert_eq!(
        session.submit_demographics(&demographics("16", Gender::Other)).unwrap(),
        Step::Vitals
    );
    assert_eq!(session.underage_notice(), Some(UNDERAGE_NOTICE));

    session.submit_demographics(&demographics("18", Gender::Other)).unwrap();
    assert_eq!(session.underage_notice(), None);
}

#[test]
fn explicit_waist_chart_overrides_gender_default() {
    let mut session = session_at_risk_factors(Gender::Female);
    let form = RiskFactorsForm {
        waist: text("95"),
        waist_reference: Some(WaistReference::Male),
        ..RiskFactorsForm::default()
    };
    session.submit_risk_factors(&form).unwrap();
    assert_eq!(session.input().waist_reference, Some(WaistReference::Male));
    assert_eq!(session.summary().cbac.breakdown.waist, 1);
}

#[test]
fn other_gender_without_chart_scores_no_waist_points() {
    let mut session = session_at_risk_factors(Gender::Other);
    let form = RiskFactorsForm {
        waist: text("120"),
        ..RiskFactorsForm::default()
    };
    session.submit_risk_factors(&form).unwrap();
    assert_eq!(session.input().waist_reference, None);
    assert_eq!(session.summary().cbac.breakdown.waist, 0);
}

#[test]
fn preview_scores_without_mutating() {
    let session = session_at_risk_factors(Gender::Male);
    let before = session.record().clone();

    let form = RiskFactorsForm {
        tobacco_use: Some(TobaccoUse::Daily),
        alcohol_use: Some(AlcoholUse::Yes),
        waist: text("not a number"),
        waist_reference: None,
        family_history: Some(false),
    };
    let preview = session.preview_cbac(&form);
    // age 2 + tobacco 2 + alcohol 1 + activity 1
    assert_eq!(preview.total, 6);
    assert_eq!(preview.breakdown.waist, 0);
    assert_eq!(session.record(), &before);
}

#[test]
fn women_answers_are_rejected_for_other_genders() {
    let mut session = session_at_risk_factors(Gender::Male);
    session.submit_risk_factors(&RiskFactorsForm::default()).unwrap();

    let form = SymptomsForm {
        general: BTreeMap::new(),
        women: answers(&[("breast_lump", true)]),
    };
    let SessionError::Validation(errors) = session.submit_symptoms(&form).unwrap_err() else {
        panic!("expected validation error");
    };
    assert_eq!(errors[0].field, "women_symptoms");
    assert_eq!(session.current_step(), Step::Symptoms);
}

#[test]
fn unknown_or_misplaced_symptoms_are_rejected() {
    let mut session = session_at_risk_factors(Gender::Female);
    session.submit_risk_factors(&RiskFactorsForm::default()).unwrap();

    let unknown = SymptomsForm {
        general: answers(&[("headache", true)]),
        women: BTreeMap::new(),
    };
    assert!(matches!(
        session.submit_symptoms(&unknown).unwrap_err(),
        SessionError::Scoring(_)
    ));

    let misplaced = SymptomsForm {
        general: answers(&[("breast_lump", true)]),
        women: BTreeMap::new(),
    };
    assert!(matches!(
        session.submit_symptoms(&misplaced).unwrap_err(),
        SessionError::Scoring(_)
    ));
    assert!(session.input().general_symptoms.is_empty());
}

#[test]
fn reset_clears_state_and_store() {
    let mut session = session_at_risk_factors(Gender::Male);
    let old_id = session.record().id;
    assert!(session.store().contents().is_some());

    session.reset().unwrap();
    assert_eq!(session.current_step(), Step::Demographics);
    assert_eq!(session.vitals_route(), None);
    assert_eq!(session.input().age, None);
    assert_ne!(session.record().id, old_id);
    assert!(session.store().contents().is_none());

    // Resetting twice is harmless.
    session.reset().unwrap();
}

#[test]
fn failed_save_keeps_previous_state() {
    let mut session = AssessmentSession::open(ReadOnlyStore).unwrap();
    let before = session.record().clone();

    let err = session
        .submit_demographics(&demographics("45", Gender::Male))
        .unwrap_err();
    assert!(matches!(err, SessionError::Io(_)));
    assert_eq!(session.current_step(), Step::Demographics);
    assert_eq!(session.input().age, None);
    assert_eq!(session.record(), &before);
}

#[test]
fn steps_cannot_be_skipped() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();

    let err = session.submit_vitals(&vitals("118", "76")).unwrap_err();
    assert!(matches!(
        err,
        SessionError::OutOfOrder {
            expected: Step::Demographics
        }
    ));
    let err = session.submit_symptoms(&SymptomsForm::default()).unwrap_err();
    assert!(matches!(
        err,
        SessionError::OutOfOrder {
            expected: Step::Demographics
        }
    ));
    assert_eq!(session.current_step(), Step::Demographics);
    assert!(session.store().contents().is_none());

    session.submit_demographics(&demographics("45", Gender::Male)).unwrap();
    let err = session
        .submit_risk_factors(&RiskFactorsForm::default())
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::OutOfOrder {
            expected: Step::Vitals
        }
    ));
    assert_eq!(session.vitals_route(), None);

    session.submit_vitals(&vitals("118", "76")).unwrap();
    let err = session.submit_symptoms(&SymptomsForm::default()).unwrap_err();
    assert!(matches!(
        err,
        SessionError::OutOfOrder {
            expected: Step::RiskFactors
        }
    ));
    assert!(err.to_string().contains("NCD risk factors"));
    assert_eq!(session.current_step(), Step::RiskFactors);
}

#[test]
fn completed_steps_can_be_revisited() {
    let mut session = session_at_risk_factors(Gender::Female);
    session.submit_risk_factors(&RiskFactorsForm::default()).unwrap();
    session.submit_symptoms(&SymptomsForm::default()).unwrap();
    assert_eq!(session.current_step(), Step::Results);

    assert_eq!(
        session.submit_risk_factors(&RiskFactorsForm::default()).unwrap(),
        Step::Symptoms
    );
    assert_eq!(
        session.submit_vitals(&vitals("118", "76")).unwrap(),
        VitalsRoute::RiskFactors
    );
}
