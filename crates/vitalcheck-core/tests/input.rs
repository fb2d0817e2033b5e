use vitalcheck_core::models::input::{
    parse_yes_no, AssessmentInput, Gender, SugarType, TobaccoUse, WaistReference,
};
use vitalcheck_core::models::session::{SessionRecord, SESSION_SCHEMA_VERSION};
use vitalcheck_core::symptoms::{self, Checklist};

#[test]
fn empty_json_object_is_the_initial_record() {
    let input: AssessmentInput = serde_json::from_str("{}").unwrap();
    assert_eq!(input, AssessmentInput::default());
    assert!(input.general_symptoms.is_empty());
}

#[test]
fn enums_use_snake_case_on_the_wire() {
    let input = AssessmentInput {
        sugar_type: Some(SugarType::Hba1c),
        tobacco_use: Some(TobaccoUse::Daily),
        ..Default::default()
    };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["sugar_type"], "hba1c");
    assert_eq!(json["tobacco_use"], "daily");
}

#[test]
fn enum_parsing_is_case_insensitive() {
    assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!(" FBS ".parse::<SugarType>().unwrap(), SugarType::Fbs);
    let err = "sometimes".parse::<TobaccoUse>().unwrap_err();
    assert_eq!(err.to_string(), "unknown tobacco_use value: 'sometimes'");
}

#[test]
fn yes_no_answers() {
    assert!(parse_yes_no("Yes").unwrap());
    assert!(!parse_yes_no("n").unwrap());
    assert!(parse_yes_no("maybe").is_err());
}

#[test]
fn waist_reference_defaults_only_for_binary_gender() {
    assert_eq!(
        WaistReference::for_gender(Gender::Male),
        Some(WaistReference::Male)
    );
    assert_eq!(
        WaistReference::for_gender(Gender::Female),
        Some(WaistReference::Female)
    );
    assert_eq!(WaistReference::for_gender(Gender::Other), None);
}

#[test]
fn entered_flags_require_both_parts() {
    let mut input = AssessmentInput {
        systolic: Some(120),
        ..Default::default()
    };
    assert!(!input.bp_entered());
    input.diastolic = Some(80);
    assert!(input.bp_entered());

    input.sugar_value = Some(99.0);
    assert!(!input.sugar_entered());
    input.sugar_type = Some(SugarType::Fbs);
    assert!(input.sugar_entered());
}

#[test]
fn symptom_catalogue_lookup() {
    assert_eq!(symptoms::GENERAL_SYMPTOMS.len(), 7);
    assert_eq!(symptoms::WOMEN_SYMPTOMS.len(), 5);
    let s = symptoms::find_symptom("breast_lump").unwrap();
    assert_eq!(s.checklist, Checklist::Women);
    assert!(symptoms::find_symptom("headache").is_err());
    assert_eq!(symptoms::checklists_for(Some(Gender::Male)), &[Checklist::General]);
    assert_eq!(symptoms::checklists_for(Some(Gender::Female)).len(), 2);
}

#[test]
fn new_session_record_is_stamped() {
    let record = SessionRecord::new();
    assert_eq!(record.schema_version, SESSION_SCHEMA_VERSION);
    assert_eq!(record.started_at, record.updated_at);
    assert!(record.vitals_route.is_none());
}
