use vitalcheck_core::models::flow::{Step, VitalsRoute};
use vitalcheck_core::models::input::{Gender, SugarType, TobaccoUse};
use vitalcheck_core::models::session::{SessionRecord, SESSION_SCHEMA_VERSION};
use vitalcheck_core::storage_keys::SESSION_FILE;
use vitalcheck_session::forms::{DemographicsForm, VitalsForm};
use vitalcheck_session::persist::{decode_record, load_record};
use vitalcheck_session::{write_private_file, AssessmentSession, FileStore, MemoryStore, SessionStore};

fn demographics() -> DemographicsForm {
    DemographicsForm {
        age: Some("47".to_string()),
        gender: Some(Gender::Male),
        activity_level: None,
    }
}

#[test]
fn empty_store_yields_fresh_record() {
    let record = load_record(&MemoryStore::new()).unwrap();
    assert_eq!(record.schema_version, SESSION_SCHEMA_VERSION);
    assert_eq!(record.current_step, Step::Demographics);
}

#[test]
fn corrupt_content_is_discarded() {
    for junk in ["", "not json", "[1, 2, 3]", "42", r#"{"schema_version": 1}"#] {
        let record = load_record(&MemoryStore::with_contents(junk)).unwrap();
        assert_eq!(record.current_step, Step::Demographics, "input: {junk:?}");
        assert_eq!(record.data.age, None);
    }
}

#[test]
fn newer_schema_is_rejected_by_decode_and_replaced_on_load() {
    let mut value = serde_json::to_value(SessionRecord::new()).unwrap();
    value["schema_version"] = serde_json::json!(SESSION_SCHEMA_VERSION + 1);
    let text = value.to_string();

    let reason = decode_record(&text).unwrap_err();
    assert!(reason.contains("newer than this build supports"));

    let record = load_record(&MemoryStore::with_contents(text)).unwrap();
    assert_eq!(record.schema_version, SESSION_SCHEMA_VERSION);
}

#[test]
fn legacy_browser_record_is_migrated() {
    let legacy = r#"{
        "age": 58,
        "gender": "male",
        "height": 172.5,
        "weight": 80,
        "systolic": 132,
        "diastolic": 84,
        "sugarType": "ppbs",
        "sugarValue": 150,
        "tobaccoUse": "daily",
        "waistCircumference": null,
        "generalSymptoms": { "lumps": true }
    }"#;

    let record = decode_record(legacy).unwrap();
    assert_eq!(record.schema_version, 1);
    assert_eq!(record.current_step, Step::Demographics);
    assert_eq!(record.data.age, Some(58));
    assert_eq!(record.data.gender, Some(Gender::Male));
    assert_eq!(record.data.height_cm, Some(172.5));
    assert_eq!(record.data.weight_kg, Some(80.0));
    assert_eq!(record.data.sugar_type, Some(SugarType::Ppbs));
    assert_eq!(record.data.tobacco_use, Some(TobaccoUse::Daily));
    assert_eq!(record.data.waist_cm, None);
    assert_eq!(record.data.general_symptoms.get("lumps"), Some(&true));
}

#[test]
fn session_resumes_from_memory_store() {
    let mut session = AssessmentSession::open(MemoryStore::new()).unwrap();
    session.submit_demographics(&demographics()).unwrap();
    let id = session.record().id;

    let store = MemoryStore::with_contents(session.store().contents().unwrap());
    let resumed = AssessmentSession::open(store).unwrap();
    assert_eq!(resumed.record().id, id);
    assert_eq!(resumed.current_step(), Step::Vitals);
    assert_eq!(resumed.input().age, Some(47));
}

#[test]
fn file_store_round_trip_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let session_dir = dir.path().join("sessions");

    let mut session = AssessmentSession::open(FileStore::new(&session_dir)).unwrap();
    session.submit_demographics(&demographics()).unwrap();
    session
        .submit_vitals(&VitalsForm {
            height: Some("175".to_string()),
            weight: Some("70".to_string()),
            systolic: Some("150".to_string()),
            diastolic: Some("95".to_string()),
            ..VitalsForm::default()
        })
        .unwrap();

    let path = session_dir.join(SESSION_FILE);
    assert!(path.exists());
    assert!(!session_dir.join(format!("{SESSION_FILE}.tmp")).exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    let resumed = AssessmentSession::open(FileStore::new(&session_dir)).unwrap();
    assert_eq!(resumed.current_step(), Step::Advisory);
    assert_eq!(resumed.vitals_route(), Some(VitalsRoute::Advisory));
    assert_eq!(resumed.input().systolic, Some(150));

    session.reset().unwrap();
    assert!(!path.exists());
    assert!(FileStore::new(&session_dir).load().unwrap().is_none());
}

#[test]
fn corrupt_file_does_not_block_opening() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SESSION_FILE), "{ truncated").unwrap();

    let session = AssessmentSession::open(FileStore::new(dir.path())).unwrap();
    assert_eq!(session.current_step(), Step::Demographics);
}

#[test]
fn private_file_write_replaces_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b.json");

    write_private_file(&path, "first").unwrap();
    write_private_file(&path, "second").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    assert!(!dir.path().join("a").join("b.json.tmp").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
