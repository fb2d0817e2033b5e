//! Decoding stored session records.
//!
//! Stored content is never trusted: anything that cannot be read back as a
//! current [`SessionRecord`] is discarded and a fresh record is used in its
//! place. Only I/O failures of the store itself are reported.

use serde_json::{Map, Value};
use vitalcheck_core::models::session::{SessionRecord, SESSION_SCHEMA_VERSION};

use crate::error::SessionError;
use crate::store::SessionStore;

/// Load the stored record, or a fresh one if there is none or it is unusable.
pub fn load_record(store: &impl SessionStore) -> Result<SessionRecord, SessionError> {
    let Some(contents) = store.load()? else {
        return Ok(SessionRecord::new());
    };
    match decode_record(&contents) {
        Ok(record) => Ok(record),
        Err(reason) => {
            tracing::warn!(%reason, "discarding unreadable session record");
            Ok(SessionRecord::new())
        }
    }
}

pub fn save_record(store: &mut impl SessionStore, record: &SessionRecord) -> Result<(), SessionError> {
    let json = serde_json::to_string_pretty(record)?;
    store.save(&json)
}

/// Parse and migrate stored text into a current record.
pub fn decode_record(contents: &str) -> Result<SessionRecord, String> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: Value = serde_json::from_str(contents).map_err(|e| e.to_string())?;
    let on_disk_version = json
        .get("schema_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    serde_json::from_value(migrated).map_err(|e| e.to_string())
}

/// Field names used by the browser front end's flat session-storage record.
const LEGACY_FIELDS: [(&str, &str); 16] = [
    ("age", "age"),
    ("gender", "gender"),
    ("activityLevel", "activity_level"),
    ("height", "height_cm"),
    ("weight", "weight_kg"),
    ("systolic", "systolic"),
    ("diastolic", "diastolic"),
    ("sugarType", "sugar_type"),
    ("sugarValue", "sugar_value"),
    ("tobaccoUse", "tobacco_use"),
    ("alcoholUse", "alcohol_use"),
    ("waistCircumference", "waist_cm"),
    ("waistReference", "waist_reference"),
    ("familyHistory", "family_history"),
    ("generalSymptoms", "general_symptoms"),
    ("womenSymptoms", "women_symptoms"),
];

/// Run sequential migrations from `from_version` up to [`SESSION_SCHEMA_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(json: Value, from_version: u32) -> Result<Value, String> {
    if from_version > SESSION_SCHEMA_VERSION {
        return Err(format!(
            "schema_version {from_version} is newer than this build supports ({SESSION_SCHEMA_VERSION})"
        ));
    }

    let mut json = json;

    // v0 → v1: the unversioned record is the front end's flat camelCase
    // form state. Wrap it in a session envelope.
    if from_version < 1 {
        let legacy = json
            .as_object()
            .ok_or_else(|| "session record is not a JSON object".to_string())?;

        let mut data = Map::new();
        for (from, to) in LEGACY_FIELDS {
            if let Some(value) = legacy.get(from).filter(|v| !v.is_null()) {
                data.insert(to.to_string(), value.clone());
            }
        }

        let fresh = serde_json::to_value(SessionRecord::new()).map_err(|e| e.to_string())?;
        let mut envelope = fresh
            .as_object()
            .cloned()
            .ok_or_else(|| "session envelope is not a JSON object".to_string())?;
        envelope.insert("data".to_string(), Value::Object(data));
        envelope.insert("schema_version".to_string(), Value::Number(1.into()));
        json = Value::Object(envelope);
        tracing::info!("migrated session record v0 → v1 (wrapped legacy form state)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}
