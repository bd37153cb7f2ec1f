//! Validation and migration of persisted analysis entries
//!
//! History entries written by older builds used human-readable category
//! keys (`"Core CS"`, `"Cloud/DevOps"`, `"General"`) and a single
//! `readinessScore` field. Migration normalizes any such entry into the
//! canonical [`AnalysisRecord`] shape and is idempotent: migrating an
//! already-canonical entry changes nothing.

use crate::error::{PlacementPrepError, Result};
use crate::model::record::{AnalysisRecord, Confidence, SkillSet};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Legacy category key for each canonical SkillSet field, checked before
/// the canonical key so old entries win the remap.
const SKILL_KEY_ALIASES: [(&str, &str); 7] = [
    ("Core CS", "coreCS"),
    ("Languages", "languages"),
    ("Web", "web"),
    ("Data", "data"),
    ("Cloud/DevOps", "cloud"),
    ("Testing", "testing"),
    ("General", "other"),
];

/// Minimum structure an entry must have to be worth migrating: a non-empty
/// id, non-empty JD text, and an object-typed skills field.
pub fn is_valid_entry(entry: &Value) -> bool {
    let Some(obj) = entry.as_object() else {
        return false;
    };

    let has_id = obj
        .get("id")
        .and_then(Value::as_str)
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    let has_jd = obj
        .get("jdText")
        .and_then(Value::as_str)
        .map(|s| !s.is_empty())
        .unwrap_or(false);
    let has_skills = obj
        .get("extractedSkills")
        .map(Value::is_object)
        .unwrap_or(false);

    has_id && has_jd && has_skills
}

/// Validate an entry and migrate it to the canonical record shape.
pub fn validate_entry(entry: &Value) -> Result<AnalysisRecord> {
    if !is_valid_entry(entry) {
        return Err(PlacementPrepError::InvalidRecord(
            "missing required fields (id, jdText, extractedSkills)".to_string(),
        ));
    }
    Ok(migrate_entry(entry))
}

/// Normalize an arbitrary (but minimally valid) entry into the canonical
/// shape. Legacy field names are consumed during the remap and do not
/// survive into the result.
pub fn migrate_entry(entry: &Value) -> AnalysisRecord {
    let empty = Map::new();
    let obj = entry.as_object().unwrap_or(&empty);

    let created_at = timestamp_field(obj.get("createdAt")).unwrap_or_else(Utc::now);
    let updated_at = timestamp_field(obj.get("updatedAt")).unwrap_or(created_at);

    let extracted_skills = migrate_skills(obj.get("extractedSkills"));

    // Score drift: old entries carried a single readinessScore (sometimes
    // baseReadinessScore); new entries carry baseScore and finalScore.
    let readiness = nonzero_score(obj.get("readinessScore"));
    let base_readiness = nonzero_score(obj.get("baseReadinessScore"));
    let base_score = match score_field(obj.get("baseScore")) {
        Some(score) => score,
        None => readiness.or(base_readiness).unwrap_or(0),
    };
    let final_score = match score_field(obj.get("finalScore")) {
        Some(score) => score,
        None => readiness.unwrap_or(base_score),
    };

    AnalysisRecord {
        id: string_field(obj, "id"),
        created_at,
        updated_at,
        company: string_field(obj, "company"),
        role: string_field(obj, "role"),
        jd_text: string_field(obj, "jdText"),
        extracted_skills,
        round_mapping: array_field(obj, &["roundMapping"]),
        checklist: array_field(obj, &["checklist"]),
        // The legacy `plan` name takes precedence over `plan7Days`.
        plan_7_days: array_field(obj, &["plan", "plan7Days"]),
        questions: array_field(obj, &["questions"]),
        base_score,
        skill_confidence_map: confidence_field(obj.get("skillConfidenceMap")),
        final_score,
    }
}

fn migrate_skills(value: Option<&Value>) -> SkillSet {
    let empty = Map::new();
    let src = value.and_then(Value::as_object).unwrap_or(&empty);

    let mut skills = SkillSet::new();
    for (legacy, canonical) in SKILL_KEY_ALIASES {
        let labels = [legacy, canonical]
            .iter()
            .filter_map(|key| src.get(*key))
            .find(|v| !v.is_null())
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        match canonical {
            "coreCS" => skills.core_cs = labels,
            "languages" => skills.languages = labels,
            "web" => skills.web = labels,
            "data" => skills.data = labels,
            "cloud" => skills.cloud = labels,
            "testing" => skills.testing = labels,
            _ => skills.other = labels,
        }
    }
    skills
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn timestamp_field(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn score_field(value: Option<&Value>) -> Option<u32> {
    let value = value?;
    value
        .as_u64()
        .map(|n| n as u32)
        .or_else(|| value.as_f64().map(|f| f.max(0.0) as u32))
}

/// Fallback-chain variant: a stored zero is treated as absent, matching the
/// old reader's `a || b || 0` reconciliation.
fn nonzero_score(value: Option<&Value>) -> Option<u32> {
    score_field(value).filter(|score| *score != 0)
}

fn confidence_field(value: Option<&Value>) -> BTreeMap<String, Confidence> {
    value
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

fn array_field<T: DeserializeOwned>(obj: &Map<String, Value>, keys: &[&str]) -> Vec<T> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|v| !v.is_null())
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
