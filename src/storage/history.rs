//! Analysis history persistence
//!
//! The whole history is one JSON array under a single key, newest first.
//! Every read goes through schema validation/migration so legacy entries
//! are normalized in one place; entries that fail validation are dropped
//! and counted, never fatal.

use crate::analysis::score;
use crate::error::{PlacementPrepError, Result};
use crate::model::record::{AnalysisRecord, Confidence};
use crate::model::schema;
use crate::storage::kv::KeyValueStore;
use chrono::Utc;
use log::warn;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

pub const HISTORY_KEY: &str = "placement_analyses";

/// History read result: valid entries plus how many corrupt ones were
/// dropped on the way.
#[derive(Debug, Clone)]
pub struct HistorySnapshot {
    pub entries: Vec<AnalysisRecord>,
    pub dropped: usize,
}

pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn generate_id() -> String {
        format!("analysis_{}", Uuid::new_v4().simple())
    }

    /// Load and migrate the full history, newest first.
    pub fn snapshot(&self) -> Result<HistorySnapshot> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(HistorySnapshot {
                entries: Vec::new(),
                dropped: 0,
            });
        };

        let values: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!("History blob is unreadable, treating as empty: {}", e);
                return Ok(HistorySnapshot {
                    entries: Vec::new(),
                    dropped: 0,
                });
            }
        };

        let mut entries = Vec::with_capacity(values.len());
        let mut dropped = 0;
        for value in &values {
            match schema::validate_entry(value) {
                Ok(record) => entries.push(record),
                Err(e) => {
                    dropped += 1;
                    warn!("Dropping invalid history entry: {}", e);
                }
            }
        }

        Ok(HistorySnapshot { entries, dropped })
    }

    pub fn history(&self) -> Result<Vec<AnalysisRecord>> {
        Ok(self.snapshot()?.entries)
    }

    /// Persist a freshly analyzed record. Identity and timestamps are
    /// assigned here; the record is prepended so history stays newest
    /// first. Returns the new id.
    pub fn save(&self, record: &mut AnalysisRecord) -> Result<String> {
        let mut entries = self.history()?;

        record.id = Self::generate_id();
        let now = Utc::now();
        record.created_at = now;
        record.updated_at = now;

        entries.insert(0, record.clone());
        self.write(&entries)?;
        Ok(record.id.clone())
    }

    pub fn get(&self, id: &str) -> Result<AnalysisRecord> {
        self.history()?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| PlacementPrepError::NotFound(format!("analysis {}", id)))
    }

    /// Remove a record by id. Removing an unknown id succeeds and leaves
    /// the rest untouched.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut entries = self.history()?;
        entries.retain(|record| record.id != id);
        self.write(&entries)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.delete(HISTORY_KEY)
    }

    /// Mark a skill as known or needing practice, recomputing the final
    /// score. The skill must exist on the record.
    pub fn set_confidence(
        &self,
        id: &str,
        skill: &str,
        level: Confidence,
    ) -> Result<AnalysisRecord> {
        self.update_confidence(id, skill, Some(level))
    }

    /// Drop a skill's confidence entry, recomputing the final score.
    pub fn clear_confidence(&self, id: &str, skill: &str) -> Result<AnalysisRecord> {
        self.update_confidence(id, skill, None)
    }

    fn update_confidence(
        &self,
        id: &str,
        skill: &str,
        level: Option<Confidence>,
    ) -> Result<AnalysisRecord> {
        let mut entries = self.history()?;
        let record = entries
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| PlacementPrepError::NotFound(format!("analysis {}", id)))?;

        if !record.extracted_skills.contains_label(skill) {
            return Err(PlacementPrepError::InvalidInput(format!(
                "skill '{}' is not part of this analysis",
                skill
            )));
        }

        match level {
            Some(level) => {
                record.skill_confidence_map.insert(skill.to_string(), level);
            }
            None => {
                record.skill_confidence_map.remove(skill);
            }
        }
        record.final_score =
            score::adjusted_score(record.base_score, &record.skill_confidence_map);
        record.updated_at = Utc::now();

        let updated = record.clone();
        self.write(&entries)?;
        Ok(updated)
    }

    fn write(&self, entries: &[AnalysisRecord]) -> Result<()> {
        self.store.set(HISTORY_KEY, &serde_json::to_string(entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::{AnalysisEngine, AnalysisRequest};
    use crate::storage::kv::MemoryStore;

    fn history_store() -> HistoryStore {
        HistoryStore::new(Arc::new(MemoryStore::new()))
    }

    fn analyzed_record(jd_text: &str) -> AnalysisRecord {
        let engine = AnalysisEngine::new().unwrap();
        engine
            .analyze(&AnalysisRequest {
                company: String::new(),
                role: String::new(),
                jd_text: jd_text.to_string(),
            })
            .unwrap()
            .record
    }

    #[test]
    fn test_save_assigns_identity_and_prepends() {
        let history = history_store();

        let mut first = analyzed_record("React role");
        let first_id = history.save(&mut first).unwrap();
        assert!(first_id.starts_with("analysis_"));

        let mut second = analyzed_record("Python role");
        let second_id = history.save(&mut second).unwrap();
        assert_ne!(first_id, second_id);

        let entries = history.history().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, second_id);
        assert_eq!(entries[1].id, first_id);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let history = history_store();
        assert!(matches!(
            history.get("analysis_missing"),
            Err(PlacementPrepError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let history = history_store();
        let mut ids = Vec::new();
        for jd in ["React role", "Python role", "SQL role"] {
            let mut record = analyzed_record(jd);
            ids.push(history.save(&mut record).unwrap());
        }

        // Newest first: ids[2], ids[1], ids[0]. Remove the middle one.
        history.delete(&ids[1]).unwrap();

        let remaining: Vec<String> = history
            .history()
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(remaining, vec![ids[2].clone(), ids[0].clone()]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop_success() {
        let history = history_store();
        let mut record = analyzed_record("React role");
        history.save(&mut record).unwrap();

        assert!(history.delete("analysis_missing").is_ok());
        assert_eq!(history.history().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_blob_degrades_to_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(HISTORY_KEY, "{not json").unwrap();

        let history = HistoryStore::new(store);
        let snapshot = history.snapshot().unwrap();
        assert!(snapshot.entries.is_empty());
        assert_eq!(snapshot.dropped, 0);
    }

    #[test]
    fn test_invalid_entries_dropped_and_counted() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                HISTORY_KEY,
                r#"[{"id":"a","jdText":"text","extractedSkills":{}},{"id":"","jdText":"","extractedSkills":{}}]"#,
            )
            .unwrap();

        let history = HistoryStore::new(store);
        let snapshot = history.snapshot().unwrap();
        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.dropped, 1);
    }

    #[test]
    fn test_confidence_toggle_adjusts_final_score() {
        let history = history_store();
        let mut record = analyzed_record("React and SQL work");
        let id = history.save(&mut record).unwrap();
        let base = record.base_score;

        let updated = history
            .set_confidence(&id, "React", Confidence::Know)
            .unwrap();
        assert_eq!(updated.final_score, base + 2);

        let updated = history
            .set_confidence(&id, "Sql", Confidence::Practice)
            .unwrap();
        assert_eq!(updated.final_score, base);

        let updated = history.clear_confidence(&id, "React").unwrap();
        assert_eq!(updated.final_score, base - 2);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn test_confidence_double_toggle_restores_score() {
        let history = history_store();
        let mut record = analyzed_record("React work");
        let id = history.save(&mut record).unwrap();
        let before = history.get(&id).unwrap().final_score;

        history.set_confidence(&id, "React", Confidence::Know).unwrap();
        let restored = history.clear_confidence(&id, "React").unwrap();
        assert_eq!(restored.final_score, before);
    }

    #[test]
    fn test_confidence_rejects_unknown_skill() {
        let history = history_store();
        let mut record = analyzed_record("React work");
        let id = history.save(&mut record).unwrap();

        assert!(matches!(
            history.set_confidence(&id, "Cobol", Confidence::Know),
            Err(PlacementPrepError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_clear_empties_history() {
        let history = history_store();
        let mut record = analyzed_record("React work");
        history.save(&mut record).unwrap();

        history.clear().unwrap();
        assert!(history.history().unwrap().is_empty());
    }
}
