//! Integration tests for placement prep

use placement_prep::analysis::engine::{AnalysisEngine, AnalysisRequest};
use placement_prep::intel::company::CompanySize;
use placement_prep::model::record::Confidence;
use placement_prep::storage::history::{HistoryStore, HISTORY_KEY};
use placement_prep::storage::kv::{JsonFileStore, KeyValueStore, MemoryStore};
use placement_prep::tracking::checklist::{ChecklistTracker, TEST_ITEMS};
use placement_prep::tracking::proof::{ProofTracker, Submission, BUILD_STEPS};
use std::sync::Arc;

const SAMPLE_JD: &str =
    "Need developer with React, Node.js, Python, SQL, AWS skills. Strong DSA required.";

fn analyze(company: &str, role: &str, jd_text: &str) -> placement_prep::analysis::engine::AnalysisOutcome {
    let engine = AnalysisEngine::new().unwrap();
    engine
        .analyze(&AnalysisRequest {
            company: company.to_string(),
            role: role.to_string(),
            jd_text: jd_text.to_string(),
        })
        .unwrap()
}

#[test]
fn test_pipeline_detects_expected_categories() {
    let outcome = analyze("", "", SAMPLE_JD);
    let skills = &outcome.record.extracted_skills;

    assert!(skills.core_cs.contains(&"Dsa".to_string()));
    assert!(skills.languages.contains(&"Python".to_string()));
    assert!(skills.web.contains(&"React".to_string()));
    assert!(skills.web.contains(&"Node.js".to_string()));
    assert!(skills.data.contains(&"Sql".to_string()));
    assert!(skills.cloud.contains(&"Aws".to_string()));
    assert_eq!(skills.detected_category_count(), 5);
    assert!(skills.other.is_empty());

    // 35 base + 5 per category, no metadata bonuses.
    assert_eq!(outcome.record.base_score, 60);
    assert_eq!(outcome.record.questions.len(), 10);
}

#[test]
fn test_pipeline_metadata_bonuses() {
    let long_jd = format!("{} {}", SAMPLE_JD, "x".repeat(800));
    let outcome = analyze("Acme", "Backend Engineer", &long_jd);

    // 35 base + 25 category points + 10 company + 10 role + 10 long JD.
    assert_eq!(outcome.record.base_score, 90);
}

#[test]
fn test_enterprise_company_gets_four_rounds() {
    let outcome = analyze("Google", "SDE", SAMPLE_JD);

    assert_eq!(outcome.intel.size, CompanySize::Enterprise);
    assert_eq!(outcome.record.round_mapping.len(), 4);
    // DSA detected, so round 3 leans on system design.
    assert_eq!(outcome.record.round_mapping[2].focus, "System Design + Core CS");
}

#[test]
fn test_save_show_toggle_delete_cycle() {
    let store = Arc::new(MemoryStore::new());
    let history = HistoryStore::new(store);

    let mut record = analyze("Stripe", "Backend", SAMPLE_JD).record;
    let id = history.save(&mut record).unwrap();
    let base = record.base_score;

    let loaded = history.get(&id).unwrap();
    assert_eq!(loaded, record);

    let updated = history.set_confidence(&id, "React", Confidence::Know).unwrap();
    assert_eq!(updated.final_score, base + 2);
    assert_eq!(updated.base_score, base);

    // Double toggle restores the prior score.
    let restored = history.clear_confidence(&id, "React").unwrap();
    assert_eq!(restored.final_score, base);

    history.delete(&id).unwrap();
    assert!(history.get(&id).is_err());
    assert!(history.delete(&id).is_ok());
}

#[test]
fn test_history_persists_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let store = Arc::new(JsonFileStore::new(dir.path()));
        let history = HistoryStore::new(store);
        let mut record = analyze("", "", SAMPLE_JD).record;
        history.save(&mut record).unwrap()
    };

    let store = Arc::new(JsonFileStore::new(dir.path()));
    let history = HistoryStore::new(store);
    let loaded = history.get(&id).unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.questions.len(), 10);
}

#[test]
fn test_legacy_entries_migrate_at_read_boundary() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            HISTORY_KEY,
            r#"[{
                "id": "analysis_legacy",
                "jdText": "React and SQL work",
                "extractedSkills": {"Web": ["React"], "Data": ["Sql"], "General": []},
                "plan": [],
                "readinessScore": 45
            }]"#,
        )
        .unwrap();

    let history = HistoryStore::new(store);
    let entries = history.history().unwrap();

    assert_eq!(entries.len(), 1);
    let record = &entries[0];
    assert_eq!(record.extracted_skills.web, vec!["React"]);
    assert_eq!(record.extracted_skills.data, vec!["Sql"]);
    assert_eq!(record.base_score, 45);
    assert_eq!(record.final_score, 45);

    // Confidence toggling works on the migrated record.
    let updated = history
        .set_confidence("analysis_legacy", "React", Confidence::Practice)
        .unwrap();
    assert_eq!(updated.final_score, 43);
}

#[test]
fn test_corrupted_entries_are_dropped_not_fatal() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            HISTORY_KEY,
            r#"[{"id":"ok","jdText":"React","extractedSkills":{}}, {"bogus": true}, 42]"#,
        )
        .unwrap();

    let history = HistoryStore::new(store);
    let snapshot = history.snapshot().unwrap();
    assert_eq!(snapshot.entries.len(), 1);
    assert_eq!(snapshot.dropped, 2);
}

#[test]
fn test_shipped_gate_end_to_end_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(dir.path()));

    let checklist = ChecklistTracker::new(store.clone());
    let proof = ProofTracker::new(store.clone());
    assert!(!proof.is_shipped().unwrap());

    for test in TEST_ITEMS {
        checklist.update(test.id, true).unwrap();
    }
    for step in BUILD_STEPS {
        proof.update_step(step.id, true).unwrap();
    }
    proof
        .save_submission(&Submission {
            project_url: "https://project.example.com".to_string(),
            repo_url: "https://github.com/user/repo".to_string(),
            deployed_url: "https://app.example.com".to_string(),
        })
        .unwrap();

    // A fresh tracker over the same directory sees the shipped state.
    let reopened = ProofTracker::new(Arc::new(JsonFileStore::new(dir.path())));
    assert!(reopened.is_shipped().unwrap());

    let report = reopened.submission_text().unwrap();
    assert!(report.contains("https://github.com/user/repo"));
    assert!(!report.contains("[Not provided]"));
}

#[test]
fn test_checklist_and_steps_are_independent() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let checklist = ChecklistTracker::new(store.clone());
    let proof = ProofTracker::new(store);

    checklist.update("jd-required", true).unwrap();
    assert!(!proof.steps().unwrap().get("step1").copied().unwrap());

    proof.update_step("step1", true).unwrap();
    let state = checklist.state().unwrap();
    assert!(!state.contains_key("step1"));
}
