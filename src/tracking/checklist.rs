//! Manual QA checklist state
//!
//! Ten fixed test items with an id -> passed flag map persisted under its
//! own key. Unrelated to analysis history.

use crate::error::{PlacementPrepError, Result};
use crate::storage::kv::KeyValueStore;
use log::warn;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const CHECKLIST_KEY: &str = "prp_test_checklist";

/// One manual test: what to verify and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestItem {
    pub id: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

pub const TEST_ITEMS: [TestItem; 10] = [
    TestItem {
        id: "jd-required",
        label: "JD required validation works",
        hint: "Run analyze with an empty JD file - the command should refuse with a clear message",
    },
    TestItem {
        id: "short-jd-warning",
        label: "Short JD warning shows for <200 chars",
        hint: "Analyze a JD under 200 characters - a warning should be printed before results",
    },
    TestItem {
        id: "skills-extraction",
        label: "Skills extraction groups correctly",
        hint: "Analyze a JD with various tech skills (React, Java, AWS) - check they appear in correct categories",
    },
    TestItem {
        id: "round-mapping",
        label: "Round mapping changes based on company + skills",
        hint: "Compare results for different company types - round structure should vary",
    },
    TestItem {
        id: "score-deterministic",
        label: "Score calculation is deterministic",
        hint: "Analyze the same JD twice - base score should be identical",
    },
    TestItem {
        id: "skill-toggles",
        label: "Skill toggles update score",
        hint: "Set confidence on a saved analysis - final score should change by ±2 immediately",
    },
    TestItem {
        id: "persist-restart",
        label: "Changes persist across runs",
        hint: "Toggle skills, run history show again - changes should remain",
    },
    TestItem {
        id: "history-save-load",
        label: "History saves and loads correctly",
        hint: "Create an analysis, run history list - the entry should appear with correct data",
    },
    TestItem {
        id: "export-output",
        label: "Export formats render the correct content",
        hint: "Render an analysis as json and markdown - content should match the console view",
    },
    TestItem {
        id: "no-errors",
        label: "No errors on core commands",
        hint: "Run analyze, history, checklist, and ship commands - none should fail unexpectedly",
    },
];

/// Checklist progress summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub passed: usize,
    pub total: usize,
    pub percentage: u32,
}

pub struct ChecklistTracker {
    store: Arc<dyn KeyValueStore>,
}

impl ChecklistTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn default_state() -> BTreeMap<String, bool> {
        TEST_ITEMS
            .iter()
            .map(|test| (test.id.to_string(), false))
            .collect()
    }

    /// Current id -> passed map. Missing or corrupt state degrades to
    /// all-unchecked.
    pub fn state(&self) -> Result<BTreeMap<String, bool>> {
        let mut state = Self::default_state();
        if let Some(raw) = self.store.get(CHECKLIST_KEY)? {
            match serde_json::from_str::<BTreeMap<String, bool>>(&raw) {
                Ok(saved) => state.extend(saved),
                Err(e) => warn!("Checklist state is unreadable, resetting: {}", e),
            }
        }
        Ok(state)
    }

    pub fn update(&self, test_id: &str, passed: bool) -> Result<()> {
        if !TEST_ITEMS.iter().any(|test| test.id == test_id) {
            return Err(PlacementPrepError::InvalidInput(format!(
                "unknown test id '{}'",
                test_id
            )));
        }

        let mut state = self.state()?;
        state.insert(test_id.to_string(), passed);
        self.store
            .set(CHECKLIST_KEY, &serde_json::to_string(&state)?)
    }

    /// Uncheck everything.
    pub fn reset(&self) -> Result<()> {
        self.store
            .set(CHECKLIST_KEY, &serde_json::to_string(&Self::default_state())?)
    }

    pub fn is_complete(&self) -> Result<bool> {
        let state = self.state()?;
        Ok(TEST_ITEMS
            .iter()
            .all(|test| state.get(test.id).copied().unwrap_or(false)))
    }

    pub fn progress(&self) -> Result<Progress> {
        let state = self.state()?;
        let passed = TEST_ITEMS
            .iter()
            .filter(|test| state.get(test.id).copied().unwrap_or(false))
            .count();
        let total = TEST_ITEMS.len();
        let percentage = ((passed as f64 / total as f64) * 100.0).round() as u32;

        Ok(Progress {
            passed,
            total,
            percentage,
        })
    }
}
