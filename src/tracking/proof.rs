//! Build-milestone tracking and final submission gating
//!
//! Eight fixed build steps and three submission URLs, each persisted under
//! its own key. "Shipped" means: every step done, every checklist test
//! passing, and all three URLs valid.

use crate::error::{PlacementPrepError, Result};
use crate::storage::kv::KeyValueStore;
use crate::tracking::checklist::ChecklistTracker;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

pub const STEPS_KEY: &str = "prp_steps_completion";
pub const SUBMISSION_KEY: &str = "prp_final_submission";

/// One build milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStep {
    pub id: &'static str,
    pub label: &'static str,
    pub key: &'static str,
}

pub const BUILD_STEPS: [BuildStep; 8] = [
    BuildStep {
        id: "step1",
        label: "Storage Layer Setup",
        key: "storage",
    },
    BuildStep {
        id: "step2",
        label: "JD Analyzer Built",
        key: "analyzer",
    },
    BuildStep {
        id: "step3",
        label: "Results Rendering Complete",
        key: "results",
    },
    BuildStep {
        id: "step4",
        label: "History System Working",
        key: "history",
    },
    BuildStep {
        id: "step5",
        label: "Data Validation Hardened",
        key: "validation",
    },
    BuildStep {
        id: "step6",
        label: "Company Intel Added",
        key: "intel",
    },
    BuildStep {
        id: "step7",
        label: "Round Mapping Implemented",
        key: "rounds",
    },
    BuildStep {
        id: "step8",
        label: "Test Checklist System",
        key: "tests",
    },
];

/// Submission artifact links. Empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    pub project_url: String,
    pub repo_url: String,
    pub deployed_url: String,
}

/// Per-area completion flags feeding the shipped gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStatus {
    pub steps: bool,
    pub checklist: bool,
    pub artifacts: bool,
}

/// A URL is acceptable only with an explicit http/https scheme and a
/// well-formed remainder.
pub fn validate_url(url: &str) -> bool {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return false;
    }
    Url::parse(url).is_ok()
}

pub struct ProofTracker {
    store: Arc<dyn KeyValueStore>,
    checklist: ChecklistTracker,
}

impl ProofTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let checklist = ChecklistTracker::new(store.clone());
        Self { store, checklist }
    }

    fn default_steps() -> BTreeMap<String, bool> {
        BUILD_STEPS
            .iter()
            .map(|step| (step.id.to_string(), false))
            .collect()
    }

    /// Current step-id -> completed map; corrupt state degrades to
    /// all-incomplete.
    pub fn steps(&self) -> Result<BTreeMap<String, bool>> {
        let mut steps = Self::default_steps();
        if let Some(raw) = self.store.get(STEPS_KEY)? {
            match serde_json::from_str::<BTreeMap<String, bool>>(&raw) {
                Ok(saved) => steps.extend(saved),
                Err(e) => warn!("Step state is unreadable, resetting: {}", e),
            }
        }
        Ok(steps)
    }

    pub fn update_step(&self, step_id: &str, completed: bool) -> Result<()> {
        if !BUILD_STEPS.iter().any(|step| step.id == step_id) {
            return Err(PlacementPrepError::InvalidInput(format!(
                "unknown step id '{}'",
                step_id
            )));
        }

        let mut steps = self.steps()?;
        steps.insert(step_id.to_string(), completed);
        self.store.set(STEPS_KEY, &serde_json::to_string(&steps)?)
    }

    pub fn all_steps_complete(&self) -> Result<bool> {
        let steps = self.steps()?;
        Ok(BUILD_STEPS
            .iter()
            .all(|step| steps.get(step.id).copied().unwrap_or(false)))
    }

    /// Stored submission links; corrupt state degrades to empty.
    pub fn submission(&self) -> Result<Submission> {
        let Some(raw) = self.store.get(SUBMISSION_KEY)? else {
            return Ok(Submission::default());
        };
        match serde_json::from_str(&raw) {
            Ok(submission) => Ok(submission),
            Err(e) => {
                warn!("Submission state is unreadable, resetting: {}", e);
                Ok(Submission::default())
            }
        }
    }

    pub fn save_submission(&self, submission: &Submission) -> Result<()> {
        self.store
            .set(SUBMISSION_KEY, &serde_json::to_string(submission)?)
    }

    pub fn all_artifacts_provided(&self) -> Result<bool> {
        let submission = self.submission()?;
        Ok(validate_url(&submission.project_url)
            && validate_url(&submission.repo_url)
            && validate_url(&submission.deployed_url))
    }

    pub fn completion_status(&self) -> Result<CompletionStatus> {
        Ok(CompletionStatus {
            steps: self.all_steps_complete()?,
            checklist: self.checklist.is_complete()?,
            artifacts: self.all_artifacts_provided()?,
        })
    }

    pub fn is_shipped(&self) -> Result<bool> {
        let status = self.completion_status()?;
        Ok(status.steps && status.checklist && status.artifacts)
    }

    /// Formatted submission report with placeholders for missing links.
    pub fn submission_text(&self) -> Result<String> {
        let submission = self.submission()?;
        let link = |url: &str| {
            if url.is_empty() {
                "[Not provided]".to_string()
            } else {
                url.to_string()
            }
        };

        Ok(format!(
            "------------------------------------------\n\
             Placement Readiness Platform - Final Submission\n\
             \n\
             Project Link: {}\n\
             GitHub Repository: {}\n\
             Live Deployment: {}\n\
             \n\
             Core Capabilities:\n\
             - JD skill extraction (deterministic)\n\
             - Round mapping engine\n\
             - 7-day prep plan\n\
             - Interactive readiness scoring\n\
             - History persistence\n\
             ------------------------------------------",
            link(&submission.project_url),
            link(&submission.repo_url),
            link(&submission.deployed_url),
        ))
    }
}
