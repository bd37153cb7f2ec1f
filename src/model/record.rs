//! Canonical analysis record and generated artifact types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fixed skill taxonomy. `Other` only ever carries the fallback labels
/// assigned when nothing else matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "coreCS")]
    CoreCs,
    #[serde(rename = "languages")]
    Languages,
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "cloud")]
    Cloud,
    #[serde(rename = "testing")]
    Testing,
    #[serde(rename = "other")]
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::CoreCs,
        SkillCategory::Languages,
        SkillCategory::Web,
        SkillCategory::Data,
        SkillCategory::Cloud,
        SkillCategory::Testing,
        SkillCategory::Other,
    ];

    /// Canonical key used in persisted documents.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "coreCS",
            SkillCategory::Languages => "languages",
            SkillCategory::Web => "web",
            SkillCategory::Data => "data",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Testing => "testing",
            SkillCategory::Other => "other",
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::Cloud => "Cloud/DevOps",
            SkillCategory::Testing => "Testing",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Detected skills grouped by category. Every category is always present,
/// possibly empty; labels keep keyword-table order and carry no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(rename = "coreCS")]
    pub core_cs: Vec<String>,
    pub languages: Vec<String>,
    pub web: Vec<String>,
    pub data: Vec<String>,
    pub cloud: Vec<String>,
    pub testing: Vec<String>,
    pub other: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::CoreCs => &self.core_cs,
            SkillCategory::Languages => &self.languages,
            SkillCategory::Web => &self.web,
            SkillCategory::Data => &self.data,
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Testing => &self.testing,
            SkillCategory::Other => &self.other,
        }
    }

    pub fn labels_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::CoreCs => &mut self.core_cs,
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Web => &mut self.web,
            SkillCategory::Data => &mut self.data,
            SkillCategory::Cloud => &mut self.cloud,
            SkillCategory::Testing => &mut self.testing,
            SkillCategory::Other => &mut self.other,
        }
    }

    /// Append a label unless the category already holds it.
    pub fn push(&mut self, category: SkillCategory, label: String) {
        let labels = self.labels_mut(category);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    pub fn has(&self, category: SkillCategory) -> bool {
        !self.get(category).is_empty()
    }

    /// Categories with at least one detected skill, `Other` excluded.
    pub fn detected_category_count(&self) -> usize {
        SkillCategory::ALL
            .iter()
            .filter(|c| **c != SkillCategory::Other && self.has(**c))
            .count()
    }

    /// Whether a label appears anywhere in the set.
    pub fn contains_label(&self, label: &str) -> bool {
        SkillCategory::ALL
            .iter()
            .any(|c| self.get(*c).iter().any(|l| l == label))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        SkillCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

/// User-declared confidence for a single skill label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Know,
    Practice,
}

/// Interview round flavor used by the round mapping templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundType {
    Automated,
    Interview,
    Behavioral,
    Mixed,
    Task,
    Cultural,
    /// Legacy records may carry round types this build does not know.
    #[serde(other)]
    Unknown,
}

/// One interview round from the company-size template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub number: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub round_type: RoundType,
    pub focus: String,
    pub duration: String,
    pub why_it_matters: String,
    pub tips: Vec<String>,
}

/// One round of the preparation checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistRound {
    pub round: u32,
    pub title: String,
    pub items: Vec<String>,
}

/// One day of the 7-day study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: u32,
    pub title: String,
    pub tasks: Vec<String>,
}

/// Persisted analysis entry. Inputs and generated artifacts are frozen at
/// submission time; only confidence toggles mutate the record afterwards
/// (recomputing `final_score` and refreshing `updated_at`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: SkillSet,
    pub round_mapping: Vec<Round>,
    pub checklist: Vec<ChecklistRound>,
    pub plan_7_days: Vec<PlanDay>,
    pub questions: Vec<String>,
    pub base_score: u32,
    pub skill_confidence_map: BTreeMap<String, Confidence>,
    pub final_score: u32,
}
