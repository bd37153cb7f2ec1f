//! Analysis pipeline orchestration

use crate::analysis::planner::{generate_7_day_plan, generate_roundwise_checklist};
use crate::analysis::questions::generate_interview_questions;
use crate::analysis::score;
use crate::analysis::skills::{ExtractionOutcome, SkillExtractor};
use crate::error::{PlacementPrepError, Result};
use crate::intel::company::{self, CompanyIntel};
use crate::intel::rounds::generate_round_mapping;
use crate::model::record::AnalysisRecord;
use chrono::Utc;
use log::{debug, info};
use std::collections::BTreeMap;

/// One analysis submission. Company and role are optional; empty strings
/// mean "not provided".
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub company: String,
    pub role: String,
    pub jd_text: String,
}

/// Everything produced by one pipeline run. The record is ready to persist
/// (identity is assigned by the history store on save); the intel is
/// derived presentation data and not stored.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub record: AnalysisRecord,
    pub intel: CompanyIntel,
    pub extraction: ExtractionOutcome,
}

/// Runs extractor, generators, scoring, and round mapping over a request.
pub struct AnalysisEngine {
    extractor: SkillExtractor,
}

impl AnalysisEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new()?,
        })
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome> {
        if request.jd_text.trim().is_empty() {
            return Err(PlacementPrepError::InvalidInput(
                "job description text is required".to_string(),
            ));
        }

        info!("Running analysis pipeline");
        let extraction = self.extractor.extract(&request.jd_text);
        debug!(
            "Detected {} skills across {} categories",
            extraction.total_skills_found,
            extraction.skills.detected_category_count()
        );

        let checklist = generate_roundwise_checklist(&extraction.skills);
        let plan_7_days = generate_7_day_plan(&extraction.skills);
        let questions = generate_interview_questions(&extraction.skills);
        let base_score = score::base_score(
            &request.company,
            &request.role,
            &request.jd_text,
            &extraction.skills,
        );

        let intel = company::generate_company_intel(&request.company, &request.role);
        let round_mapping = generate_round_mapping(intel.size, &extraction.skills);

        let now = Utc::now();
        let record = AnalysisRecord {
            id: String::new(),
            created_at: now,
            updated_at: now,
            company: request.company.clone(),
            role: request.role.clone(),
            jd_text: request.jd_text.clone(),
            extracted_skills: extraction.skills.clone(),
            round_mapping,
            checklist,
            plan_7_days,
            questions,
            base_score,
            skill_confidence_map: BTreeMap::new(),
            final_score: base_score,
        };

        Ok(AnalysisOutcome {
            record,
            intel,
            extraction,
        })
    }
}
