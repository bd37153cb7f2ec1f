//! Readiness score calculation
//!
//! The base score is a pure function of the submission and the detected
//! skills, computed once and frozen on the record. Confidence toggles only
//! ever move the separately tracked final score.

use crate::model::record::Confidence;
use crate::model::record::SkillSet;
use std::collections::BTreeMap;

pub const BASE_SCORE: u32 = 35;
pub const MAX_SCORE: u32 = 100;

const CATEGORY_POINTS: u32 = 5;
const CATEGORY_POINTS_CAP: u32 = 30;
const METADATA_BONUS: u32 = 10;
const LONG_JD_THRESHOLD: usize = 800;
const CONFIDENCE_STEP: i64 = 2;

/// Base readiness score: 35 + 5 per detected category (capped at 30)
/// + 10 each for company, role, and a JD longer than 800 characters.
pub fn base_score(company: &str, role: &str, jd_text: &str, skills: &SkillSet) -> u32 {
    let mut score = BASE_SCORE;

    let category_count = skills.detected_category_count() as u32;
    score += (category_count * CATEGORY_POINTS).min(CATEGORY_POINTS_CAP);

    if !company.trim().is_empty() {
        score += METADATA_BONUS;
    }
    if !role.trim().is_empty() {
        score += METADATA_BONUS;
    }
    if jd_text.chars().count() > LONG_JD_THRESHOLD {
        score += METADATA_BONUS;
    }

    score.min(MAX_SCORE)
}

/// Final score: base adjusted by ±2 per confidence entry, clamped to
/// [0, 100].
pub fn adjusted_score(base: u32, confidence: &BTreeMap<String, Confidence>) -> u32 {
    let mut score = base as i64;
    for level in confidence.values() {
        match level {
            Confidence::Know => score += CONFIDENCE_STEP,
            Confidence::Practice => score -= CONFIDENCE_STEP,
        }
    }
    score.clamp(0, MAX_SCORE as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::SkillCategory;

    fn skills_with_categories(count: usize) -> SkillSet {
        let mut skills = SkillSet::new();
        for category in SkillCategory::ALL.iter().take(count) {
            skills.push(*category, "Skill".to_string());
        }
        skills
    }

    #[test]
    fn test_base_score_floor() {
        assert_eq!(base_score("", "", "", &SkillSet::new()), BASE_SCORE);
    }

    #[test]
    fn test_long_jd_with_metadata_scores_ninety() {
        let jd = "x".repeat(900);
        assert_eq!(base_score("A", "B", &jd, &skills_with_categories(3)), 90);
    }

    #[test]
    fn test_category_points_capped_at_thirty() {
        // 6 non-other categories would be 30 even without the cap; verify
        // the cap holds when metadata bonuses push toward the ceiling.
        let jd = "x".repeat(900);
        let score = base_score("Acme", "SDE", &jd, &skills_with_categories(6));
        assert_eq!(score, (BASE_SCORE + 30 + 30).min(MAX_SCORE));
    }

    #[test]
    fn test_whitespace_company_earns_no_bonus() {
        assert_eq!(base_score("   ", "", "", &SkillSet::new()), BASE_SCORE);
    }

    #[test]
    fn test_jd_length_boundary() {
        let exactly_800 = "x".repeat(800);
        let over_800 = "x".repeat(801);
        assert_eq!(base_score("", "", &exactly_800, &SkillSet::new()), BASE_SCORE);
        assert_eq!(
            base_score("", "", &over_800, &SkillSet::new()),
            BASE_SCORE + 10
        );
    }

    #[test]
    fn test_determinism() {
        let skills = skills_with_categories(4);
        let a = base_score("Acme", "SDE", "some text", &skills);
        let b = base_score("Acme", "SDE", "some text", &skills);
        assert_eq!(a, b);
    }

    #[test]
    fn test_adjusted_score_moves_by_two() {
        let mut confidence = BTreeMap::new();
        confidence.insert("React".to_string(), Confidence::Know);
        assert_eq!(adjusted_score(50, &confidence), 52);

        confidence.insert("Sql".to_string(), Confidence::Practice);
        assert_eq!(adjusted_score(50, &confidence), 50);
    }

    #[test]
    fn test_adjusted_score_clamps() {
        let mut confidence = BTreeMap::new();
        for i in 0..60 {
            confidence.insert(format!("skill{}", i), Confidence::Practice);
        }
        assert_eq!(adjusted_score(35, &confidence), 0);

        let mut boosts = BTreeMap::new();
        for i in 0..60 {
            boosts.insert(format!("skill{}", i), Confidence::Know);
        }
        assert_eq!(adjusted_score(95, &boosts), MAX_SCORE);
    }

    #[test]
    fn test_double_toggle_restores_score() {
        let mut confidence: BTreeMap<String, Confidence> = BTreeMap::new();
        let before = adjusted_score(70, &confidence);

        confidence.insert("React".to_string(), Confidence::Know);
        let toggled = adjusted_score(70, &confidence);
        assert_ne!(before, toggled);

        confidence.remove("React");
        assert_eq!(adjusted_score(70, &confidence), before);
    }
}
