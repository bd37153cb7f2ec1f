//! Skill extraction via fixed-keyword substring matching

use crate::error::{PlacementPrepError, Result};
use crate::model::record::{SkillCategory, SkillSet};
use aho_corasick::AhoCorasick;

/// Keyword table per category. Matching is case-insensitive substring
/// containment: a keyword may match inside an unrelated larger word
/// ("css" inside "cssomething"). That imprecision is part of the contract
/// and kept for compatibility with existing history entries.
const CATEGORY_KEYWORDS: [(SkillCategory, &[&str]); 6] = [
    (
        SkillCategory::CoreCs,
        &[
            "dsa",
            "data structures",
            "algorithms",
            "oop",
            "object oriented",
            "object-oriented",
            "dbms",
            "database",
            "os",
            "operating system",
            "networks",
            "networking",
            "computer networks",
        ],
    ),
    (
        SkillCategory::Languages,
        &[
            "java",
            "python",
            "javascript",
            "typescript",
            "c++",
            "cpp",
            "c programming",
            "c#",
            "csharp",
            "go",
            "golang",
            "rust",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "react",
            "reactjs",
            "next.js",
            "nextjs",
            "node.js",
            "nodejs",
            "express",
            "expressjs",
            "rest",
            "restful",
            "rest api",
            "graphql",
            "html",
            "css",
            "angular",
            "vue",
            "vuejs",
        ],
    ),
    (
        SkillCategory::Data,
        &[
            "sql",
            "mysql",
            "postgresql",
            "postgres",
            "mongodb",
            "mongo",
            "redis",
            "database",
            "nosql",
            "sqlite",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            "aws",
            "amazon web services",
            "azure",
            "microsoft azure",
            "gcp",
            "google cloud",
            "docker",
            "kubernetes",
            "k8s",
            "ci/cd",
            "cicd",
            "jenkins",
            "linux",
            "unix",
            "git",
            "github",
        ],
    ),
    (
        SkillCategory::Testing,
        &[
            "selenium",
            "cypress",
            "playwright",
            "junit",
            "pytest",
            "testing",
            "test automation",
            "jest",
            "mocha",
        ],
    ),
];

/// Labels assigned to `Other` when nothing matched anywhere.
pub const FALLBACK_SKILLS: [&str; 4] = [
    "Basic Programming",
    "Problem Solving",
    "Communication",
    "Teamwork",
];

/// Extraction result: the grouped skills plus summary counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutcome {
    pub skills: SkillSet,
    pub has_skills: bool,
    pub total_skills_found: usize,
}

/// Multi-pattern keyword matcher over the fixed taxonomy.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    patterns: Vec<(SkillCategory, &'static str)>,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::new();
        for (category, keywords) in CATEGORY_KEYWORDS {
            for keyword in keywords {
                patterns.push((category, *keyword));
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(patterns.iter().map(|(_, keyword)| *keyword))
            .map_err(|e| {
                PlacementPrepError::AnalysisFailed(format!("failed to build skill matcher: {}", e))
            })?;

        Ok(Self { matcher, patterns })
    }

    /// Extract skills from JD text. Every category is present in the result;
    /// labels keep keyword-table order and are deduplicated by formatted name.
    pub fn extract(&self, jd_text: &str) -> ExtractionOutcome {
        // Overlapping search so every keyword is tested independently,
        // matching plain substring containment ("java" still hits inside
        // "javascript").
        let mut matched = vec![false; self.patterns.len()];
        for hit in self.matcher.find_overlapping_iter(jd_text) {
            matched[hit.pattern().as_usize()] = true;
        }

        let mut skills = SkillSet::new();
        let mut total_skills_found = 0;
        for (index, (category, keyword)) in self.patterns.iter().enumerate() {
            if !matched[index] {
                continue;
            }
            let label = format_label(keyword);
            let labels = skills.labels_mut(*category);
            if !labels.contains(&label) {
                labels.push(label);
                total_skills_found += 1;
            }
        }

        let has_skills = total_skills_found > 0;
        if !has_skills {
            skills.other = FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
        }

        ExtractionOutcome {
            skills,
            has_skills,
            total_skills_found,
        }
    }

    /// Number of keywords in the taxonomy.
    pub fn keyword_count(&self) -> usize {
        self.patterns.len()
    }
}

/// Capitalize the first letter of each space-separated word, leaving the
/// rest untouched ("amazon web services" -> "Amazon Web Services",
/// "node.js" -> "Node.js").
fn format_label(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_creation() {
        let extractor = SkillExtractor::new().unwrap();
        assert!(extractor.keyword_count() > 70);
    }

    #[test]
    fn test_extracts_into_categories() {
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor
            .extract("Need developer with React, Node.js, Python, SQL, AWS skills. Strong DSA required.");

        assert!(outcome.has_skills);
        assert_eq!(outcome.skills.core_cs, vec!["Dsa"]);
        assert_eq!(outcome.skills.languages, vec!["Python"]);
        assert_eq!(outcome.skills.web, vec!["React", "Node.js"]);
        assert!(outcome.skills.data.contains(&"Sql".to_string()));
        assert_eq!(outcome.skills.cloud, vec!["Aws"]);
        assert_eq!(outcome.skills.detected_category_count(), 5);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor.extract("PYTHON and react experience");

        assert_eq!(outcome.skills.languages, vec!["Python"]);
        assert!(outcome.skills.web.contains(&"React".to_string()));
    }

    #[test]
    fn test_substring_imprecision_is_preserved() {
        // Pure substring search: "css" matches inside a larger word.
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor.extract("cssomething");

        assert!(outcome.skills.web.contains(&"Css".to_string()));
    }

    #[test]
    fn test_multi_word_keywords_title_cased() {
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor.extract("experience with amazon web services and data structures");

        assert!(outcome.skills.cloud.contains(&"Amazon Web Services".to_string()));
        assert!(outcome.skills.core_cs.contains(&"Data Structures".to_string()));
    }

    #[test]
    fn test_no_duplicates_within_category() {
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor.extract("react react REACT");

        let react_count = outcome
            .skills
            .web
            .iter()
            .filter(|label| *label == "React")
            .count();
        assert_eq!(react_count, 1);
    }

    #[test]
    fn test_database_lands_in_both_core_cs_and_data() {
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor.extract("database design");

        assert!(outcome.skills.core_cs.contains(&"Database".to_string()));
        assert!(outcome.skills.data.contains(&"Database".to_string()));
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor.extract("looking for a barista");

        assert!(!outcome.has_skills);
        assert_eq!(outcome.total_skills_found, 0);
        assert_eq!(outcome.skills.other, FALLBACK_SKILLS.to_vec());
        assert_eq!(outcome.skills.detected_category_count(), 0);
    }

    #[test]
    fn test_empty_text_gets_fallback() {
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor.extract("");

        assert!(!outcome.has_skills);
        assert_eq!(outcome.skills.other.len(), 4);
    }

    #[test]
    fn test_every_category_always_present() {
        let extractor = SkillExtractor::new().unwrap();
        let outcome = extractor.extract("react");

        // Unmatched categories are still there, just empty.
        assert!(outcome.skills.testing.is_empty());
        assert!(outcome.skills.other.is_empty());
        for (_, labels) in outcome.skills.iter() {
            let mut seen = std::collections::HashSet::new();
            for label in labels {
                assert!(seen.insert(label), "duplicate label {}", label);
            }
        }
    }
}
