//! Interview question generation
//!
//! Category-specific questions are pushed in a fixed order, then the list
//! is padded from the general pool (cycling by current length) and cut to
//! exactly [`QUESTION_COUNT`]. Same SkillSet in, same questions out.

use crate::model::record::{SkillCategory, SkillSet};

pub const QUESTION_COUNT: usize = 10;

const GENERAL_QUESTIONS: [&str; 5] = [
    "Walk me through your most challenging project. What problem did you solve?",
    "How do you approach debugging a complex issue?",
    "Explain a time when you optimized code. What was the impact?",
    "What is your approach to learning new technologies?",
    "How would you design a scalable system for millions of users?",
];

fn any_label_contains(labels: &[String], needle: &str) -> bool {
    labels.iter().any(|label| label.to_lowercase().contains(needle))
}

/// Build the question list for the detected skills.
pub fn generate_interview_questions(skills: &SkillSet) -> Vec<String> {
    let mut questions: Vec<String> = Vec::new();

    if skills.has(SkillCategory::CoreCs) {
        questions.extend(
            [
                "Explain the difference between process and thread. When would you use each?",
                "What is database normalization? Why is it important?",
                "Describe how a HashMap works internally. What is its time complexity?",
            ]
            .map(String::from),
        );
    }

    // DSA questions are always relevant.
    questions.extend(
        [
            "How would you optimize search in a sorted array? What about unsorted?",
            "Explain dynamic programming. Give an example where you'd use it.",
        ]
        .map(String::from),
    );

    let languages = skills.get(SkillCategory::Languages);
    if !languages.is_empty() {
        if any_label_contains(languages, "java") {
            questions
                .push("What is the difference between abstract class and interface in Java?".to_string());
        } else if any_label_contains(languages, "python") {
            questions.push("Explain list comprehension and generators in Python.".to_string());
        } else {
            questions.push(format!("What are the key features of {}?", languages[0]));
        }
    }

    let web = skills.get(SkillCategory::Web);
    if !web.is_empty() {
        if any_label_contains(web, "react") {
            questions.push("Explain state management in React. What are hooks?".to_string());
        }
        if any_label_contains(web, "node") {
            questions.push("How does Node.js handle asynchronous operations?".to_string());
        } else {
            questions.push("What is the difference between REST and GraphQL?".to_string());
        }
    }

    let data = skills.get(SkillCategory::Data);
    if !data.is_empty() {
        if any_label_contains(data, "sql") {
            questions
                .push("Explain indexing in databases. When does it help performance?".to_string());
        }
        if any_label_contains(data, "mongo") {
            questions.push("What is the difference between SQL and NoSQL databases?".to_string());
        }
    }

    if skills.has(SkillCategory::Cloud) {
        questions.push("What are the benefits of containerization with Docker?".to_string());
    }

    while questions.len() < QUESTION_COUNT {
        questions.push(GENERAL_QUESTIONS[questions.len() % GENERAL_QUESTIONS.len()].to_string());
    }
    questions.truncate(QUESTION_COUNT);

    questions
}
