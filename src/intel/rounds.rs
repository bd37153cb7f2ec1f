//! Interview round mapping per company size tier
//!
//! Three canned templates. Focus lines swap on detected skills; everything
//! else is fixed data.

use crate::intel::company::CompanySize;
use crate::model::record::{Round, RoundType, SkillCategory, SkillSet};
use colored::Color;

fn round(
    number: u32,
    title: &str,
    round_type: RoundType,
    focus: String,
    duration: &str,
    why_it_matters: &str,
    tips: [&str; 3],
) -> Round {
    Round {
        number,
        title: title.to_string(),
        round_type,
        focus,
        duration: duration.to_string(),
        why_it_matters: why_it_matters.to_string(),
        tips: tips.map(String::from).to_vec(),
    }
}

/// Build the round mapping for a size tier and detected skill set.
pub fn generate_round_mapping(size: CompanySize, skills: &SkillSet) -> Vec<Round> {
    let has_dsa = skills.has(SkillCategory::CoreCs) || skills.has(SkillCategory::Languages);
    let has_web = skills.has(SkillCategory::Web);

    match size {
        CompanySize::Enterprise => vec![
            round(
                1,
                "Online Assessment",
                RoundType::Automated,
                "DSA + Aptitude + MCQs".to_string(),
                "60-90 mins",
                "First filter to test coding speed and fundamental knowledge. Practice timed problems on platforms like LeetCode.",
                [
                    "Focus on medium difficulty problems",
                    "Time management is critical",
                    "Review basic CS concepts",
                ],
            ),
            round(
                2,
                "Technical Round 1",
                RoundType::Interview,
                "DSA Deep Dive + Problem Solving".to_string(),
                "45-60 mins",
                "Tests algorithmic thinking and coding clarity. Interviewers assess problem approach, optimization, and edge cases.",
                [
                    "Think out loud",
                    "Start with brute force, then optimize",
                    "Consider time/space complexity",
                ],
            ),
            round(
                3,
                "Technical Round 2",
                RoundType::Interview,
                if has_dsa {
                    "System Design + Core CS"
                } else {
                    "Projects + Technical Depth"
                }
                .to_string(),
                "45-60 mins",
                "Evaluates design thinking and real-world application knowledge. For senior roles, system design is crucial.",
                [
                    "Know your projects deeply",
                    "Understand scalability concepts",
                    "Be ready to draw diagrams",
                ],
            ),
            round(
                4,
                "Managerial/HR Round",
                RoundType::Behavioral,
                "Cultural Fit + Behavioral Questions".to_string(),
                "30-45 mins",
                "Final assessment of soft skills, team fit, and long-term potential. Honesty and clarity matter most.",
                [
                    "Use STAR method for stories",
                    "Show enthusiasm",
                    "Ask thoughtful questions",
                ],
            ),
        ],
        CompanySize::MidSize => vec![
            round(
                1,
                "Screening Round",
                RoundType::Automated,
                if has_dsa {
                    "Coding + Technical MCQs"
                } else {
                    "Practical Coding Task"
                }
                .to_string(),
                "45-60 mins",
                "Tests baseline coding ability and tech knowledge. More focused on practical coding than pure algorithmic puzzles.",
                [
                    "Code should be clean and readable",
                    "Handle edge cases",
                    "Add comments where needed",
                ],
            ),
            round(
                2,
                "Technical Discussion",
                RoundType::Interview,
                if has_web {
                    "Stack Discussion + Live Coding"
                } else {
                    "Problem Solving + Concepts"
                }
                .to_string(),
                "60 mins",
                "Deep dive into your tech stack and project experience. Be ready to explain architectural decisions.",
                [
                    "Know your resume projects inside-out",
                    "Explain trade-offs clearly",
                    "Discuss challenges you faced",
                ],
            ),
            round(
                3,
                "Founder/Manager Round",
                RoundType::Mixed,
                "Culture + Problem Approach + Growth Mindset".to_string(),
                "30-45 mins",
                "Combination of technical validation and cultural assessment. Mid-size companies value adaptability.",
                [
                    "Show learning ability",
                    "Be authentic",
                    "Demonstrate initiative",
                ],
            ),
        ],
        CompanySize::Startup => vec![
            round(
                1,
                "Practical Coding Challenge",
                RoundType::Task,
                if has_web {
                    "Build a feature or mini-project"
                } else {
                    "Solve real-world problem"
                }
                .to_string(),
                "2-3 hours (take-home)",
                "Startups prioritize shipping ability over theoretical knowledge. This tests how you build real features.",
                [
                    "Focus on working code first",
                    "Write clean, maintainable code",
                    "Add basic documentation",
                ],
            ),
            round(
                2,
                "Technical Discussion",
                RoundType::Interview,
                "Code Review + System Thinking".to_string(),
                "60 mins",
                "Review of your submission + discussion of how you'd scale or improve it. Tests practical engineering sense.",
                [
                    "Be ready to defend your choices",
                    "Discuss what you'd improve with more time",
                    "Show pragmatism",
                ],
            ),
            round(
                3,
                "Founder/Team Round",
                RoundType::Cultural,
                "Culture Fit + Ownership Mindset".to_string(),
                "30-45 mins",
                "Startups need people who can wear many hats and take ownership. They assess if you fit the fast-paced environment.",
                [
                    "Show passion and energy",
                    "Emphasize learning and growth",
                    "Be honest about interests",
                ],
            ),
        ],
    }
}

/// Display color tag for a round type. Unknown types get a neutral default.
pub fn round_type_color(round_type: RoundType) -> Color {
    match round_type {
        RoundType::Automated => Color::Blue,
        RoundType::Interview => Color::Magenta,
        RoundType::Behavioral => Color::Green,
        RoundType::Mixed => Color::Yellow,
        RoundType::Task => Color::Cyan,
        RoundType::Cultural => Color::BrightMagenta,
        RoundType::Unknown => Color::White,
    }
}
