//! Round-wise preparation checklist and 7-day study plan generators
//!
//! Output shape is fixed; only a handful of line items swap text based on
//! which skill categories were detected. The swaps are driven by the rule
//! table below so the evaluation order stays explicit and deterministic.

use crate::model::record::{ChecklistRound, PlanDay, SkillCategory, SkillSet};

/// Stack-specific checklist line: when the category has detections, its
/// first `take` labels are joined and substituted into `template` at `{}`;
/// otherwise `fallback` is used verbatim. Evaluated in array order.
struct StackRule {
    category: SkillCategory,
    take: usize,
    joiner: &'static str,
    template: &'static str,
    fallback: &'static str,
}

const STACK_RULES: [StackRule; 4] = [
    StackRule {
        category: SkillCategory::Languages,
        take: 2,
        joiner: " and ",
        template: "Deep dive into {}: syntax, best practices, frameworks",
        fallback: "Choose a primary language and master its syntax",
    },
    StackRule {
        category: SkillCategory::Web,
        take: 3,
        joiner: ", ",
        template: "Study web technologies: {}",
        fallback: "Learn basics of web development if required",
    },
    StackRule {
        category: SkillCategory::Data,
        take: 2,
        joiner: " and ",
        template: "Practice database queries in {}",
        fallback: "Understand SQL basics and query optimization",
    },
    StackRule {
        category: SkillCategory::Cloud,
        take: 2,
        joiner: " and ",
        template: "Explore {} basics",
        fallback: "Familiarize with cloud concepts if relevant",
    },
];

fn render_stack_rule(rule: &StackRule, skills: &SkillSet) -> String {
    let labels = skills.get(rule.category);
    if labels.is_empty() {
        return rule.fallback.to_string();
    }
    let joined = labels[..labels.len().min(rule.take)].join(rule.joiner);
    rule.template.replacen("{}", &joined, 1)
}

/// Generate the 4-round preparation checklist.
pub fn generate_roundwise_checklist(skills: &SkillSet) -> Vec<ChecklistRound> {
    let has_core_cs = skills.has(SkillCategory::CoreCs);

    let mut round3_items: Vec<String> = STACK_RULES
        .iter()
        .map(|rule| render_stack_rule(rule, skills))
        .collect();
    round3_items.extend(
        [
            "Build 2-3 mini projects showcasing your skills",
            "Prepare to explain your projects in detail",
            "Practice system design basics (scalability, load balancing)",
            "Review your resume and be ready to defend every point",
        ]
        .map(String::from),
    );

    vec![
        ChecklistRound {
            round: 1,
            title: "Aptitude & Basics".to_string(),
            items: [
                "Practice quantitative aptitude (numbers, percentages, ratios)",
                "Solve logical reasoning puzzles",
                "Brush up on verbal ability and comprehension",
                "Review basic mathematics and probability",
                "Practice previous years' aptitude test papers",
                "Time yourself on mock tests (improve speed)",
            ]
            .map(String::from)
            .to_vec(),
        },
        ChecklistRound {
            round: 2,
            title: "DSA & Core CS Fundamentals".to_string(),
            items: vec![
                if has_core_cs {
                    "Master data structures: Arrays, LinkedLists, Trees, Graphs, HashMaps"
                } else {
                    "Learn basic data structures and their operations"
                }
                .to_string(),
                if has_core_cs {
                    "Practice algorithmic paradigms: DP, Greedy, Backtracking, Divide & Conquer"
                } else {
                    "Understand sorting and searching algorithms"
                }
                .to_string(),
                "Revise OOP concepts: Inheritance, Polymorphism, Encapsulation".to_string(),
                "Study DBMS fundamentals: Normalization, ACID, Joins".to_string(),
                "Review OS concepts: Processes, Threads, Deadlocks, Memory Management".to_string(),
                "Understand networking basics: TCP/IP, HTTP, DNS".to_string(),
                "Solve 50+ coding problems on LeetCode/HackerRank".to_string(),
                "Focus on time and space complexity analysis".to_string(),
            ],
        },
        ChecklistRound {
            round: 3,
            title: "Technical Interview (Stack-Specific)".to_string(),
            items: round3_items,
        },
        ChecklistRound {
            round: 4,
            title: "Managerial & HR".to_string(),
            items: [
                "Prepare your \"Tell me about yourself\" pitch (2-min version)",
                "List your strengths and weaknesses with real examples",
                "Prepare answers for behavioral questions (STAR method)",
                "Research the company: products, culture, recent news",
                "Prepare questions to ask the interviewer",
                "Practice mock HR interviews with peers",
                "Be ready to discuss salary expectations and career goals",
            ]
            .map(String::from)
            .to_vec(),
        },
    ]
}

/// Generate the 7-day study plan. The primary language and web technology
/// are taken from the first detected entry of their categories.
pub fn generate_7_day_plan(skills: &SkillSet) -> Vec<PlanDay> {
    let primary_lang = skills
        .get(SkillCategory::Languages)
        .first()
        .map(String::as_str)
        .unwrap_or("your preferred language");
    let web_tech = skills
        .get(SkillCategory::Web)
        .first()
        .map(String::as_str)
        .unwrap_or("web development");
    let has_web = skills.has(SkillCategory::Web);

    vec![
        PlanDay {
            day: 1,
            title: "Basics & Core CS".to_string(),
            tasks: vec![
                "Revise OOP principles with code examples".to_string(),
                "Study DBMS normalization and transactions".to_string(),
                format!("Write basic {} programs to warm up", primary_lang),
                "Solve 5 easy array/string problems".to_string(),
            ],
        },
        PlanDay {
            day: 2,
            title: "Core CS Deep Dive".to_string(),
            tasks: [
                "OS concepts: Process scheduling, deadlocks",
                "Networking: TCP/IP, HTTP/HTTPS differences",
                "DBMS: Practice SQL joins and subqueries",
                "Solve 5 medium DSA problems",
            ]
            .map(String::from)
            .to_vec(),
        },
        PlanDay {
            day: 3,
            title: "DSA Focus - Part 1".to_string(),
            tasks: [
                "Trees and Graphs: BFS, DFS, Traversals",
                "Practice 5-7 tree/graph problems",
                "Review recursion and backtracking",
                "Time complexity analysis practice",
            ]
            .map(String::from)
            .to_vec(),
        },
        PlanDay {
            day: 4,
            title: "DSA Focus - Part 2".to_string(),
            tasks: [
                "Dynamic Programming: Top patterns (knapsack, LIS, LCS)",
                "Solve 5 DP problems from easy to medium",
                "Practice sliding window and two-pointer technique",
                "Review sorting algorithms and their complexities",
            ]
            .map(String::from)
            .to_vec(),
        },
        PlanDay {
            day: 5,
            title: "Stack-Specific & Projects".to_string(),
            tasks: vec![
                if has_web {
                    format!("Build a small {} demo (TODO app or dashboard)", web_tech)
                } else {
                    "Work on a mini project in your domain".to_string()
                },
                format!("Revise {} advanced concepts", primary_lang),
                "Practice explaining your projects clearly".to_string(),
                "Update resume with recent work".to_string(),
            ],
        },
        PlanDay {
            day: 6,
            title: "Mock Interviews".to_string(),
            tasks: [
                "Take 2 coding mock interviews (friends/online)",
                "Practice system design questions (URL shortener, LRU cache)",
                "Prepare answers for HR questions",
                "Research target companies thoroughly",
            ]
            .map(String::from)
            .to_vec(),
        },
        PlanDay {
            day: 7,
            title: "Revision & Weak Areas".to_string(),
            tasks: [
                "Revise topics you struggled with",
                "Solve 10 random problems from different topics",
                "Review notes and important formulas",
                "Relax, sleep well, and stay confident!",
            ]
            .map(String::from)
            .to_vec(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_with(category: SkillCategory, labels: &[&str]) -> SkillSet {
        let mut skills = SkillSet::new();
        for label in labels {
            skills.push(category, label.to_string());
        }
        skills
    }

    #[test]
    fn test_checklist_has_four_fixed_rounds() {
        let checklist = generate_roundwise_checklist(&SkillSet::new());

        assert_eq!(checklist.len(), 4);
        assert_eq!(checklist[0].title, "Aptitude & Basics");
        assert_eq!(checklist[1].title, "DSA & Core CS Fundamentals");
        assert_eq!(checklist[2].title, "Technical Interview (Stack-Specific)");
        assert_eq!(checklist[3].title, "Managerial & HR");
        assert_eq!(checklist[2].items.len(), 8);
    }

    #[test]
    fn test_core_cs_toggles_dsa_phrasing() {
        let with = generate_roundwise_checklist(&skills_with(SkillCategory::CoreCs, &["Dsa"]));
        let without = generate_roundwise_checklist(&SkillSet::new());

        assert!(with[1].items[0].starts_with("Master data structures"));
        assert!(without[1].items[0].starts_with("Learn basic data structures"));
        assert!(with[1].items[1].starts_with("Practice algorithmic paradigms"));
        assert!(without[1].items[1].starts_with("Understand sorting"));
    }

    #[test]
    fn test_stack_round_substitutes_detected_labels() {
        let mut skills = SkillSet::new();
        skills.push(SkillCategory::Languages, "Java".to_string());
        skills.push(SkillCategory::Languages, "Python".to_string());
        skills.push(SkillCategory::Languages, "Rust".to_string());
        skills.push(SkillCategory::Web, "React".to_string());

        let checklist = generate_roundwise_checklist(&skills);
        let round3 = &checklist[2];

        // Only the first two languages are mentioned.
        assert_eq!(
            round3.items[0],
            "Deep dive into Java and Python: syntax, best practices, frameworks"
        );
        assert_eq!(round3.items[1], "Study web technologies: React");
        assert_eq!(round3.items[2], "Understand SQL basics and query optimization");
        assert_eq!(round3.items[3], "Familiarize with cloud concepts if relevant");
    }

    #[test]
    fn test_plan_has_seven_days() {
        let plan = generate_7_day_plan(&SkillSet::new());

        assert_eq!(plan.len(), 7);
        for (index, day) in plan.iter().enumerate() {
            assert_eq!(day.day as usize, index + 1);
            assert_eq!(day.tasks.len(), 4);
        }
    }

    #[test]
    fn test_plan_substitutes_primary_language_and_web_tech() {
        let mut skills = SkillSet::new();
        skills.push(SkillCategory::Languages, "Python".to_string());
        skills.push(SkillCategory::Web, "React".to_string());

        let plan = generate_7_day_plan(&skills);

        assert_eq!(plan[0].tasks[2], "Write basic Python programs to warm up");
        assert_eq!(plan[4].tasks[0], "Build a small React demo (TODO app or dashboard)");
        assert_eq!(plan[4].tasks[1], "Revise Python advanced concepts");
    }

    #[test]
    fn test_plan_generic_placeholders_without_detections() {
        let plan = generate_7_day_plan(&SkillSet::new());

        assert_eq!(
            plan[0].tasks[2],
            "Write basic your preferred language programs to warm up"
        );
        assert_eq!(plan[4].tasks[0], "Work on a mini project in your domain");
    }
}
