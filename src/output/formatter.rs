//! Output formatters with console, JSON, and Markdown support

use crate::config::OutputFormat;
use crate::error::Result;
use crate::intel::company::{generate_company_intel, CompanyIntel};
use crate::intel::rounds::round_type_color;
use crate::model::record::{AnalysisRecord, Confidence};
use colored::{Color, Colorize};

/// Trait for rendering a saved analysis record.
pub trait OutputFormatter {
    fn format_record(&self, record: &AnalysisRecord) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and section headers.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for notes and sharing.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn score_color(score: u32) -> Color {
        if score >= 75 {
            Color::Green
        } else if score >= 50 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn confidence_marker(confidence: Option<&Confidence>) -> &'static str {
        match confidence {
            Some(Confidence::Know) => " [know]",
            Some(Confidence::Practice) => " [practice]",
            None => "",
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_record(&self, record: &AnalysisRecord) -> Result<String> {
        let intel = generate_company_intel(&record.company, &record.role);
        let mut output = String::new();

        output.push_str(&self.format_header("📊 PLACEMENT READINESS ANALYSIS"));
        if !record.id.is_empty() {
            output.push_str(&format!("Analysis ID: {}\n", record.id));
        }
        output.push_str(&format!(
            "Created: {}\n",
            record.created_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&format!("Company: {}\n", intel.company_name));
        if !record.role.is_empty() {
            output.push_str(&format!("Role: {}\n", record.role));
        }

        let score_line = format!("{}/100", record.final_score);
        output.push_str(&format!(
            "\nReadiness Score: {}",
            self.colorize(&score_line, Self::score_color(record.final_score))
        ));
        if record.final_score != record.base_score {
            output.push_str(&format!(" (base {})", record.base_score));
        }
        output.push('\n');

        output.push_str(&self.format_header("🏢 Company Intel"));
        output.push_str(&format!(
            "{} {} ({})\n",
            intel.size_info.icon, intel.size_info.label, intel.size_info.range
        ));
        output.push_str(&format!("Industry: {}\n", intel.industry));
        output.push_str(&format!("Primary focus: {}\n", intel.hiring_focus.primary));
        output.push_str(&format!(
            "Secondary focus: {}\n",
            intel.hiring_focus.secondary
        ));
        if self.detailed {
            output.push_str(&format!("{}\n", intel.hiring_focus.emphasis));
        }

        output.push_str(&self.format_header("🎯 Detected Skills"));
        for (category, labels) in record.extracted_skills.iter() {
            if labels.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "{}:\n",
                self.colorize(category.display_name(), Color::Cyan)
            ));
            for label in labels {
                let marker = Self::confidence_marker(record.skill_confidence_map.get(label));
                output.push_str(&format!("  • {}{}\n", label, marker));
            }
        }

        output.push_str(&self.format_header("🗺️  Interview Rounds"));
        for round in &record.round_mapping {
            let tag = format!("[{:?}]", round.round_type).to_lowercase();
            output.push_str(&format!(
                "{}. {} {}\n",
                round.number,
                self.bold(&round.title),
                self.colorize(&tag, round_type_color(round.round_type))
            ));
            output.push_str(&format!("   Focus: {} ({})\n", round.focus, round.duration));
            if self.detailed {
                output.push_str(&format!("   Why it matters: {}\n", round.why_it_matters));
                for tip in &round.tips {
                    output.push_str(&format!("   - {}\n", tip));
                }
            }
        }

        output.push_str(&self.format_header("✅ Preparation Checklist"));
        for round in &record.checklist {
            output.push_str(&format!("Round {}: {}\n", round.round, self.bold(&round.title)));
            for item in &round.items {
                output.push_str(&format!("  • {}\n", item));
            }
        }

        output.push_str(&self.format_header("📅 7-Day Plan"));
        for day in &record.plan_7_days {
            output.push_str(&format!("Day {}: {}\n", day.day, self.bold(&day.title)));
            for task in &day.tasks {
                output.push_str(&format!("  • {}\n", task));
            }
        }

        output.push_str(&self.format_header("❓ Interview Questions"));
        for (index, question) in record.questions.iter().enumerate() {
            output.push_str(&format!("{:2}. {}\n", index + 1, question));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, record: &AnalysisRecord) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn intel_section(intel: &CompanyIntel) -> String {
        format!(
            "## Company Intel\n\n\
             - **Size**: {} ({})\n\
             - **Industry**: {}\n\
             - **Primary focus**: {}\n\
             - **Secondary focus**: {}\n\n\
             {}\n\n",
            intel.size_info.label,
            intel.size_info.range,
            intel.industry,
            intel.hiring_focus.primary,
            intel.hiring_focus.secondary,
            intel.hiring_focus.emphasis,
        )
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_record(&self, record: &AnalysisRecord) -> Result<String> {
        let intel = generate_company_intel(&record.company, &record.role);
        let mut output = String::new();

        output.push_str("# Placement Readiness Analysis\n\n");
        output.push_str(&format!("- **Company**: {}\n", intel.company_name));
        if !record.role.is_empty() {
            output.push_str(&format!("- **Role**: {}\n", record.role));
        }
        output.push_str(&format!(
            "- **Created**: {}\n",
            record.created_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&format!(
            "- **Readiness score**: {}/100 (base {})\n\n",
            record.final_score, record.base_score
        ));

        output.push_str(&Self::intel_section(&intel));

        output.push_str("## Detected Skills\n\n");
        for (category, labels) in record.extracted_skills.iter() {
            if labels.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "- **{}**: {}\n",
                category.display_name(),
                labels.join(", ")
            ));
        }
        output.push('\n');

        output.push_str("## Interview Rounds\n\n");
        for round in &record.round_mapping {
            output.push_str(&format!(
                "### Round {}: {}\n\n\
                 - **Focus**: {}\n\
                 - **Duration**: {}\n\
                 - **Why it matters**: {}\n",
                round.number, round.title, round.focus, round.duration, round.why_it_matters
            ));
            for tip in &round.tips {
                output.push_str(&format!("- Tip: {}\n", tip));
            }
            output.push('\n');
        }

        output.push_str("## Preparation Checklist\n\n");
        for round in &record.checklist {
            output.push_str(&format!("### Round {}: {}\n\n", round.round, round.title));
            for item in &round.items {
                output.push_str(&format!("- [ ] {}\n", item));
            }
            output.push('\n');
        }

        output.push_str("## 7-Day Plan\n\n");
        for day in &record.plan_7_days {
            output.push_str(&format!("### Day {}: {}\n\n", day.day, day.title));
            for task in &day.tasks {
                output.push_str(&format!("- {}\n", task));
            }
            output.push('\n');
        }

        output.push_str("## Interview Questions\n\n");
        for (index, question) in record.questions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, question));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Coordinates the individual formatters.
pub struct ReportRenderer {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportRenderer {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(),
        }
    }

    pub fn render(&self, record: &AnalysisRecord, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_record(record),
            OutputFormat::Json => self.json_formatter.format_record(record),
            OutputFormat::Markdown => self.markdown_formatter.format_record(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::{AnalysisEngine, AnalysisRequest};

    fn sample_record() -> AnalysisRecord {
        let engine = AnalysisEngine::new().unwrap();
        engine
            .analyze(&AnalysisRequest {
                company: "Google".to_string(),
                role: "SDE Intern".to_string(),
                jd_text: "Need React and Python and SQL skills".to_string(),
            })
            .unwrap()
            .record
    }

    #[test]
    fn test_console_format_covers_sections() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_record(&sample_record()).unwrap();

        assert!(output.contains("PLACEMENT READINESS ANALYSIS"));
        assert!(output.contains("Company Intel"));
        assert!(output.contains("Detected Skills"));
        assert!(output.contains("Interview Rounds"));
        assert!(output.contains("7-Day Plan"));
        assert!(output.contains("Interview Questions"));
        assert!(output.contains("React"));
    }

    #[test]
    fn test_console_skips_empty_categories() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_record(&sample_record()).unwrap();

        // No testing skills in the sample JD.
        assert!(!output.contains("Testing:"));
    }

    #[test]
    fn test_json_format_roundtrips() {
        let record = sample_record();
        let formatter = JsonFormatter::new(true);
        let output = formatter.format_record(&record).unwrap();

        let parsed: AnalysisRecord = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_markdown_format_has_headers() {
        let formatter = MarkdownFormatter::new();
        let output = formatter.format_record(&sample_record()).unwrap();

        assert!(output.starts_with("# Placement Readiness Analysis"));
        assert!(output.contains("## Detected Skills"));
        assert!(output.contains("- [ ] "));
    }

    #[test]
    fn test_renderer_dispatch() {
        let renderer = ReportRenderer::new(false, false);
        let record = sample_record();

        assert!(renderer
            .render(&record, OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
        assert!(renderer
            .render(&record, OutputFormat::Markdown)
            .unwrap()
            .starts_with('#'));
    }
}
