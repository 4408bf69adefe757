use crate::report::{EvidenceRef, LearningReport};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Markdown,
    Json,
    Resume,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &LearningReport) -> anyhow::Result<()>;
}

/// Pretty JSON bytes; the persisted form of a report.
pub fn serialize(report: &LearningReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report)?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        self.writer.write_all(&serialize(report)?)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// `key: value` lines from [`LearningReport::to_key_values`].
pub struct ResumeWriter<W: Write> {
    writer: W,
}

impl<W: Write> ResumeWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for ResumeWriter<W> {
    fn write_report(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        for (key, value) in report.to_key_values() {
            // Keep one pair per line even for multi-line answers.
            writeln!(self.writer, "{key}: {}", value.replace('\n', " "))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_concepts(report)?;
        self.write_examples(report)?;
        self.write_interview(report)?;
        self.write_next_steps(report)?;
        self.write_skills(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_summary(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        let s = &report.summary;
        writeln!(self.writer, "# Learning Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        for (metric, value) in [
            ("Files analyzed", s.files_analyzed),
            ("Files skipped", s.files_skipped),
            ("Files recovered from syntax errors", s.files_degraded),
            ("Classes", s.classes),
            ("Functions", s.functions),
            ("Methods", s.methods),
            ("Imports", s.imports),
            ("Distinct modules", s.modules),
        ] {
            writeln!(self.writer, "| {metric} | {value} |")?;
        }
        writeln!(self.writer)?;

        if !report.skipped_files.is_empty() {
            writeln!(self.writer, "{} files skipped:", report.skipped_files.len())?;
            writeln!(self.writer)?;
            for skipped in &report.skipped_files {
                writeln!(
                    self.writer,
                    "- `{}`: {}",
                    skipped.path.display(),
                    skipped.reason
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_concepts(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Concepts Learned")?;
        writeln!(self.writer)?;
        if report.concepts.is_empty() {
            writeln!(self.writer, "No mapped concepts were found.")?;
            writeln!(self.writer)?;
        }
        for concept in &report.concepts {
            writeln!(self.writer, "### {} ({})", concept.name, concept.category)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", concept.definition)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**In your code:** {}", concept.usage)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**Technical details:** {}", concept.technical_details)?;
            writeln!(self.writer)?;
            self.write_evidence(&concept.evidence, concept.evidence_count)?;
        }
        Ok(())
    }

    fn write_examples(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        if report.practical_examples.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Practical Examples")?;
        writeln!(self.writer)?;
        for example in &report.practical_examples {
            writeln!(self.writer, "### {}", example.name)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", example.description)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "```python")?;
            writeln!(self.writer, "{}", example.example)?;
            writeln!(self.writer, "```")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**Study:** {}", example.concept)?;
            writeln!(self.writer)?;
            self.write_evidence(&example.evidence, example.evidence_count)?;
        }
        Ok(())
    }

    fn write_evidence(&mut self, evidence: &[EvidenceRef], total: usize) -> anyhow::Result<()> {
        writeln!(self.writer, "Evidence:")?;
        for item in evidence {
            writeln!(self.writer, "- `{item}`")?;
        }
        if total > evidence.len() {
            writeln!(self.writer, "- and {} more", total - evidence.len())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_interview(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        if report.interview.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Interview Preparation")?;
        writeln!(self.writer)?;
        for (index, item) in report.interview.iter().enumerate() {
            writeln!(self.writer, "**Q{}: {}**", index + 1, item.question)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", item.answer)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "_Technical details: {}_", item.technical_details)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_next_steps(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Next Learning Steps")?;
        writeln!(self.writer)?;
        for (index, step) in report.next_steps.iter().enumerate() {
            writeln!(self.writer, "{}. **{}**: {}", index + 1, step.topic, step.description)?;
            writeln!(self.writer, "   - Why: {}", step.why_useful)?;
            writeln!(self.writer, "   - Project: {}", step.next_project)?;
            if !step.requested_by.is_empty() {
                writeln!(
                    self.writer,
                    "   - Requested by: {}",
                    step.requested_by.join(", ")
                )?;
            }
            if let Some(estimate) = &step.time_estimate {
                writeln!(self.writer, "   - Time to proficiency: {estimate}")?;
            }
        }
        writeln!(self.writer)?;

        if let Some(fit) = &report.job_fit {
            writeln!(
                self.writer,
                "**Job fit**: {}% ({} of {} requirements shown). {}",
                fit.match_score, fit.covered, fit.requirements, fit.timeline
            )?;
            writeln!(self.writer)?;
        }

        if !report.unmatched_requirements.is_empty() {
            writeln!(self.writer, "Requirements not yet shown in your code:")?;
            writeln!(self.writer)?;
            for requirement in &report.unmatched_requirements {
                writeln!(self.writer, "- {requirement}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_skills(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        let skills = &report.skills_summary;
        writeln!(self.writer, "## Skills Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", skills.headline)?;
        writeln!(self.writer)?;
        for category in &skills.categories {
            let names: Vec<&str> = category.all_skills().map(String::as_str).collect();
            writeln!(self.writer, "- **{}**: {}", category.category, names.join(", "))?;
        }
        if !skills.technologies.is_empty() {
            writeln!(
                self.writer,
                "- **Technologies**: {}",
                skills.technologies.join(", ")
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    style: Style,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer,
            style: Style { color },
        }
    }
}

#[derive(Clone, Copy)]
struct Style {
    color: bool,
}

impl Style {
    fn paint(self, text: &str, styled: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            styled(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(self, text: &str) -> String {
        self.paint(text, |t| t.bold().blue())
    }

    fn emphasis(self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn warn(self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        self.print_summary(report)?;
        self.print_concepts(report)?;
        self.print_examples(report)?;
        self.print_interview(report)?;
        self.print_next_steps(report)?;
        self.print_skills(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_summary(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        let s = &report.summary;
        writeln!(self.writer, "{}", self.style.heading("Learning Report"))?;
        writeln!(self.writer, "{}", self.style.heading("==============="))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  Files analyzed: {}  Classes: {}  Functions: {}  Methods: {}",
            s.files_analyzed, s.classes, s.functions, s.methods
        )?;
        writeln!(
            self.writer,
            "  Imports: {} ({} distinct modules)",
            s.imports, s.modules
        )?;
        if s.files_degraded > 0 {
            let line = format!(
                "  {} files had syntax errors; only their imports were used",
                s.files_degraded
            );
            writeln!(self.writer, "{}", self.style.warn(&line))?;
        }
        if !report.skipped_files.is_empty() {
            let line = format!("  {} files skipped", report.skipped_files.len());
            writeln!(self.writer, "{}", self.style.warn(&line))?;
            for skipped in &report.skipped_files {
                writeln!(
                    self.writer,
                    "    {} ({})",
                    skipped.path.display(),
                    skipped.reason
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_concepts(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.style.heading("Concepts Learned"))?;
        if report.concepts.is_empty() {
            writeln!(self.writer, "  No mapped concepts were found.")?;
        }
        for concept in &report.concepts {
            writeln!(
                self.writer,
                "  {} {}",
                self.style.emphasis(&concept.name),
                self.style.dim(&format!("[{}]", concept.category))
            )?;
            writeln!(self.writer, "    {}", concept.definition)?;
            writeln!(self.writer, "    {}", concept.usage)?;
            if let Some(first) = concept.evidence.first() {
                writeln!(self.writer, "    {}", self.style.dim(&format!("at {first}")))?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_examples(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        if report.practical_examples.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", self.style.heading("Patterns In Your Code"))?;
        for example in &report.practical_examples {
            writeln!(self.writer, "  {}", self.style.emphasis(&example.name))?;
            writeln!(self.writer, "    {}", example.description)?;
            for line in example.example.lines() {
                writeln!(self.writer, "      {}", self.style.dim(line))?;
            }
            for evidence in &example.evidence {
                writeln!(self.writer, "    {}", self.style.dim(&format!("at {evidence}")))?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_interview(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        if report.interview.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", self.style.heading("Interview Preparation"))?;
        for (index, item) in report.interview.iter().enumerate() {
            let question = format!("Q{}: {}", index + 1, item.question);
            writeln!(self.writer, "  {}", self.style.emphasis(&question))?;
            writeln!(self.writer, "    {}", item.answer)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_next_steps(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.style.heading("Next Learning Steps"))?;
        for (index, step) in report.next_steps.iter().enumerate() {
            let title = format!("{}. {}", index + 1, step.topic);
            writeln!(self.writer, "  {}: {}", self.style.emphasis(&title), step.description)?;
            writeln!(self.writer, "     Project: {}", step.next_project)?;
            if !step.requested_by.is_empty() {
                let requested = format!("requested by: {}", step.requested_by.join(", "));
                writeln!(self.writer, "     {}", self.style.warn(&requested))?;
            }
            if let Some(estimate) = &step.time_estimate {
                writeln!(self.writer, "     Time to proficiency: {estimate}")?;
            }
        }
        if let Some(fit) = &report.job_fit {
            let line = format!(
                "  Job fit: {}% ({} of {} requirements shown), {}",
                fit.match_score, fit.covered, fit.requirements, fit.timeline
            );
            writeln!(self.writer, "{}", self.style.emphasis(&line))?;
        }
        if !report.unmatched_requirements.is_empty() {
            let line = format!(
                "  Not yet shown in your code: {}",
                report.unmatched_requirements.join(", ")
            );
            writeln!(self.writer, "{}", self.style.warn(&line))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_skills(&mut self, report: &LearningReport) -> anyhow::Result<()> {
        let skills = &report.skills_summary;
        writeln!(self.writer, "{}", self.style.heading("Skills Summary"))?;
        writeln!(self.writer, "  {}", skills.headline)?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Area", "Skills"]);
        for category in &skills.categories {
            let names: Vec<&str> = category.all_skills().map(String::as_str).collect();
            table.add_row(vec![category.category.label().to_string(), names.join(", ")]);
        }
        if !skills.technologies.is_empty() {
            table.add_row(vec!["Technologies".to_string(), skills.technologies.join(", ")]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    color: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Resume => Box::new(ResumeWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, color)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::SkippedFile;
    use crate::knowledge::SkillCategory;
    use crate::patterns::Readiness;
    use crate::report::{
        CategorySkills, InterviewItem, JobFit, NextStep, ReportSummary, SkillsSummary,
    };

    fn sample() -> LearningReport {
        LearningReport {
            summary: ReportSummary {
                files_analyzed: 3,
                files_skipped: 1,
                ..ReportSummary::default()
            },
            skipped_files: vec![SkippedFile {
                path: "broken.py".into(),
                reason: "syntax error at line 3, column 12".into(),
            }],
            interview: vec![InterviewItem {
                question: "How do you approach learning new technologies?".into(),
                answer: "By building.".into(),
                technical_details: "Projects".into(),
                concept: None,
                cited: None,
            }],
            skills_summary: SkillsSummary {
                headline: "Python developer".into(),
                categories: vec![CategorySkills {
                    category: SkillCategory::Networking,
                    concepts: vec!["Network Integration".into()],
                    patterns: vec![],
                }],
                technologies: vec!["requests".into()],
            },
            ..LearningReport::default()
        }
    }

    fn render(format: OutputFormat, report: &LearningReport) -> String {
        let mut buffer = Vec::new();
        create_writer(format, Box::new(&mut buffer), false)
            .write_report(report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_serialize_is_json() {
        let bytes = serialize(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["summary"]["files_analyzed"], 3);
        assert_eq!(value["skipped_files"][0]["path"], "broken.py");
    }

    #[test]
    fn test_markdown_sections() {
        let text = render(OutputFormat::Markdown, &sample());
        assert!(text.starts_with("# Learning Report"));
        assert!(text.contains("1 files skipped:"));
        assert!(text.contains("## Interview Preparation"));
        assert!(text.contains("- **Networking**: Network Integration"));
        assert!(text.contains("- **Technologies**: requests"));
    }

    #[test]
    fn test_terminal_plain_has_no_escape_codes() {
        let text = render(OutputFormat::Terminal, &sample());
        assert!(text.contains("Learning Report"));
        assert!(text.contains("1 files skipped"));
        assert!(text.contains("Network Integration"));
        assert!(!text.contains('\u{1b}'));
    }

    fn with_job_fit() -> LearningReport {
        LearningReport {
            next_steps: vec![NextStep {
                topic: "Concurrency".into(),
                description: "Threads and pools".into(),
                why_useful: "Keeps work off the UI thread".into(),
                next_project: "A download manager".into(),
                requested_by: vec!["threading".into()],
                time_estimate: Some("1-2 months".into()),
            }],
            job_fit: Some(JobFit {
                requirements: 3,
                covered: 2,
                match_score: 66,
                readiness: Readiness::NearlyReady,
                timeline: Readiness::NearlyReady.timeline().into(),
            }),
            ..sample()
        }
    }

    #[test]
    fn test_job_fit_is_rendered() {
        let markdown = render(OutputFormat::Markdown, &with_job_fit());
        assert!(markdown.contains("   - Time to proficiency: 1-2 months"));
        assert!(markdown.contains(
            "**Job fit**: 66% (2 of 3 requirements shown). 1-2 months with focused learning"
        ));

        let terminal = render(OutputFormat::Terminal, &with_job_fit());
        assert!(terminal.contains("Time to proficiency: 1-2 months"));
        assert!(terminal.contains("Job fit: 66% (2 of 3 requirements shown)"));

        let resume = render(OutputFormat::Resume, &with_job_fit());
        assert!(resume.lines().any(|l| l == "job_fit.match_score: 66"));

        let plain = render(OutputFormat::Markdown, &sample());
        assert!(!plain.contains("Job fit"));
    }

    #[test]
    fn test_resume_lines() {
        let text = render(OutputFormat::Resume, &sample());
        assert!(text.lines().any(|l| l == "summary.files_analyzed: 3"));
        assert!(text.lines().any(|l| l == "skills.networking: Network Integration"));
    }
}
