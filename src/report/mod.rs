//! The learning report: the one artifact a run produces.
//!
//! Sections, in order: summary, skipped files, concepts, practical examples,
//! interview Q&A, next learning steps, unmatched requirements, skills
//! summary. Plain data; writers in [`crate::io::output`] render it.

pub mod synthesizer;

pub use synthesizer::{synthesize, SynthesisOptions};

use crate::aggregation::SkippedFile;
use crate::core::StructuralFact;
use crate::knowledge::SkillCategory;
use crate::patterns::{PatternTag, Readiness};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningReport {
    pub summary: ReportSummary,
    pub skipped_files: Vec<SkippedFile>,
    pub concepts: Vec<ConceptExplanation>,
    pub practical_examples: Vec<PracticalExample>,
    pub interview: Vec<InterviewItem>,
    pub next_steps: Vec<NextStep>,
    pub unmatched_requirements: Vec<String>,
    /// Present only when job requirements were supplied.
    pub job_fit: Option<JobFit>,
    pub skills_summary: SkillsSummary,
}

/// How well the project covers the supplied job requirements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFit {
    pub requirements: usize,
    pub covered: usize,
    /// Covered share in percent, rounded down.
    pub match_score: u32,
    pub readiness: Readiness,
    pub timeline: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub files_analyzed: usize,
    pub files_skipped: usize,
    pub files_degraded: usize,
    pub classes: usize,
    pub functions: usize,
    pub methods: usize,
    pub imports: usize,
    pub modules: usize,
    pub concepts: usize,
    pub patterns: usize,
}

/// Where a concept or pattern was seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRef {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub description: String,
}

impl From<&StructuralFact> for EvidenceRef {
    fn from(fact: &StructuralFact) -> Self {
        Self {
            file: fact.file.clone(),
            line: fact.line,
            column: fact.column,
            description: fact.describe(),
        }
    }
}

impl fmt::Display for EvidenceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file.display(), self.line, self.description)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptExplanation {
    pub key: String,
    pub name: String,
    pub category: SkillCategory,
    pub definition: String,
    /// Usage template rendered with the first piece of evidence.
    pub usage: String,
    pub technical_details: String,
    pub evidence: Vec<EvidenceRef>,
    /// Total evidence, which may exceed the references listed.
    pub evidence_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticalExample {
    pub tag: PatternTag,
    pub name: String,
    pub category: SkillCategory,
    pub description: String,
    pub concept: String,
    pub example: String,
    pub evidence: Vec<EvidenceRef>,
    pub evidence_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewItem {
    pub question: String,
    pub answer: String,
    pub technical_details: String,
    /// Concept the question is about; None for the general questions.
    pub concept: Option<String>,
    pub cited: Option<EvidenceRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub topic: String,
    pub description: String,
    pub why_useful: String,
    pub next_project: String,
    /// Job requirements that asked for this topic.
    pub requested_by: Vec<String>,
    /// Learning time for a requested topic.
    pub time_estimate: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsSummary {
    pub headline: String,
    /// Non-empty categories in taxonomy order.
    pub categories: Vec<CategorySkills>,
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySkills {
    pub category: SkillCategory,
    pub concepts: Vec<String>,
    pub patterns: Vec<String>,
}

impl CategorySkills {
    pub fn all_skills(&self) -> impl Iterator<Item = &String> {
        self.concepts.iter().chain(self.patterns.iter())
    }
}

impl LearningReport {
    /// Flat ordered key/value pairs, e.g. for pasting into a resume tool.
    pub fn to_key_values(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut push = |key: String, value: String| pairs.push((key, value));

        let s = &self.summary;
        for (key, value) in [
            ("files_analyzed", s.files_analyzed),
            ("files_skipped", s.files_skipped),
            ("files_degraded", s.files_degraded),
            ("classes", s.classes),
            ("functions", s.functions),
            ("methods", s.methods),
            ("imports", s.imports),
            ("modules", s.modules),
        ] {
            push(format!("summary.{key}"), value.to_string());
        }

        push(
            "skills.headline".to_string(),
            self.skills_summary.headline.clone(),
        );
        for category in &self.skills_summary.categories {
            push(
                format!("skills.{}", category_key(category.category)),
                join(category.all_skills()),
            );
        }
        push(
            "skills.technologies".to_string(),
            join(self.skills_summary.technologies.iter()),
        );
        push(
            "concepts".to_string(),
            join(self.concepts.iter().map(|c| &c.name)),
        );
        push(
            "patterns".to_string(),
            join(self.practical_examples.iter().map(|p| &p.name)),
        );

        for (index, item) in self.interview.iter().enumerate() {
            push(format!("interview.{}.question", index + 1), item.question.clone());
            push(format!("interview.{}.answer", index + 1), item.answer.clone());
        }
        for (index, step) in self.next_steps.iter().enumerate() {
            push(format!("next_steps.{}", index + 1), step.topic.clone());
        }
        if let Some(fit) = &self.job_fit {
            push("job_fit.match_score".to_string(), fit.match_score.to_string());
            push("job_fit.readiness".to_string(), fit.timeline.clone());
        }
        if !self.unmatched_requirements.is_empty() {
            push(
                "requirements.unmatched".to_string(),
                join(self.unmatched_requirements.iter()),
            );
        }

        pairs
    }
}

fn category_key(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Gui => "gui",
        SkillCategory::Networking => "networking",
        SkillCategory::Concurrency => "concurrency",
        SkillCategory::DataProcessing => "data_processing",
        SkillCategory::Architecture => "architecture",
    }
}

fn join<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.map(String::as_str).collect::<Vec<_>>().join(", ")
}
