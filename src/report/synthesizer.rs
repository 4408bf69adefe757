//! Profile to report. Pure and deterministic: the same profile, gap analysis
//! and options always yield the same report.

use super::{
    CategorySkills, ConceptExplanation, EvidenceRef, InterviewItem, JobFit, LearningReport, NextStep,
    PracticalExample, ReportSummary, SkillsSummary,
};
use crate::aggregation::{Evidence, ProjectProfile};
use crate::knowledge::{ConceptRecord, KnowledgeBase, SkillCategory, ADVANCED_TOPICS};
use crate::patterns::GapAnalysis;

/// Evidence references listed per concept or pattern.
const EVIDENCE_SHOWN: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub max_next_steps: usize,
    pub include_interview_questions: bool,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            max_next_steps: crate::config::default_max_next_steps(),
            include_interview_questions: true,
        }
    }
}

pub fn synthesize(
    profile: &ProjectProfile,
    kb: &KnowledgeBase,
    gaps: &GapAnalysis,
    options: &SynthesisOptions,
) -> LearningReport {
    let concepts = matched_concepts(profile, kb);

    LearningReport {
        summary: summarize(profile),
        skipped_files: profile.skipped.iter().cloned().collect(),
        concepts: concepts
            .iter()
            .map(|(record, evidence)| explain(record, evidence))
            .collect(),
        practical_examples: practical_examples(profile),
        interview: if options.include_interview_questions {
            interview(&concepts, profile)
        } else {
            Vec::new()
        },
        next_steps: next_steps(profile, gaps, options.max_next_steps),
        unmatched_requirements: gaps.gaps().map(|g| g.requirement.clone()).collect(),
        job_fit: job_fit(gaps),
        skills_summary: skills_summary(profile, &concepts),
    }
}

/// Matched concepts in taxonomy order, then by key. Keys without a record
/// are dropped; they cannot come from the built-in tables.
fn matched_concepts<'p>(
    profile: &'p ProjectProfile,
    kb: &KnowledgeBase,
) -> Vec<(&'static ConceptRecord, &'p Evidence)> {
    let mut matched: Vec<_> = profile
        .concepts
        .iter()
        .filter(|(_, evidence)| !evidence.is_empty())
        .filter_map(|(key, evidence)| match kb.resolve(key) {
            Ok(record) => Some((record, evidence)),
            Err(err) => {
                log::debug!("{err}");
                None
            }
        })
        .collect();
    matched.sort_by_key(|(record, _)| (record.category, record.key));
    matched
}

fn summarize(profile: &ProjectProfile) -> ReportSummary {
    let counts = &profile.counts;
    ReportSummary {
        files_analyzed: counts.files_analyzed,
        files_skipped: profile.files_skipped(),
        files_degraded: counts.files_degraded,
        classes: counts.classes,
        functions: counts.functions,
        methods: counts.methods,
        imports: counts.imports,
        modules: profile.modules.len(),
        concepts: profile.concepts.len(),
        patterns: profile.patterns.len(),
    }
}

fn evidence_refs(evidence: &Evidence) -> Vec<EvidenceRef> {
    evidence.iter().take(EVIDENCE_SHOWN).map(EvidenceRef::from).collect()
}

fn explain(record: &ConceptRecord, evidence: &Evidence) -> ConceptExplanation {
    // Callers filter out empty evidence sets.
    let usage = evidence
        .first()
        .map(|fact| record.render_usage(fact))
        .unwrap_or_default();

    ConceptExplanation {
        key: record.key.to_string(),
        name: record.name.to_string(),
        category: record.category,
        definition: record.definition.to_string(),
        usage,
        technical_details: record.technical_details.to_string(),
        evidence: evidence_refs(evidence),
        evidence_count: evidence.len(),
    }
}

fn practical_examples(profile: &ProjectProfile) -> Vec<PracticalExample> {
    profile
        .patterns
        .iter()
        .filter(|(_, evidence)| !evidence.is_empty())
        .map(|(tag, evidence)| {
            let info = tag.info();
            PracticalExample {
                tag: *tag,
                name: info.name.to_string(),
                category: info.category,
                description: info.description.to_string(),
                concept: info.concept.to_string(),
                example: info.example.to_string(),
                evidence: evidence_refs(evidence),
                evidence_count: evidence.len(),
            }
        })
        .collect()
}

fn interview(
    concepts: &[(&'static ConceptRecord, &Evidence)],
    profile: &ProjectProfile,
) -> Vec<InterviewItem> {
    let mut items: Vec<InterviewItem> = concepts
        .iter()
        .filter_map(|(record, evidence)| {
            let fact = evidence.first()?;
            let cited = EvidenceRef::from(fact);
            Some(InterviewItem {
                question: record.interview_question.to_string(),
                answer: format!("{} (See {cited}.)", record.render_answer(fact)),
                technical_details: record.technical_details.to_string(),
                concept: Some(record.key.to_string()),
                cited: Some(cited),
            })
        })
        .collect();

    items.extend(general_questions(profile, concepts));
    items
}

fn general_questions(
    profile: &ProjectProfile,
    concepts: &[(&'static ConceptRecord, &Evidence)],
) -> [InterviewItem; 2] {
    let counts = &profile.counts;
    let areas = covered_categories(concepts);
    let scope = if areas.is_empty() {
        "Python scripting".to_string()
    } else {
        list_phrase(&areas.iter().map(|c| c.label()).collect::<Vec<_>>())
    };

    [
        InterviewItem {
            question: "Tell me about a complex project you've built.".to_string(),
            answer: format!(
                "I built a Python codebase of {} {} with {} {}, {} {} and {} {}, \
                 combining {scope}. I split it into modules with clear responsibilities \
                 so each part could be developed and debugged on its own.",
                counts.files_analyzed,
                plural(counts.files_analyzed, "file", "files"),
                counts.classes,
                plural(counts.classes, "class", "classes"),
                counts.functions,
                plural(counts.functions, "function", "functions"),
                counts.methods,
                plural(counts.methods, "method", "methods"),
            ),
            technical_details:
                "Multi-file architecture, modular design, error handling and user experience"
                    .to_string(),
            concept: None,
            cited: None,
        },
        InterviewItem {
            question: "How do you approach learning new technologies?".to_string(),
            answer: format!(
                "I learn by building real tools that solve problems I actually have. \
                 Working with {} {} taught me more than tutorials alone, and I review \
                 my own code to find the concepts I should study next.",
                profile.modules.len(),
                plural(profile.modules.len(), "library", "libraries"),
            ),
            technical_details:
                "Project-based learning, documentation, iterative development".to_string(),
            concept: None,
            cited: None,
        },
    ]
}

/// Advanced topics not yet shown by the project; topics the job asks for
/// come first, each group in priority order.
fn next_steps(profile: &ProjectProfile, gaps: &GapAnalysis, limit: usize) -> Vec<NextStep> {
    let promoted = gaps.promoted_topics();
    let (demanded, rest): (Vec<_>, Vec<_>) = ADVANCED_TOPICS
        .iter()
        .filter(|topic| !profile.concepts.contains_key(topic.concept))
        .partition(|topic| promoted.contains(&topic.topic));

    demanded
        .into_iter()
        .chain(rest)
        .take(limit)
        .map(|topic| NextStep {
            topic: topic.topic.to_string(),
            description: topic.description.to_string(),
            why_useful: topic.why_useful.to_string(),
            next_project: topic.next_project.to_string(),
            requested_by: gaps.requested_by(topic.topic),
            time_estimate: gaps.time_estimate(topic.topic).map(String::from),
        })
        .collect()
}

fn job_fit(gaps: &GapAnalysis) -> Option<JobFit> {
    let match_score = gaps.match_score()?;
    let readiness = gaps.readiness()?;
    Some(JobFit {
        requirements: gaps.requirements.len(),
        covered: gaps.covered().count(),
        match_score,
        readiness,
        timeline: readiness.timeline().to_string(),
    })
}

fn skills_summary(
    profile: &ProjectProfile,
    concepts: &[(&'static ConceptRecord, &Evidence)],
) -> SkillsSummary {
    let categories: Vec<CategorySkills> = SkillCategory::ALL
        .iter()
        .map(|category| CategorySkills {
            category: *category,
            concepts: concepts
                .iter()
                .filter(|(record, _)| record.category == *category)
                .map(|(record, _)| record.name.to_string())
                .collect(),
            patterns: profile
                .patterns
                .keys()
                .filter(|tag| tag.category() == *category)
                .map(|tag| tag.name().to_string())
                .collect(),
        })
        .filter(|skills| skills.all_skills().next().is_some())
        .collect();

    let labels: Vec<&str> = categories.iter().map(|c| c.category.label()).collect();
    let files = profile.counts.files_analyzed;
    let headline = if labels.is_empty() {
        format!(
            "Python developer building foundations across {files} {}",
            plural(files, "file", "files")
        )
    } else {
        format!(
            "Python developer with hands-on {} experience across {files} {}",
            list_phrase(&labels),
            plural(files, "file", "files")
        )
    };

    SkillsSummary {
        headline,
        categories,
        technologies: profile.modules.iter().cloned().collect(),
    }
}

fn covered_categories(concepts: &[(&'static ConceptRecord, &Evidence)]) -> Vec<SkillCategory> {
    SkillCategory::ALL
        .iter()
        .copied()
        .filter(|category| concepts.iter().any(|(r, _)| r.category == *category))
        .collect()
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// `a`, `a and b`, `a, b and c`
fn list_phrase(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
