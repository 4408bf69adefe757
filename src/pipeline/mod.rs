//! The analysis pipeline.
//!
//! Pass 1 reads, parses and extracts each file independently (in parallel
//! when enabled) and evaluates file-scope rules. The per-file results are
//! folded into one [`ProjectProfile`]. Pass 2 evaluates project-scope rules
//! over the union of all facts, ordered by file path then source position.
//! Synthesis turns the finished profile into a [`LearningReport`].

use crate::aggregation::{FileAnalysis, ProjectProfile, SkippedFile};
use crate::analyzers::{analyze_file, fallback, get_analyzer, Analyzer};
use crate::config::{self, CoachConfig};
use crate::core::{AnalysisError, FileError, Language, SourceFile, StructuralFact};
use crate::io::walker::discover_files;
use crate::knowledge::KnowledgeBase;
use crate::observability::{
    increment_processed, set_current_file, set_phase, set_progress, AnalysisPhase,
};
use crate::patterns::{detect_gaps, PatternRecognizer};
use crate::report::{synthesize, LearningReport, SynthesisOptions};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything `analyze` needs besides the paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub max_next_steps: usize,
    pub include_interview_questions: bool,
    pub skip_unparseable: bool,
    pub max_depth: usize,
    pub max_file_bytes: u64,
    pub parallel: bool,
    pub ignore_patterns: Vec<String>,
    /// Job requirement keywords; opaque strings.
    pub required_skills: BTreeSet<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::from(&CoachConfig::default())
    }
}

impl From<&CoachConfig> for AnalysisOptions {
    fn from(config: &CoachConfig) -> Self {
        let analysis = config.analysis.clone().normalized();
        Self {
            max_next_steps: analysis.max_next_steps,
            include_interview_questions: analysis.include_interview_questions,
            skip_unparseable: analysis.skip_unparseable,
            max_depth: analysis.max_depth,
            max_file_bytes: analysis.max_file_bytes,
            parallel: analysis.parallel,
            ignore_patterns: config.ignore.patterns.clone(),
            required_skills: BTreeSet::new(),
        }
    }
}

impl AnalysisOptions {
    fn synthesis(&self) -> SynthesisOptions {
        SynthesisOptions {
            max_next_steps: self.max_next_steps.clamp(1, config::MAX_NEXT_STEPS_LIMIT),
            include_interview_questions: self.include_interview_questions,
        }
    }
}

/// Analyze Python files under `paths` and produce a learning report.
///
/// Files that cannot be read or parsed are recorded as skipped; only a run
/// with no eligible files at all fails.
pub fn analyze(paths: &[PathBuf], options: &AnalysisOptions) -> Result<LearningReport, AnalysisError> {
    let span = tracing::info_span!("analyze", paths = paths.len());
    let _enter = span.enter();

    let profile = build_profile(paths, options)?;
    Ok(report_for(&profile, options))
}

/// Pure synthesis step, exposed so a profile can be re-rendered.
pub fn report_for(profile: &ProjectProfile, options: &AnalysisOptions) -> LearningReport {
    let _phase = set_phase(AnalysisPhase::Synthesis);
    let gaps = detect_gaps(profile, &options.required_skills);
    synthesize(profile, KnowledgeBase::builtin(), &gaps, &options.synthesis())
}

pub fn build_profile(
    paths: &[PathBuf],
    options: &AnalysisOptions,
) -> Result<ProjectProfile, AnalysisError> {
    let files = {
        let _phase = set_phase(AnalysisPhase::FileDiscovery);
        discover_files(paths, &options.ignore_patterns)?
    };
    if files.is_empty() {
        return Err(AnalysisError::NoAnalyzableFiles {
            searched: paths.to_vec(),
        });
    }
    tracing::info!(files = files.len(), "discovered files");

    let analyzer = get_analyzer(Language::Python, options.max_depth)?;
    let kb = KnowledgeBase::builtin();
    let recognizer = PatternRecognizer::builtin();

    set_progress(0, files.len());
    let outcomes: Vec<Result<FileAnalysis, FileError>> = if options.parallel {
        files
            .par_iter()
            .map(|path| process_file(path, analyzer.as_ref(), kb, recognizer, options))
            .collect()
    } else {
        files
            .iter()
            .map(|path| process_file(path, analyzer.as_ref(), kb, recognizer, options))
            .collect()
    };

    let mut profile = {
        let _phase = set_phase(AnalysisPhase::Aggregation);
        ProjectProfile::fold(outcomes.iter().map(|outcome| match outcome {
            Ok(analysis) => ProjectProfile::from_file(analysis),
            Err(err) => {
                log::warn!("Skipping {}: {err}", err.path().display());
                ProjectProfile::from_skipped(SkippedFile::from(err))
            }
        }))
    };

    {
        let _phase = set_phase(AnalysisPhase::PatternRecognition);
        let mut all_facts: Vec<StructuralFact> = outcomes
            .iter()
            .flatten()
            .flat_map(|analysis| analysis.facts.facts.iter().cloned())
            .collect();
        all_facts.sort();
        profile.record_patterns(recognizer.recognize_project(&all_facts));
    }

    tracing::info!(
        analyzed = profile.counts.files_analyzed,
        skipped = profile.files_skipped(),
        concepts = profile.concepts.len(),
        patterns = profile.patterns.len(),
        "analysis complete"
    );
    Ok(profile)
}

fn process_file(
    path: &Path,
    analyzer: &dyn Analyzer,
    kb: &KnowledgeBase,
    recognizer: &PatternRecognizer,
    options: &AnalysisOptions,
) -> Result<FileAnalysis, FileError> {
    let _phase = set_phase(AnalysisPhase::Extraction);
    let _file = set_current_file(path);

    let source = read_source(path, options.max_file_bytes)?;
    let facts = match analyze_file(&source, analyzer) {
        Ok(facts) => facts,
        Err(err) if err.is_parse_error() && !options.skip_unparseable => {
            log::info!("{err}; recovering imports lexically");
            fallback::recover_imports(path, &source.content)
        }
        Err(err) => return Err(err),
    };
    increment_processed();
    log::debug!("{}: {} facts", path.display(), facts.facts.len());

    Ok(FileAnalysis::new(facts, kb, recognizer))
}

fn read_source(path: &Path, max_bytes: u64) -> Result<SourceFile, FileError> {
    let unreadable = |source| FileError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let size = fs::metadata(path).map_err(unreadable)?.len();
    if size > max_bytes {
        return Err(FileError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_bytes,
        });
    }
    let content = fs::read_to_string(path).map_err(unreadable)?;
    Ok(SourceFile::new(path, content))
}
