//! Project-level aggregation.
//!
//! Each analyzed (or skipped) file becomes a one-file [`ProjectProfile`];
//! the run's profile is their [`ProjectProfile::merge`]. Counts add, sets
//! union, evidence sets union (deduplicated by fact identity, which includes
//! the file), so the fold is associative and commutative over files.

use crate::core::{FactKind, FileError, FileFacts, StructuralFact};
use crate::knowledge::KnowledgeBase;
use crate::patterns::{PatternMatch, PatternRecognizer, PatternTag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type Evidence = BTreeSet<StructuralFact>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCounts {
    pub files_analyzed: usize,
    pub files_degraded: usize,
    pub classes: usize,
    /// Module-level and nested functions, methods excluded.
    pub functions: usize,
    pub methods: usize,
    pub imports: usize,
}

impl ProfileCounts {
    fn add(&mut self, other: &ProfileCounts) {
        self.files_analyzed += other.files_analyzed;
        self.files_degraded += other.files_degraded;
        self.classes += other.classes;
        self.functions += other.functions;
        self.methods += other.methods;
        self.imports += other.imports;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl From<&FileError> for SkippedFile {
    fn from(err: &FileError) -> Self {
        Self {
            path: err.path().to_path_buf(),
            reason: err.reason(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub counts: ProfileCounts,
    /// Distinct top-level modules imported anywhere.
    pub modules: BTreeSet<String>,
    pub skipped: BTreeSet<SkippedFile>,
    /// Concept key to founding evidence.
    pub concepts: BTreeMap<String, Evidence>,
    pub patterns: BTreeMap<PatternTag, Evidence>,
}

/// Everything pass 1 learns about one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileAnalysis {
    pub facts: FileFacts,
    pub concepts: BTreeMap<String, Evidence>,
    pub patterns: Vec<PatternMatch>,
}

impl FileAnalysis {
    pub fn new(facts: FileFacts, kb: &KnowledgeBase, recognizer: &PatternRecognizer) -> Self {
        let mut concepts: BTreeMap<String, Evidence> = BTreeMap::new();
        for fact in &facts.facts {
            if let Some(record) = kb.lookup(fact) {
                concepts
                    .entry(record.key.to_string())
                    .or_default()
                    .insert(fact.clone());
            }
        }
        let patterns = recognizer.recognize_file(&facts.facts);

        Self {
            facts,
            concepts,
            patterns,
        }
    }
}

impl ProjectProfile {
    pub fn from_file(analysis: &FileAnalysis) -> Self {
        let facts = &analysis.facts;
        let counts = ProfileCounts {
            files_analyzed: 1,
            files_degraded: usize::from(facts.degraded),
            classes: facts.of_kind(FactKind::ClassDef).count(),
            functions: facts
                .of_kind(FactKind::FunctionDef)
                .filter(|f| !f.is_method())
                .count(),
            methods: facts.of_kind(FactKind::FunctionDef).filter(|f| f.is_method()).count(),
            imports: facts.of_kind(FactKind::Import).count(),
        };

        let mut profile = Self {
            counts,
            modules: facts
                .of_kind(FactKind::Import)
                .map(|f| f.name.clone())
                .collect(),
            concepts: analysis.concepts.clone(),
            ..Self::default()
        };
        profile.record_patterns(analysis.patterns.iter().cloned());
        profile
    }

    pub fn from_skipped(skipped: SkippedFile) -> Self {
        Self {
            skipped: BTreeSet::from([skipped]),
            ..Self::default()
        }
    }

    pub fn merge(mut self, other: ProjectProfile) -> Self {
        self.counts.add(&other.counts);
        self.modules.extend(other.modules);
        self.skipped.extend(other.skipped);
        for (key, evidence) in other.concepts {
            self.concepts.entry(key).or_default().extend(evidence);
        }
        for (tag, evidence) in other.patterns {
            self.patterns.entry(tag).or_default().extend(evidence);
        }
        self
    }

    pub fn fold(parts: impl IntoIterator<Item = ProjectProfile>) -> Self {
        parts
            .into_iter()
            .fold(ProjectProfile::default(), ProjectProfile::merge)
    }

    pub fn record_patterns(&mut self, matches: impl IntoIterator<Item = PatternMatch>) {
        for found in matches {
            self.patterns
                .entry(found.tag)
                .or_default()
                .extend(found.evidence);
        }
    }

    pub fn files_skipped(&self) -> usize {
        self.skipped.len()
    }
}
