//! Concept knowledge base.
//!
//! A static table of concept records keyed by fact signatures. Built once
//! into exact-key hash maps on first use and shared read-only afterwards.
//! A fact with no mapped signature simply has no concept; most imports in
//! real code are like that.

mod advanced;
mod concepts;

pub use advanced::{AdvancedTopic, ADVANCED_TOPICS};

use crate::core::{FactKind, ScopeKind, StructuralFact};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Fixed skill taxonomy used to group concepts and patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Gui,
    Networking,
    Concurrency,
    DataProcessing,
    Architecture,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Gui,
        SkillCategory::Networking,
        SkillCategory::Concurrency,
        SkillCategory::DataProcessing,
        SkillCategory::Architecture,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Gui => "GUI",
            SkillCategory::Networking => "Networking",
            SkillCategory::Concurrency => "Concurrency",
            SkillCategory::DataProcessing => "Data Processing",
            SkillCategory::Architecture => "Architecture",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named programming idea with its explanation and interview material.
///
/// Templates accept `{name}`, `{file}`, `{line}` and `{scope}`, filled from
/// the fact that triggered the concept.
#[derive(Debug, PartialEq, Eq)]
pub struct ConceptRecord {
    pub key: &'static str,
    pub name: &'static str,
    pub category: SkillCategory,
    pub definition: &'static str,
    pub usage_template: &'static str,
    pub interview_question: &'static str,
    pub interview_answer_template: &'static str,
    pub technical_details: &'static str,
    /// Job-requirement keywords this concept demonstrates.
    pub keywords: &'static [&'static str],
}

impl ConceptRecord {
    pub fn render_usage(&self, fact: &StructuralFact) -> String {
        render_template(self.usage_template, fact)
    }

    pub fn render_answer(&self, fact: &StructuralFact) -> String {
        render_template(self.interview_answer_template, fact)
    }
}

/// Exact lookup key derived from one fact.
///
/// Classes and docstrings are keyed by kind alone (`*`); coroutines by
/// `async`; everything else by its canonical name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FactSignature<'a> {
    pub kind: FactKind,
    pub key: &'a str,
}

impl<'a> FactSignature<'a> {
    pub const ANY: &'static str = "*";

    pub fn of(fact: &'a StructuralFact) -> Self {
        let key = match fact.kind {
            FactKind::ClassDef | FactKind::StringLiteral => Self::ANY,
            FactKind::FunctionDef if fact.detail.as_deref() == Some("async") => "async",
            _ => fact.name.as_str(),
        };
        Self {
            kind: fact.kind,
            key,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("signature table references unknown concept key '{0}'")]
pub struct UnknownConceptKey(pub String);

pub struct KnowledgeBase {
    concepts: HashMap<&'static str, &'static ConceptRecord>,
    signatures: HashMap<FactKind, HashMap<&'static str, &'static str>>,
}

static BUILTIN: Lazy<KnowledgeBase> =
    Lazy::new(|| KnowledgeBase::from_tables(concepts::CONCEPTS, concepts::SIGNATURES));

impl KnowledgeBase {
    /// The process-wide built-in knowledge base.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    pub fn from_tables(
        records: &'static [ConceptRecord],
        signatures: &'static [(FactKind, &'static [&'static str], &'static str)],
    ) -> Self {
        let concepts = records.iter().map(|record| (record.key, record)).collect();

        let mut by_kind: HashMap<FactKind, HashMap<&'static str, &'static str>> = HashMap::new();
        for (kind, keys, concept) in signatures {
            let entries = by_kind.entry(*kind).or_default();
            for key in *keys {
                entries.insert(*key, *concept);
            }
        }

        Self {
            concepts,
            signatures: by_kind,
        }
    }

    /// Concept for one structural fact, if its signature is mapped.
    pub fn lookup(&self, fact: &StructuralFact) -> Option<&'static ConceptRecord> {
        let signature = FactSignature::of(fact);
        let key = self.signatures.get(&signature.kind)?.get(signature.key)?;
        match self.resolve(key) {
            Ok(record) => Some(record),
            Err(err) => {
                log::debug!("{err}; treating {} as unmapped", fact.describe());
                None
            }
        }
    }

    pub fn resolve(&self, key: &str) -> Result<&'static ConceptRecord, UnknownConceptKey> {
        self.concepts
            .get(key)
            .copied()
            .ok_or_else(|| UnknownConceptKey(key.to_string()))
    }

    pub fn concept(&self, key: &str) -> Option<&'static ConceptRecord> {
        self.resolve(key).ok()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Every signature key whose concept is missing from the table.
    pub fn dangling_signatures(&self) -> Vec<UnknownConceptKey> {
        let mut missing: Vec<UnknownConceptKey> = self
            .signatures
            .values()
            .flat_map(|entries| entries.values())
            .filter_map(|key| self.resolve(key).err())
            .collect();
        missing.sort_by(|a, b| a.0.cmp(&b.0));
        missing.dedup();
        missing
    }
}

pub fn render_template(template: &str, fact: &StructuralFact) -> String {
    let file = fact
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| fact.file.display().to_string());
    let scope = match &fact.scope {
        Some(scope) if scope.kind == ScopeKind::Class => format!("class {}", scope.name),
        Some(scope) => format!("{}()", scope.name),
        None => "module level".to_string(),
    };

    let line = fact.line.to_string();

    // Single pass: substituted text is never scanned for placeholders again.
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let tail = &rest[start..];
        let value = [
            ("{name}", fact.name.as_str()),
            ("{file}", file.as_str()),
            ("{line}", line.as_str()),
            ("{scope}", scope.as_str()),
        ]
        .into_iter()
        .find(|(token, _)| tail.starts_with(token));
        match value {
            Some((token, value)) => {
                rendered.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                rendered.push('{');
                rest = &tail[1..];
            }
        }
    }
    rendered.push_str(rest);
    rendered
}

/// Whole-word, case-insensitive containment (`ml` does not match `html`).
pub fn mentions(haystack: &str, needle: &str) -> bool {
    let normalize = |text: &str| -> String {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    };
    let needle = normalize(needle);
    if needle.is_empty() {
        return false;
    }
    format!(" {} ", normalize(haystack)).contains(&format!(" {needle} "))
}
