//! Property-based tests for learning reports
//!
//! These tests verify invariants that should hold for any mix of sources:
//! - Analysis is deterministic down to the serialized bytes
//! - Summary counts agree with the report sections
//! - Next steps never exceed the configured limit
//! - Evidence is never fabricated
//! - The order of explicitly listed files does not matter
//! - Every concept's evidence resolves back to that concept

mod common;

use codecoach::pipeline::build_profile;
use codecoach::{analyze, serialize, AnalysisOptions, KnowledgeBase};
use common::{Project, BROKEN, GUI_APP, MATH_ONLY, NET_WORKER};
use proptest::prelude::*;
use std::path::PathBuf;

const SNIPPETS: &[&str] = &[
    GUI_APP,
    NET_WORKER,
    MATH_ONLY,
    BROKEN,
    "import json\n\ndef load(path):\n    with open(path) as f:\n        return json.load(f)\n",
    "from dataclasses import dataclass\n\n@dataclass\nclass Point:\n    x: int\n    y: int\n",
    "import asyncio\n\nasync def main():\n    await asyncio.sleep(1)\n",
    "import re\n\ndef words(text):\n    try:\n        return re.findall(r\"\\w+\", text)\n    except TypeError:\n        return []\n",
];

fn project_from(indices: &[usize]) -> Project {
    let project = Project::new();
    for (n, index) in indices.iter().enumerate() {
        project.write(&format!("module_{n}.py"), SNIPPETS[*index]);
    }
    project
}

fn write_each(project: &Project, indices: &[usize]) -> Vec<PathBuf> {
    indices
        .iter()
        .enumerate()
        .map(|(n, index)| project.write(&format!("file_{n}.py"), SNIPPETS[*index]))
        .collect()
}

/// Snippet indices paired with a permutation of their positions.
fn indices_and_order() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    prop::collection::vec(0..SNIPPETS.len(), 1..6).prop_flat_map(|indices| {
        let positions: Vec<usize> = (0..indices.len()).collect();
        (Just(indices), Just(positions).prop_shuffle())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_analysis_is_deterministic(
        indices in prop::collection::vec(0..SNIPPETS.len(), 1..6)
    ) {
        let project = project_from(&indices);
        let options = AnalysisOptions::default();
        let first = serialize(&analyze(&[project.root()], &options).unwrap()).unwrap();
        let second = serialize(&analyze(&[project.root()], &options).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_summary_matches_sections(
        indices in prop::collection::vec(0..SNIPPETS.len(), 1..6),
        max_next_steps in 1usize..=10,
    ) {
        let project = project_from(&indices);
        let options = AnalysisOptions { max_next_steps, ..AnalysisOptions::default() };
        let report = analyze(&[project.root()], &options).unwrap();

        prop_assert_eq!(
            report.summary.files_analyzed + report.summary.files_skipped,
            indices.len()
        );
        prop_assert_eq!(report.summary.files_skipped, report.skipped_files.len());
        prop_assert_eq!(report.summary.concepts, report.concepts.len());
        prop_assert_eq!(report.summary.patterns, report.practical_examples.len());
        prop_assert!(report.next_steps.len() <= max_next_steps);
    }

    #[test]
    fn prop_evidence_comes_from_analyzed_files(
        indices in prop::collection::vec(0..SNIPPETS.len(), 1..6)
    ) {
        let project = project_from(&indices);
        let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();

        let skipped: Vec<_> = report.skipped_files.iter().map(|s| s.path.clone()).collect();
        for concept in &report.concepts {
            prop_assert!(!concept.evidence.is_empty());
            for reference in &concept.evidence {
                prop_assert!(reference.file.starts_with(project.root()));
                prop_assert!(!skipped.contains(&reference.file));
                prop_assert!(reference.line >= 1);
            }
        }
    }

    #[test]
    fn prop_explicit_file_order_is_irrelevant((indices, order) in indices_and_order()) {
        let project = Project::new();
        let paths = write_each(&project, &indices);
        let shuffled: Vec<PathBuf> = order.iter().map(|i| paths[*i].clone()).collect();
        let options = AnalysisOptions::default();

        let listed = analyze(&paths, &options).unwrap();
        let reordered = analyze(&shuffled, &options).unwrap();
        prop_assert_eq!(serialize(&listed).unwrap(), serialize(&reordered).unwrap());
        prop_assert_eq!(listed, reordered);
    }

    #[test]
    fn prop_concept_evidence_resolves_to_its_concept(
        indices in prop::collection::vec(0..SNIPPETS.len(), 1..6)
    ) {
        let project = project_from(&indices);
        let profile = build_profile(&[project.root()], &AnalysisOptions::default()).unwrap();
        let kb = KnowledgeBase::builtin();

        for (key, evidence) in &profile.concepts {
            prop_assert!(!evidence.is_empty());
            for fact in evidence {
                prop_assert_eq!(kb.lookup(fact).map(|record| record.key), Some(key.as_str()));
            }
        }
    }
}
