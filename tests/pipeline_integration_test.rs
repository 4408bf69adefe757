mod common;

use codecoach::{analyze, serialize, AnalysisError, AnalysisOptions, PatternTag};
use common::{Project, BROKEN, GUI_APP, MATH_ONLY, NET_WORKER};
use pretty_assertions::assert_eq;
use std::fs;

fn concept_keys(report: &codecoach::LearningReport) -> Vec<&str> {
    report.concepts.iter().map(|c| c.key.as_str()).collect()
}

fn tags(report: &codecoach::LearningReport) -> Vec<PatternTag> {
    report.practical_examples.iter().map(|p| p.tag).collect()
}

#[test]
fn test_gui_handler_is_recognized() {
    let project = Project::new().with_file("app.py", GUI_APP);
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();

    assert!(concept_keys(&report).contains(&"gui_programming"));
    assert!(tags(&report).contains(&PatternTag::GuiEventHandling));
    assert_eq!(report.summary.files_analyzed, 1);
    assert_eq!(report.summary.methods, 1);
}

#[test]
fn test_math_only_has_no_gui() {
    let project = Project::new().with_file("geometry.py", MATH_ONLY);
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();

    assert!(!concept_keys(&report).contains(&"gui_programming"));
    assert!(report
        .practical_examples
        .iter()
        .all(|p| p.tag.category() != codecoach::SkillCategory::Gui));
}

#[test]
fn test_threaded_network_call() {
    let project = Project::new().with_file("net_worker.py", NET_WORKER);
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();

    let keys = concept_keys(&report);
    assert!(keys.contains(&"concurrent_programming"));
    assert!(keys.contains(&"network_integration"));
    assert!(tags(&report).contains(&PatternTag::ConcurrentNetworkIo));

    for key in ["concurrent_programming", "network_integration"] {
        let item = report
            .interview
            .iter()
            .find(|item| item.concept.as_deref() == Some(key))
            .unwrap_or_else(|| panic!("no interview question for {key}"));
        assert!(item.answer.contains("net_worker.py"), "{}", item.answer);
        let cited = item.cited.as_ref().unwrap();
        assert!(cited.file.ends_with("net_worker.py"));
    }
}

#[test]
fn test_unparseable_file_is_skipped() {
    let project = Project::new()
        .with_file("a.py", GUI_APP)
        .with_file("b.py", NET_WORKER)
        .with_file("c.py", MATH_ONLY)
        .with_file("d.py", BROKEN);
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();

    assert_eq!(report.summary.files_analyzed, 3);
    assert_eq!(report.summary.files_skipped, 1);
    assert_eq!(report.skipped_files.len(), 1);
    assert!(report.skipped_files[0].path.ends_with("d.py"));
    assert!(report.skipped_files[0].reason.contains("syntax error"));
}

#[test]
fn test_empty_directory_is_an_error() {
    let project = Project::new().with_file("README.md", "# not python\n");
    let result = analyze(&[project.root()], &AnalysisOptions::default());
    assert!(matches!(
        result,
        Err(AnalysisError::NoAnalyzableFiles { .. })
    ));
}

#[test]
fn test_all_files_skipped_still_reports() {
    let project = Project::new().with_file("broken.py", BROKEN);
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();
    assert_eq!(report.summary.files_analyzed, 0);
    assert_eq!(report.summary.files_skipped, 1);
    assert!(report.concepts.is_empty());
}

#[test]
fn test_reports_are_byte_identical() {
    let project = Project::new()
        .with_file("app.py", GUI_APP)
        .with_file("pkg/net_worker.py", NET_WORKER);
    let options = AnalysisOptions::default();

    let first = serialize(&analyze(&[project.root()], &options).unwrap()).unwrap();
    let second = serialize(&analyze(&[project.root()], &options).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_input_order_does_not_matter() {
    let project = Project::new();
    let a = project.write("a.py", GUI_APP);
    let b = project.write("b.py", NET_WORKER);
    let c = project.write("c.py", MATH_ONLY);
    let options = AnalysisOptions::default();

    let forward = analyze(&[a.clone(), b.clone(), c.clone()], &options).unwrap();
    let backward = analyze(&[c, b, a], &options).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_evidence_points_at_real_lines() {
    let project = Project::new()
        .with_file("app.py", GUI_APP)
        .with_file("net_worker.py", NET_WORKER);
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();

    let evidence = report
        .concepts
        .iter()
        .flat_map(|c| c.evidence.iter())
        .chain(report.practical_examples.iter().flat_map(|p| p.evidence.iter()));
    for reference in evidence {
        let source = fs::read_to_string(&reference.file).unwrap();
        let line_count = source.lines().count();
        assert!(
            (1..=line_count).contains(&reference.line),
            "{reference} is outside the file"
        );
    }
    for concept in &report.concepts {
        assert!(!concept.evidence.is_empty());
        assert!(concept.evidence_count >= concept.evidence.len());
    }
}

#[test]
fn test_next_steps_respect_limit_and_requirements() {
    let project = Project::new().with_file("app.py", GUI_APP);
    let options = AnalysisOptions {
        max_next_steps: 2,
        required_skills: ["asyncio".to_string(), "kubernetes".to_string()]
            .into_iter()
            .collect(),
        ..AnalysisOptions::default()
    };
    let report = analyze(&[project.root()], &options).unwrap();

    assert!(report.next_steps.len() <= 2);
    assert!(report.next_steps[0]
        .requested_by
        .contains(&"asyncio".to_string()));
    assert!(report
        .unmatched_requirements
        .contains(&"kubernetes".to_string()));
    assert_eq!(report.next_steps[0].time_estimate.as_deref(), Some("1-2 months"));

    let fit = report.job_fit.unwrap();
    assert_eq!((fit.covered, fit.requirements, fit.match_score), (0, 2, 0));
    assert_eq!(fit.timeline, "6+ months - significant skill development needed");
}

#[test]
fn test_interview_section_can_be_disabled() {
    let project = Project::new().with_file("app.py", GUI_APP);
    let options = AnalysisOptions {
        include_interview_questions: false,
        ..AnalysisOptions::default()
    };
    let report = analyze(&[project.root()], &options).unwrap();
    assert!(report.interview.is_empty());
}

#[test]
fn test_unrelated_spawns_do_not_make_a_responsive_ui() {
    let project = Project::new()
        .with_file(
            "gui.py",
            "\
import threading
import tkinter as tk

class App(tk.Frame):
    def on_click(self):
        threading.Thread(target=lambda: print(\"clicked\")).start()
",
        )
        .with_file(
            "jobs.py",
            "\
import threading

def worker():
    return sum(range(10))

def main():
    threading.Thread(target=worker).start()
",
        );
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();
    assert!(!tags(&report).contains(&PatternTag::ResponsiveUi));

    project.write(
        "gui.py",
        "\
import threading
import tkinter as tk
from jobs import worker

class App(tk.Frame):
    def on_click(self):
        threading.Thread(target=worker).start()
",
    );
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();
    assert!(tags(&report).contains(&PatternTag::ResponsiveUi));
}

#[test]
fn test_relative_imports_are_project_modules() {
    let project = Project::new()
        .with_file("pkg/__init__.py", "")
        .with_file("pkg/queue.py", "def push(item):\n    return item\n")
        .with_file("pkg/app.py", "from .queue import push\nfrom . import queue\n\npush(1)\n");
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();

    assert!(!concept_keys(&report).contains(&"concurrent_programming"));
    assert_eq!(report.summary.imports, 0);
    assert!(report.skills_summary.technologies.is_empty());
}

#[test]
fn test_deeply_nested_file_is_skipped() {
    let mut nested = String::new();
    for depth in 0..200 {
        nested.push_str(&"    ".repeat(depth));
        nested.push_str("if x:\n");
    }
    nested.push_str(&"    ".repeat(200));
    nested.push_str("pass\n");

    let project = Project::new()
        .with_file("ok.py", MATH_ONLY)
        .with_file("deep.py", &nested);
    let report = analyze(&[project.root()], &AnalysisOptions::default()).unwrap();

    assert_eq!(report.summary.files_analyzed, 1);
    assert_eq!(report.summary.files_skipped, 1);
    assert!(report.skipped_files[0].path.ends_with("deep.py"));
    assert!(
        report.skipped_files[0].reason.contains("nesting deeper"),
        "{}",
        report.skipped_files[0].reason
    );
}
