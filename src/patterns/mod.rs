//! Pattern recognition over combinations of structural facts.
//!
//! Rules live in a table ([`rules::builtin_rules`]) rather than in code paths,
//! so a caller can evaluate a different rule set with
//! [`PatternRecognizer::new`]. File-scope rules see one file's facts;
//! project-scope rules see the union of all files, ordered by path then
//! source position, which is how cross-file patterns resolve.

pub mod gaps;
pub mod rules;

pub use gaps::{detect_gaps, parse_requirements, GapAnalysis, Readiness, RequirementMatch, SkillGap};
pub use rules::{Condition, PatternRule, RuleScope};

use crate::core::StructuralFact;
use crate::knowledge::SkillCategory;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTag {
    GuiEventHandling,
    GuiLayoutManagement,
    BackgroundProcessing,
    ResponsiveUi,
    RestApiConsumption,
    ConcurrentNetworkIo,
    WebScraping,
    ExceptionHandling,
    DataModeling,
    AbstractInterfaces,
}

/// Presentation data for a pattern tag.
#[derive(Debug)]
pub struct PatternInfo {
    pub name: &'static str,
    pub category: SkillCategory,
    pub description: &'static str,
    pub example: &'static str,
    pub concept: &'static str,
}

impl PatternTag {
    pub fn info(&self) -> &'static PatternInfo {
        match self {
            PatternTag::GuiEventHandling => &PatternInfo {
                name: "GUI Event Handling",
                category: SkillCategory::Gui,
                description: "Widgets wired to handler methods that react to user actions.",
                example: "button = ttk.Button(frame, command=self.on_click)",
                concept: "Event-driven programming",
            },
            PatternTag::GuiLayoutManagement => &PatternInfo {
                name: "GUI Layout Management",
                category: SkillCategory::Gui,
                description: "Positioning widgets with a geometry manager.",
                example: "ttk.Frame(root).grid(row=0, column=0, sticky=\"nsew\")",
                concept: "GUI layout managers",
            },
            PatternTag::BackgroundProcessing => &PatternInfo {
                name: "Background Processing",
                category: SkillCategory::Concurrency,
                description: "Long-running work moved onto a separate thread or worker pool.",
                example: "threading.Thread(target=self.run_job, daemon=True).start()",
                concept: "Concurrent programming",
            },
            PatternTag::ResponsiveUi => &PatternInfo {
                name: "Responsive UI",
                category: SkillCategory::Gui,
                description: "A UI event handler hands slow work to a background thread so the interface never freezes.",
                example: "def on_analyze(self):\n    threading.Thread(target=self.perform_analysis).start()",
                concept: "Keeping interfaces responsive",
            },
            PatternTag::RestApiConsumption => &PatternInfo {
                name: "REST API Consumption",
                category: SkillCategory::Networking,
                description: "Making HTTP requests to external APIs and using the responses.",
                example: "response = requests.get(url, headers=headers, timeout=10)",
                concept: "API integration",
            },
            PatternTag::ConcurrentNetworkIo => &PatternInfo {
                name: "Concurrent Network I/O",
                category: SkillCategory::Concurrency,
                description: "Network calls performed on a background thread.",
                example: "threading.Thread(target=fetch_listings).start()",
                concept: "Overlapping I/O with other work",
            },
            PatternTag::WebScraping => &PatternInfo {
                name: "Web Scraping",
                category: SkillCategory::Networking,
                description: "Extracting structured data from HTML documents.",
                example: "soup = BeautifulSoup(html, \"html.parser\"); soup.select_one(selector)",
                concept: "Data extraction from web pages",
            },
            PatternTag::ExceptionHandling => &PatternInfo {
                name: "Exception Handling",
                category: SkillCategory::Architecture,
                description: "Failures caught and handled instead of crashing the program.",
                example: "try:\n    load()\nexcept OSError as err:\n    report(err)",
                concept: "Robust error handling",
            },
            PatternTag::DataModeling => &PatternInfo {
                name: "Typed Data Records",
                category: SkillCategory::Architecture,
                description: "Application data described by dataclasses instead of loose dictionaries.",
                example: "@dataclass\nclass Job:\n    title: str\n    company: str",
                concept: "Data modeling",
            },
            PatternTag::AbstractInterfaces => &PatternInfo {
                name: "Abstract Interfaces",
                category: SkillCategory::Architecture,
                description: "Abstract base classes defining contracts for interchangeable implementations.",
                example: "class Source(ABC):\n    @abstractmethod\n    def fetch(self): ...",
                concept: "Interface-based design",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn category(&self) -> SkillCategory {
        self.info().category
    }
}

impl fmt::Display for PatternTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One tag produced by one evaluation, with the facts that founded it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternMatch {
    pub tag: PatternTag,
    pub rule: &'static str,
    pub evidence: BTreeSet<StructuralFact>,
}

pub struct PatternRecognizer {
    rules: Vec<PatternRule>,
}

static BUILTIN: Lazy<PatternRecognizer> =
    Lazy::new(|| PatternRecognizer::new(rules::builtin_rules()));

impl PatternRecognizer {
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    pub fn builtin() -> &'static PatternRecognizer {
        &BUILTIN
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// File-scope rules over one file's facts.
    pub fn recognize_file(&self, facts: &[StructuralFact]) -> Vec<PatternMatch> {
        self.recognize(RuleScope::File, facts)
    }

    /// Project-scope rules over the union of every file's facts.
    pub fn recognize_project(&self, facts: &[StructuralFact]) -> Vec<PatternMatch> {
        self.recognize(RuleScope::Project, facts)
    }

    /// Each rule fires at most once; when several rules yield the same tag,
    /// the one with more founding facts wins, earlier rule on a tie.
    fn recognize(&self, scope: RuleScope, facts: &[StructuralFact]) -> Vec<PatternMatch> {
        let mut best: BTreeMap<PatternTag, PatternMatch> = BTreeMap::new();

        for rule in self.rules.iter().filter(|r| r.scope == scope) {
            let Some(evidence) = rule.evaluate(facts) else {
                continue;
            };
            log::debug!(
                "rule {} matched {} with {} facts",
                rule.name,
                rule.tag,
                evidence.len()
            );
            let candidate = PatternMatch {
                tag: rule.tag,
                rule: rule.name,
                evidence,
            };
            match best.get(&rule.tag) {
                Some(current) if current.evidence.len() >= candidate.evidence.len() => {}
                _ => {
                    best.insert(rule.tag, candidate);
                }
            }
        }

        best.into_values().collect()
    }
}
