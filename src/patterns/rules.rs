//! Rule conditions and the built-in rule table.

use super::PatternTag;
use crate::core::{FactKind, StructuralFact};
use regex::Regex;
use std::collections::BTreeSet;

pub const GUI_TOOLKITS: &[&str] = &[
    "tkinter",
    "customtkinter",
    "PyQt5",
    "PyQt6",
    "PySide2",
    "PySide6",
    "wx",
    "kivy",
];

pub const THREAD_SPAWNERS: &[&str] = &[
    "threading.Thread",
    "threading.Timer",
    "multiprocessing.Process",
];

const WORKER_POOLS: &[&str] = &[
    "concurrent.futures.ThreadPoolExecutor",
    "concurrent.futures.ProcessPoolExecutor",
    "multiprocessing.Pool",
];

pub const NETWORK_CALLS: &[&str] = &[
    "requests.get",
    "requests.post",
    "requests.put",
    "requests.patch",
    "requests.delete",
    "requests.request",
    "urllib.request.urlopen",
    "httpx.get",
    "httpx.post",
    "socket.create_connection",
];

const HTML_PARSERS: &[&str] = &["bs4.BeautifulSoup", "lxml.html.fromstring"];

const EVENT_HANDLER: &str =
    r"^(on|handle)_|_(click|clicked|pressed|released|changed|selected|callback|handler)$";

/// Handlers that typically kick off work from a widget callback.
const UI_ENTRY_POINT: &str = r"^(on|handle|start|run)_|_(click|clicked|pressed|callback|handler)$";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleScope {
    File,
    Project,
}

/// One predicate over a fact set. Matching returns the facts that satisfied
/// it; an empty result means the condition failed.
#[derive(Clone, Debug)]
pub enum Condition {
    ImportsAny(&'static [&'static str]),
    CallsAny(&'static [&'static str]),
    /// Method calls whose last segment is listed (`frame.grid(...)`).
    MethodCallAny(&'static [&'static str]),
    DecoratedWithAny(&'static [&'static str]),
    HasConstruct(&'static str),
    /// Methods (functions directly in a class body) whose name matches.
    MethodNamed(Regex),
    /// A spawner called from inside a function whose name matches, whose
    /// own `target=` names a function defined in the fact set.
    HandlerSpawnsDefinedTarget {
        spawners: &'static [&'static str],
        handler: Regex,
    },
    /// A spawner whose target function makes one of the listed calls.
    SpawnTargetCalls {
        spawners: &'static [&'static str],
        callees: &'static [&'static str],
    },
}

impl Condition {
    pub fn matches<'a>(&self, facts: &'a [StructuralFact]) -> Vec<&'a StructuralFact> {
        match self {
            Condition::ImportsAny(modules) => of_kind(facts, FactKind::Import)
                .filter(|f| modules.contains(&f.name.as_str()))
                .collect(),
            Condition::CallsAny(names) => calls_to(facts, *names).collect(),
            Condition::MethodCallAny(methods) => of_kind(facts, FactKind::Call)
                .filter(|f| f.name.contains('.') && methods.contains(&f.short_name()))
                .collect(),
            Condition::DecoratedWithAny(names) => of_kind(facts, FactKind::Decorator)
                .filter(|f| names.contains(&f.name.as_str()))
                .collect(),
            Condition::HasConstruct(construct) => of_kind(facts, FactKind::ControlConstruct)
                .filter(|f| f.name == *construct)
                .collect(),
            Condition::MethodNamed(pattern) => facts
                .iter()
                .filter(|f| f.is_method() && pattern.is_match(&f.name))
                .collect(),
            Condition::HandlerSpawnsDefinedTarget { spawners, handler } => {
                let mut found = Vec::new();
                let from_handler = calls_to(facts, *spawners).filter(|call| {
                    call.scope
                        .as_ref()
                        .is_some_and(|scope| handler.is_match(&scope.name))
                });
                for spawn in from_handler {
                    let Some(target) = spawn_target(spawn) else {
                        continue;
                    };
                    let definitions: Vec<_> = of_kind(facts, FactKind::FunctionDef)
                        .filter(|f| f.name == target)
                        .collect();
                    if !definitions.is_empty() {
                        found.push(spawn);
                        found.extend(definitions);
                    }
                }
                found
            }
            Condition::SpawnTargetCalls { spawners, callees } => {
                let mut found = Vec::new();
                for spawn in calls_to(facts, *spawners) {
                    let Some(target) = spawn_target(spawn) else {
                        continue;
                    };
                    let inside: Vec<_> = calls_to(facts, *callees)
                        .filter(|call| call.is_in_function(target))
                        .collect();
                    if !inside.is_empty() {
                        found.push(spawn);
                        found.extend(inside);
                    }
                }
                found
            }
        }
    }
}

fn of_kind(facts: &[StructuralFact], kind: FactKind) -> impl Iterator<Item = &StructuralFact> {
    facts.iter().filter(move |f| f.kind == kind)
}

fn calls_to<'a>(
    facts: &'a [StructuralFact],
    names: &'static [&'static str],
) -> impl Iterator<Item = &'a StructuralFact> {
    of_kind(facts, FactKind::Call).filter(move |f| names.contains(&f.name.as_str()))
}

/// Function name a spawner runs: `target=self.worker.fetch` -> `fetch`.
/// Lambdas and other expressions have no name to follow.
fn spawn_target(call: &StructuralFact) -> Option<&str> {
    let target = call.detail.as_deref()?;
    let last = target.rsplit('.').next()?;
    let is_identifier = !last.is_empty()
        && !last.starts_with(|c: char| c.is_ascii_digit())
        && last.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_identifier.then_some(last)
}

/// A conjunction of conditions producing one tag.
#[derive(Clone, Debug)]
pub struct PatternRule {
    pub name: &'static str,
    pub tag: PatternTag,
    pub scope: RuleScope,
    pub conditions: Vec<Condition>,
}

impl PatternRule {
    pub fn new(
        name: &'static str,
        tag: PatternTag,
        scope: RuleScope,
        conditions: Vec<Condition>,
    ) -> Self {
        Self {
            name,
            tag,
            scope,
            conditions,
        }
    }

    /// Union of every condition's founding facts, or None if any fails.
    pub fn evaluate(&self, facts: &[StructuralFact]) -> Option<BTreeSet<StructuralFact>> {
        if self.conditions.is_empty() {
            return None;
        }
        let mut evidence = BTreeSet::new();
        for condition in &self.conditions {
            let matched = condition.matches(facts);
            if matched.is_empty() {
                return None;
            }
            evidence.extend(matched.into_iter().cloned());
        }
        Some(evidence)
    }
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in rule pattern is valid")
}

pub fn builtin_rules() -> Vec<PatternRule> {
    use Condition::*;
    use PatternTag::*;
    use RuleScope::*;

    vec![
        PatternRule::new(
            "gui-handler-methods",
            GuiEventHandling,
            File,
            vec![ImportsAny(GUI_TOOLKITS), MethodNamed(regex(EVENT_HANDLER))],
        ),
        PatternRule::new(
            "gui-event-binding",
            GuiEventHandling,
            File,
            vec![
                ImportsAny(GUI_TOOLKITS),
                MethodCallAny(&["bind", "bind_all", "connect", "after"]),
            ],
        ),
        PatternRule::new(
            "gui-geometry-manager",
            GuiLayoutManagement,
            File,
            vec![
                ImportsAny(GUI_TOOLKITS),
                MethodCallAny(&["grid", "pack", "place", "addWidget", "setLayout"]),
            ],
        ),
        PatternRule::new(
            "thread-spawn",
            BackgroundProcessing,
            File,
            vec![CallsAny(THREAD_SPAWNERS)],
        ),
        PatternRule::new(
            "worker-pool",
            BackgroundProcessing,
            File,
            vec![CallsAny(WORKER_POOLS)],
        ),
        PatternRule::new(
            "http-client-calls",
            RestApiConsumption,
            File,
            vec![CallsAny(NETWORK_CALLS)],
        ),
        PatternRule::new(
            "html-parsing",
            WebScraping,
            File,
            vec![CallsAny(HTML_PARSERS)],
        ),
        PatternRule::new(
            "fetch-and-parse",
            WebScraping,
            File,
            vec![CallsAny(NETWORK_CALLS), CallsAny(HTML_PARSERS)],
        ),
        PatternRule::new(
            "try-blocks",
            ExceptionHandling,
            File,
            vec![HasConstruct("try")],
        ),
        PatternRule::new(
            "dataclass-records",
            DataModeling,
            File,
            vec![DecoratedWithAny(&["dataclasses.dataclass"])],
        ),
        PatternRule::new(
            "abstract-methods",
            AbstractInterfaces,
            File,
            vec![
                ImportsAny(&["abc"]),
                DecoratedWithAny(&["abc.abstractmethod"]),
            ],
        ),
        PatternRule::new(
            "handler-spawns-worker",
            ResponsiveUi,
            Project,
            vec![
                ImportsAny(GUI_TOOLKITS),
                HandlerSpawnsDefinedTarget {
                    spawners: THREAD_SPAWNERS,
                    handler: regex(UI_ENTRY_POINT),
                },
            ],
        ),
        PatternRule::new(
            "threaded-network-call",
            ConcurrentNetworkIo,
            Project,
            vec![SpawnTargetCalls {
                spawners: THREAD_SPAWNERS,
                callees: NETWORK_CALLS,
            }],
        ),
    ]
}
