//! Job-requirement gap detection.
//!
//! Requirements are opaque keyword strings. A requirement is covered when it
//! mentions (or is mentioned by) a matched concept's name, keyword or
//! category, or a detected pattern's name. Either way it may point at
//! advanced topics the project does not show yet.
//!
//! The share of covered requirements gives a match score and a readiness
//! band: 80% and up is ready, 60% nearly, 40% developing, below that the
//! foundations still need work.

use crate::aggregation::ProjectProfile;
use crate::knowledge::{mentions, KnowledgeBase, ADVANCED_TOPICS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequirementMatch {
    pub requirement: String,
    /// Concept and pattern names demonstrating the requirement.
    pub covered_by: Vec<String>,
    /// Advanced topics, absent from the project, this requirement asks for.
    pub topics: Vec<&'static str>,
}

impl RequirementMatch {
    pub fn is_gap(&self) -> bool {
        self.covered_by.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GapAnalysis {
    pub requirements: Vec<RequirementMatch>,
}

/// How close the project is to what the requirements ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Foundation,
    Developing,
    NearlyReady,
    Ready,
}

impl Readiness {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Readiness::Ready,
            60..=79 => Readiness::NearlyReady,
            40..=59 => Readiness::Developing,
            _ => Readiness::Foundation,
        }
    }

    pub fn timeline(&self) -> &'static str {
        match self {
            Readiness::Ready => "Ready now - apply immediately",
            Readiness::NearlyReady => "1-2 months with focused learning",
            Readiness::Developing => "3-6 months with dedicated study",
            Readiness::Foundation => "6+ months - significant skill development needed",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.timeline())
    }
}

/// Alias used where only uncovered requirements are of interest.
pub type SkillGap = RequirementMatch;

impl GapAnalysis {
    pub fn gaps(&self) -> impl Iterator<Item = &SkillGap> {
        self.requirements.iter().filter(|r| r.is_gap())
    }

    pub fn covered(&self) -> impl Iterator<Item = &RequirementMatch> {
        self.requirements.iter().filter(|r| !r.is_gap())
    }

    /// Percentage of requirements the project covers, rounded down. None
    /// when no requirements were given.
    pub fn match_score(&self) -> Option<u32> {
        if self.requirements.is_empty() {
            return None;
        }
        let covered = self.covered().count() * 100 / self.requirements.len();
        Some(covered as u32)
    }

    pub fn readiness(&self) -> Option<Readiness> {
        self.match_score().map(Readiness::from_score)
    }

    /// Time to learn a demanded topic from scratch; None if nothing asked
    /// for it.
    pub fn time_estimate(&self, topic: &str) -> Option<&'static str> {
        if self.requested_by(topic).is_empty() {
            return None;
        }
        ADVANCED_TOPICS
            .iter()
            .find(|t| t.topic == topic)
            .map(|t| t.time_to_proficiency)
    }

    /// Topics any requirement asks for, in advanced-topic priority order.
    pub fn promoted_topics(&self) -> Vec<&'static str> {
        let demanded: BTreeSet<&str> = self
            .requirements
            .iter()
            .flat_map(|r| r.topics.iter().copied())
            .collect();
        ADVANCED_TOPICS
            .iter()
            .map(|t| t.topic)
            .filter(|topic| demanded.contains(topic))
            .collect()
    }

    /// Requirements that asked for `topic`.
    pub fn requested_by(&self, topic: &str) -> Vec<String> {
        self.requirements
            .iter()
            .filter(|r| r.topics.contains(&topic))
            .map(|r| r.requirement.clone())
            .collect()
    }
}

/// Split a requirements document into keywords: one per line or comma,
/// trimmed and lowercased.
pub fn parse_requirements(text: &str) -> BTreeSet<String> {
    text.split(['\n', ','])
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

fn related(a: &str, b: &str) -> bool {
    mentions(a, b) || mentions(b, a)
}

pub fn detect_gaps(profile: &ProjectProfile, required_skills: &BTreeSet<String>) -> GapAnalysis {
    let kb = KnowledgeBase::builtin();

    let requirements = required_skills
        .iter()
        .map(|requirement| {
            let mut covered_by: Vec<String> = profile
                .concepts
                .keys()
                .filter_map(|key| kb.concept(key))
                .filter(|record| {
                    related(requirement, record.name)
                        || mentions(requirement, record.category.label())
                        || record.keywords.iter().any(|kw| related(requirement, kw))
                })
                .map(|record| record.name.to_string())
                .collect();
            covered_by.extend(
                profile
                    .patterns
                    .keys()
                    .filter(|tag| related(requirement, tag.name()))
                    .map(|tag| tag.name().to_string()),
            );

            let topics = ADVANCED_TOPICS
                .iter()
                .filter(|topic| !profile.concepts.contains_key(topic.concept))
                .filter(|topic| {
                    related(requirement, topic.topic)
                        || topic.keywords.iter().any(|kw| related(requirement, kw))
                })
                .map(|topic| topic.topic)
                .collect();

            RequirementMatch {
                requirement: requirement.clone(),
                covered_by,
                topics,
            }
        })
        .collect();

    GapAnalysis { requirements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FactKind, StructuralFact};
    use crate::patterns::PatternTag;

    #[test]
    fn test_parse_requirements() {
        let parsed = parse_requirements("Threading, REST APIs\n\n  Async  \nthreading\n");
        let expected: BTreeSet<String> = ["async", "rest apis", "threading"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(parsed, expected);
        assert!(parse_requirements(" ,\n").is_empty());
    }

    fn profile_with(concepts: &[&str], patterns: &[PatternTag]) -> ProjectProfile {
        let evidence: BTreeSet<StructuralFact> =
            [StructuralFact::new(FactKind::Import, "x", "x.py").at(1, 1)]
                .into_iter()
                .collect();
        let mut profile = ProjectProfile::default();
        for key in concepts {
            profile.concepts.insert(key.to_string(), evidence.clone());
        }
        for tag in patterns {
            profile.patterns.insert(*tag, evidence.clone());
        }
        profile
    }

    fn skills(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_covered_requirement() {
        let profile = profile_with(&["concurrent_programming"], &[]);
        let analysis = detect_gaps(&profile, &skills(&["multithreading"]));
        assert_eq!(analysis.gaps().count(), 0);
        assert_eq!(analysis.covered().count(), 1);
    }

    #[test]
    fn test_gap_points_at_missing_topic() {
        let profile = profile_with(&["gui_programming"], &[]);
        let analysis = detect_gaps(&profile, &skills(&["sql", "pytest"]));

        let gaps: Vec<&str> = analysis.gaps().map(|g| g.requirement.as_str()).collect();
        assert_eq!(gaps, vec!["pytest", "sql"]);
        assert_eq!(
            analysis.promoted_topics(),
            vec!["Automated Testing", "Database Integration"]
        );
        assert_eq!(analysis.requested_by("Database Integration"), vec!["sql"]);
    }

    #[test]
    fn test_pattern_names_cover_requirements() {
        let profile = profile_with(&[], &[PatternTag::WebScraping]);
        let analysis = detect_gaps(&profile, &skills(&["web scraping"]));
        assert_eq!(analysis.gaps().count(), 0);
    }

    #[test]
    fn test_present_concept_is_not_promoted() {
        let profile = profile_with(&["automated_testing"], &[]);
        let analysis = detect_gaps(&profile, &skills(&["pytest"]));
        assert!(analysis.promoted_topics().is_empty());
    }

    #[test]
    fn test_no_requirements() {
        let analysis = detect_gaps(&ProjectProfile::default(), &BTreeSet::new());
        assert_eq!(analysis, GapAnalysis::default());
        assert_eq!(analysis.match_score(), None);
        assert_eq!(analysis.readiness(), None);
    }

    #[test]
    fn test_match_score_and_readiness() {
        let profile = profile_with(&["concurrent_programming", "network_integration"], &[]);
        let analysis = detect_gaps(&profile, &skills(&["threading", "rest", "sql"]));
        assert_eq!(analysis.match_score(), Some(66));
        assert_eq!(analysis.readiness(), Some(Readiness::NearlyReady));

        let all = detect_gaps(&profile, &skills(&["threading", "http"]));
        assert_eq!(all.match_score(), Some(100));
        assert_eq!(all.readiness(), Some(Readiness::Ready));
    }

    #[test]
    fn test_readiness_bands() {
        assert_eq!(Readiness::from_score(80), Readiness::Ready);
        assert_eq!(Readiness::from_score(79), Readiness::NearlyReady);
        assert_eq!(Readiness::from_score(40), Readiness::Developing);
        assert_eq!(Readiness::from_score(0), Readiness::Foundation);
        assert_eq!(
            Readiness::Developing.to_string(),
            "3-6 months with dedicated study"
        );
    }

    #[test]
    fn test_time_estimate_only_for_demanded_topics() {
        let analysis = detect_gaps(&ProjectProfile::default(), &skills(&["sql"]));
        assert_eq!(analysis.time_estimate("Database Integration"), Some("1-3 months"));
        assert_eq!(analysis.time_estimate("Automated Testing"), None);
    }
}
