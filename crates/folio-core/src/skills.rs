//! Skill list assembly.
//!
//! The skills section shows languages measured from GitHub repositories
//! ("dynamic" skills) followed by a hand-written list from configuration
//! ("static" skills). [`merge`] combines the two, dropping static entries
//! that a dynamic entry already covers.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::github::Repository;

/// A named skill with its badge color (hex).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub color: String,
}

impl Skill {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Where a merged skill came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillOrigin {
    /// Measured from fetched repository languages
    Dynamic,
    /// Listed in configuration
    Static,
}

/// A skill tagged with its origin, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergedSkill {
    pub name: String,
    pub color: String,
    pub origin: SkillOrigin,
}

impl MergedSkill {
    pub fn is_from_dynamic_source(&self) -> bool {
        self.origin == SkillOrigin::Dynamic
    }
}

/// How skill names are compared when removing duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameMatch {
    /// Byte-for-byte equality ("JavaScript" and "javascript" are distinct)
    #[default]
    Exact,
    /// Equality after ASCII lowercasing
    IgnoreAsciiCase,
}

impl NameMatch {
    fn key(self, name: &str) -> String {
        match self {
            NameMatch::Exact => name.to_string(),
            NameMatch::IgnoreAsciiCase => name.to_ascii_lowercase(),
        }
    }
}

/// Dynamic skills in order, then static skills whose name is not already
/// present among the dynamic ones. Names are compared exactly.
pub fn merge(dynamic: &[Skill], fixed: &[Skill]) -> Vec<MergedSkill> {
    merge_with(dynamic, fixed, NameMatch::Exact)
}

/// [`merge`] with an explicit name comparison.
pub fn merge_with(dynamic: &[Skill], fixed: &[Skill], matching: NameMatch) -> Vec<MergedSkill> {
    let taken: HashSet<String> = dynamic.iter().map(|s| matching.key(&s.name)).collect();

    let dynamic = dynamic.iter().map(|s| MergedSkill {
        name: s.name.clone(),
        color: s.color.clone(),
        origin: SkillOrigin::Dynamic,
    });
    let fixed = fixed
        .iter()
        .filter(|s| !taken.contains(&matching.key(&s.name)))
        .map(|s| MergedSkill {
            name: s.name.clone(),
            color: s.color.clone(),
            origin: SkillOrigin::Static,
        });

    dynamic.chain(fixed).collect()
}

/// Badge colors for programming languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagePalette {
    /// Color for languages missing from `colors`
    pub fallback: String,
    pub colors: BTreeMap<String, String>,
}

impl LanguagePalette {
    pub fn color_for(&self, language: &str) -> &str {
        self.colors
            .get(language)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

impl Default for LanguagePalette {
    fn default() -> Self {
        let colors = [
            ("JavaScript", "#f1e05a"),
            ("TypeScript", "#3178c6"),
            ("Python", "#3572A5"),
            ("Java", "#b07219"),
            ("C", "#555555"),
            ("C++", "#f34b7d"),
            ("C#", "#178600"),
            ("Go", "#00ADD8"),
            ("Rust", "#dea584"),
            ("Ruby", "#701516"),
            ("PHP", "#4F5D95"),
            ("Swift", "#F05138"),
            ("Kotlin", "#A97BFF"),
            ("HTML", "#e34c26"),
            ("CSS", "#563d7c"),
            ("Shell", "#89e051"),
            ("Jupyter Notebook", "#DA5B0B"),
            ("Assembly", "#6E4C13"),
            ("Verilog", "#b2b7f8"),
            ("VHDL", "#adb2cb"),
            ("MATLAB", "#e16737"),
            ("Dart", "#00B4AB"),
            ("Vue", "#41b883"),
            ("Haskell", "#5e5086"),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color.to_string()))
        .collect();

        Self {
            fallback: "#858585".to_string(),
            colors,
        }
    }
}

/// Aggregated usage of one language across repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    pub color: String,
    /// Repository count, or byte count when built from language byte maps
    pub weight: u64,
}

impl From<&LanguageStat> for Skill {
    fn from(stat: &LanguageStat) -> Self {
        Skill::new(stat.name.clone(), stat.color.clone())
    }
}

/// Skills derived from language statistics, in ranking order.
pub fn dynamic_skills(stats: &[LanguageStat]) -> Vec<Skill> {
    stats.iter().map(Skill::from).collect()
}

/// Count repositories by primary language.
///
/// Repositories without a detected language are skipped. The result is
/// ordered by count, heaviest first; ties keep first-seen order.
pub fn language_stats(repos: &[Repository], palette: &LanguagePalette) -> Vec<LanguageStat> {
    tally(
        repos
            .iter()
            .filter_map(|r| r.language.as_deref())
            .map(|language| (language, 1)),
        palette,
    )
}

/// Sum per-repository language byte counts (detailed mode).
pub fn language_stats_from_bytes<'a, I>(per_repo: I, palette: &LanguagePalette) -> Vec<LanguageStat>
where
    I: IntoIterator<Item = &'a BTreeMap<String, u64>>,
{
    tally(
        per_repo
            .into_iter()
            .flat_map(|bytes| bytes.iter().map(|(name, n)| (name.as_str(), *n))),
        palette,
    )
}

fn tally<'a>(
    weights: impl Iterator<Item = (&'a str, u64)>,
    palette: &LanguagePalette,
) -> Vec<LanguageStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<LanguageStat> = Vec::new();

    for (name, weight) in weights {
        match index.get(name) {
            Some(&i) => stats[i].weight = stats[i].weight.saturating_add(weight),
            None => {
                index.insert(name, stats.len());
                stats.push(LanguageStat {
                    name: name.to_string(),
                    color: palette.color_for(name).to_string(),
                    weight,
                });
            }
        }
    }

    // sort_by is stable, so ties stay in first-seen order
    stats.sort_by(|a, b| b.weight.cmp(&a.weight));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<Skill> {
        names.iter().map(|n| Skill::new(*n, "#000000")).collect()
    }

    fn names(merged: &[MergedSkill]) -> Vec<&str> {
        merged.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn dynamic_entry_wins_on_collision() {
        let dynamic = vec![Skill::new("React", "#61DAFB")];
        let fixed = vec![Skill::new("React", "#ffffff"), Skill::new("Go", "#00ADD8")];

        let merged = merge(&dynamic, &fixed);

        assert_eq!(names(&merged), vec!["React", "Go"]);
        assert!(merged[0].is_from_dynamic_source());
        assert_eq!(merged[0].color, "#61DAFB");
        assert!(!merged[1].is_from_dynamic_source());
    }

    #[test]
    fn empty_dynamic_yields_static_only() {
        let fixed = skills(&["React", "Tailwind CSS", "Cisco"]);
        let merged = merge(&[], &fixed);

        assert_eq!(names(&merged), vec!["React", "Tailwind CSS", "Cisco"]);
        assert!(merged.iter().all(|s| s.origin == SkillOrigin::Static));
    }

    #[test]
    fn empty_static_yields_dynamic_only() {
        let dynamic = skills(&["Python", "C", "TypeScript"]);
        let merged = merge(&dynamic, &[]);

        assert_eq!(names(&merged), vec!["Python", "C", "TypeScript"]);
        assert!(merged.iter().all(MergedSkill::is_from_dynamic_source));
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let merged = merge(&skills(&["JavaScript"]), &skills(&["javascript"]));
        assert_eq!(names(&merged), vec!["JavaScript", "javascript"]);
    }

    #[test]
    fn ignore_case_drops_differently_cased_static() {
        let merged = merge_with(
            &skills(&["JavaScript"]),
            &skills(&["javascript", "Go"]),
            NameMatch::IgnoreAsciiCase,
        );
        assert_eq!(names(&merged), vec!["JavaScript", "Go"]);
    }

    #[test]
    fn palette_falls_back_for_unknown_language() {
        let palette = LanguagePalette::default();
        assert_eq!(palette.color_for("Rust"), "#dea584");
        assert_eq!(palette.color_for("Brainfuck"), "#858585");
    }

    #[test]
    fn primary_languages_ranked_by_count() {
        let repo = |language: Option<&str>| Repository {
            id: 1,
            name: "r".to_string(),
            full_name: "octocat/r".to_string(),
            description: None,
            html_url: String::new(),
            homepage: None,
            language: language.map(str::to_string),
            stargazers_count: 0,
            forks_count: 0,
            topics: vec![],
            fork: false,
            updated_at: chrono::Utc::now(),
        };
        let repos = vec![
            repo(Some("C")),
            repo(Some("Python")),
            repo(None),
            repo(Some("Python")),
            repo(Some("Zig")),
        ];

        let stats = language_stats(&repos, &LanguagePalette::default());

        let ranked: Vec<(&str, u64)> = stats.iter().map(|s| (s.name.as_str(), s.weight)).collect();
        assert_eq!(ranked, vec![("Python", 2), ("C", 1), ("Zig", 1)]);
        assert_eq!(stats[2].color, "#858585");
    }

    #[test]
    fn byte_stats_sum_across_repositories() {
        let a: BTreeMap<String, u64> =
            [("Rust".to_string(), 500), ("Shell".to_string(), 20)].into();
        let b: BTreeMap<String, u64> =
            [("Python".to_string(), 300), ("Shell".to_string(), 600)].into();

        let stats = language_stats_from_bytes([&a, &b], &LanguagePalette::default());

        let ranked: Vec<(&str, u64)> = stats.iter().map(|s| (s.name.as_str(), s.weight)).collect();
        assert_eq!(ranked, vec![("Shell", 620), ("Rust", 500), ("Python", 300)]);
    }

    #[test]
    fn byte_stats_saturate_instead_of_overflowing() {
        let a: BTreeMap<String, u64> = [("Rust".to_string(), u64::MAX)].into();
        let b: BTreeMap<String, u64> = [("Rust".to_string(), 1)].into();

        let stats = language_stats_from_bytes([&a, &b], &LanguagePalette::default());

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].weight, u64::MAX);
    }
}
