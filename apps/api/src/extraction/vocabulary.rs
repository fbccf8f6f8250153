//! Skill Extractor: single-pass matcher against a fixed skill vocabulary.
//!
//! The vocabulary compiles to one case-insensitive alternation, longest term first, so
//! "c++" wins over "c" and "google cloud" over "go". Word boundaries are checked by hand
//! and only on an edge where the term itself ends in a word character, so "C++17" still
//! yields "c++". When the longest term at a position fails that check, shorter terms
//! anchored at the same position are tried before the scan moves on.

use std::collections::{BTreeMap, BTreeSet};

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::profile::normalizer::canonical_name;

/// Categorized default skill database.
const DEFAULT_SKILLS: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "Python", "Java", "JavaScript", "C++", "C", "C#", "Ruby", "PHP", "Go", "Rust",
            "TypeScript", "Swift", "Kotlin", "R", "MATLAB", "Scala", "Perl", "Shell", "Bash",
            "SQL", "HTML", "CSS", "XML", "JSON",
        ],
    ),
    (
        "Web Development",
        &[
            "React", "Angular", "Vue.js", "Node.js", "Express", "Django", "Flask", "Spring",
            "ASP.NET", "FastAPI", "Bootstrap", "Tailwind CSS", "Material Design", "REST API",
            "GraphQL", "WebSocket", "AJAX",
        ],
    ),
    (
        "Data Science & ML",
        &[
            "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Keras",
            "Scikit-learn", "Pandas", "NumPy", "Matplotlib", "Seaborn", "Data Analysis",
            "Data Visualization", "NLP", "Computer Vision", "Statistical Analysis",
            "Statistics", "Regression", "Classification", "Clustering", "CNN", "RNN", "LSTM",
            "Neural Networks", "MLOps", "Spark", "Tableau", "A/B Testing",
        ],
    ),
    (
        "Databases",
        &[
            "MySQL", "PostgreSQL", "MongoDB", "Redis", "Cassandra", "Oracle", "SQLite",
            "Firebase", "AWS DynamoDB", "Elasticsearch", "Database Design", "SQL Optimization",
        ],
    ),
    (
        "DevOps & Cloud",
        &[
            "Docker", "Kubernetes", "AWS", "Azure", "Google Cloud", "CI/CD", "Jenkins",
            "GitLab CI", "GitHub Actions", "Terraform", "Ansible", "CloudFormation", "Linux",
            "Unix", "AWS EC2", "AWS S3", "Lambda", "Prometheus",
        ],
    ),
    (
        "Tools & Platforms",
        &[
            "Git", "GitHub", "GitLab", "Bitbucket", "Jira", "Slack", "Confluence",
            "Visual Studio Code", "IntelliJ", "Sublime Text", "Jupyter", "Anaconda",
        ],
    ),
    (
        "Soft Skills",
        &[
            "Team Leadership", "Project Management", "Communication", "Problem Solving",
            "Analytical Thinking", "Critical Thinking", "Time Management", "Collaboration",
            "Attention to Detail", "Adaptability", "Creativity", "Documentation",
        ],
    ),
    (
        "Methodologies",
        &[
            "Agile", "Scrum", "Kanban", "Waterfall", "Test-Driven Development", "TDD",
            "Continuous Integration", "DevOps", "Microservices", "System Design",
        ],
    ),
];

/// One named group of the skill taxonomy, in display casing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

/// Fixed set of recognizable skills plus its compiled matcher.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    /// canonical name → display casing
    terms: BTreeMap<String, String>,
    /// `None` when the vocabulary is empty.
    pattern: Option<Regex>,
    /// Per-term patterns anchored at the start, longest term first.
    anchored: Vec<(String, Regex)>,
    categories: Vec<SkillCategory>,
}

fn term_pattern(term: &str) -> String {
    term.split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(1 << 24)
        .build()
}

impl SkillVocabulary {
    pub fn new<I, S>(terms: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_canonical: BTreeMap<String, String> = BTreeMap::new();
        for term in terms {
            let display: String = term.into();
            let canonical = canonical_name(&display);
            if canonical.is_empty() {
                continue;
            }
            by_canonical
                .entry(canonical)
                .or_insert_with(|| display.trim().to_string());
        }

        let mut ordered: Vec<&str> = by_canonical.keys().map(String::as_str).collect();
        ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = if ordered.is_empty() {
            None
        } else {
            let alternation = ordered
                .iter()
                .map(|term| term_pattern(term))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!("(?:{alternation})"))?)
        };

        let anchored = ordered
            .iter()
            .map(|term| {
                compile(&format!("^(?:{})", term_pattern(term))).map(|re| (term.to_string(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            terms: by_canonical,
            pattern,
            anchored,
            categories: Vec::new(),
        })
    }

    /// Builds the vocabulary from named groups and keeps the grouping for display.
    /// A term listed under several groups is kept in the first one only.
    pub fn categorized(groups: &[(&str, &[&str])]) -> Result<Self, regex::Error> {
        let mut vocabulary =
            Self::new(groups.iter().flat_map(|(_, skills)| skills.iter().copied()))?;

        let mut placed: BTreeSet<String> = BTreeSet::new();
        vocabulary.categories = groups
            .iter()
            .map(|(category, skills)| SkillCategory {
                category: category.to_string(),
                skills: skills
                    .iter()
                    .filter(|skill| placed.insert(canonical_name(skill)))
                    .map(|skill| skill.trim().to_string())
                    .collect(),
            })
            .filter(|category| !category.skills.is_empty())
            .collect();
        Ok(vocabulary)
    }

    /// Empty for a vocabulary built from a flat term list.
    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the distinct vocabulary skills found in `text`, in display casing, sorted
    /// by canonical name.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        let mut found: BTreeSet<&str> = BTreeSet::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(m) = pattern.find_at(text, pos) else {
                break;
            };

            if is_standalone(text, m.start(), m.end()) {
                if let Some((canonical, _)) = self.terms.get_key_value(&canonical_name(m.as_str())) {
                    found.insert(canonical.as_str());
                }
                pos = m.end();
            } else if let Some((canonical, end)) = self.shorter_at(text, m.start(), m.end()) {
                found.insert(canonical);
                pos = end;
            } else {
                // Retry one character later so a term starting inside can still match.
                pos = m.start()
                    + text[m.start()..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
            }
        }

        found
            .into_iter()
            .filter_map(|canonical| self.terms.get(canonical).cloned())
            .collect()
    }

    /// Longest standalone term starting at `start` that ends before `rejected_end`.
    fn shorter_at(&self, text: &str, start: usize, rejected_end: usize) -> Option<(&str, usize)> {
        let rest = &text[start..];
        self.anchored.iter().find_map(|(canonical, re)| {
            let end = start + re.find(rest)?.end();
            (end < rejected_end && is_standalone(text, start, end))
                .then_some((canonical.as_str(), end))
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A neighbouring word character only disqualifies a match on an edge where the
/// matched text is itself a word character.
fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let opens_on_word = matched.chars().next().is_some_and(is_word_char);
    let closes_on_word = matched.chars().next_back().is_some_and(is_word_char);

    let before_ok = !opens_on_word
        || text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
    let after_ok =
        !closes_on_word || text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}

/// The built-in categorized skill database.
pub fn default_vocabulary() -> Result<SkillVocabulary, regex::Error> {
    SkillVocabulary::categorized(DEFAULT_SKILLS)
}
