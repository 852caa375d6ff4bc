//! Recommendation resolver — maps free-text skills to one of four fixed career labels.
//!
//! Matching is a case-insensitive substring test in fixed priority order:
//! `python` > `design` > `data`, falling back to `Software Developer`.
//! The resolver is total: every input, including the empty string, yields a label.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// The fixed set of career labels the resolver can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Career {
    AiMlEngineer,
    UiUxDesigner,
    DataAnalyst,
    SoftwareDeveloper,
}

/// Keyword rules, checked top to bottom. First match wins.
const KEYWORD_RULES: &[(&str, Career)] = &[
    ("python", Career::AiMlEngineer),
    ("design", Career::UiUxDesigner),
    ("data", Career::DataAnalyst),
];

impl Career {
    pub const ALL: [Career; 4] = [
        Career::AiMlEngineer,
        Career::UiUxDesigner,
        Career::DataAnalyst,
        Career::SoftwareDeveloper,
    ];

    /// The human-readable label, exactly as stored and rendered.
    pub fn label(self) -> &'static str {
        match self {
            Career::AiMlEngineer => "AI/ML Engineer",
            Career::UiUxDesigner => "UI/UX Designer",
            Career::DataAnalyst => "Data Analyst",
            Career::SoftwareDeveloper => "Software Developer",
        }
    }
}

impl fmt::Display for Career {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown career label: {0}")]
pub struct UnknownCareer(pub String);

impl FromStr for Career {
    type Err = UnknownCareer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Career::ALL
            .into_iter()
            .find(|career| career.label() == s)
            .ok_or_else(|| UnknownCareer(s.to_string()))
    }
}

impl Serialize for Career {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Resolves a skills string to a career.
pub fn resolve(skills: &str) -> Career {
    let skills_lower = skills.to_lowercase();

    KEYWORD_RULES
        .iter()
        .find(|(keyword, _)| skills_lower.contains(*keyword))
        .map(|&(_, career)| career)
        .unwrap_or(Career::SoftwareDeveloper)
}
