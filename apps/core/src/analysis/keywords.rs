//! Key-issue extraction.
//!
//! Pulls the most frequent non-trivial words out of a submission as a coarse
//! topic signal. Words shorter than four characters and stopwords are dropped.

use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

/// Stopwords removed before counting
const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should",
];

const DEFAULT_MIN_WORD_LENGTH: usize = 4;
const DEFAULT_MAX_ISSUES: usize = 5;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("Invalid regex: word token pattern"));

/// Word → frequency, ordered by descending frequency then first occurrence.
///
/// Serializes as a JSON object whose key order is the ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopIssues(Vec<(String, usize)>);

impl TopIssues {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(w, c)| (w.as_str(), *c))
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.iter().find(|(w, _)| w == word).map(|(_, c)| *c)
    }

    pub fn words(&self) -> Vec<&str> {
        self.0.iter().map(|(w, _)| w.as_str()).collect()
    }
}

impl Serialize for TopIssues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TopIssues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = TopIssues;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of word to frequency")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((word, count)) = access.next_entry::<String, usize>()? {
                    entries.push((word, count));
                }
                Ok(TopIssues(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Result of key-issue extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyIssues {
    pub top_issues: TopIssues,
    /// Distinct words that survived filtering
    pub total_issues: usize,
}

/// Frequency-based key-issue extractor
pub struct IssueExtractor {
    stopwords: HashSet<&'static str>,
    min_word_length: usize,
    max_issues: usize,
}

impl Default for IssueExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueExtractor {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MIN_WORD_LENGTH, DEFAULT_MAX_ISSUES)
    }

    /// `min_word_length` is in characters, inclusive.
    pub fn with_config(min_word_length: usize, max_issues: usize) -> Self {
        Self {
            stopwords: STOPWORDS_EN.iter().copied().collect(),
            min_word_length,
            max_issues,
        }
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        TOKEN_PATTERN
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|w| !self.stopwords.contains(*w) && w.chars().count() >= self.min_word_length)
            .collect()
    }

    /// Extracts key issues from already-normalized (lowercased) text.
    pub fn extract(&self, text: &str) -> KeyIssues {
        let words = self.tokenize(text);

        // Counts kept in first-occurrence order so the stable sort breaks ties by it.
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();
        for word in words {
            match index.get(word) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word, counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }

        let total_issues = counts.len();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(self.max_issues);

        KeyIssues {
            top_issues: TopIssues(counts),
            total_issues,
        }
    }
}
