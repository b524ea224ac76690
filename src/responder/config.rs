//! Topic Table
//!
//! Ordered topic records (id, patterns, canned response) that drive the responder.
//! Table order is match priority: the first topic with a matching pattern wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a topic table or an engine from it
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("invalid pattern {pattern:?} in topic {topic}: {source}")]
    InvalidPattern {
        topic: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("topic {0} has patterns but no response")]
    MissingResponse(String),

    #[error("duplicate topic id: {0}")]
    DuplicateTopic(String),

    #[error("topic {0} has no patterns")]
    EmptyPatterns(String),

    #[error("failed to read topics file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse topics file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// A single topic: the patterns that select it and the answer it gives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Topic identifier (e.g. `view_grades`)
    pub id: String,
    /// Regex patterns, tried in order with a substring search
    pub patterns: Vec<String>,
    /// Response body: lines separated by `\n`, links as `[label](url)`
    pub response: String,
}

impl Topic {
    /// Create a new topic
    pub fn new(
        id: impl Into<String>,
        patterns: Vec<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            patterns,
            response: response.into(),
        }
    }
}

/// Ordered, validated collection of topics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicTable {
    topics: Vec<Topic>,
}

impl TopicTable {
    /// Build a table from records, validating it
    pub fn new(topics: Vec<Topic>) -> Result<Self, ResponderError> {
        let table = Self { topics };
        table.validate()?;
        Ok(table)
    }

    /// Build a table from two aligned mappings: ordered topic -> patterns,
    /// and topic -> response. Every patterned topic must have a response.
    pub fn from_parts<P, R>(patterns: P, responses: R) -> Result<Self, ResponderError>
    where
        P: IntoIterator<Item = (String, Vec<String>)>,
        R: IntoIterator<Item = (String, String)>,
    {
        let mut responses: HashMap<String, String> = responses.into_iter().collect();
        let mut topics = Vec::new();

        for (id, pats) in patterns {
            let response = responses
                .remove(&id)
                .ok_or_else(|| ResponderError::MissingResponse(id.clone()))?;
            topics.push(Topic::new(id, pats, response));
        }

        if !responses.is_empty() {
            let orphans: Vec<_> = responses.keys().collect();
            tracing::warn!(?orphans, "responses without patterns are never served");
        }

        Self::new(topics)
    }

    /// Load a table from a JSON5 file holding an ordered array of topics
    pub fn load(path: &Path) -> Result<Self, ResponderError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ResponderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let topics: Vec<Topic> = json5::from_str(&raw).map_err(|e| ResponderError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::new(topics)
    }

    /// Validate ids, patterns and regex syntax
    pub fn validate(&self) -> Result<(), ResponderError> {
        let mut seen = HashSet::new();
        for topic in &self.topics {
            if !seen.insert(topic.id.as_str()) {
                return Err(ResponderError::DuplicateTopic(topic.id.clone()));
            }
            if topic.patterns.is_empty() {
                return Err(ResponderError::EmptyPatterns(topic.id.clone()));
            }
            for pattern in &topic.patterns {
                if let Err(source) = Regex::new(pattern) {
                    return Err(ResponderError::InvalidPattern {
                        topic: topic.id.clone(),
                        pattern: pattern.clone(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }

    /// Topics in priority order
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Get a topic by id
    pub fn get(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Lowercase alphabetic words used by the table's patterns and response text.
    /// Link targets are skipped; link labels are kept.
    pub fn vocabulary(&self) -> BTreeSet<String> {
        let mut words = BTreeSet::new();
        for topic in &self.topics {
            for pattern in &topic.patterns {
                collect_words(pattern, &mut words);
            }
            let text = super::render::strip_link_targets(&topic.response);
            collect_words(&text, &mut words);
        }
        words
    }
}

fn collect_words(text: &str, out: &mut BTreeSet<String>) {
    for word in text.split(|c: char| !c.is_alphabetic()) {
        if !word.is_empty() {
            out.insert(word.to_lowercase());
        }
    }
}
