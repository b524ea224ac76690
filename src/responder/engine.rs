//! Responder Engine
//!
//! Normalizes an incoming message, finds the first matching topic and renders its answer.

use super::config::{ResponderError, TopicTable};
use super::render::{render_html, FALLBACK_RESPONSE};
use crate::spelling::SpellCorrector;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of answering one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Matched topic id (`None` means the fallback was used)
    pub topic: Option<String>,
    /// Message after spelling correction and lowercasing
    pub normalized: String,
    /// Rendered reply
    pub html: String,
}

/// Topic with compiled patterns
#[derive(Debug)]
struct CompiledTopic {
    id: String,
    patterns: Vec<Regex>,
    response: String,
}

/// Immutable matcher over an ordered topic table.
///
/// Built once at startup and shared behind an `Arc`; nothing is written after construction.
pub struct ResponderEngine {
    topics: Vec<CompiledTopic>,
    corrector: Arc<dyn SpellCorrector>,
}

impl std::fmt::Debug for ResponderEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponderEngine")
            .field("topics", &self.topics.len())
            .finish_non_exhaustive()
    }
}

impl ResponderEngine {
    /// Compile every pattern in `table`
    pub fn new(
        table: &TopicTable,
        corrector: Arc<dyn SpellCorrector>,
    ) -> Result<Self, ResponderError> {
        let mut topics = Vec::with_capacity(table.len());
        for topic in table.topics() {
            let mut patterns = Vec::with_capacity(topic.patterns.len());
            for pattern in &topic.patterns {
                let regex =
                    Regex::new(pattern).map_err(|source| ResponderError::InvalidPattern {
                        topic: topic.id.clone(),
                        pattern: pattern.clone(),
                        source,
                    })?;
                patterns.push(regex);
            }
            topics.push(CompiledTopic {
                id: topic.id.clone(),
                patterns,
                response: topic.response.clone(),
            });
        }

        Ok(Self { topics, corrector })
    }

    /// Answer a message: the first matching topic's rendered response, or the fallback text
    pub fn respond(&self, raw_message: &str) -> String {
        self.reply(raw_message).html
    }

    /// Answer a message and report how it was matched
    pub fn reply(&self, raw_message: &str) -> Reply {
        let normalized = self.normalize(raw_message);

        match self.find_topic(&normalized) {
            Some(topic) => {
                tracing::debug!(topic = %topic.id, "message matched topic");
                Reply {
                    topic: Some(topic.id.clone()),
                    html: render_html(&topic.response),
                    normalized,
                }
            }
            None => {
                tracing::debug!("no topic matched, using fallback");
                Reply {
                    topic: None,
                    html: FALLBACK_RESPONSE.to_string(),
                    normalized,
                }
            }
        }
    }

    /// Id of the topic that would answer `raw_message`
    pub fn classify(&self, raw_message: &str) -> Option<&str> {
        let normalized = self.normalize(raw_message);
        self.find_topic(&normalized).map(|t| t.id.as_str())
    }

    /// Correct each whitespace-separated token, join with single spaces, lowercase
    pub fn normalize(&self, raw_message: &str) -> String {
        raw_message
            .split_whitespace()
            .map(|token| self.corrector.correct(token))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Topic ids in match priority order
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.id.as_str())
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    fn find_topic(&self, normalized: &str) -> Option<&CompiledTopic> {
        self.topics
            .iter()
            .find(|topic| topic.patterns.iter().any(|p| p.is_match(normalized)))
    }
}

/// Build a shared engine
pub fn create_engine(
    table: &TopicTable,
    corrector: Arc<dyn SpellCorrector>,
) -> Result<Arc<ResponderEngine>, ResponderError> {
    Ok(Arc::new(ResponderEngine::new(table, corrector)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::config::Topic;
    use crate::spelling::IdentityCorrector;

    fn topic(id: &str, patterns: &[&str], response: &str) -> Topic {
        Topic::new(
            id,
            patterns.iter().map(|p| p.to_string()).collect(),
            response,
        )
    }

    fn create_test_engine() -> ResponderEngine {
        let table = TopicTable::new(vec![
            topic("greet", &["hello", "good morning"], "Hello there!"),
            topic("broad", &["course"], "Broad answer"),
            topic("specific", &["course.*grades", "grades"], "Grades answer\n\nSee [grades](http://g)"),
        ])
        .unwrap();
        ResponderEngine::new(&table, Arc::new(IdentityCorrector)).unwrap()
    }

    /// Corrector that replaces one known misspelling
    struct FixTypo;

    impl SpellCorrector for FixTypo {
        fn correct(&self, token: &str) -> String {
            if token == "helo" {
                "hello".to_string()
            } else {
                token.to_string()
            }
        }
    }

    #[test]
    fn test_match_renders_html() {
        let engine = create_test_engine();
        assert_eq!(engine.respond("hello"), "<ul><li>Hello there!</li></ul>");
    }

    #[test]
    fn test_substring_search() {
        let engine = create_test_engine();
        assert_eq!(engine.classify("well hello everyone"), Some("greet"));
        assert_eq!(engine.classify("othello"), Some("greet"));
    }

    #[test]
    fn test_first_topic_wins() {
        let engine = create_test_engine();
        assert_eq!(engine.classify("course grades"), Some("broad"));
        assert_eq!(engine.classify("my grades"), Some("specific"));
    }

    #[test]
    fn test_rendered_links_and_blank_lines() {
        let engine = create_test_engine();
        assert_eq!(
            engine.respond("grades"),
            r#"<ul><li>Grades answer</li><li>See <a href="http://g">grades</a></li></ul>"#
        );
    }

    #[test]
    fn test_fallback() {
        let engine = create_test_engine();
        assert_eq!(engine.respond("zzqqxx flibberflam"), FALLBACK_RESPONSE);
        assert_eq!(engine.classify("zzqqxx"), None);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let engine = create_test_engine();
        assert_eq!(engine.respond(""), FALLBACK_RESPONSE);
        assert_eq!(engine.respond("   \t\n "), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_case_insensitive() {
        let engine = create_test_engine();
        assert_eq!(engine.respond("HELLO"), engine.respond("hello"));
        assert_eq!(engine.classify("Good MORNING"), Some("greet"));
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        let engine = create_test_engine();
        assert_eq!(engine.normalize("  Good \t  Morning\n"), "good morning");
        assert_eq!(engine.normalize(""), "");
    }

    #[test]
    fn test_multi_word_pattern_needs_single_space() {
        let engine = create_test_engine();
        assert_eq!(engine.classify("good     morning"), Some("greet"));
    }

    #[test]
    fn test_spelling_applied_before_match() {
        let table = TopicTable::new(vec![topic("greet", &["hello"], "Hi")]).unwrap();
        let engine = ResponderEngine::new(&table, Arc::new(FixTypo)).unwrap();

        let reply = engine.reply("helo friend");
        assert_eq!(reply.topic.as_deref(), Some("greet"));
        assert_eq!(reply.normalized, "hello friend");
    }

    #[test]
    fn test_reply_reports_fallback() {
        let engine = create_test_engine();
        let reply = engine.reply("Nothing Here");
        assert_eq!(reply.topic, None);
        assert_eq!(reply.normalized, "nothing here");
        assert_eq!(reply.html, FALLBACK_RESPONSE);
    }

    #[test]
    fn test_topics_in_order() {
        let engine = create_test_engine();
        let ids: Vec<_> = engine.topics().collect();
        assert_eq!(ids, vec!["greet", "broad", "specific"]);
        assert_eq!(engine.topic_count(), 3);
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResponderEngine>();

        let engine = create_engine(
            &TopicTable::new(vec![topic("greet", &["hello"], "Hi")]).unwrap(),
            Arc::new(IdentityCorrector),
        )
        .unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.respond("hello"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "<ul><li>Hi</li></ul>");
        }
    }
}
