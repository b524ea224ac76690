//! Responder Module
//!
//! Rule-based answers: an ordered table of regex topics, first match wins.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod render;

pub use catalog::canvas_topics;
pub use config::{ResponderError, Topic, TopicTable};
pub use engine::{create_engine, Reply, ResponderEngine};
pub use render::{render_html, FALLBACK_RESPONSE};
