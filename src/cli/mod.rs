//! CLI subcommand definitions and handlers.
//!
//! Uses clap derive to define the subcommand hierarchy:
//! - `serve` (default) -- start the HTTP server
//! - `ask <message>` -- answer one message on stdout
//! - `topics` -- list topics in match order
//! - `config show|path` -- inspect configuration
//! - `version` -- print build/version info

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Canvas Assistant: rule-based answers to Canvas LMS questions.
#[derive(Parser, Debug)]
#[command(
    name = "canvas-assistant",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rule-based Canvas LMS help assistant"
)]
pub struct Cli {
    /// Config file (default: $CANVAS_ASSISTANT_CONFIG or the user config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve {
        /// Override the bind host.
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Answer a single message and print the reply.
    Ask {
        /// Message words (joined with spaces).
        #[arg(required = true)]
        message: Vec<String>,

        /// Also print the normalized text and the matched topic.
        #[arg(long)]
        explain: bool,
    },

    /// List topics in match priority order.
    Topics,

    /// Inspect configuration.
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print version, build date, and git commit information.
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as JSON.
    Show,

    /// Print the resolved configuration file path.
    Path,
}

// ---------------------------------------------------------------------------
// Subcommand handlers
// ---------------------------------------------------------------------------

use crate::config::{self, AppConfig};
use crate::responder::{canvas_topics, create_engine, ResponderEngine, TopicTable};
use crate::server::{self, AppState};
use crate::spelling::{DictionaryCorrector, IdentityCorrector, SpellCorrector};
use std::sync::Arc;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load the topic table named by the config, or the built-in Canvas topics
pub fn load_topics(cfg: &AppConfig) -> Result<TopicTable, crate::responder::ResponderError> {
    match &cfg.topics_path {
        Some(path) => TopicTable::load(path),
        None => canvas_topics(),
    }
}

/// Build the spelling corrector for `table` from the spelling config
pub fn build_corrector(
    cfg: &AppConfig,
    table: &TopicTable,
) -> Result<Arc<dyn SpellCorrector>, crate::spelling::DictionaryError> {
    if !cfg.spelling.enabled {
        return Ok(Arc::new(IdentityCorrector));
    }

    let mut corrector = DictionaryCorrector::new(cfg.spelling.max_edit_distance)
        .with_vocabulary(table.vocabulary());
    if let Some(path) = &cfg.spelling.dictionary_path {
        let added = corrector.load_words_file(path)?;
        tracing::info!(path = %path.display(), words = added, "loaded extra dictionary");
    }
    Ok(Arc::new(corrector))
}

/// Build the engine described by `cfg`
pub fn build_engine(cfg: &AppConfig) -> Result<Arc<ResponderEngine>, Box<dyn std::error::Error>> {
    let table = load_topics(cfg)?;
    let corrector = build_corrector(cfg, &table)?;
    let engine = create_engine(&table, corrector)?;
    tracing::info!(
        topics = engine.topic_count(),
        spelling = cfg.spelling.enabled,
        "responder ready"
    );
    Ok(engine)
}

/// Run the `serve` subcommand.
pub async fn handle_serve(mut cfg: AppConfig, host: Option<String>, port: Option<u16>) -> CliResult {
    if let Some(host) = host {
        cfg.server.host = host;
    }
    if let Some(port) = port {
        cfg.server.port = port;
    }
    cfg.validate()?;

    let engine = build_engine(&cfg)?;
    server::run_server(&cfg.server, AppState::new(engine)).await?;
    Ok(())
}

/// Run the `ask` subcommand.
pub fn handle_ask(cfg: &AppConfig, message: &[String], explain: bool) -> CliResult {
    let engine = build_engine(cfg)?;
    let reply = engine.reply(&message.join(" "));

    if explain {
        println!("normalized: {}", reply.normalized);
        println!("topic:      {}", reply.topic.as_deref().unwrap_or("(fallback)"));
    }
    println!("{}", reply.html);
    Ok(())
}

/// Run the `topics` subcommand.
pub fn handle_topics(cfg: &AppConfig) -> CliResult {
    let table = load_topics(cfg)?;
    for (i, topic) in table.topics().iter().enumerate() {
        println!("{:>2}. {:<22} {}", i + 1, topic.id, topic.patterns.join(", "));
    }
    Ok(())
}

/// Run the `config show` subcommand.
pub fn handle_config_show(cfg: &AppConfig) -> CliResult {
    println!("{}", serde_json::to_string_pretty(cfg)?);
    Ok(())
}

/// Run the `config path` subcommand.
pub fn handle_config_path(explicit: Option<&std::path::Path>) {
    match explicit {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", config::get_config_path().display()),
    }
}

/// Run the `version` subcommand.
pub fn handle_version() {
    println!("canvas-assistant {}", env!("CARGO_PKG_VERSION"));
    println!("  Build date: {}", env!("CANVAS_ASSISTANT_BUILD_DATE"));
    println!("  Git commit: {}", env!("CANVAS_ASSISTANT_GIT_HASH"));
    println!(
        "  Dictionary: {} English words",
        env!("CANVAS_ASSISTANT_DICTIONARY_WORDS")
    );
    println!(
        "  Platform:   {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
