//! canvas-assistant library
//!
//! Rule-based Canvas LMS help assistant: an ordered table of regex topics,
//! a spelling corrector, and the HTTP server that exposes them.

pub mod cli;
pub mod config;
pub mod logging;
pub mod responder;
pub mod server;
pub mod spelling;
