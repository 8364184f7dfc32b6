//! termquiz-core — Quiz engine, deck parsing, and scoring.
//!
//! This crate defines the record model, the delimited deck parser, the
//! no-repeat question selector, the distractor builder, and the session
//! state machine that the `termquiz` binary drives.

pub mod config;
pub mod distractor;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod selector;
pub mod statistics;

pub use error::QuizError;
