//! resumatch-core: skill catalog, extraction, and scoring.
//!
//! This crate defines the data model, the skill matching and scoring
//! functions, and the in-memory analysis session that the rest of resumatch
//! builds on.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extractor;
pub mod intake;
pub mod model;
pub mod placeholder;
pub mod report;
pub mod samples;
pub mod scoring;
pub mod session;
pub mod statistics;

pub use error::AnalysisError;
