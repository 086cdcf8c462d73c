//! Extraction Strategy Module
//!
//! - Sequential: `extract::parse` over one document (callback per item)
//! - Parallel: independent extractions over many documents

pub mod parallel;

pub use parallel::{extract_parallel, extract_spans};
