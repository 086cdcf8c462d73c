//! Core markup scanning primitives
//!
//! This module contains the fundamental building blocks:
//! - Scanner: SIMD-accelerated delimiter skipping using memchr
//! - Names: void element and declaration classification
//! - Attributes: quote-aware `key=value` tokenizer
//! - Outline: single-pass element outline with an OutlineVisitor trait
//! - Span: offset/length references into the input

pub mod attributes;
pub mod names;
pub mod outline;
pub mod scanner;
pub mod span;
