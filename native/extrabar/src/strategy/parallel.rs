//! Parallel Batch Extraction
//!
//! Uses Rayon to run independent extractions over many documents. Each
//! document gets its own state machine, so nothing is shared between
//! workers; results come back as spans so they can leave the worker.

use rayon::prelude::*;

use crate::core::span::MAX_INPUT_LEN;
use crate::error::ExtractError;
use crate::extract::{parse_with, ItemSpans, Target};

/// Extract items from every document in parallel, preserving input order
pub fn extract_parallel(
    documents: &[&[u8]],
    target: &Target<'_>,
) -> Vec<Result<Vec<ItemSpans>, ExtractError>> {
    documents
        .par_iter()
        .map(|&html| extract_spans(html, target))
        .collect()
}

/// Extract items from one document as spans
///
/// Fails with `InputTooLarge` for documents longer than [`MAX_INPUT_LEN`].
pub fn extract_spans(html: &[u8], target: &Target<'_>) -> Result<Vec<ItemSpans>, ExtractError> {
    check_input_len(html.len())?;

    let mut spans = Vec::new();
    // Every item borrows `html`, which fits in span offsets, so it always places
    parse_with(html, target, |item| spans.extend(item.spans(html)))?;
    Ok(spans)
}

fn check_input_len(len: usize) -> Result<(), ExtractError> {
    if len > MAX_INPUT_LEN {
        tracing::warn!(len, "document too large for span offsets");
        return Err(ExtractError::too_large(MAX_INPUT_LEN));
    }
    Ok(())
}
