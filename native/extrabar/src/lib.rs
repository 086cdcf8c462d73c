//! Extrabar - single-pass item extraction from minified HTML
//!
//! Finds the search results carousel (`<div id="extabar">`) in a document
//! and pulls `title`, `href` and `src` out of each `<a>` inside it, in one
//! forward pass with no tree.
//!
//! Layers:
//! - core: byte cursor, attribute tokenizer, outline scanner
//! - extract: container → child → attributes state machine
//! - strategy: parallel batch extraction over many documents
//! - NIFs: `Elixir.Extrabar.Native.extract_items/1` and `extract_batch/1`
//!
//! ```
//! let html = br#"<div id="extabar"><a title="T" href="/l" src="/i"></a></div>"#;
//! let items = extrabar::collect_items(html, &extrabar::Target::EXTRABAR).unwrap();
//! assert_eq!(items[0].title, b"T");
//! ```

use rustler::{Binary, Env, NifResult, Term};

mod core;
mod error;
mod extract;
mod strategy;
mod term;

pub use crate::core::attributes::{find_parameter, parameters, Parameters};
pub use crate::core::outline::{
    outline, ElementView, Flow, OutlineScanner, OutlineVisitor, ScanSummary,
};
pub use crate::core::span::Span;
pub use error::{ErrorKind, ExtractError};
pub use extract::{
    collect_items, parse, parse_with, ExtractSummary, ExtractionState, Extractor, Item,
    ItemSpans, OwnedItem, PartialItemPolicy, Target,
};
pub use strategy::{extract_parallel, extract_spans};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// Extraction NIFs
// ============================================================================

/// Extract extabar items from one document
/// Returns {:ok, [{title, href, src}]} with sub-binaries of the input
#[rustler::nif]
fn extract_items<'a>(env: Env<'a>, input: Binary<'a>) -> NifResult<Term<'a>> {
    match extract_spans(input.as_slice(), &Target::EXTRABAR) {
        Ok(items) => term::items_to_term(env, &input, &items),
        Err(err) => term::error_to_term(env, &err),
    }
}

/// Extract extabar items from many documents in parallel
/// Returns one {:ok, items} | {:error, reason} per input, in order
#[rustler::nif(schedule = "DirtyCpu")]
fn extract_batch<'a>(env: Env<'a>, inputs: Vec<Binary<'a>>) -> NifResult<Term<'a>> {
    let documents: Vec<&[u8]> = inputs.iter().map(|b| b.as_slice()).collect();
    let results = extract_parallel(&documents, &Target::EXTRABAR);

    let mut list = Term::list_new_empty(env);
    for (result, input) in results.iter().zip(&inputs).rev() {
        let term = match result {
            Ok(items) => term::items_to_term(env, input, items)?,
            Err(err) => term::error_to_term(env, err)?,
        };
        list = list.list_prepend(term);
    }
    Ok(list)
}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.Extrabar.Native");
