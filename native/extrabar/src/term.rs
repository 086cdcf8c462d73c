//! Elixir Term Conversion Utilities
//!
//! Converts extraction results to Elixir terms. Item fields are returned as
//! sub-binaries of the caller's input, so no item bytes are copied.

use rustler::{Atom, Binary, Encoder, Env, NifResult, Term};

use crate::core::span::Span;
use crate::error::ExtractError;
use crate::extract::ItemSpans;

// Pre-defined atoms for efficiency - created once at compile time
rustler::atoms! {
    ok,
    error,
}

/// Convert items to `{:ok, [{title, href, src}, ...]}`
pub fn items_to_term<'a>(
    env: Env<'a>,
    input: &Binary<'a>,
    items: &[ItemSpans],
) -> NifResult<Term<'a>> {
    let mut list = Term::list_new_empty(env);
    for item in items.iter().rev() {
        let tuple = (
            subbinary(input, item.title)?,
            subbinary(input, item.href)?,
            subbinary(input, item.src)?,
        );
        list = list.list_prepend(tuple.encode(env));
    }
    Ok((ok(), list).encode(env))
}

/// Convert an error to `{:error, {kind, position}}`, where `kind` is the
/// error kind's snake_case name as an atom
pub fn error_to_term<'a>(env: Env<'a>, err: &ExtractError) -> NifResult<Term<'a>> {
    let kind = Atom::from_str(env, err.kind.as_str())?;
    Ok((error(), (kind, err.position)).encode(env))
}

#[inline]
fn subbinary<'a>(input: &Binary<'a>, span: Span) -> NifResult<Binary<'a>> {
    input.make_subbinary(span.offset as usize, span.len as usize)
}
