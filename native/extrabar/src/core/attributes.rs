//! Attribute Tokenizer
//!
//! Splits the raw attribute text of a tag into key/value pairs without
//! allocating. Values are views into the input with surrounding quotes
//! stripped; entities are not decoded.

use super::names::name_eq;
use super::scanner::{is_quote, is_whitespace};
use memchr::memchr;

/// Iterator over the `key=value` pairs of an attribute span
///
/// Pairs are separated by unquoted whitespace. Tokens without an `=`
/// (boolean attributes such as `disabled`) are skipped.
#[derive(Debug, Clone)]
pub struct Parameters<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parameters<'a> {
    /// Create a tokenizer over raw attribute text
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Parameters { input, pos: 0 }
    }
}

impl<'a> Iterator for Parameters<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;

        loop {
            while self.pos < input.len() && is_whitespace(input[self.pos]) {
                self.pos += 1;
            }
            if self.pos >= input.len() {
                return None;
            }

            let start = self.pos;
            let mut eq = None;

            while self.pos < input.len() {
                let b = input[self.pos];
                if is_quote(b) {
                    self.pos += 1;
                    match memchr(b, &input[self.pos..]) {
                        Some(i) => self.pos += i + 1,
                        None => self.pos = input.len(),
                    }
                    continue;
                }
                if is_whitespace(b) {
                    break;
                }
                // Only the first '=' splits; later ones belong to an unquoted value
                if b == b'=' && eq.is_none() {
                    eq = Some(self.pos);
                }
                self.pos += 1;
            }

            if let Some(eq) = eq {
                let key = &input[start..eq];
                if !key.is_empty() {
                    return Some((key, unquote(&input[eq + 1..self.pos])));
                }
            }
        }
    }
}

/// Visit every `key=value` pair of an attribute span in order
pub fn parameters<'a, F>(input: &'a [u8], mut visit: F)
where
    F: FnMut(&'a [u8], &'a [u8]),
{
    for (key, value) in Parameters::new(input) {
        visit(key, value);
    }
}

/// Find the value of the first attribute named `key` (ASCII case-insensitive)
pub fn find_parameter<'a>(input: &'a [u8], key: &[u8]) -> Option<&'a [u8]> {
    Parameters::new(input)
        .find(|(k, _)| name_eq(k, key))
        .map(|(_, v)| v)
}

/// Strip surrounding quotes from a raw value.
/// An unterminated quoted value loses only its opening quote.
#[inline]
fn unquote(value: &[u8]) -> &[u8] {
    match value.first() {
        Some(&q) if is_quote(q) => {
            let rest = &value[1..];
            match rest.last() {
                Some(&last) if last == q => &rest[..rest.len() - 1],
                _ => rest,
            }
        }
        _ => value,
    }
}
