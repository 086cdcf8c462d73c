//! SIMD-accelerated byte cursor using memchr
//!
//! Uses memchr crate for fast byte searching with SIMD acceleration:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)
//!
//! The outline scanner spends most of its time skipping text runs, quoted
//! attribute values and script bodies, all of which reduce to "find the
//! next X".

use memchr::{memchr, memmem};

/// Cursor over a markup document
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get a slice from start to end positions
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Peek at current byte without advancing
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at byte at offset from current position
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    /// Byte immediately before `pos`, if any
    #[inline]
    pub fn byte_before(&self, pos: usize) -> Option<u8> {
        pos.checked_sub(1).and_then(|i| self.input.get(i).copied())
    }

    /// Advance by n bytes
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Check if input starts with a byte sequence at current position
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        self.input[self.pos..].starts_with(needle)
    }

    /// Jump to the next '<', or to the end when there is none.
    /// Returns true if a '<' was found.
    #[inline]
    pub fn skip_to_tag_start(&mut self) -> bool {
        self.skip_to_byte(b'<')
    }

    /// Jump to the next occurrence of `byte`, or to the end when there is none
    #[inline]
    pub fn skip_to_byte(&mut self, byte: u8) -> bool {
        match memchr(byte, &self.input[self.pos..]) {
            Some(i) => {
                self.pos += i;
                true
            }
            None => {
                self.pos = self.input.len();
                false
            }
        }
    }

    /// Skip a quoted run. The cursor must sit on the opening quote; on return
    /// it sits just past the matching quote, or at the end if unterminated.
    #[inline]
    pub fn skip_quoted(&mut self) {
        let quote = match self.peek() {
            Some(q) => q,
            None => return,
        };
        self.advance(1);
        if self.skip_to_byte(quote) {
            self.advance(1);
        }
    }

    /// Skip past the next '>' (end of a closing tag)
    #[inline]
    pub fn skip_past_tag_end(&mut self) {
        if self.skip_to_byte(b'>') {
            self.advance(1);
        }
    }

    /// Skip past the next "-->" (end of a comment), or to the end if unterminated
    pub fn skip_past_comment_end(&mut self) {
        match memmem::find(&self.input[self.pos..], b"-->") {
            Some(i) => self.pos += i + 3,
            None => self.pos = self.input.len(),
        }
    }

    /// Jump to the `</name` that ends a raw-text element, or to the end if
    /// there is none. The name matches ASCII case-insensitively and must be
    /// followed by `>`, `/`, whitespace or the end of input.
    pub fn skip_to_end_tag(&mut self, name: &[u8]) {
        while let Some(i) = memmem::find(&self.input[self.pos..], b"</") {
            let at = self.pos + i;
            let name_end = at + 2 + name.len();
            let name_matches = self
                .input
                .get(at + 2..name_end)
                .is_some_and(|n| n.eq_ignore_ascii_case(name));
            let bounded = match self.input.get(name_end) {
                Some(&b) => b == b'>' || b == b'/' || is_whitespace(b),
                None => true,
            };
            if name_matches && bounded {
                self.pos = at;
                return;
            }
            self.pos = at + 2;
        }
        self.pos = self.input.len();
    }
}

/// Check if byte is HTML whitespace
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// Check if byte opens a quoted run
#[inline]
pub fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}
