//! Span - offset and length into original input
//!
//! Position-only reference to a portion of the input document. Items carry
//! spans when they have to outlive the borrow of the input, e.g. across a
//! rayon batch or when building sub-binaries for the NIF.

/// Longest input whose every offset and length fits in a [`Span`]
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// A span referencing a portion of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    /// Byte offset into the original input
    pub offset: u32,
    /// Length in bytes
    pub len: u32,
}

impl Span {
    /// Create a new span
    #[inline]
    pub const fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Check if this span is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the end offset (exclusive)
    #[inline]
    pub const fn end(&self) -> u32 {
        self.offset.saturating_add(self.len)
    }

    /// Extract the byte slice from input
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        let start = self.offset as usize;
        let end = start.saturating_add(self.len as usize);
        if end <= input.len() {
            &input[start..end]
        } else {
            &[]
        }
    }

    /// Extract as UTF-8 string from input
    #[inline]
    pub fn as_str<'a>(&self, input: &'a [u8]) -> Option<&'a str> {
        std::str::from_utf8(self.slice(input)).ok()
    }

    /// Create a span from a slice that points into input.
    ///
    /// Returns `None` if the slice is not inside `input` or does not fit
    /// in 32-bit offsets.
    pub fn from_slice(slice: &[u8], input: &[u8]) -> Option<Self> {
        let input_start = input.as_ptr() as usize;
        let slice_start = slice.as_ptr() as usize;
        let input_end = input_start + input.len();

        if slice_start < input_start || slice_start + slice.len() > input_end {
            return None;
        }

        let offset = u32::try_from(slice_start - input_start).ok()?;
        let len = u32::try_from(slice.len()).ok()?;
        Some(Self::new(offset, len))
    }
}
