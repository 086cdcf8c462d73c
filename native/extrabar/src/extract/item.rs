//! Extracted items
//!
//! [`Item`] borrows the document. [`OwnedItem`] and [`ItemSpans`] are the
//! two ways to keep an item past that borrow: copied strings, or offsets.

use crate::core::span::Span;

/// One harvested child: views into the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    pub title: &'a [u8],
    pub href: &'a [u8],
    pub src: &'a [u8],
}

impl<'a> Item<'a> {
    /// Get the title as a string
    pub fn title_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.title).ok()
    }

    /// Get the link as a string
    pub fn href_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.href).ok()
    }

    /// Get the image source as a string
    pub fn src_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.src).ok()
    }

    /// Copy the item out of the input (invalid UTF-8 is replaced)
    pub fn to_owned_item(&self) -> OwnedItem {
        OwnedItem {
            title: String::from_utf8_lossy(self.title).into_owned(),
            href: String::from_utf8_lossy(self.href).into_owned(),
            src: String::from_utf8_lossy(self.src).into_owned(),
        }
    }

    /// Offsets of the three values within `input`.
    ///
    /// Returns `None` if a value does not point into `input` or lies past
    /// what a span can address.
    pub fn spans(&self, input: &[u8]) -> Option<ItemSpans> {
        Some(ItemSpans {
            title: Span::from_slice(self.title, input)?,
            href: Span::from_slice(self.href, input)?,
            src: Span::from_slice(self.src, input)?,
        })
    }
}

/// Owned version of Item for storage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OwnedItem {
    pub title: String,
    pub href: String,
    pub src: String,
}

/// Item as offsets into its document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemSpans {
    pub title: Span,
    pub href: Span,
    pub src: Span,
}

impl ItemSpans {
    /// Resolve the spans back into views of `input`
    pub fn resolve<'a>(&self, input: &'a [u8]) -> Item<'a> {
        Item {
            title: self.title.slice(input),
            href: self.href.slice(input),
            src: self.src.slice(input),
        }
    }
}
