//! Outline Scanner with OutlineVisitor Trait
//!
//! Walks a minified markup document once and reports every element it opens:
//! nesting depth, tag name and raw attribute text. No tree is built and
//! nothing is allocated; each [`ElementView`] borrows the input.
//!
//! Closing tags only move the depth. Comments are skipped without being
//! reported. The body of a `script` or `style` element is skipped up to its
//! end tag, so quoted markup in inline code never moves the depth. Void and self-closing elements are reported at their own depth
//! and give the depth back right after the visit, so the element that
//! follows them sees the same depth as they did.

use super::names::TagKind;
use super::scanner::{is_quote, is_whitespace, Scanner};
use crate::error::ExtractError;

/// Continuation signal returned by a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl From<bool> for Flow {
    /// `true` continues the scan, `false` stops it
    #[inline]
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Flow::Continue
        } else {
            Flow::Stop
        }
    }
}

/// One element as seen by the outline scanner
///
/// Built fresh for every visit. Borrowed slices stay valid as long as the
/// input does; copy them out to keep them longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementView<'a> {
    /// Nesting level of the element itself; top-level elements are at 1
    pub depth: usize,
    /// Element name as written (case preserved)
    pub tag_name: &'a [u8],
    /// Raw attribute text after the name, without a self-closing `/`
    pub attribute_text: &'a [u8],
    /// Byte offset of the element's `<`
    pub offset: usize,
    /// Tag ended in `/>`
    pub self_closing: bool,
    /// Tag name is a void element (`img`, `br`, ...)
    pub void: bool,
}

impl<'a> ElementView<'a> {
    /// True if no children can follow this element
    #[inline]
    pub fn closes_immediately(&self) -> bool {
        self.self_closing || self.void
    }
}

/// Trait for receiving element views
///
/// Implemented for any `FnMut(&ElementView) -> bool` (or `-> Flow`), so a
/// closure can be passed directly.
pub trait OutlineVisitor<'a> {
    /// Called once per element, in document order
    fn visit(&mut self, element: &ElementView<'a>) -> Flow;
}

impl<'a, F, R> OutlineVisitor<'a> for F
where
    F: FnMut(&ElementView<'a>) -> R,
    R: Into<Flow>,
{
    #[inline]
    fn visit(&mut self, element: &ElementView<'a>) -> Flow {
        self(element).into()
    }
}

/// Result of a completed scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    /// Number of elements handed to the visitor
    pub elements: usize,
    /// The visitor asked the scan to stop
    pub stopped: bool,
    /// Depth when the scan ended
    pub depth: usize,
}

/// Tag opened by '<' whose '>' has not been seen yet
#[derive(Debug, Clone, Copy)]
struct PendingTag {
    /// First byte after '<'
    start: usize,
    /// Whitespace that ended the name, once seen
    name_end: Option<usize>,
}

/// Single-pass outline scanner
pub struct OutlineScanner<'a> {
    input: &'a [u8],
    scanner: Scanner<'a>,
    depth: usize,
    pending: Option<PendingTag>,
    elements: usize,
}

impl<'a> OutlineScanner<'a> {
    /// Create a new outline scanner for the input
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            scanner: Scanner::new(input),
            depth: 0,
            pending: None,
            elements: 0,
        }
    }

    /// Scan the document, calling the visitor for each element
    pub fn scan<V: OutlineVisitor<'a>>(
        &mut self,
        visitor: &mut V,
    ) -> Result<ScanSummary, ExtractError> {
        while !self.scanner.is_eof() {
            if self.pending.is_some() {
                if self.scan_in_tag(visitor) == Flow::Stop {
                    return Ok(self.summary(true));
                }
            } else {
                if !self.scanner.skip_to_tag_start() {
                    break;
                }
                self.scan_markup()?;
            }
        }

        // Tail of the buffer: a tag left open by a truncated document
        if self.pending.is_some() && self.flush(self.input.len(), visitor) == Flow::Stop {
            return Ok(self.summary(true));
        }

        Ok(self.summary(false))
    }

    fn summary(&self, stopped: bool) -> ScanSummary {
        tracing::trace!(
            elements = self.elements,
            depth = self.depth,
            stopped,
            "outline finished"
        );
        ScanSummary {
            elements: self.elements,
            stopped,
            depth: self.depth,
        }
    }

    /// Handle markup starting at '<'
    fn scan_markup(&mut self) -> Result<(), ExtractError> {
        let start = self.scanner.position();

        match self.scanner.peek_at(1) {
            Some(b'/') => {
                self.depth = match self.depth.checked_sub(1) {
                    Some(depth) => depth,
                    None => {
                        tracing::warn!(position = start, "closing tag without an open element");
                        return Err(ExtractError::malformed(start));
                    }
                };
                self.scanner.advance(2);
                self.scanner.skip_past_tag_end();
            }
            Some(b'!') if self.scanner.starts_with(b"<!--") => {
                self.scanner.advance(4);
                self.scanner.skip_past_comment_end();
            }
            Some(c) if c.is_ascii_alphabetic() || c == b'!' || c == b'?' => {
                self.depth += 1;
                self.scanner.advance(1);
                self.pending = Some(PendingTag {
                    start: start + 1,
                    name_end: None,
                });
            }
            _ => {
                // "a < b" in text, or a '<' at the very end: not markup
                self.scanner.advance(1);
            }
        }

        Ok(())
    }

    /// Consume bytes inside an open tag up to and including its '>'
    fn scan_in_tag<V: OutlineVisitor<'a>>(&mut self, visitor: &mut V) -> Flow {
        while let Some(b) = self.scanner.peek() {
            if is_quote(b) {
                self.scanner.skip_quoted();
                continue;
            }

            match b {
                b'>' => {
                    let end = self.scanner.position();
                    self.scanner.advance(1);
                    return self.flush(end, visitor);
                }
                b'<' => {
                    // Tag never closed; drop it and rescan from this '<'
                    self.pending = None;
                    self.depth -= 1;
                    return Flow::Continue;
                }
                _ if is_whitespace(b) => {
                    if let Some(tag) = self.pending.as_mut() {
                        if tag.name_end.is_none() {
                            tag.name_end = Some(self.scanner.position());
                        }
                    }
                }
                _ => {}
            }

            self.scanner.advance(1);
        }

        Flow::Continue
    }

    /// Report the pending tag, which ends at `end` (the '>' or end of input)
    fn flush<V: OutlineVisitor<'a>>(&mut self, end: usize, visitor: &mut V) -> Flow {
        let tag = match self.pending.take() {
            Some(tag) => tag,
            None => return Flow::Continue,
        };

        let self_closing = end > tag.start && self.scanner.byte_before(end) == Some(b'/');
        let body_end = if self_closing { end - 1 } else { end };

        let (tag_name, attribute_text) = match tag.name_end {
            Some(name_end) => {
                let attrs_start = (name_end + 1).min(body_end);
                (
                    self.scanner.slice(tag.start, name_end),
                    self.scanner.slice(attrs_start, body_end),
                )
            }
            None => (self.scanner.slice(tag.start, body_end), &[][..]),
        };

        let kind = TagKind::classify(tag_name);
        if tag_name.is_empty() || kind == TagKind::Declaration {
            self.depth -= 1;
            return Flow::Continue;
        }

        let view = ElementView {
            depth: self.depth,
            tag_name,
            attribute_text,
            offset: tag.start - 1,
            self_closing,
            void: kind == TagKind::Void,
        };

        self.elements += 1;
        let flow = visitor.visit(&view);

        if view.closes_immediately() {
            self.depth -= 1;
        } else if kind == TagKind::RawText {
            // Body is opaque: land on its end tag, which closes it as usual
            self.scanner.skip_to_end_tag(tag_name);
        }

        flow
    }
}

/// Scan `input` once, handing every element to `visitor`
pub fn outline<'a, V: OutlineVisitor<'a>>(
    input: &'a [u8],
    visitor: &mut V,
) -> Result<ScanSummary, ExtractError> {
    OutlineScanner::new(input).scan(visitor)
}
