//! Tag name classification
//!
//! Decides how a tag affects nesting depth. Names are compared as literal
//! bytes (ASCII case-insensitive), never through a hash.

/// How a tag name affects the outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Regular element, closed by a matching end tag
    Normal,
    /// Void element: never has a closing tag or body
    Void,
    /// Element whose body is raw text (`script`, `style`); markup and
    /// quotes inside the body are not structural
    RawText,
    /// Markup declaration (`<!DOCTYPE ..>`, `<?xml ..?>`), not an element
    Declaration,
}

impl TagKind {
    /// Classify a tag name
    pub fn classify(name: &[u8]) -> TagKind {
        match name.first() {
            Some(b'!') | Some(b'?') => TagKind::Declaration,
            _ if is_void_element(name) => TagKind::Void,
            _ if is_raw_text_element(name) => TagKind::RawText,
            _ => TagKind::Normal,
        }
    }
}

/// Elements defined to never have a closing tag
const VOID_ELEMENTS: [&[u8]; 14] = [
    b"img", b"input", b"br", b"meta", b"param", b"link", b"source", b"track", b"area", b"base",
    b"col", b"embed", b"hr", b"wbr",
];

/// Check if a tag name is a void element
#[inline]
pub fn is_void_element(name: &[u8]) -> bool {
    // Longest void name is 6 bytes
    if name.len() > 6 {
        return false;
    }
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// Elements whose content runs verbatim up to their own end tag
const RAW_TEXT_ELEMENTS: [&[u8]; 2] = [b"script", b"style"];

/// Check if a tag name is a raw-text element
#[inline]
fn is_raw_text_element(name: &[u8]) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|r| r.eq_ignore_ascii_case(name))
}

/// Case-insensitive tag or attribute name comparison
#[inline]
pub fn name_eq(a: &[u8], b: &[u8]) -> bool {
    a.eq_ignore_ascii_case(b)
}
