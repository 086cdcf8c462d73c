//! Extraction target
//!
//! Names the container to look for, the repeated child inside it, and the
//! three attributes harvested from each child. [`Target::EXTRABAR`] is the
//! built-in target; others can be assembled with the `const fn` builders.

/// What to do with a child that did not supply all three attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialItemPolicy {
    /// Keep the filled slots and let later elements complete them, even
    /// elements belonging to the next sibling child
    #[default]
    CarryOver,
    /// Drop the filled slots once the walk leaves the child's subtree
    ResetOnSibling,
}

/// Container/child/attribute names for one extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'c> {
    pub container_tag: &'c [u8],
    pub id_attr: &'c [u8],
    pub id_value: &'c [u8],
    pub child_tag: &'c [u8],
    pub title_attr: &'c [u8],
    pub href_attr: &'c [u8],
    pub src_attr: &'c [u8],
    pub partial: PartialItemPolicy,
}

impl Target<'static> {
    /// The search results "extabar" carousel: `<div id="extabar">` holding
    /// one `<a>` per entry
    pub const EXTRABAR: Target<'static> = Target::new(b"div", b"id", b"extabar", b"a");
}

impl<'c> Target<'c> {
    /// Target with the default harvested attributes (`title`, `href`, `src`)
    pub const fn new(
        container_tag: &'c [u8],
        id_attr: &'c [u8],
        id_value: &'c [u8],
        child_tag: &'c [u8],
    ) -> Self {
        Target {
            container_tag,
            id_attr,
            id_value,
            child_tag,
            title_attr: b"title",
            href_attr: b"href",
            src_attr: b"src",
            partial: PartialItemPolicy::CarryOver,
        }
    }

    /// Replace the three harvested attribute names
    pub const fn with_harvest(mut self, title: &'c [u8], href: &'c [u8], src: &'c [u8]) -> Self {
        self.title_attr = title;
        self.href_attr = href;
        self.src_attr = src;
        self
    }

    /// Replace the partial-item policy
    pub const fn with_partial_policy(mut self, partial: PartialItemPolicy) -> Self {
        self.partial = partial;
        self
    }
}

impl Default for Target<'static> {
    fn default() -> Self {
        Target::EXTRABAR
    }
}
