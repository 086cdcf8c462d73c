//! Extraction State Machine
//!
//! Layers a three-state protocol on the outline scanner:
//!
//! ```text
//! SeekingContainer --(container tag with matching id)--> SeekingChild
//! SeekingChild     --(child tag)-----------------------> Harvesting
//! Harvesting       --(title, href and src all filled)--> SeekingChild
//! ```
//!
//! Once the container is found, the first element at or above the
//! container's depth ends the scan. Memory use is the three slot views,
//! whatever the document size.

pub mod item;
pub mod target;

use crate::core::attributes::Parameters;
use crate::core::names::name_eq;
use crate::core::outline::{outline, ElementView, Flow, OutlineVisitor};
use crate::error::ExtractError;

pub use item::{Item, ItemSpans, OwnedItem};
pub use target::{PartialItemPolicy, Target};

/// Where the extractor is in the container → child → attributes protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionState {
    #[default]
    SeekingContainer,
    SeekingChild,
    Harvesting,
}

/// Result of one extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractSummary {
    /// Items handed to the callback
    pub items: usize,
    /// Elements the scanner visited
    pub elements: usize,
    /// Depth of the container, if one was found
    pub container_depth: Option<usize>,
    /// State when the scan ended
    pub state: ExtractionState,
}

/// Accumulated attribute values for the current child
#[derive(Debug, Clone, Copy, Default)]
struct Slots<'a> {
    title: Option<&'a [u8]>,
    href: Option<&'a [u8]>,
    src: Option<&'a [u8]>,
}

impl<'a> Slots<'a> {
    fn complete(&self) -> Option<Item<'a>> {
        Some(Item {
            title: self.title?,
            href: self.href?,
            src: self.src?,
        })
    }
}

/// OutlineVisitor that drives the extraction protocol
pub struct Extractor<'a, 'c, F> {
    target: Target<'c>,
    state: ExtractionState,
    container_depth: Option<usize>,
    child_depth: Option<usize>,
    slots: Slots<'a>,
    on_item: F,
    items: usize,
}

impl<'a, 'c, F> Extractor<'a, 'c, F>
where
    F: FnMut(Item<'a>),
{
    /// Create an extractor for `target` that reports items to `on_item`
    pub fn new(target: Target<'c>, on_item: F) -> Self {
        Self {
            target,
            state: ExtractionState::SeekingContainer,
            container_depth: None,
            child_depth: None,
            slots: Slots::default(),
            on_item,
            items: 0,
        }
    }

    /// Current protocol state
    pub fn state(&self) -> ExtractionState {
        self.state
    }

    /// Depth the container was found at
    pub fn container_depth(&self) -> Option<usize> {
        self.container_depth
    }

    /// Number of items emitted so far
    pub fn items(&self) -> usize {
        self.items
    }

    fn is_container(&self, element: &ElementView<'a>) -> bool {
        name_eq(element.tag_name, self.target.container_tag)
            && Parameters::new(element.attribute_text)
                .any(|(k, v)| name_eq(k, self.target.id_attr) && v == self.target.id_value)
    }

    fn seek_child(&mut self, element: &ElementView<'a>) {
        if name_eq(element.tag_name, self.target.child_tag) {
            self.child_depth = Some(element.depth);
            self.state = ExtractionState::Harvesting;
            self.harvest(element);
        }
    }

    /// Fill empty slots from this element, emitting the item once complete
    fn harvest(&mut self, element: &ElementView<'a>) {
        let target = &self.target;
        let slots = &mut self.slots;

        for (key, value) in Parameters::new(element.attribute_text) {
            if value.is_empty() {
                continue;
            }
            let slot = if name_eq(key, target.title_attr) {
                &mut slots.title
            } else if name_eq(key, target.href_attr) {
                &mut slots.href
            } else if name_eq(key, target.src_attr) {
                &mut slots.src
            } else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        if let Some(item) = self.slots.complete() {
            tracing::trace!(offset = element.offset, "item complete");
            (self.on_item)(item);
            self.items += 1;
            self.slots = Slots::default();
            self.child_depth = None;
            self.state = ExtractionState::SeekingChild;
        }
    }
}

impl<'a, 'c, F> OutlineVisitor<'a> for Extractor<'a, 'c, F>
where
    F: FnMut(Item<'a>),
{
    fn visit(&mut self, element: &ElementView<'a>) -> Flow {
        // Walked out of the container's subtree
        if let Some(container_depth) = self.container_depth {
            if element.depth <= container_depth {
                return Flow::Stop;
            }
        }

        match self.state {
            ExtractionState::SeekingContainer => {
                if self.is_container(element) {
                    tracing::debug!(
                        depth = element.depth,
                        offset = element.offset,
                        "container found"
                    );
                    self.container_depth = Some(element.depth);
                    self.state = ExtractionState::SeekingChild;
                }
            }
            ExtractionState::SeekingChild => self.seek_child(element),
            ExtractionState::Harvesting => {
                let left_child = self
                    .child_depth
                    .is_some_and(|child_depth| element.depth <= child_depth);

                if left_child && self.target.partial == PartialItemPolicy::ResetOnSibling {
                    self.slots = Slots::default();
                    self.child_depth = None;
                    self.state = ExtractionState::SeekingChild;
                    self.seek_child(element);
                } else {
                    self.harvest(element);
                }
            }
        }

        Flow::Continue
    }
}

/// Extract the built-in extabar items from `html`
pub fn parse<'a, F>(html: &'a [u8], on_item: F) -> Result<ExtractSummary, ExtractError>
where
    F: FnMut(Item<'a>),
{
    parse_with(html, &Target::EXTRABAR, on_item)
}

/// Extract items described by `target` from `html`
pub fn parse_with<'a, F>(
    html: &'a [u8],
    target: &Target<'_>,
    on_item: F,
) -> Result<ExtractSummary, ExtractError>
where
    F: FnMut(Item<'a>),
{
    let mut extractor = Extractor::new(*target, on_item);
    let scan = outline(html, &mut extractor)?;

    tracing::debug!(
        items = extractor.items,
        elements = scan.elements,
        found = extractor.container_depth.is_some(),
        "extraction finished"
    );

    Ok(ExtractSummary {
        items: extractor.items,
        elements: scan.elements,
        container_depth: extractor.container_depth,
        state: extractor.state,
    })
}

/// Extract and collect all items described by `target`
pub fn collect_items<'a>(html: &'a [u8], target: &Target<'_>) -> Result<Vec<Item<'a>>, ExtractError> {
    let mut items = Vec::new();
    parse_with(html, target, |item| items.push(item))?;
    Ok(items)
}
