//! End-to-end extraction tests
//!
//! Runs the public API over realistic minified search-result markup and the
//! small scenarios the extractor must get right.

use extrabar::{
    collect_items, outline, parse, parse_with, ElementView, ErrorKind, ExtractionState,
    OwnedItem, PartialItemPolicy, Target,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn owned(title: &str, href: &str, src: &str) -> OwnedItem {
    OwnedItem {
        title: title.to_string(),
        href: href.to_string(),
        src: src.to_string(),
    }
}

fn extract(html: &[u8], target: &Target<'_>) -> Vec<OwnedItem> {
    collect_items(html, target)
        .unwrap()
        .iter()
        .map(|item| item.to_owned_item())
        .collect()
}

/// Trimmed-down search page: a header, the carousel, then results that
/// must never be reached.
const SEARCH_PAGE: &str = concat!(
    "<!doctype html><html itemscope=\"\" lang=\"en\"><head><meta charset=\"UTF-8\">",
    "<title>van gogh paintings - Search</title><link rel=\"icon\" href=\"/favicon.ico\">",
    "<script nonce=\"x\">if(a < 2){b()}</script></head><body>",
    "<!-- carousel --><div class=\"top\"><div id=\"extabar\" jsname=\"k\">",
    "<div class=\"rl_container\"><g-scrolling-carousel>",
    "<a class=\"klitem\" title=\"The Starry Night\" href=\"/search?q=The+Starry+Night&amp;stick=H4s\">",
    "<div class=\"klic\"><g-img><img id=\"kximg0\" src=\"data:image/jpeg;base64,/9j/4AAQ==\" alt=\"\"></g-img></div>",
    "<div class=\"kltat\"><span>The Starry Night</span></div></a>",
    "<a class=\"klitem\" title=\"Van Gogh's Sunflowers\" href=\"/search?q=Sunflowers\">",
    "<div class=\"klic\"><g-img><img id=\"kximg1\" src=\"https://example.com/sunflowers.jpg\"/></g-img></div>",
    "<div class=\"kltat\"><span>Sunflowers</span><br></div></a>",
    "<a class=\"klitem\" title=\"Café Terrace at Night\" href=\"/search?q=Cafe+Terrace\">",
    "<div class=\"klic\"><img src='/images/cafe.png' data-atf=\"1\"></div></a>",
    "</g-scrolling-carousel></div></div></div>",
    "<div id=\"search\"><a title=\"result\" href=\"/r\" src=\"/r.png\"></a></div>",
    "</body></html>"
);

#[test]
fn extracts_search_page_carousel() {
    init_tracing();

    let items = extract(SEARCH_PAGE.as_bytes(), &Target::EXTRABAR);

    assert_eq!(
        items,
        vec![
            owned(
                "The Starry Night",
                "/search?q=The+Starry+Night&amp;stick=H4s",
                "data:image/jpeg;base64,/9j/4AAQ=="
            ),
            owned(
                "Van Gogh's Sunflowers",
                "/search?q=Sunflowers",
                "https://example.com/sunflowers.jpg"
            ),
            owned(
                "Café Terrace at Night",
                "/search?q=Cafe+Terrace",
                "/images/cafe.png"
            ),
        ]
    );
}

#[test]
fn stops_after_leaving_container() {
    let html = SEARCH_PAGE.as_bytes();
    let results_div = SEARCH_PAGE.find("<div id=\"search\">").unwrap();

    let mut offsets = Vec::new();
    outline(html, &mut |e: &ElementView| {
        offsets.push(e.offset);
        true
    })
    .unwrap();

    // The scan ends on the first element outside the carousel
    let summary = parse(html, |_| {}).unwrap();
    let visited = offsets.iter().position(|&o| o == results_div).unwrap() + 1;
    assert_eq!(summary.items, 3);
    assert_eq!(summary.elements, visited);
    assert!(summary.elements < offsets.len());
    assert_eq!(summary.container_depth, Some(4));
}

#[test]
fn inline_script_markup_does_not_move_depth() {
    let html = b"<html><head><script>var s=\"</div></div>\";</script></head><body>\
<div id=\"extabar\"><script>g('<a title=\"x\">')</script><a title=\"T\" href=\"/l\" src=\"/i\"></a>\
<style>a[title='q']>b{}</style></div><div id=\"search\"></div></body></html>";

    let summary = parse(html, |_| {}).unwrap();
    assert_eq!(extract(html, &Target::EXTRABAR), vec![owned("T", "/l", "/i")]);
    assert_eq!(summary.items, 1);
    assert_eq!(summary.container_depth, Some(3));
}

#[test]
fn scenario_two_anchors() {
    let html = b"<div id=\"extabar\"><a title=\"T1\" href=\"/l1\" src=\"/i1\"></a>\
<a title=\"T2\" href=\"/l2\" src=\"/i2\"></a></div><div>other</div>";

    let mut seen = Vec::new();
    let summary = parse(html, |item| seen.push(item.to_owned_item())).unwrap();

    assert_eq!(seen, vec![owned("T1", "/l1", "/i1"), owned("T2", "/l2", "/i2")]);
    assert_eq!(summary.elements, 4);
}

#[rstest]
#[case::no_container(b"<div><a title=\"T\" href=\"/l\" src=\"/i\"></a></div>".as_slice(), 0)]
#[case::empty_input(b"".as_slice(), 0)]
#[case::text_only(b"nothing to see".as_slice(), 0)]
#[case::container_without_children(b"<div id=\"extabar\"><span></span></div>".as_slice(), 0)]
#[case::one_child(b"<div id=\"extabar\"><a title=\"T\" href=\"/l\" src=\"/i\"></a></div>".as_slice(), 1)]
#[case::unquoted_id(b"<div id=extabar><a title=T href=/l src=/i></a></div>".as_slice(), 1)]
#[case::uppercase_tags(b"<DIV ID=\"extabar\"><A TITLE=\"T\" HREF=\"/l\" SRC=\"/i\"></A></DIV>".as_slice(), 1)]
#[case::truncated(b"<div id=\"extabar\"><a title=\"T\" href=\"/l\" src=\"/i\"".as_slice(), 1)]
#[case::comment_between(b"<div id=\"extabar\"><a title=\"T\" href=\"/l\"><!-- <img src=\"/no\"> --><img src=\"/i\"></a></div>".as_slice(), 1)]
#[case::missing_src(b"<div id=\"extabar\"><a title=\"T\" href=\"/l\"></a></div>".as_slice(), 0)]
fn item_counts(#[case] html: &[u8], #[case] expected: usize) {
    let summary = parse(html, |_| {}).unwrap();
    assert_eq!(summary.items, expected);
}

#[test]
fn many_children_in_order() {
    let mut html = String::from("<div id=\"extabar\">");
    for i in 0..100 {
        html.push_str(&format!(
            "<div><a title=\"t{i}\" href=\"/h{i}\"><img src=\"/s{i}\"></a></div>"
        ));
    }
    html.push_str("</div>");

    let items = extract(html.as_bytes(), &Target::EXTRABAR);
    assert_eq!(items.len(), 100);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item, &owned(&format!("t{i}"), &format!("/h{i}"), &format!("/s{i}")));
    }
}

#[rstest]
#[case::carry_over(PartialItemPolicy::CarryOver, vec![owned("T1", "/l1", "/i2")])]
#[case::reset_on_sibling(PartialItemPolicy::ResetOnSibling, vec![])]
fn partial_item_policy(#[case] policy: PartialItemPolicy, #[case] expected: Vec<OwnedItem>) {
    let html = b"<div id=\"extabar\"><a title=\"T1\" href=\"/l1\"></a><a src=\"/i2\"></a></div>";
    let target = Target::EXTRABAR.with_partial_policy(policy);
    assert_eq!(extract(html, &target), expected);
}

#[test]
fn custom_target() {
    let html = b"<section data-role=\"shelf\"><article data-name=\"A\" data-url=\"/a\" data-cover=\"/a.jpg\"></article></section>";
    let target = Target::new(b"section", b"data-role", b"shelf", b"article")
        .with_harvest(b"data-name", b"data-url", b"data-cover");

    let mut seen = Vec::new();
    let summary = parse_with(html, &target, |item| seen.push(item.to_owned_item())).unwrap();

    assert_eq!(seen, vec![owned("A", "/a", "/a.jpg")]);
    assert_eq!(summary.container_depth, Some(1));
    assert_eq!(summary.state, ExtractionState::SeekingChild);
}

#[test]
fn malformed_document_is_reported() {
    let err = parse(b"<p></p></p><div id=\"extabar\"></div>", |_| {}).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedDocument);
    assert_eq!(err.position, 7);
    assert_eq!(err.to_string(), "malformed document at byte 7");
}

#[test]
fn stray_closing_tags_after_container_are_never_reached() {
    let html = b"<div id=\"extabar\"><a title=\"T\" href=\"/l\" src=\"/i\"></a></div><p></p></p></p>";
    let items = extract(html, &Target::EXTRABAR);
    assert_eq!(items.len(), 1);
}
