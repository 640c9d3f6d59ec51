// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pretty_assertions::assert_eq;

use svgparts::{
    group,
    group_documents,
    merge,
    merge_documents,
    split,
    Document,
    Error,
    GROUP_ID,
};

macro_rules! test_compose {
    ($name:ident, $func:ident, $inputs:expr, $out_text:expr) => (
        #[test]
        fn $name() {
            assert_eq!($func(&$inputs).unwrap(), $out_text);
        }
    )
}

test_compose!(group_1, group,
[
    "<svg viewBox='0 0 10 10' width='10'><rect/></svg>",
    "<svg viewBox='0 0 99 99'><g id='a'><circle/></g><path/></svg>",
],
"<svg viewBox=\"0 0 10 10\" width=\"10\" xmlns=\"http://www.w3.org/2000/svg\">\
<g id=\"svg-group\"><rect/><g id=\"a\"><circle/></g><path/></g></svg>");

test_compose!(merge_1, merge,
[
    "<svg viewBox='0 0 10 10' width='10'><rect/></svg>",
    "<svg viewBox='0 0 99 99'><g id='a'><circle/></g><path/></svg>",
],
"<svg viewBox=\"0 0 10 10\" width=\"10\" xmlns=\"http://www.w3.org/2000/svg\">\
<rect/><g id=\"a\"><circle/></g><path/></svg>");

test_compose!(group_empty_documents_1, group,
["<svg/>", "<svg/>", "<svg/>"],
"<svg xmlns=\"http://www.w3.org/2000/svg\"><g id=\"svg-group\"/></svg>");

test_compose!(merge_empty_documents_1, merge,
["<svg height='3'/>", "<svg/>"],
"<svg height=\"3\" xmlns=\"http://www.w3.org/2000/svg\"/>");

test_compose!(group_text_1, group,
["<svg><text>a &amp; b</text></svg>", "<svg><rect/></svg>"],
"<svg xmlns=\"http://www.w3.org/2000/svg\"><g id=\"svg-group\"><text>a &amp; b</text><rect/></g></svg>");

#[test]
fn compose_empty_1() {
    let inputs: [&str; 0] = [];
    assert!(matches!(group(&inputs), Err(Error::EmptyInput)));
    assert!(matches!(merge(&inputs), Err(Error::EmptyInput)));
}

#[test]
fn compose_single_1() {
    // Returned as is, even when not a valid SVG.
    let text = "<svg viewBox='0 0 1 1'>\n  <rect/>\n</svg>";
    assert_eq!(group(&[text]).unwrap(), text);
    assert_eq!(merge(&[text]).unwrap(), text);
    assert_eq!(merge(&["not an svg"]).unwrap(), "not an svg");
}

#[test]
fn compose_invalid_1() {
    let inputs = ["<svg><rect/></svg>", "<svg><rect></svg>"];
    assert!(matches!(group(&inputs), Err(Error::ParsingFailed(_))));
    assert!(matches!(merge(&inputs), Err(Error::ParsingFailed(_))));
}

#[test]
fn compose_strings_1() {
    let inputs = vec![String::from("<svg><rect/></svg>"), String::from("<svg><circle/></svg>")];
    assert_eq!(merge(&inputs).unwrap(),
               "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/><circle/></svg>");
}

#[test]
fn group_has_single_child_1() {
    let svg = group(&["<svg><rect/><rect/></svg>", "<svg><circle/></svg>"]).unwrap();
    let doc = Document::parse(&svg).unwrap();

    assert_eq!(doc.root().children().count(), 1);

    let g = doc.root().first_child().unwrap();
    assert_eq!(g.tag_name(), "g");
    assert_eq!(g.attribute("id"), Some(GROUP_ID));
    assert_eq!(g.children().count(), 3);
}

#[test]
fn group_of_split_1() {
    let text = "<svg viewBox='0 0 8 8'><g><rect/><g><circle/></g></g><path/><line/></svg>";
    let parts = split(text).unwrap();
    assert_eq!(parts.len(), 4);

    let svg = group(&parts).unwrap();
    let doc = Document::parse(&svg).unwrap();

    assert_eq!(doc.canvas(), Document::parse(text).unwrap().canvas());
    assert_eq!(doc.root().first_child().unwrap().children().count(), parts.len());
    assert_eq!(doc.element_count(), parts.len());
}

#[test]
fn merge_of_split_1() {
    let text = "<svg width='4'><g><rect id='a'/><circle id='b'/></g><path id='c'/></svg>";
    let svg = merge(&split(text).unwrap()).unwrap();

    assert_eq!(svg,
        "<svg width=\"4\" xmlns=\"http://www.w3.org/2000/svg\">\
         <rect id=\"a\"/><circle id=\"b\"/><path id=\"c\"/></svg>");
}

#[test]
fn compose_documents_1() {
    let docs = vec![
        Document::parse("<svg width='1'><rect/></svg>").unwrap(),
        Document::parse("<svg width='2'><circle/></svg>").unwrap(),
    ];

    assert_eq!(group_documents(&docs).unwrap(),
        "<svg width=\"1\" xmlns=\"http://www.w3.org/2000/svg\">\
         <g id=\"svg-group\"><rect/><circle/></g></svg>");
    assert_eq!(merge_documents(&docs).unwrap(),
        "<svg width=\"1\" xmlns=\"http://www.w3.org/2000/svg\"><rect/><circle/></svg>");
}

const INKSCAPE_SVG: &str = "\
<svg xmlns='http://www.w3.org/2000/svg' \
     xmlns:rdf='http://www.w3.org/1999/02/22-rdf-syntax-ns#' \
     xmlns:inkscape='http://www.inkscape.org/namespaces/inkscape'>\
<metadata><rdf:RDF><rdf:Description rdf:about='x'/></rdf:RDF></metadata>\
<g inkscape:label='Layer 1'><rect/></g></svg>";

#[test]
fn merge_foreign_namespaces_1() {
    let svg = merge(&[INKSCAPE_SVG, "<svg><circle/></svg>"]).unwrap();

    assert_eq!(svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\" \
         xmlns:inkscape=\"http://www.inkscape.org/namespaces/inkscape\">\
         <metadata><rdf:RDF><rdf:Description rdf:about=\"x\"/></rdf:RDF></metadata>\
         <g inkscape:label=\"Layer 1\"><rect/></g><circle/></svg>");

    // Merging again keeps everything in place.
    let doc = Document::parse(&svg).unwrap();
    assert_eq!(Document::parse(&merge(&[svg.as_str(), "<svg/>"]).unwrap()).unwrap(), doc);
}

#[test]
fn split_foreign_namespaces_1() {
    let parts = split(INKSCAPE_SVG).unwrap();

    assert_eq!(parts, [
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\">\
         <metadata><rdf:RDF><rdf:Description rdf:about=\"x\"/></rdf:RDF></metadata></svg>",
        "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>",
    ]);

    let regrouped = Document::parse(&group(&parts).unwrap()).unwrap();
    let desc = regrouped.descendants().find(|n| n.tag_name() == "rdf:Description").unwrap();
    assert_eq!(desc.attribute("rdf:about"), Some("x"));
}

#[test]
fn merge_prefix_conflict_1() {
    let svg = merge(&[
        "<svg xmlns:a='http://a.com'><a:x/></svg>",
        "<svg xmlns:a='http://b.com'><a:y/></svg>",
    ]).unwrap();

    assert_eq!(svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:a=\"http://a.com\">\
         <a:x/><a:y xmlns:a=\"http://b.com\"/></svg>");
}
