// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pretty_assertions::assert_eq;

use svgparts::{
    decompose,
    split,
    split_document,
    split_shallow,
    Document,
    ElementKind,
    Error,
};

macro_rules! test_split {
    ($name:ident, $in_text:expr, $out:expr) => (
        #[test]
        fn $name() {
            let parts = split($in_text).unwrap();
            let expected: Vec<&str> = $out;
            assert_eq!(parts, expected);

            // Both strategies must agree.
            assert_eq!(split_shallow($in_text).unwrap(), parts);
        }
    )
}

test_split!(split_empty_1,
"<svg viewBox='0 0 10 10'/>",
vec![]);

test_split!(split_empty_groups_1,
"<svg><g><g/></g><g/></svg>",
vec![]);

test_split!(split_group_1,
"<svg viewBox=\"0 0 10 10\"><g><circle r=\"1\"/><rect width=\"2\" height=\"2\"/></g></svg>",
vec![
    "<svg viewBox=\"0 0 10 10\" xmlns=\"http://www.w3.org/2000/svg\"><circle r=\"1\"/></svg>",
    "<svg viewBox=\"0 0 10 10\" xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"2\" height=\"2\"/></svg>",
]);

test_split!(split_flat_1,
"<svg viewBox='0 0 100 100'><rect width='10'/><circle r='5'/></svg>",
vec![
    "<svg viewBox=\"0 0 100 100\" xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"10\"/></svg>",
    "<svg viewBox=\"0 0 100 100\" xmlns=\"http://www.w3.org/2000/svg\"><circle r=\"5\"/></svg>",
]);

test_split!(split_nested_1,
"<svg width='10' height='20'><g fill='red'><g><path d='M 1 1'/></g><line/></g><ellipse/></svg>",
vec![
    "<svg width=\"10\" height=\"20\" xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M 1 1\"/></svg>",
    "<svg width=\"10\" height=\"20\" xmlns=\"http://www.w3.org/2000/svg\"><line/></svg>",
    "<svg width=\"10\" height=\"20\" xmlns=\"http://www.w3.org/2000/svg\"><ellipse/></svg>",
]);

test_split!(split_keeps_subtree_1,
"<svg><text x='1'>a<tspan>b</tspan></text><defs><rect id='r'/></defs></svg>",
vec![
    "<svg xmlns=\"http://www.w3.org/2000/svg\"><text x=\"1\">a<tspan>b</tspan></text></svg>",
    "<svg xmlns=\"http://www.w3.org/2000/svg\"><defs><rect id=\"r\"/></defs></svg>",
]);

test_split!(split_uppercase_group_1,
"<svg><G><rect/></G></svg>",
vec![
    "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>",
]);

#[test]
fn split_count_1() {
    let text = "<svg><g><rect/><g><circle/><polygon/></g></g><polyline/><g/></svg>";
    let doc = Document::parse(text).unwrap();

    assert_eq!(split(text).unwrap().len(), 4);
    assert_eq!(split_document(&doc).len(), doc.element_count());
}

#[test]
fn split_deep_1() {
    let mut text = String::from("<svg>");
    for _ in 0..500 {
        text.push_str("<g>");
    }
    text.push_str("<path/>");
    for _ in 0..500 {
        text.push_str("</g>");
    }
    text.push_str("</svg>");

    assert_eq!(split(&text).unwrap(), ["<svg xmlns=\"http://www.w3.org/2000/svg\"><path/></svg>"]);
}

#[test]
fn split_parts_are_documents_1() {
    let text = "<svg viewBox='0 0 5 5' width='5'><g><rect/></g><circle/></svg>";
    let doc = Document::parse(text).unwrap();

    for part in split(text).unwrap() {
        let part = Document::parse(&part).unwrap();
        assert_eq!(part.canvas(), doc.canvas());
        assert_eq!(part.root().children().count(), 1);
    }
}

#[test]
fn split_invalid_1() {
    assert!(matches!(split("<svg><g></svg>"), Err(Error::ParsingFailed(_))));
    assert!(matches!(split_shallow("<svg><g></svg>"), Err(Error::ParsingFailed(_))));
    assert!(matches!(decompose("<path/>"), Err(Error::ParsingFailed(_))));
}

#[test]
fn decompose_1() {
    let d = decompose(
        "<svg viewBox='0 0 2 2'><g id='g1'><rect id='r' width='1'/><g><line/></g></g><foo/></svg>"
    ).unwrap();

    assert_eq!(d.canvas.view_box.as_ref().map(String::as_str), Some("0 0 2 2"));
    assert_eq!(d.canvas.width, None);

    let kinds: Vec<_> = d.fragments.iter().map(|f| f.kind).collect();
    assert_eq!(kinds, [ElementKind::Rect, ElementKind::Line, ElementKind::Other]);

    assert_eq!(d.fragments[0].attributes.get_value("id"), Some("r"));
    assert_eq!(d.fragments[0].attributes.len(), 2);
    assert_eq!(d.fragments[2].svg,
               "<svg viewBox=\"0 0 2 2\" xmlns=\"http://www.w3.org/2000/svg\"><foo/></svg>");
}
