// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use log::{trace, warn};

pub use self::options::*;

mod options;

use crate::{
    Canvas,
    Document,
    Node,
    ParserError,
    XLINK_NS,
    XML_NS,
};

pub fn parse_svg(text: &str, opt: &ParseOptions) -> Result<Document, ParserError> {
    let mut xml_opt = roxmltree::ParsingOptions::default();
    xml_opt.allow_dtd = opt.allow_dtd;
    xml_opt.nodes_limit = opt.nodes_limit;

    let xml = roxmltree::Document::parse_with_options(text, xml_opt)?;
    let svg = xml.root_element();

    // The root element must be an 'svg'.
    if svg.tag_name().name() != "svg" {
        return Err(ParserError::NoSvgElement(svg.tag_name().name().to_string()));
    }

    let ns = svg.tag_name().namespace();

    let mut root = Node::new_element("svg");
    parse_attributes(svg, &mut root);
    parse_children(svg, ns, &mut root, opt);

    let canvas = Canvas::from_root(&root, ns);

    Ok(Document::from_parts(root, canvas))
}

fn parse_children(
    parent: roxmltree::Node,
    ns: Option<&str>,
    parent_node: &mut Node,
    opt: &ParseOptions,
) {
    for xml_node in parent.children() {
        if xml_node.is_element() {
            let tag_name = xml_node.tag_name();
            let is_foreign = tag_name.namespace() != ns;

            if is_foreign && !opt.parse_unknown_elements {
                trace!("Unknown element '{}' skipped.", tag_name.name());
                continue;
            }

            let mut node = if is_foreign {
                parse_foreign_element(xml_node)
            } else {
                Node::new_element(tag_name.name())
            };

            parse_attributes(xml_node, &mut node);
            parse_children(xml_node, ns, &mut node, opt);
            parent_node.append(node);
        } else if xml_node.is_text() {
            let text = xml_node.text().unwrap_or("");

            // Whitespaces inside text elements are important.
            if text.trim().is_empty() && !is_text_content(parent_node) {
                continue;
            }

            parent_node.append(Node::new_text(text));
        }
    }
}

/// Creates an element from a namespace other than the root one.
///
/// The prefix is kept in the tag name. An element without a prefix
/// is bound to its namespace as to a default one.
fn parse_foreign_element(xml_node: roxmltree::Node) -> Node {
    let tag_name = xml_node.tag_name();
    let uri = tag_name.namespace().unwrap_or("");

    match xml_node.lookup_prefix(uri) {
        Some(prefix) if !prefix.is_empty() => {
            let mut node = Node::new_element(format!("{}:{}", prefix, tag_name.name()));
            node.set_namespace(prefix, uri);
            node
        }
        _ => {
            let mut node = Node::new_element(tag_name.name());
            node.set_namespace("", uri);
            node
        }
    }
}

fn is_text_content(node: &Node) -> bool {
    match node.tag_name() {
        "text" | "tspan" | "textPath" | "tref" => true,
        _ => false,
    }
}

fn parse_attributes(xml_node: roxmltree::Node, node: &mut Node) {
    for attr in xml_node.attributes() {
        let uri = match attr.namespace() {
            Some(uri) => uri,
            None => {
                node.set_attribute(attr.name(), attr.value());
                continue;
            }
        };

        if uri == XML_NS {
            node.set_attribute(format!("xml:{}", attr.name()), attr.value());
            continue;
        }

        let prefix = match xml_node.lookup_prefix(uri) {
            Some(prefix) if !prefix.is_empty() => prefix,
            _ if uri == XLINK_NS => "xlink",
            _ => {
                warn!("Attribute '{}' from the '{}' namespace has no prefix. Skipped.",
                      attr.name(), uri);
                continue;
            }
        };

        node.set_attribute(format!("{}:{}", prefix, attr.name()), attr.value());
        node.set_namespace(prefix, uri);
    }
}
