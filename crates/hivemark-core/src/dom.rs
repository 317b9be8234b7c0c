//! Fragment parsing, tree traversal, and reserialization.
//!
//! Titles can arrive carrying inline markup (from users or other plugins),
//! so the styler works over a parsed tree rather than the raw string. The
//! parser is kuchikikiki's html5ever front end, which tolerates arbitrary
//! malformed input; the parsed body is converted into a plain [`Node`] tree
//! that a recursive visitor can walk without any iterator machinery.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use kuchikikiki::NodeRef;
use kuchikikiki::traits::TendrilSink;

/// A node in a parsed fragment: character data, or an element with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A text node holding character data.
    Text(String),
    /// An element node with a tag name, attributes, and ordered children.
    Element {
        /// Lowercased tag name.
        name: String,
        /// Attributes as the parser stored them (sorted by name).
        attrs: Vec<(String, String)>,
        /// Child nodes, first to last.
        children: Vec<Node>,
    },
}

/// A parsed title fragment: the children of a synthetic root element.
///
/// The root itself is never serialized; only the inner content survives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Top-level nodes of the fragment.
    pub children: Vec<Node>,
}

impl Fragment {
    /// Parse a fragment leniently.
    ///
    /// Never fails: malformed markup is repaired by the HTML5 parser, and a
    /// degenerate parse that produces no body degrades to treating the whole
    /// input as a single text node. Doctype, comment, and
    /// processing-instruction nodes introduced by the parser are dropped.
    pub fn parse(input: &str) -> Self {
        let document = kuchikikiki::parse_html().one(input);
        match find_body(&document) {
            Some(body) => Self {
                children: body.children().filter_map(|child| convert(&child)).collect(),
            },
            None => {
                tracing::debug!("no body in parsed fragment, falling back to raw text");
                if input.is_empty() {
                    Self::default()
                } else {
                    Self {
                        children: vec![Node::Text(input.to_string())],
                    }
                }
            }
        }
    }

    /// Rewrite every text node's value, in document (pre-order) order.
    pub fn rewrite_text<F>(&mut self, mut rewrite: F)
    where
        F: FnMut(&str) -> String,
    {
        for child in &mut self.children {
            walk_text(child, &mut |value: &mut String| {
                *value = rewrite(value);
            });
        }
    }

    /// Reserialize the fragment to markup, escaping text content.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            write_node(child, &mut out);
        }
        out
    }
}

/// Visit every text node under `node` pre-order: a node before its
/// children, children first to last. Element nodes are left untouched.
pub fn walk_text<F>(node: &mut Node, visit: &mut F)
where
    F: FnMut(&mut String),
{
    match node {
        Node::Text(value) => visit(value),
        Node::Element { children, .. } => {
            for child in children {
                walk_text(child, visit);
            }
        }
    }
}

/// Find the `<body>` element the HTML5 parser synthesizes around content.
fn find_body(node: &NodeRef) -> Option<NodeRef> {
    if let Some(element) = node.as_element()
        && &*element.name.local == "body"
    {
        return Some(node.clone());
    }
    node.children().find_map(|child| find_body(&child))
}

/// Convert a parsed node into the plain tree, dropping parser artifacts
/// (doctype, comments, processing instructions).
fn convert(node: &NodeRef) -> Option<Node> {
    if let Some(text) = node.as_text() {
        return Some(Node::Text(text.borrow().clone()));
    }
    if let Some(element) = node.as_element() {
        let attrs = element
            .attributes
            .borrow()
            .map
            .iter()
            .map(|(name, attr)| (name.local.to_string(), attr.value.clone()))
            .collect();
        return Some(Node::Element {
            name: element.name.local.to_string(),
            attrs,
            children: node.children().filter_map(|child| convert(&child)).collect(),
        });
    }
    None
}

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(value) => out.push_str(&escape_text(value)),
        Node::Element {
            name,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(name);
            for (attr_name, attr_value) in attrs {
                out.push(' ');
                out.push_str(attr_name);
                out.push_str("=\"");
                out.push_str(&escape_attribute(attr_value));
                out.push('"');
            }
            out.push('>');
            if is_void_element(name) && children.is_empty() {
                return;
            }
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

/// Escape text content: `&`, `<`, `>`.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape attribute values: text escapes plus both quote characters.
fn escape_attribute(text: &str) -> String {
    escape_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escaped forms the serializer (or upstream input) may have introduced.
static ENTITY_DECODER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::new(["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"]).expect("valid patterns")
});

/// Literal characters, index-matched to the decoder's patterns.
const ENTITY_LITERALS: &[&str] = &["&", "<", ">", "\"", "'"];

/// Decode character-entity escaping so tags inserted by the styling rules
/// come out as literal markup, not escaped text.
pub fn decode_entities(text: &str) -> String {
    ENTITY_DECODER.replace_all(text, ENTITY_LITERALS)
}
