//! Markup rendering for document trees
//!
//! Renders trees to a compact JSX-like markup string, and to an indented
//! outline for debugging. Neither is a full serializer: the output is meant
//! for logs, snapshots and test assertions.

use crate::attr::{PropValue, Props};
use crate::node::Node;

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for markup rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Drop whitespace-only text nodes (the `"\n"` between blocks).
    pub minify: bool,
}

impl RenderConfig {
    /// Keep every node.
    pub const FULL: Self = Self { minify: false };

    /// Drop whitespace-only text.
    pub const MINIFY: Self = Self { minify: true };
}

// =============================================================================
// Markup
// =============================================================================

/// Render a tree to markup.
pub fn render(node: &Node, config: &RenderConfig) -> String {
    let mut output = String::new();
    render_node(node, config, &mut output);
    output
}

/// Render a node to markup.
fn render_node(node: &Node, config: &RenderConfig, output: &mut String) {
    match node {
        Node::Root(root) => render_children(&root.children, config, output),
        Node::Element(elem) => {
            if elem.children.is_empty() && is_void_element(&elem.tag) {
                output.push('<');
                output.push_str(&elem.tag);
                render_props(&elem.props, output);
                output.push_str(" />");
                return;
            }
            render_container(&elem.tag, &elem.props, &elem.children, config, output);
        }
        Node::Component(comp) => {
            let name = comp.name.as_deref().unwrap_or("");
            render_container(name, &comp.attributes, &comp.children, config, output);
        }
        Node::Text(text) => {
            if !(config.minify && text.is_whitespace()) {
                output.push_str(&escape_text(&text.value));
            }
        }
        Node::Expression(expr) => {
            output.push('{');
            output.push_str(&expr.value);
            output.push('}');
        }
        Node::Doctype(doctype) => {
            output.push_str("<!doctype ");
            output.push_str(&doctype.name);
            output.push('>');
        }
        Node::Esm(esm) => {
            output.push_str(&esm.value);
            output.push('\n');
        }
        Node::Comment(text) => {
            output.push_str("<!--");
            output.push_str(text);
            output.push_str("-->");
        }
        Node::Raw(raw) => output.push_str(raw),
    }
}

fn render_container(name: &str, props: &Props, children: &[Node], config: &RenderConfig, output: &mut String) {
    output.push('<');
    output.push_str(name);
    render_props(props, output);
    output.push('>');
    render_children(children, config, output);
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

fn render_children(children: &[Node], config: &RenderConfig, output: &mut String) {
    for child in children {
        render_node(child, config, output);
    }
}

/// Render properties: strings as quoted attributes, everything else as `{json}`.
fn render_props(props: &Props, output: &mut String) {
    for (name, value) in props {
        output.push(' ');
        output.push_str(name);
        output.push('=');
        match value {
            PropValue::String(s) => {
                output.push('"');
                output.push_str(&escape_attr(s));
                output.push('"');
            }
            other => {
                output.push('{');
                output.push_str(&other.to_string());
                output.push('}');
            }
        }
    }
}

/// Check if tag is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input"
            | "link" | "meta" | "source" | "track" | "wbr"
    )
}

/// Escape text special characters.
fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

// =============================================================================
// Outline
// =============================================================================

/// Render an indented outline, one node per line.
pub fn outline(node: &Node) -> String {
    let mut output = String::new();
    outline_node(node, 0, &mut output);
    output
}

fn outline_node(node: &Node, depth: usize, output: &mut String) {
    let line = match node {
        Node::Root(_) => "root".to_string(),
        Node::Element(e) => format!("<{}>", e.tag),
        Node::Component(c) => format!("<{}>", c.name.as_deref().unwrap_or("")),
        Node::Text(t) => format!("{:?}", t.value),
        Node::Expression(e) => format!("{{{}}}", e.value),
        Node::Doctype(d) => format!("<!doctype {}>", d.name),
        Node::Esm(e) => format!("esm {:?}", e.value),
        Node::Comment(c) => format!("<!--{c}-->"),
        Node::Raw(r) => format!("raw {r:?}"),
    };
    output.push_str(&"  ".repeat(depth));
    output.push_str(&line);
    output.push('\n');
    if let Some(children) = node.children() {
        for child in children {
            outline_node(child, depth + 1, output);
        }
    }
}
