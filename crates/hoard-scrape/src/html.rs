//! Flattened view of an HTML page.
//!
//! The page is parsed with the tree-sitter HTML grammar and walked once,
//! producing every element in document order together with its attributes,
//! its visible text, and the chain of enclosing elements. Site parsers then
//! query that list instead of walking the tree themselves.

use ast_grep_core::Node;
use ast_grep_language::{LanguageExt, SupportLang};

/// An HTML attribute: `(name, optional_value)`.
pub type HtmlAttr = (String, Option<String>);

/// Tag and classes of an enclosing element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub tag: String,
    pub classes: Vec<String>,
}

/// One element of a parsed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    /// Lower-cased tag name.
    pub tag: String,
    pub attrs: Vec<HtmlAttr>,
    /// Descendant text fragments, each trimmed, joined with a single space.
    pub text: String,
    /// The trimmed, non-empty text fragments behind `text`.
    pub fragments: Vec<String>,
    /// Enclosing elements, outermost first.
    pub ancestors: Vec<Ancestor>,
}

impl HtmlElement {
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        attr_value(&self.attrs, name)
    }

    /// Text fragments joined with `separator`. `""` glues markup such as
    /// `4<span>.02</span>` back into `4.02`.
    #[must_use]
    pub fn joined_text(&self, separator: &str) -> String {
        self.fragments.join(separator)
    }

    /// Whether the `class` attribute contains `class` as a whole token.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|token| token == class))
    }

    /// Whether the raw `class` attribute contains `needle` anywhere.
    #[must_use]
    pub fn class_contains(&self, needle: &str) -> bool {
        self.attr("class").is_some_and(|c| c.contains(needle))
    }

    /// Whether some enclosing `<tag>` carries `class`.
    #[must_use]
    pub fn is_within(&self, tag: &str, class: &str) -> bool {
        self.ancestors
            .iter()
            .any(|a| a.tag == tag && a.classes.iter().any(|c| c == class))
    }
}

/// Every element of a page in document order.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    elements: Vec<HtmlElement>,
}

impl HtmlPage {
    /// Parse `source`. Malformed markup never fails; unparsable regions are
    /// skipped by the grammar's error recovery.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let root = SupportLang::Html.ast_grep(source);
        Self {
            elements: flatten(root.root()),
        }
    }

    #[must_use]
    pub fn elements(&self) -> &[HtmlElement] {
        &self.elements
    }

    /// Elements with the given (lower-case) tag.
    pub fn by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a HtmlElement> + 'a {
        self.elements.iter().filter(move |e| e.tag == tag)
    }
}

enum Step<'r, D: ast_grep_core::Doc> {
    Visit(Node<'r, D>),
    /// All descendants of `out[index]` are done; its text starts at
    /// `fragments[start]`.
    Close { index: usize, start: usize },
}

/// Flatten the tree below `root` in document order.
///
/// Walks with an explicit stack, so deeply nested markup cannot exhaust the
/// thread's stack.
fn flatten<D: ast_grep_core::Doc>(root: Node<'_, D>) -> Vec<HtmlElement> {
    let mut out: Vec<HtmlElement> = Vec::new();
    let mut ancestors: Vec<Ancestor> = Vec::new();
    let mut fragments: Vec<String> = Vec::new();
    let mut stack = vec![Step::Visit(root)];

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::Close { index, start } => {
                ancestors.pop();
                let pieces = fragments[start..].to_vec();
                out[index].text = pieces.join(" ");
                out[index].fragments = pieces;
                continue;
            }
        };

        let kind = node.kind();
        match kind.as_ref() {
            "text" | "entity" => {
                let text = decode_entities(&node.text());
                let text = text.trim();
                if !text.is_empty() {
                    fragments.push(text.to_string());
                }
                continue;
            }
            "script_element" | "style_element" | "comment" | "doctype" => continue,
            "element" => {
                if let Some((tag, attrs)) = extract_tag_info(&node) {
                    let classes = attr_value(&attrs, "class")
                        .map(|c| c.split_whitespace().map(String::from).collect())
                        .unwrap_or_default();

                    stack.push(Step::Close {
                        index: out.len(),
                        start: fragments.len(),
                    });
                    out.push(HtmlElement {
                        tag: tag.clone(),
                        attrs,
                        text: String::new(),
                        fragments: Vec::new(),
                        ancestors: ancestors.clone(),
                    });
                    ancestors.push(Ancestor { tag, classes });
                }
            }
            _ => {}
        }

        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev().map(Step::Visit));
    }

    out
}

/// Extract tag name and attributes from an element's opening tag.
fn extract_tag_info<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<(String, Vec<HtmlAttr>)> {
    let tag = node
        .children()
        .find(|c| matches!(c.kind().as_ref(), "start_tag" | "self_closing_tag"))?;
    let tag_name = tag
        .children()
        .find(|c| c.kind().as_ref() == "tag_name")?
        .text()
        .to_ascii_lowercase();
    Some((tag_name, extract_attrs_from_tag(&tag)))
}

/// Extract all attributes from a tag node.
fn extract_attrs_from_tag<D: ast_grep_core::Doc>(tag_node: &Node<D>) -> Vec<HtmlAttr> {
    tag_node
        .children()
        .filter(|c| c.kind().as_ref() == "attribute")
        .filter_map(|attr| {
            let name = attr
                .children()
                .find(|c| c.kind().as_ref() == "attribute_name")?
                .text()
                .to_ascii_lowercase();
            let value = attr.children().find_map(|c| match c.kind().as_ref() {
                "quoted_attribute_value" => Some(
                    c.children()
                        .find(|v| v.kind().as_ref() == "attribute_value")
                        .map(|v| decode_entities(&v.text()))
                        .unwrap_or_default(),
                ),
                "attribute_value" => Some(decode_entities(&c.text())),
                _ => None,
            });
            Some((name, value))
        })
        .collect()
}

fn attr_value<'a>(attrs: &'a [HtmlAttr], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(n, _)| n == name)
        .and_then(|(_, v)| v.as_deref())
}

/// Decode the handful of entities that show up in rating markup.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Parse a decimal number, accepting `,` as the decimal separator.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse().ok()
}

/// Parse the digits of `text` as an integer, ignoring everything else
/// (`"12,345 ratings"` is `12345`).
pub(crate) fn parse_digits(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Lower-case `text` and collapse whitespace runs to single spaces.
pub(crate) fn normalize_label(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
