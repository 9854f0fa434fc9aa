//! HTML document transformation
//!
//! Walks a parsed document, applies term substitution to text nodes under
//! `<body>`, rewrites the `<title>` as a whole string, and reserializes.
//! Only text nodes are candidates for substitution: element attributes,
//! comments, doctypes, and processing instructions are preserved
//! byte-for-byte.

use std::borrow::Cow;

use ego_tree::NodeId;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::StrTendril;
use scraper::node::Node;
use scraper::{Html, Selector};

use super::substitute::TermRewriter;

/// Result of transforming one HTML document
#[derive(Debug, Clone)]
pub struct TransformedPage {
    /// Serialized document with rewritten text content
    pub html: String,
    /// Rewritten page title; empty when the document has no `<title>`
    pub title: String,
}

/// Applies a [`TermRewriter`] to the renderable text of HTML documents
///
/// Each call parses a fresh tree, so a single transformer is safe to share
/// across concurrent requests.
pub struct DocumentTransformer {
    rewriter: TermRewriter,
}

impl DocumentTransformer {
    /// Create a transformer around a term rewriter
    pub fn new(rewriter: TermRewriter) -> Self {
        Self { rewriter }
    }

    /// Access the underlying term rewriter
    pub fn rewriter(&self) -> &TermRewriter {
        &self.rewriter
    }

    /// Transform one HTML document
    ///
    /// Parsing is permissive: malformed input degrades to whatever tree the
    /// HTML5 parser recovers, never to an error. The returned title is the
    /// substituted `<title>` text, handled separately from the body walk
    /// because it lives outside the renderable-content root.
    pub fn transform(&self, html: &str) -> TransformedPage {
        let mut document = Html::parse_document(html);

        self.rewrite_body_text(&mut document);
        let title = self.rewrite_title(&mut document);

        TransformedPage {
            html: serialize_document(&document),
            title,
        }
    }

    /// Rewrite every text node under `<body>`, in document order
    fn rewrite_body_text(&self, document: &mut Html) {
        let node_ids = collect_body_text_ids(document);

        for id in node_ids {
            if let Some(mut node) = document.tree.get_mut(id) {
                if let Node::Text(text) = node.value() {
                    // Skip the write-back when nothing matched
                    let rewritten = match self.rewriter.replace(&text.text) {
                        Cow::Borrowed(_) => None,
                        Cow::Owned(rewritten) => Some(rewritten),
                    };
                    if let Some(rewritten) = rewritten {
                        text.text = StrTendril::from(rewritten.as_str());
                    }
                }
            }
        }
    }

    /// Rewrite the `<title>` element as a whole string
    ///
    /// Returns the substituted title text, or an empty string when the
    /// document has no title element.
    fn rewrite_title(&self, document: &mut Html) -> String {
        let selector = match Selector::parse("title") {
            Ok(selector) => selector,
            Err(_) => return String::new(),
        };

        let (title_text, text_ids) = match document.select(&selector).next() {
            Some(title) => {
                let mut text = String::new();
                let mut ids = Vec::new();
                for child in title.children() {
                    if let Some(fragment) = child.value().as_text() {
                        text.push_str(&fragment.text);
                        ids.push(child.id());
                    }
                }
                (text, ids)
            }
            None => return String::new(),
        };

        let rewritten = self.rewriter.substitute(&title_text);

        // Whole-string write-back: the full title goes into the first text
        // child, any further text children are emptied
        let mut ids = text_ids.into_iter();
        if let Some(first) = ids.next() {
            set_text_node(document, first, rewritten.as_str());
            for id in ids {
                set_text_node(document, id, "");
            }
        }

        rewritten
    }
}

/// Collect ids of all text nodes under the body element, in document order
fn collect_body_text_ids(document: &Html) -> Vec<NodeId> {
    let selector = match Selector::parse("body") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    match document.select(&selector).next() {
        Some(body) => body
            .descendants()
            .filter(|node| node.value().is_text())
            .map(|node| node.id())
            .collect(),
        None => Vec::new(),
    }
}

fn set_text_node(document: &mut Html, id: NodeId, content: &str) {
    if let Some(mut node) = document.tree.get_mut(id) {
        if let Node::Text(text) = node.value() {
            text.text = StrTendril::from(content);
        }
    }
}

/// Serialize the document back to an HTML string
///
/// Serializes the children of the document root so the doctype survives the
/// round trip.
fn serialize_document(document: &Html) -> String {
    let opts = SerializeOpts {
        scripting_enabled: false,
        traversal_scope: TraversalScope::ChildrenOnly(None),
        create_missing_parent: false,
    };

    let mut buf = Vec::new();
    match serialize(&mut buf, document, opts) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => String::new(),
    }
}
