//! Logging and debugging facilities for Horizon Disclosure.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output per subsystem
//! - [`DocumentTreeDebug`] for dumping a mounted node tree
//! - [`PerfSpan`] for timing operations
//!
//! # Tracing Integration
//!
//! The crates only emit events; nothing is printed until the application
//! installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_disclosure::accordion=debug")
//!         .init();
//! }
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use horizon_disclosure_core::{Document, RenderHost};
//! use horizon_disclosure_core::logging::DocumentTreeDebug;
//!
//! let mut doc = Document::new();
//! let root = doc.create_node("div", None).unwrap();
//! doc.create_node("button", Some(root)).unwrap();
//!
//! let dump = DocumentTreeDebug::new().format_document(&doc);
//! assert!(dump.contains("button"));
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::document::Document;
use crate::host::{NodeId, RenderHost};

/// Span names used throughout Horizon Disclosure for tracing.
pub mod span_names {
    /// Widget mount span.
    pub const MOUNT: &str = "horizon_disclosure::mount";
    /// Attribute synchronisation span.
    pub const RENDER: &str = "horizon_disclosure::render";
    /// Event dispatch span.
    pub const DISPATCH: &str = "horizon_disclosure::dispatch";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core plumbing target.
    pub const CORE: &str = "horizon_disclosure_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_disclosure_core::signal";
    /// Context environment target.
    pub const CONTEXT: &str = "horizon_disclosure_core::context";
    /// Node tree target.
    pub const DOCUMENT: &str = "horizon_disclosure_core::document";
    /// Accordion state and widget target.
    pub const ACCORDION: &str = "horizon_disclosure::accordion";
    /// Keyboard navigation target.
    pub const FOCUS: &str = "horizon_disclosure::focus";
    /// Markup synchronisation target.
    pub const RENDER: &str = "horizon_disclosure::render";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node handles.
    pub show_ids: bool,
    /// Whether to show attributes.
    pub show_attributes: bool,
    /// Whether to show text content.
    pub show_text: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_attributes: true,
            show_text: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_ids: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output (tags only).
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_attributes: false,
            show_text: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct DocumentTreeDebug {
    options: TreeFormatOptions,
}

impl DocumentTreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every root of the document.
    pub fn format_document(&self, doc: &Document) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_document(doc, &mut output);
        output
    }

    /// Format the subtree rooted at `root`.
    pub fn format_subtree(&self, doc: &Document, root: NodeId) -> String {
        let mut output = String::new();
        let _ = self.write_subtree(doc, root, 0, true, &mut output);
        output
    }

    fn write_document(&self, doc: &Document, out: &mut impl FmtWrite) -> fmt::Result {
        writeln!(out, "Document ({} nodes):", doc.len())?;
        if doc.roots().is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for &root in doc.roots() {
            self.write_subtree(doc, root, 0, true, out)?;
        }
        Ok(())
    }

    fn write_subtree(
        &self,
        doc: &Document,
        node: NodeId,
        depth: usize,
        is_last: bool,
        out: &mut impl FmtWrite,
    ) -> fmt::Result {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }
        let Some(tag) = doc.tag(node) else {
            return Ok(());
        };

        write!(out, "{}<{}", self.build_prefix(depth, is_last), tag)?;
        if self.options.show_attributes {
            for (name, value) in doc.attributes(node) {
                if value.is_empty() {
                    write!(out, " {name}")?;
                } else {
                    write!(out, " {name}=\"{value}\"")?;
                }
            }
        }
        out.write_char('>')?;

        if self.options.show_ids {
            write!(out, " [{:?}]", node)?;
        }
        if self.options.show_text
            && let Some(text) = doc.text(node).filter(|t| !t.is_empty())
        {
            write!(out, " {text:?}")?;
        }
        out.write_char('\n')?;

        let children = doc.children(node);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.write_subtree(doc, child, depth + 1, i + 1 == count, out)?;
        }
        Ok(())
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            prefix.extend(std::iter::repeat_n(' ', self.options.indent_size));
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_disclosure::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// `tracing::trace!` with the core target.
#[macro_export]
macro_rules! disclosure_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
