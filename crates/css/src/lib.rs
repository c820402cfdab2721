//! An owned stylesheet tree and its printing.
//!
//! The CSS processor hands the tree over at the boundary; nothing here
//! parses text. Each node carries the whitespace that surrounded it in the
//! source ("raws"), so a stylesheet round-trips byte for byte until a pass
//! rewrites the raws on purpose.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod pretty;

use la_arena::{Arena, Idx};
use std::fmt;

/// An index into the node arena.
pub type NodeIdx = Idx<Node>;
/// The arena of nodes.
pub type NodeArena = Arena<Node>;

/// A stylesheet: a tree of nodes plus the arena that owns them.
#[derive(Debug, Default)]
pub struct Stylesheet {
  /// The nodes.
  pub arena: NodeArena,
  /// Top-level nodes, in source order.
  pub top: Vec<NodeIdx>,
}

impl Stylesheet {
  /// Adds a node at the top level and returns its index.
  pub fn push_top(&mut self, node: Node) -> NodeIdx {
    let idx = self.arena.alloc(node);
    self.top.push(idx);
    idx
  }

  /// Adds a node as the last child of `parent` and returns its index.
  /// Panics if `parent` is a node kind that cannot contain children.
  pub fn push_child(&mut self, parent: NodeIdx, mut node: Node) -> NodeIdx {
    assert!(
      self.arena[parent].kind.is_container(),
      "children under a leaf"
    );
    node.parent = Some(parent);
    let idx = self.arena.alloc(node);
    self.arena[parent].children.push(idx);
    idx
  }

  /// Returns how many ancestors `node` has.
  pub fn depth(&self, node: NodeIdx) -> usize {
    let mut ret = 0;
    let mut cur = self.arena[node].parent;
    while let Some(idx) = cur {
      ret += 1;
      cur = self.arena[idx].parent;
    }
    ret
  }

  fn write_node(
    &self,
    f: &mut fmt::Formatter<'_>,
    idx: NodeIdx,
  ) -> fmt::Result {
    let node = &self.arena[idx];
    if let Some(before) = &node.raws.before {
      f.write_str(before)?;
    }
    match &node.kind {
      Kind::Rule(selector) => {
        let between = node.raws.between.as_deref().unwrap_or(" ");
        write!(f, "{selector}{between}{{")?;
        self.write_body(f, idx)?;
      }
      Kind::AtRule(name, params) => {
        if node.children.is_empty() {
          write!(f, "@{name} {params};")?;
        } else {
          let between = node.raws.between.as_deref().unwrap_or(" ");
          write!(f, "@{name} {params}{between}{{")?;
          self.write_body(f, idx)?;
        }
      }
      Kind::Decl(prop, value) => {
        let between = node.raws.between.as_deref().unwrap_or(": ");
        write!(f, "{prop}{between}{value};")?;
      }
      Kind::Comment(text) => write!(f, "/*{text}*/")?,
    }
    Ok(())
  }

  fn write_body(
    &self,
    f: &mut fmt::Formatter<'_>,
    idx: NodeIdx,
  ) -> fmt::Result {
    for &child in &self.arena[idx].children {
      self.write_node(f, child)?;
    }
    if let Some(after) = &self.arena[idx].raws.after {
      f.write_str(after)?;
    }
    f.write_str("}")
  }
}

impl fmt::Display for Stylesheet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &idx in &self.top {
      self.write_node(f, idx)?;
    }
    Ok(())
  }
}

/// A node in a stylesheet.
#[derive(Debug)]
pub struct Node {
  /// What the node is.
  pub kind: Kind,
  /// Whitespace preserved from the source.
  pub raws: Raws,
  pub(crate) parent: Option<NodeIdx>,
  pub(crate) children: Vec<NodeIdx>,
}

impl Node {
  /// Returns a new detached [`Node`] with no raws.
  pub fn new(kind: Kind) -> Self {
    Self {
      kind,
      raws: Raws::default(),
      parent: None,
      children: Vec::new(),
    }
  }
}

/// The kinds of nodes.
#[derive(Debug)]
pub enum Kind {
  /// A rule, like `a { ... }`. Holds the selector.
  Rule(String),
  /// An at-rule, like `@media screen { ... }`. Holds the name and params.
  AtRule(String, String),
  /// A declaration, like `color: red`. Holds the property and value.
  Decl(String, String),
  /// A comment. Holds the text between the delimiters.
  Comment(String),
}

impl Kind {
  fn is_container(&self) -> bool {
    matches!(self, Self::Rule(_) | Self::AtRule(_, _))
  }
}

/// Whitespace around one node.
///
/// `None` means the whitespace was absent in the source and the writer picks
/// its default. `Some` is written out verbatim.
#[derive(Debug, Default)]
pub struct Raws {
  /// Before the node.
  pub before: Option<String>,
  /// Between a rule's selector and its `{`, or after a declaration's `:`.
  pub between: Option<String>,
  /// Before a container's closing `}`.
  pub after: Option<String>,
}
