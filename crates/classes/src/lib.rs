//! Short class names for production stylesheets.
//!
//! Replaces the human-readable class names of CSS modules with the shortest
//! identifier not yet handed out, and remembers every answer so the same
//! class in the same stylesheet always maps to the same identifier.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]

mod counter;

pub use counter::{Counter, ALPHABET, SHORT_ALPHABET};

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Hands out short class names, one per `(stylesheet, class)` pair.
///
/// The CSS-module loader calls [`Allocator::local_ident`] once per class it
/// encounters, in file-processing order, and substitutes the returned name in
/// both the emitted stylesheet and the JS mapping object. See the css-loader
/// `getLocalIdent` contract:
/// <https://webpack.js.org/loaders/css-loader/#getlocalident>
///
/// One allocator serves one single-threaded build. Embedding in a parallel
/// pipeline requires treating each call as one critical section.
#[derive(Debug, Default)]
pub struct Allocator {
  counter: Counter,
  seen: FxHashMap<String, FxHashMap<String, SmolStr>>,
}

impl Allocator {
  /// Returns the next class in the sequence, distinct from every class
  /// returned thus far from this [`Allocator`].
  pub fn next_class(&mut self) -> SmolStr {
    self.counter.advance();
    self.counter.render()
  }

  /// Returns the short class for the class named `local` in the stylesheet
  /// at `resource`.
  ///
  /// The first request for a pair draws from [`Allocator::next_class`];
  /// every later request for the same pair returns the same name without
  /// consuming anything from the sequence.
  pub fn local_ident(&mut self, resource: &str, local: &str) -> SmolStr {
    if let Some(ident) = self.seen.get(resource).and_then(|m| m.get(local)) {
      return ident.clone();
    }
    let ident = self.next_class();
    log::trace!("{resource}: .{local} -> .{ident}");
    self
      .seen
      .entry(resource.to_owned())
      .or_default()
      .insert(local.to_owned(), ident.clone());
    ident
  }

  /// Restarts the sequence from the beginning. Mostly here for unit tests.
  ///
  /// The remembered pairs are untouched, so after a reset a fresh pair can
  /// receive a name some earlier pair is still mapped to. Use a new
  /// [`Allocator`] for a clean world.
  pub fn reset_sequence(&mut self) {
    self.counter = Counter::default();
  }

  /// Forgets every `(stylesheet, class)` pair seen thus far. The sequence
  /// keeps going from where it was.
  pub fn reset_registry(&mut self) {
    self.seen.clear();
  }
}
