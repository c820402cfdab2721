//! Convert separated words to camelCase or PascalCase.
//!
//! Words may be separated by dashes, dots, underscores, or spaces. Existing
//! camel humps survive the round trip (`fooBar` stays `fooBar`), and the
//! letter after a digit run is upper-cased (`foo2bar` becomes `foo2Bar`),
//! which is what the generated TS definitions for CSS modules expect.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]

/// Converts to camelCase: `foo-bar` becomes `fooBar`.
pub fn camel(s: &str) -> String {
  get(s, false)
}

/// Converts to PascalCase: `foo-bar` becomes `FooBar`.
pub fn pascal(s: &str) -> String {
  get(s, true)
}

fn is_sep(c: char) -> bool {
  matches!(c, '_' | '.' | '-' | ' ')
}

fn get(s: &str, pascal: bool) -> String {
  let value = s.trim();
  let mut chars = value.chars();
  let first = match chars.next() {
    None => return String::new(),
    Some(c) => c,
  };
  if chars.next().is_none() {
    return if pascal {
      first.to_uppercase().collect()
    } else {
      first.to_lowercase().collect()
    };
  }
  let marked: String;
  let value = if value.chars().any(char::is_uppercase) {
    marked = mark_humps(value);
    marked.as_str()
  } else {
    value
  };
  let mut ret = String::with_capacity(value.len());
  // Word boundaries upper-case the next letter. The first letter is a
  // boundary only for PascalCase.
  let mut boundary = pascal;
  for c in value.chars() {
    if is_sep(c) {
      // Leading separators are dropped without making a boundary.
      boundary = boundary || !ret.is_empty();
      continue;
    }
    if boundary {
      ret.extend(c.to_uppercase());
    } else {
      ret.extend(c.to_lowercase());
    }
    boundary = c.is_ascii_digit();
  }
  ret
}

/// Turns the humps of an already-camelCased input into explicit word
/// boundaries, so lowering everything does not lose them: `fooBar` becomes
/// `foo-Bar`, and the tail of an acronym run like `FOOBar` becomes
/// `FOO-Bar`.
fn mark_humps(s: &str) -> String {
  let mut ret = String::with_capacity(s.len() + 4);
  let mut last_lower = false;
  let mut last_upper = false;
  let mut last_last_upper = false;
  for c in s.chars() {
    if last_lower && c.is_ascii_uppercase() {
      ret.push('-');
      ret.push(c);
      last_lower = false;
      last_last_upper = last_upper;
      last_upper = true;
    } else if last_upper && last_last_upper && c.is_ascii_lowercase() {
      // The run of uppercase ended one character back. That character starts
      // the new word.
      let prev = ret.pop().expect("two uppercase seen");
      ret.push('-');
      ret.push(prev);
      ret.push(c);
      last_last_upper = last_upper;
      last_upper = false;
      last_lower = true;
    } else {
      ret.push(c);
      last_lower = c.is_lowercase();
      last_last_upper = last_upper;
      last_upper = c.is_uppercase();
    }
  }
  ret
}
