//! Re-indent a stylesheet with tabs.
//!
//! One node per line, one tab per level of nesting, one blank line between
//! top-level nodes, and the first node flush at the top of the file. Only
//! whitespace raws change; the nodes themselves are untouched.

use crate::{NodeIdx, Stylesheet};

/// Does the re-indenting, rewriting the whitespace raws in place.
pub fn get(sheet: &mut Stylesheet) {
  let depths: Vec<(NodeIdx, usize)> = sheet
    .arena
    .iter()
    .map(|(idx, _)| (idx, sheet.depth(idx)))
    .collect();
  for (idx, depth) in depths {
    let node = &mut sheet.arena[idx];
    indent(&mut node.raws.before, depth);
    indent(&mut node.raws.after, depth);
    if depth == 0 {
      // Top-level nodes get a blank line between them.
      match &mut node.raws.before {
        None => node.raws.before = Some("\n\n".to_owned()),
        Some(before) => before.push('\n'),
      }
    }
  }
  if let Some(&first) = sheet.top.first() {
    sheet.arena[first].raws.before = Some(String::new());
  }
}

/// Rewrites a present raw to end in a newline followed by one tab per level.
/// Anything in the raw besides whitespace survives, trimmed. An absent raw
/// stays absent: the writer owns its default.
fn indent(raw: &mut Option<String>, depth: usize) {
  if let Some(s) = raw {
    let mut ret = s.trim().to_owned();
    ret.push('\n');
    for _ in 0..depth {
      ret.push('\t');
    }
    *s = ret;
  }
}
