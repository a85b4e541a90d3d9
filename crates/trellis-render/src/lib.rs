//! Human-readable outline rendering for anything tree-shaped
//!
//! Works against [`TreeLike`], so both raw export records and constructed
//! page trees render through the same walk.

use trellis_core::TreeLike;

/// Render a whole tree as a multi-line outline, breadth-first.
///
/// Titled elements print the title and a `uid=.. refs=[..]` detail line.
/// Untitled elements print `- <text>`, plus a `==>` detail line when they
/// carry refs.
pub fn render_outline<T: TreeLike>(root: T) -> String {
    let mut out = String::new();
    let mut frontier = vec![root];
    let mut i = 0;

    while i < frontier.len() {
        if i > 0 {
            out.push('\n');
        }
        write_element(&mut out, &frontier[i]);
        let children = frontier[i].children();
        frontier.extend(children);
        i += 1;
    }

    out
}

fn write_element<T: TreeLike>(out: &mut String, elem: &T) {
    let uid = elem.uid().unwrap_or("?");
    let refs = elem.ref_uids().join(", ");

    if let Some(title) = elem.title() {
        out.push_str(&format!("{title}\n  uid={uid} refs=[{refs}]"));
    } else {
        match elem.text() {
            Some(text) => out.push_str(&format!("- {text}")),
            None => out.push('-'),
        }
        if !refs.is_empty() {
            out.push_str(&format!("\n  ==> uid={uid} refs=[{refs}]"));
        }
    }
}
