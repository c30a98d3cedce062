//! Text rendering of editor snapshots.

use std::fmt::Write as _;

use splitdesk_core::{EditorSnapshot, PaneNode};

/// Renders the pane tree as an indented outline.
///
/// Leaves are numbered in pre-order, starting at 1, which is the numbering
/// script commands use. `>` marks each pane's active tab.
#[must_use]
pub fn format_layout(snapshot: &EditorSnapshot) -> String {
    let Some(layout) = &snapshot.layout else {
        return "No tabs open".to_owned();
    };
    let mut out = String::new();
    let mut leaf_number = 0;
    write_node(&mut out, snapshot, layout, 0, &mut leaf_number);
    let _ = write!(
        out,
        "{} tab(s) in {} pane(s)",
        snapshot.tabs.len(),
        snapshot.pane_count()
    );
    out
}

fn write_node(
    out: &mut String,
    snapshot: &EditorSnapshot,
    node: &PaneNode,
    depth: usize,
    leaf_number: &mut usize,
) {
    let indent = "  ".repeat(depth);
    match node {
        PaneNode::Split(split) => {
            let _ = writeln!(out, "{indent}{} split ({:.0}%)", split.direction, split.size);
            write_node(out, snapshot, &split.first, depth + 1, leaf_number);
            write_node(out, snapshot, &split.second, depth + 1, leaf_number);
        }
        PaneNode::Leaf(leaf) => {
            *leaf_number += 1;
            let active = if snapshot.active_pane == Some(leaf.id) {
                " (active)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "{indent}pane {}{active} ({:.0}%)",
                leaf_number, leaf.size
            );
            if leaf.tabs.is_empty() {
                let _ = writeln!(out, "{indent}    (empty)");
            }
            for id in &leaf.tabs {
                let Some(tab) = snapshot.tab(*id) else {
                    continue;
                };
                let marker = if leaf.active_tab == Some(*id) { ">" } else { " " };
                let mut flags = Vec::new();
                if tab.pinned {
                    flags.push("pinned");
                }
                if tab.is_unsaved {
                    flags.push("unsaved");
                }
                let flags = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", flags.join(", "))
                };
                let _ = writeln!(
                    out,
                    "{indent}  {marker} {} [{}]{flags}",
                    tab.name, tab.language
                );
            }
        }
    }
}

/// Renders `(key, value)` rows as two aligned columns.
#[must_use]
pub fn format_columns<'a>(
    header: (&str, &str),
    rows: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let rows: Vec<(&str, &str)> = rows.into_iter().collect();
    let width = rows
        .iter()
        .map(|(key, _)| key.len())
        .chain(std::iter::once(header.0.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  {}", header.0, header.1);
    let _ = writeln!(out, "{}  {}", "-".repeat(width), "-".repeat(header.1.len()));
    for (key, value) in rows {
        let _ = writeln!(out, "{key:<width$}  {value}");
    }
    out
}
