//! Editor script replay command.
//!
//! A script holds one operation per line; blank lines and `#` comments are
//! skipped. Paths name tabs, panes are numbered from 1 in layout order.
//!
//! ```text
//! open src/main.rs
//! open src/lib.rs
//! split vertical
//! edit src/lib.rs pub fn run() {}
//! focus-pane 1
//! close src/lib.rs
//! ```

use std::path::{Path, PathBuf};

use splitdesk_core::{CloseOutcome, CycleDirection, EditorSession, SplitDirection, TabId};

use crate::cli::LayoutFormat;
use crate::error::CliError;
use crate::util::{create_runtime, create_session};

use super::{GlobalOptions, print_layout};

/// One script operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOp {
    /// Open or focus a file
    Open(PathBuf),
    /// Close a tab
    Close(PathBuf),
    /// Close every tab
    CloseAll,
    /// Close every tab but one
    CloseOthers(PathBuf),
    /// Focus a tab
    Activate(PathBuf),
    /// Replace a tab's text, marking it unsaved
    Edit(PathBuf, String),
    /// Write a tab through the content provider and mark it saved
    Save(PathBuf),
    /// Pin a tab
    Pin(PathBuf),
    /// Unpin a tab
    Unpin(PathBuf),
    /// Split the active pane
    Split(SplitDirection),
    /// Close the active pane
    ClosePane,
    /// Focus the n-th pane
    FocusPane(usize),
    /// Move a tab to the n-th pane
    Move(PathBuf, usize),
    /// Resize the split holding the active pane
    Resize(f64),
    /// Focus the next tab of the active pane
    Next,
    /// Focus the previous tab of the active pane
    Previous,
}

/// Parses one script line. Returns `Ok(None)` for blanks and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptOp>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (op, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(op, rest)| (op, rest.trim()));

    let path = || {
        if rest.is_empty() {
            Err(format!("'{op}' needs a path"))
        } else {
            Ok(PathBuf::from(rest))
        }
    };
    let no_args = |parsed: ScriptOp| {
        if rest.is_empty() {
            Ok(parsed)
        } else {
            Err(format!("'{op}' takes no arguments"))
        }
    };

    let parsed = match op {
        "open" => ScriptOp::Open(path()?),
        "close" => ScriptOp::Close(path()?),
        "close-all" => no_args(ScriptOp::CloseAll)?,
        "close-others" => ScriptOp::CloseOthers(path()?),
        "activate" => ScriptOp::Activate(path()?),
        "edit" => {
            let (target, text) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "'edit' needs a path and text".to_owned())?;
            ScriptOp::Edit(PathBuf::from(target), text.trim_start().to_owned())
        }
        "save" => ScriptOp::Save(path()?),
        "pin" => ScriptOp::Pin(path()?),
        "unpin" => ScriptOp::Unpin(path()?),
        "split" => ScriptOp::Split(rest.parse()?),
        "close-pane" => no_args(ScriptOp::ClosePane)?,
        "focus-pane" => ScriptOp::FocusPane(parse_pane_number(rest)?),
        "move" => {
            let (target, pane) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| "'move' needs a path and a pane number".to_owned())?;
            ScriptOp::Move(PathBuf::from(target.trim_end()), parse_pane_number(pane)?)
        }
        "resize" => {
            let size = rest
                .trim_end_matches('%')
                .parse()
                .map_err(|_| format!("invalid size '{rest}'"))?;
            ScriptOp::Resize(size)
        }
        "next" => no_args(ScriptOp::Next)?,
        "prev" | "previous" => no_args(ScriptOp::Previous)?,
        other => return Err(format!("unknown operation '{other}'")),
    };
    Ok(Some(parsed))
}

fn parse_pane_number(text: &str) -> Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("invalid pane number '{text}'")),
    }
}

/// Parses a whole script, reporting the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<(usize, ScriptOp)>, CliError> {
    let mut ops = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        if let Some(op) = parse_line(line).map_err(|message| CliError::Script {
            line: line_number,
            message,
        })? {
            ops.push((line_number, op));
        }
    }
    Ok(ops)
}

/// Script replay command handler
pub fn cmd_run(
    options: GlobalOptions<'_>,
    script: &Path,
    root: Option<&Path>,
    format: LayoutFormat,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(script)?;
    let ops = parse_script(&text)?;

    let runtime = create_runtime()?;
    let mut session = create_session(options.config_path, root, options.assume_yes)?;
    runtime.block_on(async {
        for (line, op) in &ops {
            tracing::debug!(line, ?op, "applying script operation");
            apply(&mut session, op)
                .await
                .map_err(|message| CliError::Script {
                    line: *line,
                    message,
                })?;
        }
        Ok::<_, CliError>(())
    })?;

    if !options.quiet {
        print_layout(&session, format)?;
    }
    Ok(())
}

/// Applies one operation. Declined confirmations are reported but are not
/// failures.
pub async fn apply(session: &mut EditorSession, op: &ScriptOp) -> Result<(), String> {
    match op {
        ScriptOp::Open(path) => {
            session.open_tab(path).await;
        }
        ScriptOp::Close(path) => {
            let outcome = session.close_tab(tab_for(session, path)?);
            report_declined(outcome, "close");
        }
        ScriptOp::CloseAll => report_declined(session.close_all_tabs(), "close-all"),
        ScriptOp::CloseOthers(path) => {
            let outcome = session.close_other_tabs(tab_for(session, path)?);
            report_declined(outcome, "close-others");
        }
        ScriptOp::Activate(path) => {
            session.set_active_tab(tab_for(session, path)?);
        }
        ScriptOp::Edit(path, text) => {
            let tab = tab_for(session, path)?;
            session.update_tab_content(tab, text.replace("\\n", "\n"), true);
        }
        ScriptOp::Save(path) => {
            let tab = tab_for(session, path)?;
            let content = session
                .tab(tab)
                .map(|tab| tab.content.clone())
                .unwrap_or_default();
            session
                .content_provider()
                .set_content(path, &content)
                .await
                .map_err(|e| e.to_string())?;
            session.mark_saved(tab);
        }
        ScriptOp::Pin(path) => {
            session.pin_tab(tab_for(session, path)?);
        }
        ScriptOp::Unpin(path) => {
            session.unpin_tab(tab_for(session, path)?);
        }
        ScriptOp::Split(direction) => {
            let pane = session
                .active_pane()
                .ok_or_else(|| "no panes are open".to_owned())?;
            session
                .split_pane(pane, *direction)
                .map_err(|e| e.to_string())?;
        }
        ScriptOp::ClosePane => {
            let pane = session
                .active_pane()
                .ok_or_else(|| "no panes are open".to_owned())?;
            report_declined(session.close_pane(pane), "close-pane");
        }
        ScriptOp::FocusPane(number) => {
            let pane = pane_number(session, *number)?;
            session.set_active_pane(pane).map_err(|e| e.to_string())?;
        }
        ScriptOp::Move(path, number) => {
            let tab = tab_for(session, path)?;
            let pane = pane_number(session, *number)?;
            session
                .move_tab_to_pane(tab, pane)
                .map_err(|e| e.to_string())?;
        }
        ScriptOp::Resize(size) => {
            let split = session
                .active_pane()
                .and_then(|pane| session.parent_split(pane))
                .ok_or_else(|| "the active pane is not inside a split".to_owned())?;
            session
                .resize_split(split, *size)
                .map_err(|e| e.to_string())?;
        }
        ScriptOp::Next => {
            session.cycle_tab(CycleDirection::Next);
        }
        ScriptOp::Previous => {
            session.cycle_tab(CycleDirection::Previous);
        }
    }
    Ok(())
}

fn tab_for(session: &EditorSession, path: &Path) -> Result<TabId, String> {
    session
        .tab_for_path(path)
        .ok_or_else(|| format!("'{}' is not open", path.display()))
}

fn pane_number(session: &EditorSession, number: usize) -> Result<splitdesk_core::PaneId, String> {
    session
        .split_view()
        .zip(number.checked_sub(1))
        .and_then(|(view, index)| view.leaves().get(index).map(|leaf| leaf.id))
        .ok_or_else(|| format!("there is no pane {number}"))
}

fn report_declined(outcome: CloseOutcome, op: &str) {
    if outcome == CloseOutcome::Declined {
        eprintln!("{op}: declined, nothing closed");
    }
}
