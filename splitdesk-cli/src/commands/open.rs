//! Open files command.

use std::path::{Path, PathBuf};

use crate::cli::{LayoutFormat, SplitArg};
use crate::error::CliError;
use crate::util::{create_runtime, create_session};

use super::{GlobalOptions, print_layout};

/// Open files command handler
pub fn cmd_open(
    options: GlobalOptions<'_>,
    paths: &[PathBuf],
    root: Option<&Path>,
    splits: &[SplitArg],
    format: LayoutFormat,
) -> Result<(), CliError> {
    let runtime = create_runtime()?;
    let mut session = create_session(options.config_path, root, options.assume_yes)?;

    runtime.block_on(async {
        for path in paths {
            session.open_tab(path).await;
        }
    });

    for split in splits {
        let pane = session
            .active_pane()
            .ok_or_else(|| CliError::Layout("no panes are open".to_owned()))?;
        session
            .split_pane(pane, (*split).into())
            .map_err(|e| CliError::Layout(format!("Cannot split {split:?}: {e}")))?;
    }

    if !options.quiet {
        print_layout(&session, format)?;
    }
    Ok(())
}
