use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult, ReckonPaths};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::save_board;

/// Materializes the scope directory with a default board, unless snapshots
/// already exist.
pub fn run<S: DataStore>(store: &mut S, paths: &ReckonPaths, scope: Scope) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.load_tabs(scope)?.is_some() {
        result.add_message(CmdMessage::info("Already initialized"));
        return Ok(result);
    }

    let board = Board::new();
    save_board(store, scope, &board)?;

    let dir = paths.scope_dir(scope)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized calculator board in {}",
        dir.display()
    )));
    Ok(result)
}
