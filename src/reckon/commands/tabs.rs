use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Selector;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{load_board, resolve_tab, save_board};

pub fn add<S: DataStore>(store: &mut S, scope: Scope) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let id = board.add_tab();
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    if let Some(tab) = board.tab(id) {
        result.add_message(CmdMessage::success(format!("Tab added: {}", tab.name)));
    }
    Ok(result.with_tabs(board.tabs))
}

/// Deletes a tab. Its entries go with it, including their star-row
/// references.
pub fn delete<S: DataStore>(store: &mut S, scope: Scope, tab: &Selector) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let tab_id = resolve_tab(&board, tab)?;
    let name = board
        .tab(tab_id)
        .map(|t| t.name.clone())
        .unwrap_or_default();

    board.delete_tab(tab_id);
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Tab deleted: {}", name)));
    Ok(result.with_tabs(board.tabs))
}

pub fn rename<S: DataStore>(
    store: &mut S,
    scope: Scope,
    tab: &Selector,
    name: &str,
) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let tab_id = resolve_tab(&board, tab)?;

    let mut result = CmdResult::default();
    if name.is_empty() {
        result.add_message(CmdMessage::info("Tab name unchanged (empty name)"));
        return Ok(result);
    }

    board.rename_tab(tab_id, name);
    save_board(store, scope, &board)?;
    result.add_message(CmdMessage::success(format!("Tab renamed: {}", name)));
    Ok(result.with_tabs(board.tabs))
}
