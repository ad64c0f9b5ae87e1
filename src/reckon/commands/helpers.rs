use crate::board::Board;
use crate::error::{ReckonError, Result};
use crate::index::{Selector, SlotRef};
use crate::model::Scope;
use crate::store::DataStore;
use uuid::Uuid;

pub fn load_board<S: DataStore>(store: &S, scope: Scope) -> Result<Board> {
    let tabs = store.load_tabs(scope)?;
    let rows = store.load_rows(scope)?;
    let fragments = store.load_fragments(scope)?;
    Ok(Board::from_snapshot(tabs, rows, fragments))
}

pub fn save_board<S: DataStore>(store: &mut S, scope: Scope, board: &Board) -> Result<()> {
    store.save_tabs(&board.tabs, scope)?;
    store.save_rows(&board.rows, scope)?;
    store.save_fragments(&board.fragments, scope)?;
    Ok(())
}

pub fn resolve_tab(board: &Board, selector: &Selector) -> Result<Uuid> {
    match selector {
        Selector::Position(n) => n
            .checked_sub(1)
            .and_then(|i| board.tabs.get(i))
            .map(|t| t.id),
        Selector::Name(name) => board.tabs.iter().find(|t| t.name == *name).map(|t| t.id),
    }
    .ok_or_else(|| ReckonError::Api(format!("Tab {} not found", selector)))
}

pub fn resolve_row(board: &Board, selector: &Selector) -> Result<Uuid> {
    match selector {
        Selector::Position(n) => n
            .checked_sub(1)
            .and_then(|i| board.rows.get(i))
            .map(|r| r.id),
        Selector::Name(name) => board.rows.iter().find(|r| r.name == *name).map(|r| r.id),
    }
    .ok_or_else(|| ReckonError::Api(format!("Row {} not found", selector)))
}

/// Resolves a `TAB:ENTRY` slot to (tab id, entry id).
pub fn resolve_entry(board: &Board, slot: &SlotRef) -> Result<(Uuid, Uuid)> {
    let tab_id = resolve_tab(board, &slot.container)?;
    let entry = board
        .tab(tab_id)
        .and_then(|tab| slot.index.checked_sub(1).and_then(|i| tab.calculations.get(i)))
        .ok_or_else(|| ReckonError::Api(format!("Entry {} not found", slot)))?;
    Ok((tab_id, entry.id))
}

/// Resolves a 1-based palette position to a fragment id.
pub fn resolve_fragment(board: &Board, position: usize) -> Result<Uuid> {
    position
        .checked_sub(1)
        .and_then(|i| board.fragments.get(i))
        .map(|f| f.id)
        .ok_or_else(|| ReckonError::Api(format!("Fragment {} not found", position)))
}
