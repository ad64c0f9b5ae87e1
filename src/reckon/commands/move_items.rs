use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{SlotRef, StarDest};
use crate::model::Scope;
use crate::moves::{self, Container, DragKind, ListMutation, MoveRequest, Slot};
use crate::store::DataStore;

use super::helpers::{load_board, resolve_entry, resolve_fragment, resolve_row, resolve_tab, save_board};

/// Reorders tabs by 1-based display position.
pub fn tab<S: DataStore>(store: &mut S, scope: Scope, from: usize, to: usize) -> Result<CmdResult> {
    let board = load_board(store, scope)?;
    let request = MoveRequest {
        kind: DragKind::Tab,
        source: Slot::new(Container::Strip, from.wrapping_sub(1)),
        dest: Some(Slot::new(Container::Strip, to.wrapping_sub(1))),
    };
    finish(store, scope, board, request)
}

/// Moves an entry within or between tabs.
pub fn entry<S: DataStore>(
    store: &mut S,
    scope: Scope,
    from: &SlotRef,
    to: &SlotRef,
) -> Result<CmdResult> {
    let board = load_board(store, scope)?;
    let (source_tab, _) = resolve_entry(&board, from)?;
    let dest_tab = resolve_tab(&board, &to.container)?;
    let request = MoveRequest {
        kind: DragKind::Entry,
        source: Slot::new(Container::Tab(source_tab), from.index - 1),
        dest: Some(Slot::new(Container::Tab(dest_tab), to.index - 1)),
    };
    finish(store, scope, board, request)
}

/// Moves a starred reference within or between rows, or drops it on trash.
pub fn starred<S: DataStore>(
    store: &mut S,
    scope: Scope,
    from: &SlotRef,
    to: &StarDest,
) -> Result<CmdResult> {
    let board = load_board(store, scope)?;
    let source_row = resolve_row(&board, &from.container)?;
    let dest = match to {
        StarDest::Trash => Slot::new(Container::Trash, 0),
        StarDest::Slot(slot) => {
            let dest_row = resolve_row(&board, &slot.container)?;
            Slot::new(Container::Row(dest_row), slot.index - 1)
        }
    };
    let request = MoveRequest {
        kind: DragKind::Starred,
        source: Slot::new(Container::Row(source_row), from.index - 1),
        dest: Some(dest),
    };
    finish(store, scope, board, request)
}

/// Drops a fragment (by 1-based palette position) onto an entry slot.
pub fn drop_fragment<S: DataStore>(
    store: &mut S,
    scope: Scope,
    fragment: usize,
    target: &SlotRef,
) -> Result<CmdResult> {
    let board = load_board(store, scope)?;
    resolve_fragment(&board, fragment)?;
    let (dest_tab, _) = resolve_entry(&board, target)?;
    let request = MoveRequest {
        kind: DragKind::Fragment,
        source: Slot::new(Container::Palette, fragment - 1),
        dest: Some(Slot::new(Container::Tab(dest_tab), target.index - 1)),
    };
    finish(store, scope, board, request)
}

fn finish<S: DataStore>(
    store: &mut S,
    scope: Scope,
    mut board: Board,
    request: MoveRequest,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(mutation) = moves::plan_move(&board, &request) else {
        result.add_message(CmdMessage::info("Nothing to move"));
        return Ok(result);
    };

    let created = moves::apply(&mut board, &mutation);
    save_board(store, scope, &board)?;

    match (&mutation, created) {
        (ListMutation::Compose { .. }, Some(calc)) => {
            result.add_message(CmdMessage::success(format!(
                "{} = {}",
                calc.expression, calc.result
            )));
            result.affected_entries.push(calc);
        }
        // A composition that does not evaluate is dropped without an error
        // surface, like the drop gesture it models.
        (ListMutation::Compose { .. }, None) => {}
        (ListMutation::Unstar { .. }, _) => {
            result.add_message(CmdMessage::success("Entry unstarred"));
        }
        (ListMutation::ReorderTabs { .. }, _) => {
            result.add_message(CmdMessage::success("Tabs reordered"));
        }
        (ListMutation::MoveEntry { .. }, _) => {
            result.add_message(CmdMessage::success("Entry moved"));
        }
        (ListMutation::MoveStarred { .. }, _) => {
            result.add_message(CmdMessage::success("Starred entry moved"));
        }
    }

    Ok(result.with_tabs(board.tabs).with_rows(board.rows))
}
