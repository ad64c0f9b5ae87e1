use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Selector;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{load_board, resolve_row, save_board};

pub fn add<S: DataStore>(store: &mut S, scope: Scope) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let id = board.add_row();
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    if let Some(row) = board.row(id) {
        result.add_message(CmdMessage::success(format!("Row added: {}", row.name)));
    }
    Ok(result.with_rows(board.rows))
}

/// Renames a row. Unlike tabs, this is a direct replacement with no
/// de-duplication; empty names are accepted.
pub fn rename<S: DataStore>(
    store: &mut S,
    scope: Scope,
    row: &Selector,
    name: &str,
) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let row_id = resolve_row(&board, row)?;
    board.rename_row(row_id, name);
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Row renamed: {}", name)));
    Ok(result.with_rows(board.rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_appends_numbered_rows() {
        let mut store = InMemoryStore::new();
        add(&mut store, Scope::Project).unwrap();
        let result = add(&mut store, Scope::Project).unwrap();

        let names: Vec<_> = result.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Default Row", "New Row 2", "New Row 3"]);
    }

    #[test]
    fn rename_replaces_directly() {
        let mut store = InMemoryStore::new();
        rename(&mut store, Scope::Project, &Selector::Position(1), "Totals").unwrap();
        let rows = store.load_rows(Scope::Project).unwrap().unwrap();
        assert_eq!(rows[0].name, "Totals");

        rename(&mut store, Scope::Project, &Selector::Position(1), "").unwrap();
        let rows = store.load_rows(Scope::Project).unwrap().unwrap();
        assert_eq!(rows[0].name, "");
    }
}
