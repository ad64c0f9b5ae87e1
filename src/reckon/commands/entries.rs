use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::SlotRef;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{load_board, resolve_entry, save_board};

/// Deletes an entry from its tab and from every star row in one operation.
pub fn delete<S: DataStore>(store: &mut S, scope: Scope, slot: &SlotRef) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let (tab_id, entry_id) = resolve_entry(&board, slot)?;

    let expression = board
        .find_entry(entry_id)
        .map(|(_, c)| c.expression.clone())
        .unwrap_or_default();
    board.delete_entry(tab_id, entry_id);
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry deleted ({}): {}",
        slot, expression
    )));
    Ok(result.with_tabs(board.tabs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{calculate, starring};
    use crate::index::Selector;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn delete_removes_entry_and_row_references() {
        let mut store = InMemoryStore::new();
        calculate::run(&mut store, Scope::Project, &Selector::Position(1), "2+2").unwrap();
        calculate::run(&mut store, Scope::Project, &Selector::Position(1), "3+3").unwrap();
        starring::star(
            &mut store,
            Scope::Project,
            &"1:1".parse::<SlotRef>().unwrap(),
        )
        .unwrap();

        delete(
            &mut store,
            Scope::Project,
            &"1:1".parse::<SlotRef>().unwrap(),
        )
        .unwrap();

        let tabs = store.load_tabs(Scope::Project).unwrap().unwrap();
        let rows = store.load_rows(Scope::Project).unwrap().unwrap();
        assert_eq!(tabs[0].calculations.len(), 1);
        assert_eq!(tabs[0].calculations[0].expression, "3+3");
        assert!(rows.iter().all(|r| r.entries.is_empty()));
    }

    #[test]
    fn unknown_slot_is_an_api_error() {
        let mut store = InMemoryStore::new();
        let result = delete(
            &mut store,
            Scope::Project,
            &"1:9".parse::<SlotRef>().unwrap(),
        );
        assert!(result.is_err());
    }
}
