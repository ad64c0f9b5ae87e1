use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{load_board, resolve_fragment, save_board};

pub fn add<S: DataStore>(store: &mut S, scope: Scope, value: &str) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    board.add_fragment(value);
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Fragment added: {}", value)));
    Ok(result.with_fragments(board.fragments))
}

pub fn set<S: DataStore>(
    store: &mut S,
    scope: Scope,
    position: usize,
    value: &str,
) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let id = resolve_fragment(&board, position)?;
    board.update_fragment(id, value);
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Fragment {} set to: {}",
        position, value
    )));
    Ok(result.with_fragments(board.fragments))
}

/// Toggles a fragment's frozen state. Only frozen fragments participate in
/// drops.
pub fn freeze<S: DataStore>(store: &mut S, scope: Scope, position: usize) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let id = resolve_fragment(&board, position)?;
    let frozen = board.toggle_frozen(id);
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    let state = if frozen == Some(true) { "frozen" } else { "unfrozen" };
    result.add_message(CmdMessage::success(format!(
        "Fragment {} is now {}",
        position, state
    )));
    Ok(result.with_fragments(board.fragments))
}

pub fn delete<S: DataStore>(store: &mut S, scope: Scope, position: usize) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let id = resolve_fragment(&board, position)?;
    board.delete_fragment(id);
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Fragment {} deleted", position)));
    Ok(result.with_fragments(board.fragments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn fragments_accumulate_and_persist() {
        let mut store = InMemoryStore::new();
        add(&mut store, Scope::Project, "*3").unwrap();
        let result = add(&mut store, Scope::Project, "+ 100").unwrap();

        assert_eq!(result.fragments.len(), 2);
        let stored = store.load_fragments(Scope::Project).unwrap().unwrap();
        assert_eq!(stored[0].value, "*3");
        assert!(!stored[0].frozen);
    }

    #[test]
    fn freeze_toggles() {
        let mut store = InMemoryStore::new();
        add(&mut store, Scope::Project, "*3").unwrap();
        freeze(&mut store, Scope::Project, 1).unwrap();
        let stored = store.load_fragments(Scope::Project).unwrap().unwrap();
        assert!(stored[0].frozen);

        freeze(&mut store, Scope::Project, 1).unwrap();
        let stored = store.load_fragments(Scope::Project).unwrap().unwrap();
        assert!(!stored[0].frozen);
    }

    #[test]
    fn set_and_delete_address_by_position() {
        let mut store = InMemoryStore::new();
        add(&mut store, Scope::Project, "*3").unwrap();
        add(&mut store, Scope::Project, "/2").unwrap();

        set(&mut store, Scope::Project, 2, "/4").unwrap();
        delete(&mut store, Scope::Project, 1).unwrap();

        let stored = store.load_fragments(Scope::Project).unwrap().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].value, "/4");
    }

    #[test]
    fn unknown_position_is_an_api_error() {
        let mut store = InMemoryStore::new();
        assert!(freeze(&mut store, Scope::Project, 1).is_err());
    }
}
