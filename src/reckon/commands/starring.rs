use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::SlotRef;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{load_board, resolve_entry, save_board};

pub fn star<S: DataStore>(store: &mut S, scope: Scope, slot: &SlotRef) -> Result<CmdResult> {
    set_star(store, scope, slot, true)
}

pub fn unstar<S: DataStore>(store: &mut S, scope: Scope, slot: &SlotRef) -> Result<CmdResult> {
    set_star(store, scope, slot, false)
}

fn set_star<S: DataStore>(
    store: &mut S,
    scope: Scope,
    slot: &SlotRef,
    starred: bool,
) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let (tab_id, entry_id) = resolve_entry(&board, slot)?;

    let mut result = CmdResult::default();
    let already = board
        .find_entry(entry_id)
        .map(|(_, c)| c.starred)
        .unwrap_or(false);
    if already == starred {
        let state = if starred { "starred" } else { "not starred" };
        result.add_message(CmdMessage::info(format!("Entry {} is already {}", slot, state)));
        return Ok(result);
    }

    board.toggle_star(tab_id, entry_id);
    save_board(store, scope, &board)?;

    if let Some((_, calc)) = board.find_entry(entry_id) {
        let verb = if starred { "starred" } else { "unstarred" };
        result.add_message(CmdMessage::success(format!(
            "Entry {} ({}): {} = {}",
            verb, slot, calc.expression, calc.result
        )));
        result.affected_entries.push(calc.clone());
    }
    Ok(result.with_rows(board.rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::calculate;
    use crate::index::Selector;
    use crate::store::memory::InMemoryStore;

    fn slot(s: &str) -> SlotRef {
        s.parse().unwrap()
    }

    #[test]
    fn star_copies_into_the_default_row() {
        let mut store = InMemoryStore::new();
        calculate::run(&mut store, Scope::Project, &Selector::Position(1), "2+2").unwrap();

        let result = star(&mut store, Scope::Project, &slot("1:1")).unwrap();
        assert_eq!(result.rows[0].entries.len(), 1);

        let tabs = store.load_tabs(Scope::Project).unwrap().unwrap();
        assert!(tabs[0].calculations[0].starred);
    }

    #[test]
    fn unstar_leaves_the_tab_entry_in_place() {
        let mut store = InMemoryStore::new();
        calculate::run(&mut store, Scope::Project, &Selector::Position(1), "2+2").unwrap();
        star(&mut store, Scope::Project, &slot("1:1")).unwrap();

        unstar(&mut store, Scope::Project, &slot("1:1")).unwrap();

        let tabs = store.load_tabs(Scope::Project).unwrap().unwrap();
        let rows = store.load_rows(Scope::Project).unwrap().unwrap();
        assert_eq!(tabs[0].calculations.len(), 1);
        assert!(!tabs[0].calculations[0].starred);
        assert!(rows.iter().all(|r| r.entries.is_empty()));
    }

    #[test]
    fn double_star_is_reported_not_duplicated() {
        let mut store = InMemoryStore::new();
        calculate::run(&mut store, Scope::Project, &Selector::Position(1), "2+2").unwrap();
        star(&mut store, Scope::Project, &slot("1:1")).unwrap();
        star(&mut store, Scope::Project, &slot("1:1")).unwrap();

        let rows = store.load_rows(Scope::Project).unwrap().unwrap();
        assert_eq!(rows[0].entries.len(), 1);
    }
}
