use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{load_board, save_board};

/// Verifies and repairs star-row consistency: references to missing or
/// unstarred entries are dropped, duplicated references keep their first
/// occurrence, and starred entries in no row return to the default row.
pub fn run<S: DataStore>(store: &mut S, scope: Scope) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let report = board.repair();
    save_board(store, scope, &board)?;

    let mut result = CmdResult::default();
    if report.is_clean() {
        result.add_message(CmdMessage::success("No inconsistencies found"));
    } else {
        if report.dropped_refs > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Dropped {} stale row reference(s)",
                report.dropped_refs
            )));
        }
        if report.deduped_refs > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Removed {} duplicate row reference(s)",
                report.deduped_refs
            )));
        }
        if report.restored_entries > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Restored {} starred entries to the default row",
                report.restored_entries
            )));
        }
    }
    Ok(result.with_rows(board.rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::store::memory::fixtures::StoreFixture;
    use uuid::Uuid;

    #[test]
    fn clean_board_reports_clean() {
        let mut fixture = StoreFixture::new().with_entries(&["1+1"], Scope::Project);
        let result = run(&mut fixture.store, Scope::Project).unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn dangling_references_are_dropped_and_saved() {
        let mut board = Board::new();
        board.rows[0].entries.push(Uuid::new_v4());
        let mut fixture = StoreFixture::new().with_board(&board, Scope::Project);

        run(&mut fixture.store, Scope::Project).unwrap();

        let rows = fixture.store.load_rows(Scope::Project).unwrap().unwrap();
        assert!(rows[0].entries.is_empty());
    }
}
