use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::load_board;

/// Loads the whole board for display: tabs, star rows, fragments, theme.
pub fn run<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let board = load_board(store, scope)?;
    let theme = store.load_theme(scope)?.unwrap_or_default();
    Ok(CmdResult::default()
        .with_tabs(board.tabs)
        .with_rows(board.rows)
        .with_fragments(board.fragments)
        .with_theme(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::calculate;
    use crate::index::Selector;
    use crate::model::Theme;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_the_default_board() {
        let store = InMemoryStore::new();
        let result = run(&store, Scope::Project).unwrap();
        assert_eq!(result.tabs.len(), 1);
        assert_eq!(result.tabs[0].name, "Tab 1");
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.theme, Some(Theme::Light));
    }

    #[test]
    fn lists_saved_entries_in_order() {
        let mut store = InMemoryStore::new();
        calculate::run(&mut store, Scope::Project, &Selector::Position(1), "1+1").unwrap();
        calculate::run(&mut store, Scope::Project, &Selector::Position(1), "2+2").unwrap();

        let result = run(&store, Scope::Project).unwrap();
        assert_eq!(result.tabs[0].calculations.len(), 2);
        assert_eq!(result.tabs[0].calculations[0].result, "2");
        assert_eq!(result.tabs[0].calculations[1].result, "4");
    }
}
