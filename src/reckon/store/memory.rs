use super::DataStore;
use crate::error::Result;
use crate::model::{Fragment, Scope, StarRow, Tab, Theme};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    tabs: HashMap<Scope, Vec<Tab>>,
    rows: HashMap<Scope, Vec<StarRow>>,
    fragments: HashMap<Scope, Vec<Fragment>>,
    themes: HashMap<Scope, Theme>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_tabs(&self, scope: Scope) -> Result<Option<Vec<Tab>>> {
        Ok(self.tabs.get(&scope).cloned())
    }

    fn save_tabs(&mut self, tabs: &[Tab], scope: Scope) -> Result<()> {
        self.tabs.insert(scope, tabs.to_vec());
        Ok(())
    }

    fn load_rows(&self, scope: Scope) -> Result<Option<Vec<StarRow>>> {
        Ok(self.rows.get(&scope).cloned())
    }

    fn save_rows(&mut self, rows: &[StarRow], scope: Scope) -> Result<()> {
        self.rows.insert(scope, rows.to_vec());
        Ok(())
    }

    fn load_fragments(&self, scope: Scope) -> Result<Option<Vec<Fragment>>> {
        Ok(self.fragments.get(&scope).cloned())
    }

    fn save_fragments(&mut self, fragments: &[Fragment], scope: Scope) -> Result<()> {
        self.fragments.insert(scope, fragments.to_vec());
        Ok(())
    }

    fn load_theme(&self, scope: Scope) -> Result<Option<Theme>> {
        Ok(self.themes.get(&scope).copied())
    }

    fn save_theme(&mut self, theme: Theme, scope: Scope) -> Result<()> {
        self.themes.insert(scope, theme);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::board::Board;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Persists the given board into the scope.
        pub fn with_board(mut self, board: &Board, scope: Scope) -> Self {
            self.store.save_tabs(&board.tabs, scope).unwrap();
            self.store.save_rows(&board.rows, scope).unwrap();
            self.store.save_fragments(&board.fragments, scope).unwrap();
            self
        }

        /// A board with the given expressions evaluated into the first tab.
        pub fn with_entries(self, exprs: &[&str], scope: Scope) -> Self {
            let mut board = Board::new();
            let tab_id = board.tabs[0].id;
            for expr in exprs {
                board.set_input(tab_id, expr);
                board.evaluate(tab_id).unwrap().unwrap();
            }
            self.with_board(&board, scope)
        }
    }
}
