use super::{DataStore, FRAGMENTS_KEY, ROWS_KEY, TABS_KEY, THEME_KEY};
use crate::error::{ReckonError, Result};
use crate::model::{Fragment, Scope, StarRow, Tab, Theme};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    fn scope_dir(&self, scope: Scope) -> Result<&Path> {
        match scope {
            Scope::Project => self.project_root.as_deref().ok_or_else(|| {
                ReckonError::Store("No project scope available".to_string())
            }),
            Scope::Global => Ok(&self.global_root),
        }
    }

    fn ensure_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ReckonError::Io)?;
        }
        Ok(())
    }

    fn key_path(&self, scope: Scope, key: &str) -> Result<PathBuf> {
        Ok(self.scope_dir(scope)?.join(format!("{}.json", key)))
    }

    fn load_key<T: DeserializeOwned>(&self, scope: Scope, key: &str) -> Result<Option<T>> {
        let path = self.key_path(scope, key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ReckonError::Io)?;
        // A snapshot that does not parse is treated as absent, not fatal.
        Ok(serde_json::from_str(&content).ok())
    }

    fn save_key<T: Serialize>(&mut self, scope: Scope, key: &str, value: &T) -> Result<()> {
        let dir = self.scope_dir(scope)?.to_path_buf();
        Self::ensure_dir(&dir)?;
        let content = serde_json::to_string_pretty(value).map_err(ReckonError::Serialization)?;
        fs::write(dir.join(format!("{}.json", key)), content).map_err(ReckonError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_tabs(&self, scope: Scope) -> Result<Option<Vec<Tab>>> {
        self.load_key(scope, TABS_KEY)
    }

    fn save_tabs(&mut self, tabs: &[Tab], scope: Scope) -> Result<()> {
        self.save_key(scope, TABS_KEY, &tabs)
    }

    fn load_rows(&self, scope: Scope) -> Result<Option<Vec<StarRow>>> {
        self.load_key(scope, ROWS_KEY)
    }

    fn save_rows(&mut self, rows: &[StarRow], scope: Scope) -> Result<()> {
        self.save_key(scope, ROWS_KEY, &rows)
    }

    fn load_fragments(&self, scope: Scope) -> Result<Option<Vec<Fragment>>> {
        self.load_key(scope, FRAGMENTS_KEY)
    }

    fn save_fragments(&mut self, fragments: &[Fragment], scope: Scope) -> Result<()> {
        self.save_key(scope, FRAGMENTS_KEY, &fragments)
    }

    fn load_theme(&self, scope: Scope) -> Result<Option<Theme>> {
        self.load_key(scope, THEME_KEY)
    }

    fn save_theme(&mut self, theme: Theme, scope: Scope) -> Result<()> {
        self.save_key(scope, THEME_KEY, &theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> FileStore {
        FileStore::new(Some(dir.path().join(".reckon")), dir.path().join("global"))
    }

    #[test]
    fn missing_snapshots_load_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(store.load_tabs(Scope::Project).unwrap().is_none());
        assert!(store.load_rows(Scope::Project).unwrap().is_none());
        assert!(store.load_theme(Scope::Project).unwrap().is_none());
    }

    #[test]
    fn snapshots_round_trip_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        let mut board = Board::new();
        let tab_id = board.tabs[0].id;
        for expr in ["1+1", "2*3", "10/4"] {
            board.set_input(tab_id, expr);
            board.evaluate(tab_id).unwrap().unwrap();
        }
        let entry = board.tabs[0].calculations[1].id;
        board.toggle_star(tab_id, entry);
        board.add_tab();

        store.save_tabs(&board.tabs, Scope::Project).unwrap();
        store.save_rows(&board.rows, Scope::Project).unwrap();

        let tabs = store.load_tabs(Scope::Project).unwrap().unwrap();
        let rows = store.load_rows(Scope::Project).unwrap().unwrap();
        assert_eq!(tabs, board.tabs);
        assert_eq!(rows, board.rows);
    }

    #[test]
    fn scopes_do_not_bleed_into_each_other() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);
        let board = Board::new();

        store.save_tabs(&board.tabs, Scope::Project).unwrap();
        assert!(store.load_tabs(Scope::Global).unwrap().is_none());
    }

    #[test]
    fn corrupted_snapshot_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);
        store.save_theme(Theme::Dark, Scope::Project).unwrap();

        let path = dir.path().join(".reckon").join("calculatorTabs.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(store.load_tabs(Scope::Project).unwrap().is_none());
    }

    #[test]
    fn theme_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);
        store.save_theme(Theme::Dark, Scope::Global).unwrap();
        assert_eq!(
            store.load_theme(Scope::Global).unwrap(),
            Some(Theme::Dark)
        );
    }

    #[test]
    fn project_scope_requires_a_project_root() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(None, dir.path().to_path_buf());
        assert!(store.load_tabs(Scope::Project).is_err());
    }
}
