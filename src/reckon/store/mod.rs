//! # Storage layer
//!
//! [`DataStore`] abstracts the persisted snapshots away from the core
//! logic. Implementations handle four logical keys, each an independent
//! serialized snapshot:
//!
//! - `calculatorTabs`: the ordered tab list, entries included
//! - `starredRows`: the ordered star rows (entry ids only)
//! - `fragments`: the fragment palette
//! - `theme`: `"light"` or `"dark"`
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   inside the scope directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Scope pattern
//!
//! All operations take a [`Scope`] parameter:
//! - `Scope::Project`: local `.reckon/` directory in the current project
//! - `Scope::Global`: user-wide data directory
//!
//! A missing snapshot is `None` and callers fall back to defaults; a
//! snapshot that fails to parse is also `None`, so a damaged file degrades
//! to a fresh board instead of a crash.

use crate::error::Result;
use crate::model::{Fragment, Scope, StarRow, Tab, Theme};

pub mod fs;
pub mod memory;

pub const TABS_KEY: &str = "calculatorTabs";
pub const ROWS_KEY: &str = "starredRows";
pub const FRAGMENTS_KEY: &str = "fragments";
pub const THEME_KEY: &str = "theme";

/// Abstract interface for board persistence.
///
/// Every mutation writes a whole snapshot back; there is no partial update
/// and no batching.
pub trait DataStore {
    fn load_tabs(&self, scope: Scope) -> Result<Option<Vec<Tab>>>;
    fn save_tabs(&mut self, tabs: &[Tab], scope: Scope) -> Result<()>;

    fn load_rows(&self, scope: Scope) -> Result<Option<Vec<StarRow>>>;
    fn save_rows(&mut self, rows: &[StarRow], scope: Scope) -> Result<()>;

    fn load_fragments(&self, scope: Scope) -> Result<Option<Vec<Fragment>>>;
    fn save_fragments(&mut self, fragments: &[Fragment], scope: Scope) -> Result<()>;

    fn load_theme(&self, scope: Scope) -> Result<Option<Theme>>;
    fn save_theme(&mut self, theme: Theme, scope: Scope) -> Result<()>;
}
