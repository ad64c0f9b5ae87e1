//! In-memory board state and its transition rules.
//!
//! [`Board`] owns the tabs, the star rows, the fragment palette, and the
//! per-tab pending input. Every operation is a single synchronous in-memory
//! transition; persistence belongs to the caller (commands load a board,
//! mutate it, and save it back).
//!
//! Lookups on unknown ids are no-ops. Callers that want to complain about a
//! bad selector do so before ids ever reach the board.

use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::eval::{self, EvalError};
use crate::model::{Calculation, Fragment, StarRow, Tab};

pub const DEFAULT_TAB_NAME: &str = "Tab 1";
pub const DEFAULT_ROW_NAME: &str = "Default Row";

/// Outcome of [`Board::repair`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Row references whose entry is gone or no longer starred.
    pub dropped_refs: usize,
    /// Starred entries that were missing from every row.
    pub restored_entries: usize,
    /// References that appeared in more than one row (first one wins).
    pub deduped_refs: usize,
}

impl RepairReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    pub tabs: Vec<Tab>,
    pub rows: Vec<StarRow>,
    pub fragments: Vec<Fragment>,
    inputs: HashMap<Uuid, String>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A fresh board: one default tab, one default star row.
    pub fn new() -> Self {
        Self {
            tabs: vec![Tab::new(DEFAULT_TAB_NAME)],
            rows: vec![StarRow::new(DEFAULT_ROW_NAME)],
            fragments: Vec::new(),
            inputs: HashMap::new(),
        }
    }

    /// Rebuilds a board from persisted snapshots. A missing tabs snapshot
    /// falls back to the default tab; a missing or empty rows snapshot falls
    /// back to the default row, so at least one row always exists.
    pub fn from_snapshot(
        tabs: Option<Vec<Tab>>,
        rows: Option<Vec<StarRow>>,
        fragments: Option<Vec<Fragment>>,
    ) -> Self {
        let tabs = match tabs {
            Some(tabs) => tabs,
            None => vec![Tab::new(DEFAULT_TAB_NAME)],
        };
        let rows = match rows {
            Some(rows) if !rows.is_empty() => rows,
            _ => vec![StarRow::new(DEFAULT_ROW_NAME)],
        };
        Self {
            tabs,
            rows,
            fragments: fragments.unwrap_or_default(),
            inputs: HashMap::new(),
        }
    }

    pub fn tab(&self, tab_id: Uuid) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub fn row(&self, row_id: Uuid) -> Option<&StarRow> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    /// Finds an entry across all tabs.
    pub fn find_entry(&self, entry_id: Uuid) -> Option<(&Tab, &Calculation)> {
        self.tabs.iter().find_map(|tab| {
            tab.calculations
                .iter()
                .find(|c| c.id == entry_id)
                .map(|c| (tab, c))
        })
    }

    /// Resolves a row's entry ids into calculations, skipping any that no
    /// longer resolve.
    pub fn row_calculations<'a>(&'a self, row: &'a StarRow) -> Vec<&'a Calculation> {
        row.entries
            .iter()
            .filter_map(|id| self.find_entry(*id).map(|(_, calc)| calc))
            .collect()
    }

    // --- Tab store ---

    /// Appends a tab named `Tab <n>`, disambiguated against existing names.
    pub fn add_tab(&mut self) -> Uuid {
        let name = unique_name("Tab", self.tabs.len() + 1, |candidate| {
            self.tabs.iter().any(|t| t.name == candidate)
        });
        let tab = Tab::new(name);
        let id = tab.id;
        self.tabs.push(tab);
        self.inputs.insert(id, String::new());
        id
    }

    /// Removes a tab, its pending input, and every reference to its entries
    /// from the star rows.
    pub fn delete_tab(&mut self, tab_id: Uuid) -> bool {
        let Some(pos) = self.tabs.iter().position(|t| t.id == tab_id) else {
            return false;
        };
        let tab = self.tabs.remove(pos);
        self.inputs.remove(&tab_id);

        let gone: HashSet<Uuid> = tab.calculations.iter().map(|c| c.id).collect();
        for row in &mut self.rows {
            row.entries.retain(|id| !gone.contains(id));
        }
        true
    }

    /// Renames a tab. An empty name keeps the current one.
    pub fn rename_tab(&mut self, tab_id: Uuid, name: &str) -> bool {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == tab_id) else {
            return false;
        };
        if !name.is_empty() {
            tab.name = name.to_string();
        }
        true
    }

    // --- Pending input ---

    pub fn set_input(&mut self, tab_id: Uuid, text: &str) {
        if self.tab(tab_id).is_some() {
            self.inputs.insert(tab_id, text.to_string());
        }
    }

    pub fn pending_input(&self, tab_id: Uuid) -> &str {
        self.inputs.get(&tab_id).map(String::as_str).unwrap_or("")
    }

    /// Evaluates the tab's pending input. On success the new entry is
    /// appended to the tab and the pending input cleared; on failure both
    /// are left untouched so the user can correct the text. Returns `None`
    /// for an unknown tab.
    pub fn evaluate(&mut self, tab_id: Uuid) -> Option<Result<Calculation, EvalError>> {
        let pos = self.tabs.iter().position(|t| t.id == tab_id)?;
        let text = self.inputs.get(&tab_id).cloned().unwrap_or_default();
        match eval::evaluate(&text) {
            Ok(value) => {
                let calc = Calculation::new(text, eval::format_value(value));
                self.tabs[pos].calculations.push(calc.clone());
                self.inputs.insert(tab_id, String::new());
                Some(Ok(calc))
            }
            Err(e) => Some(Err(e)),
        }
    }

    // --- Entries ---

    /// Removes an entry from its tab and from every star row.
    pub fn delete_entry(&mut self, tab_id: Uuid, entry_id: Uuid) -> bool {
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == tab_id) else {
            return false;
        };
        let Some(pos) = tab.calculations.iter().position(|c| c.id == entry_id) else {
            return false;
        };
        tab.calculations.remove(pos);
        for row in &mut self.rows {
            row.entries.retain(|id| *id != entry_id);
        }
        true
    }

    /// Flips an entry's starred flag. Newly starred entries are appended to
    /// the first row; unstarred entries leave every row. Returns the new
    /// starred state.
    pub fn toggle_star(&mut self, tab_id: Uuid, entry_id: Uuid) -> Option<bool> {
        let tab = self.tabs.iter_mut().find(|t| t.id == tab_id)?;
        let calc = tab.calculations.iter_mut().find(|c| c.id == entry_id)?;
        calc.starred = !calc.starred;
        let starred = calc.starred;

        if starred {
            if let Some(row) = self.rows.first_mut() {
                row.entries.push(entry_id);
            }
        } else {
            for row in &mut self.rows {
                row.entries.retain(|id| *id != entry_id);
            }
        }
        Some(starred)
    }

    // --- Star rows ---

    /// Appends an empty row named `New Row <n>`, disambiguated against
    /// existing row names.
    pub fn add_row(&mut self) -> Uuid {
        let name = unique_name("New Row", self.rows.len() + 1, |candidate| {
            self.rows.iter().any(|r| r.name == candidate)
        });
        let row = StarRow::new(name);
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Renames a row. Direct replacement, empty names included.
    pub fn rename_row(&mut self, row_id: Uuid, name: &str) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.id == row_id) else {
            return false;
        };
        row.name = name.to_string();
        true
    }

    /// Clears the starred flag on the entry, wherever it lives, and drops
    /// it from every row. The trash drop target lands here.
    pub fn remove_starred(&mut self, entry_id: Uuid) -> bool {
        let mut found = false;
        for tab in &mut self.tabs {
            for calc in &mut tab.calculations {
                if calc.id == entry_id {
                    calc.starred = false;
                    found = true;
                }
            }
        }
        for row in &mut self.rows {
            row.entries.retain(|id| *id != entry_id);
        }
        found
    }

    // --- Fragments ---

    pub fn add_fragment(&mut self, value: &str) -> Uuid {
        let fragment = Fragment::new(value);
        let id = fragment.id;
        self.fragments.push(fragment);
        id
    }

    pub fn update_fragment(&mut self, fragment_id: Uuid, value: &str) -> bool {
        let Some(fragment) = self.fragments.iter_mut().find(|f| f.id == fragment_id) else {
            return false;
        };
        fragment.value = value.to_string();
        true
    }

    /// Toggles a fragment's frozen state. Returns the new state.
    pub fn toggle_frozen(&mut self, fragment_id: Uuid) -> Option<bool> {
        let fragment = self.fragments.iter_mut().find(|f| f.id == fragment_id)?;
        fragment.frozen = !fragment.frozen;
        Some(fragment.frozen)
    }

    pub fn delete_fragment(&mut self, fragment_id: Uuid) -> bool {
        let len = self.fragments.len();
        self.fragments.retain(|f| f.id != fragment_id);
        self.fragments.len() < len
    }

    /// Derives a new entry from a frozen fragment dropped onto an entry
    /// slot: the target expression is parenthesized, the fragment text
    /// appended, and the whole thing evaluated. The new entry lands at the
    /// end of the tab; the target entry stays put. Returns `None` when the
    /// fragment is not frozen, anything fails to resolve, or the derived
    /// expression does not evaluate.
    pub fn compose_entry(
        &mut self,
        tab_id: Uuid,
        target_index: usize,
        fragment_id: Uuid,
    ) -> Option<Calculation> {
        let fragment = self.fragments.iter().find(|f| f.id == fragment_id)?;
        if !fragment.frozen {
            return None;
        }
        let value = fragment.value.clone();
        let pos = self.tabs.iter().position(|t| t.id == tab_id)?;
        let target = self.tabs[pos].calculations.get(target_index)?;
        let expression = format!("({}) {}", target.expression, value);
        let result = eval::evaluate(&expression).ok()?;
        let calc = Calculation::new(expression, eval::format_value(result));
        self.tabs[pos].calculations.push(calc.clone());
        Some(calc)
    }

    // --- Consistency ---

    /// Reconciles row membership with the starred flags: drops references
    /// to missing or unstarred entries, keeps the first occurrence of any
    /// duplicated reference, and restores starred entries that are in no
    /// row to the first row.
    pub fn repair(&mut self) -> RepairReport {
        let mut report = RepairReport::default();

        let starred: HashMap<Uuid, bool> = self
            .tabs
            .iter()
            .flat_map(|t| t.calculations.iter())
            .map(|c| (c.id, c.starred))
            .collect();

        let mut seen = HashSet::new();
        for row in &mut self.rows {
            row.entries.retain(|id| {
                if starred.get(id) != Some(&true) {
                    report.dropped_refs += 1;
                    return false;
                }
                if !seen.insert(*id) {
                    report.deduped_refs += 1;
                    return false;
                }
                true
            });
        }

        let mut missing = Vec::new();
        for tab in &self.tabs {
            for calc in &tab.calculations {
                if calc.starred && !seen.contains(&calc.id) {
                    missing.push(calc.id);
                }
            }
        }
        report.restored_entries = missing.len();
        if let Some(row) = self.rows.first_mut() {
            row.entries.extend(missing);
        }

        report
    }
}

fn unique_name(base: &str, n: usize, taken: impl Fn(&str) -> bool) -> String {
    let mut name = format!("{} {}", base, n);
    let mut counter = 1;
    while taken(&name) {
        name = format!("{} {} ({})", base, n, counter);
        counter += 1;
    }
    name
}
