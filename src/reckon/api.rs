//! # API Facade
//!
//! The single entry point for all board operations, regardless of the UI
//! driving them. The facade dispatches to the command layer and returns
//! structured `Result<CmdResult>` values; it never prints, never exits, and
//! never assumes a terminal.
//!
//! `ReckonApi<S: DataStore>` is generic over the storage backend:
//! production runs on `FileStore`, tests on `InMemoryStore`.

use crate::commands::{self, CmdResult, ReckonPaths};
use crate::error::Result;
use crate::index::{Selector, SlotRef, StarDest};
use crate::model::{Scope, Theme};
use crate::store::DataStore;

pub struct ReckonApi<S: DataStore> {
    store: S,
    paths: ReckonPaths,
}

impl<S: DataStore> ReckonApi<S> {
    pub fn new(store: S, paths: ReckonPaths) -> Self {
        Self { store, paths }
    }

    pub fn list(&self, scope: Scope) -> Result<CmdResult> {
        commands::list::run(&self.store, scope)
    }

    pub fn eval(&mut self, scope: Scope, tab: &Selector, expression: &str) -> Result<CmdResult> {
        commands::calculate::run(&mut self.store, scope, tab, expression)
    }

    pub fn add_tab(&mut self, scope: Scope) -> Result<CmdResult> {
        commands::tabs::add(&mut self.store, scope)
    }

    pub fn delete_tab(&mut self, scope: Scope, tab: &Selector) -> Result<CmdResult> {
        commands::tabs::delete(&mut self.store, scope, tab)
    }

    pub fn rename_tab(&mut self, scope: Scope, tab: &Selector, name: &str) -> Result<CmdResult> {
        commands::tabs::rename(&mut self.store, scope, tab, name)
    }

    pub fn delete_entry(&mut self, scope: Scope, slot: &SlotRef) -> Result<CmdResult> {
        commands::entries::delete(&mut self.store, scope, slot)
    }

    pub fn star(&mut self, scope: Scope, slot: &SlotRef) -> Result<CmdResult> {
        commands::starring::star(&mut self.store, scope, slot)
    }

    pub fn unstar(&mut self, scope: Scope, slot: &SlotRef) -> Result<CmdResult> {
        commands::starring::unstar(&mut self.store, scope, slot)
    }

    pub fn add_row(&mut self, scope: Scope) -> Result<CmdResult> {
        commands::rows::add(&mut self.store, scope)
    }

    pub fn rename_row(&mut self, scope: Scope, row: &Selector, name: &str) -> Result<CmdResult> {
        commands::rows::rename(&mut self.store, scope, row, name)
    }

    pub fn move_tab(&mut self, scope: Scope, from: usize, to: usize) -> Result<CmdResult> {
        commands::move_items::tab(&mut self.store, scope, from, to)
    }

    pub fn move_entry(&mut self, scope: Scope, from: &SlotRef, to: &SlotRef) -> Result<CmdResult> {
        commands::move_items::entry(&mut self.store, scope, from, to)
    }

    pub fn move_starred(
        &mut self,
        scope: Scope,
        from: &SlotRef,
        to: &StarDest,
    ) -> Result<CmdResult> {
        commands::move_items::starred(&mut self.store, scope, from, to)
    }

    pub fn drop_fragment(
        &mut self,
        scope: Scope,
        fragment: usize,
        target: &SlotRef,
    ) -> Result<CmdResult> {
        commands::move_items::drop_fragment(&mut self.store, scope, fragment, target)
    }

    pub fn add_fragment(&mut self, scope: Scope, value: &str) -> Result<CmdResult> {
        commands::fragments::add(&mut self.store, scope, value)
    }

    pub fn set_fragment(&mut self, scope: Scope, position: usize, value: &str) -> Result<CmdResult> {
        commands::fragments::set(&mut self.store, scope, position, value)
    }

    pub fn freeze_fragment(&mut self, scope: Scope, position: usize) -> Result<CmdResult> {
        commands::fragments::freeze(&mut self.store, scope, position)
    }

    pub fn delete_fragment(&mut self, scope: Scope, position: usize) -> Result<CmdResult> {
        commands::fragments::delete(&mut self.store, scope, position)
    }

    pub fn show_theme(&self, scope: Scope) -> Result<CmdResult> {
        commands::theme::show(&self.store, scope)
    }

    pub fn set_theme(&mut self, scope: Scope, theme: Theme) -> Result<CmdResult> {
        commands::theme::set(&mut self.store, scope, theme)
    }

    pub fn doctor(&mut self, scope: Scope) -> Result<CmdResult> {
        commands::doctor::run(&mut self.store, scope)
    }

    pub fn init(&mut self, scope: Scope) -> Result<CmdResult> {
        let paths = self.paths.clone();
        commands::init::run(&mut self.store, &paths, scope)
    }

    pub fn paths(&self) -> &ReckonPaths {
        &self.paths
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
