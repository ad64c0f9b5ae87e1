use crate::error::{ReckonError, Result};
use crate::model::{Calculation, Fragment, Scope, StarRow, Tab, Theme};
use std::path::PathBuf;

pub mod calculate;
pub mod doctor;
pub mod entries;
pub mod fragments;
pub mod helpers;
pub mod init;
pub mod list;
pub mod move_items;
pub mod rows;
pub mod starring;
pub mod tabs;
pub mod theme;

#[derive(Debug, Clone)]
pub struct ReckonPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl ReckonPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| ReckonError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Calculation>,
    pub tabs: Vec<Tab>,
    pub rows: Vec<StarRow>,
    pub fragments: Vec<Fragment>,
    pub theme: Option<Theme>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_tabs(mut self, tabs: Vec<Tab>) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn with_rows(mut self, rows: Vec<StarRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_fragments(mut self, fragments: Vec<Fragment>) -> Self {
        self.fragments = fragments;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}
