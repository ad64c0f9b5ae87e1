use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Scope, Theme};
use crate::store::DataStore;

pub fn show<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let theme = store.load_theme(scope)?.unwrap_or_default();
    let mut result = CmdResult::default().with_theme(theme);
    result.add_message(CmdMessage::info(format!("theme = {}", theme)));
    Ok(result)
}

pub fn set<S: DataStore>(store: &mut S, scope: Scope, theme: Theme) -> Result<CmdResult> {
    store.save_theme(theme, scope)?;
    let mut result = CmdResult::default().with_theme(theme);
    result.add_message(CmdMessage::success(format!("Theme set to {}", theme)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn defaults_to_light() {
        let store = InMemoryStore::new();
        let result = show(&store, Scope::Project).unwrap();
        assert_eq!(result.theme, Some(Theme::Light));
    }

    #[test]
    fn set_persists() {
        let mut store = InMemoryStore::new();
        set(&mut store, Scope::Project, Theme::Dark).unwrap();
        let result = show(&store, Scope::Project).unwrap();
        assert_eq!(result.theme, Some(Theme::Dark));
    }
}
