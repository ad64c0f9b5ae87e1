use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Selector;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{load_board, resolve_tab, save_board};

/// Evaluates an expression in a tab. Failures change nothing and are
/// reported as a message only; the pending input stays put for correction.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    tab: &Selector,
    expression: &str,
) -> Result<CmdResult> {
    let mut board = load_board(store, scope)?;
    let tab_id = resolve_tab(&board, tab)?;
    board.set_input(tab_id, expression);

    let mut result = CmdResult::default();
    match board.evaluate(tab_id) {
        Some(Ok(calc)) => {
            save_board(store, scope, &board)?;
            result.add_message(CmdMessage::success(format!(
                "{} = {}",
                calc.expression, calc.result
            )));
            result.affected_entries.push(calc);
        }
        Some(Err(e)) => {
            result.add_message(CmdMessage::error(format!("Invalid calculation: {}", e)));
        }
        None => {}
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn evaluates_into_the_default_tab() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            Scope::Project,
            &Selector::Position(1),
            "2+2",
        )
        .unwrap();

        assert_eq!(result.affected_entries.len(), 1);
        assert_eq!(result.affected_entries[0].expression, "2+2");
        assert_eq!(result.affected_entries[0].result, "4");
        assert!(!result.affected_entries[0].starred);

        let tabs = store.load_tabs(Scope::Project).unwrap().unwrap();
        assert_eq!(tabs[0].calculations.len(), 1);
        assert_eq!(tabs[0].calculations[0].result, "4");
    }

    #[test]
    fn appends_in_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, Scope::Project, &Selector::Position(1), "1+1").unwrap();
        run(&mut store, Scope::Project, &Selector::Position(1), "2+2").unwrap();

        let tabs = store.load_tabs(Scope::Project).unwrap().unwrap();
        let exprs: Vec<_> = tabs[0]
            .calculations
            .iter()
            .map(|c| c.expression.as_str())
            .collect();
        assert_eq!(exprs, vec!["1+1", "2+2"]);
    }

    #[test]
    fn invalid_expression_saves_nothing() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            Scope::Project,
            &Selector::Position(1),
            "2 + lemons",
        )
        .unwrap();

        assert!(result.affected_entries.is_empty());
        assert!(matches!(
            result.messages[0].level,
            MessageLevel::Error
        ));
        assert!(store.load_tabs(Scope::Project).unwrap().is_none());
    }

    #[test]
    fn unknown_tab_is_an_api_error() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            Scope::Project,
            &Selector::Name("nope".to_string()),
            "1+1",
        );
        assert!(result.is_err());
    }

    #[test]
    fn tabs_can_be_selected_by_name() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            Scope::Project,
            &Selector::Name("Tab 1".to_string()),
            "6*7",
        )
        .unwrap();
        assert_eq!(result.affected_entries[0].result, "42");
    }
}
