//! User-facing selectors.
//!
//! The CLI addresses tabs and rows by 1-based display position or by name,
//! and slots inside them as `CONTAINER:INDEX` (`2:1`, `results:3`). Parsing
//! lives here so the command layer only ever sees structured selectors.

use std::fmt;
use std::str::FromStr;

/// Selects a tab or a row, by display position (1-based) or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Position(usize),
    Name(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Position(n) => write!(f, "{}", n),
            Selector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("positions start at 1".to_string());
            }
            return Ok(Selector::Position(n));
        }
        Ok(Selector::Name(s.to_string()))
    }
}

/// A 1-based slot inside a container: `TAB:ENTRY` for entries, `ROW:INDEX`
/// for starred references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRef {
    pub container: Selector,
    pub index: usize,
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.container, self.index)
    }
}

impl FromStr for SlotRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the last colon so container names may contain colons.
        let Some(split) = s.rfind(':') else {
            return Err(format!("Invalid slot format: {} (expected CONTAINER:INDEX)", s));
        };
        let container = Selector::from_str(&s[..split])?;
        let index: usize = s[split + 1..]
            .parse()
            .map_err(|_| format!("Invalid slot index in: {}", s))?;
        if index == 0 {
            return Err("slot indexes start at 1".to_string());
        }
        Ok(SlotRef { container, index })
    }
}

/// Destination of a starred-reference move: a slot in a row, or the trash
/// sentinel that unstars the dragged entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarDest {
    Slot(SlotRef),
    Trash,
}

impl FromStr for StarDest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "trash" {
            return Ok(StarDest::Trash);
        }
        SlotRef::from_str(s).map(StarDest::Slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parses_positions_and_names() {
        assert_eq!("1".parse(), Ok(Selector::Position(1)));
        assert_eq!("42".parse(), Ok(Selector::Position(42)));
        assert_eq!("Tab 2".parse(), Ok(Selector::Name("Tab 2".to_string())));
        assert!("".parse::<Selector>().is_err());
        assert!("0".parse::<Selector>().is_err());
    }

    #[test]
    fn slot_ref_parses_container_and_index() {
        assert_eq!(
            "2:3".parse(),
            Ok(SlotRef {
                container: Selector::Position(2),
                index: 3
            })
        );
        assert_eq!(
            "results:1".parse(),
            Ok(SlotRef {
                container: Selector::Name("results".to_string()),
                index: 1
            })
        );
    }

    #[test]
    fn slot_ref_splits_on_the_last_colon() {
        assert_eq!(
            "a:b:2".parse(),
            Ok(SlotRef {
                container: Selector::Name("a:b".to_string()),
                index: 2
            })
        );
    }

    #[test]
    fn slot_ref_rejects_bad_input() {
        assert!("3".parse::<SlotRef>().is_err());
        assert!("2:".parse::<SlotRef>().is_err());
        assert!(":2".parse::<SlotRef>().is_err());
        assert!("2:0".parse::<SlotRef>().is_err());
        assert!("2:x".parse::<SlotRef>().is_err());
    }

    #[test]
    fn star_dest_recognizes_trash() {
        assert_eq!("trash".parse(), Ok(StarDest::Trash));
        assert_eq!(
            "1:2".parse(),
            Ok(StarDest::Slot(SlotRef {
                container: Selector::Position(1),
                index: 2
            }))
        );
        assert!("nonsense".parse::<StarDest>().is_err());
    }
}
