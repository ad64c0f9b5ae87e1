//! Move-instruction planning and application.
//!
//! Drag gestures reach the core as index-pair instructions: a kind, a source
//! container and index, and an optional destination (an absent destination
//! means the drag was cancelled). [`plan_move`] validates an instruction
//! against the current board and turns it into a [`ListMutation`];
//! [`apply`] executes one. Keeping the two steps apart keeps this module
//! independent of whatever produced the gesture and testable on a bare
//! [`Board`].

use uuid::Uuid;

use crate::board::Board;
use crate::model::Calculation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Reordering tabs within the tab strip.
    Tab,
    /// Moving an entry within or between tabs.
    Entry,
    /// Moving a starred reference within or between rows.
    Starred,
    /// Dropping a fragment onto an entry slot.
    Fragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The tab strip itself.
    Strip,
    Tab(Uuid),
    Row(Uuid),
    /// Sentinel target that unstars the dragged entry.
    Trash,
    /// The fragment palette.
    Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub container: Container,
    pub index: usize,
}

impl Slot {
    pub fn new(container: Container, index: usize) -> Self {
        Self { container, index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub kind: DragKind,
    pub source: Slot,
    pub dest: Option<Slot>,
}

/// A validated, applicable list mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMutation {
    ReorderTabs {
        from: usize,
        to: usize,
    },
    MoveEntry {
        source_tab: Uuid,
        from: usize,
        dest_tab: Uuid,
        to: usize,
    },
    MoveStarred {
        source_row: Uuid,
        from: usize,
        dest_row: Uuid,
        to: usize,
    },
    Unstar {
        entry: Uuid,
    },
    Compose {
        tab: Uuid,
        target: usize,
        fragment: Uuid,
    },
}

/// Turns a move instruction into a mutation, or `None` when the instruction
/// is cancelled, points at unknown containers, or is out of range. Unknown
/// instructions are dropped rather than faulted.
pub fn plan_move(board: &Board, request: &MoveRequest) -> Option<ListMutation> {
    let dest = request.dest?;

    match request.kind {
        DragKind::Tab => {
            if request.source.container != Container::Strip || dest.container != Container::Strip {
                return None;
            }
            if request.source.index >= board.tabs.len() {
                return None;
            }
            Some(ListMutation::ReorderTabs {
                from: request.source.index,
                to: dest.index,
            })
        }
        DragKind::Entry => {
            let Container::Tab(source_tab) = request.source.container else {
                return None;
            };
            let Container::Tab(dest_tab) = dest.container else {
                return None;
            };
            let source = board.tab(source_tab)?;
            board.tab(dest_tab)?;
            if request.source.index >= source.calculations.len() {
                return None;
            }
            Some(ListMutation::MoveEntry {
                source_tab,
                from: request.source.index,
                dest_tab,
                to: dest.index,
            })
        }
        DragKind::Starred => {
            let Container::Row(source_row) = request.source.container else {
                return None;
            };
            let source = board.row(source_row)?;
            let entry = *source.entries.get(request.source.index)?;

            if dest.container == Container::Trash {
                return Some(ListMutation::Unstar { entry });
            }
            let Container::Row(dest_row) = dest.container else {
                return None;
            };
            board.row(dest_row)?;
            Some(ListMutation::MoveStarred {
                source_row,
                from: request.source.index,
                dest_row,
                to: dest.index,
            })
        }
        DragKind::Fragment => {
            if request.source.container != Container::Palette {
                return None;
            }
            let fragment = board.fragments.get(request.source.index)?;
            if !fragment.frozen {
                return None;
            }
            let Container::Tab(tab) = dest.container else {
                return None;
            };
            let target_tab = board.tab(tab)?;
            if dest.index >= target_tab.calculations.len() {
                return None;
            }
            Some(ListMutation::Compose {
                tab,
                target: dest.index,
                fragment: fragment.id,
            })
        }
    }
}

/// Applies a planned mutation. Only `Compose` produces a new calculation;
/// everything else re-sequences existing items.
pub fn apply(board: &mut Board, mutation: &ListMutation) -> Option<Calculation> {
    match mutation {
        ListMutation::ReorderTabs { from, to } => {
            if *from >= board.tabs.len() {
                return None;
            }
            let tab = board.tabs.remove(*from);
            let to = (*to).min(board.tabs.len());
            board.tabs.insert(to, tab);
            None
        }
        ListMutation::MoveEntry {
            source_tab,
            from,
            dest_tab,
            to,
        } => {
            if source_tab == dest_tab {
                let pos = board.tabs.iter().position(|t| t.id == *source_tab)?;
                let calcs = &mut board.tabs[pos].calculations;
                if *from >= calcs.len() {
                    return None;
                }
                // Remove first, then insert into the same working list so
                // the destination index stays meaningful.
                let item = calcs.remove(*from);
                let to = (*to).min(calcs.len());
                calcs.insert(to, item);
            } else {
                let source = board.tabs.iter().position(|t| t.id == *source_tab)?;
                let dest = board.tabs.iter().position(|t| t.id == *dest_tab)?;
                if *from >= board.tabs[source].calculations.len() {
                    return None;
                }
                let item = board.tabs[source].calculations.remove(*from);
                let calcs = &mut board.tabs[dest].calculations;
                let to = (*to).min(calcs.len());
                calcs.insert(to, item);
            }
            None
        }
        ListMutation::MoveStarred {
            source_row,
            from,
            dest_row,
            to,
        } => {
            if source_row == dest_row {
                let pos = board.rows.iter().position(|r| r.id == *source_row)?;
                let entries = &mut board.rows[pos].entries;
                if *from >= entries.len() {
                    return None;
                }
                let item = entries.remove(*from);
                let to = (*to).min(entries.len());
                entries.insert(to, item);
            } else {
                let source = board.rows.iter().position(|r| r.id == *source_row)?;
                let dest = board.rows.iter().position(|r| r.id == *dest_row)?;
                if *from >= board.rows[source].entries.len() {
                    return None;
                }
                let item = board.rows[source].entries.remove(*from);
                let entries = &mut board.rows[dest].entries;
                let to = (*to).min(entries.len());
                entries.insert(to, item);
            }
            None
        }
        ListMutation::Unstar { entry } => {
            board.remove_starred(*entry);
            None
        }
        ListMutation::Compose {
            tab,
            target,
            fragment,
        } => board.compose_entry(*tab, *target, *fragment),
    }
}
