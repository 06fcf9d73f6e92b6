//! Input dispatch table.
//!
//! Raw input is reduced to an [`InputEvent`] by the UI layer (key lookups go
//! through the keybinding registry, mouse positions through the last frame's
//! layout geometry). This module maps each event to at most one
//! [`Transition`] and reports the view effects the resulting state change
//! needs. Effects are data; applying them is the caller's job.

use super::selection::{SelectionState, Transition};
use crate::catalog::CategoryRow;

/// Which carousel arrow button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Right,
}

/// Input relevant to browsing, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    /// Vertical wheel motion; positive is away from the user (scroll down).
    Wheel { delta_y: i32 },
    /// Click on the item at `index` of carousel `row`.
    ItemClick { row: usize, index: usize },
    /// Click on an arrow button of carousel `row`.
    ArrowButton {
        row: usize,
        direction: ArrowDirection,
    },
}

/// View side effect requested by a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Bring the category row into the vertical viewport.
    ScrollRowIntoView { row: usize },
    /// Align the carousel of `row` so `index` is its first visible item.
    ScrollItemIntoView { row: usize, index: usize },
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub state: SelectionState,
    pub transition: Option<Transition>,
    pub effects: Vec<Effect>,
}

impl Dispatch {
    /// Whether the selection moved.
    pub fn changed(&self, previous: SelectionState) -> bool {
        self.state != previous
    }
}

/// Map an event to its transition, if any.
///
/// Arrow buttons act on the active row like the arrow keys. Pressed on
/// another row they promote it: right lands on its first item, left on its
/// last.
pub fn transition_for(
    event: InputEvent,
    state: SelectionState,
    rows: &[CategoryRow],
) -> Option<Transition> {
    match event {
        InputEvent::Up => Some(Transition::MoveCategoryUp),
        InputEvent::Down => Some(Transition::MoveCategoryDown),
        InputEvent::Left => Some(Transition::MoveMovieLeft),
        InputEvent::Right => Some(Transition::MoveMovieRight),
        InputEvent::Wheel { delta_y } if delta_y > 0 => Some(Transition::MoveCategoryDown),
        InputEvent::Wheel { delta_y } if delta_y < 0 => Some(Transition::MoveCategoryUp),
        InputEvent::Wheel { .. } => None,
        InputEvent::ItemClick { row, index } => Some(Transition::SelectMovie { row, index }),
        InputEvent::ArrowButton { row, direction } if row == state.category => match direction {
            ArrowDirection::Left => Some(Transition::MoveMovieLeft),
            ArrowDirection::Right => Some(Transition::MoveMovieRight),
        },
        InputEvent::ArrowButton { row, direction } => {
            let len = rows.get(row)?.len();
            let index = match direction {
                ArrowDirection::Left => len.checked_sub(1)?,
                ArrowDirection::Right => 0,
            };
            Some(Transition::SelectMovie { row, index })
        }
    }
}

/// Dispatch `event` against `state` and collect the view effects.
pub fn dispatch(state: SelectionState, rows: &[CategoryRow], event: InputEvent) -> Dispatch {
    let Some(transition) = transition_for(event, state, rows) else {
        return Dispatch {
            state,
            transition: None,
            effects: Vec::new(),
        };
    };

    let next = state.apply(rows, transition);
    let mut effects = Vec::with_capacity(2);
    if next.category != state.category {
        effects.push(Effect::ScrollRowIntoView { row: next.category });
    }
    if next != state {
        effects.push(Effect::ScrollItemIntoView {
            row: next.category,
            index: next.movie,
        });
    }

    tracing::trace!(?event, ?transition, from = ?state, to = ?next, "Dispatched input");

    Dispatch {
        state: next,
        transition: Some(transition),
        effects,
    }
}
