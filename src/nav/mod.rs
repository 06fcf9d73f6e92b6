//! Navigation core: the selection state machine and the input dispatch table.
//!
//! Nothing in here touches the terminal. `selection` is a pure reducer over
//! `(category, movie)` indices; `dispatch` maps raw input to transitions and
//! reports which view effects a transition calls for.

mod dispatch;
mod selection;

pub use dispatch::{dispatch, transition_for, ArrowDirection, Dispatch, Effect, InputEvent};
pub use selection::{SelectionState, Transition};
