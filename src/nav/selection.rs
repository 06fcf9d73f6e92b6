use crate::catalog::{CategoryRow, Title};

/// A single step of the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    MoveCategoryUp,
    MoveCategoryDown,
    /// Previous title in the active row, wrapping to the last.
    MoveMovieLeft,
    /// Next title in the active row, wrapping to the first.
    MoveMovieRight,
    /// Jump to `index` in `row`, promoting `row` to active if needed.
    SelectMovie { row: usize, index: usize },
}

/// Active `(category, movie)` position.
///
/// The state is a plain value: [`SelectionState::apply`] returns the next
/// state instead of mutating in place, so transitions can be checked without
/// any rendering environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub category: usize,
    pub movie: usize,
}

impl SelectionState {
    pub const fn new(category: usize, movie: usize) -> Self {
        Self { category, movie }
    }

    /// Apply `transition` against `rows` and return the resulting state.
    ///
    /// Category moves stop at the first/last row and reset `movie` to 0.
    /// Movie moves wrap within the active row. With no rows every transition
    /// is a no-op. Stale indices are first resolved the way
    /// [`active_row`](Self::active_row) and [`active_title`](Self::active_title)
    /// resolve them, so a transition always starts from what is displayed.
    pub fn apply(self, rows: &[CategoryRow], transition: Transition) -> Self {
        if rows.is_empty() {
            return self;
        }
        let current = self.normalized(rows);

        match transition {
            Transition::MoveCategoryUp => {
                if current.category > 0 {
                    Self::new(current.category - 1, 0)
                } else {
                    current
                }
            }
            Transition::MoveCategoryDown => {
                if current.category + 1 < rows.len() {
                    Self::new(current.category + 1, 0)
                } else {
                    current
                }
            }
            Transition::MoveMovieLeft => {
                let len = row_len(rows, current.category);
                if len == 0 {
                    return current;
                }
                let movie = if current.movie == 0 {
                    len - 1
                } else {
                    current.movie - 1
                };
                Self::new(current.category, movie)
            }
            Transition::MoveMovieRight => {
                let len = row_len(rows, current.category);
                if len == 0 {
                    return current;
                }
                let movie = if current.movie + 1 >= len { 0 } else { current.movie + 1 };
                Self::new(current.category, movie)
            }
            Transition::SelectMovie { row, index } => {
                if row >= rows.len() || index >= rows[row].len() {
                    tracing::debug!(row, index, "Ignoring out-of-range selection");
                    return current;
                }
                Self::new(row, index)
            }
        }
    }

    /// Clamp indices left over from a larger catalog: a missing row falls
    /// back to row 0, a missing title to the row's first title.
    fn normalized(self, rows: &[CategoryRow]) -> Self {
        let category = if self.category < rows.len() {
            self.category
        } else {
            0
        };
        let movie = if self.movie < row_len(rows, category) {
            self.movie
        } else {
            0
        };
        Self::new(category, movie)
    }

    /// Active row, falling back to the first row when `category` is stale.
    pub fn active_row<'a>(&self, rows: &'a [CategoryRow]) -> Option<&'a CategoryRow> {
        rows.get(self.category).or_else(|| rows.first())
    }

    /// Active title, falling back to the first title of the active row.
    pub fn active_title<'a>(&self, rows: &'a [CategoryRow]) -> Option<&'a Title> {
        let row = self.active_row(rows)?;
        row.get(self.movie).or_else(|| row.titles.first())
    }

    /// Whether `(row, index)` is the highlighted item.
    pub fn is_active(&self, row: usize, index: usize) -> bool {
        self.category == row && self.movie == index
    }
}

fn row_len(rows: &[CategoryRow], category: usize) -> usize {
    rows.get(category).map_or(0, CategoryRow::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::rows_with_sizes;
    use proptest::prelude::*;

    #[test]
    fn test_initial_state_is_origin() {
        assert_eq!(SelectionState::default(), SelectionState::new(0, 0));
    }

    #[test]
    fn test_category_up_at_top_is_noop() {
        let rows = rows_with_sizes(&[3, 2]);
        let state = SelectionState::new(0, 2);
        assert_eq!(state.apply(&rows, Transition::MoveCategoryUp), state);
    }

    #[test]
    fn test_category_down_at_bottom_is_noop() {
        let rows = rows_with_sizes(&[3, 2]);
        let state = SelectionState::new(1, 1);
        assert_eq!(state.apply(&rows, Transition::MoveCategoryDown), state);
    }

    #[test]
    fn test_category_change_resets_movie() {
        let rows = rows_with_sizes(&[3, 4, 2]);
        let down = SelectionState::new(0, 2).apply(&rows, Transition::MoveCategoryDown);
        assert_eq!(down, SelectionState::new(1, 0));
        let up = SelectionState::new(2, 1).apply(&rows, Transition::MoveCategoryUp);
        assert_eq!(up, SelectionState::new(1, 0));
    }

    #[test]
    fn test_left_from_zero_wraps_to_last() {
        let rows = rows_with_sizes(&[5]);
        let state = SelectionState::new(0, 0).apply(&rows, Transition::MoveMovieLeft);
        assert_eq!(state.movie, 4);
    }

    #[test]
    fn test_right_from_last_wraps_to_zero() {
        let rows = rows_with_sizes(&[5]);
        let state = SelectionState::new(0, 4).apply(&rows, Transition::MoveMovieRight);
        assert_eq!(state.movie, 0);
    }

    #[test]
    fn test_single_item_row_stays_put() {
        let rows = rows_with_sizes(&[1]);
        let origin = SelectionState::default();
        assert_eq!(origin.apply(&rows, Transition::MoveMovieLeft), origin);
        assert_eq!(origin.apply(&rows, Transition::MoveMovieRight), origin);
    }

    #[test]
    fn test_select_movie_in_active_row() {
        let rows = rows_with_sizes(&[6, 2]);
        let state =
            SelectionState::new(0, 1).apply(&rows, Transition::SelectMovie { row: 0, index: 4 });
        assert_eq!(state, SelectionState::new(0, 4));
    }

    #[test]
    fn test_select_movie_promotes_other_row() {
        let rows = rows_with_sizes(&[6, 3]);
        let state =
            SelectionState::new(0, 1).apply(&rows, Transition::SelectMovie { row: 1, index: 2 });
        assert_eq!(state, SelectionState::new(1, 2));
    }

    #[test]
    fn test_select_movie_out_of_range_ignored() {
        let rows = rows_with_sizes(&[2, 2]);
        let state = SelectionState::new(1, 1);
        assert_eq!(
            state.apply(&rows, Transition::SelectMovie { row: 0, index: 9 }),
            state
        );
        assert_eq!(
            state.apply(&rows, Transition::SelectMovie { row: 5, index: 0 }),
            state
        );
    }

    #[test]
    fn test_empty_rows_everything_noop() {
        let state = SelectionState::default();
        for t in [
            Transition::MoveCategoryUp,
            Transition::MoveCategoryDown,
            Transition::MoveMovieLeft,
            Transition::MoveMovieRight,
            Transition::SelectMovie { row: 0, index: 0 },
        ] {
            assert_eq!(state.apply(&[], t), state);
        }
        assert!(state.active_row(&[]).is_none());
        assert!(state.active_title(&[]).is_none());
    }

    #[test]
    fn test_active_title_falls_back_when_stale() {
        let rows = rows_with_sizes(&[2, 3]);
        // Indices from a larger catalog before a reload
        let stale = SelectionState::new(7, 9);
        assert_eq!(stale.active_row(&rows).unwrap().category, "Row 0");
        assert_eq!(stale.active_title(&rows).unwrap().id, 0);

        let stale_movie = SelectionState::new(1, 9);
        assert_eq!(stale_movie.active_title(&rows).unwrap().id, 100);
    }

    #[test]
    fn test_stale_state_moves_from_displayed_row() {
        let rows = rows_with_sizes(&[2, 3]);
        let stale = SelectionState::new(7, 0);
        assert_eq!(
            stale.apply(&rows, Transition::MoveCategoryUp),
            SelectionState::new(0, 0)
        );
        assert_eq!(
            stale.apply(&rows, Transition::MoveMovieRight),
            SelectionState::new(0, 1)
        );
        assert_eq!(
            stale.apply(&rows, Transition::MoveCategoryDown),
            SelectionState::new(1, 0)
        );
    }

    #[test]
    fn test_stale_movie_moves_from_first_title() {
        let rows = rows_with_sizes(&[2, 3]);
        let stale = SelectionState::new(1, 9);
        assert_eq!(
            stale.apply(&rows, Transition::MoveMovieLeft),
            SelectionState::new(1, 2)
        );
        assert_eq!(
            stale.apply(&rows, Transition::MoveMovieRight),
            SelectionState::new(1, 1)
        );
        // An ignored click still resolves to the displayed position
        assert_eq!(
            stale.apply(&rows, Transition::SelectMovie { row: 4, index: 0 }),
            SelectionState::new(1, 0)
        );
    }

    #[test]
    fn test_active_title_tracks_state() {
        let rows = rows_with_sizes(&[2, 3]);
        let state = SelectionState::new(1, 2);
        assert_eq!(state.active_title(&rows).unwrap().id, 102);
        assert!(state.is_active(1, 2));
        assert!(!state.is_active(0, 2));
    }

    fn any_transition() -> impl Strategy<Value = Transition> {
        prop_oneof![
            Just(Transition::MoveCategoryUp),
            Just(Transition::MoveCategoryDown),
            Just(Transition::MoveMovieLeft),
            Just(Transition::MoveMovieRight),
            (0usize..8, 0usize..12)
                .prop_map(|(row, index)| Transition::SelectMovie { row, index }),
        ]
    }

    proptest! {
        #[test]
        fn prop_state_always_in_bounds(
            sizes in prop::collection::vec(1usize..10, 1..6),
            steps in prop::collection::vec(any_transition(), 0..64),
        ) {
            let rows = rows_with_sizes(&sizes);
            let mut state = SelectionState::default();
            for t in steps {
                state = state.apply(&rows, t);
                prop_assert!(state.category < rows.len());
                prop_assert!(state.movie < rows[state.category].len());
            }
        }

        #[test]
        fn prop_stale_start_lands_in_bounds(
            sizes in prop::collection::vec(1usize..10, 1..6),
            category in 0usize..12,
            movie in 0usize..12,
            t in any_transition(),
        ) {
            let rows = rows_with_sizes(&sizes);
            let state = SelectionState::new(category, movie).apply(&rows, t);
            prop_assert!(state.category < rows.len());
            prop_assert!(state.movie < rows[state.category].len());
        }

        #[test]
        fn prop_n_rights_return_to_start(n in 1usize..20) {
            let rows = rows_with_sizes(&[n]);
            let mut state = SelectionState::default();
            for _ in 0..n {
                state = state.apply(&rows, Transition::MoveMovieRight);
            }
            prop_assert_eq!(state, SelectionState::default());
        }

        #[test]
        fn prop_left_then_right_is_identity(n in 1usize..20, start in 0usize..20) {
            let rows = rows_with_sizes(&[n]);
            let state = SelectionState::new(0, start % n);
            let round_trip = state
                .apply(&rows, Transition::MoveMovieLeft)
                .apply(&rows, Transition::MoveMovieRight);
            prop_assert_eq!(round_trip, state);
        }

        #[test]
        fn prop_category_moves_reset_movie(
            sizes in prop::collection::vec(1usize..10, 2..6),
            movie in 0usize..10,
            down in any::<bool>(),
        ) {
            let rows = rows_with_sizes(&sizes);
            let start_cat = if down { 0 } else { rows.len() - 1 };
            let state = SelectionState::new(start_cat, movie % rows[start_cat].len());
            let t = if down { Transition::MoveCategoryDown } else { Transition::MoveCategoryUp };
            let next = state.apply(&rows, t);
            prop_assert_ne!(next.category, state.category);
            prop_assert_eq!(next.movie, 0);
        }
    }
}
