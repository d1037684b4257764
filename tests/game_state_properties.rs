//! Invariants that hold for every reachable game state
//! Walks the full game tree from both starting marks

use std::collections::{HashSet, VecDeque};

use tic_tac_toe::logic::{CELL_COUNT, GameState, Grid, Mark};

/// Every distinct state reachable from an empty board
fn reachable_states(starting_mark: Mark) -> Vec<GameState> {
    let root = GameState::start(starting_mark);
    let mut seen = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut states = Vec::new();

    while let Some(state) = queue.pop_front() {
        states.push(state);
        for mv in state.possible_moves().unwrap() {
            if seen.insert(mv.after_state) {
                queue.push_back(mv.after_state);
            }
        }
    }

    states
}

mod tree_walk {
    use super::*;

    #[test]
    fn reachable_state_count() {
        // Well-known count of positions reachable in legal play
        assert_eq!(reachable_states(Mark::Cross).len(), 5478);
        assert_eq!(reachable_states(Mark::Naught).len(), 5478);
    }

    #[test]
    fn counts_are_balanced() {
        for starting_mark in Mark::ALL {
            for state in reachable_states(starting_mark) {
                let grid = state.grid();
                assert_eq!(grid.x_count() + grid.o_count() + grid.empty_count(), CELL_COUNT);
                assert!(grid.x_count().abs_diff(grid.o_count()) <= 1, "{state}");
            }
        }
    }

    #[test]
    fn game_over_iff_winner_or_full() {
        for state in reachable_states(Mark::Cross) {
            let full = state.grid().empty_count() == 0;
            assert_eq!(state.game_over(), state.winner().is_some() || full, "{state}");
            assert_eq!(state.tie(), state.winner().is_none() && full, "{state}");
            assert_eq!(state.winning_cells().len(), if state.winner().is_some() { 3 } else { 0 });
        }
    }

    #[test]
    fn possible_moves_cover_empty_cells_in_order() {
        for state in reachable_states(Mark::Naught) {
            let moves = state.possible_moves().unwrap();
            if state.game_over() {
                assert!(moves.is_empty(), "{state}");
                continue;
            }

            assert_eq!(moves.len(), state.grid().empty_count());
            assert!(
                moves.windows(2).all(|w| w[0].cell_index < w[1].cell_index),
                "indices must be strictly ascending for\n{state}"
            );
            for mv in &moves {
                assert_eq!(mv.mark, state.current_mark());
                assert_eq!(mv.before_state, state);
            }
        }
    }

    #[test]
    fn terminal_states_have_a_score() {
        for state in reachable_states(Mark::Cross) {
            let score = state.evaluate_score(Mark::Cross);
            if state.game_over() {
                let score = score.unwrap();
                assert_eq!(score, -state.evaluate_score(Mark::Naught).unwrap());
            } else {
                assert!(score.is_err());
            }
        }
    }
}

mod moves {
    use super::*;

    #[test]
    fn applying_a_move_leaves_the_before_state_alone() {
        let state = GameState::new(Grid::new("X   O    ").unwrap(), Mark::Cross).unwrap();
        let snapshot = state;
        for mv in state.possible_moves().unwrap() {
            let _ = mv.after_state.possible_moves().unwrap();
            assert_eq!(mv.before_state, snapshot);
        }
        assert_eq!(state, snapshot);
        assert_eq!(state.grid().to_string(), "X   O    ");
    }

    #[test]
    fn after_state_excludes_only_the_played_cell() {
        let state = GameState::new(Grid::new("XO  X  O ").unwrap(), Mark::Cross).unwrap();
        let before: Vec<usize> = state.grid().empty_positions();

        for mv in state.possible_moves().unwrap() {
            let after: Vec<usize> = mv
                .after_state
                .possible_moves()
                .unwrap()
                .iter()
                .map(|next| next.cell_index)
                .collect();
            if mv.after_state.game_over() {
                assert!(after.is_empty());
                continue;
            }
            let expected: Vec<usize> = before
                .iter()
                .copied()
                .filter(|&i| i != mv.cell_index)
                .collect();
            assert_eq!(after, expected);
        }
    }
}

mod examples {
    use super::*;

    #[test]
    fn anti_diagonal_win() {
        let state = GameState::new(Grid::new("XOXOXOXXO").unwrap(), Mark::Cross).unwrap();
        assert_eq!(state.winner(), Some(Mark::Cross));
        assert_eq!(state.winning_cells(), &[2, 4, 6]);
    }

    #[test]
    fn fresh_game() {
        let state = GameState::new(Grid::default(), Mark::Cross).unwrap();
        assert_eq!(state.current_mark(), Mark::Cross);
        assert!(state.game_not_started());
        assert_eq!(state.possible_moves().unwrap().len(), 9);
    }

    #[test]
    fn one_player_cannot_fill_the_board() {
        let err = GameState::new(Grid::new("XXXXXXXXX").unwrap(), Mark::Cross).unwrap_err();
        assert!(err.is_invalid_game_state());
    }

    #[test]
    fn marks_serialize_as_symbols() {
        assert_eq!(serde_json::to_string(&Mark::Cross).unwrap(), "\"X\"");
        assert_eq!(serde_json::to_string(&Mark::Naught).unwrap(), "\"O\"");
        let parsed: Mark = serde_json::from_str("\"O\"").unwrap();
        assert_eq!(parsed, Mark::Naught);
    }

    #[test]
    fn states_are_validated_when_loaded() {
        let json = serde_json::to_string(&GameState::start(Mark::Naught)).unwrap();
        assert_eq!(json, r#"{"grid":"         ","starting_mark":"O"}"#);

        let loaded: GameState =
            serde_json::from_str(r#"{"grid":"XOXOXOXXO","starting_mark":"X"}"#).unwrap();
        assert_eq!(loaded.winner(), Some(Mark::Cross));

        assert!(serde_json::from_str::<GameState>(r#"{"grid":"XX       ","starting_mark":"X"}"#).is_err());
        assert!(serde_json::from_str::<GameState>(r#"{"grid":"XO","starting_mark":"X"}"#).is_err());
    }
}
