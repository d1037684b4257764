//! Exhaustive minimax search over the game tree

use tracing::{debug, instrument};

use super::{
    board::Mark,
    state::{GameState, Move},
};

/// Pick the best move for the player whose turn it is.
///
/// Every candidate is scored by searching the full subtree below it. The
/// first move with the highest score wins, so among equally good moves the
/// lowest cell index is chosen. Returns `None` when there is nothing to play.
#[instrument(skip_all, fields(state = %state.encode()))]
pub fn find_best_move(state: &GameState) -> Result<Option<Move>, crate::Error> {
    let maximizer = state.current_mark();
    let mut best: Option<(Move, i32)> = None;

    for candidate in state.possible_moves()? {
        let score = minimax(&candidate, maximizer, false)?;
        debug!(cell = candidate.cell_index, score, "scored candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    if let Some((mv, score)) = &best {
        debug!(cell = mv.cell_index, score, mark = %maximizer, "chose move");
    }
    Ok(best.map(|(mv, _)| mv))
}

/// Score `mv` for `maximizer`, assuming both sides play perfectly afterwards.
///
/// `choose_highest_score` says whose turn it is in `mv.after_state`: `false`
/// means the opponent picks next and will take the lowest score.
pub fn minimax(mv: &Move, maximizer: Mark, choose_highest_score: bool) -> Result<i32, crate::Error> {
    let state = &mv.after_state;
    if state.game_over() {
        return state.evaluate_score(maximizer);
    }

    let mut scores = Vec::new();
    for next in state.possible_moves()? {
        scores.push(minimax(&next, maximizer, !choose_highest_score)?);
    }

    let best = if choose_highest_score {
        scores.into_iter().max()
    } else {
        scores.into_iter().min()
    };
    // A running game always has a move, so this only fires on a broken tree
    best.ok_or_else(|| crate::Error::UnknownScore {
        state: state.encode(),
    })
}
