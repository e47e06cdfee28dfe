//! Exhaustive minimax search.
//!
//! Scores are fixed to the pair of marks: O maximizes, X minimizes.
//! A win found at ply `depth` (the root's own placements are ply 0) is
//! worth `10 - depth` to O and `-10 + depth` to X, so the engine prefers
//! faster wins and slower losses. Ties score 0.
//!
//! Every branch searches its own copy of the board. The caller's board is
//! never mutated, so there is no undo step to get wrong.

use super::rules::{classify, is_full, is_winning_for};
use super::{Board, Mark};
use tracing::{debug, instrument};

/// Score of a win on the move that produced it.
pub const WIN_SCORE: i32 = 10;

/// A candidate move and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredMove {
    /// Board index (0-8).
    pub index: usize,
    /// Minimax value from O's point of view.
    pub score: i32,
}

/// Full result of a root search.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct SearchReport {
    /// Selected move.
    best: ScoredMove,
    /// Every root candidate in ascending index order.
    candidates: Vec<ScoredMove>,
    /// Number of placements explored.
    nodes_visited: u64,
}

/// Minimax decision engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxEngine;

impl MinimaxEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Returns the optimal move for `to_move`, or `None` if the board is
    /// already won or full.
    #[instrument(skip(self, board), fields(empty = board.empty_indices().len()))]
    pub fn best_move(&self, board: &Board, to_move: Mark) -> Option<ScoredMove> {
        self.analyze(board, to_move).map(|report| report.best)
    }

    /// Searches every root candidate and reports all of their values.
    ///
    /// Among equal scores the lowest index is kept: only a strictly better
    /// score replaces the current best.
    #[instrument(skip(self, board))]
    pub fn analyze(&self, board: &Board, to_move: Mark) -> Option<SearchReport> {
        if classify(board).is_terminal() {
            debug!("Board is terminal, nothing to search");
            return None;
        }

        let mut nodes_visited = 0;
        let candidates: Vec<ScoredMove> = board
            .empty_indices()
            .into_iter()
            .map(|index| ScoredMove {
                index,
                score: self.score_placement(board, index, to_move, 0, &mut nodes_visited),
            })
            .collect();

        let best = select(&candidates, to_move)?;
        debug!(
            index = best.index,
            score = best.score,
            nodes_visited,
            "Search complete"
        );

        Some(SearchReport {
            best,
            candidates,
            nodes_visited,
        })
    }

    /// Value of placing `mark` at `index` on a copy of `board`, where the
    /// placement happens at ply `depth`.
    fn score_placement(
        &self,
        board: &Board,
        index: usize,
        mark: Mark,
        depth: i32,
        nodes_visited: &mut u64,
    ) -> i32 {
        *nodes_visited += 1;
        let mut child = board.clone();
        child.place(index, mark);

        if let Some(score) = terminal_score(&child, depth) {
            return score;
        }

        let reply = mark.opponent();
        let candidates: Vec<ScoredMove> = child
            .empty_indices()
            .into_iter()
            .map(|next| ScoredMove {
                index: next,
                score: self.score_placement(&child, next, reply, depth + 1, nodes_visited),
            })
            .collect();

        // A non-terminal board always has at least one empty square.
        select(&candidates, reply).map_or(0, |best| best.score)
    }
}

/// Picks the first strictly best candidate for `to_move`.
fn select(candidates: &[ScoredMove], to_move: Mark) -> Option<ScoredMove> {
    let maximizing = to_move == Mark::O;
    let mut best: Option<ScoredMove> = None;
    for &candidate in candidates {
        let improves = match best {
            None => true,
            Some(current) if maximizing => candidate.score > current.score,
            Some(current) => candidate.score < current.score,
        };
        if improves {
            best = Some(candidate);
        }
    }
    best
}

/// Score of a terminal board, checked O-win, X-win, then tie.
///
/// The maximizer is checked first, unlike `check_winner`. Only boards
/// with both lines, which play cannot reach, tell the orders apart.
fn terminal_score(board: &Board, depth: i32) -> Option<i32> {
    if is_winning_for(board, Mark::O) {
        Some(WIN_SCORE - depth)
    } else if is_winning_for(board, Mark::X) {
        Some(-WIN_SCORE + depth)
    } else if is_full(board) {
        Some(0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board(cells: &str) -> Board {
        let mut board = Board::new();
        for (index, c) in cells.chars().enumerate() {
            match c {
                'X' => {
                    board.place(index, Mark::X);
                }
                'O' => {
                    board.place(index, Mark::O);
                }
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_is_a_forced_tie() {
        let best = MinimaxEngine::new()
            .best_move(&Board::new(), Mark::O)
            .expect("empty board has moves");
        assert_eq!(best.score, 0);
        // Every opening draws, so the lowest index wins the tie break.
        assert_eq!(best.index, 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let best = MinimaxEngine::new()
            .best_move(&board("OO.XX...."), Mark::O)
            .unwrap();
        assert_eq!(best, ScoredMove { index: 2, score: WIN_SCORE });
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let best = MinimaxEngine::new()
            .best_move(&board("XX.O....."), Mark::O)
            .unwrap();
        assert_eq!(best.index, 2);
    }

    #[test]
    fn test_x_minimizes() {
        let best = MinimaxEngine::new()
            .best_move(&board("OO.XX...."), Mark::X)
            .unwrap();
        assert_eq!(best, ScoredMove { index: 5, score: -WIN_SCORE });
    }

    #[test]
    fn test_prefers_faster_win() {
        // O wins now at 2, or later elsewhere; the immediate one is worth more.
        let report = MinimaxEngine::new()
            .analyze(&board("OO.XX.X.."), Mark::O)
            .unwrap();
        assert_eq!(report.best().index, 2);
        assert_eq!(report.best().score, WIN_SCORE);
        assert!(report
            .candidates()
            .iter()
            .filter(|c| c.index != 2)
            .all(|c| c.score < WIN_SCORE));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let engine = MinimaxEngine::new();
        assert_eq!(engine.best_move(&board("OOOXX...."), Mark::X), None);
        assert_eq!(engine.best_move(&board("XOXXOOOXX"), Mark::O), None);
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let original = board("X...O....");
        let copy = original.clone();
        MinimaxEngine::new().best_move(&original, Mark::X);
        assert_eq!(original, copy);
        assert_eq!(original.get(0), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_last_square_is_forced() {
        let report = MinimaxEngine::new()
            .analyze(&board("XOXXOOOX."), Mark::X)
            .unwrap();
        assert_eq!(report.candidates().len(), 1);
        assert_eq!(report.best().index, 8);
        assert_eq!(*report.nodes_visited(), 1);
    }

    /// Plays every X line against the engine; O must never lose.
    #[test]
    fn test_o_never_loses_as_second_player() {
        fn explore(engine: &MinimaxEngine, board: &Board) {
            for index in board.empty_indices() {
                let mut after_x = board.clone();
                after_x.place(index, Mark::X);
                assert!(!is_winning_for(&after_x, Mark::X), "X won:\n{after_x}");
                if classify(&after_x).is_terminal() {
                    continue;
                }
                let reply = engine.best_move(&after_x, Mark::O).unwrap();
                let mut after_o = after_x.clone();
                after_o.place(reply.index, Mark::O);
                if !classify(&after_o).is_terminal() {
                    explore(engine, &after_o);
                }
            }
        }

        explore(&MinimaxEngine::new(), &Board::new());
    }
}
