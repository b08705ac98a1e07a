use crate::debug_log;
use super::board::BoardState;
use super::error::GameError;
use super::score::Score;
use super::types::{CellMark, Move, Outcome};

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub state: BoardState,
    pub chosen_move: Move,
    pub score: Score,
    pub nodes_visited: usize,
}

struct Node {
    score: Score,
    best: Option<(Move, BoardState)>,
}

impl Node {
    fn leaf(score: Score) -> Self {
        Self { score, best: None }
    }
}

/// Exhaustive minimax with alpha-beta pruning.
///
/// Holds only the two marks, so one engine can serve any number of games;
/// alpha and beta are threaded through the recursion as arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    ai_mark: CellMark,
    opponent_mark: CellMark,
}

impl SearchEngine {
    pub fn new(ai_mark: CellMark, opponent_mark: CellMark) -> Result<Self, GameError> {
        if ai_mark == CellMark::Empty || opponent_mark == CellMark::Empty || ai_mark == opponent_mark {
            return Err(GameError::InvalidMarks);
        }
        Ok(Self {
            ai_mark,
            opponent_mark,
        })
    }

    pub fn for_mark(ai_mark: CellMark) -> Result<Self, GameError> {
        let opponent_mark = ai_mark.opponent().ok_or(GameError::InvalidMarks)?;
        Self::new(ai_mark, opponent_mark)
    }

    pub fn ai_mark(&self) -> CellMark {
        self.ai_mark
    }

    pub fn opponent_mark(&self) -> CellMark {
        self.opponent_mark
    }

    pub fn choose_ai_move(&self, state: &BoardState) -> Result<SearchResult, GameError> {
        if state.successors(self.ai_mark).is_empty() {
            return Err(GameError::NoMovesAvailable);
        }

        let mut nodes_visited = 0;
        let node = self.max_value(state, Score::floor(), Score::ceiling(), 0, &mut nodes_visited);
        let (chosen_move, next_state) = node.best.ok_or(GameError::NoMovesAvailable)?;

        debug_log!(
            "Search for {} chose {} ({:?} at depth {}) after {} nodes",
            self.ai_mark,
            chosen_move.coordinate,
            node.score.outcome,
            node.score.depth,
            nodes_visited
        );

        Ok(SearchResult {
            state: next_state,
            chosen_move,
            score: node.score,
            nodes_visited,
        })
    }

    fn max_value(
        &self,
        state: &BoardState,
        mut alpha: Score,
        beta: Score,
        depth: usize,
        nodes_visited: &mut usize,
    ) -> Node {
        *nodes_visited += 1;
        if state.is_terminal() {
            return Node::leaf(Score::new(state.score_for(self.ai_mark), depth));
        }

        let mut best = Node::leaf(Score::new(Outcome::Loss, depth));
        for (mv, child) in state.successors(self.ai_mark) {
            let reply = self.min_value(&child, alpha, beta, depth + 1, nodes_visited);
            if reply.score > best.score {
                best = Node {
                    score: reply.score,
                    best: Some((mv, child)),
                };
            }
            alpha = alpha.max(best.score);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    fn min_value(
        &self,
        state: &BoardState,
        alpha: Score,
        mut beta: Score,
        depth: usize,
        nodes_visited: &mut usize,
    ) -> Node {
        *nodes_visited += 1;
        if state.is_terminal() {
            return Node::leaf(Score::new(state.score_for(self.ai_mark), depth));
        }

        let mut best = Node::leaf(Score::new(Outcome::Win, depth));
        for (mv, child) in state.successors(self.opponent_mark) {
            let reply = self.max_value(&child, alpha, beta, depth + 1, nodes_visited);
            if reply.score < best.score {
                best = Node {
                    score: reply.score,
                    best: Some((mv, child)),
                };
            }
            beta = beta.min(best.score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::games::tictactoe::Coordinate;

    const X: CellMark = CellMark::First;
    const O: CellMark = CellMark::Second;
    const E: CellMark = CellMark::Empty;

    fn board(rows: Vec<Vec<CellMark>>) -> BoardState {
        BoardState::from_rows(rows).unwrap()
    }

    /// Plain minimax without pruning, memoised, with depth counted from `state`.
    fn reference_score(
        state: &BoardState,
        to_move: CellMark,
        ai_mark: CellMark,
        memo: &mut HashMap<(BoardState, CellMark), Score>,
    ) -> Score {
        if state.is_terminal() {
            return Score::new(state.score_for(ai_mark), 0);
        }
        if let Some(score) = memo.get(&(state.clone(), to_move)) {
            return *score;
        }

        let next = to_move.opponent().unwrap();
        let children = state
            .successors(to_move)
            .into_iter()
            .map(|(_, child)| {
                let score = reference_score(&child, next, ai_mark, memo);
                Score::new(score.outcome, score.depth + 1)
            });
        let score = if to_move == ai_mark {
            children.max().unwrap()
        } else {
            children.min().unwrap()
        };

        memo.insert((state.clone(), to_move), score);
        score
    }

    fn side_to_move(state: &BoardState) -> CellMark {
        let count = |mark: CellMark| state.rows().iter().flatten().filter(|&&cell| cell == mark).count();
        if count(X) == count(O) { X } else { O }
    }

    fn reachable_states() -> HashSet<BoardState> {
        fn walk(state: BoardState, seen: &mut HashSet<BoardState>) {
            if !seen.insert(state.clone()) {
                return;
            }
            let mark = side_to_move(&state);
            for (_, child) in state.successors(mark) {
                walk(child, seen);
            }
        }

        let mut seen = HashSet::new();
        walk(BoardState::new_empty(3), &mut seen);
        seen
    }

    fn assert_never_loses(state: BoardState, engine: &SearchEngine, seen: &mut HashSet<BoardState>) {
        if !seen.insert(state.clone()) {
            return;
        }
        if state.is_terminal() {
            assert_ne!(
                state.winning_mark(),
                Some(engine.opponent_mark()),
                "engine lost:\n{}",
                state
            );
            return;
        }

        if side_to_move(&state) == engine.ai_mark() {
            let result = engine.choose_ai_move(&state).unwrap();
            assert_never_loses(result.state, engine, seen);
        } else {
            for (_, child) in state.successors(engine.opponent_mark()) {
                assert_never_loses(child, engine, seen);
            }
        }
    }

    #[test]
    fn test_new_rejects_invalid_marks() {
        assert_eq!(SearchEngine::new(X, X), Err(GameError::InvalidMarks));
        assert_eq!(SearchEngine::new(E, O), Err(GameError::InvalidMarks));
        assert_eq!(SearchEngine::for_mark(E), Err(GameError::InvalidMarks));
    }

    #[test]
    fn test_terminal_state_has_no_move() {
        #[rustfmt::skip]
        let state = board(vec![
            vec![X, O, X],
            vec![X, O, O],
            vec![O, X, X],
        ]);
        let engine = SearchEngine::for_mark(O).unwrap();
        assert_eq!(engine.choose_ai_move(&state).unwrap_err(), GameError::NoMovesAvailable);
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        #[rustfmt::skip]
        let state = board(vec![
            vec![X, X, E],
            vec![O, O, E],
            vec![E, E, E],
        ]);
        let engine = SearchEngine::new(O, X).unwrap();

        let result = engine.choose_ai_move(&state).unwrap();

        assert_eq!(result.chosen_move, Move::new(O, Coordinate::new(1, 2)));
        assert_eq!(result.state.cell_at(Coordinate::new(1, 2)), O);
        assert_eq!(result.state.winning_mark(), Some(O));
        assert_eq!(result.score.outcome, Outcome::Win);
        assert_eq!(result.score.depth, 1);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        #[rustfmt::skip]
        let state = board(vec![
            vec![X, X, E],
            vec![E, O, E],
            vec![E, E, E],
        ]);
        let engine = SearchEngine::for_mark(O).unwrap();

        let result = engine.choose_ai_move(&state).unwrap();

        assert_eq!(result.chosen_move.coordinate, Coordinate::new(0, 2));
    }

    #[test]
    fn test_single_successor_is_taken() {
        #[rustfmt::skip]
        let state = board(vec![
            vec![X, O, X],
            vec![X, O, O],
            vec![O, X, E],
        ]);
        let engine = SearchEngine::for_mark(X).unwrap();

        let result = engine.choose_ai_move(&state).unwrap();

        assert_eq!(result.chosen_move.coordinate, Coordinate::new(2, 2));
        assert!(result.state.is_full());
        assert_eq!(result.score.outcome, Outcome::Draw);
    }

    #[test]
    fn test_input_state_is_not_modified() {
        let state = BoardState::new_empty(3);
        let engine = SearchEngine::for_mark(X).unwrap();

        let result = engine.choose_ai_move(&state).unwrap();

        assert_eq!(state, BoardState::new_empty(3));
        assert_eq!(result.state.empty_count(), 8);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let engine = SearchEngine::for_mark(X).unwrap();
        let result = engine.choose_ai_move(&BoardState::new_empty(3)).unwrap();
        assert_eq!(result.score.outcome, Outcome::Draw);
    }

    #[test]
    fn test_perfect_play_from_empty_board_draws() {
        let engines = [
            SearchEngine::for_mark(X).unwrap(),
            SearchEngine::for_mark(O).unwrap(),
        ];
        let mut state = BoardState::new_empty(3);
        let mut turn = 0;
        while !state.is_terminal() {
            state = engines[turn % 2].choose_ai_move(&state).unwrap().state;
            turn += 1;
        }

        assert_eq!(turn, 9);
        assert_eq!(state.winning_mark(), None);
    }

    #[test]
    fn test_first_player_never_loses() {
        let engine = SearchEngine::for_mark(X).unwrap();
        assert_never_loses(BoardState::new_empty(3), &engine, &mut HashSet::new());
    }

    #[test]
    fn test_second_player_never_loses() {
        let engine = SearchEngine::for_mark(O).unwrap();
        assert_never_loses(BoardState::new_empty(3), &engine, &mut HashSet::new());
    }

    #[test]
    fn test_matches_full_minimax_on_every_reachable_state() {
        for ai_mark in CellMark::PLAYERS {
            let engine = SearchEngine::for_mark(ai_mark).unwrap();
            let opponent = ai_mark.opponent().unwrap();
            let mut memo = HashMap::new();

            for state in reachable_states() {
                if state.is_terminal() || side_to_move(&state) != ai_mark {
                    continue;
                }

                let expected = reference_score(&state, ai_mark, ai_mark, &mut memo);
                let result = engine.choose_ai_move(&state).unwrap();
                assert_eq!(result.score, expected, "wrong value for\n{}", state);

                let after = reference_score(&result.state, opponent, ai_mark, &mut memo);
                let chosen = Score::new(after.outcome, after.depth + 1);
                assert_eq!(chosen, expected, "suboptimal move for\n{}", state);
            }
        }
    }

    #[test]
    fn test_prefers_longest_defence_when_lost() {
        // Only blocking the anti-diagonal delays X's win to its fork.
        #[rustfmt::skip]
        let state = board(vec![
            vec![E, E, E],
            vec![E, X, O],
            vec![X, E, E],
        ]);
        let engine = SearchEngine::for_mark(O).unwrap();

        let result = engine.choose_ai_move(&state).unwrap();

        assert_eq!(result.chosen_move.coordinate, Coordinate::new(0, 2));
        assert_eq!(result.score.outcome, Outcome::Loss);
        assert_eq!(result.score.depth, 4);
    }

    #[test]
    fn test_successor_count_matches_terminality() {
        for state in reachable_states() {
            let mark = side_to_move(&state);
            assert_eq!(state.successors(mark).is_empty(), state.is_terminal(), "{}", state);
        }
    }
}
