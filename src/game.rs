// Jorybord – a daily word-search puzzle game
// Copyright (C) 2026  Jorybord contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use super::dictionary::Dictionary;
use super::grid::{Grid, Pos, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use super::moves::{self, Move};

#[derive(Debug, PartialEq, Eq)]
pub enum MoveError {
    InvalidSelectionLength(usize),
    NotAWord(String),
    HistoryViewActive,
    GameFinished,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UndoError {
    EmptyHistory,
    HistoryViewActive,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::InvalidSelectionLength(length) => {
                write!(
                    f,
                    "selection of {} boxes isn’t between {} and {}",
                    length,
                    MIN_WORD_LENGTH,
                    MAX_WORD_LENGTH,
                )
            },
            MoveError::NotAWord(word) => {
                write!(f, "“{}” is not in the dictionary", word)
            },
            MoveError::HistoryViewActive => {
                write!(f, "can’t play while viewing a past state")
            },
            MoveError::GameFinished => {
                write!(f, "the board is already finished")
            },
        }
    }
}

impl fmt::Display for UndoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UndoError::EmptyHistory => write!(f, "nothing to undo"),
            UndoError::HistoryViewActive => {
                write!(f, "can’t undo while viewing a past state")
            },
        }
    }
}

// One game on one board. The latest grid is always the base board
// with the whole history replayed onto it; score, move count and the
// finished flag are derived rather than stored so they can’t drift.
pub struct GameSession {
    seed: String,
    custom_seed: bool,
    // The replay base: the seed’s fresh board, or the snapshot a
    // restored session continued from
    base: Grid,
    base_score: u32,
    base_moves: u32,
    grid: Grid,
    history: Vec<Move>,
    // When set, the session is showing the state after move k and
    // rejects play until view_latest
    viewing: Option<(usize, Grid)>,
}

impl GameSession {
    pub fn new(seed: &str, custom_seed: bool) -> GameSession {
        let base = Grid::from_seed(seed);

        GameSession {
            seed: seed.to_string(),
            custom_seed,
            grid: base.clone(),
            base,
            base_score: 0,
            base_moves: 0,
            history: Vec::new(),
            viewing: None,
        }
    }

    // Continues from a grid restored out of the store. The persisted
    // record carries no move list, so the snapshot becomes the replay
    // base and undo can’t reach past it.
    pub fn from_snapshot(
        seed: &str,
        grid: Grid,
        score: u32,
        move_count: u32,
    ) -> GameSession {
        GameSession {
            seed: seed.to_string(),
            custom_seed: false,
            grid: grid.clone(),
            base: grid,
            base_score: score,
            base_moves: move_count,
            history: Vec::new(),
            viewing: None,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn uses_custom_seed(&self) -> bool {
        self.custom_seed
    }

    // The latest state, regardless of any history view
    pub fn latest_grid(&self) -> &Grid {
        &self.grid
    }

    // What should be shown: the viewed past state if one is active
    pub fn visible_grid(&self) -> &Grid {
        match &self.viewing {
            Some((_, grid)) => grid,
            None => &self.grid,
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn score(&self) -> u32 {
        self.base_score + self.history.iter().map(Move::points).sum::<u32>()
    }

    pub fn move_count(&self) -> u32 {
        self.base_moves + self.history.len() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.grid.is_finished()
    }

    pub fn viewing_history_index(&self) -> Option<usize> {
        self.viewing.as_ref().map(|&(index, _)| index)
    }

    pub fn is_viewing_history(&self) -> bool {
        self.viewing.is_some()
    }

    // Validates a selection, a target cell within it and an input
    // letter against the dictionary and applies the move. The caller
    // keeps locked cells out of the target slot; the engine’s own
    // rejection is purely dictionary-driven. Nothing changes on
    // rejection.
    pub fn propose_move(
        &mut self,
        dictionary: &Dictionary,
        positions: &[Pos],
        target: Pos,
        input_letter: char,
    ) -> Result<&Move, MoveError> {
        if self.viewing.is_some() {
            return Err(MoveError::HistoryViewActive);
        }

        if self.is_finished() {
            return Err(MoveError::GameFinished);
        }

        let length = positions.len();

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
            return Err(MoveError::InvalidSelectionLength(length));
        }

        let input_letter = input_letter.to_ascii_lowercase();

        let word = positions
            .iter()
            .map(|&pos| {
                if pos == target {
                    input_letter
                } else {
                    self.grid.cell(pos).letter
                }
            })
            .collect::<String>();

        if !dictionary.contains(&word) {
            return Err(MoveError::NotAWord(word));
        }

        let newly_scored = positions
            .iter()
            .copied()
            .filter(|&pos| !self.grid.cell(pos).scored())
            .collect::<Vec<Pos>>();

        let mv = Move {
            target,
            previous_letter: self.grid.cell(target).letter,
            new_letter: input_letter,
            positions: positions.to_vec(),
            word,
            newly_scored,
        };

        moves::apply(&mut self.grid, &mv);
        self.history.push(mv);

        Ok(&self.history[self.history.len() - 1])
    }

    // Undo pops the log and replays what remains onto the base board,
    // the same primitive the history view uses
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if self.viewing.is_some() {
            return Err(UndoError::HistoryViewActive);
        }

        if self.history.pop().is_none() {
            return Err(UndoError::EmptyHistory);
        }

        self.grid = moves::replay(&self.base, &self.history);

        Ok(())
    }

    // Shows the state after move index, read-only. Returns false when
    // the index is out of range.
    pub fn view_history(&mut self, index: usize) -> bool {
        if index >= self.history.len() {
            return false;
        }

        let grid = moves::replay(&self.base, &self.history[..=index]);
        self.viewing = Some((index, grid));

        true
    }

    pub fn view_latest(&mut self) {
        self.viewing = None;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::grid::{Cell, ScoreTier, GRID_SIZE, N_CELLS};

    // The board for the seed “hello”:
    //
    //   u o d f h a
    //   s t t r e e
    //   c v e d o r
    //   d u t r r a
    //   d e c m l a
    //   r t n a b e
    fn make_session() -> GameSession {
        GameSession::new("hello", false)
    }

    fn make_dictionary() -> Dictionary {
        Dictionary::new(vec!["cod", "doe", "her", "star"])
    }

    fn row(cols: std::ops::RangeInclusive<usize>, row: usize) -> Vec<Pos> {
        cols.map(|col| Pos::new(col, row)).collect()
    }

    fn column(col: usize, rows: std::ops::RangeInclusive<usize>) -> Vec<Pos> {
        rows.map(|r| Pos::new(col, r)).collect()
    }

    fn play_cod(session: &mut GameSession) {
        // u o d → c o d, changing (0,0)
        session
            .propose_move(
                &make_dictionary(),
                &row(0..=2, 0),
                Pos::new(0, 0),
                'c',
            )
            .unwrap();
    }

    #[test]
    fn accepted_move() {
        let mut session = make_session();
        let dictionary = make_dictionary();

        let mv = session
            .propose_move(&dictionary, &row(0..=2, 0), Pos::new(0, 0), 'c')
            .unwrap();

        assert_eq!(mv.word, "cod");
        assert_eq!(mv.previous_letter, 'u');
        assert_eq!(mv.new_letter, 'c');
        assert_eq!(mv.newly_scored.len(), 3);

        let target = session.latest_grid().cell(Pos::new(0, 0));
        assert_eq!(target.letter, 'c');
        assert!(target.locked);
        assert_eq!(target.tier, ScoreTier::Word3);

        assert_eq!(session.score(), 9);
        assert_eq!(session.move_count(), 1);
        assert!(!session.is_finished());
    }

    #[test]
    fn input_letter_is_lowercased() {
        let mut session = make_session();

        let mv = session
            .propose_move(
                &make_dictionary(),
                &row(0..=2, 0),
                Pos::new(0, 0),
                'C',
            )
            .unwrap();

        assert_eq!(mv.new_letter, 'c');
        assert_eq!(session.latest_grid().cell(Pos::new(0, 0)).letter, 'c');
    }

    #[test]
    fn rejected_word_changes_nothing() {
        let mut session = make_session();
        let dictionary = make_dictionary();
        let before = session.latest_grid().clone();

        // u o d with q at (0,0) is “qod”
        assert_eq!(
            session.propose_move(
                &dictionary,
                &row(0..=2, 0),
                Pos::new(0, 0),
                'q',
            ),
            Err(MoveError::NotAWord("qod".to_string())),
        );

        assert_eq!(session.latest_grid(), &before);
        assert_eq!(session.score(), 0);
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn selection_length_bounds() {
        let mut session = make_session();
        let dictionary = make_dictionary();

        assert_eq!(
            session.propose_move(
                &dictionary,
                &row(0..=1, 0),
                Pos::new(0, 0),
                'c',
            ),
            Err(MoveError::InvalidSelectionLength(2)),
        );

        let seven = (0..7).map(|col| Pos::new(col.min(5), 0)).collect::<Vec<_>>();
        assert_eq!(
            session.propose_move(&dictionary, &seven, Pos::new(0, 0), 'c'),
            Err(MoveError::InvalidSelectionLength(7)),
        );
    }

    #[test]
    fn first_word_wins_scoring() {
        let mut session = make_session();
        let dictionary = make_dictionary();

        play_cod(&mut session);

        // d t e → d o e down column 2; (2,0) is already scored by
        // “cod” and keeps both its tier and its points
        let mv = session
            .propose_move(
                &dictionary,
                &column(2, 0..=2),
                Pos::new(2, 1),
                'o',
            )
            .unwrap();

        assert_eq!(mv.word, "doe");
        assert_eq!(
            mv.newly_scored,
            &[Pos::new(2, 1), Pos::new(2, 2)],
        );

        assert_eq!(
            session.latest_grid().cell(Pos::new(2, 0)).tier,
            ScoreTier::Word3,
        );
        assert_eq!(session.score(), 9 + 6);
        assert_eq!(session.move_count(), 2);
    }

    #[test]
    fn undo_restores_exactly() {
        let mut session = make_session();
        let fresh = session.latest_grid().clone();

        play_cod(&mut session);
        assert_eq!(session.score(), 9);

        session.undo().unwrap();

        assert_eq!(session.latest_grid(), &fresh);
        assert_eq!(session.score(), 0);
        assert_eq!(session.move_count(), 0);
        assert!(session.history().is_empty());

        assert_eq!(session.undo(), Err(UndoError::EmptyHistory));
    }

    #[test]
    fn undo_reverts_only_the_last_move() {
        let mut session = make_session();
        let dictionary = make_dictionary();

        play_cod(&mut session);
        let after_first = session.latest_grid().clone();

        session
            .propose_move(&dictionary, &column(2, 0..=2), Pos::new(2, 1), 'o')
            .unwrap();

        session.undo().unwrap();

        assert_eq!(session.latest_grid(), &after_first);
        assert_eq!(session.score(), 9);
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn score_follows_history() {
        let mut session = make_session();
        let dictionary = make_dictionary();

        play_cod(&mut session);
        session
            .propose_move(&dictionary, &column(2, 0..=2), Pos::new(2, 1), 'o')
            .unwrap();

        let expected = session
            .history()
            .iter()
            .map(|mv| mv.word_length() as u32 * mv.newly_scored.len() as u32)
            .sum::<u32>();

        assert_eq!(session.score(), expected);

        session.undo().unwrap();

        let expected = session
            .history()
            .iter()
            .map(|mv| mv.word_length() as u32 * mv.newly_scored.len() as u32)
            .sum::<u32>();

        assert_eq!(session.score(), expected);
    }

    // A dictionary where replacing the first letter of every row of
    // the “hello” board with an a makes a word, so the whole board
    // can be covered in six moves
    fn make_cover_dictionary() -> Dictionary {
        Dictionary::new(vec![
            "aecmla", "aodfha", "atnabe", "attree", "autrra", "avedor",
        ])
    }

    fn cover_row(session: &mut GameSession, dictionary: &Dictionary, r: usize) {
        session
            .propose_move(dictionary, &row(0..=5, r), Pos::new(0, r), 'a')
            .unwrap();
    }

    #[test]
    fn finish_detection() {
        let mut session = make_session();
        let dictionary = make_cover_dictionary();

        for r in 0..GRID_SIZE - 1 {
            cover_row(&mut session, &dictionary, r);
            assert!(!session.is_finished());
        }

        cover_row(&mut session, &dictionary, GRID_SIZE - 1);

        assert!(session.is_finished());
        assert_eq!(session.score(), 6 * 6 * 6);
        assert_eq!(
            session
                .latest_grid()
                .cells()
                .iter()
                .filter(|cell| cell.scored())
                .count(),
            N_CELLS,
        );

        // A finished board stops accepting moves
        assert_eq!(
            session.propose_move(
                &make_dictionary(),
                &row(0..=2, 0),
                Pos::new(1, 0),
                'o',
            ),
            Err(MoveError::GameFinished),
        );

        // …but undo un-finishes it
        session.undo().unwrap();
        assert!(!session.is_finished());
    }

    #[test]
    fn view_history() {
        let mut session = make_session();
        let dictionary = make_dictionary();
        let fresh = session.latest_grid().clone();

        play_cod(&mut session);
        let after_first = session.latest_grid().clone();

        session
            .propose_move(&dictionary, &column(2, 0..=2), Pos::new(2, 1), 'o')
            .unwrap();
        let after_second = session.latest_grid().clone();

        assert!(session.view_history(0));
        assert_eq!(session.viewing_history_index(), Some(0));
        assert_eq!(session.visible_grid(), &after_first);
        // The latest state is untouched by viewing
        assert_eq!(session.latest_grid(), &after_second);

        // Play and undo are rejected while viewing
        assert_eq!(
            session.propose_move(
                &dictionary,
                &row(0..=2, 2),
                Pos::new(0, 2),
                'h',
            ),
            Err(MoveError::HistoryViewActive),
        );
        assert_eq!(session.undo(), Err(UndoError::HistoryViewActive));

        assert!(session.view_history(1));
        assert_eq!(session.visible_grid(), &after_second);

        assert!(!session.view_history(2));

        session.view_latest();
        assert!(!session.is_viewing_history());
        assert_eq!(session.visible_grid(), &after_second);

        // Nothing was lost: undoing everything returns to the fresh
        // board
        session.undo().unwrap();
        session.undo().unwrap();
        assert_eq!(session.latest_grid(), &fresh);
    }

    #[test]
    fn replay_matches_live_state() {
        let mut session = make_session();
        let dictionary = make_dictionary();

        play_cod(&mut session);
        session
            .propose_move(&dictionary, &column(2, 0..=2), Pos::new(2, 1), 'o')
            .unwrap();
        // a e r down column 5 becomes h e r
        session
            .propose_move(&dictionary, &column(5, 0..=2), Pos::new(5, 0), 'h')
            .unwrap();

        let replayed = super::super::moves::replay(
            &Grid::from_seed("hello"),
            session.history(),
        );

        assert_eq!(&replayed, session.latest_grid());
    }

    #[test]
    fn snapshot_session() {
        let mut grid = Grid::from_seed("hello");
        *grid.cell_mut(Pos::new(0, 0)) = Cell {
            letter: 'c',
            locked: true,
            tier: ScoreTier::Word3,
        };
        grid.cell_mut(Pos::new(1, 0)).tier = ScoreTier::Word3;
        grid.cell_mut(Pos::new(2, 0)).tier = ScoreTier::Word3;

        let mut session = GameSession::from_snapshot("hello", grid, 9, 1);

        assert_eq!(session.score(), 9);
        assert_eq!(session.move_count(), 1);
        assert!(!session.uses_custom_seed());

        // The snapshot is the base: there is no history to undo into
        assert_eq!(session.undo(), Err(UndoError::EmptyHistory));

        // Play continues on top of the snapshot
        session
            .propose_move(
                &make_dictionary(),
                &column(2, 0..=2),
                Pos::new(2, 1),
                'o',
            )
            .unwrap();

        assert_eq!(session.score(), 15);
        assert_eq!(session.move_count(), 2);

        // …and undo returns to the snapshot, not past it
        session.undo().unwrap();
        assert_eq!(session.score(), 9);
        assert_eq!(session.undo(), Err(UndoError::EmptyHistory));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            &MoveError::NotAWord("qod".to_string()).to_string(),
            "“qod” is not in the dictionary",
        );
        assert_eq!(
            &MoveError::InvalidSelectionLength(2).to_string(),
            "selection of 2 boxes isn’t between 3 and 6",
        );
        assert_eq!(&UndoError::EmptyHistory.to_string(), "nothing to undo");
    }
}
