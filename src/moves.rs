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

use super::grid::{Grid, Pos, ScoreTier};

// One accepted move. Immutable once recorded; the history log and the
// replay below treat it as ground truth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub target: Pos,
    pub previous_letter: char,
    pub new_letter: char,
    // The selected run in order, 3–6 cells
    pub positions: Vec<Pos>,
    pub word: String,
    // The subset of positions that this move scored. Cells already
    // scored by an earlier move are not listed; they keep their tier.
    pub newly_scored: Vec<Pos>,
}

impl Move {
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    // Points awarded by this move: word length once per cell it scored
    pub fn points(&self) -> u32 {
        (self.word_length() * self.newly_scored.len()) as u32
    }
}

// Re-applies a recorded move. This is pure replay, not re-validation:
// the word is not looked up again and only the recorded cells are
// scored, so replaying a log always reproduces the exact state the
// log was recorded from.
pub fn apply(grid: &mut Grid, mv: &Move) {
    let target = grid.cell_mut(mv.target);
    target.letter = mv.new_letter;
    target.locked = true;

    if let Some(tier) = ScoreTier::from_word_length(mv.word_length()) {
        for &pos in mv.newly_scored.iter() {
            grid.cell_mut(pos).tier = tier;
        }
    }
}

// The state after the given moves, starting from the base board
pub fn replay(base: &Grid, moves: &[Move]) -> Grid {
    let mut grid = base.clone();

    for mv in moves.iter() {
        apply(&mut grid, mv);
    }

    grid
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_move() -> Move {
        Move {
            target: Pos::new(0, 0),
            previous_letter: 'u',
            new_letter: 'c',
            positions: vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)],
            word: "cod".to_string(),
            newly_scored: vec![
                Pos::new(0, 0),
                Pos::new(1, 0),
                Pos::new(2, 0),
            ],
        }
    }

    #[test]
    fn points() {
        let mut mv = make_move();
        assert_eq!(mv.word_length(), 3);
        assert_eq!(mv.points(), 9);

        mv.newly_scored.pop();
        assert_eq!(mv.points(), 6);

        mv.newly_scored.clear();
        assert_eq!(mv.points(), 0);
    }

    #[test]
    fn apply_scores_only_recorded_cells() {
        let base = Grid::from_seed("hello");
        let mut grid = base.clone();
        let mut mv = make_move();
        mv.newly_scored = vec![Pos::new(1, 0), Pos::new(2, 0)];

        apply(&mut grid, &mv);

        let target = grid.cell(Pos::new(0, 0));
        assert_eq!(target.letter, 'c');
        assert!(target.locked);
        // Not in newly_scored, so the tier is untouched
        assert!(!target.scored());

        assert_eq!(grid.cell(Pos::new(1, 0)).tier, ScoreTier::Word3);
        assert_eq!(grid.cell(Pos::new(2, 0)).tier, ScoreTier::Word3);
        assert!(!grid.cell(Pos::new(3, 0)).scored());
    }

    #[test]
    fn replay_reproduces_state() {
        let base = Grid::from_seed("hello");

        let first = make_move();
        let second = Move {
            target: Pos::new(2, 1),
            previous_letter: 't',
            new_letter: 'o',
            positions: vec![Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)],
            word: "doe".to_string(),
            // (2,0) was already scored by the first move
            newly_scored: vec![Pos::new(2, 1), Pos::new(2, 2)],
        };

        let mut live = base.clone();
        apply(&mut live, &first);
        apply(&mut live, &second);

        let moves = [first, second];

        assert_eq!(replay(&base, &moves), live);
        // Stable across calls
        assert_eq!(replay(&base, &moves), replay(&base, &moves));
        // A prefix replays the intermediate state
        let mut intermediate = base.clone();
        apply(&mut intermediate, &moves[0]);
        assert_eq!(replay(&base, &moves[..1]), intermediate);
        assert_eq!(replay(&base, &[]), base);
    }
}
