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
use super::grid::{Grid, Pos, GRID_SIZE, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use super::line;

// A move the engine would accept on the given board: a run, the cell
// to change and the letter to type there
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundMove {
    pub positions: Vec<Pos>,
    pub target: Pos,
    pub letter: char,
    pub word: String,
}

impl fmt::Display for FoundMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}–{} {} {} at {}",
            self.positions[0],
            self.positions[self.positions.len() - 1],
            self.word,
            self.letter,
            self.target,
        )
    }
}

fn runs() -> Vec<(Pos, Pos)> {
    let mut runs = Vec::new();

    for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
        for line_num in 0..GRID_SIZE {
            for start in 0..=GRID_SIZE - length {
                runs.push((
                    Pos::new(start, line_num),
                    Pos::new(start + length - 1, line_num),
                ));
                runs.push((
                    Pos::new(line_num, start),
                    Pos::new(line_num, start + length - 1),
                ));
            }
        }
    }

    runs
}

// Every accepted move on the board: all 3–6 cell runs crossed with
// every unlocked target cell and every letter. The board is small
// enough that the brute product is instant.
pub fn find_moves(grid: &Grid, dictionary: &Dictionary) -> Vec<FoundMove> {
    let mut results = Vec::new();

    for (start, end) in runs() {
        let positions = line::line_between(start, end);
        let base = positions
            .iter()
            .map(|&pos| grid.cell(pos).letter)
            .collect::<Vec<char>>();

        for (slot, &target) in positions.iter().enumerate() {
            if grid.cell(target).locked {
                continue;
            }

            for letter in b'a'..=b'z' {
                let letter = letter as char;

                let word = base
                    .iter()
                    .enumerate()
                    .map(|(i, &ch)| if i == slot { letter } else { ch })
                    .collect::<String>();

                if dictionary.contains(&word) {
                    results.push(FoundMove {
                        positions: positions.clone(),
                        target,
                        letter,
                        word,
                    });
                }
            }
        }
    }

    results
}
