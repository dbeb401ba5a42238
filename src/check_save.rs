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

mod dictionary;
mod game;
mod grid;
mod letters;
mod moves;
mod save_state;

use std::fmt;
use std::process::ExitCode;
use grid::{Grid, Pos};
use save_state::SaveState;

enum Problem {
    Restore(save_state::RestoreError),
    ScoreMismatch(u32, u32),
    MoveCountMismatch(u32, u32),
    FinishedMismatch(bool),
    UnseededLetter(Pos, char, char),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Problem::Restore(e) => write!(f, "{}", e),
            Problem::ScoreMismatch(recorded, expected) => {
                write!(
                    f,
                    "score is {} but the tiers sum to {}",
                    recorded,
                    expected,
                )
            },
            Problem::MoveCountMismatch(recorded, expected) => {
                write!(
                    f,
                    "{} moves recorded but {} cells are locked",
                    recorded,
                    expected,
                )
            },
            Problem::FinishedMismatch(recorded) => {
                if *recorded {
                    write!(f, "marked finished but not every cell is scored")
                } else {
                    write!(f, "every cell is scored but not marked finished")
                }
            },
            Problem::UnseededLetter(pos, expected, actual) => {
                write!(
                    f,
                    "unlocked cell {} holds {} but the seed generates {}",
                    pos,
                    actual,
                    expected,
                )
            },
        }
    }
}

fn check(state: &SaveState) -> Vec<Problem> {
    let grid = match state.to_grid() {
        Ok(grid) => grid,
        Err(e) => return vec![Problem::Restore(e)],
    };

    let mut problems = Vec::new();

    // Each scored cell was credited exactly once, with the length of
    // the word that scored it, so the tiers must sum to the score
    let expected_score = grid
        .cells()
        .iter()
        .filter_map(|cell| cell.tier.word_length())
        .sum::<usize>() as u32;

    if state.score != expected_score {
        problems.push(Problem::ScoreMismatch(state.score, expected_score));
    }

    // Every move locks exactly one previously unlocked cell
    let n_locked = grid
        .cells()
        .iter()
        .filter(|cell| cell.locked)
        .count() as u32;

    if state.moves != n_locked {
        problems.push(Problem::MoveCountMismatch(state.moves, n_locked));
    }

    if state.finished != grid.is_finished() {
        problems.push(Problem::FinishedMismatch(state.finished));
    }

    // Only accepted moves change letters, and they lock what they
    // change, so every unlocked cell still holds the seed’s letter
    let generated = Grid::from_seed(&state.seed);

    for pos in Grid::positions() {
        let cell = grid.cell(pos);

        if !cell.locked && cell.letter != generated.cell(pos).letter {
            problems.push(Problem::UnseededLetter(
                pos,
                generated.cell(pos).letter,
                cell.letter,
            ));
        }
    }

    problems
}

fn main() -> ExitCode {
    let Some(filename) = std::env::args_os().nth(1)
    else {
        eprintln!("usage: check-save <file>");
        return ExitCode::FAILURE;
    };

    let contents = match std::fs::read_to_string(&filename) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    let state = match serde_json::from_str::<SaveState>(&contents) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    let problems = check(&state);

    for problem in problems.iter() {
        println!("{}: {}", filename.to_string_lossy(), problem);
    }

    if problems.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
