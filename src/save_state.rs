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
use fmt::Write;
use serde::{Deserialize, Serialize};
use super::game::GameSession;
use super::grid::{Cell, Grid, Pos, ScoreTier, GRID_SIZE};

pub const STORAGE_KEY: &str = "state";

// Tier symbols indexed by word length; indices 0–2 are aliases for an
// unscored cell
pub const EMOJIS: [char; 7] = ['⬛', '⬛', '⬛', '🟩', '🟦', '🟥', '🟨'];

// The persisted record, one per logical “current game”. The letter
// grid uses uppercase for locked cells; the symbol grid carries the
// score tiers. There is no move list, so a restored session starts
// with an empty history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveState {
    pub seed: String,
    pub score: u32,
    pub moves: u32,
    pub letter_grid: [[char; GRID_SIZE]; GRID_SIZE],
    pub emoji_grid: [[char; GRID_SIZE]; GRID_SIZE],
    pub finished: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RestoreError {
    BadLetter(usize, usize, char),
    BadSymbol(usize, usize, char),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RestoreError::BadLetter(row, col, ch) => {
                write!(
                    f,
                    "row {}, column {}: bad letter: {}",
                    row + 1,
                    col + 1,
                    ch,
                )
            },
            RestoreError::BadSymbol(row, col, ch) => {
                write!(
                    f,
                    "row {}, column {}: bad symbol: {}",
                    row + 1,
                    col + 1,
                    ch,
                )
            },
        }
    }
}

pub fn emoji_for_tier(tier: ScoreTier) -> char {
    match tier.word_length() {
        Some(length) => EMOJIS[length],
        None => EMOJIS[0],
    }
}

pub fn tier_for_emoji(ch: char) -> Option<ScoreTier> {
    if ch == EMOJIS[0] {
        return Some(ScoreTier::Unscored);
    }

    for length in 3..EMOJIS.len() {
        if ch == EMOJIS[length] {
            return ScoreTier::from_word_length(length);
        }
    }

    None
}

impl SaveState {
    pub fn from_session(session: &GameSession) -> SaveState {
        let mut letter_grid = [['a'; GRID_SIZE]; GRID_SIZE];
        let mut emoji_grid = [[EMOJIS[0]; GRID_SIZE]; GRID_SIZE];

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = session.latest_grid().cell(Pos::new(col, row));

                letter_grid[row][col] = if cell.locked {
                    cell.letter.to_ascii_uppercase()
                } else {
                    cell.letter
                };
                emoji_grid[row][col] = emoji_for_tier(cell.tier);
            }
        }

        SaveState {
            seed: session.seed().to_string(),
            score: session.score(),
            moves: session.move_count(),
            letter_grid,
            emoji_grid,
            finished: session.is_finished(),
        }
    }

    // Rebuilds the grid snapshot the record describes
    pub fn to_grid(&self) -> Result<Grid, RestoreError> {
        let mut grid = Grid::from_seed(&self.seed);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let letter = self.letter_grid[row][col];
                let symbol = self.emoji_grid[row][col];

                if !letter.is_ascii_alphabetic() {
                    return Err(RestoreError::BadLetter(row, col, letter));
                }

                let Some(tier) = tier_for_emoji(symbol)
                else {
                    return Err(RestoreError::BadSymbol(row, col, symbol));
                };

                *grid.cell_mut(Pos::new(col, row)) = Cell {
                    letter: letter.to_ascii_lowercase(),
                    locked: letter.is_ascii_uppercase(),
                    tier,
                };
            }
        }

        Ok(grid)
    }
}

// The opaque key-value service the game saves into: localStorage in
// the browser, a map in tests. An unavailable store degrades to
// playing without saves.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreUnavailable>;
    fn remove(&mut self, key: &str);
}

#[derive(Debug)]
pub struct StoreUnavailable;

impl fmt::Display for StoreUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "the save store is unavailable")
    }
}

// The load contract: the record is honoured only when its seed
// matches the session’s. A foreign seed or an unparseable record is
// purged and treated as absent.
pub fn load(store: &mut dyn Store, seed: &str) -> Option<SaveState> {
    let saved = store.get(STORAGE_KEY)?;

    match serde_json::from_str::<SaveState>(&saved) {
        Ok(state) if state.seed == seed => Some(state),
        _ => {
            store.remove(STORAGE_KEY);
            None
        },
    }
}

pub fn save(
    store: &mut dyn Store,
    state: &SaveState,
) -> Result<(), StoreUnavailable> {
    let json = serde_json::to_string(state).map_err(|_| StoreUnavailable)?;
    store.set(STORAGE_KEY, &json)
}

// Starts the session for a seed: a restored one when the store holds
// a usable record for it, otherwise a fresh board. Custom-seed
// sessions never touch the store.
pub fn start_session(
    store: &mut dyn Store,
    seed: &str,
    custom_seed: bool,
) -> GameSession {
    if custom_seed {
        return GameSession::new(seed, true);
    }

    if let Some(state) = load(store, seed) {
        match state.to_grid() {
            Ok(grid) => {
                return GameSession::from_snapshot(
                    seed,
                    grid,
                    state.score,
                    state.moves,
                );
            },
            Err(_) => store.remove(STORAGE_KEY),
        }
    }

    GameSession::new(seed, false)
}

// The plain-text report for the clipboard: name, seed, score and the
// tier symbols row by row
pub fn share_text(session: &GameSession) -> String {
    let mut result = String::new();

    write!(
        result,
        "Jorybord\n{}\nScore: {}\n",
        session.seed(),
        session.score(),
    ).unwrap();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let cell = session.latest_grid().cell(Pos::new(col, row));
            result.push(emoji_for_tier(cell.tier));
        }

        result.push('\n');
    }

    result
}

#[cfg(test)]
pub mod memory_store {
    use super::*;
    use std::collections::HashMap;

    pub struct MemoryStore {
        entries: HashMap<String, String>,
    }

    impl MemoryStore {
        pub fn new() -> MemoryStore {
            MemoryStore { entries: HashMap::new() }
        }
    }

    impl Store for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set(
            &mut self,
            key: &str,
            value: &str,
        ) -> Result<(), StoreUnavailable> {
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&mut self, key: &str) {
            self.entries.remove(key);
        }
    }
}
