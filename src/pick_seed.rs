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
mod grid;
mod letters;
mod line;
mod solver;

use std::process::ExitCode;
use dictionary::Dictionary;
use grid::Grid;
use rand::Rng;

// How many of the sampled seeds to report
const N_BEST: usize = 10;

fn main() -> ExitCode {
    let mut args = std::env::args();

    let count = match args.nth(1) {
        None => 100,
        Some(arg) => match arg.parse::<usize>() {
            Ok(count) => count,
            Err(_) => {
                eprintln!("usage: pick-seed [count]");
                return ExitCode::FAILURE;
            },
        },
    };

    let dictionary = Dictionary::embedded();
    let mut rng = rand::thread_rng();
    let mut candidates = Vec::with_capacity(count);

    for _ in 0..count {
        let seed = format!("{:08x}", rng.gen::<u32>());
        let n_moves =
            solver::find_moves(&Grid::from_seed(&seed), &dictionary).len();

        candidates.push((seed, n_moves));
    }

    candidates.sort_by(|(_, a), (_, b)| b.cmp(a));

    for (seed, n_moves) in candidates.into_iter().take(N_BEST) {
        println!("{}: {} moves", seed, n_moves);
    }

    ExitCode::SUCCESS
}
