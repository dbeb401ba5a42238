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

mod daily;
mod dictionary;
mod grid;
mod letters;
mod line;
mod solver;

use std::process::ExitCode;
use dictionary::Dictionary;
use grid::Grid;

fn main() -> ExitCode {
    let mut args = std::env::args();

    if args.len() > 2 {
        eprintln!("usage: find-moves [seed]");
        return ExitCode::FAILURE;
    }

    let seed = args.nth(1).unwrap_or_else(daily::today_seed);

    let grid = Grid::from_seed(&seed);
    let dictionary = Dictionary::embedded();

    println!("{}\n{}\n", seed, grid);

    let moves = solver::find_moves(&grid, &dictionary);

    for found in moves.iter() {
        println!("{}", found);
    }

    println!("\n{} moves", moves.len());

    ExitCode::SUCCESS
}
