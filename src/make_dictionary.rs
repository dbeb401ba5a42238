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

use clap::Parser;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

// The dictionary on disk is one word per line, lowercase ASCII and
// byte-sorted so the game can binary search it directly.

#[derive(Parser)]
#[command(about = "Filter a raw word list into the game dictionary")]
struct Args {
    /// Raw word list, one word per line
    input: PathBuf,
    /// Where to write the dictionary
    output: PathBuf,
    /// Shortest word to keep
    #[arg(long, default_value_t = 3)]
    min_length: usize,
    /// Longest word to keep
    #[arg(long, default_value_t = 6)]
    max_length: usize,
}

fn filter_words(
    args: &Args,
    input: impl BufRead,
) -> Result<BTreeSet<String>, io::Error> {
    let mut words = BTreeSet::new();

    for line in input.lines() {
        let word = line?.trim().to_lowercase();

        if (args.min_length..=args.max_length).contains(&word.len())
            && word.bytes().all(|b| b.is_ascii_lowercase())
        {
            words.insert(word);
        }
    }

    Ok(words)
}

fn build_dictionary(args: &Args) -> Result<usize, io::Error> {
    let input = BufReader::new(File::open(&args.input)?);
    let words = filter_words(args, input)?;

    let mut output = BufWriter::new(File::create(&args.output)?);

    for word in words.iter() {
        writeln!(output, "{}", word)?;
    }

    output.flush()?;

    Ok(words.len())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match build_dictionary(&args) {
        Ok(count) => {
            println!("{} words", count);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
