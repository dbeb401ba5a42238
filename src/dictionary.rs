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

// Playable words, one per line, lowercase and byte-sorted
static WORDS_DATA: &str = include_str!("../data/words.txt");

pub struct Dictionary {
    words: Vec<&'static str>,
}

impl Dictionary {
    // The word list must already be sorted; lookups binary search it
    pub fn new(words: Vec<&'static str>) -> Dictionary {
        Dictionary { words }
    }

    pub fn embedded() -> Dictionary {
        Dictionary::new(WORDS_DATA.lines().collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        let word = word.as_str();

        self.words.binary_search_by(|probe| probe.cmp(&word)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words_of_length(
        &self,
        length: usize,
    ) -> impl Iterator<Item = &'static str> + '_ {
        self.words
            .iter()
            .copied()
            .filter(move |word| word.len() == length)
    }
}
