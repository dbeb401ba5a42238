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

use super::grid::N_CELLS;

// English letter frequencies as percentages, in order from A to Z.
// The running total reaches at least 100 so the sampling loop below
// terminates for every draw in [0, 100).
pub const FREQUENCIES: [f64; 26] = [
    8.4966,  // A
    2.0716,  // B
    4.5388,  // C
    3.3844,  // D
    11.161,  // E
    1.8121,  // F
    2.4705,  // G
    3.0034,  // H
    7.5448,  // I
    0.1965,  // J
    1.1016,  // K
    5.4893,  // L
    3.0129,  // M
    6.6544,  // N
    7.1635,  // O
    3.1671,  // P
    0.1962,  // Q
    7.5809,  // R
    5.7351,  // S
    6.9509,  // T
    3.6308,  // U
    1.0074,  // V
    1.2899,  // W
    0.2902,  // X
    1.7779,  // Y
    0.2722,  // Z
];

// Board generation has to produce the same letters for the same seed
// on every platform, so the generator is pinned down to the bit: the
// seed string is hashed with 64-bit FNV-1a and the hash feeds a
// splitmix64 stream whose top 53 bits become a draw in [0, 1).
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn from_seed(seed: &str) -> SeededRng {
        let mut hash = 0xcbf29ce484222325u64;

        for &byte in seed.as_bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }

        SeededRng { state: hash }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

// Scales the draw to [0, 100) and picks the first letter whose
// cumulative frequency exceeds it
pub fn letter_for_draw(draw: f64) -> char {
    let scaled = draw * 100.0;
    let mut sum = 0.0;

    for (letter_num, frequency) in FREQUENCIES.iter().enumerate() {
        sum += frequency;

        if sum > scaled {
            return (b'a' + letter_num as u8) as char;
        }
    }

    'z'
}

// The 36 board letters for a seed, in row-major order
pub fn board_letters(seed: &str) -> [char; N_CELLS] {
    let mut rng = SeededRng::from_seed(seed);
    let mut board = ['a'; N_CELLS];

    for letter in board.iter_mut() {
        *letter = letter_for_draw(rng.next_f64());
    }

    board
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frequencies_cover_the_range() {
        let mut sum = 0.0;

        for frequency in FREQUENCIES.iter() {
            assert!(*frequency > 0.0);
            sum += frequency;
        }

        assert!(sum >= 100.0);
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn seed_hash() {
        assert_eq!(SeededRng::from_seed("hello").state, 0xa430d84680aabd0b);
        assert_ne!(
            SeededRng::from_seed("hello").state,
            SeededRng::from_seed("hellp").state,
        );
    }

    #[test]
    fn draws_are_in_range() {
        let mut rng = SeededRng::from_seed("range");

        for _ in 0..1000 {
            let draw = rng.next_f64();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn sampling_boundaries() {
        assert_eq!(letter_for_draw(0.0), 'a');
        // Just below the cumulative frequency of A
        assert_eq!(letter_for_draw(0.084965), 'a');
        // Just above it
        assert_eq!(letter_for_draw(0.085), 'b');
        // The tail of the table belongs to Z
        assert_eq!(letter_for_draw(0.999), 'z');
    }

    #[test]
    fn known_boards() {
        assert_eq!(
            board_letters("hello").iter().collect::<String>(),
            "uodfhasttreecvedordutrradecmlartnabe",
        );
        assert_eq!(
            board_letters("tiger").iter().collect::<String>(),
            "etyndrdnafctacaicluyflaaarieipoihmch",
        );
    }

    #[test]
    fn same_seed_same_board() {
        assert_eq!(board_letters("repeat"), board_letters("repeat"));
        assert_ne!(board_letters("repeat"), board_letters("repeat2"));
    }
}
