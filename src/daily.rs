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

// The daily seed is the local date as a fixed English calendar
// string, so every player on the same day plays the same board no
// matter what locale their machine is in.

static WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

static MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// weekday counts from Sunday as zero, month from January as one
pub fn format_seed(
    weekday: usize,
    month: usize,
    day: u32,
    year: i32,
) -> String {
    format!(
        "{}, {} {}, {}",
        WEEKDAYS[weekday],
        MONTHS[month - 1],
        day,
        year,
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today_seed() -> String {
    use chrono::{Datelike, Local};

    let today = Local::now().date_naive();

    format_seed(
        today.weekday().num_days_from_sunday() as usize,
        today.month() as usize,
        today.day(),
        today.year(),
    )
}

#[cfg(target_arch = "wasm32")]
pub fn today_seed() -> String {
    let date = js_sys::Date::new_0();

    format_seed(
        date.get_day() as usize,
        date.get_month() as usize + 1,
        date.get_date(),
        date.get_full_year() as i32,
    )
}
