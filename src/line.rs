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

use super::grid::{Pos, GRID_SIZE};

// The run of cells between two coordinates, forced onto an axis: the
// line is vertical when the columns match and otherwise horizontal
// along the start's row. The cells are ordered ascending along the
// chosen axis and the range is inclusive, so equal coordinates give a
// single-cell run.
pub fn line_between(start: Pos, end: Pos) -> Vec<Pos> {
    if start.col == end.col {
        let first = start.row.min(end.row);
        let last = start.row.max(end.row);

        (first..=last).map(|row| Pos::new(start.col, row)).collect()
    } else {
        let first = start.col.min(end.col);
        let last = start.col.max(end.col);

        (first..=last).map(|col| Pos::new(col, start.row)).collect()
    }
}

// Where the rendered board sits in pointer space
#[derive(Clone, Copy, Debug)]
pub struct BoardMetrics {
    pub left: f64,
    pub top: f64,
    pub box_size: f64,
}

impl BoardMetrics {
    pub fn right(&self) -> f64 {
        self.left + self.box_size * GRID_SIZE as f64
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.box_size * GRID_SIZE as f64
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right()
            && y >= self.top && y <= self.bottom()
    }

    pub fn cell_at(&self, x: f64, y: f64) -> Pos {
        Pos::new(
            clamp_coordinate((x - self.left) / self.box_size),
            clamp_coordinate((y - self.top) / self.box_size),
        )
    }

    pub fn cell_center(&self, pos: Pos) -> (f64, f64) {
        (
            self.left + (pos.col as f64 + 0.5) * self.box_size,
            self.top + (pos.row as f64 + 0.5) * self.box_size,
        )
    }
}

fn clamp_coordinate(value: f64) -> usize {
    (value.floor() as i64).clamp(0, GRID_SIZE as i64 - 1) as usize
}

// Resolves a drag position to the end cell of the run: the pointer is
// clamped to the board and the axis further from the anchor cell's
// centre wins, the other axis collapsing onto the anchor's.
pub fn drag_end_cell(metrics: &BoardMetrics, anchor: Pos, x: f64, y: f64) -> Pos {
    let (center_x, center_y) = metrics.cell_center(anchor);

    let x = x.clamp(metrics.left, metrics.right());
    let y = y.clamp(metrics.top, metrics.bottom());

    if (x - center_x).abs() > (y - center_y).abs() {
        metrics.cell_at(x, center_y)
    } else {
        metrics.cell_at(center_x, y)
    }
}
