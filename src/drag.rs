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

use super::grid::{Grid, Pos, MIN_WORD_LENGTH};
use super::line::{self, BoardMetrics};

// Local input state between pointer events. Never persisted; a new
// tracker starts every game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging {
        anchor: Pos,
        end: Pos,
        cells: Vec<Pos>,
    },
    AwaitingLetter {
        cells: Vec<Pos>,
        target: Option<Pos>,
    },
}

pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn new() -> DragTracker {
        DragTracker { state: DragState::Idle }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    // The currently highlighted run, in selection order
    pub fn cells(&self) -> &[Pos] {
        match &self.state {
            DragState::Idle => &[],
            DragState::Dragging { cells, .. } => cells,
            DragState::AwaitingLetter { cells, .. } => cells,
        }
    }

    pub fn target(&self) -> Option<Pos> {
        match &self.state {
            DragState::AwaitingLetter { target, .. } => *target,
            _ => None,
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(&self.state, DragState::AwaitingLetter { .. })
    }

    // Pointer pressed; hit is None when the press is off the board,
    // which always clears the selection. Returns true if the
    // highlighted set changed.
    pub fn pointer_down(&mut self, grid: &Grid, hit: Option<Pos>) -> bool {
        let Some(pos) = hit
        else {
            return self.reset();
        };

        if let DragState::AwaitingLetter { cells, target } = &mut self.state {
            if cells.contains(&pos) {
                // Re-target within the selection; a locked cell can’t
                // receive a letter so pressing one changes nothing
                if !grid.cell(pos).locked {
                    *target = Some(pos);
                }

                return false;
            }
        }

        self.state = DragState::Dragging {
            anchor: pos,
            end: pos,
            cells: vec![pos],
        };

        true
    }

    // Pointer moved while dragging. The run only changes when the
    // resolved end cell does, so callers can redraw exactly when this
    // returns true.
    pub fn pointer_move(
        &mut self,
        metrics: &BoardMetrics,
        x: f64,
        y: f64,
    ) -> bool {
        let DragState::Dragging { anchor, end, cells } = &mut self.state
        else {
            return false;
        };

        let new_end = line::drag_end_cell(metrics, *anchor, x, y);

        if new_end == *end {
            return false;
        }

        *end = new_end;
        *cells = line::line_between(*anchor, new_end);

        true
    }

    // Pointer released: a run shorter than a playable word is
    // discarded, anything else becomes the selection awaiting a
    // letter. Returns true if the highlighted set changed.
    pub fn pointer_up(&mut self) -> bool {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging { cells, .. } => {
                if cells.len() < MIN_WORD_LENGTH {
                    true
                } else {
                    self.state = DragState::AwaitingLetter {
                        cells,
                        target: None,
                    };
                    false
                }
            },
            other => {
                self.state = other;
                false
            },
        }
    }

    // Takes the selection for a letter press. With no target chosen
    // yet the press is ignored and the selection stays; otherwise the
    // tracker returns to idle whether or not the move is accepted.
    pub fn take_selection(&mut self) -> Option<(Vec<Pos>, Pos)> {
        if !matches!(
            &self.state,
            DragState::AwaitingLetter { target: Some(_), .. },
        ) {
            return None;
        }

        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::AwaitingLetter { cells, target: Some(target) } => {
                Some((cells, target))
            },
            _ => unreachable!(),
        }
    }

    pub fn reset(&mut self) -> bool {
        let had_cells = !self.cells().is_empty();
        self.state = DragState::Idle;
        had_cells
    }
}

impl Default for DragTracker {
    fn default() -> DragTracker {
        DragTracker::new()
    }
}
