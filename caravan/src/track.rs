//! The race [Track]: a fixed run of cells, each holding a bottom-to-top stack of markers.
//!
//! A camel that moves carries every camel stacked above it, and the carried sub-stack lands on
//! top of whatever already occupies the destination cell. Destinations beyond the last cell are
//! clamped to it. Rankings are read from the last occupied cell backwards, topmost camel first.

use crate::dice::Die;
use crate::marker::Marker;
use crate::random::shuffle;
use crate::roster::{DuplicateMarker, Roster};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tinyrand::Rand;
use tracing::trace;

/// Number of cells on the standard board.
pub const TRACK_POSITIONS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    cells: Vec<Vec<Marker>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("marker {marker} is not on the track")]
pub struct InvalidMarker {
    pub marker: Marker,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidTrack {
    #[error("a track must have at least one position")]
    NoPositions,

    #[error("{0}")]
    DuplicateMarker(#[from] DuplicateMarker),
}

/// The first- and second-placed markers. A slot is `None` when the track holds too few markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Podium {
    pub first: Option<Marker>,
    pub second: Option<Marker>,
}

impl Display for Podium {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn slot(marker: &Option<Marker>) -> String {
            marker.map(String::from).unwrap_or_else(|| "-".into())
        }
        write!(f, "({}, {})", slot(&self.first), slot(&self.second))
    }
}

impl Track {
    pub fn empty(positions: usize) -> Result<Self, InvalidTrack> {
        if positions == 0 {
            return Err(InvalidTrack::NoPositions);
        }
        Ok(Self {
            cells: vec![vec![]; positions],
        })
    }

    /// Builds a track from explicit cell stacks, listed bottom to top. Every marker may appear
    /// at most once across the whole track.
    pub fn from_cells(cells: Vec<Vec<Marker>>) -> Result<Self, InvalidTrack> {
        if cells.is_empty() {
            return Err(InvalidTrack::NoPositions);
        }
        let track = Self { cells };
        track.roster()?;
        Ok(track)
    }

    /// The opening placement of a race: every marker in the first cell, stacked in an order
    /// drawn from `rand`.
    pub fn starting(
        roster: &Roster,
        positions: usize,
        rand: &mut impl Rand,
    ) -> Result<Self, InvalidTrack> {
        let mut track = Self::empty(positions)?;
        let mut stack = roster.markers().to_vec();
        shuffle(&mut stack, rand);
        track.cells[0] = stack;
        Ok(track)
    }

    pub fn positions(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Vec<Marker>] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Option<&[Marker]> {
        self.cells.get(position).map(Vec::as_slice)
    }

    pub fn into_cells(self) -> Vec<Vec<Marker>> {
        self.cells
    }

    pub fn count_markers(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    /// The markers on the track, in cell order and bottom to top within a cell.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.cells.iter().flatten()
    }

    /// The markers on the track as a [Roster], failing if any marker appears more than once.
    pub fn roster(&self) -> Result<Roster, DuplicateMarker> {
        let mut roster = Roster::with_capacity(self.count_markers());
        for &marker in self.markers() {
            roster.push(marker)?;
        }
        Ok(roster)
    }

    /// The `(position, height)` of a marker, where height 0 is the bottom of the stack.
    pub fn locate(&self, marker: &Marker) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(position, stack)| {
            stack
                .iter()
                .position(|occupant| occupant == marker)
                .map(|height| (position, height))
        })
    }

    /// Moves the die's marker, together with everything stacked above it, `die.value` cells
    /// forward (clamped to the last cell) and places the carried sub-stack on top of the
    /// destination. Returns the destination position.
    pub fn advance(&mut self, die: &Die) -> Result<usize, InvalidMarker> {
        let (position, height) = self
            .locate(&die.marker)
            .ok_or(InvalidMarker { marker: die.marker })?;
        let target = usize::min(position + die.value as usize, self.cells.len() - 1);
        let carried = self.cells[position].split_off(height);
        trace!(
            "moving {} from {position} to {target}, carrying {}",
            die.marker,
            carried.len() - 1
        );
        self.cells[target].extend(carried);
        Ok(target)
    }

    /// Overwrites this track with the contents of `source`, reusing the existing allocations.
    pub fn copy_from(&mut self, source: &Track) {
        self.cells.clone_from(&source.cells);
    }

    /// Non-mutating counterpart of [advance](Self::advance).
    pub fn advanced(&self, die: &Die) -> Result<Self, InvalidMarker> {
        let mut track = self.clone();
        track.advance(die)?;
        Ok(track)
    }

    /// Reads the first and second placings: cells from the last to the first, each stack from
    /// the top down.
    pub fn podium(&self) -> Podium {
        let mut ranked = self
            .cells
            .iter()
            .rev()
            .flat_map(|stack| stack.iter().rev())
            .copied();
        Podium {
            first: ranked.next(),
            second: ranked.next(),
        }
    }
}

impl Default for Track {
    fn default() -> Self {
        Self {
            cells: vec![vec![]; TRACK_POSITIONS],
        }
    }
}

impl Display for Track {
    /// Renders the cells left to right, separated by `|`, each stack bottom to top. Empty cells
    /// are shown as `.`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (position, stack) in self.cells.iter().enumerate() {
            if position != 0 {
                write!(f, "|")?;
            }
            if stack.is_empty() {
                write!(f, ".")?;
            } else {
                for marker in stack {
                    write!(f, "{marker}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
