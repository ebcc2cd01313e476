//! Fixtures shared by the unit tests.

use crate::dice::Die;
use crate::marker::Marker;
use crate::track::Track;

pub fn m(symbol: char) -> Marker {
    Marker::new(symbol)
}

pub fn die(symbol: char, value: u8) -> Die {
    Die::new(m(symbol), value)
}

/// A track with one cell per string, each string listing its stack bottom to top.
pub fn track_of(stacks: &[&str]) -> Track {
    Track::from_cells(
        stacks
            .iter()
            .map(|stack| stack.chars().map(Marker::new).collect())
            .collect(),
    )
    .unwrap()
}
