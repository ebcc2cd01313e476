//! The [Roster] is the insertion-ordered set of markers taking part in a race. It maps each
//! marker to a dense index, which the tallies use to count placings without hashing.

use crate::marker::{Marker, STANDARD_SYMBOLS};
use rustc_hash::FxHashMap;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    marker_to_index: FxHashMap<Marker, usize>,
    index_to_marker: Vec<Marker>,
}
impl Roster {
    pub fn with_capacity(capacity: usize) -> Self {
        let marker_to_index = FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        let index_to_marker = Vec::with_capacity(capacity);
        Self {
            marker_to_index,
            index_to_marker,
        }
    }

    /// The five-camel roster of the standard game.
    pub fn standard() -> Self {
        let mut roster = Self::with_capacity(STANDARD_SYMBOLS.len());
        for (index, symbol) in STANDARD_SYMBOLS.into_iter().enumerate() {
            let marker = Marker::new(symbol);
            roster.marker_to_index.insert(marker, index);
            roster.index_to_marker.push(marker);
        }
        roster
    }

    pub fn push(&mut self, marker: Marker) -> Result<(), DuplicateMarker> {
        let index = self.index_to_marker.len();
        if let Some(&existing_index) = self.marker_to_index.get(&marker) {
            return Err(DuplicateMarker {
                marker,
                index,
                existing_index,
            });
        }
        self.marker_to_index.insert(marker, index);
        self.index_to_marker.push(marker);
        Ok(())
    }

    pub fn marker_at(&self, index: usize) -> Option<&Marker> {
        self.index_to_marker.get(index)
    }

    pub fn index_of(&self, marker: &Marker) -> Option<usize> {
        self.marker_to_index.get(marker).copied()
    }

    pub fn contains(&self, marker: &Marker) -> bool {
        self.marker_to_index.contains_key(marker)
    }

    pub fn len(&self) -> usize {
        self.index_to_marker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_marker.is_empty()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.index_to_marker
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("duplicate marker {marker} at index {index}, previously at {existing_index}")]
pub struct DuplicateMarker {
    pub marker: Marker,
    pub index: usize,
    pub existing_index: usize,
}

impl Index<usize> for Roster {
    type Output = Marker;

    fn index(&self, index: usize) -> &Self::Output {
        self.marker_at(index)
            .unwrap_or_else(|| panic!("no marker at index {index}"))
    }
}

impl TryFrom<Vec<Marker>> for Roster {
    type Error = DuplicateMarker;

    fn try_from(markers: Vec<Marker>) -> Result<Self, Self::Error> {
        let mut roster = Self::with_capacity(markers.len());
        for marker in markers {
            roster.push(marker)?;
        }
        Ok(roster)
    }
}

impl FromStr for Roster {
    type Err = anyhow::Error;

    /// Parses a roster from a run of marker symbols, e.g. `"rbgyp"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut roster = Self::with_capacity(s.len());
        for symbol in s.chars() {
            roster.push(Marker::try_new(symbol)?)?;
        }
        Ok(roster)
    }
}
