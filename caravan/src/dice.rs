//! Dice and the pyramid that holds the dice still to be rolled in the current leg.

use crate::marker::Marker;
use crate::random::random_index;
use crate::roster::{DuplicateMarker, Roster};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tinyrand::Rand;

/// Faces of every die.
pub const DICE_VALUES: [u8; 3] = [1, 2, 3];

/// A rolled die: the camel that moves and the number of cells it advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    pub marker: Marker,
    pub value: u8,
}
impl Die {
    pub fn new(marker: Marker, value: u8) -> Self {
        Self { marker, value }
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.marker, self.value)
    }
}

impl FromStr for Die {
    type Err = anyhow::Error;

    /// Parses a die in the form `<marker><value>`, e.g. `r2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let symbol = chars.next().context("no characters to parse")?;
        let marker = Marker::try_new(symbol)?;
        let value: u8 = chars.as_str().parse()?;
        if !DICE_VALUES.contains(&value) {
            bail!("die value must be one of {DICE_VALUES:?}");
        }
        Ok(Self { marker, value })
    }
}

/// Markers whose die is yet to be rolled this leg. Insertion order is preserved so that draws
/// and enumeration are reproducible for a given random source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pyramid {
    remaining: Vec<Marker>,
}
impl Pyramid {
    /// A pyramid holding one die for every marker in the `roster`.
    pub fn full(roster: &Roster) -> Self {
        Self {
            remaining: roster.markers().to_vec(),
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.remaining
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn contains(&self, marker: &Marker) -> bool {
        self.remaining.contains(marker)
    }

    /// Removes the die of the given `marker`, returning `false` if it was not in the pyramid.
    pub fn remove(&mut self, marker: &Marker) -> bool {
        match self.remaining.iter().position(|remaining| remaining == marker) {
            None => false,
            Some(index) => {
                self.remaining.remove(index);
                true
            }
        }
    }

    /// Overwrites this pyramid with the contents of `source`, reusing the existing allocation.
    pub fn copy_from(&mut self, source: &Pyramid) {
        self.remaining.clone_from(&source.remaining);
    }

    /// Shakes a die out of the pyramid: a uniformly chosen marker, which is removed, and an
    /// independently chosen face. Returns `None` once the pyramid is empty.
    pub fn draw(&mut self, rand: &mut impl Rand) -> Option<Die> {
        if self.remaining.is_empty() {
            return None;
        }
        let marker = self.remaining.remove(random_index(rand, self.remaining.len()));
        let value = DICE_VALUES[random_index(rand, DICE_VALUES.len())];
        Some(Die { marker, value })
    }
}

impl TryFrom<Vec<Marker>> for Pyramid {
    type Error = DuplicateMarker;

    fn try_from(markers: Vec<Marker>) -> Result<Self, Self::Error> {
        Roster::try_from(markers.clone())?;
        Ok(Self { remaining: markers })
    }
}

impl FromStr for Pyramid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let roster = Roster::from_str(s)?;
        Ok(Self::full(&roster))
    }
}
