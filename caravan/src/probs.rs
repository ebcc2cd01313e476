//! Podium tallies and the per-marker placing probabilities derived from them.

use crate::marker::Marker;
use crate::roster::Roster;
use crate::track::Podium;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct Fraction {
    pub numerator: u64,
    pub denominator: u64,
}
impl Fraction {
    pub fn quotient(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Probabilities of finishing the leg first and second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placings {
    pub first: f64,
    pub second: f64,
}

impl From<Placings> for (f64, f64) {
    fn from(placings: Placings) -> Self {
        (placings.first, placings.second)
    }
}

/// Placing probabilities for every marker in the race, in roster order. Markers that never
/// place carry `(0.0, 0.0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegProbs {
    roster: Roster,
    placings: Vec<Placings>,
}
impl LegProbs {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn get(&self, marker: &Marker) -> Option<&Placings> {
        self.roster
            .index_of(marker)
            .map(|index| &self.placings[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Marker, &Placings)> {
        self.roster.markers().iter().zip(self.placings.iter())
    }

    pub fn as_pairs(&self) -> Vec<(f64, f64)> {
        self.placings.iter().map(|&placings| placings.into()).collect()
    }

    pub fn sum_first(&self) -> f64 {
        self.placings.iter().map(|placings| placings.first).sum()
    }

    pub fn sum_second(&self) -> f64 {
        self.placings.iter().map(|placings| placings.second).sum()
    }
}

/// Counts first and second placings over a number of recorded outcomes.
#[derive(Debug, Clone)]
pub struct Tally {
    roster: Roster,
    firsts: Vec<u64>,
    seconds: Vec<u64>,
    outcomes: u64,
}
impl Tally {
    pub fn new(roster: Roster) -> Self {
        let runners = roster.len();
        Self {
            roster,
            firsts: vec![0; runners],
            seconds: vec![0; runners],
            outcomes: 0,
        }
    }

    pub fn outcomes(&self) -> u64 {
        self.outcomes
    }

    /// Records one outcome. Both placed markers must be on the roster.
    pub fn record(&mut self, podium: &Podium) {
        if let Some(first) = &podium.first {
            let index = self.index(first);
            self.firsts[index] += 1;
        }
        if let Some(second) = &podium.second {
            let index = self.index(second);
            self.seconds[index] += 1;
        }
        self.outcomes += 1;
    }

    /// Folds the counts of another tally over the same roster into this one.
    pub fn merge(&mut self, other: &Tally) {
        debug_assert_eq!(self.roster, other.roster, "tallies must share a roster");
        for (count, other) in self.firsts.iter_mut().zip(&other.firsts) {
            *count += other;
        }
        for (count, other) in self.seconds.iter_mut().zip(&other.seconds) {
            *count += other;
        }
        self.outcomes += other.outcomes;
    }

    /// The (first, second) placing counts of a marker out of all recorded outcomes.
    pub fn fractions(&self, marker: &Marker) -> Option<(Fraction, Fraction)> {
        self.roster.index_of(marker).map(|index| {
            (
                Fraction {
                    numerator: self.firsts[index],
                    denominator: self.outcomes,
                },
                Fraction {
                    numerator: self.seconds[index],
                    denominator: self.outcomes,
                },
            )
        })
    }

    pub fn into_probs(self) -> LegProbs {
        let outcomes = self.outcomes;
        let placings = self
            .firsts
            .iter()
            .zip(&self.seconds)
            .map(|(&firsts, &seconds)| {
                if outcomes == 0 {
                    Placings::default()
                } else {
                    Placings {
                        first: firsts as f64 / outcomes as f64,
                        second: seconds as f64 / outcomes as f64,
                    }
                }
            })
            .collect();
        LegProbs {
            roster: self.roster,
            placings,
        }
    }

    fn index(&self, marker: &Marker) -> usize {
        debug_assert!(
            self.roster.contains(marker),
            "marker {marker} is not on the roster"
        );
        self.roster
            .index_of(marker)
            .expect("marker is not on the roster")
    }
}
