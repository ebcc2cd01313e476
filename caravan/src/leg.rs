//! The lifecycle of a single leg: the track, the pyramid of dice still to be rolled and the
//! tents holding the dice already rolled, in the order they came out.

use crate::dice::{Die, Pyramid, DICE_VALUES};
use crate::enumeration::ExhaustiveEngine;
use crate::error::AnalysisError;
use crate::marker::Marker;
use crate::mc::MonteCarloEngine;
use crate::probs::LegProbs;
use crate::roster::{DuplicateMarker, Roster};
use crate::track::{InvalidMarker, InvalidTrack, Track};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinyrand::Rand;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidLeg {
    #[error("{0}")]
    InvalidTrack(#[from] InvalidTrack),

    #[error("{0}")]
    DuplicateMarker(#[from] DuplicateMarker),

    #[error("die {0} has no marker on the track")]
    StrayDie(Marker),

    #[error("die {0} was rolled more than once this leg")]
    RolledTwice(Marker),

    #[error("die {0} shows a face outside {:?}", DICE_VALUES)]
    InvalidFace(Die),
}

/// Serialisable form of a [Leg]. Cells are listed first to last, each stack bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegSnapshot {
    pub track: Vec<Vec<Marker>>,
    pub pyramid: Vec<Marker>,
    #[serde(default)]
    pub tents: Vec<Die>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    roster: Roster,
    track: Track,
    pyramid: Pyramid,
    tents: Vec<Die>,
}
impl Leg {
    /// A leg in progress. Every die in the `pyramid` must belong to a marker on the `track`.
    pub fn new(track: Track, pyramid: Pyramid) -> Result<Self, InvalidLeg> {
        Self::with_tents(track, pyramid, vec![])
    }

    fn with_tents(track: Track, pyramid: Pyramid, tents: Vec<Die>) -> Result<Self, InvalidLeg> {
        let roster = track.roster()?;
        if let Some(&stray) = pyramid
            .markers()
            .iter()
            .chain(tents.iter().map(|die| &die.marker))
            .find(|marker| !roster.contains(marker))
        {
            return Err(InvalidLeg::StrayDie(stray));
        }
        if let Some(&die) = tents.iter().find(|die| !DICE_VALUES.contains(&die.value)) {
            return Err(InvalidLeg::InvalidFace(die));
        }
        for (index, die) in tents.iter().enumerate() {
            if pyramid.contains(&die.marker)
                || tents[..index].iter().any(|rolled| rolled.marker == die.marker)
            {
                return Err(InvalidLeg::RolledTwice(die.marker));
            }
        }
        Ok(Self {
            roster,
            track,
            pyramid,
            tents,
        })
    }

    /// The first leg of a race: all markers shuffled into the first cell and a full pyramid.
    pub fn starting(
        roster: &Roster,
        positions: usize,
        rand: &mut impl Rand,
    ) -> Result<Self, InvalidLeg> {
        let track = Track::starting(roster, positions, rand)?;
        Self::new(track, Pyramid::full(roster))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    pub fn tents(&self) -> &[Die] {
        &self.tents
    }

    pub fn is_finished(&self) -> bool {
        self.pyramid.is_empty()
    }

    /// Shakes one die out of the pyramid, moves its marker and places the die in the tents.
    /// Returns `None` once the leg is finished.
    pub fn roll(&mut self, rand: &mut impl Rand) -> Result<Option<Die>, InvalidMarker> {
        let Some(die) = self.pyramid.draw(rand) else {
            return Ok(None);
        };
        let target = self.track.advance(&die)?;
        debug!("rolled {die}, {} now at {target}", die.marker);
        self.tents.push(die);
        Ok(Some(die))
    }

    /// Starts the next leg from the current placement: every die returns to the pyramid and
    /// the tents are cleared.
    pub fn reset(&mut self) {
        self.pyramid = Pyramid::full(&self.roster);
        self.tents.clear();
    }

    pub fn analyse_exhaustive(&self, engine: &ExhaustiveEngine) -> Result<LegProbs, AnalysisError> {
        engine.analyse(&self.track, &self.pyramid)
    }

    pub fn analyse_sampled<R: Rand>(
        &self,
        engine: &mut MonteCarloEngine<R>,
    ) -> Result<LegProbs, AnalysisError> {
        engine.simulate(&self.track, &self.pyramid)
    }

    pub fn snapshot(&self) -> LegSnapshot {
        LegSnapshot {
            track: self.track.cells().to_vec(),
            pyramid: self.pyramid.markers().to_vec(),
            tents: self.tents.clone(),
        }
    }
}

impl TryFrom<LegSnapshot> for Leg {
    type Error = InvalidLeg;

    fn try_from(snapshot: LegSnapshot) -> Result<Self, Self::Error> {
        let track = Track::from_cells(snapshot.track)?;
        let pyramid = Pyramid::try_from(snapshot.pyramid)?;
        Self::with_tents(track, pyramid, snapshot.tents)
    }
}
