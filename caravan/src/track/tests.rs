use super::*;
use crate::dice::Pyramid;
use crate::testing::{die, m, track_of};
use std::str::FromStr;
use tinyrand::{Seeded, StdRand};

fn sorted_markers(track: &Track) -> Vec<Marker> {
    let mut markers: Vec<_> = track.markers().copied().collect();
    markers.sort();
    markers
}

#[test]
fn advance_carries_stack() {
    let mut track = track_of(&["", "", "rb", "", "", ""]);
    assert_eq!(
        Podium {
            first: Some(m('b')),
            second: Some(m('r'))
        },
        track.podium()
    );

    assert_eq!(Ok(4), track.advance(&die('r', 2)));
    assert_eq!(Some(&[][..]), track.cell(2));
    assert_eq!(Some(&[m('r'), m('b')][..]), track.cell(4));
    assert_eq!(
        Podium {
            first: Some(m('b')),
            second: Some(m('r'))
        },
        track.podium()
    );
}

#[test]
fn advance_leaves_lower_stack() {
    let mut track = track_of(&["gry", "b", "", ""]);
    assert_eq!(Ok(1), track.advance(&die('r', 1)));
    assert_eq!(Some(&[m('g')][..]), track.cell(0));
    assert_eq!(Some(&[m('b'), m('r'), m('y')][..]), track.cell(1));
}

#[test]
fn advance_top_only() {
    let mut track = track_of(&["gry", "", "", ""]);
    assert_eq!(Ok(3), track.advance(&die('y', 3)));
    assert_eq!(Some(&[m('g'), m('r')][..]), track.cell(0));
    assert_eq!(Some(&[m('y')][..]), track.cell(3));
}

#[test]
fn advance_clamps_to_last_cell() {
    let mut track = track_of(&["", "rb", "", "g"]);
    assert_eq!(Ok(3), track.advance(&die('r', 3)));
    assert_eq!(Some(&[m('g'), m('r'), m('b')][..]), track.cell(3));
    assert_eq!(3, track.count_markers());
}

#[test]
fn advance_at_last_cell_reappends() {
    let mut track = track_of(&["", "y", "gr"]);
    assert_eq!(Ok(2), track.advance(&die('g', 1)));
    assert_eq!(Some(&[m('g'), m('r')][..]), track.cell(2));
    assert_eq!(Ok(2), track.advance(&die('r', 3)));
    assert_eq!(Some(&[m('g'), m('r')][..]), track.cell(2));
    assert_eq!(3, track.count_markers());
}

#[test]
fn consecutive_clamps_stack_in_insertion_order() {
    let mut track = track_of(&["", "r", "b", "", ""]);
    assert_eq!(Ok(4), track.advance(&die('r', 3)));
    assert_eq!(Ok(4), track.advance(&die('b', 3)));
    assert_eq!(Some(&[m('r'), m('b')][..]), track.cell(4));
    assert_eq!(
        Podium {
            first: Some(m('b')),
            second: Some(m('r'))
        },
        track.podium()
    );

    let mut track = track_of(&["", "r", "b", "", ""]);
    assert_eq!(Ok(4), track.advance(&die('b', 3)));
    assert_eq!(Ok(4), track.advance(&die('r', 3)));
    assert_eq!(Some(&[m('b'), m('r')][..]), track.cell(4));
}

#[test]
fn advance_invalid_marker() {
    let mut track = track_of(&["rb", "", ""]);
    let before = track.clone();
    assert_eq!(
        Err(InvalidMarker { marker: m('g') }),
        track.advance(&die('g', 1))
    );
    assert_eq!(before, track);
    assert_eq!(
        "marker g is not on the track",
        track.advance(&die('g', 1)).unwrap_err().to_string()
    );
}

#[test]
fn advanced_leaves_original() {
    let track = track_of(&["rb", "", ""]);
    let moved = track.advanced(&die('b', 2)).unwrap();
    assert_eq!(Some(&[m('r'), m('b')][..]), track.cell(0));
    assert_eq!(Some(&[m('b')][..]), moved.cell(2));
}

#[test]
fn moves_conserve_markers() {
    let mut rand = StdRand::seed(11);
    let mut track = Track::starting(&Roster::standard(), TRACK_POSITIONS, &mut rand).unwrap();
    let expected = sorted_markers(&track);
    for _ in 0..20 {
        let mut pyramid = Pyramid::full(&Roster::standard());
        while let Some(die) = pyramid.draw(&mut rand) {
            track.advance(&die).unwrap();
            assert_eq!(expected, sorted_markers(&track));
            assert!(track.roster().is_ok());
        }
    }
}

#[test]
fn podium_counts() {
    assert_eq!(Podium::default(), track_of(&["", "", ""]).podium());
    assert_eq!(
        Podium {
            first: Some(m('g')),
            second: None
        },
        track_of(&["", "g", ""]).podium()
    );
    assert_eq!(
        Podium {
            first: Some(m('y')),
            second: Some(m('g'))
        },
        track_of(&["g", "", "y"]).podium()
    );
    assert_eq!(
        Podium {
            first: Some(m('p')),
            second: Some(m('y'))
        },
        track_of(&["rb", "gyp", ""]).podium()
    );
}

#[test]
fn podium_display() {
    assert_eq!("(b, r)", track_of(&["rb"]).podium().to_string());
    assert_eq!("(r, -)", track_of(&["r"]).podium().to_string());
}

#[test]
fn from_cells_invalid() {
    assert_eq!(Err(InvalidTrack::NoPositions), Track::from_cells(vec![]));
    assert_eq!(
        "duplicate marker r at index 2, previously at 0",
        Track::from_cells(vec![vec![m('r'), m('b')], vec![m('r')]])
            .unwrap_err()
            .to_string()
    );
}

#[test]
fn empty_and_default() {
    assert_eq!(Err(InvalidTrack::NoPositions), Track::empty(0));
    assert_eq!(TRACK_POSITIONS, Track::default().positions());
    assert_eq!(0, Track::empty(3).unwrap().count_markers());
}

#[test]
fn starting_places_all_in_first_cell() {
    let roster = Roster::from_str("rbg").unwrap();
    let track = Track::starting(&roster, 8, &mut StdRand::seed(5)).unwrap();
    assert_eq!(8, track.positions());
    assert_eq!(3, track.cell(0).unwrap().len());
    assert_eq!(3, track.count_markers());
    assert_eq!(vec![m('b'), m('g'), m('r')], sorted_markers(&track));
}

#[test]
fn locate() {
    let track = track_of(&["", "rb", "g"]);
    assert_eq!(Some((1, 0)), track.locate(&m('r')));
    assert_eq!(Some((1, 1)), track.locate(&m('b')));
    assert_eq!(Some((2, 0)), track.locate(&m('g')));
    assert_eq!(None, track.locate(&m('y')));
}

#[test]
fn display() {
    assert_eq!("rb|.|g|.", track_of(&["rb", "", "g", ""]).to_string());
}
