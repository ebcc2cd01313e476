use std::str::FromStr;

use caravan::dice::Pyramid;
use caravan::mc;
use caravan::roster::Roster;
use caravan::track::{Track, TRACK_POSITIONS};
use criterion::{criterion_group, criterion_main, Criterion};
use tinyrand::{StdRand, Wyrand};
use tinyrand_alloc::Mock;

fn criterion_benchmark(c: &mut Criterion) {
    let roster = Roster::standard();
    let track = Track::starting(&roster, TRACK_POSITIONS, &mut StdRand::default()).unwrap();
    let pyramid = Pyramid::full(&roster);
    let mut working_track = track.clone();
    let mut working_pyramid = pyramid.clone();

    // sanity check
    let podium = mc::run_once(
        &mut working_track,
        &mut working_pyramid,
        &mut StdRand::default(),
    )
    .unwrap();
    assert!(podium.first.is_some());
    assert!(working_pyramid.is_empty());

    c.bench_function("cri_mc_wyrand", |b| {
        let mut rand = Wyrand::default();
        b.iter(|| {
            working_track.copy_from(&track);
            working_pyramid.copy_from(&pyramid);
            mc::run_once(&mut working_track, &mut working_pyramid, &mut rand).unwrap()
        });
    });

    c.bench_function("cri_mc_mock", |b| {
        let mut rand = Mock::default();
        b.iter(|| {
            working_track.copy_from(&track);
            working_pyramid.copy_from(&pyramid);
            mc::run_once(&mut working_track, &mut working_pyramid, &mut rand).unwrap()
        });
    });

    c.bench_function("cri_mc_analyse_1k", |b| {
        let pyramid = Pyramid::from_str("rbg").unwrap();
        let mut rand = Wyrand::default();
        b.iter(|| mc::analyse_sampled(&track, &pyramid, 1_000, &mut rand).unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
