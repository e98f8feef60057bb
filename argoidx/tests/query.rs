//! End-to-end pipeline tests against a fixture GDAC mirror and a
//! fixture line config directory.

use approx::assert_relative_eq;
use argoidx::{AnnotatedProfile, Backend, DateWindow, IndexError, ProfilesQuery, Variable};
use std::path::{Path, PathBuf};
use transect::{geodesic_km, LineSpec, Resources};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn mirror() -> PathBuf {
    data_dir().join("mirror")
}

fn resources() -> Resources {
    Resources::new(Some(data_dir().join("config")))
}

fn window() -> DateWindow {
    DateWindow::between("2019-01".parse().unwrap(), "2019-12".parse().unwrap())
}

fn run(backend: Backend, variable: Variable, radius_km: f64) -> Vec<AnnotatedProfile> {
    ProfilesQuery::builder()
        .line("LABSEA")
        .radius_km(radius_km)
        .window(window())
        .variable(variable)
        .backend(backend)
        .build()
        .unwrap()
        .run(&resources(), &mirror())
        .unwrap()
}

fn files(profiles: &[AnnotatedProfile]) -> Vec<&str> {
    profiles.iter().map(|p| p.record.file.as_str()).collect()
}

#[test]
fn test_core_pipeline() {
    let profiles = run(Backend::Index, Variable::Core, 50.0);

    assert_eq!(
        files(&profiles),
        vec![
            "aoml/4902911/profiles/R4902911_185.nc",
            "coriolis/6903240/profiles/R6903240_042.nc",
        ]
    );

    for profile in &profiles {
        assert!(profile.distance_from_line < 50.0);
    }

    // The first candidate sits next to the along-line origin.
    assert_eq!(profiles[0].nearest_station, "LS_01");
    assert!(profiles[0].distance_along_line.abs() < 1e-9);

    assert_eq!(profiles[1].nearest_station, "LS_02");
    assert!(profiles[1].distance_along_line > 100.0);
}

#[test]
fn test_nearest_station_distance_matches_annotation() {
    let line = LineSpec::from("labsea").load(&resources()).unwrap();

    for profile in run(Backend::Index, Variable::Core, 50.0) {
        let station = line
            .stations()
            .iter()
            .find(|s| s.station == profile.nearest_station)
            .unwrap();
        let to_station = geodesic_km(profile.record.point(), station.point());
        assert_relative_eq!(to_station, profile.distance_from_line);
        let from_origin = geodesic_km(line.origin().point(), station.point());
        assert_relative_eq!(from_origin, profile.distance_along_line);
    }
}

#[test]
fn test_backends_agree_and_are_idempotent() {
    let first = run(Backend::Index, Variable::Core, 50.0);
    let second = run(Backend::Index, Variable::Core, 50.0);
    let streamed = run(Backend::Search, Variable::Core, 50.0);

    assert_eq!(first, second);
    assert_eq!(first, streamed);
}

#[test]
fn test_tight_radius_yields_empty_table() {
    for backend in [Backend::Index, Backend::Search] {
        assert!(run(backend, Variable::Core, 0.5).is_empty());
    }
}

#[test]
fn test_null_island_profile_never_appears() {
    for backend in [Backend::Index, Backend::Search] {
        for radius_km in [5.0, 10_000.0] {
            let profiles = run(backend, Variable::Core, radius_km);
            assert!(!files(&profiles)
                .iter()
                .any(|f| f.contains("2902348")));
        }
    }
}

#[test]
fn test_bgc_variable_uses_synthetic_index() {
    for backend in [Backend::Index, Backend::Search] {
        let profiles = run(backend, Variable::from("DOXY"), 50.0);
        assert_eq!(
            files(&profiles),
            vec![
                "aoml/5906312/profiles/SD5906312_034.nc",
                "coriolis/6904113/profiles/SR6904113_005.nc",
            ]
        );
        for profile in &profiles {
            assert!(profile.record.has_parameter("DOXY"));
            assert!(profile.distance_from_line < 50.0);
        }
    }
}

#[test]
fn test_missing_mirror_errors() {
    let bad_mirror = data_dir().join("no-such-mirror");
    for backend in [Backend::Index, Backend::Search] {
        let err = ProfilesQuery::builder()
            .line("labsea")
            .radius_km(50.0)
            .window(window())
            .backend(backend)
            .build()
            .unwrap()
            .run(&resources(), &bad_mirror)
            .unwrap_err();
        assert!(matches!(err, IndexError::Path(_)));
    }
}

#[test]
fn test_point_line_input_is_rejected_before_search() {
    let err = ProfilesQuery::builder()
        .line(LineSpec::Points(vec![(60.0, -50.0), (61.0, -49.0)]))
        .radius_km(50.0)
        .window(window())
        .build()
        .unwrap()
        .run(&resources(), &mirror())
        .unwrap_err();
    assert!(matches!(
        err,
        IndexError::Transect(transect::TransectError::UnsupportedInput)
    ));
}
