use meisterscore::config::{School, SchoolConfig, SubjectRule};
use meisterscore::record::{ApplicantCategory, Track};
use meisterscore::scorer::grades::TokenMatching;
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

#[rstest]
#[case(School::Agriculture, Track::General, 40.0)]
#[case(School::Agriculture, Track::Special, 30.0)]
#[case(School::Il, Track::General, 100.0)]
#[case(School::Il, Track::Special, 100.0)]
#[case(School::Software, Track::General, 100.0)]
#[case(School::Semiconductor, Track::General, 170.0)]
fn total_maxima_match_the_published_sheets(
    #[case] school: School,
    #[case] track: Track,
    #[case] expected: f64,
) {
    let config = school.config();
    let max = config
        .track_params(track)
        .total_max(ApplicantCategory::Enrolled);
    assert_eq!(max, expected);
}

#[rstest]
#[case(School::Agriculture, 40.0)]
#[case(School::Il, 100.0)]
#[case(School::Software, 100.0)]
#[case(School::Semiconductor, 100.0)]
fn equivalency_maxima_are_course_only(#[case] school: School, #[case] expected: f64) {
    let config = school.config();
    let max = config
        .track_params(Track::General)
        .total_max(ApplicantCategory::Equivalency);
    assert_eq!(max, expected);
}

#[test]
fn presets_pin_their_matching_defaults() {
    assert_eq!(School::Agriculture.config().matching, TokenMatching::Strict);
    assert_eq!(School::Il.config().matching, TokenMatching::Strict);
    assert_eq!(School::Software.config().matching, TokenMatching::Lenient);
    assert_eq!(
        School::Semiconductor.config().matching,
        TokenMatching::Lenient
    );
}

#[test]
fn software_roster_has_eight_subjects() {
    let config = School::Software.config();
    match &config.subject_rule {
        SubjectRule::FixedRoster { subjects } => {
            assert_eq!(subjects.len(), 8);
            let weight_sum: f64 = subjects.iter().map(|s| s.weight).sum();
            assert_eq!(weight_sum, 11.0);
        }
        other => panic!("expected a fixed roster, got {:?}", other),
    }
}

#[test]
fn single_track_schools_fall_back_to_their_only_block() {
    let config = School::Semiconductor.config();
    let general = config.track_params(Track::General);
    let special = config.track_params(Track::Special);
    assert_eq!(general, special);
}

#[test]
fn presets_round_trip_through_json() {
    for school in [
        School::Agriculture,
        School::Il,
        School::Software,
        School::Semiconductor,
    ] {
        let config = school.config();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: SchoolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

#[test]
fn config_override_loads_from_file() {
    let mut config = School::Il.config();
    config.display_name = "테스트고".into();
    config.tracks[0].target_sum = 15.0;

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = SchoolConfig::load_from_file(file.path()).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.tracks[0].target_sum, 15.0);
}

#[test]
fn config_without_tracks_is_rejected() {
    let mut config = School::Il.config();
    config.tracks.clear();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

    let err = SchoolConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn missing_config_file_surfaces_an_io_error() {
    let err = SchoolConfig::load_from_file("/no/such/config.json").unwrap_err();
    assert!(err.to_string().contains("IO Error"));
}
