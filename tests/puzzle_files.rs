use std::fs;

use rush_hour::core::vehicle::{Orientation, Vehicle};
use rush_hour::scenario::{Puzzle, ResourceLimits, SearchError, SolverConfig};
use rush_hour::scenarios;
use rush_hour::scenarios::file::load_puzzle;

#[test]
fn tuple_text_export_loads_with_first_vehicle_as_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blocker.txt");
    fs::write(&path, "cars = [\n  (\"H\", 2, 2, 0),\n  (\"V\", 2, 1, 3)\n]\n").unwrap();

    let puzzle = load_puzzle(&path).unwrap();
    assert_eq!(puzzle.name, "blocker");
    assert_eq!(
        puzzle.configuration,
        scenarios::single_blocker().configuration
    );
    assert_eq!(puzzle.configuration.target_index(), Some(0));
    assert_eq!(puzzle.solve().unwrap().moves().unwrap().len(), 5);
}

#[test]
fn json_puzzle_loads_and_defaults_limits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vertical.json");
    let json = r#"{
        "name": "vertical_exit",
        "vehicles": [
            {"orientation": "V", "length": 2, "row": 1, "col": 4, "is_target": true},
            {"orientation": "H", "length": 3, "row": 0, "col": 0}
        ]
    }"#;
    fs::write(&path, json).unwrap();

    let puzzle = load_puzzle(&path).unwrap();
    assert_eq!(puzzle.name, "vertical_exit");
    assert_eq!(puzzle.limits, ResourceLimits::default());
    assert_eq!(puzzle.configuration.vehicle(0).orientation, Orientation::Vertical);
    assert!(!puzzle.configuration.vehicle(1).is_target);
    assert_eq!(puzzle.solve().unwrap().moves().unwrap().len(), 3);
}

#[test]
fn puzzle_json_roundtrips() {
    let puzzle = scenarios::jam_1();
    let text = serde_json::to_string(&puzzle).unwrap();
    let back: Puzzle = serde_json::from_str(&text).unwrap();
    assert_eq!(back, puzzle);
}

#[test]
fn overlapping_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overlap.txt");
    fs::write(&path, "[(\"H\", 2, 2, 0), (\"V\", 3, 0, 1)]").unwrap();
    assert!(matches!(
        load_puzzle(&path),
        Err(SearchError::InvalidPuzzle { .. })
    ));
}

#[test]
fn json_without_target_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("untargeted.json");
    let puzzle = Puzzle::new("untargeted", vec![Vehicle::horizontal(2, 2, 0)]);
    fs::write(&path, serde_json::to_string(&puzzle).unwrap()).unwrap();
    assert!(matches!(
        load_puzzle(&path),
        Err(SearchError::MissingTarget)
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_puzzle(&dir.path().join("nope.txt")),
        Err(SearchError::Io { .. })
    ));
}

#[test]
fn solver_config_loads_partial_limits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.toml");
    fs::write(&path, "[limits]\nmax_expansions = 42\n").unwrap();

    let config = SolverConfig::load(&path).unwrap();
    assert_eq!(config.limits.max_expansions, 42);
    assert_eq!(config.limits.max_states, ResourceLimits::default().max_states);

    assert_eq!(SolverConfig::from_toml_str("").unwrap(), SolverConfig::default());
    assert!(matches!(
        SolverConfig::from_toml_str("[limits]\nmax_expansions = 0\n"),
        Err(SearchError::Config(_))
    ));
    assert!(matches!(
        SolverConfig::from_toml_str("[search]\nmax_nodes = 3\n"),
        Err(SearchError::Config(_))
    ));
    assert!(matches!(
        SolverConfig::from_toml_str("[limits]\nmax_expansion = 5\n"),
        Err(SearchError::Config(_))
    ));
}
