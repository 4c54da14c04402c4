use rush_hour::rules::goal::is_goal;
use rush_hour::rules::movegen::{legal_moves, Move};
use rush_hour::scenarios;
use rush_hour::search::astar::{solve, SearchOutcome};
use rush_hour::search::bfs::{shortest_path, ReachableSpace};
use rush_hour::solution::verify_solution;

#[test]
fn lone_target_slides_right_twice() {
    let puzzle = scenarios::lone_target();
    let outcome = puzzle.solve().unwrap();
    assert_eq!(
        outcome.moves().unwrap(),
        &[Move::forward(0), Move::forward(0)]
    );
}

#[test]
fn single_blocker_moves_out_of_the_way_first() {
    let puzzle = scenarios::single_blocker();
    let outcome = puzzle.solve().unwrap();
    let moves = outcome.moves().unwrap();

    // Blocker-free from col 0 would take 4.
    assert_eq!(moves.len(), 5);
    verify_solution(&puzzle.configuration, moves).unwrap();

    let first_blocker_move = moves.iter().position(|m| m.vehicle == 1).unwrap();
    // The target's second forward step is the one that needs column 3 free.
    let second_target_step = moves
        .iter()
        .enumerate()
        .filter(|(_, m)| m.vehicle == 0 && m.delta == 1)
        .nth(1)
        .map(|(i, _)| i)
        .unwrap();
    assert!(first_blocker_move < second_target_step);
}

#[test]
fn boxed_in_target_is_exhausted_and_bfs_agrees() {
    let puzzle = scenarios::boxed_in();
    assert!(legal_moves(&puzzle.configuration).is_empty());

    let outcome = puzzle.solve().unwrap();
    match &outcome {
        SearchOutcome::Exhausted { stats } => {
            assert_eq!(stats.expansions, 1);
            assert_eq!(stats.generated, 0);
        }
        other => panic!("expected Exhausted, got {other:?}"),
    }
    assert!(outcome.moves().is_none());

    let bfs = shortest_path(&puzzle.configuration, puzzle.limits).unwrap();
    assert!(matches!(bfs, SearchOutcome::Exhausted { .. }));

    let space = ReachableSpace::explore(&puzzle.configuration, puzzle.limits).unwrap();
    assert_eq!(space.len(), 1);
    assert!(space.states.iter().all(|cfg| !is_goal(cfg)));
}

#[test]
fn jam_1_takes_16_moves() {
    let puzzle = scenarios::jam_1();
    puzzle.validate().unwrap();
    let outcome = puzzle.solve().unwrap();
    let moves = outcome.moves().unwrap();
    assert_eq!(moves.len(), 16);
    verify_solution(&puzzle.configuration, moves).unwrap();

    let bfs = shortest_path(&puzzle.configuration, puzzle.limits).unwrap();
    assert_eq!(bfs.moves().unwrap().len(), 16);
}

#[test]
fn dense_puzzle_from_file_takes_27_moves() {
    let puzzle = scenarios::by_name("dense_from_file").unwrap().unwrap();
    assert_eq!(puzzle.name, "rush_dense");
    assert_eq!(puzzle.configuration.len(), 11);

    let outcome = puzzle.solve().unwrap();
    assert_eq!(outcome.moves().unwrap().len(), 27);
    verify_solution(&puzzle.configuration, outcome.moves().unwrap()).unwrap();
}

#[test]
fn every_builtin_name_resolves() {
    for name in scenarios::names() {
        let puzzle = scenarios::by_name(name).unwrap().unwrap();
        puzzle.validate().unwrap();
    }
    assert!(scenarios::by_name("no_such_puzzle").unwrap().is_none());
}

#[test]
fn rerunning_gives_the_same_solution() {
    let puzzle = scenarios::jam_1();
    let a = solve(&puzzle.configuration, puzzle.limits).unwrap();
    let b = solve(&puzzle.configuration, puzzle.limits).unwrap();
    assert_eq!(a, b);
}
