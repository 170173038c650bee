use stormy_seas::board::Board;
use stormy_seas::cards;
use stormy_seas::coord::Coord;
use stormy_seas::puzzle::Puzzle;
use stormy_seas::rules::{boat_move, wave_move, Move, Piece};
use stormy_seas::search::{ResourceLimits, SearchError, SolveOutcome};

fn replay(start: &Board, moves: &[Move]) -> Board {
    let mut board = start.clone();
    for mv in moves {
        board = match mv.piece {
            Piece::Wave(row) => wave_move(&board, row, mv.direction),
            Piece::Boat(id) => boat_move(&board, id, mv.direction),
        }
        .expect("replayed move is legal");
    }
    board
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn already_solved_board_yields_empty_solution() {
    let board = Board::from_text("-X--\n-x--", Coord::new(1, 1)).unwrap();
    let puzzle = Puzzle::new(board);

    let outcome = puzzle.solve().unwrap();
    let solution = outcome.solution().expect("solved");
    assert!(solution.is_empty());
    assert_eq!(solution.move_count(), 0);
    assert_eq!(solution.notation(), "");

    assert!(puzzle.is_solvable().unwrap());
}

#[test]
fn open_channel_takes_two_wave_slides() {
    init_tracing();
    let puzzle = Puzzle::new(cards::open_channel());
    let outcome = puzzle.solve().unwrap();
    let solution = outcome.solution().expect("solvable");

    // Two slides reach the port either way; Left is generated first, so
    // the wrap-around route breaks the tie.
    assert_eq!(solution.move_count(), 2);
    assert_eq!(solution.step_count(), 1);
    assert_eq!(solution.notation(), "1L2");
}

#[test]
fn first_squall_needs_a_slide_then_a_sail() {
    let puzzle = Puzzle::new(cards::first_squall());
    let outcome = puzzle.solve().unwrap();
    let solution = outcome.solution().expect("solvable");

    assert_eq!(solution.move_count(), 2);
    assert_eq!(solution.step_count(), 2);
    assert_eq!(solution.notation(), "3L1, XD1");
}

#[test]
fn solution_moves_replay_to_a_solved_board() {
    let puzzle = Puzzle::new(cards::first_squall());
    let solution = puzzle.solve().unwrap().solution().cloned().expect("solvable");
    assert!(replay(puzzle.board(), solution.moves()).is_solved());
}

#[test]
fn all_solutions_covers_every_docking_configuration() {
    // Four solved states exist: the top wave has four phases and decouples
    // from the target once it has sailed below, while the bottom wave's
    // single gap must sit under the port.
    let puzzle = Puzzle::new(cards::first_squall());
    let solutions = puzzle.all_solutions().unwrap();

    assert_eq!(solutions.len(), 4);
    let lengths: Vec<usize> = solutions.iter().map(|s| s.move_count()).collect();
    assert_eq!(lengths, vec![2, 3, 4, 5]);
    assert_eq!(solutions[0].notation(), "3L1, XD1");
    assert_eq!(solutions[1].notation(), "1R1, XD1, 2L1");

    let mut finals = std::collections::BTreeSet::new();
    for solution in &solutions {
        let board = replay(puzzle.board(), solution.moves());
        assert!(board.is_solved());
        assert!(finals.insert(board.canonical_encoding()));
    }
}

#[test]
fn all_solutions_matches_solve_when_one_docking_exists() {
    // Both wave patterns are empty, so the two equally short routes meet in
    // the same solved state and only one path is reported.
    let puzzle = Puzzle::new(cards::open_channel());
    let solutions = puzzle.all_solutions().unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].notation(), "1L2");
}

#[test]
fn all_solutions_of_an_unsolvable_board_is_empty() {
    assert!(Puzzle::new(cards::landlocked()).all_solutions().unwrap().is_empty());
}

#[test]
fn all_solutions_of_a_solved_board_is_the_empty_solution() {
    let board = Board::from_text("-X--\n-x--", Coord::new(1, 1)).unwrap();
    let solutions = Puzzle::new(board).all_solutions().unwrap();
    assert_eq!(solutions.len(), 1);
    assert!(solutions[0].is_empty());
}

#[test]
fn landlocked_board_is_unsolvable() {
    let puzzle = Puzzle::new(cards::landlocked());
    assert!(puzzle.solve().unwrap().is_unsolvable());
    assert!(!puzzle.is_solvable().unwrap());
}

#[test]
fn reachability_agrees_with_the_full_search() {
    for board in [cards::open_channel(), cards::first_squall()] {
        let puzzle = Puzzle::new(board);
        assert!(matches!(puzzle.solve().unwrap(), SolveOutcome::Solved(_)));
        assert!(puzzle.is_solvable().unwrap());
    }
}

#[test]
fn repeated_solves_are_identical() {
    let puzzle = Puzzle::new(cards::first_squall());
    let first = puzzle.solve().unwrap().solution().cloned().expect("solvable");
    let second = puzzle.solve().unwrap().solution().cloned().expect("solvable");
    assert_eq!(first.moves(), second.moves());
    assert_eq!(first.notation(), second.notation());
}

#[test]
fn state_budget_aborts_the_search() {
    let limits = ResourceLimits {
        max_states: 2,
        ..ResourceLimits::default()
    };
    let puzzle = Puzzle::with_limits(cards::first_squall(), limits);

    let err = puzzle.solve().unwrap_err();
    match err {
        SearchError::LimitExceeded { metric, limit, observed, .. } => {
            assert_eq!(metric, "states");
            assert_eq!(limit, 2);
            assert!(observed > limit);
        }
        other => panic!("expected a state-limit abort, got {other}"),
    }
}

#[test]
fn step_budget_aborts_the_search() {
    let limits = ResourceLimits {
        max_runtime_steps: 1,
        ..ResourceLimits::default()
    };
    let puzzle = Puzzle::with_limits(cards::open_channel(), limits);

    let err = puzzle.solve().unwrap_err();
    assert!(matches!(
        err,
        SearchError::LimitExceeded {
            metric: "runtime_steps",
            ..
        }
    ));

    let err = puzzle.is_solvable().unwrap_err();
    assert!(matches!(err, SearchError::LimitExceeded { .. }));
}

#[test]
fn edge_budget_aborts_the_search() {
    let limits = ResourceLimits {
        max_edges: 3,
        ..ResourceLimits::default()
    };
    let puzzle = Puzzle::with_limits(cards::first_squall(), limits);

    let err = puzzle.solve().unwrap_err();
    assert!(matches!(
        err,
        SearchError::LimitExceeded { metric: "edges", .. }
    ));
}

#[test]
fn abort_error_carries_the_running_counts() {
    let limits = ResourceLimits {
        max_states: 2,
        ..ResourceLimits::default()
    };
    let err = Puzzle::with_limits(cards::first_squall(), limits)
        .solve()
        .unwrap_err();

    let SearchError::LimitExceeded { counts, .. } = err else {
        panic!("expected a limit abort");
    };
    assert!(counts.states >= 3);
    assert!(counts.edges > 0);
    // The message is self-contained for logs.
    let rendered = SearchError::LimitExceeded {
        stage: "dedup_index",
        metric: "states",
        limit: 2,
        observed: 3,
        counts,
    }
    .to_string();
    assert!(rendered.contains("states"));
    assert!(rendered.contains("limit=2"));
}

#[test]
fn large_card_solves_within_default_budgets() {
    init_tracing();
    let puzzle = Puzzle::new(cards::high_seas());
    let outcome = puzzle.solve().unwrap();
    let solution = outcome.solution().expect("the shipped card is solvable");
    assert!(!solution.is_empty());
    assert_eq!(solution.expand_steps(), solution.moves());
}
