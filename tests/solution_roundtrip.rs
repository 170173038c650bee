use stormy_seas::board::BoatId;
use stormy_seas::cards;
use stormy_seas::coord::Direction;
use stormy_seas::puzzle::Puzzle;
use stormy_seas::rules::{Move, Piece};
use stormy_seas::solution::{Solution, Step};

fn wave(row: usize, direction: Direction) -> Move {
    Move::new(Piece::Wave(row), direction)
}

fn boat(ch: char, direction: Direction) -> Move {
    Move::new(Piece::Boat(BoatId::new(ch).unwrap()), direction)
}

#[test]
fn consecutive_runs_compress_into_steps() {
    let moves = vec![
        wave(0, Direction::Left),
        wave(0, Direction::Left),
        boat('X', Direction::Up),
        boat('X', Direction::Up),
        boat('X', Direction::Up),
        wave(0, Direction::Left),
    ];
    let solution = Solution::from_moves(moves.clone());

    assert_eq!(solution.move_count(), 6);
    assert_eq!(solution.step_count(), 3);
    assert_eq!(solution.notation(), "1L2, XU3, 1L1");
    assert_eq!(solution.expand_steps(), moves);
}

#[test]
fn direction_change_starts_a_new_step() {
    let solution = Solution::from_moves(vec![
        boat('X', Direction::Up),
        boat('X', Direction::Down),
    ]);
    assert_eq!(solution.step_count(), 2);
    assert_eq!(solution.notation(), "XU1, XD1");
}

#[test]
fn piece_change_starts_a_new_step() {
    let solution = Solution::from_moves(vec![
        wave(0, Direction::Left),
        wave(1, Direction::Left),
    ]);
    assert_eq!(solution.step_count(), 2);
    assert_eq!(solution.notation(), "1L1, 2L1");
}

#[test]
fn empty_solution_has_empty_notation() {
    let solution = Solution::from_moves(Vec::new());
    assert!(solution.is_empty());
    assert_eq!(solution.step_count(), 0);
    assert_eq!(solution.notation(), "");
    assert!(solution.expand_steps().is_empty());
}

#[test]
fn step_notation_prints_piece_direction_distance() {
    let step = Step {
        piece: Piece::Wave(3),
        direction: Direction::Right,
        distance: 2,
    };
    assert_eq!(step.notation(), "4R2");
    assert_eq!(step.to_string(), "4R2");

    let step = Step {
        piece: Piece::Boat(BoatId::TARGET),
        direction: Direction::Down,
        distance: 1,
    };
    assert_eq!(step.notation(), "XD1");
}

#[test]
fn solver_output_expands_back_to_its_moves() {
    let puzzle = Puzzle::new(cards::first_squall());
    let solution = puzzle.solve().unwrap().solution().cloned().expect("solvable");
    assert_eq!(solution.expand_steps(), solution.moves());
    assert_eq!(solution.to_string(), solution.notation());
}

#[test]
fn solutions_round_trip_through_json() {
    let solution = Solution::from_moves(vec![
        wave(2, Direction::Left),
        boat('X', Direction::Down),
    ]);

    let json = serde_json::to_string(&solution).unwrap();
    let back: Solution = serde_json::from_str(&json).unwrap();
    assert_eq!(back, solution);
    assert_eq!(back.notation(), "3L1, XD1");
}
