//! Built-in starting boards (compile-time puzzle cards).

use crate::board::Board;
use crate::coord::Coord;

fn card(text: &str, port: Coord) -> Board {
    Board::from_text(text, port).expect("built-in card is well-formed")
}

/// A blockless two-wave channel. The target spans both waves, so either
/// wave drags the other; two slides bring the front home. Small enough for
/// exhaustive tests.
pub fn open_channel() -> Board {
    card(
        "-X--\n\
         -x--",
        Coord::new(1, 3),
    )
}

/// Three waves, one sheltered port slot: the bottom wave must slide aside
/// before the target can sail down.
pub fn first_squall() -> Board {
    card(
        "#X--\n\
         -x--\n\
         ##-#",
        Coord::new(2, 1),
    )
}

/// The target is walled in by blocks; no sequence of moves frees it.
pub fn landlocked() -> Board {
    card(
        "#X#\n\
         #x#\n\
         ###",
        Coord::new(2, 1),
    )
}

/// The eight-wave board from the original game card. Far too large to
/// enumerate in unit tests; useful as a realistic construction and
/// rendering fixture and for manual runs.
pub fn high_seas() -> Board {
    card(
        "--#-#-###\n\
         --#-###-#\n\
         --#-##-##\n\
         --#-#-###\n\
         --#-#-###\n\
         --#-#-#-#\n\
         -##X#--#-\n\
         ###x#-#--",
        Coord::new(7, 5),
    )
}

/// Returns a built-in card by name.
pub fn by_name(name: &str) -> Option<Board> {
    match name {
        "open_channel" => Some(open_channel()),
        "first_squall" => Some(first_squall()),
        "landlocked" => Some(landlocked()),
        "high_seas" => Some(high_seas()),
        _ => None,
    }
}

/// Names of all built-in cards.
pub fn names() -> &'static [&'static str] {
    &["open_channel", "first_squall", "landlocked", "high_seas"]
}
