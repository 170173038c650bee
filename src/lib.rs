//! A solver for the "Stormy Seas" sliding-block boat puzzle.
//!
//! The board is a stack of horizontally slidable rows (**waves**) carrying a
//! fixed pattern of blocks, with multi-cell **boats** overlaid on the gaps.
//! Sliding a wave rotates its pattern circularly by one slot and drags every
//! boat it carries; a boat spanning several waves couples those waves into a
//! rigid cluster that slides together. One boat is the **target**: the puzzle
//! is solved when its front segment reaches the **port** cell.
//!
//! The crate is organized as:
//! - [`board`]: the immutable board value, construction validation, and the
//!   textual board format,
//! - [`rules`]: single-move transforms (boat moves, wave moves with
//!   dependency-set propagation) and the candidate-state legality check,
//! - [`search`]: breadth-first shortest-path search and depth-first
//!   solvability analysis over the implicit move graph,
//! - [`solution`]: move paths and their compressed step notation,
//! - [`puzzle`]: the user-facing [`puzzle::Puzzle`] façade,
//! - [`cards`]: built-in starting boards.

pub mod board;
pub mod cards;
pub mod coord;
pub mod puzzle;
pub mod rules;
pub mod search;
pub mod solution;
