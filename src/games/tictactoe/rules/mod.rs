//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), kept apart from board
//! storage and turn sequencing.

pub mod win;

pub use win::evaluate;
