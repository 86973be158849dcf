//! Offline developer tools for a bitboard chess engine: an ASCII bitboard
//! visualizer, a packed-move decoder and a one-shot generator for the
//! per-square edge-distance table that bounds sliding-piece ray casts.
//!
//! None of this is the engine itself. The library exposes the data
//! encodings the tools (and the engine consuming their output) agree on:
//! the packed move representation, the edge-distance table and the square
//! coordinate mapping underneath both. Move generation, legality checking
//! and board state live elsewhere.

pub mod bitboard;
pub mod core;
pub mod distance;
pub mod generated;
pub mod moves;
