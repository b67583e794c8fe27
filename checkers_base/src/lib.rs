//! # Base types for checkers
//!
//! This is an auxiliary crate for `checkers`, which contains the board-independent value types:
//! squares, pieces, bitboards and direction geometry.
//!
//! Normally you don't want to use this crate directly. Use `checkers` instead, it re-exports
//! everything declared here.

pub mod bitboard;
pub mod bitboard_consts;
pub mod geometry;
pub mod types;
