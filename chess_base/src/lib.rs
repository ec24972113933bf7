//! # Base types for chessrules
//!
//! This is an auxiliary crate for `chessrules`, which contains the value types that don't need a board:
//! colors, pieces and positions, plus the fixed geometry used by move generation.
//!
//! Normally you don't want to use this crate directly. Use `chessrules` instead, which re-exports
//! everything declared here.

pub mod geometry;
pub mod types;
