//! Pitchrank Core Library
//!
//! Domain models and error types shared by the graph and web layers.
//! All I/O lives in `pitchrank-graph`; this crate is pure data.

pub mod error;
pub mod league;
pub mod matches;
pub mod ranking;
pub mod team;

pub use error::{PitchrankError, PitchrankResult};
