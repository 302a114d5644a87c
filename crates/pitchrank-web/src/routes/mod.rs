//! Route handlers.

pub mod catalog;
pub mod dashboard;
pub mod matches;
pub mod ranking;
pub mod stats;
