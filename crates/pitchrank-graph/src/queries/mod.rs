//! Read queries behind the REST endpoints.
//!
//! Every value reaches Cypher through a bound parameter.

pub mod catalog;
pub mod matches;
pub mod stats;
