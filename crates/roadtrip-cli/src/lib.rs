//! Road trip planner CLI library.
//!
//! This crate provides the command-line plumbing around `roadtrip-lib`:
//! argument value types, trip request parsing and report rendering.

pub mod output;
pub mod requests;
