//! Wildcard search over a dictionary index

mod matcher;
mod matches;

pub use matcher::{Matcher, PARALLEL_THRESHOLD};
pub use matches::Matches;
