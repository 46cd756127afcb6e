//! Aggregation engine: the single pass that turns a game history into a
//! statistics snapshot.

mod aggregator;
mod pgn;
mod types;

pub(crate) use aggregator::{AggregateOptions, aggregate};
pub(crate) use types::{GameRecord, StatsSnapshot};
