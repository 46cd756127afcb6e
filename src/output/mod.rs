mod histogram;
mod json;
mod recommend;
mod report;

pub(crate) use histogram::weekday_histogram;
pub(crate) use json::save_snapshot;
pub(crate) use recommend::recommendations;
pub(crate) use report::{build_report, save_report};
