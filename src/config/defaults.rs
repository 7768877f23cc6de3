use crate::config::{self};

pub const TIME_LIMIT: Option<std::time::Duration> = None;
pub const ROUND_LIMIT: Option<config::RoundCount> = None;
pub const CLAUSE_LIMIT: Option<config::ClauseCount> = None;
pub const WORKERS: config::WorkerCount = 1;
