// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod dedup;
mod progress;
mod runner;

pub use dedup::dedupe_by_link;
pub use progress::{ProgressTracker, RunStats};
pub use runner::{FetchOutcome, FetchRunner};
