pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{DefaultTargets, DEFAULT_TARGETS};

pub use adapters::{MonotonicClock, ReqwestHttpClient};
pub use core::{fetcher::BatchFetcher, reporter::ElapsedTimeReporter};
pub use utils::error::{FetchError, Result};
