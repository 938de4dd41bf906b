pub mod fetcher;
pub mod presenter;
pub mod reporter;

pub use crate::domain::model::{Elapsed, ParsedResult, RequestTarget, ResponseEnvelope, Timed};
pub use crate::domain::ports::{Clock, HttpClient, TargetProvider};
pub use crate::utils::error::Result;
