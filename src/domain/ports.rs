use crate::domain::model::{RequestTarget, ResponseEnvelope};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Instant;

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues a GET. Non-2xx statuses are returned as envelopes, not errors.
    async fn get(&self, target: &RequestTarget) -> Result<ResponseEnvelope>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub trait TargetProvider: Send + Sync {
    fn targets(&self) -> &[&'static str];
}
