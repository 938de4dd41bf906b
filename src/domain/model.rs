use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Decoded JSON document from one successful response.
pub type ParsedResult = serde_json::Value;

/// A validated http(s) endpoint to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    url: Url,
}

impl RequestTarget {
    pub fn parse(value: &str) -> Result<Self> {
        Ok(Self {
            url: validate_url(value)?,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// One HTTP response as seen by the fetcher. The body is only read for 2xx responses.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub status_text: String,
    pub body: Option<Vec<u8>>,
}

impl ResponseEnvelope {
    pub fn ok(status: u16, status_text: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: Some(body),
        }
    }

    pub fn failed(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elapsed {
    duration: Duration,
}

impl Elapsed {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn as_millis_f64(&self) -> f64 {
        self.duration.as_nanos() as f64 / 1_000_000.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} milliseconds ({} seconds)",
            self.as_millis_f64(),
            self.as_secs_f64()
        )
    }
}

/// Outcome of a wrapped operation together with how long it took to settle.
#[derive(Debug)]
pub struct Timed<T> {
    pub outcome: T,
    pub elapsed: Elapsed,
}
