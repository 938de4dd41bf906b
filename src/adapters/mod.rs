// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod http;

pub use clock::MonotonicClock;
pub use http::ReqwestHttpClient;
