//! Axum extractors for request handling
//!
//! Body and query extractors that reject with the API's JSON error body.

mod query;
mod validated;

pub use query::{QueryParams, ValidatedQuery};
pub use validated::{JsonBody, ValidatedJson};
