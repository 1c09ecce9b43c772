//! Error handling for topcharts.
//!
//! One typed error enum covering every way a chart extraction run can
//! fail. All failures are fatal for the run: there is no partial-result
//! return and no per-market isolation, so callers get either a complete
//! table or the first error on the call chain.

use thiserror::Error;

/// Failure classes of the extraction pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The client-credentials exchange was rejected, or the token
    /// response could not be decoded. Raised before any extraction.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// No playlist matched the chart selection heuristics for a market.
    /// A missing chart corrupts downstream rank numbering, so this is a
    /// hard failure rather than a silent skip.
    #[error("no chart matched category `{category}` in market `{market}`")]
    LookupMiss { category: String, market: String },

    /// A response did not match the expected shape, e.g. an absent
    /// `followers.total`. No default is substituted.
    #[error("unexpected response shape from `{endpoint}`: {detail}")]
    SchemaMismatch { endpoint: String, detail: String },

    /// Network or HTTP-status failure from any call. Not retried.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// True for failures raised by the selection heuristics rather than
    /// by the transport or the catalog's data shape.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, Error::LookupMiss { .. })
    }
}
