use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    /// A brand name compiled into an invalid pattern. Plain-string brand
    /// lists should never hit this; treated as a fatal configuration error.
    #[error("failed to compile pattern for brand '{brand}': {source}")]
    Pattern {
        brand: String,
        #[source]
        source: regex::Error,
    },
}
