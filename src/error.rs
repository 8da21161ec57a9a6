use thiserror::Error;

/// Everything that can go wrong in response to a user action.
///
/// Each variant carries a user-facing message and is rendered as a modal
/// dialog by the UI layer. None of these are fatal to the process, and a
/// failed operation never mutates previously fetched data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Fetch was requested with an empty URL field. No request is made.
    #[error("Please enter a playlist URL")]
    EmptyInput,

    /// Any failure on the fetch path: missing credentials, token exchange,
    /// network, HTTP status, or a response that doesn't match the expected
    /// shape (item without a track, track without artists).
    #[error("Failed to fetch playlist data: {0}")]
    Api(String),

    /// Export was requested before any playlist was fetched.
    #[error("No playlist data to save")]
    NoData,

    /// The CSV file could not be written.
    #[error("Failed to save playlist: {0}")]
    Export(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Api(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Export(err.to_string())
    }
}
