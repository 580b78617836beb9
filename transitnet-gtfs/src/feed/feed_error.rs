#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("Failed to parse gtfs source '{path}' into `Gtfs` struct: {message}")]
    BundleReadError { path: String, message: String },
    #[error("gtfs source path is not valid UTF-8: {0}")]
    InvalidPathError(String),
    #[error("malformed gtfs source '{feed}': {message}")]
    MalformedFeedError { feed: String, message: String },
    #[error("failure building feed loading thread pool: {0}")]
    ThreadPoolError(String),
    #[error("{0}")]
    InternalError(String),
}
