use std::path::PathBuf;

use crate::feed::FeedError;
use crate::network::NetworkError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(#[source] NetworkError),
    #[error("failure loading gtfs sources: {source}")]
    FeedError {
        #[from]
        source: FeedError,
    },
    #[error("failure building network: {0}")]
    BuildError(#[source] NetworkError),
    #[error("failure writing network to '{}': {source}", path.display())]
    OutputError {
        path: PathBuf,
        source: std::io::Error,
    },
}
