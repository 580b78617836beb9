#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("stop '{stop_id}' of gtfs source '{feed}' has no location and no located parent station")]
    MissingStopLocation { feed: String, stop_id: String },
    #[error("invalid network build configuration: {0}")]
    InvalidConfiguration(String),
    #[error("{0}")]
    InternalError(String),
}
