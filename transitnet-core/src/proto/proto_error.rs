#[derive(thiserror::Error, Debug)]
pub enum ProtoError {
    #[error("failure decoding network message: {source}")]
    DecodeError {
        #[from]
        source: prost::DecodeError,
    },
}
