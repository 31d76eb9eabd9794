use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("maid list is empty, nothing to assign rooms to")]
    NoMaids,

    #[error("excluded room '{token}' is not a valid room number")]
    InvalidRoomNumber {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("store unavailable: {message}")]
    StoreUnavailable { message: String },
}

pub type Result<T> = std::result::Result<T, RotaError>;
