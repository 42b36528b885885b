use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("serialization error {0}")]
    Serialization(#[from] serde_json::Error),
}
