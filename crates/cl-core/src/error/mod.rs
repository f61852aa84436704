use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid claim: {claim}: {message}")]
    InvalidClaim {
        claim: &'static str,
        message: String,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
