use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid account: {message}")]
    InvalidAccount {
        message: String,
    },

    #[error("invalid transaction: {message}")]
    InvalidTransaction {
        message: String,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("unknown account: {id}")]
    UnknownAccount {
        id: String,
    },

    #[error("unknown transaction: {id}")]
    UnknownTransaction {
        id: String,
    },

    #[error("invalid timeframe: {months} months")]
    InvalidTimeframe {
        months: u32,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
