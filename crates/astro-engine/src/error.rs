//! Error Types for the Astro Engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AstroError>;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Invalid birth date: {0}")]
    InvalidDate(String),

    #[error("Invalid birth time: {0}")]
    InvalidTime(String),

    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),

    #[error("Market data error: {0}")]
    Market(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AstroError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidDate(raw) => format!(
                "We couldn't read the birth date '{raw}'. Please use YYYY-MM-DD or DD/MM/YYYY."
            ),
            Self::InvalidTime(raw) => {
                format!("We couldn't read the birth time '{raw}'. Please use HH:MM.")
            }
            Self::UnknownSign(name) => format!("'{name}' is not one of the twelve zodiac signs."),
            Self::Market(_) => "Live market data is unavailable right now.".into(),
            _ => "An unexpected error occurred.".into(),
        }
    }
}
