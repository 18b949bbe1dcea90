//! Error types for the journal.

use thiserror::Error;

/// Main error type for record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Allocation failed while growing to capacity {requested}")]
    Allocation { requested: usize },

    #[error("Index {index} out of range (size {size})")]
    OutOfRange { index: usize, size: usize },
}

/// Rejection reason for a candidate record field.
///
/// The `Display` text is what the shell prints when re-prompting, so each
/// message is phrased for the person typing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("shop name cannot be empty")]
    ShopEmpty,

    #[error("shop name is longer than {max_chars} characters")]
    ShopTooLong { max_chars: usize },

    #[error("discount must be a whole number")]
    DiscountNotInteger,

    #[error("discount must be between 0 and 100")]
    DiscountOutOfRange,

    #[error("expiry must be a date shaped YYYY-MM-DD")]
    ExpiryMalformed,

    #[error("expiry year must be {min_year} or later")]
    ExpiryYearTooEarly { min_year: u16 },

    #[error("expiry month {month} is not a calendar month")]
    ExpiryMonthInvalid { month: u8 },

    #[error("expiry day {day} does not exist in that month")]
    ExpiryDayInvalid { day: u8 },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
