//! Error Types for Tariff and Fee Arithmetic

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeeError>;

#[derive(Error, Debug)]
pub enum FeeError {
    #[error("Fee percentage {0} out of range (must be >= 0 and < 1)")]
    PercentOutOfRange(rust_decimal::Decimal),

    #[error("Fixed fee must not be negative: {0}")]
    NegativeFixedFee(rust_decimal::Decimal),

    #[error("Flat surcharge must not be negative: {0}")]
    NegativeSurcharge(rust_decimal::Decimal),
}
