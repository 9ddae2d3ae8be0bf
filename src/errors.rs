use thiserror::Error;

use crate::decimal::Rate;

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("term must be at least one month")]
    ZeroTerm,

    #[error("amortization denominator is zero: rate {rate} over {term_months} months")]
    DegenerateDenominator {
        rate: Rate,
        term_months: u32,
    },
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
