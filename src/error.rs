use thiserror::Error;

use crate::types::Symbol;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("HamburgerLibrary: INVALID_PAIR_ID ({pair_id})")]
    InvalidPairId { pair_id: u64 },

    #[error("sort symbol does not match ({sort} not in {reserve0} / {reserve1})")]
    SortSymbolMismatch {
        sort: Symbol,
        reserve0: Symbol,
        reserve1: Symbol,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failures while reading host value types from their text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("name is longer than 13 characters")]
    NameTooLong,
    #[error("name contains an invalid character")]
    NameInvalidChar,
    #[error("13th character of a name must be one of '.12345abcdefghij'")]
    NameInvalidTail,
    #[error("symbol code must be 1 to 7 characters")]
    SymbolCodeLength,
    #[error("symbol code must be upper-case A-Z")]
    SymbolCodeInvalidChar,
    #[error("symbol precision must not exceed 18")]
    PrecisionTooLarge,
    #[error("malformed symbol, expected `<precision>,<CODE>`")]
    MalformedSymbol,
    #[error("malformed asset, expected `<amount> <CODE>`")]
    MalformedAsset,
    #[error("asset amount out of range")]
    AmountOutOfRange,
}
