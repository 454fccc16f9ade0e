//! Host value types consumed by the library: account names, symbols,
//! assets and timestamps.
//!
//! The in-memory layouts follow the host chain so table keys and scopes
//! line up with what the AMM and mining contracts store:
//! - `Name` is base-32 packed into a u64 (12 chars of 5 bits + 1 char of 4 bits)
//! - `SymbolCode` is up to 7 ASCII letters packed little-endian into a u64
//! - `Symbol` packs as `code << 8 | precision`

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

const NAME_CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";
const NAME_MAX_LEN: usize = 13;

const SYMBOL_CODE_MAX_LEN: usize = 7;
const MAX_PRECISION: u8 = 18;

/// Largest absolute amount an asset may carry.
pub const MAX_ASSET_AMOUNT: i64 = (1 << 62) - 1;

const fn name_char_to_value(c: u8) -> Option<u64> {
    match c {
        b'.' => Some(0),
        b'1'..=b'5' => Some((c - b'1') as u64 + 1),
        b'a'..=b'z' => Some((c - b'a') as u64 + 6),
        _ => None,
    }
}

const fn encode_name(s: &[u8]) -> Result<u64, ParseError> {
    if s.len() > NAME_MAX_LEN {
        return Err(ParseError::NameTooLong);
    }

    let mut value = 0u64;
    let mut i = 0;
    while i < s.len() {
        let c = match name_char_to_value(s[i]) {
            Some(c) => c,
            None => return Err(ParseError::NameInvalidChar),
        };

        if i < NAME_MAX_LEN - 1 {
            value |= (c & 0x1f) << (64 - 5 * (i as u32 + 1));
        } else {
            if c > 0x0f {
                return Err(ParseError::NameInvalidTail);
            }
            value |= c;
        }
        i += 1;
    }

    Ok(value)
}

const fn encode_symbol_code(s: &[u8]) -> Result<u64, ParseError> {
    if s.is_empty() || s.len() > SYMBOL_CODE_MAX_LEN {
        return Err(ParseError::SymbolCodeLength);
    }

    let mut value = 0u64;
    let mut i = s.len();
    while i > 0 {
        i -= 1;
        if !s[i].is_ascii_uppercase() {
            return Err(ParseError::SymbolCodeInvalidChar);
        }
        value <<= 8;
        value |= s[i] as u64;
    }

    Ok(value)
}

/// Account, table or scope name.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(u64);

impl Name {
    /// Builds a name from a literal, panicking on invalid input. Intended for
    /// constants; use `str::parse` for untrusted input.
    pub const fn new(s: &str) -> Self {
        match encode_name(s.as_bytes()) {
            Ok(value) => Name(value),
            Err(_) => panic!("invalid name literal"),
        }
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Name {
    fn from(value: u64) -> Self {
        Name(value)
    }
}

impl FromStr for Name {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode_name(s.as_bytes()).map(Name)
    }
}

impl TryFrom<String> for Name {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.to_string()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [b'.'; NAME_MAX_LEN];
        let mut tmp = self.0;
        for i in 0..NAME_MAX_LEN {
            let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
            out[NAME_MAX_LEN - 1 - i] = NAME_CHARMAP[(tmp & mask) as usize];
            tmp >>= shift;
        }

        let len = out.iter().rposition(|&c| c != b'.').map_or(0, |p| p + 1);
        // charmap is pure ASCII
        f.write_str(std::str::from_utf8(&out[..len]).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({self})")
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolCode(u64);

impl SymbolCode {
    pub const fn new(s: &str) -> Self {
        match encode_symbol_code(s.as_bytes()) {
            Ok(value) => SymbolCode(value),
            Err(_) => panic!("invalid symbol code literal"),
        }
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl FromStr for SymbolCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode_symbol_code(s.as_bytes()).map(SymbolCode)
    }
}

impl TryFrom<String> for SymbolCode {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SymbolCode> for String {
    fn from(code: SymbolCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut v = self.0;
        while v & 0xff != 0 {
            write!(f, "{}", (v & 0xff) as u8 as char)?;
            v >>= 8;
        }
        Ok(())
    }
}

impl fmt::Debug for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolCode({self})")
    }
}

/// Symbol code plus decimal precision, written `"4,EOS"`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    code: SymbolCode,
    precision: u8,
}

impl Symbol {
    pub const fn new(code: &str, precision: u8) -> Self {
        if precision > MAX_PRECISION {
            panic!("invalid symbol precision");
        }
        Symbol {
            code: SymbolCode::new(code),
            precision,
        }
    }

    pub fn from_code(code: SymbolCode, precision: u8) -> Result<Self, ParseError> {
        if precision > MAX_PRECISION {
            return Err(ParseError::PrecisionTooLarge);
        }
        Ok(Symbol { code, precision })
    }

    pub const fn code(&self) -> SymbolCode {
        self.code
    }

    pub const fn precision(&self) -> u8 {
        self.precision
    }

    pub const fn raw(&self) -> u64 {
        (self.code.raw() << 8) | self.precision as u64
    }
}

impl FromStr for Symbol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s.split_once(',').ok_or(ParseError::MalformedSymbol)?;
        let precision = precision
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseError::MalformedSymbol)?;

        Symbol::from_code(code.trim().parse()?, precision)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.to_string()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({self})")
    }
}

/// Symbol qualified by the contract that issues it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ExtendedSymbol {
    #[serde(rename = "sym")]
    pub symbol: Symbol,
    pub contract: Name,
}

impl ExtendedSymbol {
    pub const fn new(symbol: Symbol, contract: Name) -> Self {
        ExtendedSymbol { symbol, contract }
    }
}

/// A quantity of a token in its minor units.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Asset {
    pub amount: i64,
    pub symbol: Symbol,
}

impl Asset {
    pub const fn new(amount: i64, symbol: Symbol) -> Self {
        Asset { amount, symbol }
    }

    pub const fn zero(symbol: Symbol) -> Self {
        Asset { amount: 0, symbol }
    }

    pub const fn is_amount_within_range(&self) -> bool {
        -MAX_ASSET_AMOUNT <= self.amount && self.amount <= MAX_ASSET_AMOUNT
    }
}

impl FromStr for Asset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, code) = s.trim().split_once(' ').ok_or(ParseError::MalformedAsset)?;
        let code: SymbolCode = code.trim().parse()?;

        let (negative, digits) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

        if int_part.is_empty()
            || !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
            || (digits.contains('.') && frac_part.is_empty())
        {
            return Err(ParseError::MalformedAsset);
        }

        let precision = u8::try_from(frac_part.len()).map_err(|_| ParseError::PrecisionTooLarge)?;
        let symbol = Symbol::from_code(code, precision)?;

        let mut amount: i64 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            amount = amount
                .checked_mul(10)
                .and_then(|a| a.checked_add((b - b'0') as i64))
                .ok_or(ParseError::AmountOutOfRange)?;
        }
        if negative {
            amount = -amount;
        }

        let asset = Asset::new(amount, symbol);
        if !asset.is_amount_within_range() {
            return Err(ParseError::AmountOutOfRange);
        }
        Ok(asset)
    }
}

impl TryFrom<String> for Asset {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.to_string()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        let precision = self.symbol.precision() as usize;
        let code = self.symbol.code();

        if precision == 0 {
            return write!(f, "{sign}{abs} {code}");
        }

        // precision <= 18 so this cannot overflow
        let unit = 10u64.pow(precision as u32);
        write!(
            f,
            "{sign}{}.{:0width$} {code}",
            abs / unit,
            abs % unit,
            width = precision
        )
    }
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Asset({self})")
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimePointSec(u32);

impl TimePointSec {
    pub const fn from_secs(secs: u32) -> Self {
        TimePointSec(secs)
    }

    pub const fn sec_since_epoch(&self) -> u32 {
        self.0
    }
}

impl From<u32> for TimePointSec {
    fn from(secs: u32) -> Self {
        TimePointSec(secs)
    }
}
