use std::fmt::Display;

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

type Result<T> = anyhow::Result<T>;

pub fn checked_decimal_from_f64(arg: f64) -> Result<Decimal> {
    if !arg.is_finite() {
        anyhow::bail!("Error: {} is not a finite number", arg);
    }

    Decimal::from_f64(arg).ok_or_else(|| anyhow::anyhow!("Error: Overflow in {} as Decimal", arg))
}

pub fn checked_decimal_mul(arg1: Decimal, arg2: Decimal) -> Result<Decimal> {
    arg1.checked_mul(arg2)
        .ok_or_else(|| anyhow::anyhow!("Error: Overflow in {} * {}", arg1, arg2))
}

/// Rounds toward negative infinity, then narrows to i64.
pub fn checked_floor_as_i64(arg: Decimal) -> Result<i64> {
    arg.floor()
        .to_i64()
        .ok_or_else(|| anyhow::anyhow!("Error: Overflow in {} as i64", arg))
}

pub fn checked_as_i64<T>(arg: T) -> Result<i64>
where
    T: Display + ToPrimitive + Clone,
{
    let option: Option<i64> = num_traits::NumCast::from(arg.clone());
    if let Some(res) = option {
        Ok(res)
    } else {
        Err(anyhow::anyhow!("Error: Overflow in {} as i64", arg))
    }
}
