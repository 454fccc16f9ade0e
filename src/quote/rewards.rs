use log::{debug, warn};
use rust_decimal::Decimal;

use crate::{
    clock::Clock,
    math,
    tables::{PoolsRow, TableReader},
    types::{Asset, TimePointSec, MAX_ASSET_AMOUNT},
    Hamburger, EMISSION_RATE, POOL_FRACTION_DIVISOR, REWARD_CHUNK_SIZE,
};

/// Outcome of a reward calculation. Nothing is written back to the pool;
/// `total_after` is what the mining contract would hold had it issued
/// `reward`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardPreview {
    pub reward: Asset,
    /// Reference-token chunks in the trade, one decay step each
    pub chunks: i64,
    /// Supply emitted since the pool's last issue
    pub minted: i64,
    pub total_before: i64,
    pub total_after: i64,
}

impl RewardPreview {
    fn ineligible(reward: Asset) -> Self {
        RewardPreview {
            reward,
            chunks: 0,
            minted: 0,
            total_before: 0,
            total_after: 0,
        }
    }
}

pub fn get_pool<R: TableReader, C: Clock>(lib: &Hamburger<R, C>, pair_id: u64) -> Option<PoolsRow> {
    lib.pools().find(pair_id)
}

pub fn preview_rewards<R: TableReader, C: Clock>(
    lib: &Hamburger<R, C>,
    pair_id: u64,
    from: &Asset,
    to: &Asset,
) -> RewardPreview {
    let reference = lib.config.reference_symbol;
    let reward_symbol = lib.config.reward_symbol;
    let zero = Asset::zero(reward_symbol);

    let traded = if from.symbol.code() == reference { from } else { to };
    if traded.symbol.code() != reference {
        debug!("pair {pair_id}: trade {from} -> {to} does not touch {reference}, no reward");
        return RewardPreview::ineligible(zero);
    }

    let Some(pool) = get_pool(lib, pair_id) else {
        debug!("pair {pair_id}: no mining pool, no reward");
        return RewardPreview::ineligible(zero);
    };

    let elapsed = elapsed_seconds(pool.last_issue_time, lib.clock.now());
    let minted = minted_supply(pool.weight, elapsed, reward_symbol.precision()).unwrap_or_else(|err| {
        warn!("pair {pair_id}: {err:#}, saturating minted supply");
        MAX_ASSET_AMOUNT
    });
    let total_before = pool_total(pool.balance.amount, minted);
    let chunks = traded.amount / REWARD_CHUNK_SIZE;
    let (mined, total_after) = accrue(total_before, chunks);

    debug!(
        "pair {pair_id}: {elapsed}s elapsed minted {minted}, {chunks} chunks took {mined} of {total_before}"
    );

    RewardPreview {
        reward: Asset::new(mined, reward_symbol),
        chunks,
        minted,
        total_before,
        total_after,
    }
}

pub fn get_rewards<R: TableReader, C: Clock>(
    lib: &Hamburger<R, C>,
    pair_id: u64,
    from: &Asset,
    to: &Asset,
) -> Asset {
    preview_rewards(lib, pair_id, from, to).reward
}

/// Seconds since the pool last issued. A clock behind the pool counts as zero.
pub fn elapsed_seconds(last_issue_time: TimePointSec, now: TimePointSec) -> u32 {
    match now.sec_since_epoch().checked_sub(last_issue_time.sec_since_epoch()) {
        Some(elapsed) => elapsed,
        None => {
            warn!("clock {now:?} is behind last issue time {last_issue_time:?}, treating as no elapsed time");
            0
        }
    }
}

/// `floor(weight * EMISSION_RATE * elapsed * 10^precision)`, in reward minor
/// units. Negative or non-finite weights emit nothing.
pub fn minted_supply(weight: f64, elapsed: u32, precision: u8) -> anyhow::Result<i64> {
    if !weight.is_finite() || weight < 0.0 {
        warn!("invalid pool weight {weight}, emitting nothing");
        return Ok(0);
    }
    if weight == 0.0 || elapsed == 0 {
        return Ok(0);
    }

    let rate = math::checked_decimal_mul(math::checked_decimal_from_f64(weight)?, EMISSION_RATE)?;
    let emitted = math::checked_decimal_mul(rate, Decimal::from(elapsed))?;
    let scaled = math::checked_decimal_mul(emitted, Decimal::from(10u64.pow(precision.into())))?;

    math::checked_floor_as_i64(scaled)
}

/// Pool balance plus fresh emission, kept within `0..=MAX_ASSET_AMOUNT`.
pub fn pool_total(balance: i64, minted: i64) -> i64 {
    let total = balance as i128 + minted as i128;

    if total < 0 {
        warn!("negative pool total {total}, treating as empty");
        0
    } else if total > MAX_ASSET_AMOUNT as i128 {
        warn!("pool total {total} exceeds asset range, saturating");
        MAX_ASSET_AMOUNT
    } else {
        // in range per the checks above
        math::checked_as_i64(total).unwrap_or(MAX_ASSET_AMOUNT)
    }
}

/// Takes `1 / POOL_FRACTION_DIVISOR` of the running total once per chunk and
/// returns `(reward, remaining_total)`. Produces exactly what
/// [`accrue_stepwise`] does for any non-negative total.
///
/// Chunks that would mine the same truncated amount are taken in one step,
/// and iteration ends once the total is too small to mine anything, so the
/// cost does not depend on `chunks`.
pub fn accrue(total: i64, chunks: i64) -> (i64, i64) {
    let mut total = total;
    let mut remaining = chunks;
    let mut reward = 0i64;

    while remaining > 0 && total >= POOL_FRACTION_DIVISOR {
        let mined = total / POOL_FRACTION_DIVISOR;
        // the bite stays `mined` while the total stays >= mined * divisor
        let run = ((total % POOL_FRACTION_DIVISOR) / mined + 1).min(remaining);

        total -= run * mined;
        reward += run * mined;
        remaining -= run;
    }

    (reward, total)
}

/// One decay step per chunk, literally. Reference for [`accrue`].
pub fn accrue_stepwise(total: i64, chunks: i64) -> (i64, i64) {
    let mut total = total;
    let mut times = chunks;
    let mut reward = 0i64;

    while times > 0 {
        times -= 1;
        let mined = total / POOL_FRACTION_DIVISOR;
        total -= mined;
        reward += mined;
    }

    (reward, total)
}
