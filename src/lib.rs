//! Read-only accessors for the Hamburger swap and its trade-mining pools.
//!
//! Everything here derives values from tables owned by the AMM and mining
//! contracts; nothing is written back. Swap pricing itself lives with the
//! caller: feed it [`Hamburger::get_reserves`] and [`Hamburger::get_fee`].

mod clock;
mod config;
mod error;
mod math;
mod quote;
mod tables;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    HamburgerConfig, DEFAULT_AMM_CONTRACT, DEFAULT_MINE_CONTRACT, DEFAULT_REFERENCE_SYMBOL,
    DEFAULT_REWARD_SYMBOL,
};
pub use error::{Error, ParseError, Result};
pub use quote::{accrue, accrue_stepwise, RewardPreview};
pub use tables::{
    DepositsRow, GlobalRow, MemoryTables, MultiIndex, PairsRow, PoolsRow, Singleton, TableReader,
    TableRow,
};
pub use types::{Asset, ExtendedSymbol, Name, Symbol, SymbolCode, TimePointSec, MAX_ASSET_AMOUNT};

use rust_decimal::Decimal;

/// Reward tokens emitted per second for each unit of pool weight (0.005).
pub const EMISSION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// Reference-token minor units per decay step. The trade amount is divided
/// as-is, whatever the token's precision.
pub const REWARD_CHUNK_SIZE: i64 = 10_000;

/// Each decay step mines `total / POOL_FRACTION_DIVISOR` (0.01%).
pub const POOL_FRACTION_DIVISOR: i64 = 10_000;

/// Accessor over one deployment of the swap and mining contracts.
#[derive(Clone)]
pub struct Hamburger<R, C> {
    tables: R,
    clock: C,
    config: HamburgerConfig,
}

impl<R: TableReader, C: Clock> Hamburger<R, C> {
    pub fn new(tables: R, clock: C) -> Self {
        Self::with_config(tables, clock, HamburgerConfig::default())
    }

    pub fn with_config(tables: R, clock: C, config: HamburgerConfig) -> Self {
        Hamburger {
            tables,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &HamburgerConfig {
        &self.config
    }

    fn pairs(&self) -> MultiIndex<'_, R, PairsRow> {
        let code = self.config.amm_contract;
        MultiIndex::new(&self.tables, code, code.value())
    }

    fn global(&self) -> Singleton<'_, R, GlobalRow> {
        let code = self.config.amm_contract;
        Singleton::new(&self.tables, code, code.value())
    }

    fn deposits(&self) -> MultiIndex<'_, R, DepositsRow> {
        let code = self.config.amm_contract;
        MultiIndex::new(&self.tables, code, code.value())
    }

    fn pools(&self) -> MultiIndex<'_, R, PoolsRow> {
        let code = self.config.mine_contract;
        MultiIndex::new(&self.tables, code, code.value())
    }

    /// Exchange settings, or their defaults if the contract never stored any.
    pub fn get_config(&self) -> GlobalRow {
        quote::get_config(self)
    }

    /// Total fee (trade + protocol) in basis points.
    ///
    /// ```
    /// use hamburger::{FixedClock, Hamburger, MemoryTables};
    ///
    /// let tables = MemoryTables::new();
    /// let lib = Hamburger::new(&tables, FixedClock::at(0));
    /// assert_eq!(lib.get_fee(), 30);
    /// ```
    pub fn get_fee(&self) -> u16 {
        quote::get_fee(self)
    }

    pub fn get_pair(&self, pair_id: u64) -> Result<PairsRow> {
        quote::get_pair(self, pair_id)
    }

    /// Reserves of `pair_id`, the one denominated in `sort` first.
    ///
    /// Fails with [`Error::InvalidPairId`] for an unknown pair and
    /// [`Error::SortSymbolMismatch`] when `sort` is neither reserve's symbol.
    pub fn get_reserves(&self, pair_id: u64, sort: Symbol) -> Result<(Asset, Asset)> {
        quote::get_reserves(self, pair_id, sort)
    }

    pub fn get_deposit(&self, owner: Name) -> Option<DepositsRow> {
        quote::get_deposit(self, owner)
    }

    pub fn get_pool(&self, pair_id: u64) -> Option<PoolsRow> {
        quote::get_pool(self, pair_id)
    }

    /// Trade-mining reward for swapping `from` into `to` on `pair_id`,
    /// denominated in the configured reward symbol.
    ///
    /// Zero when neither side is the reference token or the pair has no
    /// mining pool. This is an estimate: the pool is not updated.
    pub fn get_rewards(&self, pair_id: u64, from: &Asset, to: &Asset) -> Asset {
        quote::get_rewards(self, pair_id, from, to)
    }

    /// Same calculation as [`Hamburger::get_rewards`], with the pool totals
    /// it went through.
    pub fn preview_rewards(&self, pair_id: u64, from: &Asset, to: &Asset) -> RewardPreview {
        quote::preview_rewards(self, pair_id, from, to)
    }
}
