//! Row layouts of the tables owned by the AMM and mining contracts, and the
//! read-only views the library uses over them.

use std::{any::Any, collections::HashMap, marker::PhantomData};

use serde::{Deserialize, Serialize};

use crate::types::{Asset, ExtendedSymbol, Name, SymbolCode, TimePointSec};

/// A row stored in a host table under a 64-bit primary key.
pub trait TableRow: Clone + Send + Sync + 'static {
    const TABLE: Name;

    fn primary_key(&self) -> u64;
}

/// Key-value access to host tables, addressed by `(code, scope, table, primary key)`.
pub trait TableReader {
    fn find_row<T: TableRow>(&self, code: Name, scope: u64, primary_key: u64) -> Option<T>;
}

impl<R: TableReader> TableReader for &R {
    fn find_row<T: TableRow>(&self, code: Name, scope: u64, primary_key: u64) -> Option<T> {
        (**self).find_row(code, scope, primary_key)
    }
}

/// Hamburger pairs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairsRow {
    pub id: u64,
    pub code: SymbolCode,
    pub token0: ExtendedSymbol,
    pub token1: ExtendedSymbol,
    pub reserve0: Asset,
    pub reserve1: Asset,
    pub total_liquidity: u64,
    pub last_update_time: TimePointSec,
    pub created_time: TimePointSec,
}

impl TableRow for PairsRow {
    const TABLE: Name = Name::new("pairs");

    fn primary_key(&self) -> u64 {
        self.id
    }
}

/// Exchange-wide settings. Fees are in basis points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalRow {
    pub contract_status: u8,
    pub mine_status: u8,
    pub trade_fee: u8,
    pub protocol_fee: u8,
}

impl Default for GlobalRow {
    fn default() -> Self {
        GlobalRow {
            contract_status: 1,
            mine_status: 1,
            trade_fee: 20,
            protocol_fee: 10,
        }
    }
}

impl TableRow for GlobalRow {
    const TABLE: Name = Name::new("config");

    fn primary_key(&self) -> u64 {
        Self::TABLE.value()
    }
}

/// Liquidity queued by an owner before it is added to a pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepositsRow {
    pub owner: Name,
    pub quantity0: Asset,
    pub quantity1: Asset,
}

impl TableRow for DepositsRow {
    const TABLE: Name = Name::new("deposits");

    fn primary_key(&self) -> u64 {
        self.owner.value()
    }
}

/// Trade-mining state of one pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoolsRow {
    pub pair_id: u64,
    pub weight: f64,
    pub balance: Asset,
    pub issued: Asset,
    pub last_issue_time: TimePointSec,
    pub start_time: TimePointSec,
    pub end_time: TimePointSec,
}

impl TableRow for PoolsRow {
    const TABLE: Name = Name::new("pools");

    fn primary_key(&self) -> u64 {
        self.pair_id
    }
}

/// Typed view over one `(code, scope)` table.
pub struct MultiIndex<'a, R, T> {
    reader: &'a R,
    code: Name,
    scope: u64,
    _row: PhantomData<T>,
}

impl<'a, R: TableReader, T: TableRow> MultiIndex<'a, R, T> {
    pub fn new(reader: &'a R, code: Name, scope: u64) -> Self {
        MultiIndex {
            reader,
            code,
            scope,
            _row: PhantomData,
        }
    }

    pub fn find(&self, primary_key: u64) -> Option<T> {
        self.reader.find_row(self.code, self.scope, primary_key)
    }

    pub fn contains(&self, primary_key: u64) -> bool {
        self.find(primary_key).is_some()
    }
}

/// A table holding at most one row, stored under the table's own name.
pub struct Singleton<'a, R, T> {
    reader: &'a R,
    code: Name,
    scope: u64,
    _row: PhantomData<T>,
}

impl<'a, R: TableReader, T: TableRow> Singleton<'a, R, T> {
    pub fn new(reader: &'a R, code: Name, scope: u64) -> Self {
        Singleton {
            reader,
            code,
            scope,
            _row: PhantomData,
        }
    }

    pub fn get(&self) -> Option<T> {
        self.reader
            .find_row(self.code, self.scope, T::TABLE.value())
    }

    pub fn exists(&self) -> bool {
        self.get().is_some()
    }

    pub fn get_or_default(&self) -> T
    where
        T: Default,
    {
        self.get().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TableKey {
    code: Name,
    scope: u64,
    table: Name,
    primary_key: u64,
}

/// In-memory table store for tests and off-chain snapshots.
#[derive(Default)]
pub struct MemoryTables {
    rows: HashMap<TableKey, Box<dyn Any + Send + Sync>>,
}

impl MemoryTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a row, returning the row it replaced.
    pub fn emplace<T: TableRow>(&mut self, code: Name, scope: u64, row: T) -> Option<T> {
        let key = TableKey {
            code,
            scope,
            table: T::TABLE,
            primary_key: row.primary_key(),
        };

        self.rows
            .insert(key, Box::new(row))
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    pub fn erase<T: TableRow>(&mut self, code: Name, scope: u64, primary_key: u64) -> Option<T> {
        let key = TableKey {
            code,
            scope,
            table: T::TABLE,
            primary_key,
        };

        self.rows
            .remove(&key)
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableReader for MemoryTables {
    fn find_row<T: TableRow>(&self, code: Name, scope: u64, primary_key: u64) -> Option<T> {
        let key = TableKey {
            code,
            scope,
            table: T::TABLE,
            primary_key,
        };

        self.rows.get(&key)?.downcast_ref::<T>().cloned()
    }
}
