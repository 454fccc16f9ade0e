#![allow(dead_code)]

use hamburger::{
    Asset, ExtendedSymbol, GlobalRow, MemoryTables, Name, PairsRow, PoolsRow, Symbol, TimePointSec,
    DEFAULT_AMM_CONTRACT, DEFAULT_MINE_CONTRACT,
};

pub const EOS: Symbol = Symbol::new("EOS", 4);
pub const USDT: Symbol = Symbol::new("USDT", 4);
pub const HBG: Symbol = Symbol::new("HBG", 6);

pub const PAIR_ID: u64 = 12;
pub const NOW: u32 = 1_600_000_000;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn asset(s: &str) -> Asset {
    s.parse().unwrap()
}

pub fn eos_usdt_pair() -> PairsRow {
    PairsRow {
        id: PAIR_ID,
        code: "BOXGL".parse().unwrap(),
        token0: ExtendedSymbol::new(EOS, Name::new("eosio.token")),
        token1: ExtendedSymbol::new(USDT, Name::new("tethertether")),
        reserve0: asset("4585193.1234 EOS"),
        reserve1: asset("12568203.3533 USDT"),
        total_liquidity: 1_000_000,
        last_update_time: TimePointSec::from_secs(NOW - 60),
        created_time: TimePointSec::from_secs(NOW - 86_400),
    }
}

pub fn pool(balance: i64, weight: f64, last_issue_time: u32) -> PoolsRow {
    PoolsRow {
        pair_id: PAIR_ID,
        weight,
        balance: Asset::new(balance, HBG),
        issued: Asset::zero(HBG),
        last_issue_time: TimePointSec::from_secs(last_issue_time),
        start_time: TimePointSec::from_secs(NOW - 86_400),
        end_time: TimePointSec::from_secs(NOW + 86_400),
    }
}

pub fn with_config(tables: &mut MemoryTables, config: GlobalRow) {
    tables.emplace(DEFAULT_AMM_CONTRACT, DEFAULT_AMM_CONTRACT.value(), config);
}

pub fn with_pair(tables: &mut MemoryTables, pair: PairsRow) {
    tables.emplace(DEFAULT_AMM_CONTRACT, DEFAULT_AMM_CONTRACT.value(), pair);
}

pub fn with_pool(tables: &mut MemoryTables, pool: PoolsRow) {
    tables.emplace(DEFAULT_MINE_CONTRACT, DEFAULT_MINE_CONTRACT.value(), pool);
}
