mod common;

use common::*;
use hamburger::{
    accrue, accrue_stepwise, Asset, FixedClock, Hamburger, HamburgerConfig, MemoryTables, Symbol,
    SymbolCode, MAX_ASSET_AMOUNT,
};
use proptest::prelude::*;

fn lib_at(tables: &MemoryTables, now: u32) -> Hamburger<&MemoryTables, FixedClock> {
    Hamburger::new(tables, FixedClock::at(now))
}

#[test]
fn non_reference_trade_earns_nothing() {
    init_logger();
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(1_000_000_000, 1.0, NOW - 3_600));
    let lib = lib_at(&tables, NOW);

    let reward = lib.get_rewards(PAIR_ID, &asset("100.0000 USDT"), &asset("50.0000 BOX"));
    assert_eq!(reward, Asset::zero(HBG));
    assert_eq!(reward.to_string(), "0.000000 HBG");
}

#[test]
fn missing_pool_earns_nothing() {
    let tables = MemoryTables::new();
    let lib = lib_at(&tables, NOW);

    let reward = lib.get_rewards(PAIR_ID, &asset("100.0000 EOS"), &asset("300.0000 USDT"));
    assert_eq!(reward, Asset::zero(HBG));
    assert_eq!(lib.get_pool(PAIR_ID), None);
}

#[test]
fn empty_pool_single_chunk() {
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(0, 0.0, NOW));
    let lib = lib_at(&tables, NOW);

    let preview = lib.preview_rewards(PAIR_ID, &asset("1.0000 EOS"), &asset("3.0000 USDT"));
    assert_eq!(preview.chunks, 1);
    assert_eq!(preview.total_before, 0);
    assert_eq!(preview.reward, Asset::zero(HBG));
}

#[test]
fn three_chunks_decay_the_pool() {
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(1_000_000, 0.0, NOW));
    let lib = lib_at(&tables, NOW);

    let preview = lib.preview_rewards(PAIR_ID, &asset("3.0000 EOS"), &asset("9.0000 USDT"));
    assert_eq!(preview.chunks, 3);
    assert_eq!(preview.reward, Asset::new(298, HBG));
    assert_eq!(preview.reward.to_string(), "0.000298 HBG");
    assert_eq!(preview.total_after, 1_000_000 - 298);
}

#[test]
fn emission_since_last_issue_feeds_the_pool() {
    let mut tables = MemoryTables::new();
    // 1.0 weight * 0.005 HBG/s * 200s = 1.000000 HBG
    with_pool(&mut tables, pool(0, 1.0, NOW - 200));
    let lib = lib_at(&tables, NOW);

    let preview = lib.preview_rewards(PAIR_ID, &asset("9.0000 USDT"), &asset("3.0000 EOS"));
    assert_eq!(preview.minted, 1_000_000);
    assert_eq!(preview.total_before, 1_000_000);
    assert_eq!(preview.reward, Asset::new(298, HBG));
}

#[test]
fn trade_below_one_chunk_earns_nothing() {
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(1_000_000_000, 1.0, NOW - 60));
    let lib = lib_at(&tables, NOW);

    let preview = lib.preview_rewards(PAIR_ID, &asset("0.9999 EOS"), &asset("2.0000 USDT"));
    assert_eq!(preview.chunks, 0);
    assert_eq!(preview.reward.amount, 0);
    assert_eq!(preview.total_after, preview.total_before);
}

#[test]
fn chunks_use_raw_minor_units() {
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(100_000_000, 0.0, NOW));
    let lib = lib_at(&tables, NOW);

    // 0.0001 EOS at precision 8 is still 10,000 minor units
    let eos8 = Asset::new(10_000, Symbol::new("EOS", 8));
    let preview = lib.preview_rewards(PAIR_ID, &eos8, &asset("1.0000 USDT"));
    assert_eq!(preview.chunks, 1);
    assert_eq!(preview.reward.amount, 10_000);
}

#[test]
fn clock_behind_pool_mints_nothing() {
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(1_000_000, 5.0, NOW + 500));
    let lib = lib_at(&tables, NOW);

    let preview = lib.preview_rewards(PAIR_ID, &asset("3.0000 EOS"), &asset("9.0000 USDT"));
    assert_eq!(preview.minted, 0);
    assert_eq!(preview.reward.amount, 298);
}

#[test]
fn pool_is_not_updated() {
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(1_000_000, 1.0, NOW - 10));
    let lib = lib_at(&tables, NOW);

    let first = lib.get_rewards(PAIR_ID, &asset("10.0000 EOS"), &asset("1.0000 USDT"));
    let second = lib.get_rewards(PAIR_ID, &asset("10.0000 EOS"), &asset("1.0000 USDT"));
    assert_eq!(first, second);
    assert_eq!(lib.get_pool(PAIR_ID), Some(pool(1_000_000, 1.0, NOW - 10)));
}

#[test]
fn huge_trade_drains_pool_to_fixed_point() {
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(50_000_000, 0.0, NOW));
    let lib = lib_at(&tables, NOW);

    let whale = Asset::new(MAX_ASSET_AMOUNT, EOS);
    let preview = lib.preview_rewards(PAIR_ID, &whale, &asset("1.0000 USDT"));
    assert!(preview.total_after < 10_000);
    assert_eq!(preview.reward.amount + preview.total_after, 50_000_000);
}

#[test]
fn reference_and_reward_symbols_follow_config() {
    let mut tables = MemoryTables::new();
    with_pool(&mut tables, pool(1_000_000, 0.0, NOW));
    let config = HamburgerConfig {
        reference_symbol: SymbolCode::new("WAX"),
        reward_symbol: Symbol::new("BOX", 4),
        ..HamburgerConfig::default()
    };
    let lib = Hamburger::with_config(&tables, FixedClock::at(NOW), config);

    let eos_trade = lib.get_rewards(PAIR_ID, &asset("3.0000 EOS"), &asset("9.0000 USDT"));
    assert_eq!(eos_trade, Asset::zero(Symbol::new("BOX", 4)));

    let wax_trade = lib.get_rewards(PAIR_ID, &asset("3.0000 WAX"), &asset("9.0000 USDT"));
    assert_eq!(wax_trade.to_string(), "0.0298 BOX");
}

proptest! {
    #[test]
    fn batched_accrual_matches_stepwise(total in 0i64..1_000_000_000_000, chunks in -10i64..3_000) {
        prop_assert_eq!(accrue(total, chunks), accrue_stepwise(total, chunks));
    }

    #[test]
    fn accrual_conserves_the_pool(total in 0i64..MAX_ASSET_AMOUNT, chunks in 0i64..1_000) {
        let (reward, left) = accrue(total, chunks);
        prop_assert!(reward >= 0 && left >= 0);
        prop_assert_eq!(reward + left, total);
    }

    #[test]
    fn longer_idle_never_lowers_reward(
        balance in 0i64..1_000_000_000,
        weight in 0.01f64..100.0,
        idle in 0u32..1_000_000,
        extra in 1u32..1_000_000,
        trade in 0i64..10_000_000,
    ) {
        let mut tables = MemoryTables::new();
        with_pool(&mut tables, pool(balance, weight, NOW - 2_000_000));
        let from = Asset::new(trade, EOS);
        let to = asset("1.0000 USDT");

        let start = NOW - 2_000_000;
        let early = lib_at(&tables, start + idle).preview_rewards(PAIR_ID, &from, &to);
        let late = lib_at(&tables, start + idle + extra).preview_rewards(PAIR_ID, &from, &to);

        prop_assert!(late.total_before > early.total_before);
        prop_assert!(late.reward.amount >= early.reward.amount);
    }
}
