use log::debug;

use crate::{
    clock::Clock,
    error::{Error, Result},
    tables::{DepositsRow, PairsRow, TableReader},
    types::{Asset, Name, Symbol},
    Hamburger,
};

pub fn get_pair<R: TableReader, C: Clock>(lib: &Hamburger<R, C>, pair_id: u64) -> Result<PairsRow> {
    lib.pairs()
        .find(pair_id)
        .ok_or(Error::InvalidPairId { pair_id })
}

/// Reserves of a pair with the reserve denominated in `sort` first.
pub fn get_reserves<R: TableReader, C: Clock>(
    lib: &Hamburger<R, C>,
    pair_id: u64,
    sort: Symbol,
) -> Result<(Asset, Asset)> {
    let pair = get_pair(lib, pair_id)?;

    debug!(
        "pair {pair_id}: reserves {} / {}, sorting by {sort}",
        pair.reserve0, pair.reserve1
    );

    if sort == pair.reserve0.symbol {
        Ok((pair.reserve0, pair.reserve1))
    } else if sort == pair.reserve1.symbol {
        Ok((pair.reserve1, pair.reserve0))
    } else {
        Err(Error::SortSymbolMismatch {
            sort,
            reserve0: pair.reserve0.symbol,
            reserve1: pair.reserve1.symbol,
        })
    }
}

pub fn get_deposit<R: TableReader, C: Clock>(lib: &Hamburger<R, C>, owner: Name) -> Option<DepositsRow> {
    lib.deposits().find(owner.value())
}
