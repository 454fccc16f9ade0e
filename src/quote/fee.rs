use crate::{clock::Clock, tables::GlobalRow, tables::TableReader, Hamburger};

pub fn get_config<R: TableReader, C: Clock>(lib: &Hamburger<R, C>) -> GlobalRow {
    lib.global().get_or_default()
}

/// Trade fee plus protocol fee, in basis points. Widened so the sum of two
/// stored u8 values never wraps.
pub fn get_fee<R: TableReader, C: Clock>(lib: &Hamburger<R, C>) -> u16 {
    let global = get_config(lib);

    u16::from(global.trade_fee) + u16::from(global.protocol_fee)
}
