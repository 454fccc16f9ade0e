use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

use crate::types::{Name, Symbol, SymbolCode};

pub const DEFAULT_AMM_CONTRACT: Name = Name::new("hamburgerswp");
pub const DEFAULT_MINE_CONTRACT: Name = Name::new("hbgtrademine");
pub const DEFAULT_REFERENCE_SYMBOL: SymbolCode = SymbolCode::new("EOS");
pub const DEFAULT_REWARD_SYMBOL: Symbol = Symbol::new("HBG", 6);

/// Identities of the contracts whose tables are read, and the tokens the
/// reward calculation is denominated in.
///
/// Every field is optional in JSON:
///
/// ```json
/// {
///   "amm_contract": "hamburgerswp",
///   "mine_contract": "hbgtrademine",
///   "reference_symbol": "EOS",
///   "reward_symbol": "6,HBG"
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HamburgerConfig {
    /// Owner of the `pairs`, `config` and `deposits` tables
    pub amm_contract: Name,
    /// Owner of the `pools` table
    pub mine_contract: Name,
    /// Trades must touch this token to earn rewards
    pub reference_symbol: SymbolCode,
    pub reward_symbol: Symbol,
}

impl Default for HamburgerConfig {
    fn default() -> Self {
        HamburgerConfig {
            amm_contract: DEFAULT_AMM_CONTRACT,
            mine_contract: DEFAULT_MINE_CONTRACT,
            reference_symbol: DEFAULT_REFERENCE_SYMBOL,
            reward_symbol: DEFAULT_REWARD_SYMBOL,
        }
    }
}

impl HamburgerConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Can't parse hamburger config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Can't read config file: {}", path.display()))?;

        Self::from_json_str(&json)
    }
}
