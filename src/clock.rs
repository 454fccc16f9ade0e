use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TimePointSec;

/// Source of the current block time.
pub trait Clock {
    fn now(&self) -> TimePointSec;
}

/// Wall-clock time, for off-chain previews.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimePointSec {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        // u32 seconds run out in 2106
        TimePointSec::from_secs(u32::try_from(secs).unwrap_or(u32::MAX))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub TimePointSec);

impl FixedClock {
    pub const fn at(secs: u32) -> Self {
        FixedClock(TimePointSec::from_secs(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimePointSec {
        self.0
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> TimePointSec {
        (**self).now()
    }
}
