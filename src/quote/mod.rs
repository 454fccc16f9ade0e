mod fee;
mod reserves;
mod rewards;

pub use fee::*;
pub use reserves::*;
pub use rewards::*;
