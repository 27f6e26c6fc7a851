mod clock;
mod status;

pub use clock::{Clock, SystemClock};
pub use status::{TxStatus, TxTracker};

#[cfg(test)]
pub(crate) use clock::ManualClock;
