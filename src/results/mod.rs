//! Result types and the channel that carries them
//!
//! Matchers push results into a shared `ResultSender`; the result sink drains
//! the matching `ResultReceiver` until every sender has been dropped.

mod channel;
mod types;

pub use channel::{result_channel, ResultReceiver, ResultSender};
pub use types::*;
