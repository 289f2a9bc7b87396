//! Proceeds Ledger: withdrawable sale revenue per seller plus in-flight escrow.

mod ledger;
mod views;

pub use ledger::{EscrowTotals, ProceedsLedger};
