//! Listing Ledger: active fixed-price listings keyed by (collection, token).

mod ledger;
pub mod types;
mod views;

pub use ledger::ListingLedger;
pub use types::*;
