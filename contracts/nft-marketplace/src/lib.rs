//! NFT Marketplace — fixed-price listings over external NEP-171 collections, per-seller proceeds escrow, JSON events.

use near_sdk::json_types::U128;
use near_sdk::{AccountId, BorshStorageKey, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod config;
mod errors;
mod guards;

mod events;
mod external;

mod listing;
mod market;
mod proceeds;

mod admin;

#[cfg(test)]
mod tests;

pub use config::{MarketConfig, MarketConfigUpdate};
pub use constants::*;
pub use errors::MarketplaceError;
pub use listing::{ApprovalListingMsg, Listing, ListingKey, ListingLedger, TokenStatus};
pub use proceeds::{EscrowTotals, ProceedsLedger};

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    ListingsBySeller,
    ListingsBySellerInner { account_id_hash: Vec<u8> },
    ListingsByCollection,
    ListingsByCollectionInner { account_id_hash: Vec<u8> },
    Proceeds,
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep178", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub config: MarketConfig,

    // Mutated only through ListingLedger operations.
    pub(crate) listings: ListingLedger,
    // Mutated only through ProceedsLedger operations.
    pub(crate) proceeds: ProceedsLedger,
}
