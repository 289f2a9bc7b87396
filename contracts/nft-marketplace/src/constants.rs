//! Marketplace-wide constants.

use near_sdk::NearToken;

/// Maximum token ID length
pub const MAX_TOKEN_ID_LEN: usize = 256;

/// Delimiter for unique listing ID
/// ":" is not a valid character in NEAR account IDs, preventing listing_id key collisions.
pub const DELIMETER: &str = ":";

/// 1 yocto: confirmation deposit for owner-gated calls and for `nft_transfer`.
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

/// Upper bound on the byte length of a registry view result read in a callback.
pub const MAX_REGISTRY_RESULT_LEN: usize = 16_384;

// Gas constants (TGas)
pub const DEFAULT_REGISTRY_VIEW_GAS: u64 = 10;
pub const DEFAULT_NFT_TRANSFER_GAS: u64 = 50;
pub const DEFAULT_CALLBACK_GAS: u64 = 30;
pub const MAX_GAS_TGAS: u64 = 300;

// Pagination
pub const DEFAULT_PAGE_SIZE: u64 = 50;
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 100;
pub const MAX_PAGE_SIZE_LIMIT: u64 = 1_000;

pub const PURCHASE_MEMO: &str = "Purchased on NFT Marketplace";
