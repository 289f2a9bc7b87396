//! Typed error handling for the marketplace contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketplaceError::Xxx)`, the SDK calls `env::panic_str()`
//! with the Display message. Every variant is raised before the
//! failing call mutates a ledger.

use near_sdk_macros::NearSchema;

use crate::ListingKey;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MarketplaceError {
    /// A listing already exists for the (collection, token) key.
    AlreadyListed(String),
    /// No listing exists for the (collection, token) key.
    NotListed(String),
    /// Caller is not the token owner (listing) or not the listing's seller.
    NotOwner(String),
    /// The registry does not report the marketplace as an approved operator.
    NotApprovedForMarketplace(String),
    PriceMustBeAboveZero,
    /// Attached payment is below the listing price.
    PriceNotMet(String),
    /// Withdrawable balance is zero.
    NoProceeds,
    /// Invalid parameters or configuration from the caller.
    InvalidInput(String),
    /// Attached deposit does not satisfy the confirmation guard.
    InsufficientDeposit(String),
    /// Owner-only method called by someone else.
    Unauthorized(String),
    /// A registry query failed or returned an unreadable value.
    RegistryUnavailable(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyListed(msg) => write!(f, "Already listed: {}", msg),
            Self::NotListed(msg) => write!(f, "Not listed: {}", msg),
            Self::NotOwner(msg) => write!(f, "Not owner: {}", msg),
            Self::NotApprovedForMarketplace(msg) => {
                write!(f, "Not approved for marketplace: {}", msg)
            }
            Self::PriceMustBeAboveZero => write!(f, "Price must be above zero"),
            Self::PriceNotMet(msg) => write!(f, "Price not met: {}", msg),
            Self::NoProceeds => write!(f, "No proceeds"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::RegistryUnavailable(msg) => write!(f, "Registry unavailable: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl MarketplaceError {
    pub fn already_listed(key: &ListingKey) -> Self {
        Self::AlreadyListed(key.id())
    }
    pub fn not_listed(key: &ListingKey) -> Self {
        Self::NotListed(key.id())
    }
    pub fn not_seller(key: &ListingKey) -> Self {
        Self::NotOwner(format!("Only the seller can modify {}", key.id()))
    }
    pub fn not_token_owner(key: &ListingKey) -> Self {
        Self::NotOwner(format!("Caller does not own {}", key.id()))
    }
    pub fn not_approved(key: &ListingKey) -> Self {
        Self::NotApprovedForMarketplace(key.id())
    }
    pub fn price_not_met(price: u128, paid: u128) -> Self {
        Self::PriceNotMet(format!("required {}, got {}", price, paid))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
