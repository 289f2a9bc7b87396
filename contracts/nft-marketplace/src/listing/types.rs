//! Listing domain types.

use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::near;

use crate::DELIMETER;

/// Unique key of a listing: one token of one collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingKey {
    pub nft_contract_id: AccountId,
    pub token_id: String,
}

impl ListingKey {
    pub fn new(nft_contract_id: AccountId, token_id: impl Into<String>) -> Self {
        Self {
            nft_contract_id,
            token_id: token_id.into(),
        }
    }

    /// `"{nft_contract_id}:{token_id}"`; unambiguous because account IDs cannot contain ":".
    pub fn id(&self) -> String {
        format!("{}{}{}", self.nft_contract_id, DELIMETER, self.token_id)
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub nft_contract_id: AccountId,
    pub token_id: String,
    pub seller_id: AccountId,
    /// yoctoNEAR; never 0 for a stored listing.
    pub price: U128,
    /// Marketplace approval id on the registry, forwarded to `nft_transfer`.
    /// Always set for stored listings.
    pub approval_id: Option<u64>,
}

impl Listing {
    pub fn key(&self) -> ListingKey {
        ListingKey::new(self.nft_contract_id.clone(), self.token_id.clone())
    }
}

/// Registry answer for one token, captured at validation time and never stored.
#[derive(Clone, Debug)]
pub struct TokenStatus {
    /// `None` when the registry does not know the token.
    pub owner_id: Option<AccountId>,
    pub marketplace_approved: bool,
    pub approval_id: Option<u64>,
}

/// `msg` payload of `nft_approve` that lists the token in the same call.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct ApprovalListingMsg {
    pub price: U128,
}
