// Cross-contract interfaces: the NFT registry and this contract's own callbacks.
//
// rustc reports the `#[ext_contract]` helper structs as dead code; they are only
// reached through the generated `ext(...)` builders.
#![allow(dead_code)]

use crate::Listing;
use near_sdk::json_types::U128;
use near_sdk::{AccountId, ext_contract, near};
use std::collections::HashMap;

/// NEP-171 token view returned by `nft_token`; metadata is ignored.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
    #[serde(default)]
    pub approved_account_ids: Option<HashMap<AccountId, u64>>,
}

/// The asset registry: a NEP-171 collection with NEP-178 approvals.
#[ext_contract(ext_nft_contract)]
pub trait ExtNftContract {
    fn nft_token(&self, token_id: String) -> Option<Token>;

    fn nft_is_approved(
        &self,
        token_id: String,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool;

    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    );
}

/// Self callback interface
#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn on_listing_verified(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        seller_id: AccountId,
        price: U128,
    ) -> Listing;

    fn on_purchase_resolved(&mut self, buyer_id: AccountId, listing: Listing, paid: U128) -> U128;

    fn on_refund_resolved(&mut self, buyer_id: AccountId, amount: U128) -> U128;

    fn on_withdraw_resolved(&mut self, account_id: AccountId, amount: U128) -> U128;
}
