//! Minimal NEP-171 / NEP-178 Mock NFT for Integration Testing
//!
//! Implements only the methods the marketplace talks to:
//! - nft_token / nft_is_approved (listing verification)
//! - nft_approve (optionally calls nft_on_approve on the approved account)
//! - nft_transfer (purchase settlement)

use near_sdk::store::LookupMap;
use near_sdk::{env, near, AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue};
use std::collections::HashMap;

#[near(serializers = [borsh])]
pub struct TokenRecord {
    owner_id: AccountId,
    approvals: HashMap<AccountId, u64>,
}

#[near(serializers = [json])]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
    pub approved_account_ids: HashMap<AccountId, u64>,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockNFT {
    tokens: LookupMap<String, TokenRecord>,
    next_approval_id: u64,
    /// Test helper: if set, the next nft_transfer will fail
    fail_next_transfer: bool,
}

#[near]
impl MockNFT {
    #[init]
    pub fn new() -> Self {
        Self {
            tokens: LookupMap::new(b"t"),
            next_approval_id: 0,
            fail_next_transfer: false,
        }
    }

    // =========================================================================
    // NEP-171 Core
    // =========================================================================

    #[payable]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) {
        assert_eq!(
            env::attached_deposit(),
            NearToken::from_yoctonear(1),
            "Requires 1 yoctoNEAR"
        );

        // Test helper: fail if flag is set
        if self.fail_next_transfer {
            self.fail_next_transfer = false;
            env::panic_str("MockNFT: Simulated transfer failure");
        }

        let sender_id = env::predecessor_account_id();
        let token = self
            .tokens
            .get_mut(&token_id)
            .unwrap_or_else(|| env::panic_str("Token not found"));

        if token.owner_id != sender_id {
            let stored = token
                .approvals
                .get(&sender_id)
                .copied()
                .unwrap_or_else(|| env::panic_str("Sender not approved"));
            if approval_id.is_some_and(|id| id != stored) {
                env::panic_str("Stale approval id");
            }
        }

        token.owner_id = receiver_id;
        token.approvals.clear();
        if let Some(memo) = memo {
            env::log_str(&format!("Memo: {memo}"));
        }
    }

    pub fn nft_token(&self, token_id: String) -> Option<Token> {
        self.tokens.get(&token_id).map(|token| Token {
            token_id: token_id.clone(),
            owner_id: token.owner_id.clone(),
            approved_account_ids: token.approvals.clone(),
        })
    }

    // =========================================================================
    // NEP-178 Approvals
    // =========================================================================

    /// With `msg`, notifies `account_id` through `nft_on_approve`.
    #[payable]
    pub fn nft_approve(
        &mut self,
        token_id: String,
        account_id: AccountId,
        msg: Option<String>,
    ) -> PromiseOrValue<String> {
        let owner_id = env::predecessor_account_id();
        let approval_id = self.next_approval_id;
        let token = self
            .tokens
            .get_mut(&token_id)
            .unwrap_or_else(|| env::panic_str("Token not found"));
        assert_eq!(token.owner_id, owner_id, "Only the owner can approve");

        token.approvals.insert(account_id.clone(), approval_id);
        self.next_approval_id += 1;

        match msg {
            Some(msg) => Promise::new(account_id)
                .function_call(
                    "nft_on_approve".to_string(),
                    near_sdk::serde_json::json!({
                        "token_id": token_id,
                        "owner_id": owner_id,
                        "approval_id": approval_id,
                        "msg": msg
                    })
                    .to_string()
                    .into_bytes(),
                    NearToken::from_near(0),
                    Gas::from_tgas(50),
                )
                .into(),
            None => PromiseOrValue::Value(String::new()),
        }
    }

    #[payable]
    pub fn nft_revoke(&mut self, token_id: String, account_id: AccountId) {
        let token = self
            .tokens
            .get_mut(&token_id)
            .unwrap_or_else(|| env::panic_str("Token not found"));
        assert_eq!(
            token.owner_id,
            env::predecessor_account_id(),
            "Only the owner can revoke"
        );
        token.approvals.remove(&account_id);
    }

    pub fn nft_is_approved(
        &self,
        token_id: String,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool {
        let Some(stored) = self
            .tokens
            .get(&token_id)
            .and_then(|token| token.approvals.get(&approved_account_id))
        else {
            return false;
        };
        approval_id.is_none_or(|id| id == *stored)
    }

    // =========================================================================
    // Test Helpers (not in real NFT)
    // =========================================================================

    /// Mint a token to account (for testing only)
    pub fn nft_mint(&mut self, token_id: String, receiver_id: AccountId) {
        assert!(!self.tokens.contains_key(&token_id), "Token already exists");
        self.tokens.insert(
            token_id,
            TokenRecord {
                owner_id: receiver_id,
                approvals: HashMap::new(),
            },
        );
    }

    /// Set flag to fail the next nft_transfer call (for testing callbacks)
    pub fn set_fail_next_transfer(&mut self, should_fail: bool) {
        self.fail_next_transfer = should_fail;
    }
}
