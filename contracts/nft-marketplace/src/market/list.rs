use crate::external::*;
use crate::guards::{check_one_yocto, check_token_id};
use crate::*;

#[near]
impl Contract {
    /// Panics unless exactly 1 yoctoNEAR is attached. Ownership and approval are
    /// read from the registry; the listing is written in `on_listing_verified`.
    #[payable]
    #[handle_result]
    pub fn list_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
    ) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        check_token_id(&token_id)?;

        let key = ListingKey::new(nft_contract_id.clone(), token_id.clone());
        self.listings.precheck_list(&key, price.0)?;

        let seller_id = env::predecessor_account_id();
        let view_gas = self.config.registry_view_gas();

        Ok(ext_nft_contract::ext(nft_contract_id.clone())
            .with_static_gas(view_gas)
            .nft_token(token_id.clone())
            .and(
                ext_nft_contract::ext(nft_contract_id.clone())
                    .with_static_gas(view_gas)
                    .nft_is_approved(token_id.clone(), env::current_account_id(), None),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.config.callback_gas())
                    .on_listing_verified(nft_contract_id, token_id, seller_id, price),
            ))
    }

    /// Only callable by this contract. A returned error fails the listing
    /// transaction; nothing has been written at that point.
    #[private]
    #[handle_result]
    pub fn on_listing_verified(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        seller_id: AccountId,
        price: U128,
    ) -> Result<Listing, MarketplaceError> {
        let status = read_token_status(&env::current_account_id())?;
        let key = ListingKey::new(nft_contract_id, token_id);
        let listing = self.listings.list(&key, &seller_id, price.0, &status)?.clone();
        events::emit_listed(&listing);
        Ok(listing)
    }

    /// NEP-178 approval receiver. With a `{"price": "<yoctoNEAR>"}` msg the token
    /// is listed immediately: the calling collection vouches for owner and approval.
    #[handle_result]
    pub fn nft_on_approve(
        &mut self,
        token_id: String,
        owner_id: AccountId,
        approval_id: u64,
        msg: String,
    ) -> Result<String, MarketplaceError> {
        check_token_id(&token_id)?;
        let nft_contract_id = env::predecessor_account_id();
        let key = ListingKey::new(nft_contract_id, token_id);

        if owner_id != env::signer_account_id() {
            return Err(MarketplaceError::not_token_owner(&key));
        }

        if msg.is_empty() {
            env::log_str(&format!(
                "Marketplace approved for {} by {}",
                key.id(),
                owner_id
            ));
            return Ok("Approval acknowledged".to_string());
        }

        let args: ApprovalListingMsg = near_sdk::serde_json::from_str(&msg).map_err(|_| {
            MarketplaceError::InvalidInput(r#"msg must be {"price": "<yoctoNEAR>"}"#.into())
        })?;
        let status = TokenStatus {
            owner_id: Some(owner_id.clone()),
            marketplace_approved: true,
            approval_id: Some(approval_id),
        };
        let listing = self
            .listings
            .list(&key, &owner_id, args.price.0, &status)?
            .clone();
        events::emit_listed(&listing);
        Ok("Listed".to_string())
    }
}

// Result 0: `nft_token`, result 1: `nft_is_approved`.
fn read_token_status(marketplace_id: &AccountId) -> Result<TokenStatus, MarketplaceError> {
    if env::promise_results_count() != 2 {
        return Err(MarketplaceError::RegistryUnavailable(
            "expected 2 promise results".into(),
        ));
    }

    let token = env::promise_result_checked(0, MAX_REGISTRY_RESULT_LEN)
        .map_err(|_| MarketplaceError::RegistryUnavailable("nft_token call failed".into()))
        .and_then(|value| {
            near_sdk::serde_json::from_slice::<Option<Token>>(&value).map_err(|_| {
                MarketplaceError::RegistryUnavailable("could not parse token".into())
            })
        })?;

    let marketplace_approved = env::promise_result_checked(1, MAX_REGISTRY_RESULT_LEN)
        .map_err(|_| MarketplaceError::RegistryUnavailable("nft_is_approved call failed".into()))
        .and_then(|value| {
            near_sdk::serde_json::from_slice::<bool>(&value).map_err(|_| {
                MarketplaceError::RegistryUnavailable("could not parse approval".into())
            })
        })?;

    Ok(match token {
        Some(token) => TokenStatus {
            approval_id: token
                .approved_account_ids
                .as_ref()
                .and_then(|approvals| approvals.get(marketplace_id).copied()),
            owner_id: Some(token.owner_id),
            marketplace_approved,
        },
        None => TokenStatus {
            owner_id: None,
            marketplace_approved,
            approval_id: None,
        },
    })
}
