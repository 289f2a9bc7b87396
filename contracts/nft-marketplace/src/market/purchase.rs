use crate::external::*;
use crate::market::awaited_promise_succeeded;
use crate::*;

#[near]
impl Contract {
    /// The attached deposit is the payment. The listing is removed and the
    /// payment held before the registry transfer is requested.
    #[payable]
    #[handle_result]
    pub fn buy_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<Promise, MarketplaceError> {
        let key = ListingKey::new(nft_contract_id, token_id);
        let price = self
            .listings
            .get(&key)
            .map(|listing| listing.price.0)
            .ok_or_else(|| MarketplaceError::not_listed(&key))?;

        let paid = env::attached_deposit().as_yoctonear();
        if paid < price {
            return Err(MarketplaceError::price_not_met(price, paid));
        }

        let buyer_id = env::predecessor_account_id();

        // Any call landing before resolution sees this key as not listed.
        let listing = self.listings.remove(&key, &buyer_id, false)?;
        self.proceeds.hold(paid);

        Ok(ext_nft_contract::ext(listing.nft_contract_id.clone())
            .with_static_gas(self.config.nft_transfer_gas())
            .with_attached_deposit(ONE_YOCTO)
            .nft_transfer(
                buyer_id.clone(),
                listing.token_id.clone(),
                listing.approval_id,
                Some(PURCHASE_MEMO.to_string()),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.config.purchase_callback_gas())
                    .on_purchase_resolved(buyer_id, listing, U128(paid)),
            ))
    }

    /// Only callable by this contract. Must not panic: the listing is gone and
    /// the payment is held. Success credits the seller with the full payment;
    /// failure relists (if the key is still free) and refunds the buyer.
    #[private]
    pub fn on_purchase_resolved(&mut self, buyer_id: AccountId, listing: Listing, paid: U128) -> U128 {
        if awaited_promise_succeeded() {
            self.proceeds.release(paid.0);
            let new_balance = self.proceeds.credit(&listing.seller_id, paid.0);
            events::emit_bought(&buyer_id, &listing, paid);
            events::emit_proceeds_credited(&listing.seller_id, paid.0, new_balance);
            return paid;
        }

        // The payment stays in flight until the refund resolves.
        let relisted = self.listings.restore(listing.clone());
        events::emit_buy_failed(&buyer_id, &listing, paid, relisted);
        let _ = Promise::new(buyer_id.clone())
            .transfer(NearToken::from_yoctonear(paid.0))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.config.callback_gas())
                    .on_refund_resolved(buyer_id, paid),
            );
        U128(0)
    }

    /// Only callable by this contract. Must not panic; a bounced refund is
    /// credited to the buyer as withdrawable proceeds.
    #[private]
    pub fn on_refund_resolved(&mut self, buyer_id: AccountId, amount: U128) -> U128 {
        self.proceeds.release(amount.0);

        if awaited_promise_succeeded() {
            return amount;
        }

        let new_balance = self.proceeds.credit(&buyer_id, amount.0);
        events::emit_refund_failed(&buyer_id, amount.0, new_balance);
        U128(0)
    }
}
