use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Panics unless exactly 1 yoctoNEAR is attached. Seller only.
    #[payable]
    #[handle_result]
    pub fn update_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        new_price: U128,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;

        let key = ListingKey::new(nft_contract_id, token_id);
        let caller = env::predecessor_account_id();
        let old_price = self.listings.update(&key, &caller, new_price.0)?;

        if let Some(listing) = self.listings.get(&key) {
            events::emit_price_updated(listing, U128(old_price));
        }
        Ok(())
    }

    /// Panics unless exactly 1 yoctoNEAR is attached. Seller only.
    #[payable]
    #[handle_result]
    pub fn cancel_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;

        let key = ListingKey::new(nft_contract_id, token_id);
        let caller = env::predecessor_account_id();
        let listing = self.listings.remove(&key, &caller, true)?;

        events::emit_canceled(&listing);
        Ok(())
    }
}
