use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, nft_contract_id: AccountId, token_id: String) -> Option<Listing> {
        self.listings
            .get(&ListingKey::new(nft_contract_id, token_id))
            .cloned()
    }

    pub fn get_supply_listings(&self) -> u64 {
        self.listings.len()
    }

    pub fn get_supply_by_seller(&self, account_id: AccountId) -> u64 {
        self.listings.supply_by_seller(&account_id)
    }

    pub fn get_supply_by_collection(&self, nft_contract_id: AccountId) -> u64 {
        self.listings.supply_by_collection(&nft_contract_id)
    }

    pub fn get_listings(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Listing> {
        self.listings.page(
            page_start(from_index),
            self.config.page_limit(limit),
        )
    }

    pub fn get_listings_by_seller(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        self.listings.page_by_seller(
            &account_id,
            page_start(from_index),
            self.config.page_limit(limit),
        )
    }

    pub fn get_listings_by_collection(
        &self,
        nft_contract_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        self.listings.page_by_collection(
            &nft_contract_id,
            page_start(from_index),
            self.config.page_limit(limit),
        )
    }
}

// Out-of-range starts saturate so the page comes back empty.
fn page_start(from_index: Option<u64>) -> usize {
    usize::try_from(from_index.unwrap_or(0)).unwrap_or(usize::MAX)
}
