use near_sdk::store::{IterableMap, IterableSet, LookupMap};

use crate::guards::hash_account_id;
use crate::*;

/// Owns every active listing plus its seller/collection indexes.
///
/// A key present in `listings` means the seller owned the token and had
/// approved the marketplace when the listing was created. Removal deletes
/// the entry; there is no zero-price placeholder.
#[near(serializers = [borsh])]
pub struct ListingLedger {
    listings: IterableMap<String, Listing>,
    by_seller: LookupMap<AccountId, IterableSet<String>>,
    by_collection: LookupMap<AccountId, IterableSet<String>>,
}

impl ListingLedger {
    pub fn new() -> Self {
        Self {
            listings: IterableMap::new(StorageKey::Listings),
            by_seller: LookupMap::new(StorageKey::ListingsBySeller),
            by_collection: LookupMap::new(StorageKey::ListingsByCollection),
        }
    }

    pub fn get(&self, key: &ListingKey) -> Option<&Listing> {
        self.listings.get(&key.id())
    }

    pub fn contains(&self, key: &ListingKey) -> bool {
        self.listings.contains_key(&key.id())
    }

    /// Checks that do not need the registry; a passing result is re-checked by `list`.
    pub fn precheck_list(&self, key: &ListingKey, price: u128) -> Result<(), MarketplaceError> {
        if self.contains(key) {
            return Err(MarketplaceError::already_listed(key));
        }
        if price == 0 {
            return Err(MarketplaceError::PriceMustBeAboveZero);
        }
        Ok(())
    }

    /// Inserts a listing after validating, in order: not already listed,
    /// non-zero price, seller owns the token, marketplace is approved.
    /// An approval without a known approval id counts as not approved.
    pub fn list(
        &mut self,
        key: &ListingKey,
        seller_id: &AccountId,
        price: u128,
        status: &TokenStatus,
    ) -> Result<&Listing, MarketplaceError> {
        self.precheck_list(key, price)?;
        if status.owner_id.as_ref() != Some(seller_id) {
            return Err(MarketplaceError::not_token_owner(key));
        }
        if !status.marketplace_approved || status.approval_id.is_none() {
            return Err(MarketplaceError::not_approved(key));
        }

        let listing = Listing {
            nft_contract_id: key.nft_contract_id.clone(),
            token_id: key.token_id.clone(),
            seller_id: seller_id.clone(),
            price: U128(price),
            approval_id: status.approval_id,
        };
        self.insert(listing);
        self.get(key)
            .ok_or_else(|| MarketplaceError::InternalError("Listing vanished after insert".into()))
    }

    /// Replaces the price in place; returns the previous price.
    pub fn update(
        &mut self,
        key: &ListingKey,
        caller: &AccountId,
        new_price: u128,
    ) -> Result<u128, MarketplaceError> {
        let listing_id = key.id();
        let listing = self
            .listings
            .get_mut(&listing_id)
            .ok_or_else(|| MarketplaceError::not_listed(key))?;
        if &listing.seller_id != caller {
            return Err(MarketplaceError::not_seller(key));
        }
        if new_price == 0 {
            return Err(MarketplaceError::PriceMustBeAboveZero);
        }
        let old_price = listing.price.0;
        listing.price = U128(new_price);
        Ok(old_price)
    }

    /// Deletes the listing and hands back its prior value.
    /// `require_owner` restricts removal to the seller (cancel); purchase passes `false`.
    pub fn remove(
        &mut self,
        key: &ListingKey,
        caller: &AccountId,
        require_owner: bool,
    ) -> Result<Listing, MarketplaceError> {
        let listing = self.get(key).ok_or_else(|| MarketplaceError::not_listed(key))?;
        if require_owner && &listing.seller_id != caller {
            return Err(MarketplaceError::not_seller(key));
        }
        self.take(key)
            .ok_or_else(|| MarketplaceError::InternalError("Listing vanished before removal".into()))
    }

    /// Compensation for a failed purchase. Never overwrites a listing created in the meantime.
    pub fn restore(&mut self, listing: Listing) -> bool {
        if self.contains(&listing.key()) {
            return false;
        }
        self.insert(listing);
        true
    }

    pub fn len(&self) -> u64 {
        self.listings.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn supply_by_seller(&self, seller_id: &AccountId) -> u64 {
        self.by_seller
            .get(seller_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub fn supply_by_collection(&self, nft_contract_id: &AccountId) -> u64 {
        self.by_collection
            .get(nft_contract_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub fn page(&self, from_index: usize, limit: usize) -> Vec<Listing> {
        self.listings
            .iter()
            .skip(from_index)
            .take(limit)
            .map(|(_, listing)| listing.clone())
            .collect()
    }

    pub fn page_by_seller(&self, seller_id: &AccountId, from_index: usize, limit: usize) -> Vec<Listing> {
        self.page_index(self.by_seller.get(seller_id), from_index, limit)
    }

    pub fn page_by_collection(
        &self,
        nft_contract_id: &AccountId,
        from_index: usize,
        limit: usize,
    ) -> Vec<Listing> {
        self.page_index(self.by_collection.get(nft_contract_id), from_index, limit)
    }

    fn page_index(
        &self,
        index: Option<&IterableSet<String>>,
        from_index: usize,
        limit: usize,
    ) -> Vec<Listing> {
        let Some(listing_ids) = index else {
            return vec![];
        };
        listing_ids
            .iter()
            .skip(from_index)
            .take(limit)
            .filter_map(|listing_id| self.listings.get(listing_id).cloned())
            .collect()
    }

    fn insert(&mut self, listing: Listing) {
        let listing_id = listing.key().id();

        let mut by_seller = self.by_seller.remove(&listing.seller_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::ListingsBySellerInner {
                account_id_hash: hash_account_id(&listing.seller_id),
            })
        });
        by_seller.insert(listing_id.clone());
        self.by_seller.insert(listing.seller_id.clone(), by_seller);

        let mut by_collection = self
            .by_collection
            .remove(&listing.nft_contract_id)
            .unwrap_or_else(|| {
                IterableSet::new(StorageKey::ListingsByCollectionInner {
                    account_id_hash: hash_account_id(&listing.nft_contract_id),
                })
            });
        by_collection.insert(listing_id.clone());
        self.by_collection
            .insert(listing.nft_contract_id.clone(), by_collection);

        self.listings.insert(listing_id, listing);
    }

    fn take(&mut self, key: &ListingKey) -> Option<Listing> {
        let listing_id = key.id();
        let listing = self.listings.remove(&listing_id)?;

        if let Some(mut seller_set) = self.by_seller.remove(&listing.seller_id) {
            seller_set.remove(&listing_id);
            if !seller_set.is_empty() {
                self.by_seller.insert(listing.seller_id.clone(), seller_set);
            }
        }

        if let Some(mut collection_set) = self.by_collection.remove(&listing.nft_contract_id) {
            collection_set.remove(&listing_id);
            if !collection_set.is_empty() {
                self.by_collection
                    .insert(listing.nft_contract_id.clone(), collection_set);
            }
        }

        Some(listing)
    }
}

impl Default for ListingLedger {
    fn default() -> Self {
        Self::new()
    }
}
