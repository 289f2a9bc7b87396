use crate::*;

/// Gas budget and view limits; set at init, patched by the owner via `update_config`.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct MarketConfig {
    /// Gas for each registry view (`nft_token`, `nft_is_approved`) during listing.
    pub registry_view_gas_tgas: u64,
    /// Gas forwarded to the registry's `nft_transfer` on purchase.
    pub nft_transfer_gas_tgas: u64,
    /// Gas reserved for every resolution callback.
    pub callback_gas_tgas: u64,
    pub max_page_size: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            registry_view_gas_tgas: DEFAULT_REGISTRY_VIEW_GAS,
            nft_transfer_gas_tgas: DEFAULT_NFT_TRANSFER_GAS,
            callback_gas_tgas: DEFAULT_CALLBACK_GAS,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl MarketConfig {
    pub fn validate(&self) -> Result<(), MarketplaceError> {
        for (name, tgas) in [
            ("registry_view_gas_tgas", self.registry_view_gas_tgas),
            ("nft_transfer_gas_tgas", self.nft_transfer_gas_tgas),
            ("callback_gas_tgas", self.callback_gas_tgas),
        ] {
            if tgas == 0 || tgas > MAX_GAS_TGAS {
                return Err(MarketplaceError::InvalidInput(format!(
                    "{name} must be 1..={MAX_GAS_TGAS}"
                )));
            }
        }
        // Listing fans out into two views plus the callback; purchase into the
        // transfer plus a callback that may itself chain the refund callback.
        let listing_chain = 2 * self.registry_view_gas_tgas + self.callback_gas_tgas;
        let purchase_chain = self.nft_transfer_gas_tgas + 2 * self.callback_gas_tgas;
        if listing_chain.max(purchase_chain) > MAX_GAS_TGAS {
            return Err(MarketplaceError::InvalidInput(format!(
                "combined cross-contract gas exceeds {MAX_GAS_TGAS} TGas"
            )));
        }
        if self.max_page_size == 0 || self.max_page_size > MAX_PAGE_SIZE_LIMIT {
            return Err(MarketplaceError::InvalidInput(format!(
                "max_page_size must be 1..={MAX_PAGE_SIZE_LIMIT}"
            )));
        }
        Ok(())
    }

    pub fn validate_patch(&self, patch: &MarketConfigUpdate) -> Result<(), MarketplaceError> {
        let mut candidate = self.clone();
        candidate.apply_patch(patch);
        candidate.validate()
    }

    pub fn apply_patch(&mut self, patch: &MarketConfigUpdate) {
        if let Some(v) = patch.registry_view_gas_tgas {
            self.registry_view_gas_tgas = v;
        }
        if let Some(v) = patch.nft_transfer_gas_tgas {
            self.nft_transfer_gas_tgas = v;
        }
        if let Some(v) = patch.callback_gas_tgas {
            self.callback_gas_tgas = v;
        }
        if let Some(v) = patch.max_page_size {
            self.max_page_size = v;
        }
    }

    pub(crate) fn registry_view_gas(&self) -> Gas {
        Gas::from_tgas(self.registry_view_gas_tgas)
    }

    pub(crate) fn nft_transfer_gas(&self) -> Gas {
        Gas::from_tgas(self.nft_transfer_gas_tgas)
    }

    pub(crate) fn callback_gas(&self) -> Gas {
        Gas::from_tgas(self.callback_gas_tgas)
    }

    pub(crate) fn purchase_callback_gas(&self) -> Gas {
        Gas::from_tgas(2 * self.callback_gas_tgas)
    }

    pub(crate) fn page_limit(&self, limit: Option<u64>) -> usize {
        usize::try_from(limit.unwrap_or(DEFAULT_PAGE_SIZE).min(self.max_page_size)).unwrap_or(usize::MAX)
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct MarketConfigUpdate {
    pub registry_view_gas_tgas: Option<u64>,
    pub nft_transfer_gas_tgas: Option<u64>,
    pub callback_gas_tgas: Option<u64>,
    pub max_page_size: Option<u64>,
}
