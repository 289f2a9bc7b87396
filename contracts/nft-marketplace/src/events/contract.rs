use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;
use crate::MarketConfig;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_config_updated(owner_id: &AccountId, config: &MarketConfig) {
    EventBuilder::new(CONTRACT, "config_updated", owner_id)
        .field("registry_view_gas_tgas", config.registry_view_gas_tgas)
        .field("nft_transfer_gas_tgas", config.nft_transfer_gas_tgas)
        .field("callback_gas_tgas", config.callback_gas_tgas)
        .field("max_page_size", config.max_page_size)
        .emit();
}
