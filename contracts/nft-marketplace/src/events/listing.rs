use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::LISTING;
use super::builder::EventBuilder;
use crate::Listing;

pub fn emit_listed(listing: &Listing) {
    EventBuilder::new(LISTING, "list", &listing.seller_id)
        .listing(listing)
        .field("price", listing.price)
        .field_opt("approval_id", listing.approval_id)
        .emit();
}

pub fn emit_price_updated(listing: &Listing, old_price: U128) {
    EventBuilder::new(LISTING, "update_price", &listing.seller_id)
        .listing(listing)
        .field("old_price", old_price)
        .field("new_price", listing.price)
        .emit();
}

pub fn emit_canceled(listing: &Listing) {
    EventBuilder::new(LISTING, "cancel", &listing.seller_id)
        .listing(listing)
        .emit();
}

pub fn emit_bought(buyer_id: &AccountId, listing: &Listing, paid: U128) {
    EventBuilder::new(LISTING, "buy", buyer_id)
        .listing(listing)
        .field("buyer_id", buyer_id)
        .field("price", listing.price)
        .field("paid", paid)
        .emit();
}

// `relisted` is false when another listing took the key while the transfer was pending.
pub fn emit_buy_failed(buyer_id: &AccountId, listing: &Listing, paid: U128, relisted: bool) {
    EventBuilder::new(LISTING, "buy_failed", buyer_id)
        .listing(listing)
        .field("buyer_id", buyer_id)
        .field("refunded", paid)
        .field("relisted", relisted)
        .emit();
}
