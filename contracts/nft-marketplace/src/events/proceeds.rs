use near_sdk::AccountId;

use super::PROCEEDS;
use super::builder::EventBuilder;

pub fn emit_proceeds_credited(seller_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(PROCEEDS, "credit", seller_id)
        .field("account_id", seller_id)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}

pub fn emit_proceeds_withdrawn(account_id: &AccountId, amount: u128) {
    EventBuilder::new(PROCEEDS, "withdraw", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_withdraw_failed(account_id: &AccountId, amount: u128, restored_balance: u128) {
    EventBuilder::new(PROCEEDS, "withdraw_failed", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .field("restored_balance", restored_balance)
        .emit();
}

pub fn emit_refund_failed(buyer_id: &AccountId, amount: u128, new_balance: u128) {
    EventBuilder::new(PROCEEDS, "refund_failed", buyer_id)
        .field("account_id", buyer_id)
        .field("amount", amount)
        .field("new_balance", new_balance)
        .emit();
}
