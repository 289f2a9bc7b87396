use crate::external::*;
use crate::guards::check_one_yocto;
use crate::market::awaited_promise_succeeded;
use crate::*;

#[near]
impl Contract {
    /// Panics unless exactly 1 yoctoNEAR is attached. The balance is zeroed
    /// before the transfer is issued.
    #[payable]
    #[handle_result]
    pub fn withdraw_proceeds(&mut self) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;

        let account_id = env::predecessor_account_id();
        let amount = self.proceeds.withdraw(&account_id)?;

        Ok(Promise::new(account_id.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(self.config.callback_gas())
                    .on_withdraw_resolved(account_id, U128(amount)),
            ))
    }

    /// Only callable by this contract. Must not panic; a failed transfer re-credits the balance.
    #[private]
    pub fn on_withdraw_resolved(&mut self, account_id: AccountId, amount: U128) -> U128 {
        self.proceeds.release(amount.0);

        if awaited_promise_succeeded() {
            events::emit_proceeds_withdrawn(&account_id, amount.0);
            return amount;
        }

        let restored_balance = self.proceeds.credit(&account_id, amount.0);
        events::emit_withdraw_failed(&account_id, amount.0, restored_balance);
        U128(0)
    }
}
