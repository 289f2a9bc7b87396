use crate::*;

#[near]
impl Contract {
    pub fn get_proceeds(&self, account_id: AccountId) -> U128 {
        U128(self.proceeds.balance_of(&account_id))
    }

    pub fn get_escrow_totals(&self) -> EscrowTotals {
        self.proceeds.totals()
    }
}
