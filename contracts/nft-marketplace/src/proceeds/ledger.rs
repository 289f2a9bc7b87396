use near_sdk::store::LookupMap;

use crate::*;

/// Aggregate accounting view; `owed + in_flight` is every yoctoNEAR the
/// contract holds on behalf of buyers and sellers.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct EscrowTotals {
    pub owed: U128,
    pub in_flight: U128,
}

#[near(serializers = [borsh])]
pub struct ProceedsLedger {
    // Zero and absent are equivalent; zeroed entries are dropped.
    balances: LookupMap<AccountId, u128>,
    /// Sum of every entry in `balances`.
    total_owed: u128,
    /// Purchase payments awaiting transfer resolution plus unconfirmed withdrawals.
    in_flight: u128,
}

impl ProceedsLedger {
    pub fn new() -> Self {
        Self {
            balances: LookupMap::new(StorageKey::Proceeds),
            total_owed: 0,
            in_flight: 0,
        }
    }

    pub fn balance_of(&self, seller_id: &AccountId) -> u128 {
        self.balances.get(seller_id).copied().unwrap_or(0)
    }

    /// Adds `amount` to the seller's balance and returns the new balance.
    /// Overflow is an invariant violation and aborts the receipt.
    pub fn credit(&mut self, seller_id: &AccountId, amount: u128) -> u128 {
        let new_balance = self
            .balance_of(seller_id)
            .checked_add(amount)
            .unwrap_or_else(|| env::panic_str("Proceeds balance overflow"));
        self.total_owed = self
            .total_owed
            .checked_add(amount)
            .unwrap_or_else(|| env::panic_str("Total proceeds overflow"));
        self.balances.insert(seller_id.clone(), new_balance);
        new_balance
    }

    /// Reads and zeroes the seller's balance, moving it in flight.
    /// The caller performs the funds transfer only after this returns.
    pub fn withdraw(&mut self, seller_id: &AccountId) -> Result<u128, MarketplaceError> {
        let amount = self.balance_of(seller_id);
        if amount == 0 {
            return Err(MarketplaceError::NoProceeds);
        }
        self.balances.remove(seller_id);
        self.total_owed -= amount;
        self.hold(amount);
        Ok(amount)
    }

    pub fn hold(&mut self, amount: u128) {
        self.in_flight = self
            .in_flight
            .checked_add(amount)
            .unwrap_or_else(|| env::panic_str("In-flight escrow overflow"));
    }

    pub fn release(&mut self, amount: u128) {
        self.in_flight = self
            .in_flight
            .checked_sub(amount)
            .unwrap_or_else(|| env::panic_str("Released more than held in flight"));
    }

    pub fn totals(&self) -> EscrowTotals {
        EscrowTotals {
            owed: U128(self.total_owed),
            in_flight: U128(self.in_flight),
        }
    }
}

impl Default for ProceedsLedger {
    fn default() -> Self {
        Self::new()
    }
}
