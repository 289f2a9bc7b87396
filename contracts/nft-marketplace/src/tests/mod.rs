
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod events_test;
    pub mod list_test;
    pub mod listing_ledger_test;
    pub mod manage_test;
    pub mod proceeds_ledger_test;
    pub mod purchase_test;
    pub mod views_test;
    pub mod withdraw_test;
}
