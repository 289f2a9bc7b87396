//! Orchestration of the public operations: checks, ledger effects, then registry or funds interactions.

mod list;
mod manage;
mod purchase;
mod withdraw;

use crate::MAX_REGISTRY_RESULT_LEN;
use near_sdk::env;

// Resolution callbacks must not panic, so a missing result counts as failure.
pub(crate) fn awaited_promise_succeeded() -> bool {
    env::promise_results_count() == 1
        && env::promise_result_checked(0, MAX_REGISTRY_RESULT_LEN).is_ok()
}
