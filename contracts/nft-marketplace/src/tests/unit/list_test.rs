use crate::tests::test_utils::*;
use crate::*;
use near_sdk::{PromiseResult, testing_env};

// --- list_item prechecks ---

#[test]
fn list_item_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(seller()).build());
    let err = contract
        .list_item(nft(), TOKEN_ID.into(), U128(PRICE))
        .err().unwrap();
    assert!(matches!(err, MarketplaceError::InsufficientDeposit(_)));
}

#[test]
fn list_item_rejects_empty_token_id() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());
    let err = contract.list_item(nft(), String::new(), U128(PRICE)).err().unwrap();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

#[test]
fn list_item_zero_price_fails_before_registry() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());
    let err = contract.list_item(nft(), TOKEN_ID.into(), U128(0)).err().unwrap();
    assert_eq!(err, MarketplaceError::PriceMustBeAboveZero);
}

#[test]
fn list_item_already_listed_fails_before_registry() {
    let mut contract = new_contract();
    list_verified(&mut contract, &seller(), TOKEN_ID, PRICE);

    testing_env!(context_with_deposit(seller(), 1).build());
    let err = contract
        .list_item(nft(), TOKEN_ID.into(), U128(PRICE))
        .err().unwrap();
    assert!(matches!(err, MarketplaceError::AlreadyListed(_)));
}

#[test]
fn list_item_dispatches_registry_checks() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());
    assert!(contract.list_item(nft(), TOKEN_ID.into(), U128(PRICE)).is_ok());
    // Nothing is written until the registry answers.
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_none());
}

// --- on_listing_verified ---

#[test]
fn verified_listing_is_stored() {
    let mut contract = new_contract();
    let listing = list_verified(&mut contract, &seller(), TOKEN_ID, PRICE);

    assert_eq!(
        listing,
        Listing {
            nft_contract_id: nft(),
            token_id: TOKEN_ID.into(),
            seller_id: seller(),
            price: U128(PRICE),
            approval_id: Some(7),
        }
    );
    assert_eq!(contract.get_listing(nft(), TOKEN_ID.into()), Some(listing));
}

#[test]
fn verified_listing_by_non_owner_fails() {
    let mut contract = new_contract();
    callback_env(registry_results(TOKEN_ID, Some(&buyer()), true));
    let err = contract
        .on_listing_verified(nft(), TOKEN_ID.into(), seller(), U128(PRICE))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::NotOwner(_)));
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_none());
}

#[test]
fn verified_listing_without_approval_fails() {
    let mut contract = new_contract();
    callback_env(registry_results(TOKEN_ID, Some(&seller()), false));
    let err = contract
        .on_listing_verified(nft(), TOKEN_ID.into(), seller(), U128(PRICE))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::NotApprovedForMarketplace(_)));
}

#[test]
fn verified_listing_of_missing_token_fails() {
    let mut contract = new_contract();
    callback_env(registry_results(TOKEN_ID, None, true));
    let err = contract
        .on_listing_verified(nft(), TOKEN_ID.into(), seller(), U128(PRICE))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::NotOwner(_)));
}

#[test]
fn verified_listing_rechecks_already_listed() {
    let mut contract = new_contract();
    list_verified(&mut contract, &seller(), TOKEN_ID, PRICE);

    callback_env(registry_results(TOKEN_ID, Some(&seller()), true));
    let err = contract
        .on_listing_verified(nft(), TOKEN_ID.into(), seller(), U128(2 * PRICE))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::AlreadyListed(_)));
    assert_eq!(contract.get_listing(nft(), TOKEN_ID.into()).unwrap().price.0, PRICE);
}

#[test]
fn verified_listing_registry_failure() {
    let mut contract = new_contract();
    callback_env(vec![
        PromiseResult::Failed,
        PromiseResult::Successful(b"true".to_vec()),
    ]);
    let err = contract
        .on_listing_verified(nft(), TOKEN_ID.into(), seller(), U128(PRICE))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::RegistryUnavailable(_)));
}

#[test]
fn verified_listing_unparseable_registry_answer() {
    let mut contract = new_contract();
    callback_env(vec![
        PromiseResult::Successful(b"not json".to_vec()),
        PromiseResult::Successful(b"true".to_vec()),
    ]);
    let err = contract
        .on_listing_verified(nft(), TOKEN_ID.into(), seller(), U128(PRICE))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::RegistryUnavailable(_)));
}

#[test]
fn verified_listing_needs_both_results() {
    let mut contract = new_contract();
    testing_env!(context(marketplace()).build());
    let err = contract
        .on_listing_verified(nft(), TOKEN_ID.into(), seller(), U128(PRICE))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::RegistryUnavailable(_)));
}

#[test]
fn approval_without_id_is_not_approved() {
    let mut contract = new_contract();
    callback_env(vec![
        PromiseResult::Successful(token_view(TOKEN_ID, &seller(), None)),
        PromiseResult::Successful(b"true".to_vec()),
    ]);
    let err = contract
        .on_listing_verified(nft(), TOKEN_ID.into(), seller(), U128(PRICE))
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::NotApprovedForMarketplace(_)));
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_none());
    assert_eq!(contract.get_supply_listings(), 0);
}

// --- nft_on_approve ---

fn approve_context() {
    let mut builder = context(nft());
    builder.signer_account_id(seller());
    testing_env!(builder.build());
}

#[test]
fn approve_with_price_lists_token() {
    let mut contract = new_contract();
    approve_context();
    let reply = contract
        .nft_on_approve(TOKEN_ID.into(), seller(), 3, r#"{"price":"1000"}"#.into())
        .unwrap();
    assert_eq!(reply, "Listed");

    let listing = contract.get_listing(nft(), TOKEN_ID.into()).unwrap();
    assert_eq!(listing.seller_id, seller());
    assert_eq!(listing.price.0, 1000);
    assert_eq!(listing.approval_id, Some(3));
}

#[test]
fn approve_without_msg_only_acknowledges() {
    let mut contract = new_contract();
    approve_context();
    contract
        .nft_on_approve(TOKEN_ID.into(), seller(), 3, String::new())
        .unwrap();
    assert_eq!(contract.get_supply_listings(), 0);
}

#[test]
fn approve_bad_msg_fails() {
    let mut contract = new_contract();
    approve_context();
    let err = contract
        .nft_on_approve(TOKEN_ID.into(), seller(), 3, "{}".into())
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::InvalidInput(_)));
}

#[test]
fn approve_zero_price_fails() {
    let mut contract = new_contract();
    approve_context();
    let err = contract
        .nft_on_approve(TOKEN_ID.into(), seller(), 3, r#"{"price":"0"}"#.into())
        .unwrap_err();
    assert_eq!(err, MarketplaceError::PriceMustBeAboveZero);
}

#[test]
fn approve_signed_by_someone_else_fails() {
    let mut contract = new_contract();
    let mut builder = context(nft());
    builder.signer_account_id(buyer());
    testing_env!(builder.build());

    let err = contract
        .nft_on_approve(TOKEN_ID.into(), seller(), 3, r#"{"price":"1000"}"#.into())
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::NotOwner(_)));
}

#[test]
fn approve_keys_listing_by_calling_collection() {
    let mut contract = new_contract();
    let other: AccountId = "other-nft.near".parse().unwrap();
    let mut builder = context(other.clone());
    builder.signer_account_id(seller());
    testing_env!(builder.build());

    contract
        .nft_on_approve(TOKEN_ID.into(), seller(), 1, r#"{"price":"5"}"#.into())
        .unwrap();
    assert!(contract.get_listing(other, TOKEN_ID.into()).is_some());
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_none());
}
