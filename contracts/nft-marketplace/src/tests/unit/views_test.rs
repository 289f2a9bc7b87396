use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn get_listing_absent_is_none() {
    let contract = new_contract();
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_none());
    assert_eq!(contract.get_proceeds(seller()).0, 0);
}

#[test]
fn supply_counts_follow_listings() {
    let mut contract = new_contract();
    list_verified(&mut contract, &seller(), "1", PRICE);
    list_verified(&mut contract, &seller(), "2", PRICE);
    list_verified(&mut contract, &buyer(), "3", PRICE);

    assert_eq!(contract.get_supply_listings(), 3);
    assert_eq!(contract.get_supply_by_seller(seller()), 2);
    assert_eq!(contract.get_supply_by_seller(buyer()), 1);
    assert_eq!(contract.get_supply_by_collection(nft()), 3);
    assert_eq!(contract.get_supply_by_collection(owner()), 0);
}

#[test]
fn listings_paginate() {
    let mut contract = new_contract();
    for i in 0..7 {
        list_verified(&mut contract, &seller(), &i.to_string(), PRICE);
    }

    assert_eq!(contract.get_listings(None, None).len(), 7);
    assert_eq!(contract.get_listings(Some(5), None).len(), 2);
    assert_eq!(contract.get_listings(Some(0), Some(3)).len(), 3);
    assert!(contract.get_listings(Some(10), None).is_empty());
    assert_eq!(contract.get_listings_by_seller(seller(), Some(1), Some(4)).len(), 4);
    assert_eq!(contract.get_listings_by_collection(nft(), None, Some(2)).len(), 2);
}

#[test]
fn page_limit_clamped_to_config() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(MarketConfigUpdate {
            max_page_size: Some(2),
            ..Default::default()
        })
        .unwrap();
    for i in 0..4 {
        list_verified(&mut contract, &seller(), &i.to_string(), PRICE);
    }

    assert_eq!(contract.get_listings(None, Some(100)).len(), 2);
    assert_eq!(contract.get_listings_by_seller(seller(), None, None).len(), 2);
}

#[test]
fn start_past_end_returns_empty_page() {
    let mut contract = new_contract();
    list_verified(&mut contract, &seller(), TOKEN_ID, PRICE);

    assert!(contract.get_listings(Some(u64::MAX), None).is_empty());
    assert!(contract.get_listings_by_seller(seller(), Some(u64::MAX), None).is_empty());
    assert!(contract.get_listings_by_collection(nft(), Some(u64::MAX), None).is_empty());
    assert_eq!(contract.get_listings(Some(0), None).len(), 1);
}

#[test]
fn sold_listing_leaves_indexes() {
    let mut contract = new_contract();
    list_verified(&mut contract, &seller(), TOKEN_ID, PRICE);
    buy_and_resolve(&mut contract, TOKEN_ID, PRICE, true);

    assert_eq!(contract.get_supply_listings(), 0);
    assert!(contract.get_listings_by_seller(seller(), None, None).is_empty());
    assert!(contract.get_listings_by_collection(nft(), None, None).is_empty());
}
