//! Property-based tests for key path and case path laws.
//!
//! Key paths:
//!
//! 1. **GetPut**: writing back what was read changes nothing
//! 2. **PutGet**: reading after a write yields the written value
//! 3. **Isolation**: a write leaves every other field untouched
//!
//! Case paths:
//!
//! 1. **EmbedExtract**: `extract(embed(value)) == Some(value)`
//! 2. **ExtractEmbed**: if `extract(root) == Some(value)` then `embed(value) == root`
//! 3. **Disjointness**: a case path never extracts from another variant

use proptest::prelude::*;
use statecraft::paths::{CasePath, IdentityCasePath, IdentityKeyPath, KeyPath};
use statecraft::{case_path, key_path};

// =============================================================================
// Test data types
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Account {
    owner: String,
    balance: i64,
    limits: Limits,
}

#[derive(Clone, PartialEq, Debug)]
struct Limits {
    daily: u32,
    monthly: u32,
}

#[derive(Clone, PartialEq, Debug)]
enum Event {
    Deposit(i64),
    Rename(String),
    Nested(Inner),
}

#[derive(Clone, PartialEq, Debug)]
enum Inner {
    Flag(bool),
    Count(u16),
}

#[derive(Clone, PartialEq, Debug)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

fn account_strategy() -> impl Strategy<Value = Account> {
    ("[a-z]{0,8}", any::<i64>(), any::<u32>(), any::<u32>()).prop_map(
        |(owner, balance, daily, monthly)| Account {
            owner,
            balance,
            limits: Limits { daily, monthly },
        },
    )
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        any::<i64>().prop_map(Event::Deposit),
        "[a-z]{0,8}".prop_map(Event::Rename),
        any::<bool>().prop_map(|flag| Event::Nested(Inner::Flag(flag))),
        any::<u16>().prop_map(|count| Event::Nested(Inner::Count(count))),
    ]
}

// =============================================================================
// Key path laws
// =============================================================================

proptest! {
    #[test]
    fn prop_key_path_get_put(account in account_strategy()) {
        let balance = key_path!(Account, balance);
        let mut updated = account.clone();
        let current = *balance.get(&account);
        balance.replace(&mut updated, current);
        prop_assert_eq!(updated, account);
    }

    #[test]
    fn prop_key_path_put_get(account in account_strategy(), owner in "[a-z]{0,8}") {
        let path = key_path!(Account, owner);
        let mut updated = account;
        path.replace(&mut updated, owner.clone());
        prop_assert_eq!(path.get(&updated), &owner);
    }

    #[test]
    fn prop_nested_key_path_isolation(account in account_strategy(), daily in any::<u32>()) {
        let path = key_path!(Account, limits.daily);
        let mut updated = account.clone();
        *path.get_mut(&mut updated) = daily;

        prop_assert_eq!(updated.limits.daily, daily);
        prop_assert_eq!(updated.limits.monthly, account.limits.monthly);
        prop_assert_eq!(updated.balance, account.balance);
        prop_assert_eq!(updated.owner, account.owner);
    }

    #[test]
    fn prop_composed_key_path_matches_nested_macro(account in account_strategy()) {
        let composed = key_path!(Account, limits).compose(key_path!(Limits, monthly));
        let nested = key_path!(Account, limits.monthly);
        prop_assert_eq!(composed.get(&account), nested.get(&account));
    }

    #[test]
    fn prop_identity_key_path_is_whole_value(account in account_strategy()) {
        prop_assert_eq!(IdentityKeyPath.get(&account), &account);
    }
}

// =============================================================================
// Case path laws
// =============================================================================

proptest! {
    #[test]
    fn prop_case_path_embed_extract(amount in any::<i64>()) {
        let deposit = case_path!(Event, Deposit);
        prop_assert_eq!(deposit.extract(deposit.embed(amount)), Some(amount));
    }

    #[test]
    fn prop_case_path_extract_embed(event in event_strategy()) {
        let rename = case_path!(Event, Rename);
        if let Some(name) = rename.extract(event.clone()) {
            prop_assert_eq!(rename.embed(name), event);
        }
    }

    #[test]
    fn prop_case_paths_are_disjoint(event in event_strategy()) {
        let deposit = case_path!(Event, Deposit);
        let rename = case_path!(Event, Rename);
        let nested = case_path!(Event, Nested);

        let hits = [deposit.matches(&event), rename.matches(&event), nested.matches(&event)];
        prop_assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
    }

    #[test]
    fn prop_composed_case_path_laws(event in event_strategy(), count in any::<u16>()) {
        let path = case_path!(Event, Nested).compose(case_path!(Inner, Count));

        prop_assert_eq!(path.extract(path.embed(count)), Some(count));
        if let Some(value) = path.extract(event.clone()) {
            prop_assert_eq!(path.embed(value), event);
        }
    }

    #[test]
    fn prop_generic_case_path_laws(value in any::<i32>(), text in "[a-z]{1,6}") {
        let left = case_path!(Either<i32, String>, Left);
        let right = case_path!(Either<i32, String>, Right);

        prop_assert_eq!(left.extract(left.embed(value)), Some(value));
        prop_assert_eq!(left.extract(right.embed(text.clone())), None);
        prop_assert_eq!(right.extract(Either::Right(text.clone())), Some(text));
    }

    #[test]
    fn prop_identity_case_path_always_matches(event in event_strategy()) {
        prop_assert_eq!(IdentityCasePath.extract(event.clone()), Some(event.clone()));
        prop_assert_eq!(IdentityCasePath.embed(event.clone()), event);
    }
}
