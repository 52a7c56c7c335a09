use nestconf_store::{MergeStrategy, NestedStore};
use proptest::prelude::*;
use serde_json::{Value, json};

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,4}", 1..4).prop_map(|segments| segments.join("."))
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "\\PC{0,8}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn store_strategy() -> impl Strategy<Value = NestedStore> {
    prop::collection::vec((path_strategy(), scalar_strategy()), 0..8).prop_map(|entries| {
        let mut store = NestedStore::new();
        for (path, value) in entries {
            store.set(&path, value);
        }
        store
    })
}

fn strategy_strategy() -> impl Strategy<Value = MergeStrategy> {
    prop_oneof![
        Just(MergeStrategy::ReplaceIndexed),
        Just(MergeStrategy::MergeIndexed),
    ]
}

proptest! {
    #[test]
    fn test_set_then_get(mut store in store_strategy(), path in path_strategy(), value in scalar_strategy()) {
        store.set(&path, value.clone());

        prop_assert!(store.has(&path));
        prop_assert_eq!(store.get(&path), Some(&value));
    }

    #[test]
    fn test_remove_missing_is_noop(store in store_strategy(), path in path_strategy()) {
        prop_assume!(!store.has(&path));

        let mut removed = store.clone();
        removed.remove(&path);

        prop_assert_eq!(removed, store);
    }

    #[test]
    fn test_remove_makes_path_unresolvable(mut store in store_strategy(), path in path_strategy(), value in scalar_strategy()) {
        store.set(&path, value);
        store.remove(&path);

        prop_assert!(!store.has(&path));
    }

    #[test]
    fn test_default_returned_only_when_missing(store in store_strategy(), path in path_strategy()) {
        let sentinel = json!({"sentinel": true});
        let result = store.get_or(&path, sentinel.clone());

        if store.has(&path) {
            prop_assert_eq!(Some(&result), store.get(&path));
        } else {
            prop_assert_eq!(result, sentinel);
        }
    }

    #[test]
    fn test_clear_empties_store(mut store in store_strategy()) {
        store.clear();

        prop_assert_eq!(store.all(), json!({}));
    }

    #[test]
    fn test_merge_empty_is_identity(store in store_strategy(), strategy in strategy_strategy()) {
        let mut merged = store.clone();
        merged.merge(&NestedStore::new(), None, strategy);

        prop_assert_eq!(merged, store);
    }

    #[test]
    fn test_merge_into_empty_copies(store in store_strategy(), strategy in strategy_strategy()) {
        let mut merged = NestedStore::new();
        merged.merge(&store, None, strategy);

        prop_assert_eq!(merged, store);
    }
}
