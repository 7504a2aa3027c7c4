//! Property-Based Tests for Cache Module
//!
//! Drives [`CacheStore`] and [`ExpiringCache`] with random operation
//! sequences and checks them against a simple reference model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::cache::{CacheOptions, CacheStore, ExpiringCache, Lookup, ManualClock};

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(10);

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..32)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
    Advance { millis: u64 },
    Sweep,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Add { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => (0u64..6_000).prop_map(|millis| CacheOp::Advance { millis }),
        1 => Just(CacheOp::Sweep),
    ]
}

/// Reference model: value plus the instant it was written
type Model = HashMap<String, (Vec<u8>, Instant)>;

fn model_live<'a>(model: &'a Model, key: &str, now: Instant) -> Option<&'a Vec<u8>> {
    model
        .get(key)
        .filter(|(_, written)| now < *written + TEST_TTL)
        .map(|(value, _)| value)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, a lookup hits exactly when the model
    // holds a write younger than the TTL, and returns that write's value.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model = Model::new();
        let mut now = Instant::now();

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.insert(key.clone(), Bytes::from(value.clone()), now);
                    model.insert(key, (value, now));
                }
                CacheOp::Get { key } => {
                    let expected = model_live(&model, &key, now);
                    match store.lookup(&key, now) {
                        Lookup::Hit(value) => {
                            let got = value.to_vec();
                            prop_assert_eq!(Some(&got), expected);
                        }
                        Lookup::Expired => {
                            prop_assert!(expected.is_none());
                            prop_assert!(store.remove_if_expired(&key, now));
                            model.remove(&key);
                        }
                        Lookup::Missing => {
                            prop_assert!(expected.is_none());
                        }
                    }
                }
                CacheOp::Advance { millis } => {
                    now += Duration::from_millis(millis);
                }
                CacheOp::Sweep => {
                    store.cleanup_expired(now);
                    model.retain(|_, (_, written)| now < *written + TEST_TTL);
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }

    // After a sweep no stored entry is expired.
    #[test]
    fn prop_sweep_leaves_only_live_entries(
        writes in prop::collection::vec((key_strategy(), 0u64..20_000), 1..40),
        sweep_at in 0u64..30_000
    ) {
        let mut store = CacheStore::new(TEST_TTL);
        let start = Instant::now();

        let mut sorted = writes;
        sorted.sort_by_key(|(_, at)| *at);
        for (key, at) in &sorted {
            store.insert(key.clone(), Bytes::new(), start + Duration::from_millis(*at));
        }

        let now = start + Duration::from_millis(sweep_at);
        store.cleanup_expired(now);

        let mut last_write: HashMap<&str, u64> = HashMap::new();
        for (key, at) in &sorted {
            last_write.insert(key.as_str(), *at);
        }
        for (key, at) in last_write {
            let live = now < start + Duration::from_millis(at) + TEST_TTL;
            prop_assert_eq!(store.contains_key(key), live, "key {}", key);
        }
    }

    // The async handle never returns a value after its deadline and always
    // removes what it reports as expired.
    #[test]
    fn prop_handle_never_serves_stale(
        key in key_strategy(),
        value in value_strategy(),
        elapsed_ms in 0u64..20_000
    ) {
        let clock = Arc::new(ManualClock::new());
        let cache = ExpiringCache::with_clock(CacheOptions::new(TEST_TTL), clock.clone()).unwrap();

        tokio_test::block_on(async {
            cache.add(key.clone(), value.clone()).await;
            clock.advance(Duration::from_millis(elapsed_ms));

            let result = cache.get(&key).await;
            if Duration::from_millis(elapsed_ms) < TEST_TTL {
                prop_assert_eq!(result, Some(Bytes::from(value.clone())));
                prop_assert!(cache.contains_key(&key).await);
            } else {
                prop_assert_eq!(result, None);
                prop_assert!(!cache.contains_key(&key).await);
            }
            Ok(())
        })?;
    }
}
