// ==============================================
// SHARED STORE CONCURRENCY TESTS (integration)
// ==============================================
//
// Several prefixed caches over one store, driven from multiple threads.
// The decorator adds no locking of its own, so these exercise the store's
// guarantees through the prefix layer.

use std::sync::{Arc, Barrier};
use std::thread;

use prefixkit::prelude::*;

const THREADS: usize = 8;
const KEYS: usize = 200;

#[test]
fn tenants_writing_concurrently_stay_isolated() {
    let parent = Arc::new(MemoryStore::<usize>::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|tenant| {
            let cache = PrefixedCache::new(Arc::clone(&parent), tenant);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..KEYS {
                    cache.write(&i.to_string(), tenant * KEYS + i).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(parent.len(), THREADS * KEYS);
    for tenant in 0..THREADS {
        let cache = PrefixedCache::new(Arc::clone(&parent), tenant);
        for i in 0..KEYS {
            let value = cache.read(&i.to_string()).unwrap();
            assert_eq!(value.as_deref(), Some(&(tenant * KEYS + i)));
        }
    }
}

#[test]
fn one_cache_shared_across_threads() {
    let cache = Arc::new(
        PrefixedCacheBuilder::<usize>::new()
            .store("memory_store")
            .prefix(Symbol::new("shared"))
            .build()
            .unwrap(),
    );
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let key = format!("t{t}");
                cache.write(&key, t).unwrap();
                assert_eq!(cache.read(&key).unwrap().as_deref(), Some(&t));
                assert!(cache.delete(&key).unwrap());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..THREADS {
        assert!(!cache.exists(&format!("t{t}")).unwrap());
    }
}
