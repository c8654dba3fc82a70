use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use shorty_shortener::{DomainCount, DomainCounts, KeyStore, MetricsAggregator, ShortenerError};

/// Runs `f` on `threads` threads released at the same instant and collects the results.
fn race<T, F>(threads: usize, f: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(usize) -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(threads));
    let f = Arc::new(f);

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            let f = Arc::clone(&f);
            thread::spawn(move || {
                barrier.wait();
                f(i)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| handle.join().expect("worker thread panicked"))
        .collect()
}

#[test]
fn concurrent_create_same_url_yields_one_key() {
    let store = Arc::new(KeyStore::new());

    let keys = {
        let store = Arc::clone(&store);
        race(16, move |_| {
            store
                .create_short_url("https://concurrent-test.com")
                .unwrap()
                .short_key()
                .clone()
        })
    };

    let distinct: HashSet<_> = keys.iter().collect();
    assert_eq!(distinct.len(), 1);
    assert_eq!(store.generator().issued(), 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.domain_counts()["concurrent-test.com"], 16);
}

#[test]
fn concurrent_create_distinct_urls_yields_distinct_keys() {
    let store = Arc::new(KeyStore::new());

    let records = {
        let store = Arc::clone(&store);
        race(16, move |i| {
            (0..50)
                .map(|j| {
                    store
                        .create_short_url(&format!("https://site{}.com/page/{}", i, j))
                        .unwrap()
                })
                .collect::<Vec<_>>()
        })
    };

    let records: Vec<_> = records.into_iter().flatten().collect();
    let keys: HashSet<_> = records.iter().map(|r| r.short_key().clone()).collect();
    let urls: HashSet<_> = records.iter().map(|r| r.original_url().to_owned()).collect();

    assert_eq!(records.len(), 800);
    assert_eq!(keys.len(), 800);
    assert_eq!(urls.len(), 800);
    assert_eq!(store.generator().issued(), 800);
    assert_eq!(store.len(), 800);
}

#[test]
fn concurrent_mixed_urls_stay_bijective() {
    let store = Arc::new(KeyStore::new());

    // Every thread shortens the same ten URLs in a different order.
    let records = {
        let store = Arc::clone(&store);
        race(12, move |i| {
            (0..10)
                .map(|j| (i + j) % 10)
                .map(|n| {
                    store
                        .create_short_url(&format!("https://shared.com/{}", n))
                        .unwrap()
                })
                .collect::<Vec<_>>()
        })
    };

    for record in records.iter().flatten() {
        let resolved = store.get(record.short_key().as_str()).unwrap();
        assert_eq!(resolved.original_url(), record.original_url());
    }

    let keys: HashSet<_> = records.iter().flatten().map(|r| r.short_key().clone()).collect();
    assert_eq!(keys.len(), 10);
    assert_eq!(store.generator().issued(), 10);
    assert_eq!(store.domain_counts()["shared.com"], 120);
}

#[test]
fn concurrent_resolve_loses_no_increments() {
    let store = Arc::new(KeyStore::new());
    let key = store
        .create_short_url("https://example.com")
        .unwrap()
        .short_key()
        .clone();

    {
        let store = Arc::clone(&store);
        let key = key.clone();
        race(8, move |_| {
            for _ in 0..250 {
                store.resolve(key.as_str()).unwrap();
            }
        });
    }

    assert_eq!(store.get(key.as_str()).unwrap().access_count(), 2000);
}

#[test]
fn resolve_unknown_key_changes_nothing() {
    let store = KeyStore::new();
    let record = store.create_short_url("https://example.com").unwrap();

    let err = store.resolve("zzz").unwrap_err();

    assert!(matches!(err, ShortenerError::NotFound(_)));
    assert_eq!(store.get(record.short_key().as_str()).unwrap().access_count(), 0);
    assert_eq!(store.generator().issued(), 1);
    assert_eq!(store.domain_counts()["example.com"], 1);
}

#[test]
fn domain_metrics_and_ranking() {
    let store = Arc::new(KeyStore::new());
    for url in [
        "https://a.com",
        "https://a.com/x",
        "https://b.com",
        "https://c.com",
        "https://a.com/y",
    ] {
        store.create_short_url(url).unwrap();
    }

    let counts = store.domain_counts();
    assert_eq!(counts.len(), 3);
    assert_eq!(counts["a.com"], 3);
    assert_eq!(counts["b.com"], 1);
    assert_eq!(counts["c.com"], 1);

    let metrics = MetricsAggregator::<dyn DomainCounts>::new(store);
    assert_eq!(
        metrics.top_domains(),
        vec![
            DomainCount::new("a.com", 3),
            DomainCount::new("b.com", 1),
            DomainCount::new("c.com", 1),
        ]
    );
}

#[test]
fn validation_boundary() {
    let store = KeyStore::new();

    for raw in ["", "not-a-valid-url"] {
        assert!(matches!(
            store.create_short_url(raw),
            Err(ShortenerError::InvalidInput(_))
        ));
    }

    assert!(store.create_short_url("https://example.com").is_ok());
}
